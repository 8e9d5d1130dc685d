use jiff::Zoned;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

pub const CONFIG_DIR: &str = ".cardctl";

/// A card row as held by the client between fetches.
///
/// `id` is assigned by the card service and never changes locally.
/// `created_at` is a display string, formatted once when the record is
/// built and never parsed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: u64,
    pub name: String,
    pub bank_name: String,
    pub enabled: bool,
    pub created_at: String,
}

/// Modal working copy of a record.
///
/// Field editing only ever touches `name`, `bank_name` and `enabled`;
/// `created_at` rides along so an edited record keeps its original date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    pub name: String,
    pub bank_name: String,
    pub enabled: bool,
    pub created_at: String,
}

impl CardDraft {
    /// Draft for the create modal. New cards start enabled.
    pub fn new_card() -> Self {
        CardDraft {
            enabled: true,
            ..CardDraft::default()
        }
    }

    /// Draft prefilled from an existing record for the edit modal.
    pub fn from_record(record: &CardRecord) -> Self {
        CardDraft {
            name: record.name.clone(),
            bank_name: record.bank_name.clone(),
            enabled: record.enabled,
            created_at: record.created_at.clone(),
        }
    }

    /// Rebuild a full record from this draft and a known id.
    pub fn into_record(self, id: u64) -> CardRecord {
        CardRecord {
            id,
            name: self.name,
            bank_name: self.bank_name,
            enabled: self.enabled,
            created_at: self.created_at,
        }
    }
}

/// Format a service timestamp for display as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps (converted to their UTC calendar date) and
/// bare `YYYY-MM-DD` dates. Anything unparseable is displayed verbatim
/// rather than dropped.
pub fn format_display_date(raw: &str) -> String {
    if let Ok(ts) = raw.parse::<jiff::Timestamp>() {
        return format_date(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(date) = raw.parse::<Date>() {
        return format_date(date);
    }
    raw.to_string()
}

/// Display date for records created in this session, from the local clock.
pub fn today_display_date() -> String {
    format_date(Zoned::now().date())
}

fn format_date(date: Date) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
