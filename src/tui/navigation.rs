//! Shared navigation helpers for scrollable lists.
//!
//! Selection and scroll offset are tracked as a pair of indices into the
//! filtered row list. The offset never moves past the selection, so the
//! selected row stays inside the visible window.

/// Move the selection down one row, scrolling when it would leave the window.
pub fn scroll_down(
    selected_index: &mut usize,
    scroll_offset: &mut usize,
    row_count: usize,
    visible_rows: usize,
) {
    if row_count == 0 {
        return;
    }
    if *selected_index + 1 < row_count {
        *selected_index += 1;
        if *selected_index >= *scroll_offset + visible_rows.max(1) {
            *scroll_offset = selected_index.saturating_sub(visible_rows.saturating_sub(1));
        }
    }
}

/// Move the selection up one row, scrolling when it would leave the window.
pub fn scroll_up(selected_index: &mut usize, scroll_offset: &mut usize) {
    if *selected_index > 0 {
        *selected_index -= 1;
        if *selected_index < *scroll_offset {
            *scroll_offset = *selected_index;
        }
    }
}

/// Jump to the first row.
pub fn scroll_to_top(selected_index: &mut usize, scroll_offset: &mut usize) {
    *selected_index = 0;
    *scroll_offset = 0;
}

/// Jump to the last row.
pub fn scroll_to_bottom(
    selected_index: &mut usize,
    scroll_offset: &mut usize,
    row_count: usize,
    visible_rows: usize,
) {
    if row_count == 0 {
        return;
    }
    *selected_index = row_count - 1;
    *scroll_offset = row_count.saturating_sub(visible_rows.max(1));
}

/// Move the selection a full page down.
pub fn page_down(
    selected_index: &mut usize,
    scroll_offset: &mut usize,
    row_count: usize,
    visible_rows: usize,
) {
    if row_count == 0 {
        return;
    }
    let step = visible_rows.max(1);
    *selected_index = (*selected_index + step).min(row_count - 1);
    if *selected_index >= *scroll_offset + step {
        *scroll_offset = selected_index.saturating_sub(step - 1);
    }
}

/// Move the selection a full page up.
pub fn page_up(selected_index: &mut usize, scroll_offset: &mut usize, visible_rows: usize) {
    let step = visible_rows.max(1);
    *selected_index = selected_index.saturating_sub(step);
    if *selected_index < *scroll_offset {
        *scroll_offset = *selected_index;
    }
}

/// Pull the selection and offset back inside a list that shrank.
pub fn clamp_to_len(selected_index: &mut usize, scroll_offset: &mut usize, row_count: usize) {
    if row_count == 0 {
        *selected_index = 0;
        *scroll_offset = 0;
        return;
    }
    if *selected_index >= row_count {
        *selected_index = row_count - 1;
    }
    if *scroll_offset > *selected_index {
        *scroll_offset = *selected_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_moves_selection() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_down(&mut selected, &mut offset, 10, 5);
        assert_eq!(selected, 1);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_down_at_bottom_stays() {
        let mut selected = 9;
        let mut offset = 5;
        scroll_down(&mut selected, &mut offset, 10, 5);
        assert_eq!(selected, 9);
        assert_eq!(offset, 5);
    }

    #[test]
    fn test_scroll_down_advances_window() {
        let mut selected = 4;
        let mut offset = 0;
        scroll_down(&mut selected, &mut offset, 10, 5);
        assert_eq!(selected, 5);
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_scroll_down_empty_list() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_down(&mut selected, &mut offset, 0, 5);
        assert_eq!(selected, 0);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_down_zero_height_window() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_down(&mut selected, &mut offset, 3, 0);
        assert_eq!(selected, 1);
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_scroll_up_moves_selection() {
        let mut selected = 3;
        let mut offset = 0;
        scroll_up(&mut selected, &mut offset);
        assert_eq!(selected, 2);
    }

    #[test]
    fn test_scroll_up_at_top_stays() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_up(&mut selected, &mut offset);
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_scroll_up_pulls_window_back() {
        let mut selected = 5;
        let mut offset = 5;
        scroll_up(&mut selected, &mut offset);
        assert_eq!(selected, 4);
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_scroll_to_bottom_shows_last_page() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_to_bottom(&mut selected, &mut offset, 10, 4);
        assert_eq!(selected, 9);
        assert_eq!(offset, 6);
    }

    #[test]
    fn test_scroll_to_bottom_short_list_keeps_offset_zero() {
        let mut selected = 0;
        let mut offset = 0;
        scroll_to_bottom(&mut selected, &mut offset, 3, 10);
        assert_eq!(selected, 2);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_page_down_jumps_full_page() {
        let mut selected = 0;
        let mut offset = 0;
        page_down(&mut selected, &mut offset, 20, 5);
        assert_eq!(selected, 5);
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_page_down_clamps_to_last_row() {
        let mut selected = 18;
        let mut offset = 15;
        page_down(&mut selected, &mut offset, 20, 5);
        assert_eq!(selected, 19);
        assert_eq!(offset, 15);
    }

    #[test]
    fn test_page_up_jumps_full_page() {
        let mut selected = 12;
        let mut offset = 10;
        page_up(&mut selected, &mut offset, 5);
        assert_eq!(selected, 7);
        assert_eq!(offset, 7);
    }

    #[test]
    fn test_page_up_stops_at_top() {
        let mut selected = 2;
        let mut offset = 0;
        page_up(&mut selected, &mut offset, 5);
        assert_eq!(selected, 0);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selected = 9;
        let mut offset = 8;
        clamp_to_len(&mut selected, &mut offset, 4);
        assert_eq!(selected, 3);
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_clamp_empty_list_resets() {
        let mut selected = 5;
        let mut offset = 3;
        clamp_to_len(&mut selected, &mut offset, 0);
        assert_eq!(selected, 0);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_clamp_leaves_valid_state_alone() {
        let mut selected = 2;
        let mut offset = 1;
        clamp_to_len(&mut selected, &mut offset, 10);
        assert_eq!(selected, 2);
        assert_eq!(offset, 1);
    }
}
