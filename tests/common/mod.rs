use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the compiled cardctl binary
pub fn cardctl_binary() -> String {
    let binary_path = if cfg!(debug_assertions) {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/cardctl")
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/release/cardctl")
    };

    if std::path::Path::new(binary_path).exists() {
        binary_path.to_string()
    } else {
        concat!(env!("CARGO_MANIFEST_DIR"), "/target/debug/cardctl").to_string()
    }
}

/// Helper struct to run cardctl commands in an isolated temp directory
pub struct CardctlTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl CardctlTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        CardctlTest {
            temp_dir,
            binary_path: cardctl_binary(),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables set on the child process.
    ///
    /// `CARDCTL_API_URL` from the outer environment is always removed so a
    /// developer's shell configuration cannot leak into assertions.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("CARDCTL_API_URL");
        for (key, value) in env {
            command.env(key, value);
        }
        command.output().expect("Failed to execute cardctl command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".cardctl").join("config.yaml")
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}
