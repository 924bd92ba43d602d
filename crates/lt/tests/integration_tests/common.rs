use std::{
    collections::HashMap,
    io::Write,
    process::{Command, Stdio},
};

use camino::Utf8PathBuf;
use lt_file::TempDirectory;

pub struct LtTest {
    pub temp_dir: TempDirectory,
    pub cwd: Utf8PathBuf,
    pub env: HashMap<String, String>,
}

impl LtTest {
    pub fn new() -> Self {
        let temp_dir = TempDirectory::new().expect("Failed to create temporary directory");
        let cwd = temp_dir.path().into();

        Self {
            temp_dir,
            cwd,
            env: HashMap::new(),
        }
    }

    pub fn lt(&self, args: &[&str]) -> LtOutput {
        let mut cmd = self.lt_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute lt command");
        LtOutput::new(output)
    }

    pub fn lt_with_stdin(&self, args: &[&str], stdin: &str) -> LtOutput {
        let mut cmd = self.lt_command();
        cmd.args(args).stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn lt command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write to lt stdin");

        let output = child.wait_with_output().expect("Failed to wait for lt");
        LtOutput::new(output)
    }

    pub fn lt_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lt"));
        cmd.current_dir(&self.cwd);
        cmd.env_clear().envs(&self.env);
        cmd
    }
}

pub struct LtOutput {
    pub output: std::process::Output,
}

impl LtOutput {
    pub fn new(output: std::process::Output) -> Self {
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
