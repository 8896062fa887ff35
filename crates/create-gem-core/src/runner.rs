//! Executes the assembled `bundle gem` command, or prints it in dry-run mode

use crate::error::{Error, Result};
use std::io::Write;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

pub struct Runner<W: Write> {
    out: W,
    dry_run: bool,
}

impl Runner<std::io::Stdout> {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(std::io::stdout(), dry_run)
    }
}

impl<W: Write> Runner<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run `command` with inherited stdio, failing on a non-zero exit
    pub async fn run(&mut self, command: &[String]) -> Result<()> {
        let shown = command.join(" ");

        if self.dry_run {
            writeln!(self.out, "{}", shown)?;
            return Ok(());
        }

        let Some((program, args)) = command.split_first() else {
            return Err(Error::Internal("empty command".to_string()));
        };

        tracing::debug!(command = %shown, "running");
        let status = TokioCommand::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "spawn failed");
                Error::CommandFailed(shown.clone())
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!(code = ?status.code(), "command exited unsuccessfully");
            Err(Error::CommandFailed(shown))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_dry_run_prints_command() {
        let mut out = Vec::new();
        Runner::new(&mut out, true)
            .run(&command(&["bundle", "gem", "demo", "--exe"]))
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bundle gem demo --exe\n");
    }

    #[tokio::test]
    async fn test_failed_command_reports_it() {
        let mut runner = Runner::new(Vec::new(), false);
        let err = runner
            .run(&command(&["definitely-not-a-real-program", "gem"]))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Command failed: definitely-not-a-real-program gem"
        );
    }

    #[tokio::test]
    async fn test_empty_command_is_internal_error() {
        let mut runner = Runner::new(Vec::new(), false);
        assert!(matches!(runner.run(&[]).await, Err(Error::Internal(_))));
    }
}
