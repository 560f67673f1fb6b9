/*!
 * External process execution for automation scripts.
 *
 * Placers hand a program name and its arguments to a [`ProcessRunner`] and
 * get back the captured output. The real implementation blocks on
 * `std::process::Command`; `mock` provides a scripted stand-in for tests.
 */

use log::debug;
use std::fmt::Debug;
use std::io;
use std::process::Command;

pub mod mock;

pub use self::mock::MockRunner;

/// Captured result of one process execution
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionOutput {
    /// Exit code, `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutput {
    /// Output of a process that exited with code 0
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a process that exited with `status`
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an external program to completion
///
/// There is no timeout; callers that need one must enforce it themselves.
pub trait ProcessRunner: Send + Sync + Debug {
    /// Run `program` with `args`, capturing stdout and stderr.
    ///
    /// # Returns
    /// * `Err` only when the process could not be started
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ExecutionOutput>;
}

/// Runner backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ExecutionOutput> {
        debug!("Running {} with {} argument(s)", program, args.len());

        let output = Command::new(program).args(args).output()?;

        Ok(ExecutionOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
