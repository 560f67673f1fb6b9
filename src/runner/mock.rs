/*!
 * Mock process runner for testing.
 *
 * - `MockRunner::succeeding()` - Every run exits with status 0
 * - `MockRunner::failing(status, stderr)` - Every run exits non-zero
 * - `MockRunner::unlaunchable(message)` - The process never starts
 *
 * Every invocation is recorded so tests can inspect the generated script
 * or assert that nothing was executed.
 */

use parking_lot::Mutex;
use std::io;

use super::{ExecutionOutput, ProcessRunner};

/// One recorded call to [`ProcessRunner::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Behavior mode for the mock runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Exit with status 0
    Succeed,
    /// Exit with the given status and stderr
    Fail { status: i32, stderr: String },
    /// Fail to start the process
    LaunchError { message: String },
}

/// Mock runner that records invocations
#[derive(Debug)]
pub struct MockRunner {
    behavior: MockBehavior,
    invocations: Mutex<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a new mock runner with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(MockBehavior::Succeed)
    }

    pub fn failing(status: i32, stderr: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail {
            status,
            stderr: stderr.into(),
        })
    }

    pub fn unlaunchable(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::LaunchError {
            message: message.into(),
        })
    }

    /// All calls made so far, oldest first
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().len()
    }

    /// The last argument of the most recent call, which is the script for
    /// `-e` style invocations
    pub fn last_script(&self) -> Option<String> {
        self.invocations
            .lock()
            .last()
            .and_then(|invocation| invocation.args.last().cloned())
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ExecutionOutput> {
        self.invocations.lock().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        match &self.behavior {
            MockBehavior::Succeed => Ok(ExecutionOutput::success("")),
            MockBehavior::Fail { status, stderr } => {
                Ok(ExecutionOutput::failure(*status, stderr.clone()))
            }
            MockBehavior::LaunchError { message } => {
                Err(io::Error::new(io::ErrorKind::NotFound, message.clone()))
            }
        }
    }
}
