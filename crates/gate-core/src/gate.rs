// Rust guideline compliant 2026-10-19

//! The commit gate state machine.
//!
//! The gate runs a strictly sequential procedure:
//!
//! - Checking → ReformatAndReject (format check failed)
//! - Checking → RunTests (format check passed)
//!
//! Both targets are terminal. A drifted tree is reformatted in place, a notice
//! is written, and the run fails with the checker's status. A clean tree runs
//! the test suite, whose status becomes the gate's status.

use crate::notice::write_notice;
use crate::{CommandRunner, Error, ExitStatus, GateConfig, Result};
use termcolor::WriteColor;
use tracing::{debug, info};

/// Position of a gate run in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Running the format check.
    Checking,
    /// Drift detected: reformat, notify, reject.
    ReformatAndReject,
    /// Formatting is clean: run the test suite.
    RunTests,
}

impl GateState {
    /// Computes the state that follows a format check.
    ///
    /// # Arguments
    ///
    /// * `check` - Exit status of the format check
    ///
    /// # Returns
    ///
    /// `RunTests` for a zero status, `ReformatAndReject` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when called on a terminal state.
    pub fn next(self, check: ExitStatus) -> Result<GateState> {
        match self {
            GateState::Checking if check.success() => Ok(GateState::RunTests),
            GateState::Checking => Ok(GateState::ReformatAndReject),
            terminal => Err(Error::InvalidTransition(format!(
                "{:?} is terminal",
                terminal
            ))),
        }
    }

    /// Returns whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GateState::Checking)
    }
}

/// Final result of a gate run that did not abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Formatting was clean and the test suite passed.
    Passed,
    /// Formatting drifted; the tree was reformatted and the commit rejected.
    FormattingDrift {
        /// Status reported by the format check.
        status: ExitStatus,
    },
    /// Formatting was clean but the test suite failed.
    TestsFailed {
        /// Status reported by the test runner.
        status: ExitStatus,
    },
}

impl GateOutcome {
    /// Returns the process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateOutcome::Passed => 0,
            GateOutcome::FormattingDrift { status } | GateOutcome::TestsFailed { status } => {
                status.code()
            }
        }
    }

    /// Returns whether the commit may proceed.
    pub fn is_success(&self) -> bool {
        matches!(self, GateOutcome::Passed)
    }
}

/// Gates a commit on formatting and test success.
pub struct CommitGate<'a, R: CommandRunner> {
    config: &'a GateConfig,
    runner: R,
}

impl<'a, R: CommandRunner> CommitGate<'a, R> {
    /// Creates a gate over the given configuration and runner.
    pub fn new(config: &'a GateConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Runs the gate once.
    ///
    /// # Arguments
    ///
    /// * `out` - Stream receiving the drift notice
    ///
    /// # Returns
    ///
    /// The outcome of the run. Check and test failures are outcomes, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A command cannot be started
    /// - The formatter exits unsuccessfully (no notice is written)
    /// - The notice cannot be written
    pub fn run<W: WriteColor + ?Sized>(&mut self, out: &mut W) -> Result<GateOutcome> {
        let mut state = GateState::Checking;
        let mut check_status = ExitStatus::SUCCESS;

        loop {
            match state {
                GateState::Checking => {
                    check_status = self.runner.run(&self.config.check)?;
                    state = state.next(check_status)?;
                }
                GateState::ReformatAndReject => {
                    info!(status = check_status.code(), "formatting drift detected");
                    let fix_status = self.runner.run(&self.config.fix)?;
                    if !fix_status.success() {
                        return Err(Error::ReformatFailed {
                            command: self.config.fix.to_string(),
                            status: fix_status,
                        });
                    }
                    debug!(command = %self.config.fix, "formatter applied fixes");
                    write_notice(out, &self.config.notice)?;
                    return Ok(GateOutcome::FormattingDrift {
                        status: check_status,
                    });
                }
                GateState::RunTests => {
                    info!("formatting clean, running tests");
                    let test_status = self.runner.run(&self.config.test)?;
                    if test_status.success() {
                        return Ok(GateOutcome::Passed);
                    }
                    info!(status = test_status.code(), "tests failed");
                    return Ok(GateOutcome::TestsFailed {
                        status: test_status,
                    });
                }
            }
        }
    }
}
