//! Stage judge
//!
//! Runs a program once per generated test case, checks its reply and
//! aggregates the verdicts into a [`StageResult`].

pub mod executor;
pub mod runner;
pub mod stage;
pub mod testcase;
pub mod verdict;

pub use executor::{ExecutionOutput, ProcessRunner, ProgramRunner};
pub use runner::StageRunner;
pub use stage::{ParkingStageTest, StageTest};
pub use testcase::TestCase;
pub use verdict::{CheckResult, StageResult, TestCaseResult, Verdict};
