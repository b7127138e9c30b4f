//! Stage tests: what to run and how to judge the reply

use crate::constants::{INTRO_EXPECTED_TEXT, INTRO_WRONG_TEXT_FEEDBACK};
use crate::judge::testcase::TestCase;
use crate::judge::verdict::CheckResult;
use crate::utils::text::trim_control;

/// A gradable stage: a set of test cases and a checker for their replies.
pub trait StageTest: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Test cases to run, in order
    fn generate(&self) -> Vec<TestCase>;

    /// Judge one captured stdout
    fn check(&self, reply: &str, clue: Option<&str>) -> CheckResult;
}

/// Stage one of the Parking Lot course: print three fixed lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkingStageTest;

impl StageTest for ParkingStageTest {
    fn name(&self) -> &str {
        "parking-lot/intro"
    }

    fn generate(&self) -> Vec<TestCase> {
        vec![TestCase::new()]
    }

    fn check(&self, reply: &str, _clue: Option<&str>) -> CheckResult {
        if trim_control(reply) != trim_control(INTRO_EXPECTED_TEXT) {
            CheckResult::wrong(INTRO_WRONG_TEXT_FEEDBACK)
        } else {
            CheckResult::correct()
        }
    }
}
