//! Verdict types and determination logic

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of a checker on one reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Correct,
    Wrong(String),
}

impl CheckResult {
    pub fn correct() -> Self {
        CheckResult::Correct
    }

    pub fn wrong(feedback: impl Into<String>) -> Self {
        CheckResult::Wrong(feedback.into())
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, CheckResult::Correct)
    }

    /// Feedback for a wrong reply, `None` when correct
    pub fn feedback(&self) -> Option<&str> {
        match self {
            CheckResult::Correct => None,
            CheckResult::Wrong(feedback) => Some(feedback),
        }
    }
}

/// Verdict for a single test case or a whole stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Passed the checker
    Accepted,
    /// Output does not match expected
    WrongAnswer,
    /// Exceeded time limit
    TimeLimitExceeded,
    /// Program crashed or non-zero exit
    RuntimeError,
    /// Output too large
    OutputLimitExceeded,
    /// Internal judge error
    JudgeError,
}

impl Verdict {
    /// Get short code for verdict
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer => "WA",
            Verdict::TimeLimitExceeded => "TLE",
            Verdict::RuntimeError => "RE",
            Verdict::OutputLimitExceeded => "OLE",
            Verdict::JudgeError => "JE",
        }
    }

    /// Human readable label, as used in report headlines
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "Wrong answer",
            Verdict::TimeLimitExceeded => "Time limit exceeded",
            Verdict::RuntimeError => "Error",
            Verdict::OutputLimitExceeded => "Output limit exceeded",
            Verdict::JudgeError => "Judge error",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of executing a single test case
#[derive(Debug, Clone, Serialize)]
pub struct TestCaseResult {
    /// Test case number (1-indexed)
    pub testcase_number: u32,

    pub verdict: Verdict,

    /// Wall-clock time in milliseconds
    pub time_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,

    /// Error message (for RE, TLE, OLE, JE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Checker feedback (for WA)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker_comment: Option<String>,
}

impl TestCaseResult {
    /// Create a new accepted result
    pub fn accepted(testcase_number: u32, time_ms: u64) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::Accepted,
            time_ms,
            exit_code: Some(0),
            error_message: None,
            checker_comment: None,
        }
    }

    /// Create a wrong answer result
    pub fn wrong_answer(testcase_number: u32, time_ms: u64, comment: String) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::WrongAnswer,
            time_ms,
            exit_code: Some(0),
            error_message: None,
            checker_comment: Some(comment),
        }
    }

    /// Create a time limit exceeded result
    pub fn time_limit_exceeded(testcase_number: u32, time_limit_ms: u64) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::TimeLimitExceeded,
            time_ms: time_limit_ms,
            exit_code: None,
            error_message: Some(format!(
                "Program did not finish within {} ms",
                time_limit_ms
            )),
            checker_comment: None,
        }
    }

    /// Create a runtime error result
    pub fn runtime_error(
        testcase_number: u32,
        time_ms: u64,
        exit_code: Option<i32>,
        message: String,
    ) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::RuntimeError,
            time_ms,
            exit_code,
            error_message: Some(message),
            checker_comment: None,
        }
    }

    /// Create an output limit exceeded result
    pub fn output_limit_exceeded(testcase_number: u32, time_ms: u64, limit_bytes: u64) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::OutputLimitExceeded,
            time_ms,
            exit_code: None,
            error_message: Some(format!("Program printed more than {} bytes", limit_bytes)),
            checker_comment: None,
        }
    }

    /// Create a judge error result
    pub fn judge_error(testcase_number: u32, message: String) -> Self {
        Self {
            testcase_number,
            verdict: Verdict::JudgeError,
            time_ms: 0,
            exit_code: None,
            error_message: Some(message),
            checker_comment: None,
        }
    }

    /// The message a student should see for this test case, if any
    pub fn message(&self) -> Option<&str> {
        self.checker_comment
            .as_deref()
            .or(self.error_message.as_deref())
    }
}

/// Aggregated result for an entire stage
#[derive(Debug, Clone, Serialize)]
pub struct StageResult {
    pub run_id: Uuid,

    pub judged_at: DateTime<Utc>,

    /// Overall verdict
    pub verdict: Verdict,

    pub testcase_results: Vec<TestCaseResult>,

    pub passed_count: u32,

    /// Number of generated test cases, including ones skipped after a failure
    pub total_count: u32,

    pub max_time_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_failure: Option<u32>,
}

impl StageResult {
    /// Create stage result from test case results
    pub fn from_testcases(results: Vec<TestCaseResult>, total_count: u32) -> Self {
        let passed_count = results
            .iter()
            .filter(|r| r.verdict == Verdict::Accepted)
            .count() as u32;

        let max_time_ms = results.iter().map(|r| r.time_ms).max().unwrap_or(0);

        let first_failure = results.iter().find(|r| r.verdict.is_failure());

        // An empty stage is a broken stage, not a pass
        let verdict = match first_failure {
            Some(failed) => failed.verdict,
            None if total_count > 0 && passed_count == total_count => Verdict::Accepted,
            None => Verdict::JudgeError,
        };

        Self {
            run_id: Uuid::new_v4(),
            judged_at: Utc::now(),
            verdict,
            first_failure: first_failure.map(|r| r.testcase_number),
            testcase_results: results,
            passed_count,
            total_count,
            max_time_ms,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }

    /// Result for the first failing test case
    pub fn failure(&self) -> Option<&TestCaseResult> {
        let number = self.first_failure?;
        self.testcase_results
            .iter()
            .find(|r| r.testcase_number == number)
    }
}
