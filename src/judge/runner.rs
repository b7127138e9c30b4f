//! Stage runner - Orchestrates generate, execute, check

use crate::config::JudgeConfig;
use crate::judge::executor::{ExecutionOutput, ProgramRunner};
use crate::judge::stage::StageTest;
use crate::judge::testcase::TestCase;
use crate::judge::verdict::{CheckResult, StageResult, TestCaseResult};

/// Runs every test case of a stage against a program
pub struct StageRunner {
    config: JudgeConfig,
}

impl StageRunner {
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    /// Judge `runner` on `stage`, stopping at the first failing test case
    pub async fn run<S, R>(&self, stage: &S, runner: &R) -> StageResult
    where
        S: StageTest + ?Sized,
        R: ProgramRunner + ?Sized,
    {
        let testcases = stage.generate();
        let total = testcases.len() as u32;
        tracing::info!("Judging stage {} with {} test case(s)", stage.name(), total);

        let mut results = Vec::with_capacity(testcases.len());

        for (idx, testcase) in testcases.iter().enumerate() {
            let number = idx as u32 + 1;
            tracing::debug!(
                "Test #{}: stdin {:?}, args {:?}",
                number,
                testcase.stdin_preview(40),
                testcase.args
            );

            let result = match runner.run(testcase).await {
                Ok(output) => self.judge_output(stage, number, testcase, &output),
                Err(e) => {
                    tracing::error!("Judge error on test #{}: {}", number, e);
                    TestCaseResult::judge_error(number, e.to_string())
                }
            };

            tracing::info!(
                "Test #{}: {} in {} ms",
                number,
                result.verdict,
                result.time_ms
            );

            let failed = result.verdict.is_failure();
            results.push(result);
            if failed {
                break;
            }
        }

        StageResult::from_testcases(results, total)
    }

    fn judge_output<S>(
        &self,
        stage: &S,
        number: u32,
        testcase: &TestCase,
        output: &ExecutionOutput,
    ) -> TestCaseResult
    where
        S: StageTest + ?Sized,
    {
        if output.timed_out {
            return TestCaseResult::time_limit_exceeded(number, self.config.time_limit_ms);
        }

        if output.output_limit_exceeded
            || output.stdout.len() as u64 > self.config.output_limit_bytes
        {
            return TestCaseResult::output_limit_exceeded(
                number,
                output.time_ms,
                self.config.output_limit_bytes,
            );
        }

        if !output.success() {
            let message = match output.exit_code {
                Some(code) => format!("Program exited with code {}", code),
                None => "Program was terminated by a signal".to_string(),
            };
            let stderr = output.stderr.trim();
            let message = if stderr.is_empty() {
                message
            } else {
                format!("{}\n\n{}", message, stderr)
            };
            return TestCaseResult::runtime_error(number, output.time_ms, output.exit_code, message);
        }

        match stage.check(&output.stdout, testcase.clue.as_deref()) {
            CheckResult::Correct => TestCaseResult::accepted(number, output.time_ms),
            CheckResult::Wrong(feedback) => {
                TestCaseResult::wrong_answer(number, output.time_ms, feedback)
            }
        }
    }
}
