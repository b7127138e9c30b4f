//! Test case definition

/// One invocation of the program under test
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    /// Text written to the program's stdin before it is closed
    pub stdin: String,
    /// Extra arguments appended after the program's own
    pub args: Vec<String>,
    /// Opaque hint handed back to the checker
    pub clue: Option<String>,
}

impl TestCase {
    /// A run with no input, no extra arguments and no clue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Get a preview of the input (truncated)
    pub fn stdin_preview(&self, max_len: usize) -> String {
        match self.stdin.char_indices().nth(max_len) {
            None => self.stdin.clone(),
            Some((idx, _)) => format!("{}...", &self.stdin[..idx]),
        }
    }
}
