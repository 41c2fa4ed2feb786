use std::fmt::{Display, Formatter};

/// One external CLI call: the program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub tokens: Vec<String>,
}

impl CommandInvocation {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Appends an option followed by its value.
    pub fn push_pair(&mut self, option: &str, value: &str) {
        self.tokens.push(option.to_owned());
        self.tokens.push(value.to_owned());
    }

    pub fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
impl CommandInvocation {
    /// Number of times `token` occurs anywhere in the call.
    pub fn count(&self, token: &str) -> usize {
        self.tokens.iter().filter(|t| *t == token).count()
    }

    /// Value following the first occurrence of `option`, if any.
    pub fn value_of(&self, option: &str) -> Option<&str> {
        self.tokens
            .iter()
            .position(|t| t == option)
            .and_then(|i| self.tokens.get(i + 1))
            .map(String::as_str)
    }
}

impl Display for CommandInvocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// What the executor saw once the child exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    /// Combined stderr and stdout text of a failed run.
    pub error_text: String,
    /// Whatever the program printed on a successful run.
    pub output_text: String,
}

impl ProcessOutput {
    pub fn ok() -> Self {
        Self::ok_with_output(String::new())
    }

    pub fn ok_with_output(output_text: impl Into<String>) -> Self {
        Self {
            success: true,
            error_text: String::new(),
            output_text: output_text.into(),
        }
    }

    pub fn failed(error_text: impl Into<String>) -> Self {
        Self {
            success: false,
            error_text: error_text.into(),
            output_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    DuplicatePriority,
    GenericFailure { error_text: String },
}

/// Terminal state of a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Skipped { missing: &'static str },
    Created { priority: String },
    Failed { priority: String, kind: FailureKind },
}
