use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a row-level diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FieldCountMismatch,
    PatternMismatch,
    DuplicateValue,
}

/// A row-level diagnostic produced while validating one record.
///
/// `line` is 1-based and counts the header as line 1, so the first data
/// record is line 2. `column` is a best-effort 1-based offset: the first
/// occurrence of the trimmed value inside the raw line (0 when the value
/// cannot be located). It is an approximation, not an exact field offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub kind: ErrorKind,
    pub value: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::FieldCountMismatch => {
                write!(f, "Line {}: Incorrect number of fields.", self.line)
            }
            ErrorKind::PatternMismatch => write!(
                f,
                "Line {}: Invalid {} format at column {}. Value: '{}'",
                self.line, self.rule, self.column, self.value
            ),
            ErrorKind::DuplicateValue => write!(
                f,
                "Line {}: Duplicate {} value at column {}. Value: '{}'",
                self.line, self.rule, self.column, self.value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error kind for rules-document parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    MissingField,
    DuplicateRule,
}

/// Produced by [`crate::parse::parse_rules`] when a rules document cannot
/// be materialized into a [`crate::rules::RuleSet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeError {
    pub message: String,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializeError {}

/// A rule whose pattern is not a valid regular expression.
///
/// Raised at first use: only rules bound to a header column ever have
/// their pattern compiled, so a broken pattern on an unbound rule does
/// not fail the run. Fatal when raised — the run produces no report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigError {
    pub rule: String,
    pub pattern: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule '{}': invalid pattern '{}': {}",
            self.rule, self.pattern, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

/// Error kind for input failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputErrorKind {
    Empty,
    Io,
}

/// Produced when the validation input itself is unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputError {
    pub kind: InputErrorKind,
    pub message: String,
}

impl InputError {
    pub fn empty() -> Self {
        InputError {
            kind: InputErrorKind::Empty,
            message: "CSV file is empty.".to_string(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InputError {}

/// Combined fatal error for a validation run.
///
/// Row-level diagnostics never appear here; they are accumulated inside
/// [`crate::report::Report::Failure`]. This channel exists so a caller can
/// tell "my data is wrong" apart from "my rules are broken".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    Input(InputError),
    Config(ConfigError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Input(e) => write!(f, "Input error: {}", e),
            CheckError::Config(e) => write!(f, "Rule configuration error: {}", e),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<InputError> for CheckError {
    fn from(e: InputError) -> Self {
        CheckError::Input(e)
    }
}

impl From<ConfigError> for CheckError {
    fn from(e: ConfigError) -> Self {
        CheckError::Config(e)
    }
}
