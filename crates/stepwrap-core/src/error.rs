use thiserror::Error;

/// Where a selection stopped being balanced. Line numbers are 1-based and
/// relative to the first line of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A closing marker was found while no opening marker was pending.
    UnmatchedClosing { line: usize },
    /// An opening marker was never closed before the selection ended.
    UnclosedOpening { line: usize },
}

impl std::fmt::Display for Imbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosing { line } => {
                write!(f, "closing marker on line {line} has no matching opening")
            }
            Self::UnclosedOpening { line } => {
                write!(f, "opening marker on line {line} is never closed")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StepwrapError {
    #[error(
        "The selection is unbalanced ({0}). Select a complete, balanced set of one or more wrapped blocks and try again."
    )]
    UnbalancedSelection(Imbalance),

    #[error("Malformed wrapper template: {0}")]
    MalformedTemplate(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StepwrapError>;
