use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// The host platform's terminator.
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    /// The convention of the first terminator found in `text`.
    pub fn detect(text: &str) -> Option<Self> {
        let idx = text.find('\n')?;
        if text[..idx].ends_with('\r') {
            Some(Self::CrLf)
        } else {
            Some(Self::Lf)
        }
    }
}

/// How the terminator for a transformation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingPolicy {
    /// Follow the buffer, falling back to the platform terminator.
    #[default]
    Auto,
    Lf,
    CrLf,
}

impl LineEndingPolicy {
    pub fn resolve(&self, buffer: &str) -> LineEnding {
        match self {
            Self::Auto => LineEnding::detect(buffer).unwrap_or_else(LineEnding::native),
            Self::Lf => LineEnding::Lf,
            Self::CrLf => LineEnding::CrLf,
        }
    }
}
