use thiserror::Error;

/// Which anchor a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    State,
    Event,
    Sentinel,
    Function,
}

impl Missing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Event => "event",
            Self::Sentinel => "sentinel",
            Self::Function => "function",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound(Missing),
    Structural,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct LslGenError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
}

impl LslGenError {
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(missing: Missing, message: impl Into<String>) -> Self {
        let code = match missing {
            Missing::State => "NOT_FOUND_STATE",
            Missing::Event => "NOT_FOUND_EVENT",
            Missing::Sentinel => "NOT_FOUND_SENTINEL",
            Missing::Function => "NOT_FOUND_FUNCTION",
        };
        Self {
            kind: ErrorKind::NotFound(missing),
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn structural(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Structural,
            code: code.into(),
            message: message.into(),
        }
    }

    /// The missing anchor, when this is a lookup failure.
    pub fn missing(&self) -> Option<Missing> {
        match self.kind {
            ErrorKind::NotFound(missing) => Some(missing),
            _ => None,
        }
    }
}
