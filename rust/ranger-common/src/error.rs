use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn missing_argument(op: impl Into<String>) -> Error {
        Error(ErrorKind::MissingArgument { op: op.into() }.into())
    }

    pub fn zero_step(op: impl Into<String>) -> Error {
        Error(ErrorKind::ZeroStep { op: op.into() }.into())
    }

    pub fn span_too_long(op: impl Into<String>, len: u64) -> Error {
        Error(ErrorKind::SpanTooLong { op: op.into(), len }.into())
    }

    pub fn not_alphabetic(
        op: impl Into<String>,
        argument: impl Into<String>,
        value: char,
    ) -> Error {
        Error(
            ErrorKind::NotAlphabetic {
                op: op.into(),
                argument: argument.into(),
                value,
            }
            .into(),
        )
    }

    pub fn outcome_unavailable() -> Error {
        Error(ErrorKind::OutcomeUnavailable.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{op}: expected at least one argument")]
    MissingArgument { op: String },

    #[error("{op}: step must not be zero")]
    ZeroStep { op: String },

    #[error("{op}: span of {len} values is too long to materialize")]
    SpanTooLong { op: String, len: u64 },

    #[error("{op}: expected an alphabetic character for '{argument}', got {value:?}")]
    NotAlphabetic {
        op: String,
        argument: String,
        value: char,
    },

    #[error("deferred outcome already consumed or abandoned before settlement")]
    OutcomeUnavailable,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_error_kind_access() {
        let err = Error::missing_argument("fill");
        assert!(matches!(err.kind(), ErrorKind::MissingArgument { op } if op == "fill"));
        assert!(matches!(
            err.into_kind(),
            ErrorKind::MissingArgument { .. }
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::zero_step("fill_map").to_string(),
            "fill_map: step must not be zero"
        );
        assert_eq!(
            Error::span_too_long("fill", u64::MAX).to_string(),
            "fill: span of 18446744073709551615 values is too long to materialize"
        );
        assert_eq!(
            Error::not_alphabetic("runes", "start", '1').to_string(),
            "runes: expected an alphabetic character for 'start', got '1'"
        );
    }
}
