//! Error types for the `peopleinspace-models` crate.
//!
//! All fallible constructors and `TryFrom` implementations in this crate
//! return variants of [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A person name was empty or only whitespace.
    #[error("invalid person name \"{value}\": {reason}")]
    InvalidPersonName {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A coordinate could not be read as a finite decimal number.
    #[error("invalid coordinate \"{value}\": {reason}")]
    InvalidCoordinate {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A route path did not match any known screen.
    #[error("unknown route \"{path}\"")]
    UnknownRoute {
        /// The path that could not be resolved.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_person_name() {
        let err = ModelError::InvalidPersonName {
            value: "  ".into(),
            reason: "must not be blank".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid person name \"  \": must not be blank"
        );
    }

    #[test]
    fn error_display_coordinate() {
        let err = ModelError::InvalidCoordinate {
            value: "north".into(),
            reason: "not a decimal number".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinate \"north\": not a decimal number"
        );
    }

    #[test]
    fn error_display_unknown_route() {
        let err = ModelError::UnknownRoute {
            path: "Settings".into(),
        };
        assert_eq!(err.to_string(), "unknown route \"Settings\"");
    }
}
