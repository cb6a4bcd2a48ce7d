//! Common error infrastructure for game-core.
//!
//! Rule rejections (`SessionError`) live in [`crate::action`] next to the
//! actions they validate; configuration errors live in [`crate::config`].

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was legal in shape but not right now (wrong turn, wrong
    /// phase, target out of reach). The same client may retry later.
    Recoverable,

    /// The request can never succeed as written (unknown actor, broken path).
    Validation,

    /// The session cannot progress any further.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Useful for metrics, logs and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
