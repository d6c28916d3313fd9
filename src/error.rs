use thiserror::Error;

/// Errors returned by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProtectionError {
    /// A stored password digest was not 1-4 hex digits.
    #[error("invalid legacy password hash {value:?}; expected 1-4 hex digits")]
    InvalidPasswordHash { value: String },
}
