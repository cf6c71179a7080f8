//! Error types for `netbook-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact name must not be empty")]
  EmptyName,

  #[error("contact not found: {0}")]
  ContactNotFound(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Classification ──────────────────────────────────────────────────────────

/// The three failure classes every store operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A required field was empty or malformed. Never retried.
  Validation,
  /// The referenced contact does not exist.
  NotFound,
  /// The backing medium was unreadable, corrupt, or a write failed.
  Storage,
}

/// Implemented by every [`ContactStore`](crate::store::ContactStore) error so
/// callers can branch on the failure class without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Self::EmptyName => ErrorKind::Validation,
      Self::ContactNotFound(_) => ErrorKind::NotFound,
    }
  }
}
