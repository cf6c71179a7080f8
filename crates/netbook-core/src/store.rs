//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `netbook-store-sqlite`).
//! The [`Directory`](crate::directory::Directory) and any presentation code
//! depend on this abstraction, not on a concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  StoreError,
  contact::{Contact, ContactPatch, NewContact},
};

/// Durable CRUD over [`Contact`] records.
///
/// Every mutating method commits durably before its future resolves; a
/// successful return means the change survives a crash immediately after.
/// Each call is atomic: it either commits fully or leaves the store as it
/// was.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait ContactStore: Send + Sync {
  type Error: StoreError;

  /// All contacts, ordered by name (case-insensitive), ties broken by
  /// insertion order. Names compare as lowercased code points, so accented
  /// letters sort after every ASCII letter ("Émile" after "zoe").
  fn load_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact. The store assigns `contact_id` and `date_added`.
  ///
  /// Fails with a validation error if `name` is blank.
  fn insert(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Apply `patch` to an existing contact and return the updated record.
  /// `contact_id`, `date_added` and `last_contact` are never changed.
  fn update(
    &self,
    id: Uuid,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Permanently remove a contact. Deleting an id that is already gone is
  /// an error, never a silent success.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Set `last_contact` to now, leaving every other field untouched.
  fn touch_last_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;
}
