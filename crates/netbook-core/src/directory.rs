//! [`Directory`] — the in-memory view that presentation code reads from.
//!
//! The directory holds a full snapshot of the store and reloads all of it
//! after every successful mutation instead of patching it incrementally.
//! Mutations must be serialised by the caller; `&mut self` enforces that for
//! a single owner.

use tokio::sync::watch;
use uuid::Uuid;

use crate::{
  contact::{Contact, ContactPatch, NewContact},
  filter::{ContactFilter, unique_values},
  store::ContactStore,
};

/// Treat an empty facet selection as no selection.
fn selection(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

// ─── Directory ───────────────────────────────────────────────────────────────

/// Snapshot, filter state and mutation pass-throughs over a [`ContactStore`].
pub struct Directory<S: ContactStore> {
  store:    S,
  snapshot: Vec<Contact>,
  filter:   ContactFilter,
  /// Bumped after every successful refresh and every filter change.
  revision: watch::Sender<u64>,
}

impl<S: ContactStore> Directory<S> {
  /// Wrap `store` and load the initial snapshot.
  pub async fn open(store: S) -> Result<Self, S::Error> {
    let (revision, _) = watch::channel(0);
    let mut directory = Self {
      store,
      snapshot: Vec::new(),
      filter: ContactFilter::default(),
      revision,
    };
    directory.refresh().await?;
    Ok(directory)
  }

  pub fn store(&self) -> &S { &self.store }

  /// The full snapshot, ordered as the store returned it.
  pub fn snapshot(&self) -> &[Contact] { &self.snapshot }

  pub fn filter(&self) -> &ContactFilter { &self.filter }

  /// Look up a contact in the current snapshot.
  pub fn contact(&self, id: Uuid) -> Option<&Contact> {
    self.snapshot.iter().find(|c| c.contact_id == id)
  }

  /// Receive a new revision number whenever the filtered view may have
  /// changed.
  pub fn subscribe(&self) -> watch::Receiver<u64> { self.revision.subscribe() }

  fn bump(&self) { self.revision.send_modify(|r| *r += 1); }

  // ── Snapshot ──────────────────────────────────────────────────────────────

  /// Reload the snapshot from the store. On failure the previous snapshot is
  /// kept as-is.
  pub async fn refresh(&mut self) -> Result<(), S::Error> {
    match self.store.load_all().await {
      Ok(contacts) => {
        tracing::debug!(count = contacts.len(), "directory snapshot reloaded");
        self.snapshot = contacts;
        self.bump();
        Ok(())
      }
      Err(e) => {
        tracing::warn!(error = %e, "refresh failed; keeping previous snapshot");
        Err(e)
      }
    }
  }

  // ── Filter state ──────────────────────────────────────────────────────────

  pub fn set_search_text(&mut self, text: impl Into<String>) {
    self.filter.search_text = text.into();
    self.bump();
  }

  pub fn set_selected_role(&mut self, role: Option<String>) {
    self.filter.role = selection(role);
    self.bump();
  }

  pub fn set_selected_connection(&mut self, connection: Option<String>) {
    self.filter.connection = selection(connection);
    self.bump();
  }

  pub fn clear_filters(&mut self) {
    self.filter = ContactFilter::default();
    self.bump();
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// Snapshot entries that pass the current filter, in snapshot order.
  pub fn filtered_contacts(&self) -> Vec<&Contact> { self.filter.apply(&self.snapshot) }

  /// Distinct non-empty roles in the snapshot, sorted ascending.
  pub fn unique_roles(&self) -> Vec<String> {
    unique_values(&self.snapshot, |c| c.role.as_deref())
  }

  /// Distinct non-empty connections in the snapshot, sorted ascending.
  pub fn unique_connections(&self) -> Vec<String> {
    unique_values(&self.snapshot, |c| c.connection.as_deref())
  }

  // ── Mutations ─────────────────────────────────────────────────────────────
  //
  // Each one delegates to the store and then reloads the snapshot. A store
  // failure returns before the reload, so the snapshot is left untouched.

  pub async fn add_contact(&mut self, input: NewContact) -> Result<Contact, S::Error> {
    let contact = self.store.insert(input).await?;
    self.refresh().await?;
    Ok(contact)
  }

  pub async fn update_contact(
    &mut self,
    id: Uuid,
    patch: ContactPatch,
  ) -> Result<Contact, S::Error> {
    let contact = self.store.update(id, patch).await?;
    self.refresh().await?;
    Ok(contact)
  }

  pub async fn delete_contact(&mut self, id: Uuid) -> Result<(), S::Error> {
    self.store.delete(id).await?;
    self.refresh().await
  }

  pub async fn touch_last_contact(&mut self, id: Uuid) -> Result<Contact, S::Error> {
    let contact = self.store.touch_last_contact(id).await?;
    self.refresh().await?;
    Ok(contact)
  }
}
