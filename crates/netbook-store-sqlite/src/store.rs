//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::{path::Path, sync::Arc};

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tokio::sync::Mutex;
use uuid::Uuid;

use netbook_core::{
  contact::{Contact, ContactPatch, NewContact},
  store::ContactStore,
};

use crate::{
  Result,
  encode::{RawContact, encode_dt, encode_uuid},
  schema::{COLUMNS, SCHEMA},
};

fn not_found(id: Uuid) -> crate::Error { netbook_core::Error::ContactNotFound(id).into() }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A netbook contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection and write lock are
/// reference-counted, and every clone shares them.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  /// Held across read-modify-write sequences so there is one writer at a
  /// time.
  write: Arc<Mutex<()>>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Fails if the file exists but is not a readable SQLite database.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "opening contact store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn).await
  }

  async fn init(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn, write: Arc::new(Mutex::new(())) })
  }

  /// Read one row by id.
  async fn fetch(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM contacts WHERE contact_id = ?1"),
              rusqlite::params![id_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn load_all(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {COLUMNS} FROM contacts ORDER BY seq"))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut contacts: Vec<Contact> = raws
      .into_iter()
      .map(RawContact::into_contact)
      .collect::<Result<_>>()?;

    // Stable sort: rows arrive in insertion order, so equal names keep it.
    contacts.sort_by_cached_key(|c| c.name.to_lowercase());
    Ok(contacts)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>> { self.fetch(id).await }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, input: NewContact) -> Result<Contact> {
    let contact = Contact::create(Uuid::new_v4(), Utc::now(), input)?;
    let raw = RawContact::from_contact(&contact);

    let _write = self.write.lock().await;
    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!(
            "INSERT INTO contacts ({COLUMNS}) VALUES
             (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)"
          ),
          rusqlite::params![
            raw.contact_id,
            raw.name,
            raw.company,
            raw.role,
            raw.education,
            raw.connection,
            raw.phone,
            raw.email,
            raw.linkedin,
            raw.instagram,
            raw.twitter,
            raw.notes,
            raw.birthday,
            raw.ethnicity,
            raw.nationality,
            raw.date_added,
            raw.last_contact,
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(contact_id = %contact.contact_id, "contact inserted");
    Ok(contact)
  }

  async fn update(&self, id: Uuid, patch: ContactPatch) -> Result<Contact> {
    patch.validate()?;

    let _write = self.write.lock().await;
    let mut contact = self.fetch(id).await?.ok_or_else(|| not_found(id))?;
    contact.apply(patch)?;
    let raw = RawContact::from_contact(&contact);

    // `contact_id`, `date_added` and `last_contact` are never rewritten here.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET
             name = ?2, company = ?3, role = ?4, education = ?5,
             connection = ?6, phone = ?7, email = ?8, linkedin = ?9,
             instagram = ?10, twitter = ?11, notes = ?12, birthday = ?13,
             ethnicity = ?14, nationality = ?15
           WHERE contact_id = ?1",
          rusqlite::params![
            raw.contact_id,
            raw.name,
            raw.company,
            raw.role,
            raw.education,
            raw.connection,
            raw.phone,
            raw.email,
            raw.linkedin,
            raw.instagram,
            raw.twitter,
            raw.notes,
            raw.birthday,
            raw.ethnicity,
            raw.nationality,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(not_found(id));
    }

    tracing::debug!(contact_id = %id, "contact updated");
    Ok(contact)
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    let _write = self.write.lock().await;
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(not_found(id));
    }

    tracing::debug!(contact_id = %id, "contact deleted");
    Ok(())
  }

  async fn touch_last_contact(&self, id: Uuid) -> Result<Contact> {
    let id_str = encode_uuid(id);
    let at_str = encode_dt(Utc::now());

    let _write = self.write.lock().await;
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts SET last_contact = ?2 WHERE contact_id = ?1",
          rusqlite::params![id_str, at_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(not_found(id));
    }

    tracing::debug!(contact_id = %id, "last contact touched");
    self.fetch(id).await?.ok_or_else(|| not_found(id))
  }
}
