//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as `YYYY-MM-DD`
//! and UUIDs as hyphenated lowercase strings.

use chrono::{DateTime, NaiveDate, Utc};
use netbook_core::contact::Contact;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row, in
/// [`COLUMNS`](crate::schema::COLUMNS) order.
pub struct RawContact {
  pub contact_id:   String,
  pub name:         String,
  pub company:      Option<String>,
  pub role:         Option<String>,
  pub education:    Option<String>,
  pub connection:   Option<String>,
  pub phone:        Option<String>,
  pub email:        Option<String>,
  pub linkedin:     Option<String>,
  pub instagram:    Option<String>,
  pub twitter:      Option<String>,
  pub notes:        Option<String>,
  pub birthday:     Option<String>,
  pub ethnicity:    Option<String>,
  pub nationality:  Option<String>,
  pub date_added:   String,
  pub last_contact: Option<String>,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      contact_id:   row.get(0)?,
      name:         row.get(1)?,
      company:      row.get(2)?,
      role:         row.get(3)?,
      education:    row.get(4)?,
      connection:   row.get(5)?,
      phone:        row.get(6)?,
      email:        row.get(7)?,
      linkedin:     row.get(8)?,
      instagram:    row.get(9)?,
      twitter:      row.get(10)?,
      notes:        row.get(11)?,
      birthday:     row.get(12)?,
      ethnicity:    row.get(13)?,
      nationality:  row.get(14)?,
      date_added:   row.get(15)?,
      last_contact: row.get(16)?,
    })
  }

  /// Build a `RawContact` from a domain value, ready for binding.
  pub fn from_contact(c: &Contact) -> Self {
    Self {
      contact_id:   encode_uuid(c.contact_id),
      name:         c.name.clone(),
      company:      c.company.clone(),
      role:         c.role.clone(),
      education:    c.education.clone(),
      connection:   c.connection.clone(),
      phone:        c.phone.clone(),
      email:        c.email.clone(),
      linkedin:     c.linkedin.clone(),
      instagram:    c.instagram.clone(),
      twitter:      c.twitter.clone(),
      notes:        c.notes.clone(),
      birthday:     c.birthday.map(encode_date),
      ethnicity:    c.ethnicity.clone(),
      nationality:  c.nationality.clone(),
      date_added:   encode_dt(c.date_added),
      last_contact: c.last_contact.map(encode_dt),
    }
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      contact_id:   decode_uuid(&self.contact_id)?,
      name:         self.name,
      company:      self.company,
      role:         self.role,
      education:    self.education,
      connection:   self.connection,
      phone:        self.phone,
      email:        self.email,
      linkedin:     self.linkedin,
      instagram:    self.instagram,
      twitter:      self.twitter,
      notes:        self.notes,
      birthday:     self.birthday.as_deref().map(decode_date).transpose()?,
      ethnicity:    self.ethnicity,
      nationality:  self.nationality,
      date_added:   decode_dt(&self.date_added)?,
      last_contact: self.last_contact.as_deref().map(decode_dt).transpose()?,
    })
  }
}
