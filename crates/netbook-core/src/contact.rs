//! The contact entity and the input types used to create and edit it.
//!
//! Every optional text field follows one rule: absent and blank are the same
//! thing. Blank input is never persisted as an empty string; it becomes
//! `None`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Normalisation ───────────────────────────────────────────────────────────

/// Collapse blank text to `None`. Non-blank text is kept verbatim.
pub fn normalize_text(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

/// Resolve the birthday form pair: a date is only kept while the flag is on.
pub fn birthday_from_flag(
  has_birthday: bool,
  date: Option<NaiveDate>,
) -> Option<NaiveDate> {
  date.filter(|_| has_birthday)
}

fn validate_name(name: &str) -> Result<()> {
  if name.trim().is_empty() {
    return Err(Error::EmptyName);
  }
  Ok(())
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A single network or professional relationship record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  /// Store-assigned; never changes.
  pub contact_id:   Uuid,
  pub name:         String,
  pub company:      Option<String>,
  pub role:         Option<String>,
  pub education:    Option<String>,
  /// How the contact was met, e.g. "LinkedIn" or "Networking Event".
  pub connection:   Option<String>,
  pub phone:        Option<String>,
  pub email:        Option<String>,
  pub linkedin:     Option<String>,
  pub instagram:    Option<String>,
  pub twitter:      Option<String>,
  pub notes:        Option<String>,
  pub birthday:     Option<NaiveDate>,
  pub ethnicity:    Option<String>,
  pub nationality:  Option<String>,
  /// Store-assigned at creation; never changes.
  pub date_added:   DateTime<Utc>,
  /// Only moved by an explicit touch, never by an edit.
  pub last_contact: Option<DateTime<Utc>>,
}

impl Contact {
  /// Build a fresh record from `input`, validating and normalising it.
  pub fn create(
    contact_id: Uuid,
    date_added: DateTime<Utc>,
    input: NewContact,
  ) -> Result<Self> {
    validate_name(&input.name)?;

    Ok(Self {
      contact_id,
      name: input.name,
      company: normalize_text(input.company),
      role: normalize_text(input.role),
      education: normalize_text(input.education),
      connection: normalize_text(input.connection),
      phone: normalize_text(input.phone),
      email: normalize_text(input.email),
      linkedin: normalize_text(input.linkedin),
      instagram: normalize_text(input.instagram),
      twitter: normalize_text(input.twitter),
      notes: normalize_text(input.notes),
      birthday: birthday_from_flag(input.has_birthday, input.birthday),
      ethnicity: normalize_text(input.ethnicity),
      nationality: normalize_text(input.nationality),
      date_added,
      last_contact: None,
    })
  }

  /// Apply `patch` in place. Validation happens before any field is touched,
  /// so a rejected patch leaves the record unchanged.
  pub fn apply(&mut self, patch: ContactPatch) -> Result<()> {
    if let Some(name) = &patch.name {
      validate_name(name)?;
    }

    if let Some(name) = patch.name {
      self.name = name;
    }
    patch.company.apply_text(&mut self.company);
    patch.role.apply_text(&mut self.role);
    patch.education.apply_text(&mut self.education);
    patch.connection.apply_text(&mut self.connection);
    patch.phone.apply_text(&mut self.phone);
    patch.email.apply_text(&mut self.email);
    patch.linkedin.apply_text(&mut self.linkedin);
    patch.instagram.apply_text(&mut self.instagram);
    patch.twitter.apply_text(&mut self.twitter);
    patch.notes.apply_text(&mut self.notes);
    patch.birthday.apply(&mut self.birthday);
    patch.ethnicity.apply_text(&mut self.ethnicity);
    patch.nationality.apply_text(&mut self.nationality);
    Ok(())
  }
}

// ─── NewContact ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::ContactStore::insert`].
/// `contact_id` and `date_added` are always set by the store.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
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
  pub birthday:     Option<NaiveDate>,
  /// The birthday toggle; `birthday` is ignored while this is off.
  pub has_birthday: bool,
  pub ethnicity:    Option<String>,
  pub nationality:  Option<String>,
}

impl NewContact {
  /// Convenience constructor with every optional field unset.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), ..Self::default() }
  }
}

// ─── Change ──────────────────────────────────────────────────────────────────

/// What an update does to a single optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Change<T> {
  /// Leave the stored value alone.
  #[default]
  Keep,
  /// Reset the field to unset.
  Clear,
  Set(T),
}

impl<T> Change<T> {
  /// Replace the field outright: `None` clears, `Some` sets.
  pub fn replace(value: Option<T>) -> Self {
    match value {
      Some(v) => Self::Set(v),
      None => Self::Clear,
    }
  }

  pub fn apply(self, slot: &mut Option<T>) {
    match self {
      Self::Keep => {}
      Self::Clear => *slot = None,
      Self::Set(v) => *slot = Some(v),
    }
  }
}

impl Change<String> {
  /// Interpret raw form input: omitted keeps, blank clears, anything else
  /// sets.
  pub fn from_input(value: Option<String>) -> Self {
    match value {
      None => Self::Keep,
      Some(v) if v.trim().is_empty() => Self::Clear,
      Some(v) => Self::Set(v),
    }
  }

  fn apply_text(self, slot: &mut Option<String>) {
    match self {
      Self::Set(v) if v.trim().is_empty() => *slot = None,
      other => other.apply(slot),
    }
  }
}

// ─── ContactPatch ────────────────────────────────────────────────────────────

/// Input to [`crate::store::ContactStore::update`]. The default patch changes
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
  /// `None` keeps the current name; a blank name is rejected.
  pub name:        Option<String>,
  pub company:     Change<String>,
  pub role:        Change<String>,
  pub education:   Change<String>,
  pub connection:  Change<String>,
  pub phone:       Change<String>,
  pub email:       Change<String>,
  pub linkedin:    Change<String>,
  pub instagram:   Change<String>,
  pub twitter:     Change<String>,
  pub notes:       Change<String>,
  pub birthday:    Change<NaiveDate>,
  pub ethnicity:   Change<String>,
  pub nationality: Change<String>,
}

impl ContactPatch {
  /// A patch that overwrites every editable field with `input`, the way an
  /// edit form that resubmits the whole record behaves.
  pub fn replace_with(input: NewContact) -> Self {
    Self {
      name:        Some(input.name),
      company:     Change::replace(input.company),
      role:        Change::replace(input.role),
      education:   Change::replace(input.education),
      connection:  Change::replace(input.connection),
      phone:       Change::replace(input.phone),
      email:       Change::replace(input.email),
      linkedin:    Change::replace(input.linkedin),
      instagram:   Change::replace(input.instagram),
      twitter:     Change::replace(input.twitter),
      notes:       Change::replace(input.notes),
      birthday:    Change::replace(birthday_from_flag(
        input.has_birthday,
        input.birthday,
      )),
      ethnicity:   Change::replace(input.ethnicity),
      nationality: Change::replace(input.nationality),
    }
  }

  /// Set the birthday from the form toggle. Turning the toggle off clears the
  /// stored date even if a date value is still supplied.
  pub fn with_birthday_flag(
    mut self,
    has_birthday: bool,
    date: Option<NaiveDate>,
  ) -> Self {
    self.birthday = Change::replace(birthday_from_flag(has_birthday, date));
    self
  }

  /// Reject the patch up front if it would leave the record invalid.
  pub fn validate(&self) -> Result<()> {
    match &self.name {
      Some(name) => validate_name(name),
      None => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Contact {
    Contact::create(
      Uuid::new_v4(),
      Utc::now(),
      NewContact {
        company: Some("Acme".into()),
        role: Some("Founder".into()),
        has_birthday: true,
        birthday: NaiveDate::from_ymd_opt(1990, 4, 12),
        ..NewContact::new("John Smith")
      },
    )
    .unwrap()
  }

  #[test]
  fn create_rejects_blank_name() {
    let err = Contact::create(Uuid::new_v4(), Utc::now(), NewContact::new("  "))
      .unwrap_err();
    assert!(matches!(err, Error::EmptyName));
  }

  #[test]
  fn create_normalizes_blank_text_to_unset() {
    let c = Contact::create(
      Uuid::new_v4(),
      Utc::now(),
      NewContact {
        company: Some(String::new()),
        notes: Some("   ".into()),
        email: Some("john@example.com".into()),
        ..NewContact::new("John")
      },
    )
    .unwrap();

    assert_eq!(c.company, None);
    assert_eq!(c.notes, None);
    assert_eq!(c.email.as_deref(), Some("john@example.com"));
  }

  #[test]
  fn create_ignores_birthday_when_flag_is_off() {
    let c = Contact::create(
      Uuid::new_v4(),
      Utc::now(),
      NewContact {
        birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
        has_birthday: false,
        ..NewContact::new("John")
      },
    )
    .unwrap();
    assert_eq!(c.birthday, None);
  }

  #[test]
  fn empty_patch_changes_nothing() {
    let mut c = sample();
    let before = c.clone();
    c.apply(ContactPatch::default()).unwrap();
    assert_eq!(c, before);
  }

  #[test]
  fn patch_distinguishes_keep_clear_and_set() {
    let mut c = sample();
    c.apply(ContactPatch {
      company: Change::Clear,
      role: Change::Set("VC".into()),
      ..ContactPatch::default()
    })
    .unwrap();

    assert_eq!(c.company, None);
    assert_eq!(c.role.as_deref(), Some("VC"));
    assert!(c.birthday.is_some());
  }

  #[test]
  fn setting_blank_text_clears() {
    let mut c = sample();
    c.apply(ContactPatch {
      company: Change::Set(String::new()),
      ..ContactPatch::default()
    })
    .unwrap();
    assert_eq!(c.company, None);
  }

  #[test]
  fn rejected_patch_leaves_record_untouched() {
    let mut c = sample();
    let before = c.clone();
    let err = c
      .apply(ContactPatch {
        name: Some(String::new()),
        company: Change::Clear,
        ..ContactPatch::default()
      })
      .unwrap_err();

    assert!(matches!(err, Error::EmptyName));
    assert_eq!(c, before);
  }

  #[test]
  fn birthday_toggle_off_clears_stale_date() {
    let mut c = sample();
    let stale = c.birthday;
    c.apply(ContactPatch::default().with_birthday_flag(false, stale))
      .unwrap();
    assert_eq!(c.birthday, None);
  }

  #[test]
  fn replace_with_overwrites_every_field() {
    let mut c = sample();
    let id = c.contact_id;
    let added = c.date_added;

    c.apply(ContactPatch::replace_with(NewContact::new("Johnny")))
      .unwrap();

    assert_eq!(c.name, "Johnny");
    assert_eq!(c.company, None);
    assert_eq!(c.role, None);
    assert_eq!(c.birthday, None);
    assert_eq!(c.contact_id, id);
    assert_eq!(c.date_added, added);
  }

  #[test]
  fn change_from_input() {
    assert_eq!(Change::from_input(None), Change::Keep);
    assert_eq!(Change::from_input(Some(String::new())), Change::Clear);
    assert_eq!(
      Change::from_input(Some("VC".into())),
      Change::Set("VC".to_string())
    );
  }
}
