//! Search and facet logic over an in-memory slice of contacts.
//!
//! Everything here is a pure function of its inputs; the
//! [`Directory`](crate::directory::Directory) feeds it the current snapshot.

use std::collections::BTreeSet;

use crate::contact::Contact;

// ─── ContactFilter ───────────────────────────────────────────────────────────

/// The list-view filter state. All three criteria must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
  /// Case-insensitive substring matched against name, company, role,
  /// education and connection. Empty matches everything.
  pub search_text: String,
  /// Exact match on `role` when set.
  pub role:        Option<String>,
  /// Exact match on `connection` when set.
  pub connection:  Option<String>,
}

impl ContactFilter {
  /// True when no criterion is active.
  pub fn is_empty(&self) -> bool {
    self.search_text.is_empty() && self.role.is_none() && self.connection.is_none()
  }

  pub fn matches(&self, contact: &Contact) -> bool {
    matches_search(contact, &self.search_text)
      && matches_exact(contact.role.as_deref(), self.role.as_deref())
      && matches_exact(contact.connection.as_deref(), self.connection.as_deref())
  }

  /// Keep the contacts that match, preserving their relative order.
  pub fn apply<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| self.matches(c)).collect()
  }
}

/// Case-insensitive substring match over the searchable fields. Missing fields
/// count as empty strings.
pub fn matches_search(contact: &Contact, text: &str) -> bool {
  if text.is_empty() {
    return true;
  }
  let needle = text.to_lowercase();
  [
    Some(contact.name.as_str()),
    contact.company.as_deref(),
    contact.role.as_deref(),
    contact.education.as_deref(),
    contact.connection.as_deref(),
  ]
  .into_iter()
  .any(|field| field.unwrap_or_default().to_lowercase().contains(&needle))
}

fn matches_exact(value: Option<&str>, selected: Option<&str>) -> bool {
  match selected {
    Some(wanted) => value == Some(wanted),
    None => true,
  }
}

// ─── Facets ──────────────────────────────────────────────────────────────────

/// Distinct non-empty values of one field, sorted ascending.
pub fn unique_values<'a, F>(contacts: &'a [Contact], field: F) -> Vec<String>
where
  F: Fn(&'a Contact) -> Option<&'a str>,
{
  contacts
    .iter()
    .filter_map(field)
    .filter(|v| !v.is_empty())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(str::to_owned)
    .collect()
}
