//! Suggested values offered by entry forms.
//!
//! These lists are advisory. Stored values are free text and nothing is ever
//! validated against them; the directory's facets come from the data itself.

use serde::{Deserialize, Serialize};

pub const ROLES: &[&str] = &[
  "VC",
  "PE",
  "Founder",
  "Big Name",
  "Professor",
  "Engineer",
  "Designer",
  "Marketing",
  "Sales",
  "Other",
];

pub const CONNECTIONS: &[&str] = &[
  "LinkedIn",
  "Alumni",
  "Classmate",
  "Friends",
  "Networking Event",
  "Conference",
  "Meetup",
  "Referral",
  "Other",
];

pub const ETHNICITIES: &[&str] = &[
  "Asian",
  "Black",
  "Hispanic or Latino",
  "Middle Eastern or North African",
  "Native American or Alaska Native",
  "Pacific Islander",
  "White",
  "Mixed",
  "Other",
];

pub const NATIONALITIES: &[&str] = &[
  "American",
  "Australian",
  "Brazilian",
  "British",
  "Canadian",
  "Chinese",
  "French",
  "German",
  "Indian",
  "Italian",
  "Japanese",
  "Korean",
  "Mexican",
  "Nigerian",
  "Spanish",
  "Other",
];

/// A contact field that has a suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedField {
  Role,
  Connection,
  Ethnicity,
  Nationality,
}

impl SuggestedField {
  pub fn values(self) -> &'static [&'static str] {
    match self {
      Self::Role => ROLES,
      Self::Connection => CONNECTIONS,
      Self::Ethnicity => ETHNICITIES,
      Self::Nationality => NATIONALITIES,
    }
  }
}
