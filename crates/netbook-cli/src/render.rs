//! Plain-text and JSON output. Everything goes to stdout; logs go to stderr.

use anyhow::Result;
use netbook_core::contact::Contact;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// One line per contact: id, name, then "role @ company" when known.
pub fn print_list(contacts: &[&Contact]) {
  if contacts.is_empty() {
    println!("No contacts.");
    return;
  }
  for c in contacts {
    println!("{}  {}", c.contact_id, summary(c));
  }
}

fn summary(c: &Contact) -> String {
  match (c.role.as_deref(), c.company.as_deref()) {
    (Some(role), Some(company)) => format!("{} ({role} @ {company})", c.name),
    (Some(role), None) => format!("{} ({role})", c.name),
    (None, Some(company)) => format!("{} (@ {company})", c.name),
    (None, None) => c.name.clone(),
  }
}

pub fn print_detail(c: &Contact) {
  println!("{}", c.name);
  println!("  {:<13}{}", "id", c.contact_id);

  let text_fields = [
    ("company", &c.company),
    ("role", &c.role),
    ("education", &c.education),
    ("connection", &c.connection),
    ("phone", &c.phone),
    ("email", &c.email),
    ("linkedin", &c.linkedin),
    ("instagram", &c.instagram),
    ("twitter", &c.twitter),
    ("ethnicity", &c.ethnicity),
    ("nationality", &c.nationality),
    ("notes", &c.notes),
  ];
  for (label, value) in text_fields {
    if let Some(v) = value {
      println!("  {label:<13}{v}");
    }
  }

  if let Some(b) = c.birthday {
    println!("  {:<13}{}", "birthday", b.format("%B %-d, %Y"));
  }
  println!("  {:<13}{}", "added", c.date_added.format("%Y-%m-%d"));
  match c.last_contact {
    Some(at) => println!("  {:<13}{}", "last contact", at.format("%Y-%m-%d %H:%M UTC")),
    None => println!("  {:<13}never", "last contact"),
  }
}

pub fn print_values(values: &[String]) {
  for v in values {
    println!("{v}");
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use netbook_core::contact::NewContact;
  use uuid::Uuid;

  use super::*;

  #[test]
  fn summary_includes_known_role_and_company() {
    let mut c = Contact::create(Uuid::new_v4(), Utc::now(), NewContact::new("Ada")).unwrap();
    assert_eq!(summary(&c), "Ada");

    c.role = Some("Engineer".into());
    assert_eq!(summary(&c), "Ada (Engineer)");

    c.company = Some("Analytical".into());
    assert_eq!(summary(&c), "Ada (Engineer @ Analytical)");
  }
}
