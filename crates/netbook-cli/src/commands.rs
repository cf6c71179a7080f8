//! Subcommands and their mapping onto the directory.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use netbook_core::{
  contact::{Change, ContactPatch, NewContact},
  directory::Directory,
  store::ContactStore,
  suggestions::SuggestedField,
};
use uuid::Uuid;

use crate::render;

// ─── Arguments ────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List contacts, optionally filtered.
  List {
    /// Case-insensitive text matched against name, company, role, education
    /// and connection.
    #[arg(short, long)]
    search:     Option<String>,
    /// Only contacts with exactly this role.
    #[arg(long)]
    role:       Option<String>,
    /// Only contacts with exactly this connection.
    #[arg(long)]
    connection: Option<String>,
    #[arg(long)]
    json:       bool,
  },

  /// Show every field of one contact.
  Show {
    id:   Uuid,
    #[arg(long)]
    json: bool,
  },

  /// Add a new contact.
  Add(AddArgs),

  /// Edit a contact. Omitted flags keep their value; an empty value clears.
  Edit(EditArgs),

  /// Permanently delete a contact.
  Delete { id: Uuid },

  /// Record that you were in touch with a contact just now.
  Touch { id: Uuid },

  /// Roles currently in use.
  Roles,

  /// Connections currently in use.
  Connections,

  /// Suggested values for a field.
  Suggestions { field: FieldArg },
}

/// The optional contact fields, shared by `add` and `edit`.
#[derive(Args, Debug)]
pub struct FieldArgs {
  #[arg(long)]
  pub company:     Option<String>,
  #[arg(long)]
  pub role:        Option<String>,
  #[arg(long)]
  pub education:   Option<String>,
  #[arg(long)]
  pub connection:  Option<String>,
  #[arg(long)]
  pub phone:       Option<String>,
  #[arg(long)]
  pub email:       Option<String>,
  #[arg(long)]
  pub linkedin:    Option<String>,
  #[arg(long)]
  pub instagram:   Option<String>,
  #[arg(long)]
  pub twitter:     Option<String>,
  #[arg(long)]
  pub notes:       Option<String>,
  #[arg(long)]
  pub ethnicity:   Option<String>,
  #[arg(long)]
  pub nationality: Option<String>,
  /// Birthday as YYYY-MM-DD.
  #[arg(long, value_name = "DATE")]
  pub birthday:    Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
  #[arg(long)]
  pub name:   String,
  #[command(flatten)]
  pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct EditArgs {
  pub id:          Uuid,
  #[arg(long)]
  pub name:        Option<String>,
  #[command(flatten)]
  pub fields:      FieldArgs,
  /// Remove the stored birthday.
  #[arg(long, conflicts_with = "birthday")]
  pub no_birthday: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FieldArg {
  Role,
  Connection,
  Ethnicity,
  Nationality,
}

impl From<FieldArg> for SuggestedField {
  fn from(f: FieldArg) -> Self {
    match f {
      FieldArg::Role => Self::Role,
      FieldArg::Connection => Self::Connection,
      FieldArg::Ethnicity => Self::Ethnicity,
      FieldArg::Nationality => Self::Nationality,
    }
  }
}

// ─── Input conversion ─────────────────────────────────────────────────────────

impl AddArgs {
  pub fn into_new_contact(self) -> NewContact {
    let f = self.fields;
    NewContact {
      name:         self.name,
      company:      f.company,
      role:         f.role,
      education:    f.education,
      connection:   f.connection,
      phone:        f.phone,
      email:        f.email,
      linkedin:     f.linkedin,
      instagram:    f.instagram,
      twitter:      f.twitter,
      notes:        f.notes,
      has_birthday: f.birthday.is_some(),
      birthday:     f.birthday,
      ethnicity:    f.ethnicity,
      nationality:  f.nationality,
    }
  }
}

impl EditArgs {
  pub fn into_patch(self) -> ContactPatch {
    let f = self.fields;
    let birthday = match (self.no_birthday, f.birthday) {
      (true, _) => Change::Clear,
      (false, Some(d)) => Change::Set(d),
      (false, None) => Change::Keep,
    };
    ContactPatch {
      name: self.name,
      company: Change::from_input(f.company),
      role: Change::from_input(f.role),
      education: Change::from_input(f.education),
      connection: Change::from_input(f.connection),
      phone: Change::from_input(f.phone),
      email: Change::from_input(f.email),
      linkedin: Change::from_input(f.linkedin),
      instagram: Change::from_input(f.instagram),
      twitter: Change::from_input(f.twitter),
      notes: Change::from_input(f.notes),
      birthday,
      ethnicity: Change::from_input(f.ethnicity),
      nationality: Change::from_input(f.nationality),
    }
  }
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────

pub async fn run<S: ContactStore>(directory: &mut Directory<S>, command: Command) -> Result<()> {
  match command {
    Command::List { search, role, connection, json } => {
      directory.set_search_text(search.unwrap_or_default());
      directory.set_selected_role(role);
      directory.set_selected_connection(connection);
      let contacts = directory.filtered_contacts();
      if json {
        render::print_json(&contacts)?;
      } else {
        render::print_list(&contacts);
      }
    }

    Command::Show { id, json } => {
      let contact = directory
        .contact(id)
        .with_context(|| format!("no contact with id {id}"))?;
      if json {
        render::print_json(contact)?;
      } else {
        render::print_detail(contact);
      }
    }

    Command::Add(args) => {
      let contact = directory
        .add_contact(args.into_new_contact())
        .await
        .context("failed to add contact")?;
      println!("{}", contact.contact_id);
    }

    Command::Edit(args) => {
      let id = args.id;
      let contact = directory
        .update_contact(id, args.into_patch())
        .await
        .with_context(|| format!("failed to update contact {id}"))?;
      render::print_detail(&contact);
    }

    Command::Delete { id } => {
      directory
        .delete_contact(id)
        .await
        .with_context(|| format!("failed to delete contact {id}"))?;
    }

    Command::Touch { id } => {
      let contact = directory
        .touch_last_contact(id)
        .await
        .with_context(|| format!("failed to touch contact {id}"))?;
      render::print_detail(&contact);
    }

    Command::Roles => render::print_values(&directory.unique_roles()),

    Command::Connections => render::print_values(&directory.unique_connections()),

    Command::Suggestions { field } => {
      for value in SuggestedField::from(field).values() {
        println!("{value}");
      }
    }
  }
  Ok(())
}
