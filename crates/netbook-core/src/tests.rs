//! Directory tests against a vector-backed store that can be switched off.

use std::sync::{
  Mutex,
  atomic::{AtomicBool, Ordering},
};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::{
  Error, ErrorKind, StoreError,
  contact::{Change, Contact, ContactPatch, NewContact},
  directory::Directory,
  store::ContactStore,
};

// ─── Test store ──────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum TestError {
  #[error(transparent)]
  Core(#[from] Error),

  #[error("store offline")]
  Offline,
}

impl StoreError for TestError {
  fn kind(&self) -> ErrorKind {
    match self {
      Self::Core(e) => e.kind(),
      Self::Offline => ErrorKind::Storage,
    }
  }
}

#[derive(Default)]
struct VecStore {
  contacts: Mutex<Vec<Contact>>,
  offline:  AtomicBool,
}

impl VecStore {
  fn set_offline(&self, offline: bool) { self.offline.store(offline, Ordering::SeqCst); }

  fn check(&self) -> Result<(), TestError> {
    if self.offline.load(Ordering::SeqCst) {
      return Err(TestError::Offline);
    }
    Ok(())
  }
}

impl ContactStore for VecStore {
  type Error = TestError;

  async fn load_all(&self) -> Result<Vec<Contact>, TestError> {
    self.check()?;
    let mut all = self.contacts.lock().unwrap().clone();
    all.sort_by_cached_key(|c| c.name.to_lowercase());
    Ok(all)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>, TestError> {
    self.check()?;
    let all = self.contacts.lock().unwrap();
    Ok(all.iter().find(|c| c.contact_id == id).cloned())
  }

  async fn insert(&self, input: NewContact) -> Result<Contact, TestError> {
    self.check()?;
    let contact = Contact::create(Uuid::new_v4(), Utc::now(), input)?;
    self.contacts.lock().unwrap().push(contact.clone());
    Ok(contact)
  }

  async fn update(&self, id: Uuid, patch: ContactPatch) -> Result<Contact, TestError> {
    self.check()?;
    let mut all = self.contacts.lock().unwrap();
    let contact = all
      .iter_mut()
      .find(|c| c.contact_id == id)
      .ok_or(Error::ContactNotFound(id))?;
    contact.apply(patch)?;
    Ok(contact.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<(), TestError> {
    self.check()?;
    let mut all = self.contacts.lock().unwrap();
    let before = all.len();
    all.retain(|c| c.contact_id != id);
    if all.len() == before {
      return Err(Error::ContactNotFound(id).into());
    }
    Ok(())
  }

  async fn touch_last_contact(&self, id: Uuid) -> Result<Contact, TestError> {
    self.check()?;
    let mut all = self.contacts.lock().unwrap();
    let contact = all
      .iter_mut()
      .find(|c| c.contact_id == id)
      .ok_or(Error::ContactNotFound(id))?;
    contact.last_contact = Some(Utc::now());
    Ok(contact.clone())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

async fn directory() -> Directory<VecStore> {
  Directory::open(VecStore::default()).await.unwrap()
}

fn person(name: &str, role: &str, connection: &str) -> NewContact {
  NewContact {
    role: Some(role.into()),
    connection: Some(connection.into()),
    ..NewContact::new(name)
  }
}

fn names(d: &Directory<VecStore>) -> Vec<String> {
  d.filtered_contacts().iter().map(|c| c.name.clone()).collect()
}

async fn seeded() -> Directory<VecStore> {
  let mut d = directory().await;
  d.add_contact(person("Sarah Johnson", "VC", "Networking Event"))
    .await
    .unwrap();
  d.add_contact(person("John Smith", "Founder", "LinkedIn"))
    .await
    .unwrap();
  d
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_role_and_clear_scenario() {
  let mut d = seeded().await;

  assert_eq!(d.unique_roles(), ["Founder", "VC"]);
  assert_eq!(d.unique_connections(), ["LinkedIn", "Networking Event"]);

  d.set_search_text("john");
  assert_eq!(names(&d), ["John Smith", "Sarah Johnson"]);
  d.set_search_text("SMITH");
  assert_eq!(names(&d), ["John Smith"]);

  d.set_search_text("");
  d.set_selected_role(Some("VC".into()));
  assert_eq!(names(&d), ["Sarah Johnson"]);

  d.clear_filters();
  assert_eq!(names(&d), ["John Smith", "Sarah Johnson"]);
}

#[tokio::test]
async fn empty_selection_means_unset() {
  let mut d = seeded().await;
  d.set_selected_role(Some(String::new()));
  d.set_selected_connection(Some(String::new()));
  assert!(d.filter().is_empty());
  assert_eq!(d.filtered_contacts().len(), 2);
}

#[tokio::test]
async fn add_with_blank_name_fails_and_keeps_snapshot() {
  let mut d = seeded().await;
  let err = d.add_contact(NewContact::new("")).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);
  assert_eq!(d.snapshot().len(), 2);
  assert_eq!(d.store().load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn mutations_refresh_the_snapshot() {
  let mut d = directory().await;
  let c = d.add_contact(NewContact::new("Ada")).await.unwrap();
  assert_eq!(d.contact(c.contact_id), Some(&c));

  let updated = d
    .update_contact(c.contact_id, ContactPatch {
      company: Change::Set("Analytical Engines".into()),
      ..ContactPatch::default()
    })
    .await
    .unwrap();
  assert_eq!(
    d.contact(c.contact_id).unwrap().company.as_deref(),
    Some("Analytical Engines")
  );
  assert_eq!(updated.date_added, c.date_added);

  let touched = d.touch_last_contact(c.contact_id).await.unwrap();
  assert!(touched.last_contact.is_some());
  assert_eq!(d.contact(c.contact_id).unwrap().last_contact, touched.last_contact);

  d.delete_contact(c.contact_id).await.unwrap();
  assert!(d.snapshot().is_empty());
}

#[tokio::test]
async fn second_delete_is_not_found() {
  let mut d = seeded().await;
  let id = d.snapshot()[0].contact_id;
  d.delete_contact(id).await.unwrap();
  let err = d.delete_contact(id).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(d.snapshot().len(), 1);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
  let mut d = seeded().await;
  let err = d
    .update_contact(Uuid::new_v4(), ContactPatch::default())
    .await
    .unwrap_err();
  assert!(matches!(err, TestError::Core(Error::ContactNotFound(_))));
}

#[tokio::test]
async fn storage_failure_keeps_previous_snapshot() {
  let mut d = seeded().await;
  let before = d.snapshot().to_vec();

  d.store().set_offline(true);
  let err = d.refresh().await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Storage);
  assert_eq!(d.snapshot(), before.as_slice());

  let err = d.add_contact(NewContact::new("Nobody")).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Storage);
  assert_eq!(d.snapshot(), before.as_slice());

  d.store().set_offline(false);
  d.refresh().await.unwrap();
  assert_eq!(d.snapshot(), before.as_slice());
}

#[tokio::test]
async fn birthday_toggle_off_persists_unset() {
  let mut d = directory().await;
  let date = NaiveDate::from_ymd_opt(1985, 7, 3);
  let c = d
    .add_contact(NewContact {
      birthday: date,
      has_birthday: true,
      ..NewContact::new("Grace")
    })
    .await
    .unwrap();
  assert_eq!(c.birthday, date);

  d.update_contact(
    c.contact_id,
    ContactPatch::default().with_birthday_flag(false, None),
  )
  .await
  .unwrap();
  assert_eq!(d.contact(c.contact_id).unwrap().birthday, None);
}

#[tokio::test]
async fn subscribers_see_revisions() {
  let mut d = directory().await;
  let mut rx = d.subscribe();
  let start = *rx.borrow_and_update();

  d.add_contact(NewContact::new("Ada")).await.unwrap();
  assert!(rx.has_changed().unwrap());
  assert!(*rx.borrow_and_update() > start);

  d.set_search_text("ada");
  assert!(rx.has_changed().unwrap());
}
