//! SQL schema for the netbook SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout; new optional columns are the only planned evolution.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = FULL;

-- `seq` is the insertion order used to break ties between equal names.
-- AUTOINCREMENT keeps it monotonic even after deletes.
CREATE TABLE IF NOT EXISTS contacts (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id   TEXT NOT NULL UNIQUE,
    name         TEXT NOT NULL CHECK (trim(name) <> ''),
    company      TEXT,
    role         TEXT,
    education    TEXT,
    connection   TEXT,
    phone        TEXT,
    email        TEXT,
    linkedin     TEXT,
    instagram    TEXT,
    twitter      TEXT,
    notes        TEXT,
    birthday     TEXT,            -- YYYY-MM-DD or NULL
    ethnicity    TEXT,
    nationality  TEXT,
    date_added   TEXT NOT NULL,   -- RFC 3339 UTC; store-assigned
    last_contact TEXT             -- RFC 3339 UTC or NULL
);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`, in [`RawContact`] field order.
///
/// [`RawContact`]: crate::encode::RawContact
pub const COLUMNS: &str = "contact_id, name, company, role, education, connection, \
   phone, email, linkedin, instagram, twitter, notes, birthday, ethnicity, \
   nationality, date_added, last_contact";
