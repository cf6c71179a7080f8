//! Core types and trait definitions for the netbook contact directory.
//!
//! This crate is deliberately free of database and CLI dependencies. The
//! storage backend plugs in through [`store::ContactStore`]; presentation code
//! talks to a [`directory::Directory`].

pub mod contact;
pub mod directory;
pub mod error;
pub mod filter;
pub mod store;
pub mod suggestions;

pub use error::{Error, ErrorKind, Result, StoreError};

#[cfg(test)]
mod tests;
