//! `menagerie-auth` — credential boundary for the admin route group.
//!
//! This crate is intentionally decoupled from HTTP frameworks: it parses the
//! raw `Authorization` header value and checks it against a configured pair.

pub mod basic;
pub mod credentials;

pub use basic::{BasicAuthError, BasicCredentials, authenticate, parse_basic};
pub use credentials::Credentials;
