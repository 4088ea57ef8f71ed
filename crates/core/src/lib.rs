//! `menagerie-core` — domain building blocks for the menagerie server.
//!
//! This crate is **pure**: record shapes, decoding, and response rendering,
//! with no HTTP framework types.

pub mod echo;
pub mod error;
pub mod pet;

pub use echo::{CatQuery, EchoBody, EchoFormat, render};
pub use error::{DomainError, DomainResult};
pub use pet::{Cat, Dog, Hamster, Pet, decode};
