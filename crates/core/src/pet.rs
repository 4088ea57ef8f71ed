//! Pet record shapes accepted by the ingest routes.
//!
//! All three records share the same wire shape:
//!
//! ```json
//! { "name": "Tom", "type": "tabby" }
//! ```
//!
//! Both fields are optional on the wire and default to the empty string.
//! Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::{DomainError, DomainResult};

/// A record that can be decoded from an ingest payload and logged.
pub trait Pet: DeserializeOwned + Default + core::fmt::Debug + Send + 'static {
    /// Lowercase label used in logs and confirmation messages (e.g. `"cat"`).
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// The `type` field (breed, coat, ...).
    fn kind(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hamster {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

macro_rules! impl_pet {
    ($t:ty, $kind:literal) => {
        impl $t {
            pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    kind: kind.into(),
                }
            }
        }

        impl Pet for $t {
            const KIND: &'static str = $kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn kind(&self) -> &str {
                &self.kind
            }
        }
    };
}

impl_pet!(Cat, "cat");
impl_pet!(Dog, "dog");
impl_pet!(Hamster, "hamster");

/// Decode a JSON payload into a pet record.
///
/// The payload must be a JSON object or `null` (which yields the default
/// record). Anything else (arrays, scalars, truncated input, wrongly-typed
/// fields) is a [`DomainError::Decode`].
pub fn decode<P: Pet>(bytes: &[u8]) -> DomainResult<P> {
    let pet: Option<P> =
        serde_json::from_slice(bytes).map_err(|e| DomainError::decode(e.to_string()))?;
    Ok(pet.unwrap_or_default())
}
