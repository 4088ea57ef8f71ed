//! Query echo: renders the `name`/`type` query pair in a requested format.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Output format selected by the `/cats/:format` path segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EchoFormat {
    /// `string`: two lines of plain text.
    Text,
    /// `json`: `{"name": ..., "type": ...}`.
    Json,
}

impl EchoFormat {
    /// Parse a path segment. Matching is exact and case-sensitive.
    pub fn parse(segment: &str) -> Result<Self, DomainError> {
        match segment {
            "string" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DomainError::unknown_format(other)),
        }
    }
}

impl FromStr for EchoFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Query parameters of the echo route. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl CatQuery {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Build from decoded query pairs. The first value of a repeated key wins;
    /// keys other than `name` and `type` are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut kind = None;
        for (key, value) in pairs {
            match key.as_ref() {
                "name" if name.is_none() => name = Some(value.into()),
                "type" if kind.is_none() => kind = Some(value.into()),
                _ => {}
            }
        }

        Self {
            name: name.unwrap_or_default(),
            kind: kind.unwrap_or_default(),
        }
    }
}

/// Rendered echo body, still independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoBody {
    Text(String),
    Json(CatQuery),
}

pub fn render(format: EchoFormat, query: CatQuery) -> EchoBody {
    match format {
        EchoFormat::Text => EchoBody::Text(format!(
            "your cat name is: {}\nyour cat type is: {}",
            query.name, query.kind
        )),
        EchoFormat::Json => EchoBody::Json(query),
    }
}
