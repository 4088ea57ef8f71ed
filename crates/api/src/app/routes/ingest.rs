//! JSON ingest routes (`POST /cats`, `/dogs`, `/hamster`).
//!
//! One generic handler serves all three; the record type picks the decode
//! target, the log label, and the failure body.

use axum::body::Body;

use menagerie_core::{Cat, Dog, Hamster, Pet};

use crate::app::errors::{FailureBody, IngestError, IngestFailure};

/// Upper bound on ingest request bodies.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// A pet record that can be posted to an ingest route.
pub trait IngestTarget: Pet {
    const FAILURE: FailureBody = FailureBody::Generic;
}

impl IngestTarget for Cat {
    const FAILURE: FailureBody = FailureBody::Empty;
}

impl IngestTarget for Dog {}

impl IngestTarget for Hamster {}

/// Read the body, decode it into `P`, log it, and confirm receipt.
///
/// The request `Content-Type` is not consulted.
pub async fn ingest<P: IngestTarget>(body: Body) -> Result<String, IngestFailure> {
    let pet = read_and_decode::<P>(body).await.map_err(|error| {
        tracing::error!(pet = P::KIND, error = %error, "failed to ingest {}", P::KIND);
        IngestFailure {
            error,
            body: P::FAILURE,
        }
    })?;

    tracing::info!(
        pet = P::KIND,
        name = %pet.name(),
        kind = %pet.kind(),
        "This is your {}: {:?}",
        P::KIND,
        pet
    );

    Ok(format!("We got your {}!", P::KIND))
}

async fn read_and_decode<P: Pet>(body: Body) -> Result<P, IngestError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| IngestError::Read(e.to_string()))?;

    Ok(menagerie_core::decode::<P>(&bytes)?)
}
