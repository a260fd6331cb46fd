//! Share-link payload codec.
//!
//! Answers are embedded into a URL query parameter as base64-encoded JSON.
//! `evaluate(decode(encode(answers)))` must equal `evaluate(answers)`; the
//! engines are deterministic, so it suffices that the codec round-trips the
//! answer set itself. Decode failures are recoverable: callers fall back to
//! a fresh session.

use crate::core::AnswerSet;
use crate::errors::Result;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PayloadRef<'a> {
    answers: &'a AnswerSet,
}

#[derive(Deserialize)]
struct Payload {
    answers: AnswerSet,
}

/// Encode an answer set into a URL-safe share token.
pub fn encode(answers: &AnswerSet) -> Result<String> {
    let json = serde_json::to_vec(&PayloadRef { answers })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share token back into an answer set.
pub fn decode(token: &str) -> Result<AnswerSet> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let payload: Payload = serde_json::from_slice(&bytes)?;
    Ok(payload.answers)
}
