//! Boundary serialization: share-link payloads and JSON export documents.
//!
//! All I/O-adjacent failure handling lives here so the engine itself stays
//! total and side-effect-free.

pub mod export;
pub mod share;
