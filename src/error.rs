// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Crate-wide error type.

use crate::raw::CkUlong;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A fixed-width value arrived with the wrong length.
    #[error("attribute {name} has invalid value length {len} (expected {expected})")]
    InvalidLength {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    /// The raw record has no readable value (never filled, or the device
    /// reported CK_UNAVAILABLE_INFORMATION).
    #[error("attribute {0:#x} has no value available to decode")]
    ValueUnavailable(CkUlong),

    /// DER encode/decode failure for a structured value.
    #[error("DER error: {0}")]
    Der(#[from] der::Error),

    /// Malformed JSON template input.
    #[error("invalid template JSON: {0}")]
    Json(String),
}
