// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the portable codec.

use std::io;
use thiserror::Error;

/// Result type for portable codec operations.
pub type Result<T> = std::result::Result<T, PortableError>;

/// Portable codec errors.
///
/// Every failure is surfaced to the caller as-is; the codec never retries or
/// repairs a stream.
#[derive(Debug, Error)]
pub enum PortableError {
    /// The underlying stream rejected bytes.
    #[error("write failed at offset {offset}: {source}")]
    WriteFailure {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// The underlying stream reported an I/O fault other than end of stream.
    #[error("read failed at offset {offset}: {source}")]
    ReadFailure {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// Fewer bytes remained than the requested scalar width.
    #[error("stream exhausted at offset {offset}: needed {needed} bytes, got {available}")]
    StreamExhausted {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// The stream ended before the endianness flag could be read.
    #[error("stream is empty, missing endianness flag")]
    MissingFlag,

    /// The first byte of the stream is not a valid endianness flag.
    #[error("invalid endianness flag {0:#04x}")]
    InvalidFlag(u8),

    /// Codec options could not be loaded.
    #[error("invalid codec options: {0}")]
    Config(String),
}

impl PortableError {
    /// True when the error means the stream ran out of bytes.
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            PortableError::StreamExhausted { .. } | PortableError::MissingFlag
        )
    }
}
