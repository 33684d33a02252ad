// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # HDDS Portable - Endianness-portable binary scalars
//!
//! Writes and reads fixed-width scalars (`bool`, 8/16/32/64-bit integers,
//! `f32`, `f64`) so that a stream produced on a little-endian host decodes
//! correctly on a big-endian host and vice versa.
//!
//! ## Wire Format
//!
//! ```text
//! +--------+-----------+-----------+-----+
//! | flag   | scalar 0  | scalar 1  | ... |
//! | 1 byte | width(T0) | width(T1) |     |
//! +--------+-----------+-----------+-----+
//!
//! flag: 0 = payload little-endian, 1 = payload big-endian
//! ```
//!
//! Payloads carry no padding, length or type tags: values must be read back
//! in the order and with the types they were written with.
//!
//! The writer emits payloads in host order; the reader compares the flag
//! with its own host order once and reverses every payload when they differ.
//!
//! ## Quick Start
//!
//! ```rust
//! use hdds_portable::{PortableReader, PortableWriter};
//!
//! let mut writer = PortableWriter::new(Vec::new())?;
//! writer.write(true)?;
//! writer.write(-17i32)?;
//! writer.write(f64::NAN)?;
//! let bytes = writer.into_inner();
//!
//! let mut reader = PortableReader::new(&bytes[..])?;
//! assert!(reader.read::<bool>()?);
//! assert_eq!(reader.read::<i32>()?, -17);
//! assert_eq!(reader.read::<f64>()?.to_bits(), f64::NAN.to_bits());
//! # Ok::<(), hdds_portable::PortableError>(())
//! ```
//!
//! ## Modules Overview
//!
//! - [`endian`] - host byte order and the flag byte
//! - [`swap`] - byte reversal of 1/2/4/8-byte blocks
//! - [`scalar`] - scalar kinds and native byte conversion
//! - [`output`] / [`input`] - the stream codecs
//! - [`config`] - writer options (YAML loadable with `config-loaders`)

#![deny(unsafe_code)]

pub mod config;
pub mod endian;
pub mod error;
pub mod input;
pub mod output;
pub mod scalar;
pub mod swap;

pub use config::{CodecOptions, EndianPolicy};
pub use endian::{is_little_endian, Endianness, FLAG_BIG, FLAG_LITTLE};
pub use error::{PortableError, Result};
pub use input::PortableReader;
pub use output::PortableWriter;
pub use scalar::{PortableScalar, Scalar, ScalarKind};
pub use swap::{reverse_bytes, ByteBlock};
