// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec options.
//!
//! By default a writer emits payloads in host byte order and leaves the swap
//! to the reader. A writer may instead be pinned to a fixed byte order, in
//! which case it swaps on write when the host differs; the flag always
//! records the order the payload bytes are actually in.
//!
//! # Example YAML
//!
//! ```yaml
//! # codec.yaml
//! endianness: big
//! ```

use crate::endian::Endianness;
#[cfg(feature = "config-loaders")]
use crate::error::{PortableError, Result};
#[cfg(feature = "config-loaders")]
use std::path::Path;

/// Byte order a writer emits payloads in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "lowercase"))]
pub enum EndianPolicy {
    /// Host byte order, no swap on write.
    #[default]
    Native,
    Little,
    Big,
}

impl EndianPolicy {
    /// Byte order the payload ends up in on this host.
    pub const fn resolve(self) -> Endianness {
        match self {
            EndianPolicy::Native => Endianness::native(),
            EndianPolicy::Little => Endianness::Little,
            EndianPolicy::Big => Endianness::Big,
        }
    }
}

impl From<Endianness> for EndianPolicy {
    fn from(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => EndianPolicy::Little,
            Endianness::Big => EndianPolicy::Big,
        }
    }
}

/// Options for [`PortableWriter`](crate::PortableWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default, deny_unknown_fields))]
pub struct CodecOptions {
    pub endianness: EndianPolicy,
}

impl CodecOptions {
    pub const fn new() -> Self {
        Self {
            endianness: EndianPolicy::Native,
        }
    }

    /// Pin the payload byte order.
    pub const fn with_endianness(mut self, endianness: EndianPolicy) -> Self {
        self.endianness = endianness;
        self
    }

    /// Little-endian payloads regardless of host.
    pub const fn little() -> Self {
        Self::new().with_endianness(EndianPolicy::Little)
    }

    /// Big-endian payloads regardless of host.
    pub const fn big() -> Self {
        Self::new().with_endianness(EndianPolicy::Big)
    }

    /// Parse options from a YAML document.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| PortableError::Config(e.to_string()))
    }

    /// Load options from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| PortableError::Config(format!("{}: {}", path.display(), e)))?;
        let options = Self::from_yaml_str(&yaml)?;
        log::debug!(
            "[portable] loaded codec options from {}: {:?}",
            path.display(),
            options
        );
        Ok(options)
    }
}
