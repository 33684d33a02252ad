// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Input codec: reads the flag byte, then decodes scalars, reversing each
//! payload when the stream was written in the foreign byte order.

use crate::endian::Endianness;
use crate::error::{PortableError, Result};
use crate::scalar::{PortableScalar, Scalar, ScalarKind};
use crate::swap::ByteBlock;
use std::io::{self, Read};

/// Reads portable scalars from a byte stream.
///
/// The flag byte is consumed during construction and the swap decision is
/// fixed for the reader's lifetime. Values must be read in the order and
/// with the types they were written with; the wire carries no type tags.
///
/// After a `StreamExhausted` error the stream position is wherever the
/// partial read stopped and the reader should be discarded.
///
/// # Example
///
/// ```
/// use hdds_portable::{PortableReader, PortableWriter};
///
/// let mut writer = PortableWriter::new(Vec::new())?;
/// writer.write(0xBEEFu16)?;
/// let bytes = writer.into_inner();
///
/// let mut reader = PortableReader::new(&bytes[..])?;
/// assert_eq!(reader.read::<u16>()?, 0xBEEF);
/// # Ok::<(), hdds_portable::PortableError>(())
/// ```
#[derive(Debug)]
pub struct PortableReader<R: Read> {
    inner: R,
    declared: Endianness,
    must_swap: bool,
    offset: u64,
}

impl<R: Read> PortableReader<R> {
    /// Bind to `inner` and consume the endianness flag.
    pub fn new(mut inner: R) -> Result<Self> {
        let mut flag = [0u8; 1];
        let got = fill(&mut inner, &mut flag)
            .map_err(|source| PortableError::ReadFailure { offset: 0, source })?;
        if got == 0 {
            return Err(PortableError::MissingFlag);
        }

        let declared = Endianness::from_flag(flag[0]).map_err(|e| {
            log::warn!("[portable] rejecting stream with flag byte {:#04x}", flag[0]);
            e
        })?;
        let must_swap = declared != Endianness::native();
        log::debug!(
            "[portable] reader declared={}, host={}, must_swap={}",
            declared,
            Endianness::native(),
            must_swap
        );

        Ok(Self {
            inner,
            declared,
            must_swap,
            offset: 1,
        })
    }

    /// Read exactly one block, reversed if the stream is foreign.
    fn read_block<B: ByteBlock>(&mut self) -> Result<B> {
        let start = self.offset;
        let mut block = B::default();
        let got = fill(&mut self.inner, block.as_mut())
            .map_err(|source| PortableError::ReadFailure {
                offset: start,
                source,
            })?;
        self.offset += got as u64;

        if got < B::WIDTH {
            return Err(PortableError::StreamExhausted {
                offset: start,
                needed: B::WIDTH,
                available: got,
            });
        }
        if self.must_swap {
            block.swap_bytes();
        }
        Ok(block)
    }

    /// Decode one scalar of type `T`.
    pub fn read<T: PortableScalar>(&mut self) -> Result<T> {
        log::trace!("[portable] read {} at offset {}", T::KIND, self.offset);
        let block = self.read_block::<T::Bytes>()?;
        Ok(T::from_native_bytes(block))
    }

    /// Decode one scalar of the given kind.
    pub fn read_scalar(&mut self, kind: ScalarKind) -> Result<Scalar> {
        Ok(match kind {
            ScalarKind::Bool => Scalar::Bool(self.read()?),
            ScalarKind::U8 => Scalar::U8(self.read()?),
            ScalarKind::I8 => Scalar::I8(self.read()?),
            ScalarKind::U16 => Scalar::U16(self.read()?),
            ScalarKind::I16 => Scalar::I16(self.read()?),
            ScalarKind::U32 => Scalar::U32(self.read()?),
            ScalarKind::I32 => Scalar::I32(self.read()?),
            ScalarKind::U64 => Scalar::U64(self.read()?),
            ScalarKind::I64 => Scalar::I64(self.read()?),
            ScalarKind::F32 => Scalar::F32(self.read()?),
            ScalarKind::F64 => Scalar::F64(self.read()?),
        })
    }

    /// Fill `dst` with consecutive scalars (no length prefix on the wire).
    pub fn read_into<T: PortableScalar>(&mut self, dst: &mut [T]) -> Result<()> {
        for slot in dst.iter_mut() {
            *slot = self.read()?;
        }
        Ok(())
    }

    /// Byte order the stream's flag declared.
    pub fn declared_endianness(&self) -> Endianness {
        self.declared
    }

    /// Whether payloads are reversed before decoding.
    pub fn must_swap(&self) -> bool {
        self.must_swap
    }

    /// Bytes consumed so far, flag included.
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Release the stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Read until `buf` is full or the stream ends; returns the bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
