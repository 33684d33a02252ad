// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Output codec: flag byte, then raw scalar payloads.

use crate::config::CodecOptions;
use crate::endian::Endianness;
use crate::error::{PortableError, Result};
use crate::scalar::{PortableScalar, Scalar};
use crate::swap::ByteBlock;
use std::io::Write;

/// Writes portable scalars to a byte stream.
///
/// The endianness flag is written during construction. With default
/// options every payload is written in host byte order and the reader
/// performs any swap.
///
/// # Example
///
/// ```
/// use hdds_portable::PortableWriter;
///
/// let mut writer = PortableWriter::new(Vec::new())?;
/// writer.write(42u32)?;
/// writer.write(-1.5f64)?;
/// let bytes = writer.into_inner();
/// assert_eq!(bytes.len(), 1 + 4 + 8);
/// # Ok::<(), hdds_portable::PortableError>(())
/// ```
#[derive(Debug)]
pub struct PortableWriter<W: Write> {
    inner: W,
    endianness: Endianness,
    swap: bool,
    offset: u64,
}

impl<W: Write> PortableWriter<W> {
    /// Bind to `inner` and write the host endianness flag.
    pub fn new(inner: W) -> Result<Self> {
        Self::with_options(inner, CodecOptions::default())
    }

    /// Bind to `inner` with explicit options and write the flag.
    pub fn with_options(inner: W, options: CodecOptions) -> Result<Self> {
        let endianness = options.endianness.resolve();
        let mut writer = Self {
            inner,
            endianness,
            swap: endianness != Endianness::native(),
            offset: 0,
        };
        writer.write_raw(&[endianness.flag()])?;
        log::debug!(
            "[portable] writer flag={} ({}), host={}, swap_on_write={}",
            endianness.flag(),
            endianness,
            Endianness::native(),
            writer.swap
        );
        Ok(writer)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(|source| PortableError::WriteFailure {
                offset: self.offset,
                source,
            })?;
        self.offset += bytes.len() as u64;
        Ok(())
    }

    /// Append one scalar.
    pub fn write<T: PortableScalar>(&mut self, value: T) -> Result<()> {
        let mut bytes = value.to_native_bytes();
        if self.swap {
            bytes.swap_bytes();
        }
        log::trace!(
            "[portable] write {} at offset {}",
            T::KIND,
            self.offset
        );
        self.write_raw(bytes.as_ref())
    }

    /// Append a dynamically typed scalar.
    pub fn write_scalar(&mut self, value: Scalar) -> Result<()> {
        match value {
            Scalar::Bool(v) => self.write(v),
            Scalar::U8(v) => self.write(v),
            Scalar::I8(v) => self.write(v),
            Scalar::U16(v) => self.write(v),
            Scalar::I16(v) => self.write(v),
            Scalar::U32(v) => self.write(v),
            Scalar::I32(v) => self.write(v),
            Scalar::U64(v) => self.write(v),
            Scalar::I64(v) => self.write(v),
            Scalar::F32(v) => self.write(v),
            Scalar::F64(v) => self.write(v),
        }
    }

    /// Append every element of `values`, with no length prefix.
    pub fn write_slice<T: PortableScalar>(&mut self, values: &[T]) -> Result<()> {
        for &value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Byte order the payloads are written in (the order the flag declares).
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Bytes written so far, flag included.
    pub fn bytes_written(&self) -> u64 {
        self.offset
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner
            .flush()
            .map_err(|source| PortableError::WriteFailure {
                offset: self.offset,
                source,
            })
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Release the stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_flag_written_on_construction() {
        let writer = PortableWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.bytes_written(), 1);
        assert_eq!(writer.endianness(), Endianness::native());
        assert_eq!(writer.into_inner(), vec![Endianness::native().flag()]);
    }

    #[test]
    fn test_native_order_payload() {
        let mut writer = PortableWriter::new(Vec::new()).unwrap();
        writer.write(0x0102_0304_u32).unwrap();
        let bytes = writer.into_inner();
        assert_eq!(&bytes[1..], &0x0102_0304_u32.to_ne_bytes());
    }

    #[test]
    fn test_pinned_order_swaps_when_foreign() {
        let mut little = PortableWriter::with_options(Vec::new(), CodecOptions::little()).unwrap();
        let mut big = PortableWriter::with_options(Vec::new(), CodecOptions::big()).unwrap();
        little.write(0x0102_0304_u32).unwrap();
        big.write(0x0102_0304_u32).unwrap();

        assert_eq!(little.into_inner(), vec![0, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(big.into_inner(), vec![1, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_write_scalar_widths() {
        let mut writer = PortableWriter::new(Vec::new()).unwrap();
        let mut expected = 1;
        for value in [
            Scalar::Bool(true),
            Scalar::I8(-3),
            Scalar::U16(9),
            Scalar::F32(0.25),
            Scalar::I64(i64::MIN),
        ] {
            writer.write_scalar(value).unwrap();
            expected += value.width() as u64;
            assert_eq!(writer.bytes_written(), expected);
        }
    }

    #[test]
    fn test_write_slice_has_no_prefix() {
        let mut writer = PortableWriter::new(Vec::new()).unwrap();
        writer.write_slice(&[1u16, 2, 3]).unwrap();
        assert_eq!(writer.bytes_written(), 1 + 6);
    }

    #[test]
    fn test_full_buffer_reports_write_failure() {
        let mut buffer = [0u8; 3];
        let mut writer = PortableWriter::new(&mut buffer[..]).unwrap();
        writer.write(7u16).unwrap();

        match writer.write(7u8) {
            Err(PortableError::WriteFailure { offset, source }) => {
                assert_eq!(offset, 3);
                assert_eq!(source.kind(), io::ErrorKind::WriteZero);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_empty_sink_fails_on_flag() {
        let mut buffer = [0u8; 0];
        match PortableWriter::new(&mut buffer[..]) {
            Err(PortableError::WriteFailure { offset: 0, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
