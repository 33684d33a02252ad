// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use hdds_portable::{PortableReader, ScalarKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout selector byte, then the stream itself
    let Some((&selector, stream)) = data.split_first() else {
        return;
    };
    let Ok(mut reader) = PortableReader::new(stream) else {
        return;
    };

    let kinds = ScalarKind::ALL;
    let mut i = usize::from(selector);
    loop {
        let kind = kinds[i % kinds.len()];
        let before = reader.bytes_read();
        match reader.read_scalar(kind) {
            Ok(value) => {
                assert_eq!(value.kind(), kind);
                assert_eq!(reader.bytes_read() - before, kind.width() as u64);
            }
            Err(e) => {
                assert!(e.is_exhausted());
                break;
            }
        }
        i = i.wrapping_add(1);
    }
});
