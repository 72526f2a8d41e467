#![no_main]

use libfuzzer_sys::fuzz_target;
use strictleb_wire::{decode_as, LebType};

// Fuzz target: strict LEB128 decoding for every integer type.
//
// Catches bugs in:
// - Shift overflow on the last group
// - Reported lengths past the input or past max_groups
// - Error offsets pointing outside the input
fuzz_target!(|data: &[u8]| {
    for ty in LebType::ALL {
        match decode_as(ty, data) {
            Ok((value, len)) => {
                assert_eq!(value.ty(), ty);
                assert!(len >= 1 && len <= ty.max_groups() && len <= data.len());
                assert_eq!(data[len - 1] & 0x80, 0);
            }
            Err(e) => {
                assert_eq!(e.ty(), ty);
                assert!(e.status() < 0);
                assert!(e.offset() <= data.len());
            }
        }
    }
});
