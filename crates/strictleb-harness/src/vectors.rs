//! Conformance vectors for the four decoders.
//!
//! Eight named tables, run in this order by [`conformance_suite`]:
//!
//! | Case         | Type | Focus                                               |
//! |--------------|------|-----------------------------------------------------|
//! | `i32leb`     | i32  | short values, sign extension, padding, truncation   |
//! | `i32leb_ext` | i32  | 5th-byte sign fill, 6-group inputs                  |
//! | `u32leb`     | u32  | 1–5 byte values                                     |
//! | `u32leb_ext` | u32  | 5th-byte zero fill, 6-group inputs                  |
//! | `i64leb`     | i64  | 1–10 byte values, negative padding                  |
//! | `i64leb_ext` | i64  | 10th-byte sign fill, 11-group inputs                |
//! | `u64leb`     | u64  | 1–10 byte values                                    |
//! | `u64leb_ext` | u64  | 10th-byte zero fill, 11-group inputs                |
//!
//! Lengths are the exact number of bytes up to and including the
//! terminating group; trailing bytes in a row are never consumed.

use strictleb_wire::{ErrorKind, LebType, LebValue};

use crate::case::{CaseFailure, TestCase};
use crate::check::{Vector, check_vector};

/// A named table of vectors for one decoder.
#[derive(Clone, Copy, Debug)]
pub struct VectorTable {
    pub name: &'static str,
    pub ty: LebType,
    pub vectors: &'static [Vector],
}

impl VectorTable {
    /// Check every row, stopping at the first mismatch.
    ///
    /// # Errors
    ///
    /// Returns the first row's [`CaseFailure`], prefixed with its index.
    pub fn check(&self) -> Result<(), CaseFailure> {
        for (i, vector) in self.vectors.iter().enumerate() {
            check_vector(self.ty, vector).map_err(|f| f.context(format!("vector #{i}")))?;
        }
        Ok(())
    }
}

/// Every conformance table, in run order.
pub static TABLES: [VectorTable; 8] = [
    VectorTable {
        name: "i32leb",
        ty: LebType::I32,
        vectors: I32LEB,
    },
    VectorTable {
        name: "i32leb_ext",
        ty: LebType::I32,
        vectors: I32LEB_EXT,
    },
    VectorTable {
        name: "u32leb",
        ty: LebType::U32,
        vectors: U32LEB,
    },
    VectorTable {
        name: "u32leb_ext",
        ty: LebType::U32,
        vectors: U32LEB_EXT,
    },
    VectorTable {
        name: "i64leb",
        ty: LebType::I64,
        vectors: I64LEB,
    },
    VectorTable {
        name: "i64leb_ext",
        ty: LebType::I64,
        vectors: I64LEB_EXT,
    },
    VectorTable {
        name: "u64leb",
        ty: LebType::U64,
        vectors: U64LEB,
    },
    VectorTable {
        name: "u64leb_ext",
        ty: LebType::U64,
        vectors: U64LEB_EXT,
    },
];

/// The conformance suite as runnable cases, one per table.
pub fn conformance_suite() -> Vec<TestCase> {
    TABLES
        .iter()
        .map(|table| TestCase::new(table.name, move || table.check()))
        .collect()
}

#[rustfmt::skip]
const I32LEB: &[Vector] = &[
    Vector::ok(&[0x00], 1, LebValue::I32(0)),
    Vector::ok(&[0x01], 1, LebValue::I32(1)),
    Vector::ok(&[0x0D], 1, LebValue::I32(13)),
    Vector::ok(&[0x70], 1, LebValue::I32(-16)),
    Vector::ok(&[0x0F, 0x00], 1, LebValue::I32(15)),
    Vector::ok(&[0x1F, 0x06], 1, LebValue::I32(31)),
    Vector::ok(&[0x74], 1, LebValue::I32(-12)),
    Vector::ok(&[0xF3, 0x7F], 2, LebValue::I32(-13)),
    Vector::ok(&[0xF1, 0xFF, 0x7F], 3, LebValue::I32(-15)),
    Vector::ok(&[0xA7, 0x7F], 2, LebValue::I32(-89)),
    Vector::ok(&[0xA7, 0xFF, 0x7F], 3, LebValue::I32(-89)),
    Vector::ok(&[0xA7, 0xFF, 0xFF, 0x7F], 4, LebValue::I32(-89)),
    Vector::ok(&[0x80, 0x01], 2, LebValue::I32(128)),
    Vector::ok(&[0x83, 0x80, 0x03], 3, LebValue::I32(49_155)),
    Vector::ok(&[0x83, 0x80, 0x83, 0x00], 4, LebValue::I32(49_155)),
    Vector::ok(&[0x83, 0x80, 0x83, 0x80, 0x00], 5, LebValue::I32(49_155)),
    Vector::err(&[0x80], ErrorKind::Truncated),
    Vector::err(&[0x8E, 0x8E], ErrorKind::Truncated),
    Vector::err(&[0x9E, 0x9F, 0x99], ErrorKind::Truncated),
    Vector::err(&[0xFF, 0xFF, 0xFF, 0xFF], ErrorKind::Truncated),
    Vector::ok(&[0x21], 1, LebValue::I32(33)),
    Vector::ok(&[0xE7, 0x01], 2, LebValue::I32(231)),
    Vector::ok(&[0xD1, 0x0C], 2, LebValue::I32(1617)),
    Vector::ok(&[0xB7, 0xD8, 0x00], 3, LebValue::I32(11_319)),
    Vector::ok(&[0x81, 0xEB, 0x04], 3, LebValue::I32(79_233)),
    Vector::ok(&[0x87, 0xED, 0x21], 3, LebValue::I32(554_631)),
    Vector::ok(&[0xB1, 0xFB, 0xEC, 0x01], 4, LebValue::I32(3_882_417)),
    Vector::ok(&[0xD7, 0xDF, 0xFA, 0x0C], 4, LebValue::I32(27_176_919)),
    Vector::ok(&[0xE1, 0x9D, 0xDB, 0xDA, 0x00], 5, LebValue::I32(190_238_433)),
    Vector::ok(&[0x61], 1, LebValue::I32(-31)),
    Vector::ok(&[0xA7, 0x7E], 2, LebValue::I32(-217)),
    Vector::ok(&[0x91, 0x74], 2, LebValue::I32(-1519)),
    Vector::ok(&[0xF7, 0xAC, 0x7F], 3, LebValue::I32(-10_633)),
    Vector::ok(&[0xC1, 0xBA, 0x7B], 3, LebValue::I32(-74_431)),
    Vector::ok(&[0xC7, 0x99, 0x60], 3, LebValue::I32(-521_017)),
    Vector::ok(&[0xF1, 0xB2, 0xA1, 0x7E], 4, LebValue::I32(-3_647_119)),
    Vector::ok(&[0x97, 0xE4, 0xE9, 0x73], 4, LebValue::I32(-25_529_833)),
    Vector::ok(&[0xA1, 0xBD, 0xE4, 0xAA, 0x7F], 5, LebValue::I32(-178_708_831)),
];

#[rustfmt::skip]
const I32LEB_EXT: &[Vector] = &[
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x7F], 5, LebValue::I32(-268_435_456)),
    Vector::err(&[0x81, 0x84, 0x87, 0x8A, 0x08], ErrorKind::Overflow),
    Vector::err(&[0x82, 0x85, 0x88, 0x8B, 0x09], ErrorKind::Overflow),
    Vector::err(&[0x83, 0x86, 0x89, 0x8C, 0x10], ErrorKind::Overflow),
    Vector::err(&[0x8A, 0x8D, 0x89, 0x86, 0x20], ErrorKind::Overflow),
    Vector::err(&[0x8B, 0x8E, 0x88, 0x85, 0x40], ErrorKind::Overflow),
    Vector::err(&[0x8B, 0x8E, 0x88, 0x85, 0x70], ErrorKind::Overflow),
    Vector::err(&[0x8B, 0x8E, 0x88, 0x85, 0x71], ErrorKind::Overflow),
    Vector::err(&[0x8C, 0x8F, 0x87, 0x84, 0x6E], ErrorKind::Overflow),
    Vector::err(&[0x83, 0x80, 0x83, 0x80, 0x80, 0x00], ErrorKind::TooLong),
    Vector::err(&[0xA7, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], ErrorKind::TooLong),
    Vector::err(&[0x83, 0x80, 0x83, 0x80, 0x80, 0x01], ErrorKind::TooLong),
    Vector::err(&[0xA7, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E], ErrorKind::TooLong),
];

#[rustfmt::skip]
const U32LEB: &[Vector] = &[
    Vector::ok(&[0x70], 1, LebValue::U32(112)),
    Vector::ok(&[0xA7, 0x7F], 2, LebValue::U32(16_295)),
    Vector::ok(&[0xA7, 0xFE, 0x7F], 3, LebValue::U32(2_096_935)),
    Vector::ok(&[0xA7, 0xFE, 0xFD, 0x7F], 4, LebValue::U32(268_402_471)),
    Vector::ok(&[0xA7, 0xF0, 0xF1, 0xF2, 0x0E], 5, LebValue::U32(3_999_037_479)),
    Vector::ok(&[0x1D], 1, LebValue::U32(29)),
    Vector::ok(&[0xCB, 0x01], 2, LebValue::U32(203)),
    Vector::ok(&[0x8D, 0x0B], 2, LebValue::U32(1421)),
    Vector::ok(&[0xDB, 0x4D], 2, LebValue::U32(9947)),
    Vector::ok(&[0xFD, 0x9F, 0x04], 3, LebValue::U32(69_629)),
    Vector::ok(&[0xEB, 0xDF, 0x1D], 3, LebValue::U32(487_403)),
    Vector::ok(&[0xED, 0x9E, 0xD0, 0x01], 4, LebValue::U32(3_411_821)),
    Vector::ok(&[0xFB, 0xD7, 0xB1, 0x0B], 4, LebValue::U32(23_882_747)),
    Vector::ok(&[0xDD, 0xE7, 0xDB, 0x4F], 4, LebValue::U32(167_179_229)),
    Vector::ok(&[0x8B, 0xD6, 0x82, 0xAE, 0x04], 5, LebValue::U32(1_170_254_603)),
    Vector::ok(&[0xCD, 0xDA, 0x92, 0xC2, 0x0E], 5, LebValue::U32(3_896_814_925)),
    Vector::ok(&[0x9B, 0xFA, 0x82, 0xCF, 0x05], 5, LebValue::U32(1_507_900_699)),
    Vector::ok(&[0xBD, 0xD7, 0x94, 0xA9, 0x07], 5, LebValue::U32(1_965_370_301)),
    Vector::ok(&[0xAB, 0xE4, 0x90, 0xA0, 0x03], 5, LebValue::U32(872_690_219)),
    Vector::ok(&[0xAD, 0xBE, 0xF5, 0xE0, 0x06], 5, LebValue::U32(1_813_864_237)),
    Vector::err(&[0xA7, 0xF0, 0xF1, 0xF2, 0x1E], ErrorKind::Overflow),
    Vector::err(&[0xA7, 0xF0, 0xF1, 0xF2, 0xFE], ErrorKind::Truncated),
];

#[rustfmt::skip]
const U32LEB_EXT: &[Vector] = &[
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x00], 5, LebValue::U32(0)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x01], 5, LebValue::U32(268_435_456)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x07], 5, LebValue::U32(1_879_048_192)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x0D], 5, LebValue::U32(3_489_660_928)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x0F], 5, LebValue::U32(4_026_531_840)),
    Vector::err(&[0x83, 0x86, 0x89, 0x8C, 0x10], ErrorKind::Overflow),
    Vector::err(&[0x8A, 0x8D, 0x89, 0x86, 0x20], ErrorKind::Overflow),
    Vector::err(&[0x8B, 0x8E, 0x88, 0x85, 0x40], ErrorKind::Overflow),
    Vector::err(&[0x8B, 0x8E, 0x88, 0x85, 0x70], ErrorKind::Overflow),
    Vector::err(&[0x8C, 0x8F, 0x87, 0x84, 0x7E], ErrorKind::Overflow),
    Vector::err(&[0xA7, 0xF0, 0xF1, 0xF2, 0x8E, 0x00], ErrorKind::TooLong),
    Vector::err(&[0xA7, 0xF0, 0xF1, 0xF2, 0x80, 0x00], ErrorKind::TooLong),
    Vector::err(&[0xA7, 0xF0, 0xF1, 0xF2, 0x80, 0x01], ErrorKind::TooLong),
];

#[rustfmt::skip]
const I64LEB: &[Vector] = &[
    Vector::ok(&[0x00], 1, LebValue::I64(0)),
    Vector::ok(&[0x01], 1, LebValue::I64(1)),
    Vector::ok(&[0x0D], 1, LebValue::I64(13)),
    Vector::ok(&[0x70], 1, LebValue::I64(-16)),
    Vector::ok(&[0xA7, 0x7F], 2, LebValue::I64(-89)),
    Vector::ok(&[0xA6, 0xFF, 0x7F], 3, LebValue::I64(-90)),
    Vector::ok(&[0xA5, 0xFF, 0xFF, 0x7F], 4, LebValue::I64(-91)),
    Vector::ok(&[0xA4, 0xFF, 0xFF, 0x7F], 4, LebValue::I64(-92)),
    Vector::ok(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 6, LebValue::I64(-93)),
    Vector::ok(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 7, LebValue::I64(-93)),
    Vector::ok(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 8, LebValue::I64(-93)),
    Vector::ok(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 9, LebValue::I64(-93)),
    Vector::ok(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 10, LebValue::I64(-93)),
    Vector::ok(&[0xF4, 0xD2, 0xA6, 0x87, 0x01], 5, LebValue::I64(283_748_724)),
    Vector::ok(&[0x81, 0x81, 0x81, 0x81, 0x01], 5, LebValue::I64(270_549_121)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x05], 5, LebValue::I64(1_350_615_297)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x06], 6, LebValue::I64(207_509_045_505)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x07], 7, LebValue::I64(30_993_834_623_233)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x08], 8, LebValue::I64(4_534_593_461_993_729)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x09], 9, LebValue::I64(653_052_939_803_345_153)),
    Vector::ok(&[0x63], 1, LebValue::I64(-29)),
    Vector::ok(&[0xB5, 0x7E], 2, LebValue::I64(-203)),
    Vector::ok(&[0xF3, 0x74], 2, LebValue::I64(-1421)),
    Vector::ok(&[0xA5, 0xB2, 0x7F], 3, LebValue::I64(-9947)),
    Vector::ok(&[0x83, 0xE0, 0x7B], 3, LebValue::I64(-69_629)),
    Vector::ok(&[0x95, 0xA0, 0x62], 3, LebValue::I64(-487_403)),
    Vector::ok(&[0x93, 0xE1, 0xAF, 0x7E], 4, LebValue::I64(-3_411_821)),
    Vector::ok(&[0x85, 0xA8, 0xCE, 0x74], 4, LebValue::I64(-23_882_747)),
    Vector::ok(&[0xA3, 0x98, 0xA4, 0xB0, 0x7F], 5, LebValue::I64(-167_179_229)),
    Vector::ok(&[0xF5, 0xA9, 0xFD, 0xD1, 0x7B], 5, LebValue::I64(-1_170_254_603)),
    Vector::ok(&[0xB3, 0xA5, 0xED, 0xBD, 0x61], 5, LebValue::I64(-8_191_782_221)),
    Vector::ok(&[0xE5, 0x85, 0xFD, 0xB0, 0xAA, 0x7E], 6, LebValue::I64(-57_342_475_547)),
    Vector::ok(&[0xC3, 0xA8, 0xEB, 0xD6, 0xA8, 0x74], 6, LebValue::I64(-401_397_328_829)),
    Vector::ok(&[0xD5, 0x9B, 0xEF, 0xDF, 0x9C, 0xAE, 0x7F], 7, LebValue::I64(-2_809_781_301_803)),
    Vector::ok(&[0xD3, 0xC1, 0x8A, 0x9F, 0xC9, 0xC3, 0x7B], 7, LebValue::I64(-19_668_469_112_621)),
    Vector::ok(&[0xC5, 0xCB, 0xC9, 0xD9, 0x80, 0xD9, 0x60], 7, LebValue::I64(-137_679_283_788_347)),
    Vector::ok(&[0xE3, 0x90, 0x83, 0xF3, 0x84, 0xEF, 0xA4, 0x7E], 8, LebValue::I64(-963_754_986_518_429)),
    Vector::ok(&[0xB5, 0xF5, 0x95, 0xA5, 0xA2, 0x89, 0x82, 0x74], 8, LebValue::I64(-6_746_284_905_629_003)),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x08], ErrorKind::Overflow),
    Vector::err(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x6F], ErrorKind::Overflow),
];

#[rustfmt::skip]
const I64LEB_EXT: &[Vector] = &[
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F], 10, LebValue::I64(i64::MIN)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00], 10, LebValue::I64(0)),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x04], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x08], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x10], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x20], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x40], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], ErrorKind::Truncated),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x50], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x30], ErrorKind::Overflow),
    Vector::err(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], ErrorKind::TooLong),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x80, 0x01], ErrorKind::TooLong),
    Vector::err(&[0xA3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E], ErrorKind::TooLong),
];

#[rustfmt::skip]
const U64LEB: &[Vector] = &[
    Vector::ok(&[0x00], 1, LebValue::U64(0)),
    Vector::ok(&[0x01], 1, LebValue::U64(1)),
    Vector::ok(&[0x0D], 1, LebValue::U64(13)),
    Vector::ok(&[0x70], 1, LebValue::U64(112)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x09], 9, LebValue::U64(653_052_939_803_345_153)),
    Vector::ok(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x00], 10, LebValue::U64(653_052_939_803_345_153)),
    Vector::ok(&[0x1A], 1, LebValue::U64(26)),
    Vector::ok(&[0xB6, 0x01], 2, LebValue::U64(182)),
    Vector::ok(&[0xFA, 0x09], 2, LebValue::U64(1274)),
    Vector::ok(&[0xD6, 0x45], 2, LebValue::U64(8918)),
    Vector::ok(&[0xDA, 0xE7, 0x03], 3, LebValue::U64(62_426)),
    Vector::ok(&[0xF6, 0xD5, 0x1A], 3, LebValue::U64(436_982)),
    Vector::ok(&[0xBA, 0xD9, 0xBA, 0x01], 4, LebValue::U64(3_058_874)),
    Vector::ok(&[0x96, 0xF2, 0x9A, 0x0A], 4, LebValue::U64(21_412_118)),
    Vector::ok(&[0x9A, 0x9F, 0xBC, 0x47], 4, LebValue::U64(149_884_826)),
    Vector::ok(&[0xB6, 0xDA, 0xA5, 0xF4, 0x03], 5, LebValue::U64(1_049_193_782)),
    Vector::ok(&[0xFA, 0xF8, 0x87, 0xAE, 0x1B], 5, LebValue::U64(7_344_356_474)),
    Vector::ok(&[0xD6, 0xCE, 0xB7, 0xC2, 0xBF, 0x01], 6, LebValue::U64(51_410_495_318)),
    Vector::ok(&[0xDA, 0xA6, 0x85, 0xD1, 0xBC, 0x0A], 6, LebValue::U64(359_873_467_226)),
    Vector::ok(&[0xF6, 0x8E, 0xA5, 0xB7, 0xA8, 0x49], 6, LebValue::U64(2_519_114_270_582)),
    Vector::ok(&[0xBA, 0xE8, 0x83, 0x83, 0x9B, 0x81, 0x04], 7, LebValue::U64(17_633_799_894_074)),
    Vector::ok(&[0x96, 0xDB, 0x9A, 0x95, 0xBD, 0x88, 0x1C], 7, LebValue::U64(123_436_599_258_518)),
    Vector::ok(&[0x9A, 0xFE, 0xBA, 0x94, 0xAC, 0xBB, 0xC4, 0x01], 8, LebValue::U64(864_056_194_809_626)),
    Vector::ok(&[0xB6, 0xF3, 0x9C, 0x8F, 0xB5, 0x9F, 0xDF, 0x0A], 8, LebValue::U64(6_048_393_363_667_382)),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x02], ErrorKind::Overflow),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x80, 0x01], ErrorKind::TooLong),
];

#[rustfmt::skip]
const U64LEB_EXT: &[Vector] = &[
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01], 10, LebValue::U64(1 << 63)),
    Vector::ok(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00], 10, LebValue::U64(0)),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x04], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x08], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x10], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x20], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x40], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], ErrorKind::Truncated),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x50], ErrorKind::Overflow),
    Vector::err(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x30], ErrorKind::Overflow),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x80, 0x00], ErrorKind::TooLong),
    Vector::err(&[0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x80, 0x01], ErrorKind::TooLong),
];
