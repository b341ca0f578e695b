//! Segment composition: whole numbers from 0 to 999,999,999.
//!
//! The number is split into millions, thousands and units groups. Each
//! non-zero group is spelled with [`convert_group`] and given its magnitude
//! label. A group equal to one is special-cased per magnitude: "UN MILLÓN",
//! a bare "MIL", and "UNO"/"UN" for the units group depending on apocope.

use std::num::IntErrorKind;

use crate::error::{ConversionError, Result};
use crate::group::convert_group;
use crate::lexicon::{OneForm, MILLIONS, ONE_MILLION, THOUSAND, ZERO};

/// Largest whole number that can be spelled.
pub const MAX_SUPPORTED: i64 = 999_999_999;

/// Spell a whole number in the range `0..=999_999_999`.
///
/// Zero spells as an empty string; callers wanting "CERO" go through
/// [`whole_number`].
///
/// # Errors
/// Returns [`ConversionError::OutOfRange`] for negative numbers and numbers
/// above [`MAX_SUPPORTED`].
pub fn convert_number(number: i64, one: OneForm) -> Result<String> {
    if !(0..=MAX_SUPPORTED).contains(&number) {
        return Err(ConversionError::OutOfRange {
            numeral: number.to_string(),
        });
    }

    // Each group is below 1000, so the narrowing casts are lossless.
    let millions = (number / 1_000_000) as u16;
    let thousands = (number / 1_000 % 1_000) as u16;
    let units = (number % 1_000) as u16;

    let mut segments: Vec<String> = Vec::with_capacity(3);

    match millions {
        0 => {}
        1 => segments.push(ONE_MILLION.to_string()),
        m => segments.push(format!("{} {}", convert_group(m, one), MILLIONS)),
    }

    match thousands {
        0 => {}
        1 => segments.push(THOUSAND.to_string()),
        t => segments.push(format!("{} {}", convert_group(t, one), THOUSAND)),
    }

    match units {
        0 => {}
        1 => segments.push(one.word().to_string()),
        u => segments.push(convert_group(u, one)),
    }

    Ok(segments.join(" "))
}

/// Spell the whole-number part of a formatted numeral.
///
/// A numeral whose value is zero spells as "CERO"; anything else is parsed and
/// handed to [`convert_number`].
///
/// # Errors
/// Returns [`ConversionError::Parse`] if `numeral` is not an integer and
/// [`ConversionError::OutOfRange`] if it is outside `0..=999_999_999`
/// (including integers too large to parse).
pub fn whole_number(numeral: &str, one: OneForm) -> Result<String> {
    if numeral == "0" {
        return Ok(ZERO.to_string());
    }
    let value = parse_numeral(numeral)?;
    if value == 0 {
        return Ok(ZERO.to_string());
    }
    convert_number(value, one)
}

/// Parse a run of decimal digits produced by fixed-point formatting.
pub(crate) fn parse_numeral(numeral: &str) -> Result<i64> {
    numeral.parse::<i64>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::OutOfRange {
            numeral: numeral.to_string(),
        },
        _ => ConversionError::Parse {
            numeral: numeral.to_string(),
            source,
        },
    })
}
