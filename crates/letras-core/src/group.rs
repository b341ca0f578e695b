//! Three-digit group conversion (000–999).
//!
//! A group is split into its hundreds digit and the value of its last two
//! digits. The hundreds word comes from [`HUNDREDS`]; the last two digits are
//! spelled directly up to twenty, glued for 21–29 ("VEINTICINCO") and joined
//! with "Y" above thirty ("CUARENTA Y DOS").

use crate::lexicon::{
    accented_compound, unit_word, OneForm, AND, HUNDREDS, HUNDRED_EXACT, TENS,
};

/// Spell a three-digit group.
///
/// Only the last three decimal digits of `group` are considered. Returns an
/// empty string for a zero group; any non-zero group yields at least one word.
///
/// # Example
/// ```
/// use letras_core::group::convert_group;
/// use letras_core::OneForm;
///
/// assert_eq!(convert_group(122, OneForm::Uno), "CIENTO VEINTIDÓS");
/// assert_eq!(convert_group(100, OneForm::Uno), "CIEN");
/// assert_eq!(convert_group(31, OneForm::Un), "TREINTA Y UN");
/// ```
pub fn convert_group(group: u16, one: OneForm) -> String {
    let group = group % 1000;
    if group == 100 {
        return HUNDRED_EXACT.to_string();
    }

    let mut words: Vec<String> = Vec::with_capacity(2);

    let hundreds = usize::from(group / 100);
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds - 1].to_string());
    }

    let tail = tens_and_units(group % 100, one);
    if !tail.is_empty() {
        words.push(tail);
    }

    words.join(" ")
}

/// Spell the 0–99 tail of a group.
fn tens_and_units(value: u16, one: OneForm) -> String {
    if value <= 20 {
        return unit_word(value, one).to_string();
    }
    if let Some(accented) = accented_compound(value) {
        return accented.to_string();
    }

    let tens = TENS[usize::from(value / 10) - 2];
    let units = value % 10;
    if units != 0 && value > 30 {
        format!("{} {} {}", tens, AND, unit_word(units, one))
    } else {
        // 21–29 and round tens: the prefix is glued to the (possibly empty) unit.
        format!("{}{}", tens, unit_word(units, one))
    }
}
