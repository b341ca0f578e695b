//! Word tables for Spanish cardinal numbers.
//!
//! The tables are immutable. The only configurable word, the one for `1`,
//! is chosen at the point of use through [`OneForm`] instead of being
//! patched into the table.

/// Unit words for 0 through 20. Index 0 is empty: a compound with zero units
/// contributes no unit word.
pub const UNITS: [&str; 21] = [
    "", "UNO", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE", "DIEZ", "ONCE",
    "DOCE", "TRECE", "CATORCE", "QUINCE", "DIECISÉIS", "DIECISIETE", "DIECIOCHO", "DIECINUEVE",
    "VEINTE",
];

/// Tens prefixes for 20 through 100 in steps of ten. Index 0 is the bound
/// prefix for 21–29, which is glued to the unit word without a separator.
pub const TENS: [&str; 9] = [
    "VEINTI",
    "TREINTA",
    "CUARENTA",
    "CINCUENTA",
    "SESENTA",
    "SETENTA",
    "OCHENTA",
    "NOVENTA",
    "CIEN",
];

/// Hundreds words for 100 through 900. Index 0 is the compound form used for
/// 101–199; an exact 100 is spelled [`HUNDRED_EXACT`].
pub const HUNDREDS: [&str; 9] = [
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// A group equal to exactly one hundred.
pub const HUNDRED_EXACT: &str = "CIEN";

/// Word emitted for a whole-number value of zero.
pub const ZERO: &str = "CERO";

/// Joins tens and units above thirty ("TREINTA Y UNO").
pub const AND: &str = "Y";

/// Thousands label; never pluralized and never preceded by "UNO".
pub const THOUSAND: &str = "MIL";

/// Millions label for a millions group equal to one.
pub const ONE_MILLION: &str = "UN MILLÓN";

/// Millions label for every other non-zero millions group.
pub const MILLIONS: &str = "MILLONES";

/// How the number one is spelled where the apocope setting applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OneForm {
    /// Full form: "UNO".
    #[default]
    Uno,
    /// Apocopated form: "UN".
    Un,
}

impl OneForm {
    /// Map the apocope flag onto the spelling of one.
    pub fn from_apocope(apocope: bool) -> Self {
        if apocope {
            OneForm::Un
        } else {
            OneForm::Uno
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            OneForm::Uno => "UNO",
            OneForm::Un => "UN",
        }
    }
}

/// Unit word for `value` (0–20), honouring the spelling of one.
///
/// Returns an empty string for 0 and for anything above 20.
pub fn unit_word(value: u16, one: OneForm) -> &'static str {
    match value {
        1 => one.word(),
        v => UNITS.get(usize::from(v)).copied().unwrap_or(""),
    }
}

/// Correctly accented spelling of a "VEINTI-" compound whose plain
/// concatenation drops the written accent.
pub fn accented_compound(value: u16) -> Option<&'static str> {
    match value {
        22 => Some("VEINTIDÓS"),
        23 => Some("VEINTITRÉS"),
        26 => Some("VEINTISÉIS"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_are_fixed() {
        assert_eq!(UNITS.len(), 21);
        assert_eq!(TENS.len(), 9);
        assert_eq!(HUNDREDS.len(), 9);
    }

    #[test]
    fn one_follows_apocope() {
        assert_eq!(unit_word(1, OneForm::Uno), "UNO");
        assert_eq!(unit_word(1, OneForm::Un), "UN");
        assert_eq!(OneForm::from_apocope(true), OneForm::Un);
        assert_eq!(OneForm::default(), OneForm::Uno);
    }

    #[test]
    fn other_units_ignore_apocope() {
        assert_eq!(unit_word(0, OneForm::Un), "");
        assert_eq!(unit_word(16, OneForm::Un), "DIECISÉIS");
        assert_eq!(unit_word(20, OneForm::Uno), "VEINTE");
        assert_eq!(unit_word(21, OneForm::Uno), "");
    }

    #[test]
    fn only_three_compounds_need_accents() {
        let accented: Vec<u16> = (21..30).filter(|v| accented_compound(*v).is_some()).collect();
        assert_eq!(accented, vec![22, 23, 26]);
    }
}
