//! Presentation layer: plain words, money, labeled quantities and invoices.
//!
//! Every entry point shares one pipeline:
//!
//! 1. Round half away from zero at `10^decimals`.
//! 2. Format with exactly `decimals` fractional digits and split on the point.
//! 3. Spell the whole part ("CERO" for zero) and, depending on the mode,
//!    the fractional digits.
//! 4. Join the non-empty sides with the connector word.
//!
//! Because the rounding happens before formatting, a value such as `599.999`
//! with two decimals becomes `600.00` in every mode, so the whole part is
//! "SEISCIENTOS" and the fraction is zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composer::{convert_number, parse_numeral, whole_number};
use crate::error::{ConversionError, Result};
use crate::lexicon::{OneForm, ZERO};

/// Connector word used when none is configured.
pub const DEFAULT_CONNECTOR: &str = "CON";

/// User-facing settings of a [`Formatter`].
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Word placed between the whole and fractional phrases.
    pub connector: String,
    /// Spell a trailing one as "UN" instead of "UNO".
    pub apocope: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            connector: DEFAULT_CONNECTOR.to_string(),
            apocope: false,
        }
    }
}

/// Converts numbers into their written Spanish form.
///
/// Configuration is changed through `&mut self` setters and affects every
/// later conversion. No state is kept between calls. Sharing one formatter
/// across threads while reconfiguring it requires external synchronization
/// (e.g. a `Mutex<Formatter>`).
///
/// # Example
/// ```
/// use letras_core::Formatter;
///
/// let formatter = Formatter::new();
/// assert_eq!(
///     formatter.to_money(1100.50, 2, "soles", "centimos").unwrap(),
///     "MIL CIEN SOLES CON CINCUENTA CENTIMOS"
/// );
/// assert_eq!(
///     formatter.to_invoice_phrase(123.50, 2, "soles").unwrap(),
///     "CIENTO VEINTITRÉS CON 50/100 SOLES"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    /// A formatter with connector "CON" and apocope disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn connector(&self) -> &str {
        &self.config.connector
    }

    pub fn set_connector(&mut self, connector: impl Into<String>) {
        self.config.connector = connector.into();
    }

    pub fn with_connector(mut self, connector: impl Into<String>) -> Self {
        self.set_connector(connector);
        self
    }

    pub fn apocope(&self) -> bool {
        self.config.apocope
    }

    /// Toggle apocope: when enabled a trailing one is spelled "UN".
    ///
    /// "UN MILLÓN" and "MIL" are unaffected.
    pub fn set_apocope(&mut self, enabled: bool) {
        self.config.apocope = enabled;
    }

    pub fn with_apocope(mut self, enabled: bool) -> Self {
        self.set_apocope(enabled);
        self
    }

    fn one(&self) -> OneForm {
        OneForm::from_apocope(self.config.apocope)
    }

    /// Spell a whole number, with zero spelled "CERO".
    ///
    /// # Errors
    /// Returns [`ConversionError::OutOfRange`] outside `0..=999_999_999`.
    pub fn whole_number_words(&self, number: i64) -> Result<String> {
        if number == 0 {
            return Ok(ZERO.to_string());
        }
        convert_number(number, self.one())
    }

    /// Spell `number` rounded to `decimals` fractional digits.
    ///
    /// The fractional digits are read as an integer and spelled too, so
    /// `1234567.89` gives "... SESENTA Y SIETE CON OCHENTA Y NUEVE". A zero
    /// fraction is omitted.
    pub fn to_words(&self, number: f64, decimals: u32) -> Result<String> {
        debug!(operation = "to_words", number, decimals, "spelling number");
        let split = SplitNumber::new(number, decimals)?;
        let whole = whole_number(&split.whole, self.one())?;
        let fraction = if split.fraction.is_empty() {
            String::new()
        } else {
            convert_number(parse_numeral(&split.fraction)?, self.one())?
        };
        Ok(self.join(&[&whole, &fraction]))
    }

    /// Spell a monetary amount with currency and sub-currency labels.
    ///
    /// The cents phrase is left out entirely when the fractional digits are
    /// all zero: `to_money(100.0, 2, "PESOS", "CENTAVOS")` is "CIEN PESOS".
    pub fn to_money(
        &self,
        number: f64,
        decimals: u32,
        currency: &str,
        cents: &str,
    ) -> Result<String> {
        debug!(operation = "to_money", number, decimals, currency, cents, "spelling amount");
        let split = SplitNumber::new(number, decimals)?;
        let whole = labeled(&whole_number(&split.whole, self.one())?, currency);
        let fraction = if split.fraction_is_zero() {
            String::new()
        } else {
            let words = convert_number(parse_numeral(&split.fraction)?, self.one())?;
            labeled(&words, cents)
        };
        Ok(self.join(&[&whole, &fraction]))
    }

    /// Spell a quantity with caller-chosen labels for each part, e.g.
    /// `to_labeled_string(5.2, 1, "años", "meses")` is
    /// "CINCO AÑOS CON DOS MESES".
    ///
    /// Behaves exactly like [`Formatter::to_money`].
    pub fn to_labeled_string(
        &self,
        number: f64,
        decimals: u32,
        whole_label: &str,
        fractional_label: &str,
    ) -> Result<String> {
        self.to_money(number, decimals, whole_label, fractional_label)
    }

    /// Spell an amount in invoice style: words for the whole part, the
    /// fraction as literal hundredths, and the currency at the end
    /// ("UNO CON 20/100 SOLES").
    ///
    /// With no fractional digits the fraction reads "00/100".
    ///
    /// The `NN/100` form only reads as hundredths when `decimals == 2`. Any
    /// other count prints the fractional digits as they are over 100, so
    /// `(1.2, 1)` gives "UNO CON 02/100" and `(84.2, 3)` gives
    /// "OCHENTA Y CUATRO CON 200/100".
    pub fn to_invoice_phrase(&self, number: f64, decimals: u32, currency: &str) -> Result<String> {
        debug!(
            operation = "to_invoice_phrase",
            number,
            decimals,
            currency,
            "spelling invoice total"
        );
        let split = SplitNumber::new(number, decimals)?;
        let whole = whole_number(&split.whole, self.one())?;
        let fraction = if split.fraction.is_empty() {
            "00/100".to_string()
        } else {
            format!("{:02}/100", parse_numeral(&split.fraction)?)
        };
        let phrase = self.join(&[&whole, &fraction]);
        Ok(labeled(&phrase, currency))
    }

    /// Join the non-empty parts with the upper-cased connector.
    fn join(&self, parts: &[&str]) -> String {
        let connector = self.config.connector.trim().to_uppercase();
        let separator = if connector.is_empty() {
            " ".to_string()
        } else {
            format!(" {} ", connector)
        };
        parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

/// Append an upper-cased label to a phrase, skipping blank labels.
fn labeled(words: &str, label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        words.trim().to_string()
    } else {
        format!("{} {}", words.trim(), label.to_uppercase())
    }
}

/// A number rounded and formatted to a fixed count of decimals, split on the
/// decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitNumber {
    whole: String,
    fraction: String,
}

impl SplitNumber {
    /// Negative amounts are out of range even when the whole part rounds to
    /// zero (`-0.5`). A negative zero after rounding is still zero.
    fn new(number: f64, decimals: u32) -> Result<Self> {
        let rounded = round_half_away(number, decimals);
        let formatted = format!("{:.*}", decimals as usize, rounded);
        if rounded < 0.0 {
            return Err(ConversionError::OutOfRange { numeral: formatted });
        }
        Ok(match formatted.split_once('.') {
            Some((whole, fraction)) => Self {
                whole: whole.to_string(),
                fraction: fraction.to_string(),
            },
            None => Self {
                whole: formatted,
                fraction: String::new(),
            },
        })
    }

    fn fraction_is_zero(&self) -> bool {
        self.fraction.bytes().all(|b| b == b'0')
    }
}

/// Round to `decimals` places, ties away from zero.
///
/// Values whose scaled form overflows are returned unchanged and left to the
/// formatter.
fn round_half_away(number: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(i32::MAX);
    let factor = 10f64.powi(exponent);
    let scaled = number * factor;
    if !scaled.is_finite() {
        return number;
    }
    scaled.round() / factor
}
