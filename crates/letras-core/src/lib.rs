//! # letras-core
//!
//! Converts numbers into their written Spanish form for invoices, checks and
//! legal documents, where an amount must appear in words as well as digits.
//!
//! Whole numbers from 0 to 999,999,999 are supported. On top of the whole
//! number engine sit four presentations: plain words, money phrasing with
//! currency and cents labels, generic two-label phrasing, and invoice
//! phrasing with the fraction as literal hundredths.
//!
//! ## Quick start
//!
//! ```rust
//! use letras_core::Formatter;
//!
//! let formatter = Formatter::new();
//! assert_eq!(
//!     formatter.to_words(1234567.89, 2).unwrap(),
//!     "UN MILLÓN DOSCIENTOS TREINTA Y CUATRO MIL QUINIENTOS SESENTA Y SIETE \
//!      CON OCHENTA Y NUEVE"
//! );
//! assert_eq!(formatter.to_money(100.0, 2, "PESOS", "CENTAVOS").unwrap(), "CIEN PESOS");
//! assert_eq!(
//!     formatter.to_invoice_phrase(1.20, 2, "soles").unwrap(),
//!     "UNO CON 20/100 SOLES"
//! );
//!
//! // Apocope spells a trailing one as "UN".
//! let formatter = Formatter::new().with_apocope(true);
//! assert_eq!(formatter.to_words(201.0, 0).unwrap(), "DOSCIENTOS UN");
//! ```
//!
//! ## Modules
//!
//! - [`lexicon`] — word tables and the spelling of one
//! - [`group`] — three-digit group → words
//! - [`composer`] — whole number → words (millions, thousands, units)
//! - [`formatter`] — rounding and the four presentation modes
//! - [`error`] — error types for parse and range failures

pub mod composer;
pub mod error;
pub mod formatter;
pub mod group;
pub mod lexicon;

pub use composer::{convert_number, whole_number, MAX_SUPPORTED};
pub use error::ConversionError;
pub use formatter::{Formatter, FormatterConfig, DEFAULT_CONNECTOR};
pub use group::convert_group;
pub use lexicon::OneForm;
