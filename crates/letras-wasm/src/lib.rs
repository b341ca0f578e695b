//! WASM bindings for letras-core.
//!
//! Exposes the four presentation modes as `#[wasm_bindgen]` functions that can
//! be called from JavaScript/TypeScript. Each call builds its own formatter
//! from the `apocope` and `connector` arguments, so no state crosses calls.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p letras-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/letras-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/letras_wasm.wasm
//! ```

use letras_core::{ConversionError, Formatter};
use wasm_bindgen::prelude::*;

fn formatter(apocope: bool, connector: Option<String>) -> Formatter {
    let formatter = Formatter::new().with_apocope(apocope);
    match connector {
        Some(connector) => formatter.with_connector(connector),
        None => formatter,
    }
}

fn to_js(err: ConversionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Spell a number with its decimals as words.
///
/// Throws a JS error if the number is out of range.
#[wasm_bindgen(js_name = toWords)]
pub fn to_words(
    number: f64,
    decimals: u32,
    apocope: bool,
    connector: Option<String>,
) -> Result<String, JsValue> {
    formatter(apocope, connector)
        .to_words(number, decimals)
        .map_err(to_js)
}

/// Spell a monetary amount with currency and cents labels.
#[wasm_bindgen(js_name = toMoney)]
pub fn to_money(
    number: f64,
    decimals: u32,
    currency: &str,
    cents: &str,
    apocope: bool,
    connector: Option<String>,
) -> Result<String, JsValue> {
    formatter(apocope, connector)
        .to_money(number, decimals, currency, cents)
        .map_err(to_js)
}

/// Spell a quantity with caller-chosen labels for each part.
#[wasm_bindgen(js_name = toLabeledString)]
pub fn to_labeled_string(
    number: f64,
    decimals: u32,
    whole_label: &str,
    fractional_label: &str,
    apocope: bool,
    connector: Option<String>,
) -> Result<String, JsValue> {
    formatter(apocope, connector)
        .to_labeled_string(number, decimals, whole_label, fractional_label)
        .map_err(to_js)
}

/// Spell an amount invoice-style ("UNO CON 20/100 SOLES").
#[wasm_bindgen(js_name = toInvoicePhrase)]
pub fn to_invoice_phrase(
    number: f64,
    decimals: u32,
    currency: &str,
    apocope: bool,
    connector: Option<String>,
) -> Result<String, JsValue> {
    formatter(apocope, connector)
        .to_invoice_phrase(number, decimals, currency)
        .map_err(to_js)
}
