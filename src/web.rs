//! Browser adapter: `web-sys` implementations of the element seams and
//! `wasm-bindgen` entry points for page setup scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page loads the compiled module, then calls `currencyFormat(input)` and
//! `passwordStrengthMeter(input)` once per field. Listener closures are leaked
//! for the lifetime of the page.
//!
//! The password scorer is the page-global `zxcvbn` function; it must be loaded
//! before the first input event fires.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlMeterElement};

use crate::color::random_color;
use crate::currency_field::bind_currency_field;
use crate::element::{EventSource, FieldEvent, Handler, LabelTarget, MeterTarget, TextField};
use crate::error::FormError;
use crate::number::{currency_to_number, format_number, strip_currency};
use crate::options::{CurrencyOptions, StrengthOptions};
use crate::password_strength::{Scorer, StrengthScore, StrengthTargets, bind_password_strength, score_from_f64};

/// Well-known id of the strength meter element.
pub const METER_ID: &str = "password-strength-meter";
/// Well-known id of the strength label element.
pub const LABEL_ID: &str = "password-strength-text";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = zxcvbn)]
    fn zxcvbn_js(password: &str) -> Result<JsValue, JsValue>;
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<FormError> for JsValue {
    fn from(err: FormError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl TextField for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value);
    }
}

impl EventSource for HtmlInputElement {
    fn listen(&self, event: FieldEvent, handler: Handler) -> Result<(), FormError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|e| FormError::Listener(describe(&e)))?;
        closure.forget();
        Ok(())
    }
}

impl MeterTarget for HtmlMeterElement {
    fn set_meter(&self, value: f64) {
        self.set_value(value);
    }
}

impl LabelTarget for Element {
    fn set_label(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

impl StrengthTargets<HtmlMeterElement, Element> {
    /// Look up the meter and label by their well-known ids.
    ///
    /// Only one field per page can use these targets; pass explicit elements
    /// to [`bind_password_strength`] for anything else.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingElement`] if either element is absent or
    /// the meter id does not name a `<meter>`.
    pub fn from_document() -> Result<Self, FormError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FormError::MissingElement("document".to_owned()))?;
        let meter = document
            .get_element_by_id(METER_ID)
            .ok_or_else(|| FormError::MissingElement(METER_ID.to_owned()))?
            .dyn_into::<HtmlMeterElement>()
            .map_err(|_| FormError::MissingElement(METER_ID.to_owned()))?;
        let label = document
            .get_element_by_id(LABEL_ID)
            .ok_or_else(|| FormError::MissingElement(LABEL_ID.to_owned()))?;
        Ok(Self { meter, label })
    }
}

/// Scorer backed by the page-global `zxcvbn` function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZxcvbnScorer;

impl Scorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> Result<StrengthScore, FormError> {
        let result = zxcvbn_js(password).map_err(|e| FormError::Scorer(describe(&e)))?;
        let raw = js_sys::Reflect::get(&result, &JsValue::from_str("score"))
            .map_err(|e| FormError::Scorer(describe(&e)))?;
        let Some(score) = raw.as_f64() else {
            return Err(FormError::Scorer("result has no numeric score".to_owned()));
        };
        score_from_f64(score)
    }
}

/// Install console logging and the panic hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Format `field` as currency now and on every change.
///
/// `options` is an optional JSON object, e.g. `{"separators":"all"}`.
///
/// # Errors
///
/// Rejects malformed options or a refused listener registration.
#[wasm_bindgen(js_name = currencyFormat)]
pub fn currency_format(field: HtmlInputElement, options: Option<String>) -> Result<(), JsValue> {
    let options = match options {
        Some(raw) => CurrencyOptions::from_json(&raw)?,
        None => CurrencyOptions::default(),
    };
    bind_currency_field(&field, &options)?;
    Ok(())
}

/// Attach a strength meter to `field` using the well-known meter and label ids.
///
/// # Errors
///
/// Rejects a page missing either well-known element.
#[wasm_bindgen(js_name = passwordStrengthMeter)]
pub fn password_strength_meter(field: HtmlInputElement) -> Result<(), JsValue> {
    let targets = StrengthTargets::from_document()?;
    bind_password_strength(&field, targets, ZxcvbnScorer, &StrengthOptions::default())?;
    Ok(())
}

/// Attach a strength meter to `field` driving the given meter and label.
///
/// # Errors
///
/// Rejects a refused listener registration.
#[wasm_bindgen(js_name = passwordStrengthMeterFor)]
pub fn password_strength_meter_for(field: HtmlInputElement, meter: HtmlMeterElement, label: Element) -> Result<(), JsValue> {
    bind_password_strength(&field, StrengthTargets { meter, label }, ZxcvbnScorer, &StrengthOptions::default())?;
    Ok(())
}

#[wasm_bindgen(js_name = stripCurrency)]
pub fn strip_currency_js(raw: &str) -> String {
    strip_currency(raw)
}

#[wasm_bindgen(js_name = currencyToNumber)]
pub fn currency_to_number_js(raw: &str) -> f64 {
    currency_to_number(raw)
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(amount: f64) -> String {
    format_number(amount)
}

#[wasm_bindgen(js_name = getRandomColor)]
pub fn random_color_js() -> String {
    random_color()
}
