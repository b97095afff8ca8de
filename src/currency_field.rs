//! Keeps a text field displaying its value as currency.

#[cfg(test)]
#[path = "currency_field_test.rs"]
mod currency_field_test;

use crate::element::{EventSource, FieldEvent, TextField};
use crate::error::FormError;
use crate::number::{currency_to_number_with, format_number_with};
use crate::options::CurrencyOptions;

/// Format `field` now and again on every change event.
///
/// # Errors
///
/// Returns [`FormError::Listener`] if the change listener cannot be registered.
/// The initial reformat has already been applied in that case.
pub fn bind_currency_field<F>(field: &F, options: &CurrencyOptions) -> Result<(), FormError>
where
    F: TextField + EventSource + Clone + 'static,
{
    reformat_field(field, options);

    let handle = field.clone();
    let options = *options;
    field.listen(
        FieldEvent::Change,
        Box::new(move || {
            reformat_field(&handle, &options);
        }),
    )?;
    log::debug!("currency field bound");
    Ok(())
}

/// Read the field, normalize its text through a number, and write it back.
pub fn reformat_field<F: TextField>(field: &F, options: &CurrencyOptions) {
    let raw = field.value();
    let amount = currency_to_number_with(&raw, options);
    if amount.is_nan() {
        log::warn!("currency field value {raw:?} is not numeric");
    }
    field.set_value(&format_number_with(amount, options));
}
