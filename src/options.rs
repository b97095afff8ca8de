//! Binder configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Options travel from page setup code (often as a JSON literal) into the
//! binders. Locale and currency are fixed today; their enums exist so a page
//! can state them explicitly and so unsupported values fail at parse time.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::Deserialize;

use crate::error::FormError;

/// Display locale for currency strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    /// United States English grouping and symbol placement.
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
}

/// ISO 4217 currency code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum CurrencyCode {
    /// United States dollar.
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

impl CurrencyCode {
    /// Display symbol for this currency.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
        }
    }
}

/// Which grouping separators [`crate::number::strip_currency_with`] removes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorMode {
    /// Only the first comma. Values with two or more groups keep a comma
    /// and therefore parse as NaN.
    #[default]
    First,
    /// Every comma.
    All,
}

/// Options for [`crate::currency_field::bind_currency_field`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyOptions {
    pub locale: Locale,
    pub currency: CurrencyCode,
    pub separators: SeparatorMode,
}

impl CurrencyOptions {
    /// Parse options from a JSON object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Options`] for malformed JSON, unknown fields, or
    /// unsupported locale/currency values.
    pub fn from_json(raw: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Options for [`crate::password_strength::bind_password_strength`]. Reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthOptions {}
