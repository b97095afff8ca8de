use super::*;

#[test]
fn empty_object_yields_defaults() {
    let options = CurrencyOptions::from_json("{}").expect("options");
    assert_eq!(options, CurrencyOptions::default());
    assert_eq!(options.separators, SeparatorMode::First);
}

#[test]
fn explicit_fields_are_read() {
    let options =
        CurrencyOptions::from_json(r#"{"locale":"en-US","currency":"USD","separators":"all"}"#).expect("options");
    assert_eq!(options.locale, Locale::EnUs);
    assert_eq!(options.currency, CurrencyCode::Usd);
    assert_eq!(options.separators, SeparatorMode::All);
}

#[test]
fn unsupported_currency_is_rejected() {
    let err = CurrencyOptions::from_json(r#"{"currency":"EUR"}"#).expect_err("EUR is unsupported");
    assert!(matches!(err, FormError::Options(_)));
}

#[test]
fn unknown_field_is_rejected() {
    assert!(CurrencyOptions::from_json(r#"{"symbol":"$"}"#).is_err());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(CurrencyOptions::from_json("{").is_err());
}

#[test]
fn usd_symbol_is_dollar() {
    assert_eq!(CurrencyCode::Usd.symbol(), "$");
}
