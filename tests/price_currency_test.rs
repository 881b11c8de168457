use product_page_extract::{compute_discount, extract_price, CurrencyCode, Error, PriceKind};

#[test]
fn every_known_glyph_has_a_code() {
    let cases = [("₽", CurrencyCode::Rub), ("$", CurrencyCode::Usd), ("€", CurrencyCode::Eur)];

    for (glyph, code) in cases {
        assert_eq!(CurrencyCode::encode(glyph), code);
    }
}

#[test]
fn other_single_characters_are_not_found() {
    for glyph in ['£', '¥', '₴', 'R', 'r', '0', ' ', '%'] {
        assert_eq!(CurrencyCode::encode(&glyph.to_string()), CurrencyCode::NotFound);
    }
}

#[test]
fn price_label_tokens() {
    assert_eq!(extract_price("₽1200 ₽1500", PriceKind::Current), Ok(1200.0));
    assert_eq!(extract_price("₽1200 ₽1500", PriceKind::Old), Ok(1500.0));
}

#[test]
fn old_price_requested_without_discount() {
    match extract_price("$99", PriceKind::Old) {
        Err(Error::MalformedValue(message)) => assert!(message.contains("Old")),
        other => panic!("expected MalformedValue, got {other:?}"),
    }
}

#[test]
fn discount_examples() {
    let discount = compute_discount(100.0, 80.0);
    assert!((discount.value - 20.0).abs() < f64::EPSILON);
    assert_eq!(discount.percent, "20%");

    let discount = compute_discount(100.0, 100.0);
    assert!(discount.value.abs() < f64::EPSILON);
    assert_eq!(discount.percent, "0%");
}

#[test]
fn percent_uses_rounded_value() {
    // 2.667 rounds to 2.67 first; the raw difference would give 38.1%
    let discount = compute_discount(7.0, 4.333);
    assert!((discount.value - 2.67).abs() < 1e-9);
    assert_eq!(discount.percent, "38.14%");
}
