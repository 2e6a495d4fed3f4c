use barchart_rs::core::{decorate_label, format_number, to_fixed};

#[test]
fn to_fixed_rounds_exact_binary_value() {
    assert_eq!(to_fixed(1234.5678, 3), "1234.568");
    assert_eq!(to_fixed(5.0, 0), "5");
    assert_eq!(to_fixed(0.5, 0), "1");
    assert_eq!(to_fixed(-2.5, 0), "-3");
    assert_eq!(to_fixed(2.675, 2), "2.67");
    assert_eq!(to_fixed(25.0, 2), "25.00");
}

#[test]
fn to_fixed_keeps_sign_of_small_negatives() {
    assert_eq!(to_fixed(-0.001, 2), "-0.00");
    assert_eq!(to_fixed(-0.0, 2), "0.00");
}

#[test]
fn to_fixed_keeps_every_digit_on_large_magnitudes() {
    assert_eq!(to_fixed(1e12, 20), "1000000000000.00000000000000000000");
    assert_eq!(
        to_fixed(-123456789012.25, 20),
        "-123456789012.25000000000000000000"
    );
    assert_eq!(to_fixed(1e12 + 0.5, 18), "1000000000000.500000000000000000");
}

#[test]
fn bare_numbers_use_shortest_form() {
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(0.1), "0.1");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn labels_wrap_body_with_affixes() {
    assert_eq!(decorate_label("~", "3.00".to_owned(), "%"), "~3.00%");
    assert_eq!(decorate_label("", "3.00".to_owned(), "%"), "3.00%");
}
