use cyberfit_pro::domain::{
    find_by_ddi, format_phone, validate_email, validate_phone, PhoneNumber, BRAZIL_DDI,
};
use proptest::prelude::*;

#[test]
fn test_format_phone_examples() {
    assert_eq!(format_phone("85988318679", "55"), "(85) 98831-8679");
    assert_eq!(format_phone("8533218679", "55"), "(85) 3321-8679");
}

#[test]
fn test_validate_phone_examples() {
    assert!(validate_phone("(85) 98831-8679", "55"));
    assert!(!validate_phone("123", "55"));
}

#[test]
fn test_brazilian_passthrough_for_odd_lengths() {
    assert_eq!(format_phone("859883186", BRAZIL_DDI), "859883186");
    assert_eq!(format_phone("", BRAZIL_DDI), "");
}

#[test]
fn test_every_listed_country_formats_with_prefix() {
    let portugal = find_by_ddi("351").unwrap();
    assert_eq!(format_phone("912345678", portugal.ddi), "+351 912345678");
    assert!(validate_phone("912345678", portugal.ddi));
}

#[test]
fn test_phone_value_object_round_trips_formatting() {
    let phone = PhoneNumber::brazilian("85 3321 8679").unwrap();
    assert_eq!(phone.to_string(), "(85) 3321-8679");
    let again = PhoneNumber::brazilian(phone.to_string()).unwrap();
    assert_eq!(again, phone);
}

#[test]
fn test_validate_email_examples() {
    assert!(validate_email("user@example.com"));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("user@@example.com"));
    assert!(!validate_email("user name@example.com"));
}

proptest! {
    #[test]
    fn prop_format_brazilian_phone_idempotent(s in "[1-9]{2}9?[0-9]{8}") {
        let once = format_phone(&s, BRAZIL_DDI);
        prop_assert_eq!(format_phone(&once, BRAZIL_DDI), once.clone());
        prop_assert!(validate_phone(&once, BRAZIL_DDI));
    }

    #[test]
    fn prop_international_length_bounds(len in 0usize..20) {
        let digits = "7".repeat(len);
        prop_assert_eq!(validate_phone(&digits, "44"), (8..=15).contains(&len));
    }
}
