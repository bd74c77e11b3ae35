//! CPF and CNPJ checksum behavior, including property tests over random digits.

use cyberfit_pro::domain::digits::check_digit;
use cyberfit_pro::domain::{format_cnpj, format_cpf, validate_cnpj, validate_cpf, Cnpj, Cpf};
use proptest::prelude::*;

/// Append both CPF check digits to nine base digits.
fn complete_cpf(base: &[u8]) -> String {
    let mut digits = base.to_vec();
    let first = check_digit(&digits, (2..=10).rev());
    digits.push(first);
    let second = check_digit(&digits, (2..=11).rev());
    digits.push(second);
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

#[test]
fn test_cpf_known_samples() {
    assert!(validate_cpf("111.444.777-35"));
    assert!(validate_cpf("529.982.247-25"));
    assert!(!validate_cpf("11111111111"));
    assert!(!validate_cpf("111.444.777-3"));
    assert!(!validate_cpf("111.444.777-34"));
}

#[test]
fn test_cpf_separators_are_ignored() {
    assert!(validate_cpf("111 444 777 35"));
    assert!(validate_cpf("cpf: 111/444/777.35"));
}

#[test]
fn test_cnpj_known_samples() {
    assert!(validate_cnpj("11.222.333/0001-81"));
    assert!(!validate_cnpj("11.222.333/0001-82"));
    assert!(!validate_cnpj("11111111111111"));
    assert!(!validate_cnpj("11.222.333/0001"));
}

#[test]
fn test_documents_are_not_interchangeable() {
    assert!(!validate_cnpj("111.444.777-35"));
    assert!(!validate_cpf("11.222.333/0001-81"));
}

#[test]
fn test_value_objects_store_canonical_digits() {
    let cpf = Cpf::new("111.444.777-35").unwrap();
    let cnpj = Cnpj::new("11.222.333/0001-81").unwrap();
    assert_eq!(cpf.into_inner(), "11144477735");
    assert_eq!(cnpj.into_inner(), "11222333000181");
}

proptest! {
    #[test]
    fn prop_cpf_wrong_length_rejected(s in "[0-9]{0,30}") {
        prop_assume!(s.len() != 11);
        prop_assert!(!validate_cpf(&s));
    }

    #[test]
    fn prop_generated_cpf_accepted(base in prop::collection::vec(0u8..10, 9)) {
        prop_assume!(base.iter().any(|&d| d != base[0]));
        let cpf = complete_cpf(&base);
        prop_assert!(validate_cpf(&cpf));
    }

    #[test]
    fn prop_corrupted_cpf_check_digit_rejected(
        base in prop::collection::vec(0u8..10, 9),
        bump in 1u8..10,
    ) {
        prop_assume!(base.iter().any(|&d| d != base[0]));
        let mut cpf: Vec<u8> = complete_cpf(&base).into_bytes();
        cpf[10] = b'0' + (cpf[10] - b'0' + bump) % 10;
        let cpf = String::from_utf8(cpf).unwrap();
        prop_assert!(!validate_cpf(&cpf));
    }

    #[test]
    fn prop_format_cpf_idempotent(s in "[0-9]{11}") {
        let once = format_cpf(&s);
        prop_assert_eq!(format_cpf(&once), once.clone());
    }

    #[test]
    fn prop_format_cnpj_idempotent(s in "[0-9]{14}") {
        let once = format_cnpj(&s);
        prop_assert_eq!(format_cnpj(&once), once.clone());
    }

    #[test]
    fn prop_validators_never_panic(s in ".{0,40}") {
        let _ = validate_cpf(&s);
        let _ = validate_cnpj(&s);
    }
}
