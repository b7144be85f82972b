//! Unit tests for CPF and CNPJ documents.

use crate::payee::domain::{Cnpj, Cpf, Document, PayeeDomainError, keep_only_digits};
use rstest::rstest;

// ── Valid documents ────────────────────────────────────────────────

#[rstest]
#[case("77386735081", "77386735081", "773.867.350-81")]
#[case("33860422014", "33860422014", "338.604.220-14")]
#[case("128731.950-53", "12873195053", "128.731.950-53")]
#[case("616.38824070", "61638824070", "616.388.240-70")]
#[case("19039318000104", "19039318000104", "19.039.318/0001-04")]
#[case("35.952.585/0001-24", "35952585000124", "35.952.585/0001-24")]
#[case("63.2051020001-63", "63205102000163", "63.205.102/0001-63")]
#[case("01042140/000195", "01042140000195", "01.042.140/0001-95")]
fn valid_documents_are_normalized_and_formatted(
    #[case] raw: &str,
    #[case] value: &str,
    #[case] display: &str,
) {
    let document = Document::new(raw).expect("document should be valid");
    assert_eq!(document.value(), value);
    assert_eq!(document.to_string(), display);
}

#[rstest]
#[case("77386735081")]
#[case("773.867.350-81")]
#[case("773867350-81")]
#[case("773.867.35081")]
fn punctuation_variants_normalize_to_the_same_cpf(#[case] raw: &str) {
    let document = Document::new(raw).expect("document should be valid");
    assert!(matches!(document, Document::Cpf(_)));
    assert_eq!(document.value(), "77386735081");
}

#[rstest]
fn cnpj_is_tried_after_cpf() {
    let document = Document::new("19.039.318/0001-04").expect("document should be valid");
    assert!(matches!(document, Document::Cnpj(_)));
    assert_eq!(document.label(), "CNPJ");
}

// ── Invalid documents ──────────────────────────────────────────────

#[rstest]
#[case("773867350-82")]
#[case("33860*422014")]
#[case("12873295053")]
#[case("19039*318000*104")]
#[case("35.952.585/0002-25")]
#[case("63345102000163")]
#[case("")]
#[case("invaliddoc")]
fn invalid_documents_are_rejected_with_raw_input(#[case] raw: &str) {
    assert_eq!(
        Document::new(raw),
        Err(PayeeDomainError::InvalidDocument(raw.to_owned()))
    );
}

#[rstest]
#[case("00000000000")]
#[case("11111111111")]
#[case("555.555.555-55")]
fn repeated_digit_cpf_is_rejected(#[case] raw: &str) {
    assert_eq!(Cpf::new(raw), Err(PayeeDomainError::InvalidCpf));
    assert!(matches!(
        Document::new(raw),
        Err(PayeeDomainError::InvalidDocument(_))
    ));
}

#[rstest]
#[case("19039318000114")]
#[case("19039318000105")]
fn altering_a_cnpj_check_digit_is_rejected(#[case] raw: &str) {
    assert_eq!(Cnpj::new(raw), Err(PayeeDomainError::InvalidCnpj));
}

#[rstest]
#[case("77386735091")]
#[case("77386735080")]
fn altering_a_cpf_check_digit_is_rejected(#[case] raw: &str) {
    assert_eq!(Cpf::new(raw), Err(PayeeDomainError::InvalidCpf));
}

#[rstest]
#[case(" 77386735081")]
#[case("773 867 350 81")]
#[case("773/867/350-81")]
fn cpf_shape_is_checked_before_stripping(#[case] raw: &str) {
    assert_eq!(Cpf::new(raw), Err(PayeeDomainError::InvalidCpf));
}

#[rstest]
fn cnpj_rejects_cpf_length() {
    assert_eq!(Cnpj::new("77386735081"), Err(PayeeDomainError::InvalidCnpj));
}

// ── Serialization and helpers ──────────────────────────────────────

#[rstest]
fn cpf_serializes_as_raw_digits() {
    let cpf = Cpf::new("773.867.350-81").expect("valid cpf");
    let json = serde_json::to_string(&cpf).expect("serialize cpf");
    assert_eq!(json, r#""77386735081""#);
}

#[rstest]
fn cnpj_deserialization_validates() {
    let parsed: Result<Cnpj, _> = serde_json::from_str(r#""19039318000105""#);
    assert!(parsed.is_err());

    let cnpj: Cnpj = serde_json::from_str(r#""19.039.318/0001-04""#).expect("valid cnpj");
    assert_eq!(cnpj.value(), "19039318000104");
}

#[rstest]
#[case("", "")]
#[case("abc", "")]
#[case("a1b2c3", "123")]
#[case("+55 (99) 9 8765-4321", "5599987654321")]
fn keep_only_digits_preserves_digit_order(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(keep_only_digits(input), expected);
}
