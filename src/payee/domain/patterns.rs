//! Shape pre-filters applied before normalization.

use regex::Regex;
use std::sync::LazyLock;

/// `ddd.ddd.ddd-dd`, each separator optional.
pub(super) static CPF_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$"));

/// `dd.ddd.ddd/dddd-dd`, each separator optional.
pub(super) static CNPJ_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}$"));

pub(super) static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^[a-z0-9+_.-]+@[a-z0-9.-]+$"));

/// Optional `+55` country code, two-digit area code, then a nine-digit
/// mobile number starting with 9.
pub(super) static TELEFONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^(?:\+?55)?[1-9][0-9]9[0-9]{8}$"));

pub(super) static CHAVE_ALEATORIA_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    literal(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
});

#[expect(
    clippy::expect_used,
    reason = "patterns are string literals exercised by the unit tests"
)]
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("shape pattern must compile")
}
