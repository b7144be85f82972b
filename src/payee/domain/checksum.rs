//! Modulo-11 check digits for CPF and CNPJ numbers.

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Returns `true` when `digits` is an 11-digit CPF with valid check digits.
///
/// Sequences made of a single repeated digit satisfy the arithmetic but are
/// never issued, so they are rejected.
pub(super) fn is_valid_cpf(digits: &[u32]) -> bool {
    digits.len() == CPF_LENGTH
        && !is_repeated_digit(digits)
        && has_valid_check_digits(digits, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS)
}

/// Returns `true` when `digits` is a 14-digit CNPJ with valid check digits.
pub(super) fn is_valid_cnpj(digits: &[u32]) -> bool {
    digits.len() == CNPJ_LENGTH
        && has_valid_check_digits(digits, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS)
}

/// Validates the two trailing check digits.
///
/// The second check digit is computed over the body plus the first check
/// digit.
fn has_valid_check_digits(digits: &[u32], first_weights: &[u32], second_weights: &[u32]) -> bool {
    let Some((&second, head)) = digits.split_last() else {
        return false;
    };
    let Some((&first, body)) = head.split_last() else {
        return false;
    };
    check_digit(body, first_weights) == first && check_digit(head, second_weights) == second
}

/// `11 - (weighted sum mod 11)`, with 10 and 11 mapped to 0.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let digit = 11 - sum.rem_euclid(11);
    if digit >= 10 { 0 } else { digit }
}

fn is_repeated_digit(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair.first() == pair.last())
}
