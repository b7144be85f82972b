//! Digit filtering and display masks for punctuated identifiers.

/// Placeholder consumed by [`apply_mask`] for each digit of the value.
const DIGIT_SLOT: char = '#';

/// Returns the ASCII decimal digits of `input`, in their original order.
///
/// # Examples
///
/// ```
/// use payee_accounts::payee::domain::keep_only_digits;
///
/// assert_eq!(keep_only_digits("773.867.350-81"), "77386735081");
/// assert_eq!(keep_only_digits("+55 (99) 98765-4321"), "5599987654321");
/// assert_eq!(keep_only_digits("no digits"), "");
/// ```
#[must_use]
pub fn keep_only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Renders `value` through `mask`, replacing each `#` with the next
/// character of `value`.
pub(super) fn apply_mask(value: &str, mask: &str) -> String {
    let mut chars = value.chars();
    mask.chars()
        .filter_map(|slot| {
            if slot == DIGIT_SLOT {
                chars.next()
            } else {
                Some(slot)
            }
        })
        .collect()
}

/// Converts a digit-only string into numeric digits.
pub(super) fn to_digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}
