//! Recursive modulo 10 checksum (mod10r) used by ISR/QRR references,
//! optical amounts and postal account numbers.

use super::error::IsrError;

/// Carry transition table of the recursive modulo 10 algorithm.
///
/// `TABLE[carry][digit]` is the next carry. Every row is a rotation of
/// `0 9 4 6 8 2 7 1 3 5`.
const TABLE: [[u8; 10]; 10] = [
    [0, 9, 4, 6, 8, 2, 7, 1, 3, 5],
    [9, 4, 6, 8, 2, 7, 1, 3, 5, 0],
    [4, 6, 8, 2, 7, 1, 3, 5, 0, 9],
    [6, 8, 2, 7, 1, 3, 5, 0, 9, 4],
    [8, 2, 7, 1, 3, 5, 0, 9, 4, 6],
    [2, 7, 1, 3, 5, 0, 9, 4, 6, 8],
    [7, 1, 3, 5, 0, 9, 4, 6, 8, 2],
    [1, 3, 5, 0, 9, 4, 6, 8, 2, 7],
    [3, 5, 0, 9, 4, 6, 8, 2, 7, 1],
    [5, 0, 9, 4, 6, 8, 2, 7, 1, 3],
];

/// Compute the mod10r check digit of a non-empty ASCII digit string.
pub fn check_digit(digits: &str) -> Result<u8, IsrError> {
    if digits.is_empty() {
        return Err(IsrError::InvalidInput(
            "checksum input must not be empty".into(),
        ));
    }

    let mut carry = 0u8;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return Err(IsrError::InvalidInput(format!(
                "checksum input '{digits}' must contain only digits"
            )));
        }
        carry = TABLE[carry as usize][(b - b'0') as usize];
    }
    Ok((10 - carry) % 10)
}

/// Append the mod10r check digit to `digits`.
///
/// ```
/// assert_eq!(einzahlung::checksum("12345").unwrap(), "123457");
/// ```
pub fn checksum(digits: &str) -> Result<String, IsrError> {
    let digit = check_digit(digits)?;
    let mut out = String::with_capacity(digits.len() + 1);
    out.push_str(digits);
    out.push(char::from(b'0' + digit));
    Ok(out)
}
