//! # Check Character (18-character form)
//!
//! The final character of an 18-character number is derived from the first
//! 17 digits: multiply each digit by its positional weight, sum the products,
//! take the sum modulo 11 and look the remainder up in [`CHECK_CHARACTERS`].
//!
//! Both tables are order-sensitive and used exactly as listed.

/// Positional weights applied to digits 0 through 16.
pub const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Expected check character, indexed by `weighted_sum % 11`.
pub const CHECK_CHARACTERS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Number of leading digits covered by the checksum.
pub const CHECKED_DIGITS: usize = WEIGHTS.len();

/// Compute the check character for exactly 17 ASCII digits.
///
/// Returns `None` if `body` has any other length or contains a
/// non-digit.
///
/// ```
/// use idcard_core::checksum::check_character;
///
/// assert_eq!(check_character("11010119900307123"), Some('3'));
/// assert_eq!(check_character("1101011990030712"), None);
/// ```
pub fn check_character(body: &str) -> Option<char> {
    let bytes = body.as_bytes();
    if bytes.len() != CHECKED_DIGITS || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let sum: u32 = bytes
        .iter()
        .zip(WEIGHTS)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    Some(CHECK_CHARACTERS[(sum % 11) as usize])
}
