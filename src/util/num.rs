/// Parses the longest prefix of `text` that forms a decimal number.
///
/// The accepted prefix is `digits [ "." digits ]`, where either digit run may
/// be empty but not both. Everything after it is ignored, which matches how
/// the tokenizer lets literals such as `1.2.3` through.
///
/// Returns `None` when the prefix contains no digit at all.
///
/// ## Example
/// ```
/// use tally::util::num::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("3.25"), Some(3.25));
/// assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
/// assert_eq!(parse_float_prefix("."), None);
/// ```
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let integer_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = integer_digits;
    let mut fraction_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        fraction_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}
