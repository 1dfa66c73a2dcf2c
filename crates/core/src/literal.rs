use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// White space and line terminators as the language defines them.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parses `text` as a numeric literal, returning `None` unless the whole input
/// matches. Accepted forms:
///
/// - decimal: `[+-]? (Infinity | digits [. digits] [exp] | . digits [exp])`
/// - prefixed integers: `0x`, `0o`, `0b` (any case, no sign)
///
/// The lexer and string-to-number conversion both go through here so the two
/// can never disagree on what a number looks like.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix_integer(&text[2..], radix);
        }
    }
    parse_decimal(text)
}

fn parse_radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // through BigUint so literals past 2^53 round once, to nearest
    BigUint::parse_bytes(digits.as_bytes(), radix)?.to_f64()
}

fn parse_decimal(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned.as_bytes()) {
        return None;
    }
    // the grammar is checked above, so Rust's parser only does the rounding
    text.parse::<f64>().ok()
}

fn is_decimal_literal(b: &[u8]) -> bool {
    let digits_from = |i: usize| b[i..].iter().take_while(|c| c.is_ascii_digit()).count();

    let int_digits = digits_from(0);
    let mut i = int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = digits_from(i);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = digits_from(i);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == b.len()
}
