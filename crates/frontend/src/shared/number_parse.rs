//! Lenient number parsing for form inputs.
//!
//! Browser number inputs hand back strings. These helpers accept the longest
//! numeric prefix, the way `parseFloat` / `parseInt` do in the browser, and
//! return `None` where those would yield `NaN`.

/// Longest prefix of `s` that reads as a decimal float, e.g. `"19.99kg"` → `19.99`
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let rest = &s[end..];
    if rest.starts_with("Infinity") {
        let negative = s.starts_with('-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Longest prefix of `s` that reads as an integer, e.g. `"5.7"` → `5`
///
/// A `0x` prefix switches to hexadecimal. Values outside `i32` are `None`.
pub fn parse_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, body) = if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
        (16, &unsigned[2..])
    } else {
        (10, unsigned)
    };

    let digits_len = body
        .chars()
        .take_while(|c| c.is_digit(radix))
        .map(char::len_utf8)
        .sum::<usize>();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&body[..digits_len], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("19.99"), Some(19.99));
        assert_eq!(parse_float("  4.5 "), Some(4.5));
        assert_eq!(parse_float("12abc"), Some(12.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("-3"), Some(-3.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("7."), Some(7.0));
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int("5.7"), Some(5));
        assert_eq!(parse_int(" 10 "), Some(10));
        assert_eq!(parse_int("-4"), Some(-4));
        assert_eq!(parse_int("3 cajas"), Some(3));
        assert_eq!(parse_int("0x1A"), Some(26));
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("x5"), None);
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("99999999999"), None);
    }
}
