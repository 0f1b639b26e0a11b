use serde::{Deserialize, Serialize};
use std::fmt;

/// A request attribute or a response field value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    /// Turns raw response text into a value, producing an integer when the text starts with a number. Anything
    /// after the number is dropped, so `336 web_service_login_failed` reads as 336. Zero is only accepted when
    /// written as a plain `0`, so padded values like `00` stay text.
    pub fn coerce(raw: &str) -> Self {
        match leading_integer(raw) {
            Some(number) if number != 0 || raw == "0" => Value::Integer(number),
            _ => Value::Text(raw.to_string()),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(number) => Some(*number),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Integer(_) => None,
        }
    }
}

/// Reads the integer a text starts with after leading whitespace. Text without leading digits reads as zero,
/// single underscores between digits are skipped and `None` means the number overflows.
fn leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut number: i64 = 0;
    let mut after_digit = false;
    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => {
                number = number.checked_mul(10)?.checked_add(i64::from(byte - b'0'))?;
                after_digit = true;
            }
            b'_' if after_digit => after_digit = false,
            _ => break,
        }
    }

    Some(if negative { -number } else { number })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(number) => write!(f, "{number}"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Integer(number.into())
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Integer(number.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_becomes_integer() {
        assert_eq!(Value::coerce("42"), Value::Integer(42));
        assert_eq!(Value::coerce("-1"), Value::Integer(-1));
        assert_eq!(Value::coerce("0"), Value::Integer(0));
        assert_eq!(Value::coerce("403"), Value::Integer(403));
    }

    #[test]
    fn leading_number_wins_over_trailing_text() {
        assert_eq!(Value::coerce("42abc"), Value::Integer(42));
        assert_eq!(Value::coerce(" -7 SEK"), Value::Integer(-7));
        assert_eq!(Value::coerce("1_000"), Value::Integer(1000));
        assert_eq!(
            Value::coerce("336 web_service_login_failed"),
            Value::Integer(336)
        );
    }

    #[test]
    fn other_text_passes_through() {
        assert_eq!(Value::coerce("ABC"), Value::Text("ABC".to_string()));
        assert_eq!(Value::coerce("00"), Value::Text("00".to_string()));
        assert_eq!(Value::coerce("0 SEK"), Value::Text("0 SEK".to_string()));
        assert_eq!(Value::coerce(""), Value::Text("".to_string()));
        assert_eq!(
            Value::coerce("error_transID_or_verifyID"),
            Value::Text("error_transID_or_verifyID".to_string())
        );
        assert_eq!(
            Value::coerce("99999999999999999999"),
            Value::Text("99999999999999999999".to_string())
        );
    }

    #[test]
    fn displays_like_the_wire_text() {
        assert_eq!(Value::from(-1).to_string(), "-1");
        assert_eq!(Value::from("SEK").to_string(), "SEK");
    }
}
