use bitcoerce_core::{Object, Value};
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug)]
pub struct OperandError {
    input: String,
    source: serde_json::Error,
}

impl Display for OperandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid operand `{}` - {}", self.input, self.source)
    }
}

impl std::error::Error for OperandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Reads one operand from the command line. Anything JSON can express is
/// accepted, plus `undefined`, `NaN`, `Infinity`, `-Infinity` and BigInt
/// literals such as `-12n`.
pub fn parse_operand(input: &str) -> Result<Value, OperandError> {
    let text = input.trim();
    let value = match text {
        "undefined" => Value::Undefined,
        "NaN" => Value::Number(f64::NAN),
        "Infinity" | "+Infinity" => Value::Number(f64::INFINITY),
        "-Infinity" => Value::Number(f64::NEG_INFINITY),
        _ => match text.strip_suffix('n').and_then(|d| BigInt::from_str(d).ok()) {
            Some(b) => Value::BigInt(b),
            None => {
                let json = serde_json::from_str(text).map_err(|source| OperandError {
                    input: input.to_string(),
                    source,
                })?;
                from_json(json)
            }
        },
    };
    Ok(value)
}

fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(a) => Object::array(a.into_iter().map(from_json).collect()).into(),
        serde_json::Value::Object(m) => m
            .into_iter()
            .fold(Object::new(), |o, (k, v)| o.with_property(k, from_json(v)))
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_operand;
    use bitcoerce_core::Value;
    use num_bigint::BigInt;

    #[test]
    fn extended_tokens() {
        assert_eq!(parse_operand("undefined").ok(), Some(Value::Undefined));
        assert_eq!(parse_operand(" NaN ").ok(), Some(Value::Number(f64::NAN)));
        assert_eq!(
            parse_operand("-Infinity").ok(),
            Some(Value::Number(f64::NEG_INFINITY))
        );
        assert_eq!(
            parse_operand("-12n").ok(),
            Some(Value::BigInt(BigInt::from(-12)))
        );
    }

    #[test]
    fn json_values() {
        assert_eq!(parse_operand("null").ok(), Some(Value::Null));
        assert_eq!(parse_operand("1.5").ok(), Some(Value::Number(1.5)));
        assert_eq!(parse_operand("\"42\"").ok(), Some("42".into()));
        assert!(matches!(parse_operand("[[13]]"), Ok(Value::Object(_))));
    }

    #[test]
    fn bare_words_are_rejected() {
        let err = parse_operand("abc").unwrap_err();
        assert!(err.to_string().starts_with("Invalid operand `abc`"));
        assert!(parse_operand("1xn").is_err());
    }
}
