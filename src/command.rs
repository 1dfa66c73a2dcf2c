use crate::{parse_operand, OperandError};
use bitcoerce_core::{
    evaluate, to_int32, to_numeric, to_primitive, to_uint32, BinaryOperation, EvalError, Numeric,
    PreferredType,
};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CommandError {
    Operand(OperandError),
    Eval(EvalError),
}

impl CommandError {
    /// 2 for input the CLI could not read, 1 when evaluation itself failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Operand(_) => 2,
            CommandError::Eval(_) => 1,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Operand(e) => write!(f, "{e}"),
            CommandError::Eval(e) => write!(f, "Eval Failed: {e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<OperandError> for CommandError {
    fn from(value: OperandError) -> Self {
        CommandError::Operand(value)
    }
}

impl From<EvalError> for CommandError {
    fn from(value: EvalError) -> Self {
        CommandError::Eval(value)
    }
}

pub fn parse_hint(hint: &str) -> Result<PreferredType, String> {
    match hint {
        "number" => Ok(PreferredType::Number),
        "string" => Ok(PreferredType::String),
        "default" => Ok(PreferredType::Default),
        other => Err(format!("unknown hint {other}")),
    }
}

/// Parses both operands, left first, and prints the result of the operation.
pub fn eval_expression(
    left: &str,
    operation: BinaryOperation,
    right: &str,
) -> Result<String, CommandError> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;
    Ok(evaluate(operation, &left, &right)?.to_string())
}

/// One line per conversion stage. The int32 and uint32 stages only apply to
/// numbers, BigInts stop at the numeric stage.
pub fn coerce_stages(input: &str, hint: PreferredType) -> Result<Vec<String>, CommandError> {
    let value = parse_operand(input)?;
    let primitive = to_primitive(&value, hint)?;
    let numeric = to_numeric(&value)?;

    let unchanged = if value.as_primitive().is_some() {
        " (unchanged)"
    } else {
        ""
    };
    let mut lines = vec![
        format!("primitive: {primitive:?}{unchanged}"),
        format!("numeric:   {numeric}"),
    ];
    if let Numeric::Number(n) = numeric {
        lines.push(format!("int32:     {}", to_int32(n)));
        lines.push(format!("uint32:    {}", to_uint32(n)));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::{coerce_stages, eval_expression, parse_hint, CommandError};
    use bitcoerce_core::{BinaryOperation, EvalError, PreferredType};

    #[test]
    fn eval_prints_numbers() {
        assert_eq!(
            eval_expression("\"42\"", BinaryOperation::BitAnd, "6").ok(),
            Some("2".to_string())
        );
        assert_eq!(
            eval_expression("2147483648", BinaryOperation::BitOr, "0").ok(),
            Some("-2147483648".to_string())
        );
        assert_eq!(
            eval_expression("12n", BinaryOperation::BitAnd, "10n").ok(),
            Some("8n".to_string())
        );
    }

    #[test]
    fn eval_failures_carry_exit_codes() {
        let mix = eval_expression("1n", BinaryOperation::BitAnd, "1").unwrap_err();
        assert_eq!(mix.exit_code(), 1);
        assert_eq!(
            mix.to_string(),
            "Eval Failed: Type Mix Error: Cannot use & operator with BigInt and other types (bigint & number)"
        );

        let bad = eval_expression("abc", BinaryOperation::BitAnd, "1").unwrap_err();
        assert_eq!(bad.exit_code(), 2);
        assert!(bad.to_string().starts_with("Invalid operand `abc`"));
    }

    #[test]
    fn right_operand_is_not_read_after_left_fails() {
        let err = eval_expression("nope", BinaryOperation::BitAnd, "also nope").unwrap_err();
        assert!(err.to_string().starts_with("Invalid operand `nope`"));
    }

    #[test]
    fn coerce_number_stages() {
        assert_eq!(
            coerce_stages("\"4294967295\"", PreferredType::Number).ok(),
            Some(vec![
                "primitive: String(\"4294967295\") (unchanged)".to_string(),
                "numeric:   4294967295".to_string(),
                "int32:     -1".to_string(),
                "uint32:    4294967295".to_string(),
            ])
        );
    }

    #[test]
    fn coerce_hint_changes_primitive() {
        assert_eq!(
            coerce_stages("[[13]]", PreferredType::String).ok(),
            Some(vec![
                "primitive: String(\"13\")".to_string(),
                "numeric:   13".to_string(),
                "int32:     13".to_string(),
                "uint32:    13".to_string(),
            ])
        );
        assert_eq!(
            coerce_stages("{}", PreferredType::Default).map(|lines| lines[0].clone()).ok(),
            Some("primitive: String(\"[object Object]\")".to_string())
        );
    }

    #[test]
    fn coerce_bigint_stops_at_numeric() {
        assert_eq!(
            coerce_stages("-3n", PreferredType::Number).ok(),
            Some(vec![
                "primitive: BigInt(-3) (unchanged)".to_string(),
                "numeric:   -3n".to_string(),
            ])
        );
    }

    #[test]
    fn hints() {
        assert_eq!(parse_hint("string"), Ok(PreferredType::String));
        assert_eq!(parse_hint("default"), Ok(PreferredType::Default));
        assert_eq!(parse_hint("number"), Ok(PreferredType::Number));
        assert_eq!(parse_hint("bogus"), Err("unknown hint bogus".to_string()));
    }

    #[test]
    fn eval_error_converts() {
        let e: CommandError = EvalError::thrown("boom").into();
        assert_eq!(e.exit_code(), 1);
    }
}
