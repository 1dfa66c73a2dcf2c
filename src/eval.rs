use bitcoerce::eval_expression;
use bitcoerce_core::BinaryOperation;
use clap::Args;
use log::info;
use std::process::exit;

#[derive(Args)]
pub struct EvalArgs {
    #[arg(allow_hyphen_values = true, help = "Left operand, JSON or undefined/NaN/Infinity/123n")]
    left: String,
    #[arg(help = "One of & | ^ << >> >>>")]
    operation: BinaryOperation,
    #[arg(allow_hyphen_values = true, help = "Right operand, same syntax as the left")]
    right: String,
}

pub(crate) fn eval(args: EvalArgs) {
    info!("evaluating {} {} {}", args.left, args.operation, args.right);
    match eval_expression(&args.left, args.operation, &args.right) {
        Ok(v) => println!("{v}"),
        Err(e) => {
            eprintln!("{e}");
            exit(e.exit_code())
        }
    }
}
