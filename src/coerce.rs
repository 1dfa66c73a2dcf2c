use bitcoerce::{coerce_stages, parse_hint};
use bitcoerce_core::PreferredType;
use clap::Args;
use std::process::exit;

#[derive(Args)]
pub struct CoerceArgs {
    #[arg(allow_hyphen_values = true, help = "Operand, JSON or undefined/NaN/Infinity/123n")]
    value: String,
    #[arg(
        long,
        default_value = "number",
        value_parser = parse_hint,
        help = "Hint for the primitive stage: number, string or default"
    )]
    hint: PreferredType,
}

pub(crate) fn coerce(args: CoerceArgs) {
    match coerce_stages(&args.value, args.hint) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => {
            eprintln!("{e}");
            exit(e.exit_code())
        }
    }
}
