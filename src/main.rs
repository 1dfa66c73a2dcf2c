mod coerce;
mod eval;

use crate::coerce::{coerce, CoerceArgs};
use crate::eval::{eval, EvalArgs};
use bitcoerce::init_logger;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct CLI {
    #[arg(
        short,
        long,
        env = "BITCOERCE_VERBOSE",
        default_value = "0",
        help = "0 - 4, sets the log level from Error - Trace, negative numbers disable all logging"
    )]
    verbose: i8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Eval(EvalArgs),
    Coerce(CoerceArgs),
}

fn main() {
    let cli = CLI::parse();
    init_logger(cli.verbose);
    match cli.command {
        None => {
            let mut c = CLI::command();
            if let Err(e) = c.print_help() {
                eprintln!("Failed to print help - {e}");
            }
        }
        Some(Commands::Eval(args)) => eval(args),
        Some(Commands::Coerce(args)) => coerce(args),
    }
}
