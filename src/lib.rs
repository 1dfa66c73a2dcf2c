pub mod command;
pub mod operand;
pub mod verbosity;

pub use command::{coerce_stages, eval_expression, parse_hint, CommandError};
pub use operand::{parse_operand, OperandError};
pub use verbosity::{init_logger, level_filter};
