mod binary;

pub use binary::BinaryOperation;
