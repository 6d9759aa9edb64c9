pub mod parse;
pub mod secondary;
