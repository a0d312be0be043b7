pub mod error_messages;
pub mod input_validation;
pub mod masks;
pub mod numeric_validation;
