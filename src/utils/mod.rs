//! Helpers shared by the validation rules

pub mod error_messages;
pub mod input_validation;
