//! Job application form: field values, position dependent validation
//! rules and the state container driving them.

pub mod config;
pub mod consts;
pub mod form;
pub mod models;
pub mod summary;
pub mod utils;
pub mod validation;

pub use form::{ChangeEvent, FormError, FormState, SubmitOutcome};
pub use models::{Field, FormValues, Position, Skill};
pub use summary::Summary;
pub use validation::{validate, ErrorMap, Validator};
