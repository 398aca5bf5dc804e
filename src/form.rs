//! State container of one form instance.
//!
//! The container owns the current values, the touched fields, the latest
//! validation errors and the submitting flag. It reacts to the three events
//! an input can produce: change, blur and submit.
use std::collections::BTreeSet;
use std::str::FromStr;

use log::{debug, info, warn};
use serde_json::json;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::models::{Field, FormValues, Position, Skill};
use crate::summary::Summary;
use crate::validation::{validate, ErrorMap, Validator};

/// A modification of one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// New content of a text input or of the position select
    Text { field: Field, value: String },
    /// A skill checkbox was (un)checked
    Checkbox { skill: Skill, checked: bool },
}

impl ChangeEvent {
    /// Builds a text change from the name attribute of the input
    pub fn text(name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        let field =
            Field::from_str(name).map_err(|_| FormError::UnknownField(name.to_owned()))?;
        if !field.is_text() {
            return Err(FormError::NotATextField(field));
        }
        Ok(ChangeEvent::Text {
            field,
            value: value.into(),
        })
    }

    /// Builds a checkbox change from the name attribute of the checkbox
    pub fn checkbox(name: &str, checked: bool) -> Result<Self, FormError> {
        let skill =
            Skill::from_str(name).map_err(|_| FormError::UnknownSkill(name.to_owned()))?;
        Ok(ChangeEvent::Checkbox { skill, checked })
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed, the values were handed over
    Submitted,
    /// Some fields failed, the form stays open
    Rejected { invalid_fields: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("{0} is not a text field")]
    NotATextField(Field),
}

pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
    touched: BTreeSet<Field>,
    submitting: bool,
    validate: Validator,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormValues::default(), validate)
    }
}

impl FormState {
    pub fn new(initial: FormValues, validate: Validator) -> Self {
        Self {
            values: initial,
            errors: ErrorMap::new(),
            touched: BTreeSet::new(),
            submitting: false,
            validate,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
        self.touched.iter().copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Applies the new content of an input. Nothing is validated here.
    pub fn handle_change(&mut self, event: ChangeEvent) -> Result<(), FormError> {
        match event {
            ChangeEvent::Checkbox { skill, checked } => {
                debug!("Skill {} set to {}", skill.key(), checked);
                self.values.set_skill(skill, checked);
            }
            ChangeEvent::Text {
                field: Field::Position,
                value,
            } => {
                let position = Position::from_str(&value).ok();
                if position.is_none() && !value.is_empty() {
                    warn!("Unknown position {value:?}, treated as unselected");
                }
                debug!("Position set to {:?}", position);
                self.values.position = position;
            }
            ChangeEvent::Text { field, value } => {
                let slot = self
                    .values
                    .text_mut(field)
                    .ok_or(FormError::NotATextField(field))?;
                debug!("Field {} changed", field.name());
                *slot = value;
            }
        }
        Ok(())
    }

    /// Marks the field as visited and refreshes every error
    pub fn handle_blur(&mut self, field: Field) {
        self.touched.insert(field);
        let errors = (self.validate)(&self.values);
        self.set_errors(errors);
        debug!(
            "Field {} left, {} field(s) invalid",
            field.name(),
            self.errors.len()
        );
    }

    /// Validates everything, reveals every error and hands the values over
    /// when nothing failed.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = (self.validate)(&self.values);
        self.touched.extend(Field::iter());
        self.submitting = true;
        self.set_errors(errors);

        if self.errors.is_empty() {
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Rejected {
                invalid_fields: self.errors.len(),
            }
        }
    }

    /// Replaces the errors wholesale, then settles a pending submission
    fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;

        if !self.submitting {
            return;
        }

        if self.errors.is_empty() {
            info!("Form submitted {}", json!(&self.values));
        } else {
            let invalid: Vec<&str> = self.errors.keys().map(|f| f.name()).collect();
            warn!("Submission rejected, invalid fields: {}", invalid.join(", "));
        }
        self.submitting = false;
    }

    /// Fields rendered for the currently selected position
    pub fn visible_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::iter().filter(|field| field.is_visible_for(self.values.position))
    }

    /// The message to show under a field: only once the user visited it,
    /// and only while the field is rendered.
    pub fn displayed_error(&self, field: Field) -> Option<&str> {
        if !self.is_touched(field) || !field.is_visible_for(self.values.position) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    /// Recap of the values, available once the form was visited and no
    /// error remains
    pub fn summary(&self) -> Option<Summary<'_>> {
        if self.errors.is_empty() && !self.touched.is_empty() {
            Some(Summary::new(&self.values))
        } else {
            None
        }
    }
}
