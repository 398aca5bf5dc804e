//! Data model of the job application form

use std::collections::BTreeSet;

use derive_more::Display;
use serde::Serialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Position the candidate is applying for
#[derive(
    Debug,
    Serialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Fields that only exist for this position. They are shown and
    /// required only when the position is selected.
    pub fn role_fields(self) -> &'static [Field] {
        match self {
            Position::Developer => &[Field::RelevantExperience],
            Position::Designer => &[Field::RelevantExperience, Field::PortfolioUrl],
            Position::Manager => &[Field::ManagementExperience],
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.role_fields().contains(&field)
    }
}

/// An additional skill checkbox
#[derive(
    Debug,
    Serialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
    #[display("JavaScript")]
    JavaScript,
    #[display("CSS")]
    Css,
    #[display("Python")]
    Python,
}

impl Skill {
    /// Checkbox name of the skill, e.g. `javascript`
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Every named field of the form.
///
/// The `Display` impl gives the label shown next to the input, `name()`
/// gives the field name used by the markup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, IntoStaticStr, Display,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    #[display("Full Name")]
    FullName,
    #[display("Email")]
    Email,
    #[display("Phone Number")]
    PhoneNumber,
    #[display("Applying for Position")]
    Position,
    #[display("Relevant Experience (years)")]
    RelevantExperience,
    #[strum(serialize = "portfolioURL")]
    #[display("Portfolio URL")]
    PortfolioUrl,
    #[display("Management Experience")]
    ManagementExperience,
    #[display("Preferred Interview Time")]
    PreferredInterviewTime,
    #[display("Additional Skills")]
    AdditionalSkills,
}

impl Field {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the field only exists for some positions
    pub fn is_conditional(self) -> bool {
        matches!(
            self,
            Field::RelevantExperience | Field::PortfolioUrl | Field::ManagementExperience
        )
    }

    /// Whether the field is rendered when `position` is selected
    pub fn is_visible_for(self, position: Option<Position>) -> bool {
        !self.is_conditional() || position.is_some_and(|p| p.has_field(self))
    }

    /// Whether the field holds free text (everything but the skill checkboxes)
    pub fn is_text(self) -> bool {
        self != Field::AdditionalSkills
    }
}

/// Current content of every input of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Option<Position>,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub preferred_interview_time: String,
    pub additional_skills: BTreeSet<Skill>,
}

impl FormValues {
    /// Returns the text content of a field, `None` for the skill checkboxes.
    /// An unselected position reads as the empty string.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Position => return Some(self.position.map_or("", |p| p.into())),
            Field::RelevantExperience => &self.relevant_experience,
            Field::PortfolioUrl => &self.portfolio_url,
            Field::ManagementExperience => &self.management_experience,
            Field::PreferredInterviewTime => &self.preferred_interview_time,
            Field::AdditionalSkills => return None,
        };
        Some(value.as_str())
    }

    /// Mutable access to the string backing a text field. The position and
    /// the skills are not plain strings and yield `None`.
    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::RelevantExperience => Some(&mut self.relevant_experience),
            Field::PortfolioUrl => Some(&mut self.portfolio_url),
            Field::ManagementExperience => Some(&mut self.management_experience),
            Field::PreferredInterviewTime => Some(&mut self.preferred_interview_time),
            Field::Position | Field::AdditionalSkills => None,
        }
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }

    pub fn set_skill(&mut self, skill: Skill, checked: bool) {
        if checked {
            self.additional_skills.insert(skill);
        } else {
            self.additional_skills.remove(&skill);
        }
    }
}
