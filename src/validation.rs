//! Validation of a complete form snapshot
//!
//! `validate` maps the current values to at most one message per field.
//! A field that is absent from the returned map is valid.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::models::{Field, FormValues};
use crate::utils::error_messages::*;
use crate::utils::input_validation::{is_numeric, is_valid_email, is_valid_portfolio_url};

/// Field name to human readable validation failure
pub type ErrorMap = BTreeMap<Field, String>;

/// Signature shared by every form validation function
pub type Validator = fn(&FormValues) -> ErrorMap;

/// Validates the job application.
///
/// Pure and deterministic: the map is rebuilt from scratch on every call.
pub fn validate(values: &FormValues) -> ErrorMap {
    Field::iter()
        .filter_map(|field| check_field(values, field).map(|message| (field, message.to_owned())))
        .collect()
}

/// Returns the first failing rule of `field`, if any
fn check_field(values: &FormValues, field: Field) -> Option<&'static str> {
    // Position dependent fields are only mandatory for the positions listing them
    let required_here = values.position.is_some_and(|p| p.has_field(field));

    match field {
        Field::FullName => required(&values.full_name, FULL_NAME_REQUIRED),
        Field::Email => required(&values.email, EMAIL_REQUIRED)
            .or_else(|| (!is_valid_email(&values.email)).then_some(EMAIL_INVALID)),
        Field::PhoneNumber => required(&values.phone_number, PHONE_NUMBER_REQUIRED),
        Field::Position => values.position.is_none().then_some(POSITION_REQUIRED),
        Field::RelevantExperience => {
            let experience = &values.relevant_experience;
            if required_here && experience.is_empty() {
                Some(RELEVANT_EXPERIENCE_REQUIRED)
            } else if !experience.is_empty() && !is_numeric(experience) {
                Some(RELEVANT_EXPERIENCE_NOT_A_NUMBER)
            } else {
                None
            }
        }
        Field::PortfolioUrl => {
            let url = &values.portfolio_url;
            if required_here && url.is_empty() {
                Some(PORTFOLIO_URL_REQUIRED)
            } else if !url.is_empty() && !is_valid_portfolio_url(url) {
                Some(PORTFOLIO_URL_INVALID)
            } else {
                None
            }
        }
        Field::ManagementExperience => (required_here && values.management_experience.is_empty())
            .then_some(MANAGEMENT_EXPERIENCE_REQUIRED),
        Field::PreferredInterviewTime => {
            required(&values.preferred_interview_time, INTERVIEW_TIME_REQUIRED)
        }
        Field::AdditionalSkills => values.additional_skills.is_empty().then_some(SKILLS_REQUIRED),
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Skill};

    /// A complete Developer application with nothing to complain about
    fn valid_developer() -> FormValues {
        let mut values = FormValues {
            full_name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "5551234".to_string(),
            position: Some(Position::Developer),
            relevant_experience: "3".to_string(),
            preferred_interview_time: "2024-01-01T10:00".to_string(),
            ..FormValues::default()
        };
        values.set_skill(Skill::JavaScript, true);
        values
    }

    fn message(errors: &ErrorMap, field: Field) -> Option<&str> {
        errors.get(&field).map(String::as_str)
    }

    #[test]
    fn test_valid_developer_has_no_errors() {
        let errors = validate(&valid_developer());
        assert!(errors.is_empty(), "Unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_form() {
        let errors = validate(&FormValues::default());

        let expected = vec![
            (Field::FullName, FULL_NAME_REQUIRED),
            (Field::Email, EMAIL_REQUIRED),
            (Field::PhoneNumber, PHONE_NUMBER_REQUIRED),
            (Field::Position, POSITION_REQUIRED),
            (Field::PreferredInterviewTime, INTERVIEW_TIME_REQUIRED),
            (Field::AdditionalSkills, SKILLS_REQUIRED),
        ];

        assert_eq!(errors.len(), expected.len(), "Unexpected errors: {:?}", errors);
        for (field, expected_message) in expected {
            assert_eq!(message(&errors, field), Some(expected_message));
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let samples = vec![FormValues::default(), valid_developer(), {
            let mut values = valid_developer();
            values.email = "nope".to_string();
            values.relevant_experience = "abc".to_string();
            values
        }];

        for values in samples {
            assert_eq!(validate(&values), validate(&values));
        }
    }

    mod email_rules {
        use super::*;

        #[test]
        fn test_missing_email() {
            let mut values = valid_developer();
            values.email.clear();
            assert_eq!(message(&validate(&values), Field::Email), Some(EMAIL_REQUIRED));
        }

        #[test]
        fn test_malformed_email() {
            let mut values = valid_developer();
            values.email = "ann.example.com".to_string();
            assert_eq!(message(&validate(&values), Field::Email), Some(EMAIL_INVALID));
        }
    }

    mod experience_rules {
        use super::*;

        #[test]
        fn test_required_for_developer_and_designer() {
            for position in [Position::Developer, Position::Designer] {
                let mut values = valid_developer();
                values.position = Some(position);
                values.relevant_experience.clear();

                assert_eq!(
                    message(&validate(&values), Field::RelevantExperience),
                    Some(RELEVANT_EXPERIENCE_REQUIRED),
                    "Missing experience accepted for {}",
                    position
                );
            }
        }

        #[test]
        fn test_not_required_for_manager_or_no_position() {
            for position in [Some(Position::Manager), None] {
                let mut values = valid_developer();
                values.position = position;
                values.relevant_experience.clear();

                assert_eq!(message(&validate(&values), Field::RelevantExperience), None);
            }
        }

        #[test]
        fn test_must_be_numeric_regardless_of_position() {
            for position in [
                Some(Position::Developer),
                Some(Position::Designer),
                Some(Position::Manager),
                None,
            ] {
                let mut values = valid_developer();
                values.position = position;
                values.relevant_experience = "abc".to_string();

                assert_eq!(
                    message(&validate(&values), Field::RelevantExperience),
                    Some(RELEVANT_EXPERIENCE_NOT_A_NUMBER),
                    "Non-numeric experience accepted for {:?}",
                    position
                );
            }
        }

        #[test]
        fn test_whitespace_counts_as_a_number() {
            let mut values = valid_developer();
            values.relevant_experience = "  ".to_string();
            assert_eq!(message(&validate(&values), Field::RelevantExperience), None);
        }
    }

    mod portfolio_rules {
        use super::*;

        fn designer_with_portfolio(url: &str) -> FormValues {
            let mut values = valid_developer();
            values.position = Some(Position::Designer);
            values.portfolio_url = url.to_string();
            values
        }

        #[test]
        fn test_designer_portfolio() {
            let cases = vec![
                ("", Some(PORTFOLIO_URL_REQUIRED)),
                ("not-a-url", Some(PORTFOLIO_URL_INVALID)),
                ("http://a.b", None),
                ("https://ann.design", None),
            ];

            for (url, expected) in cases {
                assert_eq!(
                    message(&validate(&designer_with_portfolio(url)), Field::PortfolioUrl),
                    expected,
                    "Unexpected result for portfolio {:?}",
                    url
                );
            }
        }

        #[test]
        fn test_optional_but_checked_for_other_positions() {
            let mut values = valid_developer();
            assert_eq!(message(&validate(&values), Field::PortfolioUrl), None);

            values.portfolio_url = "not-a-url".to_string();
            assert_eq!(
                message(&validate(&values), Field::PortfolioUrl),
                Some(PORTFOLIO_URL_INVALID)
            );
        }
    }

    mod management_rules {
        use super::*;

        #[test]
        fn test_required_for_manager_only() {
            let mut values = valid_developer();
            values.position = Some(Position::Manager);
            values.relevant_experience.clear();

            assert_eq!(
                message(&validate(&values), Field::ManagementExperience),
                Some(MANAGEMENT_EXPERIENCE_REQUIRED)
            );

            values.management_experience = "Led a team of four".to_string();
            assert!(validate(&values).is_empty());

            values.position = Some(Position::Developer);
            values.management_experience.clear();
            values.relevant_experience = "1".to_string();
            assert_eq!(message(&validate(&values), Field::ManagementExperience), None);
        }
    }

    mod skill_rules {
        use super::*;
        use strum::IntoEnumIterator;

        #[test]
        fn test_at_least_one_skill() {
            let mut values = valid_developer();
            values.additional_skills.clear();
            assert_eq!(
                message(&validate(&values), Field::AdditionalSkills),
                Some(SKILLS_REQUIRED)
            );

            for skill in Skill::iter() {
                values.additional_skills.clear();
                values.set_skill(skill, true);
                assert_eq!(
                    message(&validate(&values), Field::AdditionalSkills),
                    None,
                    "Selecting {} alone was not enough",
                    skill
                );
            }
        }
    }
}
