//! Read-only recap of an accepted application

use std::fmt;

use crate::models::{Field, FormValues, Position};

/// Lists the submitted values, including only the position specific
/// lines that apply to the selected position.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    values: &'a FormValues,
}

impl<'a> Summary<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self { values }
    }

    /// One `(label, value)` pair per line of the recap
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let values = self.values;
        let position = values.position;
        let mut lines = vec![
            ("Full Name", values.full_name.clone()),
            ("Email", values.email.clone()),
            ("Phone Number", values.phone_number.clone()),
            (
                "Applying for Position",
                values.text(Field::Position).unwrap_or_default().to_owned(),
            ),
        ];

        if matches!(position, Some(Position::Developer | Position::Designer)) {
            lines.push((
                "Relevant Experience",
                format!("{} years", values.relevant_experience),
            ));
        }
        if position == Some(Position::Designer) {
            lines.push(("Portfolio URL", values.portfolio_url.clone()));
        }
        if position == Some(Position::Manager) {
            lines.push(("Management Experience", values.management_experience.clone()));
        }

        let skills: Vec<&str> = values.additional_skills.iter().map(|s| s.key()).collect();
        lines.push(("Additional Skills", skills.join(", ")));
        lines.push((
            "Preferred Interview Time",
            values.preferred_interview_time.clone(),
        ));
        lines
    }
}

/// One `Label: value` line per entry
impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (label, value)) in self.lines().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
