use anyhow::Result;
use derive_more::Display;
use inquire::{MultiSelect, Select, Text};
use jobform::config::LogConfig;
use jobform::{ChangeEvent, Field, FormState, Position, Skill, SubmitOutcome};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs one round of the menu. Returns None when the menu
    /// wants to stop, Some(()) to run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it exits, reporting errors along the way
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    form: FormState,
}

impl App {
    pub fn new(form: FormState) -> Self {
        App { form }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Job Application Form");
        self.enter_loop();
        Ok(())
    }

    /// Prompts for a new value, then leaves the field
    fn edit_field(&mut self, field: Field) -> Result<()> {
        let value = if field == Field::Position {
            Select::new("Applying for Position:", Position::iter().collect())
                .prompt()?
                .to_string()
        } else {
            let current = self.form.values().text(field).unwrap_or_default().to_owned();
            let label = format!("{field}:");
            let mut prompt = Text::new(&label).with_initial_value(&current);
            if field == Field::PreferredInterviewTime {
                prompt = prompt.with_help_message("YYYY-MM-DDTHH:MM, e.g. 2024-01-01T10:00");
            }
            prompt.prompt()?
        };

        self.form.handle_change(ChangeEvent::Text { field, value })?;
        self.form.handle_blur(field);

        if let Some(error) = self.form.displayed_error(field) {
            println!("[!] {error}");
        }
        Ok(())
    }

    /// Shows every checkbox, checked ones preselected
    fn choose_skills(&mut self) -> Result<()> {
        let skills: Vec<Skill> = Skill::iter().collect();
        let checked: Vec<usize> = skills
            .iter()
            .enumerate()
            .filter(|(_, skill)| self.form.values().has_skill(**skill))
            .map(|(index, _)| index)
            .collect();

        let selected = MultiSelect::new("Additional Skills:", skills.clone())
            .with_default(&checked)
            .prompt()?;

        for skill in skills {
            self.form.handle_change(ChangeEvent::Checkbox {
                skill,
                checked: selected.contains(&skill),
            })?;
        }
        Ok(())
    }

    fn review(&self) {
        for field in self.form.visible_fields() {
            let value = match field {
                Field::AdditionalSkills => {
                    let skills: Vec<String> = self
                        .form
                        .values()
                        .additional_skills
                        .iter()
                        .map(Skill::to_string)
                        .collect();
                    skills.join(", ")
                }
                _ => self.form.values().text(field).unwrap_or_default().to_owned(),
            };
            println!("{field}: {value}");
            if let Some(error) = self.form.displayed_error(field) {
                println!("    [!] {error}");
            }
        }
        self.show_summary();
    }

    fn show_summary(&self) {
        if let Some(summary) = self.form.summary() {
            println!("\nForm Summary\n{summary}\n===============");
        }
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Fill in a field")]
            EditField,
            #[display("Choose additional skills")]
            ChooseSkills,
            #[display("Review the form")]
            Review,
            #[display("Submit")]
            Submit,
            #[display("Quit")]
            Exit,
        }

        let Some(choice) =
            Select::new("What do you want to do?", Choice::iter().collect()).prompt_skippable()?
        else {
            return Ok(MENU_EXIT);
        };

        match choice {
            Choice::EditField => {
                let fields: Vec<Field> =
                    self.form.visible_fields().filter(|f| f.is_text()).collect();
                let field = Select::new("Which field?", fields).prompt()?;
                self.edit_field(field)?;
            }
            Choice::ChooseSkills => self.choose_skills()?,
            Choice::Review => self.review(),
            Choice::Submit => match self.form.submit() {
                SubmitOutcome::Submitted => {
                    println!("[*] Application submitted.");
                    self.show_summary();
                }
                SubmitOutcome::Rejected { invalid_fields } => {
                    println!("[!] {invalid_fields} field(s) need attention:");
                    for field in self.form.visible_fields() {
                        if let Some(error) = self.form.displayed_error(field) {
                            println!("- {error}");
                        }
                    }
                }
            },
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    let config = LogConfig::from_env()?;
    simple_logging::log_to_file(&config.file, config.level)?;

    App::new(FormState::default()).start()
}
