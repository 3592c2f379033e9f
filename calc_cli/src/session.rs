//! Line-based interactive wizard.
//!
//! Walks the six steps in order. Each field prompt shows the current text as
//! its default, so pressing enter keeps it. After a step's inputs the summary
//! is printed and the user picks next, back or quit. End of input quits.

use std::io::{self, BufRead, Write};

use calc_core::report::summarize;
use calc_core::{CompetitionMode, InputField, WingConfiguration, WizardState, WizardStep};

use crate::{event, info, warn};

/// What the user asked for after a step's summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    Next,
    Back,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    state: WizardState,
    start: WizardStep,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, state: WizardState) -> Self {
        Session {
            input,
            output,
            state,
            start: WizardStep::first(),
        }
    }

    pub fn starting_at(mut self, step: WizardStep) -> Self {
        self.start = step;
        self
    }

    /// Run until the user finishes, quits or input ends.
    pub fn run(mut self) -> io::Result<WizardState> {
        let mut step = self.start;

        loop {
            event!("entering step {}", step.route());
            writeln!(self.output)?;
            writeln!(self.output, "═══════════════════════════════════════")?;
            writeln!(self.output, "  {}", step)?;
            writeln!(self.output, "═══════════════════════════════════════")?;

            if !self.edit_step(step)? {
                break;
            }

            writeln!(self.output)?;
            write!(self.output, "{}", summarize(step, &self.state))?;

            match self.navigate(step)? {
                Navigation::Next => match step.next() {
                    Some(next) => step = next,
                    None => break,
                },
                Navigation::Back => step = step.previous().unwrap_or(step),
                Navigation::Quit => break,
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Session ended.")?;
        Ok(self.state)
    }

    /// Prompt every input of `step`. Returns false once input is exhausted.
    fn edit_step(&mut self, step: WizardStep) -> io::Result<bool> {
        if step == WizardStep::Mission && !self.edit_mission()? {
            return Ok(false);
        }

        for field in step.fields() {
            if let Some(hint) = field.hint() {
                writeln!(self.output, "  ({})", hint)?;
            }
            let current = self.state.inputs().field(*field).to_string();
            let Some(answer) = self.prompt(&format!("{} [{}]: ", field.label(), current))? else {
                return Ok(false);
            };
            if !answer.is_empty() {
                self.apply_field(*field, &answer);
            }
        }

        if step == WizardStep::Propulsion && self.state.derived().is_underpowered {
            warn!(
                "Static thrust {:.0} g is below the {:.0} g flying weight",
                self.state.derived().static_thrust_g,
                self.state.derived().total_weight_g
            );
        }
        Ok(true)
    }

    fn edit_mission(&mut self) -> io::Result<bool> {
        loop {
            let current = self.state.inputs().mode;
            let Some(answer) = self.prompt(&format!(
                "Competition Mode [{}] (payload/racing/trainer/aerobatics): ",
                current
            ))?
            else {
                return Ok(false);
            };
            if answer.is_empty() {
                break;
            }
            match answer.parse::<CompetitionMode>() {
                Ok(mode) => {
                    let recommended = self.state.select_competition_mode(mode);
                    info!("Mode {} selected, recommending {}", mode, recommended);
                    event!("recomputed after mode change");
                    break;
                }
                Err(e) => writeln!(self.output, "  {}", e)?,
            }
        }

        loop {
            let current = self.state.inputs().wing_configuration;
            let Some(answer) = self.prompt(&format!(
                "Wing Configuration [{}] (high/mid/low): ",
                current
            ))?
            else {
                return Ok(false);
            };
            if answer.is_empty() {
                break;
            }
            match answer.parse::<WingConfiguration>() {
                Ok(wing) => {
                    self.state.set_wing_configuration(wing);
                    event!("recomputed after wing change to {}", wing);
                    break;
                }
                Err(e) => writeln!(self.output, "  {}", e)?,
            }
        }

        Ok(true)
    }

    fn apply_field(&mut self, field: InputField, text: &str) {
        self.state.set_field(field, text);
        event!(
            "recomputed after {}={:?}: area {:.4} m², thrust {:.0} g",
            field,
            text,
            self.state.derived().required_wing_area_m2,
            self.state.derived().static_thrust_g
        );
    }

    fn navigate(&mut self, step: WizardStep) -> io::Result<Navigation> {
        let prompt = if step.is_last() {
            "[b]ack / [q]uit (enter to finish): "
        } else if step.previous().is_none() {
            "[n]ext / [q]uit (enter for next): "
        } else {
            "[n]ext / [b]ack / [q]uit (enter for next): "
        };

        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(Navigation::Quit);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" | "n" | "next" | "f" | "finish" => return Ok(Navigation::Next),
                "b" | "back" => return Ok(Navigation::Back),
                "q" | "quit" => return Ok(Navigation::Quit),
                other => writeln!(self.output, "  Unknown choice '{}'", other)?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
