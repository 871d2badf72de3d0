//! Line-oriented driver for the add-record dialog.
//!
//! Each line is the value for the current step followed by "Next". On the
//! last step the line picks the model and saves. `:back`, `:skip` and
//! `:cancel` stand in for the dialog's other buttons. End of input cancels.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use client_core::{InventoryPage, WizardError, WizardStep};
use shared::domain::{Record, MODEL_OPTIONS, SERIES_OPTIONS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Saved(Record),
    Cancelled,
}

enum Command<'a> {
    Back,
    Skip,
    Cancel,
    Value(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        ":back" => Command::Back,
        ":skip" => Command::Skip,
        ":cancel" => Command::Cancel,
        value => Command::Value(value),
    }
}

pub fn run_add_dialog<R: BufRead, W: Write>(
    page: &mut InventoryPage,
    input: &mut R,
    out: &mut W,
    today: NaiveDate,
) -> Result<DialogOutcome> {
    page.open_add_dialog();
    writeln!(out, "Add Item (:back, :skip, :cancel)")?;

    loop {
        let Some(wizard) = page.wizard_mut() else {
            return Ok(DialogOutcome::Cancelled);
        };
        let step = wizard.step();
        prompt_step(out, step, wizard.error().map(ToString::to_string))?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            page.cancel_dialog();
            return Ok(DialogOutcome::Cancelled);
        }

        let outcome = match parse_command(&line) {
            Command::Cancel => {
                page.cancel_dialog();
                return Ok(DialogOutcome::Cancelled);
            }
            Command::Back => wizard.back().map(|_| ()),
            Command::Skip => wizard.skip().map(|_| ()),
            Command::Value(value) => match step {
                WizardStep::Id => {
                    wizard.set_id(value);
                    wizard.next().map(|_| ())
                }
                WizardStep::Owner => {
                    wizard.set_owner(value);
                    wizard.next().map(|_| ())
                }
                WizardStep::CoOwners => {
                    wizard.set_co_owners(value);
                    wizard.next().map(|_| ())
                }
                WizardStep::Series => {
                    let picked = resolve_option(&SERIES_OPTIONS, value);
                    match picked.map(|series| wizard.select_series(series)) {
                        Some(Err(err)) => Err(err),
                        _ => wizard.next().map(|_| ()),
                    }
                }
                WizardStep::Model => {
                    let picked = resolve_option(&MODEL_OPTIONS, value);
                    match picked.map(|model| wizard.select_model(model)) {
                        Some(Err(err)) => Err(err),
                        _ => {
                            let record = page.save_dialog_on(today)?.clone();
                            writeln!(out, "Saved {}", record.id)?;
                            return Ok(DialogOutcome::Saved(record));
                        }
                    }
                }
            },
        };

        // Validation failures come back as the wizard's inline error on the
        // next prompt; anything else is reported right away.
        if let Err(err) = outcome {
            if !matches!(err, WizardError::Invalid(_)) {
                writeln!(out, "  ! {err}")?;
            }
        }
    }
}

fn prompt_step<W: Write>(out: &mut W, step: WizardStep, error: Option<String>) -> Result<()> {
    if let Some(error) = error {
        writeln!(out, "  ! {error}")?;
    }
    match step {
        WizardStep::Series => write_options(out, &SERIES_OPTIONS)?,
        WizardStep::Model => write_options(out, &MODEL_OPTIONS)?,
        _ => {}
    }
    write!(out, "[{}/5] {}: ", step.number(), step.title())?;
    out.flush()?;
    Ok(())
}

fn write_options<W: Write>(out: &mut W, options: &[&str]) -> Result<()> {
    let listed: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}) {option}", i + 1))
        .collect();
    writeln!(out, "  {}", listed.join("  "))?;
    Ok(())
}

/// Empty input leaves the choice unset; a 1-based number picks from the list.
fn resolve_option<'a>(options: &[&'a str], value: &'a str) -> Option<&'a str> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1]),
        _ => Some(value),
    }
}

#[cfg(test)]
#[path = "tests/prompt_tests.rs"]
mod tests;
