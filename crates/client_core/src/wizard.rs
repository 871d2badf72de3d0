//! Five-step add-record dialog: id, owner, co-owners, series, model.
//!
//! Each step owns one field. `next` validates that field and refuses to move
//! on while it is invalid, leaving an inline error for the view to show.

use std::fmt;

use chrono::NaiveDate;
use shared::{
    domain::{Record, MODEL_OPTIONS, SERIES_OPTIONS},
    validation::{self, ValidationError},
};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Id = 1,
    Owner = 2,
    CoOwners = 3,
    Series = 4,
    Model = 5,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Id => "ID",
            WizardStep::Owner => "Owner",
            WizardStep::CoOwners => "Co-owners (optional)",
            WizardStep::Series => "Series",
            WizardStep::Model => "Model",
        }
    }

    fn following(self) -> Option<Self> {
        match self {
            WizardStep::Id => Some(WizardStep::Owner),
            WizardStep::Owner => Some(WizardStep::CoOwners),
            WizardStep::CoOwners => Some(WizardStep::Series),
            WizardStep::Series => Some(WizardStep::Model),
            WizardStep::Model => None,
        }
    }

    fn preceding(self) -> Option<Self> {
        match self {
            WizardStep::Id => None,
            WizardStep::Owner => Some(WizardStep::Id),
            WizardStep::CoOwners => Some(WizardStep::Owner),
            WizardStep::Series => Some(WizardStep::CoOwners),
            WizardStep::Model => Some(WizardStep::Series),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    Skip,
    Save,
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WizardAction::Next => "next",
            WizardAction::Back => "back",
            WizardAction::Skip => "skip",
            WizardAction::Save => "save",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{action} is not available at {step}")]
    NotAvailable {
        action: WizardAction,
        step: WizardStep,
    },
    #[error("the add dialog is not open")]
    DialogClosed,
    #[error("'{value}' is not one of the {field} options")]
    UnknownOption { field: &'static str, value: String },
}

/// Values entered so far. Unset fields stay `None` until the user touches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub id: Option<String>,
    pub owner: Option<String>,
    pub co_owners: Option<Vec<String>>,
    pub series: Option<String>,
    pub model: Option<String>,
}

impl RecordDraft {
    fn into_record(self, today: NaiveDate) -> Record {
        Record {
            id: self.id.unwrap_or_default(),
            date_added: today.format(DATE_FORMAT).to_string(),
            owner: self.owner.unwrap_or_default(),
            co_owners: self.co_owners.unwrap_or_default(),
            series: self.series.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            broken_parts: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddRecordWizard {
    step: WizardStep,
    draft: RecordDraft,
    error: Option<ValidationError>,
}

impl Default for AddRecordWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AddRecordWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Id,
            draft: RecordDraft::default(),
            error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    /// Inline message for the current field, if the last `next` was refused.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.draft.id = Some(id.into());
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.draft.owner = Some(owner.into());
    }

    /// Takes the raw comma-separated entry of the co-owners field.
    pub fn set_co_owners(&mut self, input: &str) {
        self.draft.co_owners = Some(validation::split_co_owners(input));
    }

    pub fn co_owners_input(&self) -> String {
        self.draft
            .co_owners
            .as_ref()
            .map(|owners| owners.join(", "))
            .unwrap_or_default()
    }

    pub fn select_series(&mut self, series: &str) -> Result<(), WizardError> {
        self.draft.series = Some(pick_option("series", &SERIES_OPTIONS, series)?);
        Ok(())
    }

    pub fn select_model(&mut self, model: &str) -> Result<(), WizardError> {
        self.draft.model = Some(pick_option("model", &MODEL_OPTIONS, model)?);
        Ok(())
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let Some(following) = self.step.following() else {
            return Err(self.not_available(WizardAction::Next));
        };
        if let Err(invalid) = self.validate_current() {
            self.error = Some(invalid.clone());
            return Err(invalid.into());
        }
        self.error = None;
        self.step = following;
        Ok(self.step)
    }

    /// Leaves the optional co-owners step with no co-owners.
    pub fn skip(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::CoOwners {
            return Err(self.not_available(WizardAction::Skip));
        }
        self.draft.co_owners = None;
        self.next()
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let Some(preceding) = self.step.preceding() else {
            return Err(self.not_available(WizardAction::Back));
        };
        self.error = None;
        self.step = preceding;
        Ok(self.step)
    }

    /// Builds the new record. Only the last step can save; the wizard is spent.
    pub fn save(self, today: NaiveDate) -> Result<Record, (Self, WizardError)> {
        if self.step != WizardStep::Model {
            let err = self.not_available(WizardAction::Save);
            return Err((self, err));
        }
        Ok(self.draft.into_record(today))
    }

    fn validate_current(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::Id => validation::validate_record_id(self.draft.id.as_deref().unwrap_or("")),
            WizardStep::Owner => validation::validate_owner(self.draft.owner.as_deref().unwrap_or("")),
            WizardStep::CoOwners => match &self.draft.co_owners {
                Some(owners) => validation::validate_co_owners(owners),
                None => Ok(()),
            },
            WizardStep::Series | WizardStep::Model => Ok(()),
        }
    }

    fn not_available(&self, action: WizardAction) -> WizardError {
        WizardError::NotAvailable {
            action,
            step: self.step,
        }
    }
}

fn pick_option(field: &'static str, options: &[&str], value: &str) -> Result<String, WizardError> {
    options
        .iter()
        .find(|option| **option == value.trim())
        .map(|option| option.to_string())
        .ok_or_else(|| WizardError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
