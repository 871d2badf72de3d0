use chrono::{NaiveDate, Utc};
use shared::domain::Record;
use tracing::debug;

use crate::{
    table::InventoryTable,
    wizard::{AddRecordWizard, WizardError},
};

/// The inventory view: the table plus the add dialog when it is open.
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    table: InventoryTable,
    wizard: Option<AddRecordWizard>,
}

impl InventoryPage {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            table: InventoryTable::new(records),
            wizard: None,
        }
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut InventoryTable {
        &mut self.table
    }

    pub fn wizard(&self) -> Option<&AddRecordWizard> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut AddRecordWizard> {
        self.wizard.as_mut()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.wizard.is_some()
    }

    /// "Add" from the action menu: always starts from an empty draft.
    pub fn open_add_dialog(&mut self) -> &mut AddRecordWizard {
        self.wizard.insert(AddRecordWizard::new())
    }

    /// Closes the dialog and throws away everything entered.
    pub fn cancel_dialog(&mut self) {
        if self.wizard.take().is_some() {
            debug!("add dialog cancelled");
        }
    }

    pub fn save_dialog(&mut self) -> Result<&Record, WizardError> {
        self.save_dialog_on(Utc::now().date_naive())
    }

    /// Appends the wizard's record to the list and closes the dialog.
    pub fn save_dialog_on(&mut self, today: NaiveDate) -> Result<&Record, WizardError> {
        let wizard = self.wizard.take().ok_or(WizardError::DialogClosed)?;
        match wizard.save(today) {
            Ok(record) => {
                debug!(id = %record.id, "record added");
                Ok(self.table.push(record))
            }
            Err((wizard, err)) => {
                self.wizard = Some(wizard);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
