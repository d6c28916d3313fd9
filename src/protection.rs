use serde::{Deserialize, Serialize};

use crate::legacy_hash::{hash_password, verify_password};

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_true(v: &bool) -> bool {
    *v
}

/// Worksheet protection state.
///
/// Mirrors the legacy `sheetProtection` element as a set of booleans naming
/// the operations that stay allowed while protection is enabled, plus the
/// optional 16-bit legacy password hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetProtection {
    /// Whether the sheet protection is enabled.
    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,

    /// Allow selecting locked cells while the sheet is protected.
    ///
    /// Spreadsheet applications default this to true when protecting a sheet.
    #[serde(
        default = "crate::serde_defaults::default_true",
        skip_serializing_if = "is_true"
    )]
    pub select_locked_cells: bool,

    /// Allow selecting unlocked cells while the sheet is protected.
    ///
    /// Spreadsheet applications default this to true when protecting a sheet.
    #[serde(
        default = "crate::serde_defaults::default_true",
        skip_serializing_if = "is_true"
    )]
    pub select_unlocked_cells: bool,

    /// Allow formatting cells.
    #[serde(default, skip_serializing_if = "is_false")]
    pub format_cells: bool,

    /// Allow formatting columns.
    #[serde(default, skip_serializing_if = "is_false")]
    pub format_columns: bool,

    /// Allow formatting rows.
    #[serde(default, skip_serializing_if = "is_false")]
    pub format_rows: bool,

    /// Allow inserting columns.
    #[serde(default, skip_serializing_if = "is_false")]
    pub insert_columns: bool,

    /// Allow inserting rows.
    #[serde(default, skip_serializing_if = "is_false")]
    pub insert_rows: bool,

    /// Allow inserting hyperlinks.
    #[serde(default, skip_serializing_if = "is_false")]
    pub insert_hyperlinks: bool,

    /// Allow deleting columns.
    #[serde(default, skip_serializing_if = "is_false")]
    pub delete_columns: bool,

    /// Allow deleting rows.
    #[serde(default, skip_serializing_if = "is_false")]
    pub delete_rows: bool,

    /// Allow sorting.
    #[serde(default, skip_serializing_if = "is_false")]
    pub sort: bool,

    /// Allow using AutoFilter.
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto_filter: bool,

    /// Allow using PivotTables.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pivot_tables: bool,

    /// Allow editing drawing objects.
    #[serde(default, skip_serializing_if = "is_false")]
    pub edit_objects: bool,

    /// Allow editing scenarios.
    #[serde(default, skip_serializing_if = "is_false")]
    pub edit_scenarios: bool,

    /// Optional legacy password hash (`sheetProtection password="..."`).
    ///
    /// Stored as a 16-bit checksum, rendered as up to 4 hex digits in files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<u16>,
}

impl Default for SheetProtection {
    fn default() -> Self {
        Self {
            enabled: false,
            select_locked_cells: true,
            select_unlocked_cells: true,
            format_cells: false,
            format_columns: false,
            format_rows: false,
            insert_columns: false,
            insert_rows: false,
            insert_hyperlinks: false,
            delete_columns: false,
            delete_rows: false,
            sort: false,
            auto_filter: false,
            pivot_tables: false,
            edit_objects: false,
            edit_scenarios: false,
            password_hash: None,
        }
    }
}

impl SheetProtection {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }

    /// Hash `password` and store it as the protection password.
    ///
    /// The empty password clears the hash: protection without a password is
    /// modeled as `password_hash: None`, matching how readers treat a missing
    /// or zero `password` attribute.
    pub fn set_password(&mut self, password: &str) {
        self.password_hash = if password.is_empty() {
            None
        } else {
            Some(hash_password(password))
        };
    }

    /// Clear any stored password hash, leaving the allow-list untouched.
    pub fn remove_password(&mut self) {
        self.password_hash = None;
    }

    /// Check a password attempt against the stored hash.
    ///
    /// Returns true when no password is set: unprotecting a sheet that never
    /// had a password must not prompt.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        match self.password_hash {
            None => true,
            Some(hash) => verify_password(password, hash),
        }
    }

    /// Whether `action` is permitted under the current protection state.
    #[must_use]
    pub fn allows(&self, action: SheetProtectionAction) -> bool {
        if !self.enabled {
            return true;
        }
        match action {
            SheetProtectionAction::SelectLockedCells => self.select_locked_cells,
            SheetProtectionAction::SelectUnlockedCells => self.select_unlocked_cells,
            SheetProtectionAction::FormatCells => self.format_cells,
            SheetProtectionAction::FormatColumns => self.format_columns,
            SheetProtectionAction::FormatRows => self.format_rows,
            SheetProtectionAction::InsertColumns => self.insert_columns,
            SheetProtectionAction::InsertRows => self.insert_rows,
            SheetProtectionAction::InsertHyperlinks => self.insert_hyperlinks,
            SheetProtectionAction::DeleteColumns => self.delete_columns,
            SheetProtectionAction::DeleteRows => self.delete_rows,
            SheetProtectionAction::Sort => self.sort,
            SheetProtectionAction::AutoFilter => self.auto_filter,
            SheetProtectionAction::PivotTables => self.pivot_tables,
            SheetProtectionAction::EditObjects => self.edit_objects,
            SheetProtectionAction::EditScenarios => self.edit_scenarios,
        }
    }
}

/// Workbook protection state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorkbookProtection {
    /// Lock the workbook structure (sheets cannot be added/moved/renamed/deleted).
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_structure: bool,

    /// Lock workbook windows (legacy feature; rarely used).
    #[serde(default, skip_serializing_if = "is_false")]
    pub lock_windows: bool,

    /// Optional legacy password hash (`workbookProtection workbookPassword="..."`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<u16>,
}

impl WorkbookProtection {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }

    /// Hash `password` and store it as the workbook protection password.
    ///
    /// The empty password clears the hash, as for
    /// [`SheetProtection::set_password`].
    pub fn set_password(&mut self, password: &str) {
        self.password_hash = if password.is_empty() {
            None
        } else {
            Some(hash_password(password))
        };
    }

    /// Clear any stored password hash.
    pub fn remove_password(&mut self) {
        self.password_hash = None;
    }

    /// Check a password attempt against the stored hash.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        match self.password_hash {
            None => true,
            Some(hash) => verify_password(password, hash),
        }
    }
}

/// Actions gated by worksheet protection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetProtectionAction {
    SelectLockedCells,
    SelectUnlockedCells,
    FormatCells,
    FormatColumns,
    FormatRows,
    InsertColumns,
    InsertRows,
    InsertHyperlinks,
    DeleteColumns,
    DeleteRows,
    Sort,
    AutoFilter,
    PivotTables,
    EditObjects,
    EditScenarios,
}
