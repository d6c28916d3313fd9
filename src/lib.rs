//! `sheet-protection` models the legacy worksheet/workbook protection state of
//! spreadsheet files and the 16-bit password checksum stored alongside it.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - import/export layers that read and write `sheetProtection` /
//!   `workbookProtection` elements
//! - UI layers that gate edit operations on protection state via `serde`
//!   (JSON-safe schema)
//!
//! The password checksum is the classic XOR scheme used by legacy
//! spreadsheet applications. It is **not** cryptographically secure and
//! exists solely for format compatibility; see [`legacy_hash`].

mod error;
pub mod legacy_hash;
mod protection;
mod serde_defaults;

pub use error::ProtectionError;
pub use legacy_hash::{hash_password, hash_password_hex, parse_password_hash, verify_password};
pub use protection::{SheetProtection, SheetProtectionAction, WorkbookProtection};
