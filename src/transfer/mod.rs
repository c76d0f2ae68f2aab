//! Import and export of the country status map.
//!
//! Both directions use the same document shape as the persisted state: a
//! JSON object keyed by country code with status string values. Export is
//! pretty-printed for human readability; import is parsed but deliberately
//! not validated beyond its structure. Unknown country codes and status
//! strings pass through and simply never match a color or a list row.

use crate::core::CountryStatusMap;

mod error;

pub use error::TransferError;

/// File name offered to the user for a downloaded export.
pub const EXPORT_FILE_NAME: &str = "countries.json";

/// Serialize the map as a pretty-printed JSON document.
///
/// # Example
///
/// ```rust
/// use waymark::transfer::export_document;
/// use waymark::CountryStatusMap;
///
/// let doc = export_document(&CountryStatusMap::home_seed())?;
/// assert_eq!(doc, "{\n  \"JP\": \"lived\"\n}");
/// # Ok::<(), waymark::transfer::TransferError>(())
/// ```
pub fn export_document(map: &CountryStatusMap) -> Result<String, TransferError> {
    serde_json::to_string_pretty(map).map_err(TransferError::ExportFailed)
}

/// Parse an externally supplied document into a status map.
///
/// Fails with [`TransferError::MalformedImport`] when the text is not a
/// JSON object of strings; the caller's state must stay untouched in that
/// case. A successful parse is trusted structurally but not validated:
/// unrecognized status strings come back as `Status::Unrecognized` and are
/// kept as-is.
pub fn import_document(text: &str) -> Result<CountryStatusMap, TransferError> {
    serde_json::from_str(text).map_err(TransferError::MalformedImport)
}
