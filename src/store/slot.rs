//! Durable string slots.
//!
//! A [`Slot`] is the seam between the tracker and whatever key-value
//! store the host environment provides: one named slot holding one string
//! value. [`FileSlot`] keeps the value in a JSON file on disk;
//! [`MemorySlot`] keeps it in memory for tests and demos.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A named durable slot holding at most one string value.
///
/// All methods are infallible with respect to *content*: a slot stores
/// whatever string it is given and returns it verbatim. Only the I/O
/// itself can fail.
pub trait Slot {
    /// Read the stored value, `None` when the slot has never been written
    /// or has been cleared.
    fn read(&self) -> io::Result<Option<String>>;

    /// Overwrite the stored value unconditionally.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Remove the stored value. Clearing an empty slot is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// Slot backed by one file per storage key under a directory.
///
/// Writes go through a temp file and rename so a crash mid-write cannot
/// leave a half-written value behind.
///
/// # Example
///
/// ```rust,no_run
/// use waymark::store::{FileSlot, Slot};
///
/// let slot = FileSlot::new("/var/lib/waymark", "travel_map_v1");
/// slot.write("{\"JP\":\"lived\"}")?;
/// assert!(slot.read()?.is_some());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot for `key` under `dir`, stored as `<dir>/<key>.json`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Slot at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this slot reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file + rename keeps the previous value intact until the
        // new one is fully on disk.
        let temp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory slot, shared between clones.
///
/// Clones see the same value, which lets a test hand a slot to a tracker
/// and still inspect what was persisted.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `contents`, as if a previous session had
    /// saved it.
    pub fn with_contents(contents: &str) -> Self {
        let slot = Self::new();
        *slot.lock() = Some(contents.to_owned());
        slot
    }

    /// A copy of the currently stored value.
    pub fn snapshot(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.value.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.lock().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.lock() = Some(contents.to_owned());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_round_trips() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);

        slot.write("hello").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("hello"));

        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn memory_slot_clones_share_state() {
        let slot = MemorySlot::new();
        let clone = slot.clone();

        slot.write("shared").unwrap();
        assert_eq!(clone.snapshot().as_deref(), Some("shared"));
    }

    #[test]
    fn file_slot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "travel_map_v1");

        assert_eq!(slot.read().unwrap(), None);

        slot.write(r#"{"JP":"lived"}"#).unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some(r#"{"JP":"lived"}"#));

        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn file_slot_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested/deeper"), "state");

        slot.write("x").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn file_slot_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "state");

        slot.write("first").unwrap();
        slot.write("second").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "state");

        slot.clear().unwrap();
        slot.write("x").unwrap();
        slot.clear().unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }
}
