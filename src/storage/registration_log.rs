use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::models::Registration;
use crate::utils::VerifyError;

lazy_static! {
    // One lock per log file, shared by every RegistrationLog in the process
    static ref FILE_LOCKS: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>> = Mutex::new(HashMap::new());
}

fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let key = match std::env::current_dir() {
        Ok(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };
    let mut locks = FILE_LOCKS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(locks.entry(key).or_default())
}

/// Append-only registration history kept as one JSON array on disk.
///
/// A missing file starts an empty log. A file that is not a JSON array
/// (including one that is not UTF-8) is replaced on the next append.
/// Appends to the same file from one process are serialized, whichever
/// instance makes them; each rewrite lands through a temp file persisted
/// over the target.
pub struct RegistrationLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl RegistrationLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let lock = lock_for(&path);
        RegistrationLog { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores `registration` with the next free id and returns that id.
    pub fn append(&self, registration: &Registration) -> Result<u64, VerifyError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = self.read_entries()?;
        let id = entries
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_u64))
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| {
                VerifyError::Storage(format!("No registration id left after u64::MAX in {:?}", self.path))
            })?;

        let mut stored = registration.clone();
        stored.id = id;
        entries.push(serde_json::to_value(&stored)?);

        self.write_entries(&entries)?;
        debug!("Recorded registration {} in {:?}", id, self.path);
        Ok(id)
    }

    /// All entries that still read back as registrations.
    pub fn load(&self) -> Result<Vec<Registration>, VerifyError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        Ok(self
            .read_entries()?
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    fn read_entries(&self) -> Result<Vec<Value>, VerifyError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Value>>(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "Registration log {:?} is not a JSON array ({}); starting a new one",
                    self.path, e
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_entries(&self, entries: &[Value]) -> Result<(), VerifyError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut temp_file = NamedTempFile::new_in(&dir)?;
        {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut temp_file, formatter);
            entries.serialize(&mut serializer)?;
        }
        temp_file.write_all(b"\n")?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
