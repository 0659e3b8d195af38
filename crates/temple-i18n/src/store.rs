//! Durable storage for the explicit language preference
//!
//! One slot, one file, one short string. Absence, unreadability, and
//! invalid contents all mean the same thing to startup: fall through to
//! detection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{I18nError, I18nResult};

/// Fixed name of the preference slot inside the state directory
pub const PREFERENCE_FILE: &str = "preferred-language";

/// Storage for the last explicitly chosen language code
pub trait PreferenceStore: Send + Sync {
    /// Read the stored code, if any
    fn load(&self) -> Option<String>;

    /// Write the code so it survives process restart
    fn save(&self, code: &str) -> I18nResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, code: &str) -> I18nResult<()> {
        (**self).save(code)
    }
}

/// File-backed preference slot under a state directory
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store writing to `state_dir`/`preferred-language`
    pub fn new<P: AsRef<Path>>(state_dir: P) -> Self {
        Self {
            path: state_dir.as_ref().join(PREFERENCE_FILE),
        }
    }

    /// The file the slot lives in
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let code = contents.trim();
                if code.is_empty() {
                    None
                } else {
                    Some(code.to_string())
                }
            }
            Err(error) => {
                debug!(
                    "no readable language preference at {}: {}",
                    self.path.display(),
                    error
                );
                None
            }
        }
    }

    fn save(&self, code: &str) -> I18nResult<()> {
        let write_error = |source| I18nError::PreferenceWrite {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, format!("{code}\n")).map_err(write_error)?;
        debug!("persisted language preference '{}' to {}", code, self.path.display());
        Ok(())
    }
}
