//! Test helpers for exercising startup and persistence paths

use std::io;
use std::sync::Mutex;

use crate::error::{I18nError, I18nResult};
use crate::store::PreferenceStore;

/// In-memory preference slot for restart simulations
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    /// An empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-populated as if a previous run had persisted `code`
    pub fn with_preference(code: &str) -> Self {
        Self {
            slot: Mutex::new(Some(code.to_string())),
            fail_writes: false,
        }
    }

    /// A slot whose writes always fail, as with unavailable storage
    pub fn failing() -> Self {
        Self {
            slot: Mutex::new(None),
            fail_writes: true,
        }
    }

    /// What the slot currently holds
    pub fn saved(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, code: &str) -> I18nResult<()> {
        if self.fail_writes {
            return Err(I18nError::PreferenceWrite {
                path: "<memory>".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        *self.slot.lock().unwrap() = Some(code.to_string());
        Ok(())
    }
}
