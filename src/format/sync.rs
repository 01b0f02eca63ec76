//! Save/restore coordination.
//!
//! Save and restore are fire-and-forget requests: while one is in flight its
//! control is disabled, and the editor's regions are only touched once a
//! restore response has been decoded in full.

use web_time::Instant;

use super::error::{FormatError, StoreError};
use super::regions::{decode_regions, encode_regions};
use super::store::RegionStore;
use crate::editor::EditorState;

/// Tracks pending save/restore requests.
#[derive(Debug, Default)]
pub struct SyncController {
    /// When the in-flight save was started
    save_started: Option<Instant>,
    /// When the in-flight restore was started
    restore_started: Option<Instant>,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the save control is enabled.
    pub fn can_save(&self) -> bool {
        self.save_started.is_none()
    }

    /// Whether the restore control is enabled.
    pub fn can_restore(&self) -> bool {
        self.restore_started.is_none()
    }

    /// Start a save: encode the active regions and disable the save control.
    ///
    /// Returns `Ok(None)` while a previous save is still pending.
    pub fn begin_save(&mut self, editor: &EditorState) -> Result<Option<String>, FormatError> {
        if !self.can_save() {
            log::warn!("Save requested while a save is pending");
            return Ok(None);
        }
        let payload = encode_regions(editor.regions())?;
        self.save_started = Some(Instant::now());
        log::debug!("Save started ({} regions)", editor.regions().len());
        Ok(Some(payload))
    }

    /// Finish a save and re-enable the control.
    pub fn finish_save(&mut self, result: Result<(), StoreError>) -> Result<(), StoreError> {
        let started = self.save_started.take();
        match &result {
            Ok(()) => log::info!(
                "Saved regions in {:?}",
                started.map(|t| t.elapsed()).unwrap_or_default()
            ),
            Err(e) => log::error!("Save failed: {}", e),
        }
        result
    }

    /// Start a restore and disable the restore control.
    ///
    /// Returns false while a previous restore is still pending.
    pub fn begin_restore(&mut self) -> bool {
        if !self.can_restore() {
            log::warn!("Restore requested while a restore is pending");
            return false;
        }
        self.restore_started = Some(Instant::now());
        log::debug!("Restore started");
        true
    }

    /// Finish a restore with the backend's response.
    ///
    /// The payload is decoded in full before the editor is touched; any
    /// failure leaves the current regions as they were. Returns the number of
    /// regions restored.
    pub fn finish_restore(
        &mut self,
        editor: &mut EditorState,
        response: Result<String, StoreError>,
    ) -> Result<usize, StoreError> {
        self.restore_started = None;

        let entries = response
            .and_then(|payload| decode_regions(&payload).map_err(StoreError::from))
            .inspect_err(|e| log::error!("Restore failed: {}", e))?;

        let count = entries.len();
        editor.replace_regions(entries);
        Ok(count)
    }

    /// Run a complete save round against `store`.
    pub fn save_to(
        &mut self,
        editor: &EditorState,
        store: &mut impl RegionStore,
    ) -> Result<(), StoreError> {
        let Some(payload) = self.begin_save(editor)? else {
            return Err(StoreError::Pending("save"));
        };
        let result = store.save(&payload);
        self.finish_save(result)
    }

    /// Run a complete restore round against `store`.
    pub fn restore_from(
        &mut self,
        editor: &mut EditorState,
        store: &mut impl RegionStore,
    ) -> Result<usize, StoreError> {
        if !self.begin_restore() {
            return Err(StoreError::Pending("restore"));
        }
        let response = store.load();
        self.finish_restore(editor, response)
    }
}
