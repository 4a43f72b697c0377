//! Per-placement settings persistence.
//!
//! # Design
//! - Records are stored as JSON payloads, mirroring how a host keeps
//!   widget instances in its options store.
//! - A payload that fails to deserialize degrades to defaults with a
//!   warning; settings problems never fail a render.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;
use uuid::Uuid;
use vitrine_model::WidgetSettings;

use crate::error::{HostError, HostResult};

/// Durable store for widget placement settings.
#[derive(Debug, Default)]
pub struct InstanceStore {
    records: HashMap<Uuid, StoredInstance>,
}

#[derive(Debug)]
struct StoredInstance {
    widget_id: String,
    payload: Value,
}

impl InstanceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placement for `widget_id` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Storage`] when the default record cannot be
    /// serialized.
    pub fn create(&mut self, widget_id: &str) -> HostResult<Uuid> {
        let instance = Uuid::new_v4();
        let payload =
            serde_json::to_value(WidgetSettings::default()).map_err(|source| HostError::Storage {
                operation: "instance_store.create",
                source,
            })?;
        self.records.insert(
            instance,
            StoredInstance {
                widget_id: widget_id.to_string(),
                payload,
            },
        );
        Ok(instance)
    }

    /// Widget identifier the placement was created for.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownInstance`] for an unknown placement.
    pub fn widget_id(&self, instance: Uuid) -> HostResult<&str> {
        self.records
            .get(&instance)
            .map(|record| record.widget_id.as_str())
            .ok_or(HostError::UnknownInstance { instance })
    }

    /// Load the settings record for a placement.
    ///
    /// A corrupt stored payload degrades to [`WidgetSettings::default`]
    /// rather than failing the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownInstance`] for an unknown placement.
    pub fn load(&self, instance: Uuid) -> HostResult<WidgetSettings> {
        let record = self
            .records
            .get(&instance)
            .ok_or(HostError::UnknownInstance { instance })?;
        let settings = serde_json::from_value(record.payload.clone()).unwrap_or_else(|err| {
            warn!(
                instance = %instance,
                error = %err,
                "stored settings payload is corrupt, using defaults"
            );
            WidgetSettings::default()
        });
        Ok(settings)
    }

    /// Persist the settings record for a placement.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownInstance`] for an unknown placement and
    /// [`HostError::Storage`] when the record cannot be serialized.
    pub fn save(&mut self, instance: Uuid, settings: &WidgetSettings) -> HostResult<()> {
        let payload = serde_json::to_value(settings).map_err(|source| HostError::Storage {
            operation: "instance_store.save",
            source,
        })?;
        let record = self
            .records
            .get_mut(&instance)
            .ok_or(HostError::UnknownInstance { instance })?;
        record.payload = payload;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_model::DEFAULT_POST_COUNT;

    #[test]
    fn create_then_load_yields_defaults() {
        let mut store = InstanceStore::new();
        let instance = store
            .create("vitrine_featured_posts")
            .expect("create should succeed");
        let settings = store.load(instance).expect("load should succeed");
        assert_eq!(settings, WidgetSettings::default());
        assert_eq!(
            store.widget_id(instance).expect("instance should exist"),
            "vitrine_featured_posts"
        );
    }

    #[test]
    fn save_round_trips_settings() {
        let mut store = InstanceStore::new();
        let instance = store
            .create("vitrine_featured_posts")
            .expect("create should succeed");
        let settings = WidgetSettings {
            title: "Reading List".to_string(),
            description: Some("weekly picks".to_string()),
            post_count: 3,
        };
        store
            .save(instance, &settings)
            .expect("save should succeed");
        assert_eq!(store.load(instance).expect("load should succeed"), settings);
    }

    #[test]
    fn corrupt_payload_degrades_to_defaults() {
        let mut store = InstanceStore::new();
        let instance = store
            .create("vitrine_featured_posts")
            .expect("create should succeed");
        store
            .records
            .get_mut(&instance)
            .expect("instance should exist")
            .payload = json!({ "post_count": "not-a-number" });
        let settings = store.load(instance).expect("load should degrade");
        assert_eq!(settings.post_count, DEFAULT_POST_COUNT);
    }

    #[test]
    fn unknown_instance_is_an_error() {
        let store = InstanceStore::new();
        let err = store.load(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, HostError::UnknownInstance { .. }));
    }
}
