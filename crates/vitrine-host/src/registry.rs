//! Registration table for widget capability implementations.
//!
//! Widgets are registered through an explicit initialization call the host
//! makes once at startup; there is no process-wide registry and no
//! load-time side effects.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use vitrine_model::Widget;

use crate::error::{HostError, HostResult};

/// Table of registered widgets keyed by their stable identifier.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: HashMap<&'static str, Arc<dyn Widget>>,
}

impl WidgetRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget under its descriptor id.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::DuplicateWidget`] when the id is already taken.
    pub fn register(&mut self, widget: Arc<dyn Widget>) -> HostResult<()> {
        let descriptor = widget.descriptor();
        if self.widgets.contains_key(descriptor.id) {
            return Err(HostError::DuplicateWidget { id: descriptor.id });
        }
        info!(widget = descriptor.id, name = %descriptor.name, "registered widget");
        self.widgets.insert(descriptor.id, widget);
        Ok(())
    }

    /// Resolve a registered widget by id.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownWidget`] when nothing is registered
    /// under `id`.
    pub fn get(&self, id: &str) -> HostResult<Arc<dyn Widget>> {
        self.widgets
            .get(id)
            .cloned()
            .ok_or_else(|| HostError::UnknownWidget { id: id.to_string() })
    }

    /// Identifiers of all registered widgets, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.widgets.keys().copied().collect()
    }
}
