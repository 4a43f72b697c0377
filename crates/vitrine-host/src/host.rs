//! `WidgetHost` facade tying the registry, instance store, and theme
//! fragments together.
//!
//! # Design
//! - One host per sidebar/page region; placements render in insertion
//!   order.
//! - The host owns render-context construction so widgets stay unaware of
//!   theme chrome.
//! - Startup loads the embedded stylesheet and the i18n bundle so asset
//!   problems surface before the first request.

use tracing::debug;
use uuid::Uuid;
use vitrine_model::{FormContext, PostRepository, RenderContext, SettingsInput, WidgetSettings};

use crate::assets;
use crate::error::HostResult;
use crate::i18n::{self, DEFAULT_LOCALE};
use crate::registry::WidgetRegistry;
use crate::store::InstanceStore;

/// Reference host framework: registers widgets, persists placement
/// settings, and assembles sidebar markup.
pub struct WidgetHost {
    registry: WidgetRegistry,
    store: InstanceStore,
    placements: Vec<Uuid>,
}

impl WidgetHost {
    /// Host with an empty registry and no placements.
    ///
    /// Performs the once-per-process startup wiring: forces the i18n
    /// bundle to load and touches the embedded stylesheet.
    #[must_use]
    pub fn new() -> Self {
        let messages = i18n::preload(DEFAULT_LOCALE);
        debug!(
            locale = DEFAULT_LOCALE.as_str(),
            messages,
            stylesheet_bytes = assets::stylesheet().len(),
            "widget host startup assets loaded"
        );
        Self {
            registry: WidgetRegistry::new(),
            store: InstanceStore::new(),
            placements: Vec::new(),
        }
    }

    /// Mutable access to the registration table, for widget init functions.
    pub const fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    /// The registration table.
    #[must_use]
    pub const fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Add a placement of `widget_id` at the end of the sidebar, created
    /// with default settings.
    ///
    /// # Errors
    ///
    /// Fails when `widget_id` is not registered or the default record
    /// cannot be stored.
    pub fn add_instance(&mut self, widget_id: &str) -> HostResult<Uuid> {
        self.registry.get(widget_id)?;
        let instance = self.store.create(widget_id)?;
        self.placements.push(instance);
        debug!(widget = widget_id, instance = %instance, "added widget placement");
        Ok(instance)
    }

    /// Apply an admin form submission to a placement and persist the
    /// merged record.
    ///
    /// # Errors
    ///
    /// Fails for unknown placements or when the merged record cannot be
    /// stored.
    pub fn save_settings(
        &mut self,
        instance: Uuid,
        input: SettingsInput,
    ) -> HostResult<WidgetSettings> {
        let widget = self.registry.get(self.store.widget_id(instance)?)?;
        let previous = self.store.load(instance)?;
        let merged = widget.update(input, previous);
        self.store.save(instance, &merged)?;
        debug!(instance = %instance, "saved widget settings");
        Ok(merged)
    }

    /// Render the admin configuration form for a placement.
    ///
    /// # Errors
    ///
    /// Fails for unknown placements.
    pub fn form_for(&self, instance: Uuid) -> HostResult<String> {
        let widget_id = self.store.widget_id(instance)?;
        let widget = self.registry.get(widget_id)?;
        let settings = self.store.load(instance)?;
        let form = FormContext::new(widget_id, instance.to_string());
        Ok(widget.form(&form, &settings))
    }

    /// Render one placement's front-end markup.
    ///
    /// # Errors
    ///
    /// Fails for unknown placements.
    pub fn render_instance(&self, instance: Uuid, posts: &dyn PostRepository) -> HostResult<String> {
        let widget = self.registry.get(self.store.widget_id(instance)?)?;
        let settings = self.store.load(instance)?;
        let ctx = Self::render_context(widget.descriptor().classname, instance);
        Ok(widget.render(&ctx, &settings, posts))
    }

    /// Render every placement in insertion order.
    ///
    /// # Errors
    ///
    /// Fails when any placement fails to resolve.
    pub fn render_sidebar(&self, posts: &dyn PostRepository) -> HostResult<String> {
        let mut out = String::new();
        for instance in &self.placements {
            out.push_str(&self.render_instance(*instance, posts)?);
            out.push('\n');
        }
        Ok(out)
    }

    fn render_context(classname: &str, instance: Uuid) -> RenderContext {
        RenderContext {
            before_widget: format!(
                "<section id=\"widget-{instance}\" class=\"widget {classname}\">"
            ),
            after_widget: "</section>".to_string(),
            before_title: "<h2 class=\"widget-title\">".to_string(),
            after_title: "</h2>".to_string(),
        }
    }
}

impl Default for WidgetHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vitrine_model::{RepositoryResult, Widget, WidgetDescriptor};

    struct EchoWidget;

    impl Widget for EchoWidget {
        fn descriptor(&self) -> WidgetDescriptor {
            WidgetDescriptor {
                id: "echo",
                name: "Echo".to_string(),
                classname: "echo-widget",
                description: "Echoes its settings.".to_string(),
                selective_refresh: false,
            }
        }

        fn render(
            &self,
            ctx: &RenderContext,
            settings: &WidgetSettings,
            _posts: &dyn PostRepository,
        ) -> String {
            format!("{}[{}]{}", ctx.before_widget, settings.title, ctx.after_widget)
        }

        fn form(&self, form: &FormContext, settings: &WidgetSettings) -> String {
            format!("{}={}", form.field_name("title"), settings.title)
        }

        fn update(&self, input: SettingsInput, mut previous: WidgetSettings) -> WidgetSettings {
            if let Some(title) = input.title {
                previous.title = title;
            }
            previous
        }
    }

    struct NoPosts;

    impl PostRepository for NoPosts {
        fn find_by_tag(&self, _tag: &str, _limit: u32) -> RepositoryResult<Vec<vitrine_model::Post>> {
            Ok(Vec::new())
        }
    }

    fn host_with_echo() -> WidgetHost {
        let mut host = WidgetHost::new();
        host.registry_mut()
            .register(Arc::new(EchoWidget))
            .expect("first registration should succeed");
        host
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut host = host_with_echo();
        let err = host
            .registry_mut()
            .register(Arc::new(EchoWidget))
            .unwrap_err();
        assert!(matches!(err, crate::HostError::DuplicateWidget { id: "echo" }));
    }

    #[test]
    fn placements_render_in_insertion_order() {
        let mut host = host_with_echo();
        let first = host.add_instance("echo").expect("placement should be added");
        let second = host.add_instance("echo").expect("placement should be added");
        host.save_settings(
            first,
            SettingsInput {
                title: Some("One".to_string()),
                ..SettingsInput::default()
            },
        )
        .expect("save should succeed");
        host.save_settings(
            second,
            SettingsInput {
                title: Some("Two".to_string()),
                ..SettingsInput::default()
            },
        )
        .expect("save should succeed");

        let sidebar = host.render_sidebar(&NoPosts).expect("sidebar should render");
        let one = sidebar.find("[One]").expect("first placement should render");
        let two = sidebar.find("[Two]").expect("second placement should render");
        assert!(one < two);
    }

    #[test]
    fn render_context_carries_instance_and_classname() {
        let mut host = host_with_echo();
        let instance = host.add_instance("echo").expect("placement should be added");
        let markup = host
            .render_instance(instance, &NoPosts)
            .expect("instance should render");
        assert!(markup.contains(&format!("id=\"widget-{instance}\"")));
        assert!(markup.contains("class=\"widget echo-widget\""));
    }

    #[test]
    fn unknown_widget_cannot_be_placed() {
        let mut host = host_with_echo();
        let err = host.add_instance("missing").unwrap_err();
        assert!(matches!(err, crate::HostError::UnknownWidget { .. }));
    }

    #[test]
    fn form_uses_instance_scoped_field_names() {
        let mut host = host_with_echo();
        let instance = host.add_instance("echo").expect("placement should be added");
        let form = host.form_for(instance).expect("form should render");
        assert!(form.contains(&format!("widget-echo[{instance}][title]")));
    }
}
