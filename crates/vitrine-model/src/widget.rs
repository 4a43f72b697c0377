//! Widget capability trait and the contexts the host supplies per call.
//!
//! # Design
//! - The host framework holds widgets behind `Arc<dyn Widget>` in a
//!   registration table; there is no base-class inheritance and no implicit
//!   load-time registration.
//! - Render and form output are returned as strings; the host owns the
//!   output stream.

use crate::post::PostRepository;
use crate::settings::{SettingsInput, WidgetSettings};

/// Identity and admin metadata for a registered widget type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Stable identifier used for registration and field naming.
    pub id: &'static str,
    /// Localized display name shown in the admin widget chooser.
    pub name: String,
    /// CSS class applied to the widget container.
    pub classname: &'static str,
    /// Localized admin-facing description.
    pub description: String,
    /// Whether the host may re-render this widget in isolation after a
    /// settings change instead of refreshing the whole page.
    pub selective_refresh: bool,
}

/// Wrapping markup fragments supplied by the host per placement/theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Opening container fragment.
    pub before_widget: String,
    /// Closing container fragment.
    pub after_widget: String,
    /// Fragment emitted before a non-empty title.
    pub before_title: String,
    /// Fragment emitted after a non-empty title.
    pub after_title: String,
}

impl RenderContext {
    /// Context with empty fragments, for hosts without theme chrome.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            before_widget: String::new(),
            after_widget: String::new(),
            before_title: String::new(),
            after_title: String::new(),
        }
    }
}

/// Field id/name scheme for one placement's admin form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContext {
    widget_id: String,
    instance: String,
}

impl FormContext {
    /// Build the context for `widget_id` and a host-assigned instance key.
    #[must_use]
    pub fn new(widget_id: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            instance: instance.into(),
        }
    }

    /// DOM id for a form control bound to `field`.
    #[must_use]
    pub fn field_id(&self, field: &str) -> String {
        format!("widget-{}-{}-{field}", self.widget_id, self.instance)
    }

    /// Submission name for a form control bound to `field`.
    #[must_use]
    pub fn field_name(&self, field: &str) -> String {
        format!("widget-{}[{}][{field}]", self.widget_id, self.instance)
    }
}

/// Capability interface every widget exposes to the host framework.
///
/// The host invokes `render` on the front end, `form` to build the admin
/// UI, and `update` on form submission; it persists the record `update`
/// returns and supplies it back on subsequent calls.
pub trait Widget: Send + Sync {
    /// Identity and admin metadata for this widget type.
    fn descriptor(&self) -> WidgetDescriptor;

    /// Render the front-end markup for one placement.
    fn render(
        &self,
        ctx: &RenderContext,
        settings: &WidgetSettings,
        posts: &dyn PostRepository,
    ) -> String;

    /// Render the admin configuration form for one placement.
    fn form(&self, form: &FormContext, settings: &WidgetSettings) -> String;

    /// Merge a form submission into the previous settings record.
    fn update(&self, input: SettingsInput, previous: WidgetSettings) -> WidgetSettings;
}
