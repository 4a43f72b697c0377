//! Static assets the host wires up once at startup.

/// Front-end stylesheet for the widget, embedded at build time.
///
/// The host is expected to serve or inline this once per page; it is not
/// loaded on admin screens.
#[must_use]
pub const fn stylesheet() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/widget.css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_widget_classes() {
        let css = stylesheet();
        assert!(css.contains(".vitrine-featured-post"));
        assert!(css.contains(".vitrine-post-date"));
    }
}
