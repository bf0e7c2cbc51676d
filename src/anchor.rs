use crate::config::MotionConfig;

/// Scroll geometry the anchor navigator needs from the page.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Viewport-relative top of the element with this id, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the sticky header, if present.
    fn header_height(&self) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavOutcome {
    /// Default navigation was suppressed and the viewport scrolls to `top`.
    Scrolled { top: f64 },
    /// Let the browser handle the link.
    Fallthrough,
}

impl NavOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

/// The fragment id of an in-page href, e.g. `"#projects"` -> `"projects"`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target(element_top: f64, scroll_y: f64, header_height: f64, padding: f64) -> f64 {
    element_top + scroll_y - header_height - padding
}

pub fn navigate<V: Viewport + ?Sized>(viewport: &V, config: &MotionConfig, href: &str) -> NavOutcome {
    let Some(id) = fragment_id(href) else {
        return NavOutcome::Fallthrough;
    };
    let Some(element_top) = viewport.element_top(id) else {
        return NavOutcome::Fallthrough;
    };

    let top = scroll_target(
        element_top,
        viewport.scroll_y(),
        viewport.header_height().unwrap_or(0.0),
        config.anchor_padding,
    );
    viewport.smooth_scroll_to(top);
    NavOutcome::Scrolled { top }
}
