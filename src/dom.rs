use gloo::utils::{body, document, window};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::anchor::Viewport;
use crate::config::MotionConfig;
use crate::content::LoopVariant;
use crate::geometry::Rect;
use crate::reveal::{RevealEffect, RevealKind, RevealTracker, REVEALED_CLASS, REVEAL_KEY_ATTR};

pub fn read_config() -> MotionConfig {
    let root = document().document_element();
    MotionConfig::from_lookup(|name| root.as_ref().and_then(|r| r.get_attribute(name)))
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn set_body_overflow(value: &str) {
    let _ = body().style().set_property("overflow", value);
}

/// Motion loop variant rendered inside the card for project `id`, if any.
pub fn card_snippet(id: u32) -> Option<LoopVariant> {
    let selector = format!(".project-card[data-project-id=\"{id}\"] .motion-loop");
    let snippet = document().query_selector(&selector).ok().flatten()?;
    LoopVariant::from_str(&snippet.get_attribute("data-loop-variant")?)
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        document()
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn header_height(&self) -> Option<f64> {
        document()
            .query_selector(".site-header")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|header| f64::from(header.offset_height()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Live intersection observer for the reveal targets. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches every element carrying a reveal key. Each one gets the revealed
/// class once, is unobserved, and is reported to `on_reveal`.
pub fn observe_reveals<F>(config: &MotionConfig, mut on_reveal: F) -> Option<RevealObserver>
where
    F: FnMut(RevealEffect) + 'static,
{
    let targets = document()
        .query_selector_all(&format!("[{REVEAL_KEY_ATTR}]"))
        .ok()?;

    let mut tracker = RevealTracker::new();
    let mut elements = Vec::new();
    for index in 0..targets.length() {
        let Some(element) = targets
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(key) = element.get_attribute(REVEAL_KEY_ATTR) else {
            continue;
        };
        let Some(kind) = RevealKind::from_class_list(&element.class_name()) else {
            continue;
        };
        if tracker.register(key, kind) {
            elements.push(element);
        }
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = target.get_attribute(REVEAL_KEY_ATTR) else {
                    continue;
                };

                if let Some(effect) = tracker.observe(&key, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                    on_reveal(effect);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    for element in &elements {
        observer.observe(element);
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
