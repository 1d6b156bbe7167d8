//! DOM Helpers
//!
//! Scoped resources a drag session holds: the floating ghost, the
//! selection/cursor lock and the document listeners. Each one undoes
//! itself on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::geometry::Point;
use crate::hit_test::attrs;

/// Offset of the ghost from the pointer so it never covers the hit point
const GHOST_OFFSET_PX: f64 = 8.0;

/// Floating preview of the dragged element
pub struct Ghost {
    element: web_sys::HtmlElement,
}

impl Ghost {
    /// Clone `source` into a pointer-following preview appended to `<body>`.
    pub fn spawn(source: &web_sys::Element, point: Point) -> Option<Self> {
        let document = source.owner_document()?;
        let body = document.body()?;
        let element = source
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;

        strip_controls(&document, source, &element);
        strip_drop_attributes(&element);
        let _ = element.class_list().add_1("drag-ghost");
        let _ = element.class_list().remove_1("dragging");

        let width = source
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|el| el.offset_width())
            .unwrap_or_default();
        let style = element.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("pointer-events", "none");
        let _ = style.set_property("z-index", "1000");
        let _ = style.set_property("width", &format!("{}px", width));

        body.append_child(&element).ok()?;
        let ghost = Self { element };
        ghost.follow(point);
        Some(ghost)
    }

    /// Move the preview to the raw pointer position
    pub fn follow(&self, point: Point) {
        let style = self.element.style();
        let _ = style.set_property("left", &format!("{}px", point.x + GHOST_OFFSET_PX));
        let _ = style.set_property("top", &format!("{}px", point.y + GHOST_OFFSET_PX));
    }
}

impl Drop for Ghost {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Replace text inputs with their current text and drop buttons and checkboxes.
/// `cloneNode` copies attributes only, so values are read from `source`.
fn strip_controls(document: &web_sys::Document, source: &web_sys::Element, clone: &web_sys::HtmlElement) {
    let (Ok(originals), Ok(copies)) = (source.query_selector_all("input"), clone.query_selector_all("input")) else {
        return;
    };
    for index in 0..copies.length() {
        let Some(copy) = copies.get(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let original = originals
            .get(index)
            .and_then(|n| n.dyn_into::<web_sys::HtmlInputElement>().ok());
        match original {
            Some(input) if input.type_() != "checkbox" => {
                if let Ok(span) = document.create_element("span") {
                    span.set_class_name("ghost-text");
                    span.set_text_content(Some(&input.value()));
                    let _ = copy.replace_with_with_node_1(&span);
                }
            }
            _ => copy.remove(),
        }
    }

    if let Ok(buttons) = clone.query_selector_all("button") {
        for index in 0..buttons.length() {
            if let Some(button) = buttons.get(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                button.remove();
            }
        }
    }
}

/// Keep hit testing blind to the ghost's copies of drop surfaces
fn strip_drop_attributes(clone: &web_sys::HtmlElement) {
    let _ = clone.remove_attribute(attrs::SCOPE);
    let selector = format!("[{}]", attrs::SCOPE);
    if let Ok(nested) = clone.query_selector_all(&selector) {
        for index in 0..nested.length() {
            if let Some(el) = nested.get(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.remove_attribute(attrs::SCOPE);
            }
        }
    }
}

/// Disables text selection and shows the grabbing cursor while held
pub struct SelectionLock {
    body: web_sys::HtmlElement,
    user_select: String,
    cursor: String,
}

impl SelectionLock {
    pub fn engage(document: &web_sys::Document) -> Option<Self> {
        let body = document.body()?;
        let style = body.style();
        let user_select = style.get_property_value("user-select").unwrap_or_default();
        let cursor = style.get_property_value("cursor").unwrap_or_default();
        let _ = style.set_property("user-select", "none");
        let _ = style.set_property("cursor", "grabbing");
        Some(Self { body, user_select, cursor })
    }
}

impl Drop for SelectionLock {
    fn drop(&mut self) {
        let style = self.body.style();
        for (name, previous) in [("user-select", &self.user_select), ("cursor", &self.cursor)] {
            if previous.is_empty() {
                let _ = style.remove_property(name);
            } else {
                let _ = style.set_property(name, previous);
            }
        }
    }
}

pub type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Document-level listeners installed for the lifetime of a session
pub struct ListenerGuard {
    target: web_sys::EventTarget,
    listeners: Vec<(&'static str, Listener)>,
    attached: bool,
}

impl ListenerGuard {
    pub fn attach(target: web_sys::EventTarget, listeners: Vec<(&'static str, Listener)>) -> Self {
        for (event, listener) in &listeners {
            let _ = target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        Self { target, listeners, attached: true }
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for (event, listener) in &self.listeners {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        self.attached = false;
    }

    /// Detach now and free the closures once the current event has returned.
    /// A closure must not be freed while it is still executing.
    pub fn release(mut self) {
        self.detach();
        wasm_bindgen_futures::spawn_local(async move {
            drop(self);
        });
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}
