use crate::scroll::{ElementGeometry, ScrollFrame};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_frame() -> ScrollFrame {
    let scroll_y = window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let (_, viewport_height) = viewport_size();
    let document_height = document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    ScrollFrame {
        scroll_y,
        viewport_height,
        document_height,
    }
}

/// Layout box of `element` in document coordinates.
pub fn document_geometry(element: &Element, scroll_y: f64) -> ElementGeometry {
    let rect = element.get_bounding_client_rect();
    ElementGeometry {
        top: rect.top() + scroll_y,
        height: rect.height(),
    }
}

/// Layout offset of `element` below the top of `ancestor`. Transforms and
/// sticky shifts do not count. `None` when `ancestor` is not an offset parent.
pub fn offset_within(element: &HtmlElement, ancestor: &Element) -> Option<f64> {
    let mut offset = 0.0;
    let mut current = element.clone();
    loop {
        offset += f64::from(current.offset_top());
        let parent = current.offset_parent()?;
        if parent.is_same_node(Some(ancestor)) {
            return Some(offset);
        }
        current = parent.dyn_into::<HtmlElement>().ok()?;
    }
}

/// Smooth-scrolls to the element with id `anchor`. Returns false when it is not mounted.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(anchor)) else {
        log::debug!("no section #{anchor} to scroll to");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop that runs until dropped.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    /// Schedules `on_frame` every display refresh with the frame timestamp in ms.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        let win = window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let scheduler = win.clone();
        let next_handle = handle.clone();
        let next_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            on_frame(timestamp);

            // Gone once the loop has been dropped.
            if let Some(frame) = next_callback.borrow().as_ref() {
                next_handle.set(
                    scheduler
                        .request_animation_frame(frame.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }));

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|frame| win.request_animation_frame(frame.as_ref().unchecked_ref()).ok());
        handle.set(first);

        Some(Self { handle, callback })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(win), Some(id)) = (window(), self.handle.take()) {
            let _ = win.cancel_animation_frame(id);
        }
        // breaks the closure's reference back to its own slot
        self.callback.borrow_mut().take();
    }
}

/// A window event listener, removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}
