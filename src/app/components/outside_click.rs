//! Close-on-outside-click support for dropdowns.
//!
//! A `mousedown` listener is registered on the document when the component
//! mounts and removed when it unmounts. The listener is owned by a guard
//! whose `Drop` performs the removal.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

/// Set `open` to false when a pointer goes down outside the element with
/// id `container_id`. No-op outside the browser.
pub fn use_outside_click(container_id: &'static str, open: Signal<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        let guard = use_hook(move || {
            let mut open = open;
            let listener = listener::DocumentListener::register("mousedown", move |event| {
                if *open.peek() && listener::is_outside(container_id, &event) {
                    open.set(false);
                }
            });
            if listener.is_none() {
                tracing::warn!(container_id, "Could not register outside-click listener");
            }
            Rc::new(RefCell::new(listener))
        });

        use_drop(move || {
            guard.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (container_id, open);
}

#[cfg(target_arch = "wasm32")]
mod listener {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A document event listener that unregisters itself on drop.
    pub struct DocumentListener {
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DocumentListener {
        pub fn register(
            event: &'static str,
            handler: impl FnMut(web_sys::Event) + 'static,
        ) -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
            document
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { event, callback })
        }
    }

    impl Drop for DocumentListener {
        fn drop(&mut self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    self.event,
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// True when the event target is a node outside the container.
    pub fn is_outside(container_id: &str, event: &web_sys::Event) -> bool {
        let Some(container) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
        else {
            return false;
        };

        match event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
            Some(node) => !container.contains(Some(&node)),
            None => false,
        }
    }
}
