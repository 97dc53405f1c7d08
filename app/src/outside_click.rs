//! Outside-click detection
//!
//! While a popup is open, a `mousedown` listener on the document watches for
//! presses whose target is not inside the popup's root element. The listener
//! is owned by [`OutsideClickListener`] and detached when that guard drops, so
//! closing the popup or unmounting the component always releases it.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Document `mousedown` subscription, removed on drop.
pub struct OutsideClickListener {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl OutsideClickListener {
    /// Call `on_outside` for every press outside the element with id `root_id`.
    ///
    /// Returns `None` when there is no document to listen on.
    pub fn attach(root_id: String, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let lookup = document.clone();

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(root) = lookup.get_element_by_id(&root_id) else {
                return;
            };
            let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            if !root.contains(Some(&target)) {
                on_outside();
            }
        });

        document
            .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { document, callback })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.callback.as_ref().unchecked_ref());
    }
}

/// Bring the listener slot in line with the popup's open flag.
///
/// Open with an empty slot attaches once; closed always empties the slot,
/// which drops (and so detaches) any held listener.
fn sync_listener<L>(slot: &mut Option<L>, open: bool, attach: impl FnOnce() -> Option<L>) {
    if !open {
        *slot = None;
    } else if slot.is_none() {
        *slot = attach();
    }
}

/// Close a popup when the user presses outside of it.
///
/// `is_open` is read inside an effect, so any signal it touches re-runs the
/// attach/detach logic. The listener only exists while `is_open()` is true.
pub fn use_outside_click_close(
    root_id: String,
    is_open: impl Fn() -> bool + 'static,
    on_close: impl FnMut() + Clone + 'static,
) {
    let guard = use_hook(|| Rc::new(RefCell::new(None::<OutsideClickListener>)));

    let effect_guard = guard.clone();
    use_effect(move || {
        let open = is_open();
        sync_listener(&mut *effect_guard.borrow_mut(), open, || {
            OutsideClickListener::attach(root_id.clone(), on_close.clone())
        });
    });

    use_drop(move || {
        guard.borrow_mut().take();
    });
}
