//! Scroll-triggered reveal animations.
//!
//! Observes every `.reveal` element and adds the `.fade-in` class the first
//! time it enters the viewport. The stylesheet owns the transition; this
//! module only flips the class.

/// Start observing `.reveal` elements. The observer and its callback live
/// for the page session. A no-op outside a browser build.
pub fn observe_reveals() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("fade-in");
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };

        if let Ok(nodes) = document.query_selector_all(".reveal") {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        observer.observe(&el);
                    }
                }
            }
        }

        callback.forget();
    }
}
