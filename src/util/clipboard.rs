//! Clipboard access for the copy-link button.

/// Copy `text` to the clipboard and call `done` with the outcome once the
/// write settles. Outside a browser build this reports failure immediately.
pub fn copy_text(text: String, done: impl FnOnce(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen_futures::JsFuture;

        let Some(window) = web_sys::window() else {
            done(false);
            return;
        };
        let clipboard = window.navigator().clipboard();
        leptos::task::spawn_local(async move {
            let ok = JsFuture::from(clipboard.write_text(&text)).await.is_ok();
            done(ok);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        done(false);
    }
}
