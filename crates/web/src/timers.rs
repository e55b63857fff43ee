//! Browser timers as futures.

#[cfg(not(target_arch = "wasm32"))]
use leptos::task;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });

        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    _ = JsFuture::from(Promise::new(&mut executor)).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_delay_ms: i32) {
    task::tick().await;
}
