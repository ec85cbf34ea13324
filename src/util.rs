// Console logging and timer helpers shared by the component and the demo
use crate::refresh::RefreshError;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    #[cfg(all(target_arch = "wasm32", debug_assertions))]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
    let _ = msg; // debug builds in the browser only
}

pub fn cerror(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

/// Resolves after `ms` milliseconds on the browser timer queue.
pub async fn sleep_ms(ms: i32) -> Result<(), RefreshError> {
    let window = web_sys::window()
        .ok_or_else(|| RefreshError::Failed("no browser window to schedule a timer".to_string()))?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
