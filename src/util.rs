// Small browser helpers shared across components.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Touch capability heuristic: any of the three signals makes the device
/// "touch". Hybrid laptops may answer inconsistently; callers treat the
/// result as a hint, not a contract.
pub fn is_touch_device() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let has_touch_events =
        js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let has_touch_points = win.navigator().max_touch_points() > 0;
    let coarse_pointer = win
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    has_touch_events || has_touch_points || coarse_pointer
}

/// Current vertical scroll position of the page.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Schedules `cb` after `ms`. Returns the handle, or `None` outside a
/// browser. The caller owns the closure's lifetime.
pub fn set_timeout(cb: &Closure<dyn FnMut()>, ms: i32) -> Option<i32> {
    web_sys::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok()
}

pub fn clear_timeout(id: Option<i32>) {
    if let (Some(win), Some(id)) = (web_sys::window(), id) {
        win.clear_timeout_with_handle(id);
    }
}

pub fn set_interval(cb: &Closure<dyn FnMut()>, ms: i32) -> Option<i32> {
    web_sys::window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok()
}

pub fn clear_interval(id: Option<i32>) {
    if let (Some(win), Some(id)) = (web_sys::window(), id) {
        win.clear_interval_with_handle(id);
    }
}

/// Smooth-scroll the window so `section_id` lands just below the navbar.
pub fn scroll_to_section(section_id: &str) {
    let Some(win) = web_sys::window() else { return };
    let Some(doc) = win.document() else { return };
    let Some(target) = doc.get_element_by_id(section_id) else {
        return;
    };
    let nav_height = doc
        .get_element_by_id("navbar")
        .map(|el| el.client_height() as f64)
        .unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + scroll_y() - nav_height;
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top.max(0.0));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}
