//! Bootstrap（モーダル・折りたたみ）との連携

use gloo::console::error;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

pub const GALLERY_MODAL_ID: &str = "galleryModal";
pub const BACKLOG_COLLAPSE_ID: &str = "backlogGridWrap";

#[wasm_bindgen(module = "/js/widgets.js")]
extern "C" {
    #[wasm_bindgen(js_name = "showModal")]
    fn show_modal_js(id: &str);
}

pub fn show_modal(id: &str) {
    show_modal_js(id);
}

/// ウィジェットの通知イベント（shown.bs.collapse 等）やウィンドウイベントを購読する
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        error!(format!("{} の購読に失敗: {:?}", event, e));
    }
    closure.forget();
}
