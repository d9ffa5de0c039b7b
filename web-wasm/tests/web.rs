//! ブラウザ上でのテスト（wasm-pack test --headless --firefox）

use gloo::timers::future::TimeoutFuture;
use portfolio_wasm::layout::Debounce;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_debounce_collapses_bursts() {
    let fired = Rc::new(Cell::new(0));
    let debounce = Debounce::new(20);

    for _ in 0..5 {
        let fired = fired.clone();
        debounce.schedule(move || fired.set(fired.get() + 1));
    }
    assert_eq!(fired.get(), 0);

    TimeoutFuture::new(80).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn test_debounce_runs_again_after_quiet_period() {
    let fired = Rc::new(Cell::new(0));
    let debounce = Debounce::new(10);

    let counter = fired.clone();
    debounce.schedule(move || counter.set(counter.get() + 1));
    TimeoutFuture::new(50).await;

    let counter = fired.clone();
    debounce.schedule(move || counter.set(counter.get() + 1));
    TimeoutFuture::new(50).await;

    assert_eq!(fired.get(), 2);
}
