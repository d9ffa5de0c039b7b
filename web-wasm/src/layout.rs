//! レイアウト再計測のトリガ
//!
//! 説明文の高さはレイアウト確定後にしか測れないため、
//! フィルタ変更・折りたたみ展開・リサイズのたびにエポックを進めて再クランプさせる。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// 購読しているカードに再計測を促すカウンタ
#[derive(Clone, Copy)]
pub struct LayoutEpoch(RwSignal<u32>);

impl Default for LayoutEpoch {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEpoch {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn track(&self) {
        self.0.track();
    }

    pub fn bump(&self) {
        self.0.update(|n| *n = n.wrapping_add(1));
    }

    /// 次のフレームで bump（表示切り替えのレイアウト反映を待つ）
    pub fn invalidate(&self) {
        let epoch = *self;
        request_animation_frame(move || epoch.bump());
    }
}

/// 最後の呼び出しから delay_ms 後に1回だけ実行する
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, callback);
        // 前の予約は drop で取り消される
        self.pending.borrow_mut().replace(timeout);
    }
}
