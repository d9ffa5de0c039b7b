//! 説明文のクランプ状態
//!
//! DOM側で測った内容の高さを受け取り、切り詰めの要否と More/Less トグルの有無を決める。
//! トグルは切り詰めが必要なときだけ存在する。

/// apply() による変化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampChange {
    Unchanged,
    ToggleCreated,
    ToggleRemoved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampState {
    needs_truncation: bool,
    expanded: bool,
}

impl ClampState {
    pub const fn new() -> Self {
        Self {
            needs_truncation: false,
            expanded: false,
        }
    }

    /// 測定した内容の高さでクランプ状態を更新する
    ///
    /// 同じ高さで何度呼んでも状態は変わらない。展開中の説明文は展開されたまま残る。
    pub fn apply(&mut self, content_height_px: u32, max_height_px: u32) -> ClampChange {
        let needs = content_height_px > max_height_px;
        match (self.needs_truncation, needs) {
            (false, true) => {
                self.needs_truncation = true;
                self.expanded = false;
                ClampChange::ToggleCreated
            }
            (true, false) => {
                self.needs_truncation = false;
                self.expanded = false;
                ClampChange::ToggleRemoved
            }
            _ => ClampChange::Unchanged,
        }
    }

    /// More/Less の切り替え。トグルがなければ何もしない。
    pub fn toggle(&mut self) -> bool {
        if self.needs_truncation {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    pub fn has_toggle(&self) -> bool {
        self.needs_truncation
    }

    pub fn is_clamped(&self) -> bool {
        self.needs_truncation && !self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Less"
        } else {
            "More"
        }
    }
}
