//! フィルタグループの状態
//!
//! グループ内のボタンは排他的で、常にちょうど1つがアクティブ。
//! カードの表示判定はレコードのタイトル・説明・タグに対して行う。

use crate::config::{FilterButton, FilterGroupConfig};
use crate::error::{Error, Result};
use crate::types::ProjectRecord;

/// 全件表示のワイルドカード
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    group: FilterGroupConfig,
    active: String,
}

impl FilterState {
    /// ワイルドカードがアクティブな状態で作る
    pub fn new(group: FilterGroupConfig) -> Result<Self> {
        group.validate()?;
        Ok(Self {
            group,
            active: ALL.to_string(),
        })
    }

    /// キーワードを適用する。グループにないキーワードは拒否し、状態は変えない。
    ///
    /// 戻り値はアクティブなキーワードが変わったかどうか。
    pub fn apply(&mut self, keyword: &str) -> Result<bool> {
        let button = self
            .group
            .buttons
            .iter()
            .find(|b| b.keyword.eq_ignore_ascii_case(keyword))
            .ok_or_else(|| Error::UnknownFilter(keyword.to_string()))?;
        if button.keyword == self.active {
            return Ok(false);
        }
        self.active = button.keyword.clone();
        Ok(true)
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_wildcard(&self) -> bool {
        self.active == ALL
    }

    pub fn group(&self) -> &FilterGroupConfig {
        &self.group
    }

    pub fn is_active(&self, button: &FilterButton) -> bool {
        button.keyword == self.active
    }

    /// ボタンとアクティブ状態の組
    pub fn buttons(&self) -> impl Iterator<Item = (&FilterButton, bool)> + '_ {
        self.group.buttons.iter().map(move |b| (b, self.is_active(b)))
    }

    pub fn is_visible(&self, record: &ProjectRecord) -> bool {
        self.is_wildcard() || record.mentions(&self.active)
    }

    /// レコード順の表示フラグ
    pub fn visibility(&self, records: &[ProjectRecord]) -> Vec<bool> {
        records.iter().map(|r| self.is_visible(r)).collect()
    }
}
