//! プロジェクトカードの表示モデル
//!
//! ProjectRecord を、画面に並べるだけの値（画像URL・バッジ・リンク）に変換する。
//! 欠けている項目はエラーにせず、無効化されたボタンや代替画像で表示する。

use crate::config::SiteConfig;
use crate::types::{ProjectRecord, SectionKind};

/// カード下部のアクションボタン
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLink {
    pub label: &'static str,
    pub icon: &'static str,
    /// None の場合は disabled なボタンとして描画
    pub href: Option<String>,
}

impl ActionLink {
    fn new(label: &'static str, icon: &'static str, href: Option<&str>) -> Self {
        Self {
            label,
            icon,
            href: href.map(str::to_string),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.href.is_some()
    }
}

/// カード1枚分の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub slug: String,
    pub title: String,
    pub thumbnail_src: String,
    pub thumbnail_alt: String,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub description: String,
    pub tags: Vec<String>,
    pub code: ActionLink,
    pub demo: ActionLink,
}

impl CardView {
    pub fn render(record: &ProjectRecord, section: SectionKind, config: &SiteConfig) -> Self {
        // image(0) は代替画像を含めて常に存在する
        let thumbnail = record.image(0).unwrap_or(crate::types::PLACEHOLDER_IMAGE);

        Self {
            slug: record.name.clone(),
            title: record.title.clone(),
            thumbnail_src: config.asset_url(thumbnail),
            thumbnail_alt: format!("{} preview", record.title),
            badge_label: section.badge_label(),
            badge_class: section.badge_class(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            code: ActionLink::new("Code", "fa-code", record.source_link()),
            demo: ActionLink::new("Demo", "fa-play", record.view_link()),
        }
    }
}
