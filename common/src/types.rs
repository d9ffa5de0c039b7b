//! ポートフォリオのレコード型定義
//!
//! - ProjectRecord: プロジェクトカード1枚分のデータ
//! - ExperienceRecord: 職歴タイムライン1件分のデータ
//! - SectionKind: カードが属するセクション（バッジ表示のみに影響）

use serde::{Deserialize, Serialize};

/// 画像が1枚もないプロジェクトで使う代替画像
pub const PLACEHOLDER_IMAGE: &str = "placeholder_0.png";

/// プロジェクトレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,

    /// リスト内で一意なスラッグ
    pub name: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub source_link: Option<String>,

    #[serde(default)]
    pub view_link: Option<String>,

    #[serde(default)]
    pub description: String,

    /// 使用技術タグ
    #[serde(default, rename = "utilized")]
    pub tags: Vec<String>,
}

impl ProjectRecord {
    /// ギャラリーで表示する画像枚数（代替画像を含むので常に1以上）
    pub fn image_count(&self) -> usize {
        self.images.len().max(1)
    }

    /// index番目の画像ファイル名
    pub fn image(&self, index: usize) -> Option<&str> {
        if self.images.is_empty() {
            (index == 0).then_some(PLACEHOLDER_IMAGE)
        } else {
            self.images.get(index).map(String::as_str)
        }
    }

    /// ソースコードへのリンク（空文字列は未設定扱い）
    pub fn source_link(&self) -> Option<&str> {
        non_empty(self.source_link.as_deref())
    }

    /// デモへのリンク（空文字列は未設定扱い）
    pub fn view_link(&self) -> Option<&str> {
        non_empty(self.view_link.as_deref())
    }

    /// タイトル・説明・タグに keyword が含まれるか（大文字小文字を区別しない）
    pub fn mentions(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

fn non_empty(link: Option<&str>) -> Option<&str> {
    link.filter(|l| !l.is_empty())
}

/// 職歴レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub employer: String,
    pub role: String,

    /// 期間ラベル（例: "Mar 2023 – Present"）
    #[serde(rename = "when")]
    pub date_range: String,

    /// インラインHTMLを含む箇条書き
    #[serde(default)]
    pub bullets: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// カードのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Recent,
    Legacy,
}

impl SectionKind {
    pub fn badge_label(&self) -> &'static str {
        match self {
            SectionKind::Recent => "Recent",
            SectionKind::Legacy => "Legacy",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SectionKind::Recent => "text-bg-info",
            SectionKind::Legacy => "text-bg-secondary",
        }
    }
}
