//! サイト設定
//!
//! 画像パス、説明文のクランプ閾値、メールリレーのID、フィルタボタン定義。
//! `data/site.json` を埋め込み、欠けている項目は既定値で補う。

use crate::error::{Error, Result};
use crate::filter::ALL;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

const EMBEDDED_SITE: &str = include_str!("../data/site.json");

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// 説明文をクランプする高さ（px）
pub const DESC_MAX_PX: u32 = 140;

/// リサイズ後の再クランプまでの待ち時間（ms）
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub images_path: String,
    pub clamp: ClampConfig,
    pub mail: MailRelayConfig,
    pub filters: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClampConfig {
    pub max_height_px: u32,
    pub resize_debounce_ms: u32,
}

/// メールリレー（EmailJS）の識別子
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailRelayConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub form_selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub recent: FilterGroupConfig,
    pub backlog: FilterGroupConfig,
}

/// フィルタグループ（排他的なボタン群とその対象コンテナ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroupConfig {
    pub name: String,
    pub container_id: String,
    pub buttons: Vec<FilterButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterButton {
    pub keyword: String,
    pub label: String,
}

impl FilterButton {
    pub fn new(keyword: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            label: label.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images_path: "./assets/images".into(),
            clamp: ClampConfig::default(),
            mail: MailRelayConfig::default(),
            filters: FilterConfig::default(),
        }
    }
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self {
            max_height_px: DESC_MAX_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl Default for MailRelayConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            service_id: String::new(),
            template_id: String::new(),
            form_selector: "#contact-form".into(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            recent: FilterGroupConfig {
                name: "recent".into(),
                container_id: "recentGrid".into(),
                buttons: vec![FilterButton::new(ALL, "All")],
            },
            backlog: FilterGroupConfig {
                name: "backlog".into(),
                container_id: "backlogGrid".into(),
                buttons: vec![FilterButton::new(ALL, "All")],
            },
        }
    }
}

impl SiteConfig {
    /// 埋め込み設定（プロセス内で一度だけパース）
    pub fn embedded() -> Result<&'static SiteConfig> {
        if let Some(config) = SITE.get() {
            return Ok(config);
        }
        let config = Self::from_json(EMBEDDED_SITE)?;
        Ok(SITE.get_or_init(|| config))
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 画像ファイル名を配信パスに解決（存在確認はしない）
    pub fn asset_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.images_path.trim_end_matches('/'), file_name)
    }

    fn validate(&self) -> Result<()> {
        if self.clamp.max_height_px == 0 {
            return Err(Error::Config("clamp.maxHeightPx must be positive".into()));
        }
        for group in [&self.filters.recent, &self.filters.backlog] {
            group.validate()?;
        }
        Ok(())
    }
}

impl FilterGroupConfig {
    /// ワイルドカードを含み、キーワードが重複しないこと（大文字小文字は区別しない）
    pub fn validate(&self) -> Result<()> {
        if !self.buttons.iter().any(|b| b.keyword == ALL) {
            return Err(Error::Config(format!(
                "filter group '{}' has no '{}' button",
                self.name, ALL
            )));
        }
        let mut seen = HashSet::new();
        for button in &self.buttons {
            if !seen.insert(button.keyword.to_lowercase()) {
                return Err(Error::Config(format!(
                    "filter group '{}' has duplicate keyword '{}'",
                    self.name, button.keyword
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config() {
        let config = SiteConfig::embedded().expect("埋め込み設定の読み込み失敗");
        assert_eq!(config.clamp.max_height_px, 140);
        assert_eq!(config.clamp.resize_debounce_ms, 120);
        assert_eq!(config.mail.form_selector, "#contact-form");
        assert_eq!(config.filters.recent.container_id, "recentGrid");
        assert!(config.filters.backlog.buttons.iter().any(|b| b.keyword == "react"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SiteConfig::from_json(r#"{"imagesPath": "/img/"}"#).unwrap();
        assert_eq!(config.images_path, "/img/");
        assert_eq!(config.clamp.max_height_px, DESC_MAX_PX);
        assert_eq!(config.filters.backlog.name, "backlog");
    }

    #[test]
    fn test_asset_url_joins_base_path() {
        let config = SiteConfig::default();
        assert_eq!(config.asset_url("issues_0.jpg"), "./assets/images/issues_0.jpg");

        let config = SiteConfig::from_json(r#"{"imagesPath": "/img/"}"#).unwrap();
        assert_eq!(config.asset_url("a.png"), "/img/a.png");
    }

    #[test]
    fn test_group_without_wildcard_rejected() {
        let json = r#"{
            "filters": {
                "recent": {"name": "recent", "containerId": "recentGrid",
                           "buttons": [{"keyword": "python", "label": "Python"}]}
            }
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("recent")));
    }

    #[test]
    fn test_duplicate_keyword_rejected() {
        let json = r#"{
            "filters": {
                "backlog": {"name": "backlog", "containerId": "backlogGrid",
                            "buttons": [{"keyword": "all", "label": "All"},
                                        {"keyword": "react", "label": "React"},
                                        {"keyword": "React", "label": "React"}]}
            }
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("duplicate keyword")));
    }

    #[test]
    fn test_zero_clamp_height_rejected() {
        let err = SiteConfig::from_json(r#"{"clamp": {"maxHeightPx": 0}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
