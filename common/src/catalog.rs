//! 組み込みデータストア
//!
//! `data/catalog.json` をビルド時に埋め込み、起動時に一度だけ読み込む。
//! 実行中は読み取り専用で、ギャラリーは `&'static ProjectRecord` を借用する。

use crate::error::{Error, Result};
use crate::types::{ExperienceRecord, ProjectRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// プロジェクト一覧（current / backlog）と職歴一覧
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub current: Vec<ProjectRecord>,
    #[serde(default)]
    pub backlog: Vec<ProjectRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
}

impl Catalog {
    /// 埋め込みカタログ（プロセス内で一度だけパース）
    pub fn embedded() -> Result<&'static Catalog> {
        if let Some(catalog) = CATALOG.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_json(EMBEDDED_CATALOG)?;
        Ok(CATALOG.get_or_init(|| catalog))
    }

    /// JSON文字列から読み込み、検証する
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        validate_projects("current", &self.current)?;
        validate_projects("backlog", &self.backlog)
    }
}

fn validate_projects(list: &str, projects: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if project.title.trim().is_empty() {
            return Err(Error::Data(format!(
                "{}: project '{}' has an empty title",
                list, project.name
            )));
        }
        if !seen.insert(project.name.as_str()) {
            return Err(Error::Data(format!(
                "{}: duplicate project slug '{}'",
                list, project.name
            )));
        }
    }
    Ok(())
}
