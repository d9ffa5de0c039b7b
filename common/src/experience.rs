//! 職歴タイムラインとロードマップ
//!
//! ロードマップは職歴データから導出せず、固定の内容をそのまま表示する。

use crate::types::ExperienceRecord;

/// タイムライン1件分の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub employer: String,
    pub role: String,
    pub date_range: String,
    /// 空なら箇条書き自体を出さない
    pub bullets: Option<Vec<String>>,
    /// 空ならタグ行自体を出さない
    pub tags: Option<Vec<String>>,
}

impl From<&ExperienceRecord> for TimelineEntry {
    fn from(record: &ExperienceRecord) -> Self {
        Self {
            employer: record.employer.clone(),
            role: record.role.clone(),
            date_range: record.date_range.clone(),
            bullets: non_empty(&record.bullets),
            tags: non_empty(&record.tags),
        }
    }
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

pub fn render(records: &[ExperienceRecord]) -> Vec<TimelineEntry> {
    records.iter().map(TimelineEntry::from).collect()
}

/// 右カラムのロードマップ（手書きの固定内容）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roadmap {
    pub chips: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub practices: &'static [&'static str],
}

pub const ROADMAP: Roadmap = Roadmap {
    chips: &[
        "2020–2021 • Megaventory",
        "Mar 2022 • Military (fulfilled)",
        "2023–Now • Dataverse",
    ],
    stack: &[
        ".NET (4.x, 8.x)",
        "ASP.NET",
        "C#",
        "NoSQL",
        "SQL",
        "Javascript",
        "TypeScript",
        "Angular (v9, v19)",
    ],
    practices: &["MVC", "SOLID", "DDD", "Clean Code"],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bullets: &[&str], tags: &[&str]) -> ExperienceRecord {
        ExperienceRecord {
            employer: "Megaventory Inc. | Athens, Greece".to_string(),
            role: "Software Engineer".to_string(),
            date_range: "Dec 2020 – Oct 2021".to_string(),
            bullets: bullets.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_keeps_order_and_header() {
        let records = vec![record(&["a"], &["C#"]), record(&[], &[])];
        let entries = render(&records);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].employer, "Megaventory Inc. | Athens, Greece");
        assert_eq!(entries[0].date_range, "Dec 2020 – Oct 2021");
        assert_eq!(entries[0].bullets.as_deref(), Some(&["a".to_string()][..]));
    }

    #[test]
    fn test_empty_bullets_and_tags_are_omitted() {
        let entry = TimelineEntry::from(&record(&[], &[]));
        assert!(entry.bullets.is_none());
        assert!(entry.tags.is_none());
    }

    #[test]
    fn test_bullets_keep_inline_markup() {
        let entry = TimelineEntry::from(&record(&["Delivered <strong>hotfixes</strong>."], &[]));
        assert_eq!(entry.bullets.unwrap()[0], "Delivered <strong>hotfixes</strong>.");
    }

    #[test]
    fn test_roadmap_is_static() {
        assert_eq!(ROADMAP.chips.len(), 3);
        assert_eq!(ROADMAP.chips[1], "Mar 2022 • Military (fulfilled)");
        assert_eq!(ROADMAP.stack.last(), Some(&"Angular (v9, v19)"));
        assert_eq!(ROADMAP.practices, &["MVC", "SOLID", "DDD", "Clean Code"]);
    }
}
