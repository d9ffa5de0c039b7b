//! 画像ギャラリー（モーダル）の状態
//!
//! closed / open の2状態。open 中は 0 <= index < 画像枚数 を保つ。
//! 端での前後移動はエラーにせず何もしない（ボタン側が disabled になる）。

use crate::config::SiteConfig;
use crate::types::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySelection<'a> {
    project: &'a ProjectRecord,
    index: usize,
}

impl<'a> GallerySelection<'a> {
    pub fn project(&self) -> &'a ProjectRecord {
        self.project
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn last(&self) -> usize {
        self.project.image_count() - 1
    }

    fn clamp_index(&mut self) {
        self.index = self.index.min(self.last());
    }
}

/// 現在表示中の画像とナビゲーション状態
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFrame {
    pub title: String,
    pub image_src: String,
    pub position: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl GalleryFrame {
    /// "位置 / 枚数"（1始まり）
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gallery<'a> {
    selection: Option<GallerySelection<'a>>,
}

impl<'a> Gallery<'a> {
    pub const fn closed() -> Self {
        Self { selection: None }
    }

    /// プロジェクトを開く（別のプロジェクトが開いていても先頭画像から）
    pub fn open(&mut self, project: &'a ProjectRecord) {
        self.selection = Some(GallerySelection { project, index: 0 });
    }

    pub fn close(&mut self) {
        self.selection = None;
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn selection(&self) -> Option<&GallerySelection<'a>> {
        self.selection.as_ref()
    }

    /// 次の画像へ。移動したら true。
    pub fn next(&mut self) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            return false;
        };
        sel.clamp_index();
        if sel.index >= sel.last() {
            return false;
        }
        sel.index += 1;
        true
    }

    /// 前の画像へ。移動したら true。
    pub fn previous(&mut self) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            return false;
        };
        sel.clamp_index();
        if sel.index == 0 {
            return false;
        }
        sel.index -= 1;
        true
    }

    /// 表示用フレーム。closed なら None。
    pub fn frame(&self, config: &SiteConfig) -> Option<GalleryFrame> {
        let sel = self.selection.as_ref()?;
        let total = sel.project.image_count();
        let index = sel.index.min(total - 1);
        let file_name = sel.project.image(index)?;

        Some(GalleryFrame {
            title: sel.project.title.clone(),
            image_src: config.asset_url(file_name),
            position: index + 1,
            total,
            has_previous: index > 0,
            has_next: index + 1 < total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(count: usize) -> ProjectRecord {
        ProjectRecord {
            title: "Gym Equipment".to_string(),
            name: "gymequipment".to_string(),
            images: (0..count).map(|i| format!("gymequipment_{}.jpg", i)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_closed_gallery_ignores_navigation() {
        let mut gallery = Gallery::closed();
        assert!(!gallery.next());
        assert!(!gallery.previous());
        assert!(gallery.frame(&SiteConfig::default()).is_none());
    }

    #[test]
    fn test_open_starts_at_first_image() {
        let p = project(3);
        let mut gallery = Gallery::closed();
        gallery.open(&p);
        let frame = gallery.frame(&SiteConfig::default()).unwrap();
        assert_eq!(frame.counter(), "1 / 3");
        assert_eq!(frame.image_src, "./assets/images/gymequipment_0.jpg");
        assert_eq!(frame.title, "Gym Equipment");
        assert!(!frame.has_previous);
        assert!(frame.has_next);
    }

    #[test]
    fn test_next_stops_at_last_image() {
        let p = project(2);
        let mut gallery = Gallery::closed();
        gallery.open(&p);
        assert!(gallery.next());
        assert!(!gallery.next());
        let frame = gallery.frame(&SiteConfig::default()).unwrap();
        assert_eq!(frame.counter(), "2 / 2");
        assert!(!frame.has_next);
        assert!(frame.has_previous);
    }

    #[test]
    fn test_previous_stops_at_first_image() {
        let p = project(2);
        let mut gallery = Gallery::closed();
        gallery.open(&p);
        assert!(!gallery.previous());
        assert_eq!(gallery.selection().unwrap().index(), 0);
    }

    #[test]
    fn test_reopen_resets_index() {
        let a = project(4);
        let b = project(2);
        let mut gallery = Gallery::closed();
        gallery.open(&a);
        gallery.next();
        gallery.next();
        gallery.next();
        gallery.open(&b);
        assert_eq!(gallery.selection().unwrap().index(), 0);
        assert!(std::ptr::eq(gallery.selection().unwrap().project(), &b));
    }

    #[test]
    fn test_placeholder_gallery_has_single_frame() {
        let p = project(0);
        let mut gallery = Gallery::closed();
        gallery.open(&p);
        assert!(!gallery.next());
        let frame = gallery.frame(&SiteConfig::default()).unwrap();
        assert_eq!(frame.counter(), "1 / 1");
        assert_eq!(frame.image_src, "./assets/images/placeholder_0.png");
        assert!(!frame.has_previous);
        assert!(!frame.has_next);
    }

    #[test]
    fn test_close_clears_selection() {
        let p = project(2);
        let mut gallery = Gallery::closed();
        gallery.open(&p);
        gallery.close();
        assert!(!gallery.is_open());
        assert!(!gallery.next());
    }
}
