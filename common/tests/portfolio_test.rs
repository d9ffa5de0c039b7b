//! 埋め込みカタログを使った結合テスト
//!
//! ギャラリー・フィルタ・クランプ・送信の各シナリオ

use portfolio_common::{
    CardView, Catalog, ClampState, ContactStatus, ContactSubmission, FilterState, Gallery,
    ProjectRecord, SectionKind, SiteConfig, ALL,
};

fn catalog() -> &'static Catalog {
    Catalog::embedded().expect("カタログ読み込み失敗")
}

fn config() -> &'static SiteConfig {
    SiteConfig::embedded().expect("設定読み込み失敗")
}

fn find<'a>(projects: &'a [ProjectRecord], slug: &str) -> &'a ProjectRecord {
    projects
        .iter()
        .find(|p| p.name == slug)
        .unwrap_or_else(|| panic!("{} が見つからない", slug))
}

#[test]
fn test_five_image_gallery_walkthrough() {
    let config = config();
    let atlas = find(&catalog().current, "atlas_bake");
    let mut gallery = Gallery::closed();
    gallery.open(atlas);

    let frame = gallery.frame(config).unwrap();
    assert_eq!(frame.counter(), "1 / 5");
    assert!(!frame.has_previous);

    for _ in 0..4 {
        assert!(gallery.next());
    }
    let frame = gallery.frame(config).unwrap();
    assert_eq!(frame.counter(), "5 / 5");
    assert!(!frame.has_next);
    assert_eq!(frame.image_src, "./assets/images/atlas_bake_4.png");

    assert!(!gallery.next());
    assert_eq!(gallery.frame(config).unwrap().counter(), "5 / 5");
}

#[test]
fn test_next_then_previous_returns_to_index() {
    let project = find(&catalog().backlog, "9laugh");
    let count = project.image_count();
    for start in 0..count {
        let mut gallery = Gallery::closed();
        gallery.open(project);
        for _ in 0..start {
            gallery.next();
        }

        let mut forward = gallery;
        if forward.next() {
            forward.previous();
            assert_eq!(forward.selection().unwrap().index(), start);
        } else {
            assert_eq!(start, count - 1);
        }

        let mut backward = gallery;
        if backward.previous() {
            backward.next();
            assert_eq!(backward.selection().unwrap().index(), start);
        } else {
            assert_eq!(start, 0);
        }
    }
}

#[test]
fn test_placeholder_project_reads_one_of_one() {
    let config = config();
    let record = ProjectRecord {
        title: "Untitled".to_string(),
        name: "untitled".to_string(),
        ..Default::default()
    };
    let card = CardView::render(&record, SectionKind::Legacy, config);
    assert_eq!(card.thumbnail_src, config.asset_url("placeholder_0.png"));

    let mut gallery = Gallery::closed();
    gallery.open(&record);
    assert_eq!(gallery.frame(config).unwrap().counter(), "1 / 1");
}

#[test]
fn test_react_filter_on_backlog() {
    let backlog = &catalog().backlog;
    let mut state = FilterState::new(config().filters.backlog.clone()).unwrap();

    state.apply("react").unwrap();
    let visible: Vec<&str> = backlog
        .iter()
        .filter(|p| state.is_visible(p))
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        visible,
        vec!["junior-workers", "9laugh", "lab-exchange", "biriba-notes", "pomodoro-clock"]
    );
    assert_eq!(state.buttons().filter(|(_, active)| *active).count(), 1);

    state.apply(ALL).unwrap();
    assert!(state.visibility(backlog).iter().all(|v| *v));
}

#[test]
fn test_every_keyword_matches_predicate() {
    let catalog = catalog();
    let groups = &config().filters;
    for (group, projects) in [(&groups.recent, &catalog.current), (&groups.backlog, &catalog.backlog)] {
        let mut state = FilterState::new(group.clone()).unwrap();
        for button in &group.buttons {
            state.apply(&button.keyword).unwrap();
            for project in projects.iter() {
                let text = format!(
                    "{} {} {}",
                    project.title,
                    project.description,
                    project.tags.join(" ")
                )
                .to_lowercase();
                let expected = button.keyword == ALL || text.contains(&button.keyword);
                assert_eq!(state.is_visible(project), expected, "{} / {}", button.keyword, project.name);
            }
            let active: Vec<_> = state.buttons().filter(|(_, a)| *a).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].0.keyword, button.keyword);
        }
    }
}

#[test]
fn test_clamp_reapply_produces_single_toggle() {
    let max = config().clamp.max_height_px;
    let mut state = ClampState::new();
    state.apply(420, max);
    let once = state;
    state.apply(420, max);
    assert_eq!(state, once);
    assert!(state.has_toggle());
}

#[test]
fn test_hidden_description_is_unclamped_until_shown() {
    let max = config().clamp.max_height_px;
    let mut state = ClampState::new();
    // 非表示のコンテナでは高さ 0 として測定される
    state.apply(0, max);
    assert!(!state.has_toggle());
    state.apply(260, max);
    assert!(state.is_clamped());
}

#[test]
fn test_submit_blocked_while_in_flight() {
    let mail = &config().mail;
    let mut submission = ContactSubmission::default();
    submission.begin(mail).unwrap();
    assert!(!submission.status().submit_enabled());
    assert!(submission.begin(mail).is_err());

    submission.finish(&Ok(()));
    assert_eq!(submission.status(), ContactStatus::Sent);
    assert!(submission.begin(mail).is_ok());
}
