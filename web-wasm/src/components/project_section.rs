//! フィルタボタン付きのプロジェクト一覧

use gloo::console::{debug, warn};
use leptos::prelude::*;
use portfolio_common::{Error, FilterState, ProjectRecord, SectionKind, SiteConfig};
use crate::components::project_card::ProjectCard;
use crate::layout::LayoutEpoch;

/// フィルタを適用し、表示が変わったカードの再クランプを予約する
pub fn apply_filter(filter: RwSignal<FilterState>, relayout: LayoutEpoch, keyword: &str) {
    match filter.try_update(|f| f.apply(keyword)) {
        Some(Ok(changed)) => {
            if changed {
                debug!(format!("filter -> {}", keyword));
            }
            relayout.invalidate();
        }
        Some(Err(Error::UnknownFilter(k))) => warn!(format!("未定義のフィルタ: {}", k)),
        Some(Err(e)) => warn!(e.to_string()),
        None => {}
    }
}

#[component]
pub fn FilterButtons(filter: RwSignal<FilterState>, relayout: LayoutEpoch) -> impl IntoView {
    let group = filter.with_untracked(|f| f.group().clone());
    let group_class = format!("{}-filter-btns d-flex flex-wrap gap-2 mb-3", group.name);

    let buttons = group
        .buttons
        .into_iter()
        .map(|button| {
            let keyword = button.keyword.clone();
            let data_filter = keyword.clone();
            let is_active = {
                let keyword = keyword.clone();
                move || filter.with(|f| f.active() == keyword)
            };
            view! {
                <button
                    type="button"
                    class="btn btn-sm btn-outline-light"
                    class:active=is_active
                    data-filter=data_filter
                    on:click=move |_| apply_filter(filter, relayout, &keyword)
                >
                    {button.label}
                </button>
            }
        })
        .collect_view();

    view! { <div class=group_class>{buttons}</div> }
}

#[component]
pub fn ProjectSection<FO>(
    projects: &'static [ProjectRecord],
    section: SectionKind,
    config: &'static SiteConfig,
    filter: RwSignal<FilterState>,
    relayout: LayoutEpoch,
    resize: LayoutEpoch,
    on_open: FO,
) -> impl IntoView
where
    FO: Fn(&'static ProjectRecord) + 'static + Clone,
{
    let container_id = filter.with_untracked(|f| f.group().container_id.clone());
    let cards = projects
        .iter()
        .map(|project| {
            let on_open = on_open.clone();
            view! {
                <ProjectCard
                    project=project
                    section=section
                    config=config
                    filter=filter
                    relayout=relayout
                    resize=resize
                    on_open=on_open
                />
            }
        })
        .collect_view();

    view! {
        <FilterButtons filter=filter relayout=relayout />
        <div id=container_id class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
            {cards}
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use portfolio_common::{FilterButton, FilterGroupConfig, ALL};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn leak<T>(value: T) -> &'static T {
        Box::leak(Box::new(value))
    }

    /// 140px を超える説明文を持つプロジェクト
    fn long_project(slug: &str, tag: &str) -> ProjectRecord {
        ProjectRecord {
            title: slug.to_string(),
            name: slug.to_string(),
            description: "line\n".repeat(40),
            tags: vec![tag.to_string()],
            ..Default::default()
        }
    }

    fn filter_state() -> FilterState {
        FilterState::new(FilterGroupConfig {
            name: "backlog".to_string(),
            container_id: "backlogGrid".to_string(),
            buttons: vec![
                FilterButton::new(ALL, "All"),
                FilterButton::new("react", "React"),
                FilterButton::new("php", "PHP"),
            ],
        })
        .unwrap()
    }

    fn test_root() -> web_sys::HtmlElement {
        let document = document();
        let body = document.body().unwrap();
        // Bootstrap の d-none 相当
        let style = document.create_element("style").unwrap();
        style.set_text_content(Some(".d-none { display: none !important; }"));
        body.append_child(&style).unwrap();
        let root = document.create_element("div").unwrap();
        body.append_child(&root).unwrap();
        root.unchecked_into()
    }

    fn count(root: &web_sys::HtmlElement, selector: &str) -> u32 {
        root.query_selector_all(selector).map(|l| l.length()).unwrap_or(0)
    }

    fn hidden_cards(root: &web_sys::HtmlElement) -> Vec<bool> {
        let cols = root.query_selector_all(".col").unwrap();
        (0..cols.length())
            .filter_map(|i| cols.item(i))
            .map(|node| {
                let el: web_sys::Element = node.unchecked_into();
                el.get_attribute("class").unwrap_or_default().contains("d-none")
            })
            .collect()
    }

    /// エフェクトと次フレームの再計測を待つ
    async fn settle() {
        TimeoutFuture::new(120).await;
    }

    #[wasm_bindgen_test]
    async fn wasm_long_description_has_single_toggle_after_remeasure() {
        let projects = leak(vec![long_project("junior-workers", "React")]).as_slice();
        let config = leak(SiteConfig::default());
        let filter = RwSignal::new(filter_state());
        let relayout = LayoutEpoch::new();
        let resize = LayoutEpoch::new();

        let root = test_root();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! {
                <ProjectSection
                    projects=projects
                    section=SectionKind::Legacy
                    config=config
                    filter=filter
                    relayout=relayout
                    resize=resize
                    on_open=|_: &'static ProjectRecord| {}
                />
            }
        });

        settle().await;
        assert_eq!(count(&root, ".more-link"), 1);
        assert_eq!(count(&root, ".card-desc.clamped"), 1);
        // リンクなし: Code と Demo は両方 disabled、半透明は Demo のみ
        assert_eq!(count(&root, "button[disabled]"), 2);
        assert_eq!(count(&root, "button[disabled][style*='opacity']"), 1);

        relayout.bump();
        resize.bump();
        settle().await;
        assert_eq!(count(&root, ".more-link"), 1);
        assert_eq!(count(&root, ".card-desc.clamped"), 1);
    }

    #[wasm_bindgen_test]
    async fn wasm_filter_round_trip_hides_and_reclamps() {
        let projects = leak(vec![
            long_project("biriba-notes", "React"),
            long_project("issues", "PHP"),
        ])
        .as_slice();
        let config = leak(SiteConfig::default());
        let filter = RwSignal::new(filter_state());
        let relayout = LayoutEpoch::new();
        let resize = LayoutEpoch::new();

        let root = test_root();
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! {
                <ProjectSection
                    projects=projects
                    section=SectionKind::Legacy
                    config=config
                    filter=filter
                    relayout=relayout
                    resize=resize
                    on_open=|_: &'static ProjectRecord| {}
                />
            }
        });

        settle().await;
        assert_eq!(hidden_cards(&root), vec![false, false]);
        assert_eq!(count(&root, ".more-link"), 2);

        apply_filter(filter, relayout, "react");
        settle().await;
        assert_eq!(hidden_cards(&root), vec![false, true]);
        // 非表示のカードは高さ 0 と測られ、トグルが外れる
        assert_eq!(count(&root, ".more-link"), 1);
        assert_eq!(count(&root, "button.active"), 1);

        apply_filter(filter, relayout, ALL);
        settle().await;
        assert_eq!(hidden_cards(&root), vec![false, false]);
        assert_eq!(count(&root, ".more-link"), 2);
        assert_eq!(count(&root, "button.active"), 1);
    }
}
