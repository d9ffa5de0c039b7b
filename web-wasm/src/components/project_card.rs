//! プロジェクトカードコンポーネント

use leptos::prelude::*;
use portfolio_common::{ActionLink, CardView, ClampChange, ClampState, FilterState, ProjectRecord, SectionKind, SiteConfig};
use crate::layout::LayoutEpoch;

#[component]
pub fn ProjectCard<FO>(
    project: &'static ProjectRecord,
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
    let card = CardView::render(project, section, config);
    let is_visible = move || filter.with(|f| f.is_visible(project));

    let clamp = RwSignal::new(ClampState::new());
    let desc_ref = NodeRef::<leptos::html::P>::new();
    let max_height = config.clamp.max_height_px;

    // 表示状態やビューポートが変わるたびに高さを測り直す
    Effect::new(move |_| {
        relayout.track();
        resize.track();
        let Some(desc) = desc_ref.get() else {
            return;
        };
        let height = u32::try_from(desc.scroll_height()).unwrap_or(0);
        let mut next = clamp.get_untracked();
        if next.apply(height, max_height) != ClampChange::Unchanged {
            clamp.set(next);
        }
    });

    let desc_style = format!("white-space:pre-line;--desc-max:{}px", max_height);
    let tags = card
        .tags
        .into_iter()
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect_view();

    view! {
        <div class="col" class:d-none=move || !is_visible()>
            <div class="card h-100 card-float">
                <img
                    class="card-img-top gallery-thumb"
                    src=card.thumbnail_src
                    alt=card.thumbnail_alt
                    loading="lazy"
                    on:click=move |_| on_open(project)
                />
                <div class="card-body d-flex flex-column">
                    <div class="d-flex justify-content-between align-items-start mb-2">
                        <h5 class="card-title mb-0">{card.title}</h5>
                        <div class="project-badges">
                            <span class=format!("badge {}", card.badge_class)>{card.badge_label}</span>
                        </div>
                    </div>
                    <p
                        node_ref=desc_ref
                        class="card-text muted card-desc"
                        class:clamped=move || clamp.with(ClampState::is_clamped)
                        class:expanded=move || clamp.with(ClampState::is_expanded)
                        style=desc_style
                    >
                        {card.description}
                    </p>
                    <Show when=move || clamp.with(ClampState::has_toggle)>
                        <button
                            type="button"
                            class="more-link mb-3"
                            on:click=move |_| {
                                clamp.update(|c| {
                                    c.toggle();
                                });
                            }
                        >
                            {move || clamp.with(ClampState::toggle_label)}
                        </button>
                    </Show>
                    <div class="mt-auto">
                        <div class="mb-3">{tags}</div>
                        <div class="d-flex gap-2">
                            <ActionButton action=card.code />
                            <ActionButton action=card.demo dimmed=true />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// dimmed: 無効時に半透明にする（Demo のみ）
#[component]
fn ActionButton(action: ActionLink, #[prop(optional)] dimmed: bool) -> impl IntoView {
    let icon = format!("fa-solid {} me-2", action.icon);
    let disabled_style = if dimmed { "opacity:.6" } else { "" };
    match action.href {
        Some(href) => view! {
            <a class="btn btn-sm btn-outline-light" href=href target="_blank" rel="noopener">
                <i class=icon></i>
                {action.label}
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn-sm btn-outline-light" disabled=true style=disabled_style>
                <i class=icon></i>
                {action.label}
            </button>
        }
        .into_any(),
    }
}
