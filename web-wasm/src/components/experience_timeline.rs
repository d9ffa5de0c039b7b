//! 職歴タイムラインコンポーネント

use leptos::prelude::*;
use portfolio_common::{experience, ExperienceRecord, TimelineEntry, ROADMAP};

#[component]
pub fn ExperienceTimeline(records: &'static [ExperienceRecord]) -> impl IntoView {
    let items = experience::render(records)
        .into_iter()
        .map(|entry| view! { <TimelineItem entry=entry /> })
        .collect_view();

    view! {
        <div class="row g-4">
            <div class="col-lg-8">
                <div id="experienceTimeline">{items}</div>
            </div>
            <div class="col-lg-4">
                <Roadmap />
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> impl IntoView {
    // 箇条書きは <strong> を含むので HTML として流し込む
    let bullets = entry.bullets.map(|bullets| {
        let items = bullets
            .into_iter()
            .map(|html| view! { <li inner_html=html></li> })
            .collect_view();
        view! { <ul class="mt-2 mb-2 muted">{items}</ul> }
    });
    let tags = entry.tags.map(|tags| {
        let chips = tags
            .into_iter()
            .map(|tag| view! { <span class="tag">{tag}</span> })
            .collect_view();
        view! { <div class="d-flex flex-wrap gap-2">{chips}</div> }
    });

    view! {
        <div class="timeline-item">
            <div class="card p-3">
                <div class="d-flex justify-content-between flex-wrap gap-2">
                    <div>
                        <div class="employer">{entry.employer}</div>
                        <div class="role">{entry.role}</div>
                    </div>
                    <div class="when">{entry.date_range}</div>
                </div>
                {bullets}
                {tags}
            </div>
        </div>
    }
}

#[component]
fn Roadmap() -> impl IntoView {
    let chips = ROADMAP
        .chips
        .iter()
        .map(|chip| view! { <span class="chip">{*chip}</span> })
        .collect_view();
    let stack = ROADMAP
        .stack
        .iter()
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect_view();
    let practices = ROADMAP
        .practices
        .iter()
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect_view();

    view! {
        <div class="card p-3">
            <h5>"Roadmap"</h5>
            <div id="roadmapChips" class="mb-3">{chips}</div>
            <h6>"Stack"</h6>
            <div id="roadmapTags_tags1" class="mb-3">{stack}</div>
            <h6>"Practices"</h6>
            <div id="roadmapTags_tags2">{practices}</div>
        </div>
    }
}
