//! メインアプリケーションコンポーネント

use gloo::console::{error, log};
use leptos::prelude::*;
use portfolio_common::{Catalog, FilterState, Gallery, ProjectRecord, Result, SectionKind, SiteConfig};
use crate::components::{
    header::Header,
    project_section::ProjectSection,
    gallery_modal::GalleryModal,
    experience_timeline::ExperienceTimeline,
    contact_form::ContactForm,
    footer::Footer,
};
use crate::layout::{Debounce, LayoutEpoch};
use crate::mail_relay::{self, EmailJsRelay};
use crate::widgets::{self, BACKLOG_COLLAPSE_ID, GALLERY_MODAL_ID};

/// 起動時に読み込むサイトデータ
pub struct Site {
    pub catalog: &'static Catalog,
    pub config: &'static SiteConfig,
    pub recent_filter: FilterState,
    pub backlog_filter: FilterState,
}

impl Site {
    pub fn load() -> Result<Self> {
        let catalog = Catalog::embedded()?;
        let config = SiteConfig::embedded()?;
        Ok(Self {
            catalog,
            config,
            recent_filter: FilterState::new(config.filters.recent.clone())?,
            backlog_filter: FilterState::new(config.filters.backlog.clone())?,
        })
    }
}

#[component]
pub fn App() -> impl IntoView {
    match Site::load() {
        Ok(site) => {
            log!(format!(
                "portfolio: {} current / {} backlog projects",
                site.catalog.current.len(),
                site.catalog.backlog.len()
            ));
            if let Err(e) = mail_relay::init(&site.config.mail) {
                error!(e.to_string());
            }
            view! { <Portfolio site=site /> }.into_any()
        }
        Err(e) => {
            error!(format!("サイトデータの読み込みに失敗: {}", e));
            view! { <p class="text-danger">"Failed to load portfolio data."</p> }.into_any()
        }
    }
}

#[component]
fn Portfolio(site: Site) -> impl IntoView {
    let Site { catalog, config, recent_filter, backlog_filter } = site;

    let gallery = RwSignal::new(Gallery::closed());
    let recent_filter = RwSignal::new(recent_filter);
    let backlog_filter = RwSignal::new(backlog_filter);

    let recent_epoch = LayoutEpoch::new();
    let backlog_epoch = LayoutEpoch::new();
    let resize_epoch = LayoutEpoch::new();

    // リサイズが続く間は再クランプしない
    if let Some(window) = web_sys::window() {
        let debounce = Debounce::new(config.clamp.resize_debounce_ms);
        widgets::listen(&window, "resize", move || {
            debounce.schedule(move || resize_epoch.bump());
        });
    }

    // 折りたたみが開いてから backlog の説明文を測る
    let backlog_wrap = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if let Some(wrap) = backlog_wrap.get() {
            widgets::listen(&wrap, "shown.bs.collapse", move || backlog_epoch.invalidate());
        }
    });

    let mail = &config.mail;
    let open_gallery = move |project: &'static ProjectRecord| {
        gallery.update(|g| g.open(project));
        widgets::show_modal(GALLERY_MODAL_ID);
    };

    view! {
        <div class="container">
            <Header />

            <section id="projects" class="py-4">
                <h2 class="h4 mb-3">"Recent projects"</h2>
                <ProjectSection
                    projects=catalog.current.as_slice()
                    section=SectionKind::Recent
                    config=config
                    filter=recent_filter
                    relayout=recent_epoch
                    resize=resize_epoch
                    on_open=open_gallery
                />

                <button
                    class="btn btn-outline-light mt-4"
                    type="button"
                    data-bs-toggle="collapse"
                    data-bs-target=format!("#{}", BACKLOG_COLLAPSE_ID)
                    aria-expanded="false"
                    aria-controls=BACKLOG_COLLAPSE_ID
                >
                    "Backlog projects"
                </button>
                <div class="collapse mt-3" id=BACKLOG_COLLAPSE_ID node_ref=backlog_wrap>
                    <ProjectSection
                        projects=catalog.backlog.as_slice()
                        section=SectionKind::Legacy
                        config=config
                        filter=backlog_filter
                        relayout=backlog_epoch
                        resize=resize_epoch
                        on_open=open_gallery
                    />
                </div>
            </section>

            <section id="experience" class="py-4">
                <h2 class="h4 mb-3">"Experience"</h2>
                <ExperienceTimeline records=catalog.experience.as_slice() />
            </section>

            <section id="contact" class="py-4">
                <h2 class="h4 mb-3">"Contact"</h2>
                <ContactForm mail=mail relay=EmailJsRelay />
            </section>

            <Footer />
        </div>

        <GalleryModal gallery=gallery config=config />
    }
}
