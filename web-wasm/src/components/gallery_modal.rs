//! 画像ギャラリー（モーダル）コンポーネント

use leptos::prelude::*;
use portfolio_common::{Gallery, SiteConfig};
use crate::widgets::{self, GALLERY_MODAL_ID};

#[component]
pub fn GalleryModal(gallery: RwSignal<Gallery<'static>>, config: &'static SiteConfig) -> impl IntoView {
    let frame = Memo::new(move |_| gallery.with(|g| g.frame(config)));
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // モーダルが閉じられたら選択を解除する
    Effect::new(move |_| {
        if let Some(modal) = modal_ref.get() {
            widgets::listen(&modal, "hidden.bs.modal", move || gallery.update(|g| g.close()));
        }
    });

    let title = move || frame.with(|f| f.as_ref().map(|f| f.title.clone()).unwrap_or_default());
    let image_src = move || frame.with(|f| f.as_ref().map(|f| f.image_src.clone()));
    let counter = move || frame.with(|f| f.as_ref().map(|f| f.counter()).unwrap_or_default());
    let previous_disabled = move || !frame.with(|f| f.as_ref().is_some_and(|f| f.has_previous));
    let next_disabled = move || !frame.with(|f| f.as_ref().is_some_and(|f| f.has_next));

    view! {
        <div class="modal fade" id=GALLERY_MODAL_ID tabindex="-1" aria-hidden="true" node_ref=modal_ref>
            <div class="modal-dialog modal-xl modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title" id="galleryTitle">{title}</h5>
                        <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                    </div>
                    <div class="modal-body text-center">
                        <img id="galleryImg" class="img-fluid" src=image_src alt="" />
                    </div>
                    <div class="modal-footer justify-content-between">
                        <button
                            id="prevImg"
                            type="button"
                            class="btn btn-outline-light"
                            disabled=previous_disabled
                            on:click=move |_| {
                                gallery.update(|g| {
                                    g.previous();
                                });
                            }
                        >
                            <i class="fa-solid fa-chevron-left"></i>
                        </button>
                        <span id="galleryCounter">{counter}</span>
                        <button
                            id="nextImg"
                            type="button"
                            class="btn btn-outline-light"
                            disabled=next_disabled
                            on:click=move |_| {
                                gallery.update(|g| {
                                    g.next();
                                });
                            }
                        >
                            <i class="fa-solid fa-chevron-right"></i>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
