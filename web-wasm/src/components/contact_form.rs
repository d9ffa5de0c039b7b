//! お問い合わせフォームコンポーネント

use gloo::console::{debug, error};
use leptos::prelude::*;
use portfolio_common::{ContactStatus, ContactSubmission, MailRelay, MailRelayConfig};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ContactForm<R>(mail: &'static MailRelayConfig, relay: R) -> impl IntoView
where
    R: MailRelay + Clone + 'static,
{
    let submission = RwSignal::new(ContactSubmission::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let form_id = mail.form_selector.trim_start_matches('#').to_string();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match submission.try_update(|s| s.begin(mail)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                debug!(e.to_string());
                return;
            }
            None => return,
        };

        let relay = relay.clone();
        spawn_local(async move {
            let outcome = relay.send_form(&request).await;
            if let Err(e) = &outcome {
                error!(format!("メール送信失敗: {}", e));
            }
            let status = submission.try_update(|s| s.finish(&outcome));
            if status == Some(ContactStatus::Sent) {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
        });
    };

    view! {
        <form id=form_id node_ref=form_ref class="row g-3" on:submit=on_submit>
            <div class="col-md-6">
                <label for="contact-name" class="form-label">"Name"</label>
                <input id="contact-name" name="name" type="text" class="form-control" required />
            </div>
            <div class="col-md-6">
                <label for="contact-email" class="form-label">"Email"</label>
                <input id="contact-email" name="email" type="email" class="form-control" required />
            </div>
            <div class="col-12">
                <label for="contact-message" class="form-label">"Message"</label>
                <textarea id="contact-message" name="message" rows="5" class="form-control" required></textarea>
            </div>
            <div class="col-12 d-flex align-items-center gap-3">
                <button
                    id="send-btn"
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !submission.with(|s| s.status().submit_enabled())
                >
                    <i class="fa-solid fa-paper-plane me-2"></i>
                    "Send"
                </button>
                <span id="form-status" class="small muted">
                    {move || submission.with(|s| s.status().message())}
                </span>
            </div>
        </form>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use portfolio_common::{Error, RelayRequest, Result};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// 一定時間後に結果を返すリレー
    #[derive(Clone)]
    struct SlowRelay {
        fail: bool,
        sends: Rc<Cell<u32>>,
    }

    impl MailRelay for SlowRelay {
        async fn send_form(&self, _request: &RelayRequest) -> Result<()> {
            self.sends.set(self.sends.get() + 1);
            TimeoutFuture::new(150).await;
            if self.fail {
                Err(Error::Relay("503".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn mail() -> &'static MailRelayConfig {
        Box::leak(Box::new(MailRelayConfig {
            public_key: "key".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            form_selector: "#contact-form".to_string(),
        }))
    }

    fn mount(relay: SlowRelay) -> web_sys::HtmlElement {
        let document = document();
        let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();
        let mail = mail();
        let handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <ContactForm mail=mail relay=relay /> }
        });
        // テスト終了までマウントしたままにする
        std::mem::forget(handle);

        let set = |selector: &str, value: &str| {
            root.query_selector(selector).unwrap().unwrap().set_attribute("value", value).unwrap();
        };
        set("#contact-name", "Reviewer");
        set("#contact-email", "reviewer@example.com");
        root.query_selector("#contact-message")
            .unwrap()
            .unwrap()
            .set_text_content(Some("Hello"));
        root
    }

    fn click_send(root: &web_sys::HtmlElement) {
        let button: web_sys::HtmlElement = root.query_selector("#send-btn").unwrap().unwrap().unchecked_into();
        button.click();
    }

    fn send_disabled(root: &web_sys::HtmlElement) -> bool {
        root.query_selector("#send-btn").unwrap().unwrap().has_attribute("disabled")
    }

    fn status_text(root: &web_sys::HtmlElement) -> String {
        root.query_selector("#form-status")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn wasm_submit_disables_until_relay_settles() {
        let sends = Rc::new(Cell::new(0));
        let root = mount(SlowRelay { fail: false, sends: sends.clone() });

        click_send(&root);
        TimeoutFuture::new(30).await;
        assert!(send_disabled(&root));
        assert_eq!(status_text(&root), "Sending…");

        // 送信中の再送信は無効化されたボタンで止まる
        click_send(&root);
        TimeoutFuture::new(300).await;
        assert_eq!(sends.get(), 1);
        assert!(!send_disabled(&root));
        assert_eq!(status_text(&root), "Thanks! Your message was sent.");
    }

    #[wasm_bindgen_test]
    async fn wasm_failed_submit_reenables_button() {
        let sends = Rc::new(Cell::new(0));
        let root = mount(SlowRelay { fail: true, sends: sends.clone() });

        click_send(&root);
        TimeoutFuture::new(300).await;
        assert!(!send_disabled(&root));
        assert_eq!(status_text(&root), "Something went wrong. Please try again.");

        click_send(&root);
        TimeoutFuture::new(300).await;
        assert_eq!(sends.get(), 2);
    }
}
