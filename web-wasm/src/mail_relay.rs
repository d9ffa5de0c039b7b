//! EmailJS によるメール送信

use portfolio_common::{Error, MailRelay, MailRelayConfig, RelayRequest, Result};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/mail-relay.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initMailRelay", catch)]
    fn init_mail_relay_js(public_key: &str) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(js_name = "sendForm", catch)]
    async fn send_form_js(
        service_id: &str,
        template_id: &str,
        form_selector: &str,
    ) -> std::result::Result<JsValue, JsValue>;
}

pub fn init(config: &MailRelayConfig) -> Result<()> {
    init_mail_relay_js(&config.public_key)
        .map_err(|e| Error::Relay(format!("初期化失敗: {:?}", e)))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailJsRelay;

impl MailRelay for EmailJsRelay {
    async fn send_form(&self, request: &RelayRequest) -> Result<()> {
        send_form_js(&request.service_id, &request.template_id, &request.form_selector)
            .await
            .map(|_| ())
            .map_err(|e| Error::Relay(format!("{:?}", e)))
    }
}
