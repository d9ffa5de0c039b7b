//! お問い合わせフォームの送信状態
//!
//! 送信中は送信ボタンを無効化し、二重送信を防ぐ。再試行はしない。

use crate::config::MailRelayConfig;
use crate::error::{Error, Result};
use std::future::Future;

/// メールリレーへの送信要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    /// リレー側が値を読み取るフォームのセレクタ
    pub form_selector: String,
}

impl From<&MailRelayConfig> for RelayRequest {
    fn from(config: &MailRelayConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            form_selector: config.form_selector.clone(),
        }
    }
}

/// 外部メールリレー
pub trait MailRelay {
    fn send_form(&self, request: &RelayRequest) -> impl Future<Output = Result<()>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ContactStatus::Idle => "",
            ContactStatus::Sending => "Sending…",
            ContactStatus::Sent => "Thanks! Your message was sent.",
            ContactStatus::Failed => "Something went wrong. Please try again.",
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self, ContactStatus::Sending)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    status: ContactStatus,
}

impl ContactSubmission {
    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// 送信開始。送信中なら拒否する。
    pub fn begin(&mut self, config: &MailRelayConfig) -> Result<RelayRequest> {
        if !self.status.submit_enabled() {
            return Err(Error::SubmissionInFlight);
        }
        self.status = ContactStatus::Sending;
        Ok(RelayRequest::from(config))
    }

    /// 送信結果を反映する。Sent ならフォームの入力を消してよい。
    pub fn finish(&mut self, outcome: &Result<()>) -> ContactStatus {
        self.status = match outcome {
            Ok(()) => ContactStatus::Sent,
            Err(_) => ContactStatus::Failed,
        };
        self.status
    }
}
