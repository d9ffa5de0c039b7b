//! Portfolio Common Library
//!
//! 埋め込みデータと、Web(WASM)側のコントローラが使う状態モデル

pub mod types;
pub mod error;
pub mod config;
pub mod catalog;
pub mod card;
pub mod clamp;
pub mod filter;
pub mod gallery;
pub mod experience;
pub mod contact;

pub use types::{ExperienceRecord, ProjectRecord, SectionKind, PLACEHOLDER_IMAGE};
pub use error::{Error, Result};
pub use config::{FilterButton, FilterGroupConfig, MailRelayConfig, SiteConfig};
pub use catalog::Catalog;
pub use card::{ActionLink, CardView};
pub use clamp::{ClampChange, ClampState};
pub use filter::{FilterState, ALL};
pub use gallery::{Gallery, GalleryFrame, GallerySelection};
pub use experience::{Roadmap, TimelineEntry, ROADMAP};
pub use contact::{ContactStatus, ContactSubmission, MailRelay, RelayRequest};
