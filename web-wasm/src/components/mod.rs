pub mod header;
pub mod project_card;
pub mod project_section;
pub mod gallery_modal;
pub mod experience_timeline;
pub mod contact_form;
pub mod footer;
