//! TUI components using tui-realm.

pub mod catalog;
pub mod field_list;
pub mod help;
pub mod preview;
pub mod track;

pub use catalog::Catalog;
pub use field_list::FieldList;
pub use help::{
    CAMERA_FOOTER_ACTIONS, GALLERY_FOOTER_ACTIONS, HelpScreen, closes_help, format_footer,
    render_help,
};
pub use preview::PreviewPane;
