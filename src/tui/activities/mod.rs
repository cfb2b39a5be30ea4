//! Activity modules for the TUI.

pub mod camera;
pub mod gallery;

pub use camera::CameraActivity;
pub use gallery::GalleryActivity;
pub use gallery::Msg;
