pub mod walk;

pub use walk::{scan_images, scan_sources, ImageFile};
