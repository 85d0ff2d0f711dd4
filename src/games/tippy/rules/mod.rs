//! Game rules for Tippy: win and draw detection.

pub mod draw;
pub mod near;
pub mod tippy;

pub use draw::is_full;
pub use near::has_near_tippy;
pub use tippy::{TEMPLATES, Template, has_tippy, template_cells};
