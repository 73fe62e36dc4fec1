//! Theme for the dashboard window.

mod styles;

pub use styles::GLOBAL_STYLES;
