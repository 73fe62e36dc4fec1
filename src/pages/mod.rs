//! Page components for the delegation dashboard.

mod dashboard;
mod owner;

pub use dashboard::Dashboard;
pub use owner::Owner;
