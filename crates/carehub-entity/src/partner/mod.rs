//! Partner domain entities.

pub mod model;
pub mod window;

pub use model::Partner;
pub use window::RateLimitWindow;
