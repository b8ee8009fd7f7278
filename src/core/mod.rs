pub mod loader;
pub mod paginator;
pub mod report;
pub mod session;
pub mod stats;

pub use loader::LoadLogic;
pub use session::Session;
pub use stats::{StatsLogic, TripStats};
