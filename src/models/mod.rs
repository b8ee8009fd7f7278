pub mod filter;
pub mod trip;

pub use filter::{DAYS, FILTER_KINDS, MONTHS, TripFilter};
pub use trip::{Dataset, TripRecord};
