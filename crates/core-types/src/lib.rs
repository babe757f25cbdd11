pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BillingInterval, DurationUnit};
pub use error::CoreError;
pub use structs::{CohortDataPoint, CustomerChurnInput, NrrInput, RevenueChurnInput, Subscription};
