pub mod client;
pub mod error;
pub mod extract;
pub mod page;
pub mod types;

pub use client::{EswdClient, ReportSource};
pub use error::ScraperError;
pub use extract::extract;
pub use page::{locate_fragments, PageOutcome};
pub use types::ReportFragment;
