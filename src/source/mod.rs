mod firestore;
mod loader;
mod models;
mod source_error;
mod sqlite;

pub use firestore::FirestoreSource;
pub use loader::spawn_initial_load;
pub use source_error::SourceError;
pub use sqlite::SqliteBidSource;

use crate::domain::BidRecord;

/// Where the initial bid collection comes from.
pub trait BidSource {
    fn name(&self) -> &str;

    fn fetch_initial_records(&self) -> Result<Vec<BidRecord>, SourceError>;
}
