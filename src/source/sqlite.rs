use crate::db::{list_bids, Database};
use crate::domain::BidRecord;
use crate::source::{BidSource, SourceError};

/// The local SQLite copy of the collection, used when no remote project is set.
pub struct SqliteBidSource {
    db: Database,
}

impl SqliteBidSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl BidSource for SqliteBidSource {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn fetch_initial_records(&self) -> Result<Vec<BidRecord>, SourceError> {
        list_bids(&self.db).map_err(|e| SourceError::Db(e.to_string()))
    }
}
