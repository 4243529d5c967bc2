pub mod bids;
pub mod connection;
pub mod load_runs;

pub use bids::{list_bids, upsert_bids};
pub use connection::{init_db, Database};
