pub mod bid;
pub mod defaults;
pub mod filter;
pub mod format;
pub mod sort;

pub use bid::{BidRecord, BidStatus};
pub use defaults::default_bids;
pub use filter::{apply_filters, FilterSpec};
pub use sort::{sorted, SortOrder};
