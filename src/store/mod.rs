mod bid_store;
mod shared;

pub use bid_store::{BidStore, StoreEvent};
pub use shared::SharedStore;
