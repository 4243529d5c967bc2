// src/domain/sort.rs

use crate::domain::bid::BidRecord;
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::str::FromStr;

/// Orderings offered by the radar list. Sorting happens in the consumer,
/// never inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Closest deadline first.
    Deadline,
    /// Largest budget first.
    Budget,
    /// Newest announcement first.
    #[default]
    Latest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Deadline => "deadline",
            SortOrder::Budget => "budget",
            SortOrder::Latest => "latest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Deadline => "마감임박순",
            SortOrder::Budget => "예산높은순",
            SortOrder::Latest => "최신순",
        }
    }

    pub const ALL: [SortOrder; 3] = [SortOrder::Latest, SortOrder::Deadline, SortOrder::Budget];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deadline" => Ok(SortOrder::Deadline),
            "budget" => Ok(SortOrder::Budget),
            "latest" => Ok(SortOrder::Latest),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// Unparseable timestamps go after every parseable one.
fn by_time(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_bids(bids: &mut [BidRecord], order: SortOrder) {
    match order {
        SortOrder::Deadline => bids.sort_by(|a, b| by_time(a.deadline_at(), b.deadline_at())),
        SortOrder::Budget => bids.sort_by(|a, b| b.budget.cmp(&a.budget)),
        SortOrder::Latest => bids.sort_by(|a, b| {
            // Reverse only the known timestamps so missing ones stay last
            match (a.created_at_time(), b.created_at_time()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (x, y) => by_time(x, y),
            }
        }),
    }
}

/// Sorted copy, for callers holding a borrowed view.
pub fn sorted(bids: &[BidRecord], order: SortOrder) -> Vec<BidRecord> {
    let mut out = bids.to_vec();
    sort_bids(&mut out, order);
    out
}
