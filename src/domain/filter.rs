// src/domain/filter.rs

use crate::domain::bid::{BidRecord, BidStatus};

/// Active radar criteria. `None` means "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub region: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub keyword: Option<String>,
    pub status: Option<BidStatus>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// True when `bid` passes every constraint that is present.
    pub fn matches(&self, bid: &BidRecord) -> bool {
        if let Some(category) = &self.category {
            if !bid.category.contains(category.as_str()) {
                return false;
            }
        }

        if let Some(region) = &self.region {
            if !bid.region.contains(region.as_str()) {
                return false;
            }
        }

        // Bounds may be negative; widen both sides instead of casting the budget down.
        let budget = i128::from(bid.budget);
        if let Some(min) = self.budget_min {
            if budget < i128::from(min) {
                return false;
            }
        }
        if let Some(max) = self.budget_max {
            if budget > i128::from(max) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !bid.title.to_lowercase().contains(&keyword)
                && !bid.agency.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }

        if let Some(status) = self.status {
            if bid.status != status {
                return false;
            }
        }

        true
    }
}

/// Projects `records` through `filter`, keeping input order.
pub fn apply_filters(records: &[BidRecord], filter: &FilterSpec) -> Vec<BidRecord> {
    records
        .iter()
        .filter(|bid| filter.matches(bid))
        .cloned()
        .collect()
}
