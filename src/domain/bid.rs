// src/domain/bid.rs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One procurement announcement as the dashboard sees it.
/// Field names follow the document store (`createdAt`, `bidMethod`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub id: String,
    pub title: String,
    pub agency: String,
    pub category: String,
    pub region: String,
    /// Whole currency units (KRW).
    pub budget: u64,
    pub deadline: String,
    pub created_at: String,
    pub status: BidStatus,

    // Optional detail, only present on some documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_date: Option<String>,
}

impl BidRecord {
    pub fn deadline_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.deadline)
    }

    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Active,
    Modified,
    Closed,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Active => "active",
            BidStatus::Modified => "modified",
            BidStatus::Closed => "closed",
        }
    }

    /// Label shown on the radar badges.
    pub fn label(&self) -> &'static str {
        match self {
            BidStatus::Active => "진행중",
            BidStatus::Modified => "정정",
            BidStatus::Closed => "마감",
        }
    }

    pub const ALL: [BidStatus; 3] = [BidStatus::Active, BidStatus::Modified, BidStatus::Closed];
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bid status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BidStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BidStatus::Active),
            "modified" => Ok(BidStatus::Modified),
            "closed" => Ok(BidStatus::Closed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Parses the timestamp shapes seen in bid documents: RFC 3339 with an
/// offset, or a naive local `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}
