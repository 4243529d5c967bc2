use crate::domain::{BidRecord, BidStatus};
use serde::Deserialize;
use std::collections::HashMap;

// runQuery response
//  └── [ ]
//       ├── document
//       │    ├── name      ".../documents/bids/{id}"
//       │    └── fields
//       │         └── {field}: { stringValue | integerValue | doubleValue | timestampValue }
//       └── readTime

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryItem {
    pub document: Option<Document>,
}

#[derive(Debug, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

/// A Firestore typed value. Exactly one member is set; kinds the radar
/// doesn't read (arrays, maps, ...) leave them all empty.
/// Integers arrive as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub string_value: Option<String>,
    pub integer_value: Option<String>,
    pub double_value: Option<f64>,
    pub timestamp_value: Option<String>,
}

impl Value {
    fn as_text(&self) -> Option<String> {
        self.string_value
            .as_ref()
            .or(self.timestamp_value.as_ref())
            .cloned()
    }

    /// Non-negative whole amount. Negative or non-finite numbers are `None`.
    fn as_amount(&self) -> Option<u64> {
        if let Some(s) = &self.integer_value {
            return s.parse::<u64>().ok();
        }
        self.double_value
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.round() as u64)
    }
}

impl Document {
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Flattens the typed document into a `BidRecord`, requiring the fields
    /// the radar can't do without.
    pub fn to_bid(&self) -> Result<BidRecord, String> {
        let text = |key: &str| self.fields.get(key).and_then(Value::as_text);
        let required = |key: &str| text(key).ok_or_else(|| format!("missing or non-text field '{key}'"));

        let budget = self
            .fields
            .get("budget")
            .and_then(Value::as_amount)
            .ok_or("missing or non-numeric field 'budget'")?;

        let status = required("status")?
            .parse::<BidStatus>()
            .map_err(|e| e.to_string())?;

        let id = self.id();
        if id.is_empty() {
            return Err("document name has no id".to_string());
        }

        Ok(BidRecord {
            id: id.to_string(),
            title: required("title")?,
            agency: required("agency")?,
            category: required("category")?,
            region: required("region")?,
            budget,
            deadline: required("deadline")?,
            created_at: required("createdAt")?,
            status,
            updated_at: text("updatedAt"),
            description: text("description"),
            bid_method: text("bidMethod"),
            estimated_price: self.fields.get("estimatedPrice").and_then(Value::as_amount),
            announcement_date: text("announcementDate"),
        })
    }
}
