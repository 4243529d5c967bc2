use crate::db::connection::Database;
use crate::domain::{BidRecord, BidStatus};
use crate::errors::ServerError;
use rusqlite::params;
use rusqlite::types::Type;

const SELECT_BIDS: &str = r#"
    SELECT id, title, agency, category, region, budget, deadline, created_at,
           updated_at, status, description, bid_method, estimated_price, announcement_date
    FROM bids
    ORDER BY created_at DESC
"#;

/// Every stored bid, newest first.
pub fn list_bids(db: &Database) -> Result<Vec<BidRecord>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(SELECT_BIDS)?;

        let rows = stmt.query_map([], |row| {
            let status: String = row.get(9)?;
            let status: BidStatus = status
                .parse()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;
            let budget: i64 = row.get(5)?;
            let estimated_price: Option<i64> = row.get(12)?;
            Ok(BidRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                agency: row.get(2)?,
                category: row.get(3)?,
                region: row.get(4)?,
                budget: budget.max(0) as u64,
                deadline: row.get(6)?,
                created_at: row.get(7)?,
                updated_at: row.get(8)?,
                status,
                description: row.get(10)?,
                bid_method: row.get(11)?,
                estimated_price: estimated_price.map(|p| p.max(0) as u64),
                announcement_date: row.get(13)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

/// Inserts or overwrites bids by id. Returns the number written.
pub fn upsert_bids(db: &Database, bids: &[BidRecord]) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO bids (
                    id, title, agency, category, region, budget, deadline, created_at,
                    updated_at, status, description, bid_method, estimated_price, announcement_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    agency = excluded.agency,
                    category = excluded.category,
                    region = excluded.region,
                    budget = excluded.budget,
                    deadline = excluded.deadline,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at,
                    status = excluded.status,
                    description = excluded.description,
                    bid_method = excluded.bid_method,
                    estimated_price = excluded.estimated_price,
                    announcement_date = excluded.announcement_date
                "#,
            )?;

            for bid in bids {
                let budget = stored_amount(bid.budget, "budget", &bid.id)?;
                let estimated = bid
                    .estimated_price
                    .map(|p| stored_amount(p, "estimated price", &bid.id))
                    .transpose()?;
                stmt.execute(params![
                    bid.id,
                    bid.title,
                    bid.agency,
                    bid.category,
                    bid.region,
                    budget,
                    bid.deadline,
                    bid.created_at,
                    bid.updated_at,
                    bid.status.as_str(),
                    bid.description,
                    bid.bid_method,
                    estimated,
                    bid.announcement_date,
                ])?;
            }
        }
        tx.commit()?;
        Ok(bids.len())
    })
}

/// SQLite integers are signed; amounts past `i64::MAX` are refused.
fn stored_amount(amount: u64, field: &str, id: &str) -> Result<i64, ServerError> {
    i64::try_from(amount).map_err(|_| ServerError::BadRequest(format!("{field} out of range for bid {id}")))
}
