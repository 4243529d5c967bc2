// loader.rs
use crate::db::load_runs::{end_load_run, start_load_run};
use crate::db::Database;
use crate::source::BidSource;
use crate::store::SharedStore;
use std::thread::JoinHandle;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// How a background load ended. The store only changes on `Replaced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Replaced(usize),
    Empty,
    Failed(String),
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Fetches from `source` once and, if it returns anything, replaces the
/// store's collection wholesale. Failures leave the store as it was.
pub fn load_once(store: &SharedStore, source: &dyn BidSource, db: &Database) -> LoadOutcome {
    let run_id = db
        .with_conn(|conn| start_load_run(conn, source.name(), now_unix()))
        .map_err(|e| warn!(error = %e, "could not record load run start"))
        .ok();

    let outcome = match source.fetch_initial_records() {
        Ok(bids) if bids.is_empty() => {
            info!(source = source.name(), "source returned no bids, keeping current collection");
            LoadOutcome::Empty
        }
        Ok(bids) => {
            let count = bids.len();
            store.set_records(bids);
            info!(source = source.name(), count, "bid collection replaced");
            LoadOutcome::Replaced(count)
        }
        Err(e) => {
            warn!(source = source.name(), error = %e, "bid load failed, keeping current collection");
            LoadOutcome::Failed(e.to_string())
        }
    };

    if let Some(run_id) = run_id {
        let (records, success, error) = match &outcome {
            LoadOutcome::Replaced(n) => (*n, true, None),
            LoadOutcome::Empty => (0, true, None),
            LoadOutcome::Failed(msg) => (0, false, Some(msg.clone())),
        };
        if let Err(e) =
            db.with_conn(|conn| end_load_run(conn, run_id, now_unix(), records, success, error))
        {
            warn!(error = %e, "could not record load run end");
        }
    }

    outcome
}

/// Runs `load_once` on its own thread. There is no cancellation; join the
/// handle to observe the outcome.
pub fn spawn_initial_load(
    store: SharedStore,
    source: Box<dyn BidSource + Send>,
    db: Database,
) -> JoinHandle<LoadOutcome> {
    std::thread::spawn(move || {
        info!(source = source.name(), "background bid load started");
        load_once(&store, source.as_ref(), &db)
    })
}
