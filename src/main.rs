use crate::config::Config;
use crate::db::{init_db, upsert_bids, Database};
use crate::domain::{default_bids, BidRecord};
use crate::router::handle;
use crate::source::{spawn_initial_load, BidSource, FirestoreSource, SqliteBidSource};
use crate::state::AppState;
use crate::store::{BidStore, SharedStore, StoreEvent};
use astra::Server;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod source;
mod spreadsheets;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let db = Database::new(config.db_path.clone());
    init_db(&db, &config.schema_path)?;
    if let Some(path) = &config.seed_file {
        let written = seed_from_file(&db, path)?;
        info!(path = %path, written, "seeded local bid store");
    }

    // Defaults first, the remote collection replaces them when it arrives
    let store = SharedStore::new(BidStore::with_records(default_bids()));
    let _log_subscription = store.subscribe(|event, store| match event {
        StoreEvent::RecordsReplaced { count } => {
            info!(count, visible = store.filtered().len(), "radar collection updated")
        }
        other => debug!(?other, "store changed"),
    });

    let source: Box<dyn BidSource + Send> = match &config.firestore_project {
        Some(project) => {
            let mut firestore =
                FirestoreSource::new(project.clone(), config.firestore_api_key.clone())?
                    .with_max_attempts(config.firestore_max_attempts);
            if let Some(base_url) = &config.firestore_base_url {
                info!(base_url = %base_url, "using custom firestore endpoint");
                firestore = firestore.with_base_url(base_url.clone());
            }
            Box::new(firestore)
        }
        None => Box::new(SqliteBidSource::new(db.clone())),
    };
    // Detached: the outcome is logged by the loader itself
    let _ = spawn_initial_load(store.clone(), source, db.clone());

    let state = AppState::new(store, db);

    info!(addr = %config.addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    })?;

    info!("server shut down cleanly");
    Ok(())
}

fn seed_from_file(db: &Database, path: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(path)?;
    let bids: Vec<BidRecord> = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(upsert_bids(db, &bids)?)
}
