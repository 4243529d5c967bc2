use crate::db::load_runs::recent_load_runs;
use crate::domain::{sorted, BidStatus, FilterSpec, SortOrder};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::export_bids_xlsx;
use crate::state::AppState;
use crate::templates;
use crate::templates::pages::{HomeVm, RadarVm};
use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use tracing::debug;

const RECENT_LIMIT: usize = 8;

/// Form fields that make up a filter. Their presence replaces the whole filter.
const FILTER_KEYS: [&str; 6] = ["category", "region", "budget_min", "budget_max", "keyword", "status"];

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let (recent, total, favorites) = state.store.read(|s| {
                let mut recent = sorted(s.records(), SortOrder::Latest);
                recent.truncate(RECENT_LIMIT);
                (recent, s.records().len(), s.favorites().clone())
            });
            let last_load = state
                .db
                .with_conn(|conn| recent_load_runs(conn, 1))?
                .into_iter()
                .next();
            html_response(templates::pages::home_page(
                &HomeVm {
                    recent,
                    total,
                    favorites,
                    last_load,
                },
                Local::now().naive_local(),
            ))
        }

        ("GET", "/radar") => {
            let params = parse_query(&req);
            if FILTER_KEYS.iter().any(|k| params.contains_key(*k)) {
                state.store.set_filter(filter_from_query(&params)?);
            }
            let sort = sort_from_query(&params)?;

            let vm = state.store.read(|s| RadarVm {
                bids: sorted(s.filtered(), sort),
                filter: s.filter().clone(),
                sort,
                favorites: s.favorites().clone(),
                total: s.records().len(),
            });
            html_response(templates::pages::radar_page(&vm, Local::now().naive_local()))
        }

        ("GET", "/radar/export") => {
            let sort = sort_from_query(&parse_query(&req))?;
            let bids = sorted(&state.store.filtered(), sort);
            export_bids_xlsx(&bids, "bid_radar.xlsx")
        }

        ("POST", p) if p.starts_with("/favorites/") => {
            let id = path_id(p, "/favorites/")?;
            let favorite = state.store.toggle_favorite(id);
            html_response(templates::components::favorite_button(id, favorite))
        }

        ("GET", p) if p.starts_with("/bids/") => {
            let id = path_id(p, "/bids/")?;
            let bid = state.store.find(id).ok_or(ServerError::NotFound)?;
            let favorite = state.store.is_favorite(id);
            html_response(templates::pages::bid_detail_page(
                &bid,
                favorite,
                Local::now().naive_local(),
            ))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn path_id<'a>(path: &'a str, prefix: &str) -> Result<&'a str, ServerError> {
    match path.strip_prefix(prefix) {
        Some(id) if !id.is_empty() && !id.contains('/') => Ok(id),
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Builds a complete filter from the form fields. Blank fields are absent.
pub fn filter_from_query(params: &HashMap<String, String>) -> Result<FilterSpec, ServerError> {
    let text = |key: &str| {
        params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let amount = |key: &str| -> Result<Option<i64>, ServerError> {
        text(key)
            .map(|v| {
                v.parse::<i64>()
                    .map_err(|e| ServerError::BadRequest(format!("{key}: {e}")))
            })
            .transpose()
    };

    let status = text("status")
        .map(|v| {
            v.parse::<BidStatus>()
                .map_err(|e| ServerError::BadRequest(e.to_string()))
        })
        .transpose()?;

    Ok(FilterSpec {
        category: text("category"),
        region: text("region"),
        budget_min: amount("budget_min")?,
        budget_max: amount("budget_max")?,
        keyword: text("keyword"),
        status,
    })
}

fn sort_from_query(params: &HashMap<String, String>) -> Result<SortOrder, ServerError> {
    match params.get("sort").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(s) => s
            .parse()
            .map_err(|e: crate::domain::sort::UnknownSortOrder| ServerError::BadRequest(e.to_string())),
        None => Ok(SortOrder::default()),
    }
}
