// templates/pages/home.rs

use crate::db::load_runs::LoadRun;
use crate::domain::BidRecord;
use crate::templates::{components::bid_card, desktop_layout};
use chrono::{DateTime, NaiveDateTime};
use maud::{html, Markup};
use std::collections::HashSet;

pub struct HomeVm {
    /// Newest first, already truncated.
    pub recent: Vec<BidRecord>,
    pub total: usize,
    pub favorites: HashSet<String>,
    pub last_load: Option<LoadRun>,
}

/// Dashboard: the newest announcements and a couple of counters.
pub fn home_page(vm: &HomeVm, now: NaiveDateTime) -> Markup {
    desktop_layout(
        "대시보드",
        html! {
            main class="container" {
                h1 { "대시보드" }

                section class="stats" {
                    div class="stat" { span { "전체 공고" } strong { (vm.total) } }
                    div class="stat" { span { "관심 공고" } strong { (vm.favorites.len()) } }
                }

                @if let Some(run) = &vm.last_load {
                    (load_status(run))
                }

                section {
                    h2 { "최근 공고" }
                    @if vm.recent.is_empty() {
                        p class="empty" { "표시할 공고가 없습니다." }
                    }
                    @for bid in &vm.recent {
                        (bid_card(bid, vm.favorites.contains(&bid.id), now))
                    }
                    a href="/radar" { "전체 보기 →" }
                }
            }
        },
    )
}

fn load_status(run: &LoadRun) -> Markup {
    let started = DateTime::from_timestamp(run.started_at, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();

    html! {
        p class="load-status" {
            "마지막 동기화 #" (run.id) " (" (run.source) ", " (started) "): "
            @if run.finished_at.is_none() {
                "진행중"
            } @else if run.success {
                (run.records_seen.unwrap_or(0)) "건"
            } @else {
                span class="error" { "실패 - " (run.error_message.as_deref().unwrap_or("unknown")) }
            }
        }
    }
}
