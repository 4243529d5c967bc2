use crate::domain::defaults::{CATEGORIES, REGIONS};
use crate::domain::{BidRecord, BidStatus, FilterSpec, SortOrder};
use crate::templates::{components::bid_card, desktop_layout};
use chrono::NaiveDateTime;
use maud::{html, Markup};
use std::collections::HashSet;

pub struct RadarVm {
    /// Filtered and already sorted.
    pub bids: Vec<BidRecord>,
    pub filter: FilterSpec,
    pub sort: SortOrder,
    pub favorites: HashSet<String>,
    pub total: usize,
}

pub fn radar_page(vm: &RadarVm, now: NaiveDateTime) -> Markup {
    desktop_layout(
        "입찰 검색",
        html! {
            main class="container" {
                h1 { "입찰 검색" }
                (filter_form(vm))

                div class="radar-summary" {
                    p { "총 " strong id="result-count" { (vm.bids.len()) } "건 / 전체 " (vm.total) "건" }
                    a href=(format!("/radar/export?sort={}", vm.sort.as_str())) { "엑셀 다운로드" }
                }

                section id="radar-results" {
                    @if vm.bids.is_empty() {
                        p class="empty" { "조건에 맞는 공고가 없습니다." }
                    }
                    @for bid in &vm.bids {
                        (bid_card(bid, vm.favorites.contains(&bid.id), now))
                    }
                }
            }
        },
    )
}

fn filter_form(vm: &RadarVm) -> Markup {
    let f = &vm.filter;

    html! {
        form class="card filter-form" action="/radar" method="get" {
            input type="search" name="keyword" placeholder="공고명, 발주기관 검색"
                value=[f.keyword.as_deref()];

            select name="category" {
                option value="" { "전체 분류" }
                @for c in CATEGORIES {
                    option value=(c) selected[f.category.as_deref() == Some(c)] { (c) }
                }
            }

            select name="region" {
                option value="" { "전체 지역" }
                @for r in REGIONS {
                    option value=(r) selected[f.region.as_deref() == Some(r)] { (r) }
                }
            }

            select name="status" {
                option value="" { "전체 상태" }
                @for s in BidStatus::ALL {
                    option value=(s.as_str()) selected[f.status == Some(s)] { (s.label()) }
                }
            }

            input type="number" name="budget_min" placeholder="최소 예산(원)" value=[f.budget_min];
            input type="number" name="budget_max" placeholder="최대 예산(원)" value=[f.budget_max];

            select name="sort" {
                @for order in SortOrder::ALL {
                    option value=(order.as_str()) selected[vm.sort == order] { (order.label()) }
                }
            }

            button type="submit" { "검색" }
            @if !f.is_empty() {
                a href="/radar?keyword=" { "초기화" }
            }
        }
    }
}
