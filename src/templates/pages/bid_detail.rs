use crate::domain::format::{d_day_label, format_budget};
use crate::domain::BidRecord;
use crate::templates::{
    components::{card, favorite_button, status_badge},
    desktop_layout,
};
use chrono::NaiveDateTime;
use maud::{html, Markup};

pub fn bid_detail_page(bid: &BidRecord, favorite: bool, now: NaiveDateTime) -> Markup {
    desktop_layout(
        &bid.title,
        html! {
            main class="container" {
                div class="detail-head" {
                    (status_badge(bid.status))
                    span class="d-day" { (d_day_label(bid.deadline_at(), now)) }
                    (favorite_button(&bid.id, favorite))
                }
                h1 { (bid.title) }

                (card("공고 정보", html! {
                    dl {
                        dt { "발주기관" } dd { (bid.agency) }
                        dt { "분류" } dd { (bid.category) }
                        dt { "지역" } dd { (bid.region) }
                        dt { "예산" } dd { (format_budget(bid.budget)) }
                        @if let Some(price) = bid.estimated_price {
                            dt { "추정가격" } dd { (format_budget(price)) }
                        }
                        @if let Some(method) = &bid.bid_method {
                            dt { "입찰방식" } dd { (method) }
                        }
                        @if let Some(date) = &bid.announcement_date {
                            dt { "공고일" } dd { (date) }
                        }
                        dt { "마감일" } dd { (bid.deadline) }
                        dt { "등록일" } dd { (bid.created_at) }
                        @if let Some(updated) = &bid.updated_at {
                            dt { "수정일" } dd { (updated) }
                        }
                    }
                }))

                @if let Some(description) = &bid.description {
                    (card("공고 내용", html! { p { (description) } }))
                }

                a href="/radar" { "← 목록으로" }
            }
        },
    )
}
