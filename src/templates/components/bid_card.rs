use crate::domain::format::{d_day_label, format_budget};
use crate::domain::{BidRecord, BidStatus};
use chrono::NaiveDateTime;
use maud::{html, Markup};

pub fn status_badge(status: BidStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status.as_str())) { (status.label()) }
    }
}

/// Star toggle. Swaps itself with the server's answer.
pub fn favorite_button(id: &str, favorite: bool) -> Markup {
    html! {
        button
            class=(if favorite { "favorite is-favorite" } else { "favorite" })
            hx-post=(format!("/favorites/{id}"))
            hx-swap="outerHTML"
            aria-pressed=(if favorite { "true" } else { "false" })
            title=(if favorite { "관심공고 해제" } else { "관심공고 등록" })
        {
            @if favorite { "★" } @else { "☆" }
        }
    }
}

pub fn bid_card(bid: &BidRecord, favorite: bool, now: NaiveDateTime) -> Markup {
    html! {
        article class="card bid-card" id=(format!("bid-{}", bid.id)) {
            div class="bid-card-head" {
                (status_badge(bid.status))
                span class="category" { (bid.category) }
                span class="d-day" { (d_day_label(bid.deadline_at(), now)) }
                (favorite_button(&bid.id, favorite))
            }
            h3 { a href=(format!("/bids/{}", bid.id)) { (bid.title) } }
            p class="agency" { (bid.agency) " · " (bid.region) }
            p class="budget" { (format_budget(bid.budget)) }
        }
    }
}
