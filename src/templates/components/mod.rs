use maud::{html, Markup};

pub mod bid_card;
pub mod error;

pub use bid_card::{bid_card, favorite_button, status_badge};
pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
