use crate::domain::filter::tests::scenario_bids;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state};
use astra::{Body, Request};
use http::Method;

fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn detail_renders_known_bid() {
    let mut bids = scenario_bids();
    bids[1].bid_method = Some("제한경쟁".to_string());
    let state = test_state(bids);

    let resp = handle(get("/bids/2"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Gyeonggi Province"));
    assert!(body.contains("3.0억원"));
    assert!(body.contains("제한경쟁"));
}

#[test]
fn detail_of_unknown_bid_is_not_found() {
    let state = test_state(scenario_bids());
    assert!(matches!(
        handle(get("/bids/404"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn error_page_carries_status() {
    let resp = crate::templates::html_error_response(ServerError::BadRequest("budget_min".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("budget_min"));
}
