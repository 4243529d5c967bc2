use crate::domain::filter::tests::scenario_bids;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state};
use astra::{Body, Request};
use http::Method;

fn post(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn toggling_twice_restores_favorites() {
    let state = test_state(scenario_bids());

    let first = body_string(handle(post("/favorites/1"), &state).unwrap());
    assert!(first.contains("★"));
    assert!(state.store.is_favorite("1"));

    let second = body_string(handle(post("/favorites/1"), &state).unwrap());
    assert!(second.contains("☆"));
    assert!(!state.store.is_favorite("1"));
}

#[test]
fn unknown_id_can_be_favorited_without_touching_bids() {
    let state = test_state(scenario_bids());
    let view = state.store.filtered();

    let resp = handle(post("/favorites/9"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    assert!(state.store.is_favorite("9"));
    assert_eq!(state.store.records(), scenario_bids());
    assert_eq!(state.store.filtered(), view);
}

#[test]
fn favorites_need_an_id() {
    let state = test_state(scenario_bids());
    assert!(handle(post("/favorites/"), &state).is_err());
}
