use crate::domain::filter::tests::scenario_bids;
use crate::domain::FilterSpec;
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
fn radar_lists_everything_without_a_filter() {
    let state = test_state(scenario_bids());

    let resp = handle(get("/radar"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Seoul IT Build"));
    assert!(body.contains("Gyeonggi Data"));
}

#[test]
fn radar_query_replaces_the_store_filter() {
    let state = test_state(scenario_bids());

    let resp = handle(get("/radar?budget_min=400000000&sort=budget"), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Seoul IT Build"));
    assert!(!body.contains("Gyeonggi Data"));

    assert_eq!(
        state.store.filter(),
        FilterSpec {
            budget_min: Some(400_000_000),
            ..Default::default()
        }
    );

    // A new submission is not merged with the previous one
    handle(get("/radar?keyword=GYEONGGI"), &state).unwrap();
    let ids: Vec<_> = state.store.filtered().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["2"]);
    assert_eq!(state.store.filter().budget_min, None);
}

#[test]
fn sort_only_query_keeps_the_filter() {
    let state = test_state(scenario_bids());
    handle(get("/radar?region=Seoul"), &state).unwrap();

    let body = body_string(handle(get("/radar?sort=deadline"), &state).unwrap());

    assert!(body.contains("Seoul IT Build"));
    assert!(!body.contains("Gyeonggi Data"));
}

#[test]
fn percent_encoded_keyword_is_decoded() {
    let mut bids = scenario_bids();
    bids[0].title = "스마트시티 통합플랫폼".to_string();
    let state = test_state(bids);

    // "스마트"
    handle(get("/radar?keyword=%EC%8A%A4%EB%A7%88%ED%8A%B8"), &state).unwrap();

    let ids: Vec<_> = state.store.filtered().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn zero_budget_max_is_a_real_bound() {
    let mut bids = scenario_bids();
    bids[1].budget = 0;
    let state = test_state(bids);

    handle(get("/radar?budget_max=0"), &state).unwrap();
    assert_eq!(state.store.filter().budget_max, Some(0));
    let ids: Vec<_> = state.store.filtered().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["2"]);

    // Left blank, the field is no bound at all
    handle(get("/radar?budget_max="), &state).unwrap();
    assert_eq!(state.store.filter().budget_max, None);
    assert_eq!(state.store.filtered().len(), 2);
}

#[test]
fn malformed_filter_value_is_a_bad_request() {
    let state = test_state(scenario_bids());

    let err = handle(get("/radar?budget_max=ten"), &state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert!(state.store.filter().is_empty());
}

#[test]
fn home_shows_recent_bids() {
    let state = test_state(scenario_bids());

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Gyeonggi Data"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(scenario_bids());
    assert!(matches!(
        handle(get("/analytics"), &state),
        Err(crate::errors::ServerError::NotFound)
    ));
}
