use crate::domain::filter::tests::scenario_bids;
use crate::router::handle;
use crate::tests::utils::{body_bytes, test_state};
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
fn export_returns_xlsx_attachment() {
    let state = test_state(scenario_bids());
    handle(get("/radar?category=SW"), &state).unwrap();

    let resp = handle(get("/radar/export?sort=budget"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("bid_radar.xlsx"));

    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn export_rejects_unknown_sort() {
    let state = test_state(scenario_bids());
    assert!(handle(get("/radar/export?sort=random"), &state).is_err());
}
