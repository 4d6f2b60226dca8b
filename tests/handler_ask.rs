mod common;

use axum_test::TestServer;
use srd::routes::ask_router;

fn server() -> (TestServer, common::TestContext) {
    let ctx = common::create_test_state();
    let server = TestServer::new(ask_router(ctx.state.clone())).unwrap();
    (server, ctx)
}

#[tokio::test]
async fn test_ask_ok() {
    let (server, _ctx) = server();

    let response = server.get("/ask?domain=success.test").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "ok");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_ask_missing_domain() {
    let (server, _ctx) = server();

    let response = server.get("/ask").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "domain is required");

    let response = server.get("/ask?domain=").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "domain is required");
}

#[tokio::test]
async fn test_ask_rejects_ip_address() {
    let (server, ctx) = server();

    let response = server.get("/ask?domain=127.0.0.1").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "ip address not allowed");
    assert_eq!(ctx.txt_source.lookups(), 0);
}

#[tokio::test]
async fn test_ask_rejects_unknown_domain() {
    let (server, _ctx) = server();

    let response = server.get("/ask?domain=missing.test").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "rejected");
}

#[tokio::test]
async fn test_ask_rejects_broken_records() {
    let (server, _ctx) = server();

    for domain in ["invalid.test", "error.test"] {
        let response = server.get(&format!("/ask?domain={domain}")).await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.text(), "rejected");
    }
}

#[tokio::test]
async fn test_ask_unknown_route() {
    let (server, _ctx) = server();

    let response = server.get("/other").await;
    assert_eq!(response.status_code(), 404);
}
