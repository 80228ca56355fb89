use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::Value;
use sl_api::{configure_routes, AppState};
use sl_core::ledger::JokePlatform;
use sl_core::seed;
use sl_core::service::FeedService;
use sl_sui_mock::{MockLedger, MockWallet, RandomIdentity};

fn state() -> web::Data<AppState> {
    let ledger = Arc::new(MockLedger::new());
    let wallet = Arc::new(MockWallet::new(Arc::new(RandomIdentity), ledger.clone(), Duration::ZERO));
    web::Data::new(AppState {
        feed: FeedService::new(seed::sample_store(), wallet, ledger, JokePlatform::new("0xpkg")),
        public_url: "http://localhost:8080".to_string(),
        estimated_gas_sui: 0.001,
    })
}

fn connect_req() -> test::TestRequest {
    test::TestRequest::post()
        .uri("/wallet/connect")
        .set_form([("wallet", "suiet")])
}

#[actix_web::test]
async fn feed_page_shows_seeded_totals() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("620"));
    assert!(html.contains("Connect Wallet"));
}

#[actix_web::test]
async fn like_while_disconnected_is_forbidden() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::post().uri("/jokes/1/like").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("permission denied"));

    let jokes: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/jokes").to_request()).await;
    assert_eq!(jokes[0]["id"], "1");
    assert_eq!(jokes[0]["likes"], 42);
}

#[actix_web::test]
async fn connected_like_redirects_and_counts() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let resp = test::call_service(&app, connect_req().to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(&app, test::TestRequest::post().uri("/memes/2/like").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/?tab=memes");

    let stats: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/stats").to_request()).await;
    assert_eq!(stats["total_likes"], 621);
}

#[actix_web::test]
async fn like_unknown_id_changes_nothing() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;
    test::call_service(&app, connect_req().to_request()).await;

    let resp = test::call_service(&app, test::TestRequest::post().uri("/jokes/404/like").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stats: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/stats").to_request()).await;
    assert_eq!(stats["total_likes"], 620);
}

#[actix_web::test]
async fn unknown_kind_is_not_found() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;
    let resp = test::call_service(&app, test::TestRequest::post().uri("/gifs/1/like").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blank_submission_is_rejected() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;
    test::call_service(&app, connect_req().to_request()).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_form([("kind", "joke"), ("content", "   "), ("category", "puns"), ("store_on_chain", "on")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stats: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/stats").to_request()).await;
    assert_eq!(stats["total_jokes"], 4);
}

#[actix_web::test]
async fn submission_requires_wallet() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_form([("kind", "joke"), ("content", "Knock knock"), ("category", "general")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn on_chain_submission_appends_persisted_post() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;
    test::call_service(&app, connect_req().to_request()).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_form([
            ("kind", "meme"),
            ("title", "Me waiting for finality"),
            ("image_url", "/finality.png"),
            ("category", "crypto"),
            ("store_on_chain", "on"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/?tab=memes");

    let memes: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/memes").to_request()).await;
    let added = &memes[3];
    assert_eq!(added["likes"], 0);
    assert_eq!(added["persisted"], true);
    assert!(added["id"].as_str().unwrap().starts_with("0x"));

    let stats: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/stats").to_request()).await;
    assert_eq!(stats["total_memes"], 4);
    assert_eq!(stats["memes_on_chain"], 3);
    assert_eq!(stats["total_likes"], 620);
}

#[actix_web::test]
async fn copy_address_follows_session() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/wallet/address").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    test::call_service(&app, connect_req().to_request()).await;
    let first = test::call_and_read_body(&app, test::TestRequest::get().uri("/wallet/address").to_request()).await;
    assert!(first.starts_with(b"0x"));

    let resp = test::call_service(&app, test::TestRequest::post().uri("/wallet/disconnect").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/wallet/address").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    test::call_service(&app, connect_req().to_request()).await;
    let second = test::call_and_read_body(&app, test::TestRequest::get().uri("/wallet/address").to_request()).await;
    assert!(second.starts_with(b"0x"));
    assert_ne!(first, second);
}

#[actix_web::test]
async fn share_returns_payload() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let payload: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/jokes/4/share").to_request()).await;
    assert_eq!(payload["title"], "Check out this joke!");
    assert_eq!(payload["text"], "What do you call a fake noodle? An impasta!");
    assert_eq!(payload["url"], "http://localhost:8080");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/jokes/99/share").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
