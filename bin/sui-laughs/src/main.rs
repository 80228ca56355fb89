//! # SuiLaughs Binary
//!
//! The entry point that assembles the application based on compile-time features.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sl_api::{configure_routes, middleware, AppState};
use sl_config::AppConfig;
use sl_core::ledger::JokePlatform;
use sl_core::seed;
use sl_core::service::FeedService;
use sl_core::store::ContentStore;

#[cfg(feature = "sui-mock")]
use sl_sui_mock::{MockLedger, MockWallet, RandomIdentity};

#[cfg(not(feature = "sui-mock"))]
compile_error!("enable a wallet backend feature, e.g. `sui-mock`");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // 1. Initialize the content store
    let store = if config.feed.seed_samples {
        seed::sample_store()
    } else {
        ContentStore::new()
    };

    // 2. Initialize the wallet and ledger implementations
    #[cfg(feature = "sui-mock")]
    let (wallet, ledger) = {
        let ledger = Arc::new(MockLedger::new());
        let wallet = Arc::new(MockWallet::new(
            Arc::new(RandomIdentity),
            ledger.clone(),
            config.ledger.submit_delay(),
        ));
        (wallet, ledger)
    };

    // 3. Wire the page controller
    let feed = FeedService::new(store, wallet, ledger, JokePlatform::new(config.ledger.package_id.clone()));
    if config.feed.sync_on_startup {
        feed.sync_from_ledger().await?;
    }

    let state = web::Data::new(AppState {
        feed,
        public_url: config.server.public_url.clone(),
        estimated_gas_sui: config.ledger.estimated_gas_sui,
    });

    let (host, port) = config.bind_addr();
    log::info!(
        "🚀 SuiLaughs starting on http://{}:{} ({} at {})",
        host,
        port,
        config.ledger.network,
        config.ledger.network.fullnode_url()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::security_headers())
            .wrap(middleware::cors_policy(&state.public_url))
            .wrap(middleware::request_logger())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
