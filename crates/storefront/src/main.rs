//! Kiosk storefront - interactive terminal shop.
//!
//! Browses, filters, and sorts the remote catalog, manages an in-memory
//! cart, and in admin mode manages products and users. All persistent state
//! lives behind the catalog service; this process holds nothing across runs.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p kiosk-storefront
//! # then type 'help' at the prompt
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk_catalog::CatalogClient;
use kiosk_storefront::config::StorefrontConfig;
use kiosk_storefront::render::Screen;
use kiosk_storefront::session::Session;
use kiosk_storefront::shop::Shop;

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kiosk_storefront=info,kiosk_catalog=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    let client = CatalogClient::new(&config.api_base);
    tracing::info!(api_base = %client.base_url(), "storefront starting");
    let shop = Shop::new(client, config.checkout_user);
    let mut session = Session::new(shop, Screen::new(std::io::stdout()));

    session
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .expect("Failed to write to the terminal");
}
