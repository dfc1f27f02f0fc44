//! Trade Tracker client SDK.
//!
//! Typed async client for the Trade Tracker inventory/finance API. Owns the
//! session token lifecycle, transparently recovers from expired credentials
//! (concurrent 401s coalesce into a single refresh call), and normalizes
//! every transport and HTTP failure into a typed [`error::ApiError`] that
//! UI layers translate into user-facing messages.
//!
//! # Quick Start
//!
//! ```no_run
//! use tradetracker_client::prelude::*;
//!
//! # async fn example() -> tradetracker_client::error::Result<()> {
//! let client = ApiClient::new(ClientConfig::new("https://api.tradetracker.example"))?;
//! client
//!     .sign_in(&Credentials {
//!         email: "trader@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//!     .await?;
//!
//! let catalog = MessageCatalog::new();
//! match client.list_products().await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(error) => eprintln!("{}", catalog.translate(&error)),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
