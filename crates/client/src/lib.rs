//! Vitrine client
//!
//! Session handling, listing search, engagement tracking and the provider
//! dashboard for the Vitrine classifieds marketplace. The Dioxus front end
//! sits behind the `ui` feature; everything else builds and tests headless.

pub mod logging;

pub mod api_client;
pub mod auth_session;
pub mod checkout;
pub mod config;
pub mod endpoints;
pub mod gallery;
pub mod listing_query;
pub mod moderation;
pub mod profile_form;
pub mod storage;
pub mod taxonomy;
pub mod tracking;

#[cfg(feature = "ui")]
pub mod auth_context;
#[cfg(feature = "ui")]
pub mod components;
#[cfg(feature = "ui")]
pub mod routes;
#[cfg(feature = "ui")]
pub mod views;

pub use api_client::ApiClient;
pub use auth_session::{AuthError, Session, SessionManager};
pub use config::ClientConfig;
pub use listing_query::{FilterChange, ListingFilters, ListingQuery};
pub use storage::{LocalTokenStore, MemoryTokenStore, TokenStore};

#[cfg(feature = "ui")]
pub use auth_context::{AuthContext, AuthProvider};
#[cfg(feature = "ui")]
pub use routes::Route;
