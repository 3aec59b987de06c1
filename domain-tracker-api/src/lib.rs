//! # domain-tracker-api
//!
//! Typed client for the domain tracker's REST backend.
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | `POST` | `/api/login` | [`DomainApi::login`] |
//! | `GET` | `/api/domains` | [`DomainApi::list_domains`] |
//! | `POST` | `/api/domains` | [`DomainApi::create_domain`] |
//! | `PUT` | `/api/domains/{id}` | [`DomainApi::update_domain`] |
//! | `DELETE` | `/api/domains/{id}` | [`DomainApi::delete_domain`] |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Wire format
//!
//! The backend calls the domain name `domain` and the expiry date `renew`.
//! [`ApiDomain`] is the normalized read side and [`DomainPayload`] the write
//! side; both keep that mapping in one place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_tracker_api::{ApiConfig, DomainApi, LoginRequest, create_domain_api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_domain_api(&ApiConfig::default())?;
//!
//!     let session = api
//!         .login(&LoginRequest {
//!             email: "admin@example.com".to_string(),
//!             password: "secret".to_string(),
//!         })
//!         .await?;
//!
//!     for domain in api.list_domains(Some(&session.token)).await? {
//!         println!("{} {:?}", domain.name, domain.expire_date);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for `std::result::Result<T, ApiError>`.
//! [`ApiError::is_retryable`] marks transient failures; the client retries them
//! for GET, PUT and DELETE only.

mod error;
mod factory;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

pub use error::{ApiError, Result};
pub use factory::create_domain_api;
pub use rest::RestDomainApi;
pub use traits::DomainApi;
pub use types::{
    ApiConfig, ApiDomain, DomainPayload, LoginRequest, LoginResponse, UNKNOWN_COMPANY, User,
    UserGroup,
};
pub use utils::datetime as renew_date;
pub use utils::datetime::{format_renew_date, parse_renew_date};
