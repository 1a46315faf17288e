//! Data layer of the pool administration dashboard.
//!
//! Raw API payloads are projected through declared schemas ([`schema`],
//! [`mapper`]) into typed domain models ([`domain`]), wrapped in a
//! [`pagination::Page`] when listed. Request parameters are validated by the
//! DTOs in [`forms`]. With the `client` feature the crate also talks to the
//! REST API: [`transport`] issues requests, [`api`] describes endpoints,
//! [`providers`] fetch raw payloads and [`services`] turn them into models
//! while collapsing failures into one [`errors::ErrorModel`].

pub mod domain;
mod error_conversions;
pub mod errors;
pub mod forms;
pub mod mapper;
pub mod pagination;
pub mod schema;
pub mod validators;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod providers;
#[cfg(feature = "client")]
pub mod services;
#[cfg(feature = "client")]
pub mod transport;
