//! External Service Clients
//!
//! HTTP access to the identity provider.

pub mod auth;
