//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` names every path and the auth policy, `http` executes
//! requests, `api` and `resource` expose typed operations to pages, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod resource;
pub mod types;
