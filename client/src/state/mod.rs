//! Client state modules provided through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods; the app shell
//! wraps the shared ones in `RwSignal`s and pages own the rest locally.

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod crud;
pub mod forms;
pub mod notifications;
pub mod session;
