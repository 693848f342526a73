//! Backend library modules.
//!
//! REST backend exposing user and card resources behind a bearer-token
//! authentication gate. The domain layer is transport agnostic; inbound
//! HTTP adapters translate to and from the wire, and outbound adapters
//! implement the persistence ports.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
