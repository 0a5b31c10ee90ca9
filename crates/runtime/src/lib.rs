//! Runtime support for wirestub-generated remote clients.
//!
//! Generated clients are thin: every remote operation builds a structured
//! [`RemoteRequest`] and dispatches it through an injected
//! [`RequestProcessor`]. This crate defines that vocabulary plus the shared
//! error type and the single-shot disposal latch generated clients embed.

pub mod client;
pub mod error;
pub mod processor;
pub mod request;

pub use crate::{
    client::DisposeFlag,
    error::ClientError,
    processor::RequestProcessor,
    request::{OperationRouting, ParamMap, RemoteRequest, WireFormat},
};
