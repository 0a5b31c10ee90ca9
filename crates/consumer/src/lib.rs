//! Compiled output of the wirestub generator, checked in as source.
//!
//! `foo_client` is the rendered client for the `IFoo` contract in
//! `contracts/ifoo.json`. The `generated_sync` integration test regenerates
//! the contract and asserts the checked-in source is byte-identical to the
//! renderer output; the behavioral tests drive the client against
//! [`stub::StubProcessor`].

use std::future::Future;

use wirestub_runtime::ClientError;

pub mod foo_client;
pub mod stub;

pub use foo_client::{FooClient, IFooClient};

/// The service contract the generated client adapts.
pub trait IFoo {
    /// Fetch a string keyed by `value`, carrying `bar` in the request body.
    fn get_string_async(
        &self,
        value: String,
        bar: String,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// Fire-and-forget counterpart of [`IFoo::get_string_async`].
    fn execute_string_async(
        &self,
        value: String,
        bar: String,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
