//! The transport abstraction generated clients dispatch through.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::request::RemoteRequest;

/// Carries a [`RemoteRequest`] to a remote endpoint.
///
/// Generated clients never perform I/O themselves: result-bearing operations
/// dispatch through [`fetch_result`](Self::fetch_result), fire-and-forget
/// operations through [`execute`](Self::execute). Implementations own any
/// connection state and release it in [`dispose`](Self::dispose).
pub trait RequestProcessor: Send + Sync {
    /// Dispatch `request` and decode the response into `T`.
    fn fetch_result<T>(
        &self,
        request: RemoteRequest,
    ) -> impl Future<Output = Result<T, ClientError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Dispatch `request` without decoding a response value.
    fn execute(
        &self,
        request: RemoteRequest,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Release resources held by the processor.
    ///
    /// Generated clients guarantee at most one call per client instance.
    fn dispose(&self);
}
