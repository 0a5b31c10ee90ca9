// @generated by wirestub. Do not edit.

use std::future::Future;

use wirestub_runtime::{ClientError, DisposeFlag, OperationRouting, ParamMap, RemoteRequest, RequestProcessor, WireFormat};

use super::IFoo;

/// Generated remote client for the `IFoo` contract.
#[derive(Debug)]
pub struct FooClient<P: RequestProcessor> {
    processor: P,
    disposed: DisposeFlag,
}

impl<P: RequestProcessor> FooClient<P> {
    /// Build a client around `processor`.
    ///
    /// Fails with [`ClientError::MissingProcessor`] when the processor is
    /// absent.
    pub fn new(processor: impl Into<Option<P>>) -> Result<Self, ClientError> {
        let Some(processor) = processor.into() else {
            return Err(ClientError::MissingProcessor);
        };
        Ok(Self {
            processor,
            disposed: DisposeFlag::new(),
        })
    }

    /// Dispose the underlying processor. Later calls are no-ops.
    pub fn dispose(&self) {
        if self.disposed.dispose() {
            self.processor.dispose();
        }
    }

    pub async fn get_string_async(&self, value: String, bar: String) -> Result<String, ClientError> {
        self.disposed.ensure_live()?;
        let routing = OperationRouting::new("GET", "foo/{value}", WireFormat::Json, WireFormat::Xml);
        let mut query = ParamMap::new();
        query.insert("value".to_owned(), serde_json::to_value(&value)?);
        let mut body = ParamMap::new();
        body.insert("bar".to_owned(), serde_json::to_value(&bar)?);
        let request = RemoteRequest::new(routing, query, body);
        self.processor.fetch_result(request).await
    }

    pub async fn execute_string_async(&self, value: String, bar: String) -> Result<(), ClientError> {
        self.disposed.ensure_live()?;
        let routing = OperationRouting::new("GET", "foo/{value}", WireFormat::Json, WireFormat::Xml);
        let mut query = ParamMap::new();
        query.insert("value".to_owned(), serde_json::to_value(&value)?);
        let mut body = ParamMap::new();
        body.insert("bar".to_owned(), serde_json::to_value(&bar)?);
        let request = RemoteRequest::new(routing, query, body);
        self.processor.execute(request).await
    }
}

impl<P: RequestProcessor> Drop for FooClient<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Mirror of the remote surface of [`FooClient`].
pub trait IFooClient {
    fn get_string_async(&self, value: String, bar: String) -> impl Future<Output = Result<String, ClientError>> + Send;
    fn execute_string_async(&self, value: String, bar: String) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl<P: RequestProcessor> IFooClient for FooClient<P> {
    async fn get_string_async(&self, value: String, bar: String) -> Result<String, ClientError> {
        self.get_string_async(value, bar).await
    }

    async fn execute_string_async(&self, value: String, bar: String) -> Result<(), ClientError> {
        self.execute_string_async(value, bar).await
    }
}

impl<P: RequestProcessor> IFoo for FooClient<P> {
    async fn get_string_async(&self, value: String, bar: String) -> Result<String, ClientError> {
        self.get_string_async(value, bar).await
    }

    async fn execute_string_async(&self, value: String, bar: String) -> Result<(), ClientError> {
        self.execute_string_async(value, bar).await
    }
}
