//! Behavioral tests driving the generated `FooClient` against the stub.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use wirestub_consumer::stub::StubProcessor;
use wirestub_consumer::{FooClient, IFoo, IFooClient};
use wirestub_runtime::{ClientError, WireFormat};

#[tokio::test]
async fn fetches_result_and_classifies_parameters() {
    let stub = StubProcessor::returning(json!("success"));
    let client = FooClient::new(stub.clone()).unwrap();

    let result = client
        .get_string_async("10".to_owned(), "20".to_owned())
        .await
        .unwrap();
    assert_eq!(result, "success");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.routing.method, "GET");
    assert_eq!(request.routing.uri_template, "foo/{value}");
    assert_eq!(request.routing.request_format, WireFormat::Json);
    assert_eq!(request.routing.response_format, WireFormat::Xml);
    assert_eq!(request.query.len(), 1);
    assert_eq!(request.query.get("value"), Some(&json!("10")));
    assert_eq!(request.body.len(), 1);
    assert_eq!(request.body.get("bar"), Some(&json!("20")));
}

#[tokio::test]
async fn executes_without_result() {
    let stub = StubProcessor::new();
    let client = FooClient::new(stub.clone()).unwrap();

    client
        .execute_string_async("10".to_owned(), "20".to_owned())
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.get("value"), Some(&json!("10")));
    assert_eq!(requests[0].body.get("bar"), Some(&json!("20")));
}

#[tokio::test]
async fn construction_requires_processor() {
    let err = FooClient::<StubProcessor>::new(None).unwrap_err();
    assert!(matches!(err, ClientError::MissingProcessor));
}

#[tokio::test]
async fn dispose_is_single_shot_and_methods_fail_after() {
    let stub = StubProcessor::new();
    let client = FooClient::new(stub.clone()).unwrap();

    client.dispose();
    client.dispose();
    assert_eq!(stub.dispose_calls(), 1);

    let err = client
        .get_string_async("10".to_owned(), "20".to_owned())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Disposed));
    // Disposal fails fast; nothing reached the processor.
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn drop_forwards_disposal_once() {
    let stub = StubProcessor::new();
    {
        let client = FooClient::new(stub.clone()).unwrap();
        client.dispose();
    }
    assert_eq!(stub.dispose_calls(), 1);
}

#[tokio::test]
async fn companion_interface_mirrors_client_surface() {
    async fn via_interface<C: IFooClient>(client: &C) -> Result<String, ClientError> {
        client
            .get_string_async("10".to_owned(), "20".to_owned())
            .await
    }

    let stub = StubProcessor::returning(json!("success"));
    let client = FooClient::new(stub).unwrap();
    assert_eq!(via_interface(&client).await.unwrap(), "success");
}

#[tokio::test]
async fn satisfies_the_service_contract() {
    async fn via_contract<S: IFoo>(service: &S) -> Result<(), ClientError> {
        service
            .execute_string_async("10".to_owned(), "20".to_owned())
            .await
    }

    let stub = StubProcessor::new();
    let client = FooClient::new(stub.clone()).unwrap();
    via_contract(&client).await.unwrap();
    assert_eq!(stub.requests().len(), 1);
}
