//! Delivery-stage success and failure behavior.

use bridge_core::{DeliveryError, Error};
use delivery_client::{DeliveryConfig, HttpSink, MetricSink};
use integration_tests::fixtures;
use integration_tests::setup::TestContext;

#[tokio::test]
async fn ok_status_succeeds() {
    let ctx = TestContext::new().await;
    ctx.search.respond_with(200, fixtures::two_cpu_hits());
    ctx.delivery.respond_with(200);

    let report = pipeline::run(&ctx.client, &ctx.sink, &ctx.params())
        .await
        .expect("pipeline run failed");

    assert_eq!(report.delivered, 2);
    assert_eq!(ctx.delivery.post_count(), 1);
}

#[tokio::test]
async fn any_non_200_status_is_a_delivery_error() {
    // Success is 200 only; even other 2xx codes fail the run
    for status in [201u16, 204, 400, 404, 500, 503] {
        let ctx = TestContext::new().await;
        ctx.search.respond_with(200, fixtures::two_cpu_hits());
        ctx.delivery.respond_with(status);

        let err = pipeline::run(&ctx.client, &ctx.sink, &ctx.params())
            .await
            .expect_err("expected delivery failure");

        match err {
            Error::Delivery(DeliveryError::Status(code)) => assert_eq!(code, status),
            other => panic!("unexpected error for status {status}: {other}"),
        }
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Grab a port that nothing is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/api/v1/metrics", listener.local_addr().unwrap());
    drop(listener);

    let sink = HttpSink::new(&DeliveryConfig {
        endpoint,
        ..DeliveryConfig::default()
    })
    .unwrap();

    let err = sink.send(&[]).await.expect_err("expected delivery failure");
    assert!(matches!(
        err,
        Error::Delivery(DeliveryError::Transport(_))
    ));
}

#[tokio::test]
async fn invalid_endpoint_is_a_config_error() {
    let config = DeliveryConfig {
        endpoint: "not a url".to_string(),
        ..DeliveryConfig::default()
    };
    assert!(matches!(HttpSink::new(&config), Err(Error::Config(_))));
}
