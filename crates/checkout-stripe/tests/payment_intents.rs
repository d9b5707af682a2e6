use checkout_core::{
    CheckoutError, Currency, PaymentIntentParams, PaymentIntentProvider, PaymentIntentStatus,
};
use checkout_stripe::{StripeConfig, StripePaymentIntents};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> StripePaymentIntents {
    let config = StripeConfig::new("sk_test_123").with_api_base_url(server.uri());
    StripePaymentIntents::new(config).unwrap()
}

#[tokio::test]
async fn creates_intent_with_amount_currency_and_automatic_methods() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("Authorization", "Bearer sk_test_123"))
        .and(header_exists("Stripe-Version"))
        .and(header_exists("Idempotency-Key"))
        .and(body_string_contains("amount=26000"))
        .and(body_string_contains("currency=usd"))
        .and(body_string_contains("automatic_payment_methods%5Benabled%5D=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_123",
            "object": "payment_intent",
            "amount": 26000,
            "currency": "usd",
            "client_secret": "pi_123_secret_abc",
            "status": "requires_payment_method",
            "created": 1_700_000_000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intent = provider_for(&server)
        .create_payment_intent(&PaymentIntentParams::new(26000, Currency::USD))
        .await
        .unwrap();

    assert_eq!(intent.id, "pi_123");
    assert_eq!(intent.amount, 26000);
    assert_eq!(intent.currency, Currency::USD);
    assert_eq!(intent.client_secret, "pi_123_secret_abc");
    assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
    assert_eq!(intent.created_at.map(|t| t.timestamp()), Some(1_700_000_000));
}

#[tokio::test]
async fn forwards_idempotency_key_and_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("Idempotency-Key", "order-42"))
        .and(body_string_contains("metadata%5Bproduct_id%5D=Forever+Shirt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_456",
            "amount": 15500,
            "currency": "usd",
            "client_secret": "pi_456_secret_def"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut params =
        PaymentIntentParams::new(15500, Currency::USD).with_metadata("product_id", "Forever Shirt");
    params.idempotency_key = Some("order-42".to_string());

    let intent = provider_for(&server)
        .create_payment_intent(&params)
        .await
        .unwrap();

    assert_eq!(intent.client_secret, "pi_456_secret_def");
    assert!(intent.created_at.is_none());
}

#[tokio::test]
async fn surfaces_stripe_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "code": "amount_too_small",
                "message": "Amount must be at least $0.50 usd"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .create_payment_intent(&PaymentIntentParams::new(1, Currency::USD))
        .await
        .unwrap_err();

    match err {
        CheckoutError::Provider { provider, message } => {
            assert_eq!(provider, "stripe");
            assert_eq!(message, "Amount must be at least $0.50 usd");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_client_secret_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_789",
            "amount": 30000,
            "currency": "usd"
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .create_payment_intent(&PaymentIntentParams::new(30000, Currency::USD))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Provider { .. }));
}

#[tokio::test]
async fn garbage_success_body_is_a_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .create_payment_intent(&PaymentIntentParams::new(30000, Currency::USD))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Serialization(_)));
}

#[tokio::test]
async fn slow_stripe_times_out_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"id": "pi_slow", "amount": 1, "currency": "usd"})),
        )
        .mount(&server)
        .await;

    let config = StripeConfig::new("sk_test_123")
        .with_api_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let provider = StripePaymentIntents::new(config).unwrap();

    let err = provider
        .create_payment_intent(&PaymentIntentParams::new(100, Currency::USD))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Network(_)));
    assert!(err.is_upstream());
}
