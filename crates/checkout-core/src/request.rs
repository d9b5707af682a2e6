//! # Checkout Request Types
//!
//! Wire shapes for the payment intent endpoint.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// Body of `POST /create-payment-intent`.
///
/// Every field is optional on the wire and defaults to the empty string.
/// Unknown fields are ignored. Only `product_id` drives pricing; the address
/// fields are accepted for a fulfilment system downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutRequest {
    pub product_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl CheckoutRequest {
    /// Decode a request body. Content type is not checked.
    ///
    /// Only the first JSON value is read; anything after it is ignored. A
    /// `null` body decodes to an empty request.
    pub fn from_json(body: &[u8]) -> CheckoutResult<Self> {
        let mut values =
            serde_json::Deserializer::from_slice(body).into_iter::<Option<CheckoutRequest>>();
        match values.next() {
            Some(value) => Ok(value?.unwrap_or_default()),
            None => Err(CheckoutError::InvalidBody("EOF".to_string())),
        }
    }

    /// Builder used mostly by tests and clients
    pub fn for_product(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    /// Group the address fields
    pub fn shipping_address(&self) -> ShippingAddress<'_> {
        ShippingAddress {
            first_name: &self.first_name,
            last_name: &self.last_name,
            line1: &self.address_1,
            line2: &self.address_2,
            city: &self.city,
            state: &self.state,
            zip: &self.zip,
            country: &self.country,
        }
    }
}

/// Borrowed view of the shipping fields of a [`CheckoutRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingAddress<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub line1: &'a str,
    pub line2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub country: &'a str,
}

impl ShippingAddress<'_> {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True when no address field was supplied
    pub fn is_empty(&self) -> bool {
        [
            self.first_name,
            self.last_name,
            self.line1,
            self.line2,
            self.city,
            self.state,
            self.zip,
            self.country,
        ]
        .iter()
        .all(|f| f.is_empty())
    }
}

/// Success body of `POST /create-payment-intent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
