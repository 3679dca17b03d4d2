//! Billing provider capability trait.
//!
//! Subscription billing is not wired into any request flow yet; the trait
//! exists so the handlers and startup code depend on a contract rather
//! than a concrete payment processor. [`StubBilling`] is the only
//! implementation for now and returns fixed placeholder identifiers.

use async_trait::async_trait;

use crate::error::CoreError;

/// Creates billing customers and subscriptions with an external payment
/// processor.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a billing customer for the given email, returning the
    /// processor's customer id.
    async fn create_customer(&self, email: &str) -> Result<String, CoreError>;

    /// Create a subscription for an existing customer on the given plan,
    /// returning the processor's subscription id.
    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<String, CoreError>;
}

/// No-op billing provider returning placeholder ids.
#[derive(Debug, Default)]
pub struct StubBilling;

#[async_trait]
impl BillingProvider for StubBilling {
    async fn create_customer(&self, email: &str) -> Result<String, CoreError> {
        tracing::debug!(%email, "Stub billing: create_customer");
        Ok("cus_test_123".to_string())
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<String, CoreError> {
        tracing::debug!(%customer_id, %plan_id, "Stub billing: create_subscription");
        Ok("sub_test_123".to_string())
    }
}
