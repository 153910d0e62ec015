//! Orders Data

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    domain::ReferenceSources,
    store::{ResolveReferences, ServiceError},
    validation::{Validate, ValidationErrors},
};

use super::records::{CartItem, OrderSummary};

/// New Order Data
///
/// Orders are placed by the storefront; the back office only receives them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewOrder {
    #[serde(default, alias = "customerName")]
    pub name: String,

    #[serde(default, rename = "orderSummary")]
    pub summary: OrderSummary,

    #[serde(default, rename = "cartItems")]
    pub items: Vec<CartItem>,
}

impl Validate for NewOrder {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[async_trait]
impl ResolveReferences for NewOrder {
    async fn resolve(self, _sources: &ReferenceSources) -> Result<Self, ServiceError> {
        Ok(self)
    }
}
