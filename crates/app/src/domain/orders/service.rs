//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::store::{Collection, ServiceError};

use super::records::{Order, OrderId, OrderStatus};

#[derive(Debug, Clone)]
pub struct StoredOrdersService {
    collection: Arc<Collection<Order>>,
}

impl StoredOrdersService {
    #[must_use]
    pub fn new(collection: Arc<Collection<Order>>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl OrdersService for StoredOrdersService {
    async fn fetch_orders(&self) -> Result<usize, ServiceError> {
        self.collection.load().await
    }

    async fn list_orders(&self) -> Vec<Order> {
        self.collection.list().await
    }

    async fn get_order(&self, order: OrderId) -> Option<Order> {
        self.collection.get(&order).await
    }

    #[tracing::instrument(
        name = "orders.update_status",
        skip(self),
        fields(order = %order, status = %status),
        err
    )]
    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, ServiceError> {
        self.collection
            .modify(&order, |record| record.summary.status = status)
            .await
    }

    async fn delete_order(&self, order: OrderId) -> Result<bool, ServiceError> {
        self.collection.delete(&order).await
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Replaces the local orders with the ones held by the document store.
    async fn fetch_orders(&self) -> Result<usize, ServiceError>;

    /// Retrieves all fetched orders.
    async fn list_orders(&self) -> Vec<Order>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Option<Order>;

    /// Sets the status of an order, keeping its totals.
    async fn update_order_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, ServiceError>;

    /// Deletes an order; `false` when it did not exist.
    async fn delete_order(&self, order: OrderId) -> Result<bool, ServiceError>;
}
