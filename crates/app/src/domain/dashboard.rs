//! Dashboard

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    domain::{
        blocks::Block, categories::Category, dishes::Dish, formations::Formation,
        lessons::Lesson, orders::Order, orders::OrderStatus, technologies::Technology,
        tutorials::Tutorial, users::User,
    },
    store::Lookup,
};

/// Aggregate figures across every collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub technologies: usize,
    pub active_technologies: usize,
    pub tutorials: usize,
    pub published_tutorials: usize,
    pub formations: usize,
    pub published_formations: usize,
    pub lessons: usize,
    pub blocks: usize,
    pub categories: usize,
    pub dishes: usize,
    pub users: usize,
    pub active_users: usize,
    pub orders: usize,
    pub orders_by_status: FxHashMap<OrderStatus, usize>,

    /// Total price plus delivery fee of every order not cancelled.
    pub revenue: u64,
}

impl DashboardSummary {
    #[must_use]
    pub fn orders_with_status(&self, status: OrderStatus) -> usize {
        self.orders_by_status.get(&status).copied().unwrap_or_default()
    }
}

/// Read handles on the collections the dashboard aggregates.
pub struct StoredDashboardService {
    pub technologies: Arc<dyn Lookup<Technology>>,
    pub tutorials: Arc<dyn Lookup<Tutorial>>,
    pub formations: Arc<dyn Lookup<Formation>>,
    pub lessons: Arc<dyn Lookup<Lesson>>,
    pub blocks: Arc<dyn Lookup<Block>>,
    pub categories: Arc<dyn Lookup<Category>>,
    pub dishes: Arc<dyn Lookup<Dish>>,
    pub users: Arc<dyn Lookup<User>>,
    pub orders: Arc<dyn Lookup<Order>>,
}

impl fmt::Debug for StoredDashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredDashboardService").finish_non_exhaustive()
    }
}

#[async_trait]
impl DashboardService for StoredDashboardService {
    async fn summary(&self) -> DashboardSummary {
        let technologies = self.technologies.list().await;
        let tutorials = self.tutorials.list().await;
        let formations = self.formations.list().await;
        let users = self.users.list().await;
        let orders = self.orders.list().await;

        let mut orders_by_status = FxHashMap::default();
        let mut revenue = 0_u64;

        for order in &orders {
            *orders_by_status.entry(order.summary.status).or_default() += 1;

            if order.summary.status != OrderStatus::Cancelled {
                revenue = revenue.saturating_add(order.amount_due());
            }
        }

        DashboardSummary {
            technologies: technologies.len(),
            active_technologies: technologies.iter().filter(|t| t.active).count(),
            tutorials: tutorials.len(),
            published_tutorials: tutorials.iter().filter(|t| t.publish).count(),
            formations: formations.len(),
            published_formations: formations.iter().filter(|f| f.publish).count(),
            lessons: self.lessons.list().await.len(),
            blocks: self.blocks.list().await.len(),
            categories: self.categories.list().await.len(),
            dishes: self.dishes.list().await.len(),
            users: users.len(),
            active_users: users.iter().filter(|u| u.status).count(),
            orders: orders.len(),
            orders_by_status,
            revenue,
        }
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Computes the summary from the current in-memory records.
    async fn summary(&self) -> DashboardSummary;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        persistence::{Document, DocumentStore, KvDocumentStore},
        test::{TestContext, new_technology, new_tutorial, new_user},
    };

    use super::*;

    async fn place_order(
        store: &KvDocumentStore,
        id: &str,
        status: &str,
        total: u64,
        fee: u64,
    ) -> TestResult {
        let serde_json::Value::Object(data) = json!({
            "name": "Awa",
            "orderSummary": { "status": status, "totalPrice": total, "deliveryFee": fee },
        }) else {
            return Err("expected object".into());
        };

        store
            .create(
                "orders",
                Document {
                    id: id.to_string(),
                    data,
                },
            )
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn summary_counts_records_and_revenue() -> TestResult {
        let ctx = TestContext::new();
        let documents = KvDocumentStore::new(ctx.kv.clone());

        ctx.app.technologies.create(new_technology("Rust", true)).await?;
        ctx.app.technologies.create(new_technology("Cobol", false)).await?;
        ctx.app
            .tutorials
            .create(new_tutorial("Getting started", Vec::new()))
            .await?;
        ctx.app.users.create(new_user("Awa", true)).await?;
        ctx.app.users.create(new_user("Paul", false)).await?;

        place_order(&documents, "o-1", "Paid", 9000, 500).await?;
        place_order(&documents, "o-2", "completed", 3000, 0).await?;
        place_order(&documents, "o-3", "Cancelled", 7000, 500).await?;

        ctx.app.orders.fetch_orders().await?;

        let summary = ctx.app.dashboard.summary().await;

        assert_eq!(summary.technologies, 2);
        assert_eq!(summary.active_technologies, 1);
        assert_eq!(summary.tutorials, 1);
        assert_eq!(summary.published_tutorials, 0);
        assert_eq!(summary.users, 2);
        assert_eq!(summary.active_users, 1);
        assert_eq!(summary.orders, 3);
        assert_eq!(summary.orders_with_status(OrderStatus::Completed), 1);
        assert_eq!(summary.orders_with_status(OrderStatus::Pending), 0);
        assert_eq!(summary.revenue, 12_500);

        Ok(())
    }
}
