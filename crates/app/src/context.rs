//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::{error, info};

use crate::{
    config::StoreConfig,
    domain::{
        ReferenceSources,
        blocks::Block,
        categories::Category,
        dashboard::{DashboardService, StoredDashboardService},
        dishes::Dish,
        formations::Formation,
        lessons::Lesson,
        orders::{Order, OrdersService, StoredOrdersService},
        technologies::Technology,
        tutorials::Tutorial,
        users::User,
    },
    persistence::{
        DocumentBackend, DocumentStore, FileKeyValueStore, KeyValueStore, KvDocumentStore,
        PersistenceError, RestDocumentStore, SnapshotBackend,
    },
    store::{Collection, CollectionService, Entity, ReferencePolicy, ServiceError, StoredCollectionService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open data directory")]
    DataDir(#[source] PersistenceError),
}

/// Outcome of loading one collection at start-up.
#[derive(Debug)]
pub struct LoadOutcome {
    pub collection: &'static str,
    pub result: Result<usize, ServiceError>,
}

#[derive(Clone)]
pub struct AppContext {
    pub technologies: Arc<dyn CollectionService<Technology>>,
    pub tutorials: Arc<dyn CollectionService<Tutorial>>,
    pub formations: Arc<dyn CollectionService<Formation>>,
    pub lessons: Arc<dyn CollectionService<Lesson>>,
    pub blocks: Arc<dyn CollectionService<Block>>,
    pub categories: Arc<dyn CollectionService<Category>>,
    pub dishes: Arc<dyn CollectionService<Dish>>,
    pub users: Arc<dyn CollectionService<User>>,
    pub orders: Arc<dyn OrdersService>,
    pub dashboard: Arc<dyn DashboardService>,
}

impl AppContext {
    /// Build application context from storage settings.
    ///
    /// Snapshots go to the data directory. Documents go to the remote store
    /// when one is configured, otherwise to the data directory as well.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn from_config(config: &StoreConfig) -> Result<Self, AppInitError> {
        let kv: Arc<dyn KeyValueStore> = Arc::new(
            FileKeyValueStore::open(&config.data_dir).map_err(AppInitError::DataDir)?,
        );

        let documents: Arc<dyn DocumentStore> = match config.remote_documents() {
            Some(remote) => {
                info!(base_url = %remote.base_url, "using remote document store");
                Arc::new(RestDocumentStore::new(remote))
            }
            None => Arc::new(KvDocumentStore::new(kv.clone())),
        };

        Ok(Self::with_stores(kv, documents, config.reference_policy()))
    }

    /// Wire every collection onto the given stores.
    #[must_use]
    pub fn with_stores(
        kv: Arc<dyn KeyValueStore>,
        documents: Arc<dyn DocumentStore>,
        policy: ReferencePolicy,
    ) -> Self {
        let technologies = snapshot_collection::<Technology>(&kv);
        let tutorials = snapshot_collection::<Tutorial>(&kv);
        let formations = snapshot_collection::<Formation>(&kv);
        let lessons = snapshot_collection::<Lesson>(&kv);
        let blocks = snapshot_collection::<Block>(&kv);
        let categories = snapshot_collection::<Category>(&kv);
        let dishes = document_collection::<Dish>(&documents);
        let users = document_collection::<User>(&documents);
        let orders = document_collection::<Order>(&documents);

        let sources = Arc::new(ReferenceSources {
            technologies: technologies.clone(),
            tutorials: tutorials.clone(),
            formations: formations.clone(),
            lessons: lessons.clone(),
            categories: categories.clone(),
            policy,
        });

        let dashboard = StoredDashboardService {
            technologies: technologies.clone(),
            tutorials: tutorials.clone(),
            formations: formations.clone(),
            lessons: lessons.clone(),
            blocks: blocks.clone(),
            categories: categories.clone(),
            dishes: dishes.clone(),
            users: users.clone(),
            orders: orders.clone(),
        };

        Self {
            technologies: Arc::new(StoredCollectionService::new(technologies, sources.clone())),
            tutorials: Arc::new(StoredCollectionService::new(tutorials, sources.clone())),
            formations: Arc::new(StoredCollectionService::new(formations, sources.clone())),
            lessons: Arc::new(StoredCollectionService::new(lessons, sources.clone())),
            blocks: Arc::new(StoredCollectionService::new(blocks, sources.clone())),
            categories: Arc::new(StoredCollectionService::new(categories, sources.clone())),
            dishes: Arc::new(StoredCollectionService::new(dishes, sources.clone())),
            users: Arc::new(StoredCollectionService::new(users, sources)),
            orders: Arc::new(StoredOrdersService::new(orders)),
            dashboard: Arc::new(dashboard),
        }
    }

    /// Load every collection from storage.
    ///
    /// A collection that fails to load is logged and left empty; the others
    /// still load.
    pub async fn load_all(&self) -> Vec<LoadOutcome> {
        let outcomes = vec![
            outcome::<Technology>(self.technologies.load().await),
            outcome::<Tutorial>(self.tutorials.load().await),
            outcome::<Formation>(self.formations.load().await),
            outcome::<Lesson>(self.lessons.load().await),
            outcome::<Block>(self.blocks.load().await),
            outcome::<Category>(self.categories.load().await),
            outcome::<Dish>(self.dishes.load().await),
            outcome::<User>(self.users.load().await),
            outcome::<Order>(self.orders.fetch_orders().await),
        ];

        for LoadOutcome { collection, result } in &outcomes {
            if let Err(error) = result {
                error!(collection, %error, "failed to load collection");
            }
        }

        outcomes
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

fn snapshot_collection<E: Entity>(kv: &Arc<dyn KeyValueStore>) -> Arc<Collection<E>> {
    Arc::new(Collection::new(Arc::new(SnapshotBackend::<E>::new(
        kv.clone(),
    ))))
}

fn document_collection<E: Entity>(documents: &Arc<dyn DocumentStore>) -> Arc<Collection<E>> {
    Arc::new(Collection::new(Arc::new(DocumentBackend::<E>::new(
        documents.clone(),
    ))))
}

fn outcome<E: Entity>(result: Result<usize, ServiceError>) -> LoadOutcome {
    LoadOutcome {
        collection: E::COLLECTION,
        result,
    }
}
