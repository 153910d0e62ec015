//! Document stores and the per-record document backend.

use std::{fmt, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::store::Entity;

use super::{Backend, Change, KeyValueStore, PersistenceError};

/// One stored document: the id lives beside the body, not inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

/// Remote-style document collections addressed by name.
#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in `collection`.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, PersistenceError>;

    /// Create a document with a caller-chosen id.
    async fn create(&self, collection: &str, document: Document) -> Result<(), PersistenceError>;

    /// Replace the body of an existing document.
    async fn update(&self, collection: &str, document: Document) -> Result<(), PersistenceError>;

    /// Delete a document by id.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), PersistenceError>;
}

/// Document store kept in a key-value store under `{collection}:{id}` keys.
pub struct KvDocumentStore {
    kv: Arc<dyn KeyValueStore>,
}

impl KvDocumentStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{collection}:{id}")
    }
}

impl fmt::Debug for KvDocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvDocumentStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentStore for KvDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, PersistenceError> {
        let prefix = format!("{collection}:");
        let entries = self.kv.scan(&prefix)?;
        let mut documents = Vec::with_capacity(entries.len());

        for (key, bytes) in entries {
            let id = key.strip_prefix(&prefix).unwrap_or(&key).to_owned();

            match serde_json::from_slice::<Map<String, Value>>(&bytes) {
                Ok(data) => documents.push(Document { id, data }),
                Err(error) => {
                    warn!(collection, document_id = %id, %error, "skipping undecodable document");
                }
            }
        }

        Ok(documents)
    }

    async fn create(&self, collection: &str, document: Document) -> Result<(), PersistenceError> {
        self.kv.set(
            &Self::key(collection, &document.id),
            &serde_json::to_vec(&document.data)?,
        )
    }

    async fn update(&self, collection: &str, document: Document) -> Result<(), PersistenceError> {
        self.create(collection, document).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), PersistenceError> {
        self.kv.delete(&Self::key(collection, id))
    }
}

/// Backend issuing one document call per change.
pub struct DocumentBackend<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> DocumentBackend<E> {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    fn to_document(record: &E) -> Result<Document, PersistenceError> {
        let Value::Object(mut data) = serde_json::to_value(record)? else {
            return Err(PersistenceError::MalformedDocument(
                record.id().as_str().to_owned(),
            ));
        };

        data.remove("id");

        Ok(Document {
            id: record.id().as_str().to_owned(),
            data,
        })
    }

    fn from_document(document: Document) -> Result<E, serde_json::Error> {
        let Document { id, mut data } = document;

        data.insert("id".to_owned(), Value::String(id));

        serde_json::from_value(Value::Object(data))
    }
}

impl<E> fmt::Debug for DocumentBackend<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBackend").finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Entity> Backend<E> for DocumentBackend<E> {
    async fn load(&self) -> Result<Vec<E>, PersistenceError> {
        let documents = self.store.list(E::COLLECTION).await?;
        let mut records = Vec::with_capacity(documents.len());

        for document in documents {
            let id = document.id.clone();

            match Self::from_document(document) {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(
                        collection = E::COLLECTION,
                        document_id = %id,
                        %error,
                        "skipping undecodable document"
                    );
                }
            }
        }

        debug!(
            collection = E::COLLECTION,
            record_count = records.len(),
            "fetched documents"
        );

        Ok(records)
    }

    async fn save(&self, change: Change<'_, E>, _snapshot: &[E]) -> Result<(), PersistenceError> {
        match change {
            Change::Created(record) => {
                self.store
                    .create(E::COLLECTION, Self::to_document(record)?)
                    .await
            }
            Change::Updated(record) => {
                self.store
                    .update(E::COLLECTION, Self::to_document(record)?)
                    .await
            }
            Change::Deleted(id) => self.store.delete(E::COLLECTION, id.as_str()).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::orders::{Order, OrderStatus},
        ids::TypedId,
        persistence::{KeyValueStore, MemoryKeyValueStore},
    };

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[tokio::test]
    async fn kv_documents_round_trip_by_collection() -> TestResult {
        let store = KvDocumentStore::new(Arc::new(MemoryKeyValueStore::new()));

        store
            .create(
                "dishes",
                Document {
                    id: "a1".to_string(),
                    data: object(json!({ "name": "Ndolé" })),
                },
            )
            .await?;

        store
            .create(
                "users",
                Document {
                    id: "u1".to_string(),
                    data: object(json!({ "name": "Awa" })),
                },
            )
            .await?;

        let dishes = store.list("dishes").await?;

        assert_eq!(dishes.len(), 1, "only the dishes collection should be listed");
        assert_eq!(dishes.first().map(|d| d.id.as_str()), Some("a1"));

        store.delete("dishes", "a1").await?;

        assert!(store.list("dishes").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn kv_list_skips_undecodable_bodies() -> TestResult {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set("orders:good", br#"{"name":"Awa"}"#)?;
        kv.set("orders:list", b"[1,2,3]")?;
        kv.set("orders:torn", b"{\"name\":")?;

        let store = KvDocumentStore::new(kv);
        let documents = store.list("orders").await?;

        assert_eq!(
            documents.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            vec!["good"]
        );

        let orders = DocumentBackend::<Order>::new(Arc::new(store)).load().await?;
        let order = orders.first().ok_or("expected one order")?;

        assert_eq!(orders.len(), 1);
        assert_eq!(order.name, "Awa");

        Ok(())
    }

    #[tokio::test]
    async fn load_fills_defaults_for_sparse_orders() -> TestResult {
        let mut store = MockDocumentStore::new();

        store.expect_list().returning(|_| {
            Ok(vec![Document {
                id: "remote-7".to_string(),
                data: object(json!({ "cartItems": [{ "name": "Poulet DG", "price": 4500, "quantity": 2 }] })),
            }])
        });

        let orders = DocumentBackend::<Order>::new(Arc::new(store)).load().await?;
        let order = orders.first().ok_or("expected one order")?;

        assert_eq!(order.id, TypedId::from("remote-7"));
        assert_eq!(order.summary.status, OrderStatus::Paid);
        assert_eq!(order.summary.total_price, 0);
        assert_eq!(order.name, "");
        assert_eq!(order.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn load_skips_undecodable_documents() -> TestResult {
        let mut store = MockDocumentStore::new();

        store.expect_list().returning(|_| {
            Ok(vec![
                Document {
                    id: "good".to_string(),
                    data: Map::new(),
                },
                Document {
                    id: "bad".to_string(),
                    data: object(json!({ "orderSummary": { "status": "Lost" } })),
                },
            ])
        });

        let orders = DocumentBackend::<Order>::new(Arc::new(store)).load().await?;

        assert_eq!(orders.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn save_sends_body_without_id() -> TestResult {
        let mut store = MockDocumentStore::new();

        store
            .expect_update()
            .withf(|collection, document| {
                collection == "orders"
                    && document.id == "o-1"
                    && !document.data.contains_key("id")
                    && document.data.contains_key("orderSummary")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let backend = DocumentBackend::<Order>::new(Arc::new(store));
        let order: Order = serde_json::from_value(json!({ "id": "o-1" }))?;

        backend
            .save(Change::Updated(&order), std::slice::from_ref(&order))
            .await?;

        Ok(())
    }
}
