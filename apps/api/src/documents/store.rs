//! Document storage: pluggable backend for saved resumes.
//!
//! `PgDocumentStore` is the production backend. `MemoryDocumentStore` backs tests and
//! `STORAGE=memory` local runs. Every lookup is scoped by `user_id`, so another
//! user's document is indistinguishable from a missing one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeTemplate, SavedResumeRow};

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: String,
    pub title: String,
    pub template: ResumeTemplate,
    pub data: Value,
}

/// `None` fields keep their stored value; `data` always replaces.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub template: Option<ResumeTemplate>,
    pub data: Value,
}

/// Held in `AppState` as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(&self, doc: NewDocument) -> Result<SavedResumeRow, AppError>;

    /// Most recently updated first.
    async fn list(&self, user_id: &str) -> Result<Vec<SavedResumeRow>, AppError>;

    async fn get(&self, user_id: &str, id: Uuid) -> Result<Option<SavedResumeRow>, AppError>;

    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        update: DocumentUpdate,
    ) -> Result<Option<SavedResumeRow>, AppError>;

    /// Returns whether a document was deleted.
    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, doc: NewDocument) -> Result<SavedResumeRow, AppError> {
        let row = sqlx::query_as::<_, SavedResumeRow>(
            r#"
            INSERT INTO saved_resumes (id, user_id, title, template, data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&doc.user_id)
        .bind(&doc.title)
        .bind(doc.template.as_str())
        .bind(&doc.data)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavedResumeRow>, AppError> {
        let rows = sqlx::query_as::<_, SavedResumeRow>(
            "SELECT * FROM saved_resumes WHERE user_id = $1 ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, user_id: &str, id: Uuid) -> Result<Option<SavedResumeRow>, AppError> {
        let row = sqlx::query_as::<_, SavedResumeRow>(
            "SELECT * FROM saved_resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        update: DocumentUpdate,
    ) -> Result<Option<SavedResumeRow>, AppError> {
        let row = sqlx::query_as::<_, SavedResumeRow>(
            r#"
            UPDATE saved_resumes
            SET title = COALESCE($3, title),
                template = COALESCE($4, template),
                data = $5,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(update.title)
        .bind(update.template.map(|t| t.as_str()))
        .bind(&update.data)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryDocumentStore {
    rows: RwLock<HashMap<Uuid, SavedResumeRow>>,
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, doc: NewDocument) -> Result<SavedResumeRow, AppError> {
        let now = Utc::now();
        let row = SavedResumeRow {
            id: Uuid::new_v4(),
            user_id: doc.user_id,
            title: doc.title,
            template: doc.template.as_str().to_string(),
            data: doc.data,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavedResumeRow>, AppError> {
        let mut rows: Vec<SavedResumeRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }

    async fn get(&self, user_id: &str, id: Uuid) -> Result<Option<SavedResumeRow>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .get(&id)
            .filter(|r| r.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        update: DocumentUpdate,
    ) -> Result<Option<SavedResumeRow>, AppError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id).filter(|r| r.user_id == user_id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(template) = update.template {
            row.template = template.as_str().to_string();
        }
        row.data = update.data;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        if rows.get(&id).is_some_and(|r| r.user_id == user_id) {
            rows.remove(&id);
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_doc(user_id: &str, title: &str) -> NewDocument {
        NewDocument {
            user_id: user_id.to_string(),
            title: title.to_string(),
            template: ResumeTemplate::Classic,
            data: json!({"name": "Ada", "_layout": {"compactMode": false}}),
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryDocumentStore::default();
        let created = store.create(new_doc("u1", "First")).await.unwrap();

        let fetched = store.get("u1", created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "First");
        assert_eq!(fetched.data["_layout"]["compactMode"], json!(false));
    }

    #[tokio::test]
    async fn test_memory_store_scopes_by_user() {
        let store = MemoryDocumentStore::default();
        let created = store.create(new_doc("u1", "Mine")).await.unwrap();
        store.create(new_doc("u2", "Theirs")).await.unwrap();

        assert!(store.get("u2", created.id).await.unwrap().is_none());
        assert!(!store.delete("u2", created.id).await.unwrap());
        assert_eq!(store.list("u1").await.unwrap().len(), 1);

        let update = DocumentUpdate {
            title: Some("Stolen".to_string()),
            template: None,
            data: json!({}),
        };
        assert!(store.update("u2", created.id, update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_update_keeps_unset_fields() {
        let store = MemoryDocumentStore::default();
        let created = store.create(new_doc("u1", "Original")).await.unwrap();

        let updated = store
            .update(
                "u1",
                created.id,
                DocumentUpdate {
                    title: None,
                    template: Some(ResumeTemplate::Minimal),
                    data: json!({"name": "Ada L."}),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Original");
        assert_eq!(updated.template, "minimal");
        assert_eq!(updated.data, json!({"name": "Ada L."}));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_memory_store_delete() {
        let store = MemoryDocumentStore::default();
        let created = store.create(new_doc("u1", "Gone")).await.unwrap();
        assert!(store.delete("u1", created.id).await.unwrap());
        assert!(store.get("u1", created.id).await.unwrap().is_none());
        assert!(!store.delete("u1", created.id).await.unwrap());
    }
}
