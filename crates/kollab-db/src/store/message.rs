//! PostgreSQL implementation of MessageStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use kollab_core::{DeliveryState, Message, MessageStore, NewMessage, RelayError, StoreResult};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageStore
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new PgMessageStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &NewMessage) -> StoreResult<Message> {
        let model = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (id, sender_id, receiver_id, content, campaign_id, state, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, sender_id, receiver_id, content, campaign_id, state, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.sender_id)
        .bind(&draft.receiver_id)
        .bind(&draft.content)
        .bind(draft.campaign_id.as_deref())
        .bind(DeliveryState::Sent.rank())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Message::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Message>> {
        let model = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, receiver_id, content, campaign_id, state, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Message::try_from).transpose()
    }

    /// Forward-only state advance as a single compare-and-set statement.
    /// Zero rows updated means the transition was backward (no-op) or the
    /// message does not exist; the follow-up read distinguishes the two.
    #[instrument(skip(self))]
    async fn update_state(&self, id: Uuid, state: DeliveryState) -> StoreResult<Message> {
        let updated = sqlx::query_as::<_, MessageModel>(
            r#"
            UPDATE messages
            SET state = $2
            WHERE id = $1 AND state < $2
            RETURNING id, sender_id, receiver_id, content, campaign_id, state, created_at
            "#,
        )
        .bind(id)
        .bind(state.rank())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = updated {
            return Message::try_from(model);
        }

        self.find_by_id(id)
            .await?
            .ok_or(RelayError::MessageNotFound(id))
    }

    #[instrument(skip(self))]
    async fn find_between(&self, user_a: &str, user_b: &str) -> StoreResult<Vec<Message>> {
        let models = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, receiver_id, content, campaign_id, state, created_at
            FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Message::try_from).collect()
    }
}
