//! Message model ↔ entity mapping

use kollab_core::{DeliveryState, Message, RelayError};

use crate::models::MessageModel;

impl TryFrom<MessageModel> for Message {
    type Error = RelayError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let state = DeliveryState::from_rank(model.state).ok_or_else(|| {
            RelayError::Persistence(format!(
                "invalid delivery state rank {} for message {}",
                model.state, model.id
            ))
        })?;

        Ok(Self {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            content: model.content,
            campaign_id: model.campaign_id,
            state,
            created_at: model.created_at,
        })
    }
}
