/*
 * Sentiment Chatbot CLI - Conversation Store
 * Copyright (c) 2024 Sentiment Chatbot Contributors
 *
 * This work is licensed under the Creative Commons Attribution-NonCommercial 4.0 International License.
 * To view a copy of this license, visit http://creativecommons.org/licenses/by-nc/4.0/
 *
 * You are free to share and adapt this work for non-commercial purposes with attribution.
 * Commercial use is prohibited without explicit written permission.
 *
 * For commercial licensing inquiries, please contact the project maintainers.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::conversation::{Conversation, Message};
use crate::types::StoreError;

/// Keyed conversation storage. `get` hands out snapshots; analysis always
/// runs on a snapshot, never on the live conversation.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn get(&self, conversation_id: &str) -> Option<Conversation>;

    async fn put(&self, conversation: Conversation);

    /// Returns whether a conversation was removed.
    async fn delete(&self, conversation_id: &str) -> bool;

    async fn append_message(&self, conversation_id: &str, message: Message) -> Result<(), StoreError>;

    async fn end_conversation(&self, conversation_id: &str) -> Result<(), StoreError>;

    async fn len(&self) -> usize;
}

type Slot = Arc<Mutex<Conversation>>;

/// One lock per conversation; the outer map lock is only held long enough
/// to find or insert a slot.
#[derive(Default)]
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<String, Slot>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, conversation_id: &str) -> Result<Slot, StoreError> {
        self.conversations
            .read()
            .await
            .get(conversation_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(conversation_id.to_string()))
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, conversation_id: &str) -> Option<Conversation> {
        let slot = self.slot(conversation_id).await.ok()?;
        let conversation = slot.lock().await;
        Some(conversation.clone())
    }

    async fn put(&self, conversation: Conversation) {
        let id = conversation.conversation_id.clone();
        self.conversations
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(conversation)));
    }

    async fn delete(&self, conversation_id: &str) -> bool {
        self.conversations
            .write()
            .await
            .remove(conversation_id)
            .is_some()
    }

    async fn append_message(&self, conversation_id: &str, message: Message) -> Result<(), StoreError> {
        let slot = self.slot(conversation_id).await?;
        slot.lock().await.add_message(message);
        Ok(())
    }

    async fn end_conversation(&self, conversation_id: &str) -> Result<(), StoreError> {
        let slot = self.slot(conversation_id).await?;
        slot.lock().await.end_conversation();
        Ok(())
    }

    async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }
}
