//! Per-user food, workout and chat logs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, Utc};
use nutriai_shared::{ChatExchange, FoodLogEntry, WorkoutEntry};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Calendar day of a timestamp on the server's local clock
pub fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Append-only log storage keyed by user id
///
/// Sequences are created lazily on first append and keep insertion order.
/// Entries are never updated or removed. An unknown user id reads as empty.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn append_food(&self, user_id: &str, entry: FoodLogEntry) -> Result<()>;

    async fn append_workout(&self, user_id: &str, entry: WorkoutEntry) -> Result<()>;

    async fn append_chat(&self, user_id: &str, exchange: ChatExchange) -> Result<()>;

    /// Food entries whose timestamp falls on `day` (local clock)
    async fn food_logs_on(&self, user_id: &str, day: NaiveDate) -> Result<Vec<FoodLogEntry>>;

    /// Workouts whose timestamp falls on `day` (local clock)
    async fn workouts_on(&self, user_id: &str, day: NaiveDate) -> Result<Vec<WorkoutEntry>>;

    /// Full chat history in append order
    async fn chat_history(&self, user_id: &str) -> Result<Vec<ChatExchange>>;
}

#[derive(Debug, Default)]
struct Tables {
    food: HashMap<String, Vec<FoodLogEntry>>,
    workouts: HashMap<String, Vec<WorkoutEntry>>,
    chats: HashMap<String, Vec<ChatExchange>>,
}

/// Process-lifetime store; nothing is persisted or evicted
///
/// A single lock guards all tables so concurrent appends are serialized.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    tables: RwLock<Tables>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn append_food(&self, user_id: &str, entry: FoodLogEntry) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.food.entry(user_id.to_string()).or_default().push(entry);
        Ok(())
    }

    async fn append_workout(&self, user_id: &str, entry: WorkoutEntry) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .workouts
            .entry(user_id.to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    async fn append_chat(&self, user_id: &str, exchange: ChatExchange) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .chats
            .entry(user_id.to_string())
            .or_default()
            .push(exchange);
        Ok(())
    }

    async fn food_logs_on(&self, user_id: &str, day: NaiveDate) -> Result<Vec<FoodLogEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .food
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| local_day(e.timestamp) == day)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn workouts_on(&self, user_id: &str, day: NaiveDate) -> Result<Vec<WorkoutEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .workouts
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| local_day(e.timestamp) == day)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn chat_history(&self, user_id: &str) -> Result<Vec<ChatExchange>> {
        let tables = self.tables.read().await;
        Ok(tables.chats.get(user_id).cloned().unwrap_or_default())
    }
}
