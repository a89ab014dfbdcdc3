//! Locally cached user profile

use crate::storage::{KeyValueStore, LocalCache};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key of the profile
pub const PROFILE_KEY: &str = "userProfile";

/// Window used when no history window is given
pub const DEFAULT_HISTORY_DAYS: i64 = 7;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A recorded activity; any extra fields are kept as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub goals: Map<String, Value>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl UserProfile {
    /// Fresh profile with a generated id and nothing else
    pub fn generate() -> Self {
        Self {
            user_id: generate_user_id(Utc::now(), &mut rand::thread_rng()),
            settings: Map::new(),
            goals: Map::new(),
            history: Vec::new(),
        }
    }
}

/// `user_<epoch millis>_<9 base36 chars>`
pub fn generate_user_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("user_{}_{}", now.timestamp_millis(), suffix)
}

/// Profile kept in local storage
///
/// Every mutation writes the whole profile back.
pub struct UserProfileCache<S> {
    cache: LocalCache<S>,
    profile: UserProfile,
}

impl<S: KeyValueStore> UserProfileCache<S> {
    /// Load the stored profile, or start a new one (not saved until the
    /// first mutation)
    pub fn new(store: S) -> Self {
        let cache = LocalCache::new(store);
        let profile = cache
            .load(PROFILE_KEY)
            .unwrap_or_else(UserProfile::generate);
        Self { cache, profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn user_id(&self) -> &str {
        &self.profile.user_id
    }

    pub fn save(&self) {
        self.cache.save(PROFILE_KEY, &self.profile);
    }

    /// Shallow-merge into the settings; given keys win
    pub fn update_settings(&mut self, settings: Map<String, Value>) {
        self.profile.settings.extend(settings);
        self.save();
    }

    /// Shallow-merge into the goals; given keys win
    pub fn update_goals(&mut self, goals: Map<String, Value>) {
        self.profile.goals.extend(goals);
        self.save();
    }

    /// Append an entry stamped with the current time
    ///
    /// A `type` field becomes the entry kind; a `timestamp` field is replaced.
    pub fn add_to_history(&mut self, mut entry: Map<String, Value>) {
        entry.remove("timestamp");
        let kind = match entry.remove("type") {
            Some(Value::String(kind)) => Some(kind),
            Some(other) => {
                entry.insert("type".to_string(), other);
                None
            }
            None => None,
        };

        self.profile.history.push(HistoryEntry {
            kind,
            timestamp: Utc::now(),
            data: entry,
        });
        self.save();
    }

    /// Entries of `kind` recorded within the last `days` days
    pub fn history(&self, kind: &str, days: i64) -> Vec<&HistoryEntry> {
        let cutoff = Utc::now() - Duration::days(days);
        self.profile
            .history
            .iter()
            .filter(|entry| entry.kind.as_deref() == Some(kind) && entry.timestamp >= cutoff)
            .collect()
    }
}
