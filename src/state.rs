//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the activity directory behind a lock. The directory is seeded
//! once at startup and lives for the process lifetime; nothing is persisted.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// ACTIVITY
// =============================================================================

/// One extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human-readable, never parsed.
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order. No duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// All activities keyed by name, in seed order. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    pub activities: IndexMap<String, Activity>,
}

impl Directory {
    #[must_use]
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Directory populated with the startup activity set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::seed::default_activities())
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum, so the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<Directory>>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        Self { directory: Arc::new(RwLock::new(directory)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
