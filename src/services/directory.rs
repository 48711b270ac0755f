//! Directory service — list activities, sign up and unregister participants.
//!
//! DESIGN
//! ======
//! The check-then-mutate rules live in synchronous functions over
//! `&mut Directory` so they can be tested without a runtime. The async
//! wrappers take the `AppState` lock for the whole sequence, which keeps
//! an email unique per roster under concurrent requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaves the directory untouched. Capacity is not checked on
//! signup: `max_participants` is informational only.

use tracing::{debug, info};

use crate::state::{AppState, Directory};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

// =============================================================================
// DIRECTORY RULES
// =============================================================================

/// Append `email` to the roster of `activity`.
///
/// # Errors
///
/// `ActivityNotFound` for an unknown activity, `AlreadySignedUp` when the
/// email is already on the roster.
pub fn enroll(directory: &mut Directory, activity: &str, email: &str) -> Result<String, DirectoryError> {
    let entry = directory
        .activities
        .get_mut(activity)
        .ok_or(DirectoryError::ActivityNotFound)?;

    if entry.has_participant(email) {
        return Err(DirectoryError::AlreadySignedUp);
    }

    entry.participants.push(email.to_owned());
    Ok(format!("Signed up {email} for {activity}"))
}

/// Drop `email` from the roster of `activity`, keeping the order of the rest.
///
/// # Errors
///
/// `ActivityNotFound` for an unknown activity, `NotSignedUp` when the email
/// is not on the roster.
pub fn remove(directory: &mut Directory, activity: &str, email: &str) -> Result<String, DirectoryError> {
    let entry = directory
        .activities
        .get_mut(activity)
        .ok_or(DirectoryError::ActivityNotFound)?;

    let Some(index) = entry.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::NotSignedUp);
    };

    entry.participants.remove(index);
    Ok(format!("Removed {email} from {activity}"))
}

// =============================================================================
// SERVICE
// =============================================================================

/// Snapshot of every activity and its roster.
pub async fn list_activities(state: &AppState) -> Directory {
    state.directory.read().await.clone()
}

/// Sign a student up for an activity.
///
/// # Errors
///
/// See [`enroll`].
pub async fn signup(state: &AppState, activity: &str, email: &str) -> Result<String, DirectoryError> {
    let result = {
        let mut directory = state.directory.write().await;
        enroll(&mut directory, activity, email)
    };

    match &result {
        Ok(_) => info!(%activity, %email, "participant signed up"),
        Err(e) => debug!(%activity, %email, error = %e, "signup rejected"),
    }
    result
}

/// Unregister a student from an activity.
///
/// # Errors
///
/// See [`remove`].
pub async fn unregister(state: &AppState, activity: &str, email: &str) -> Result<String, DirectoryError> {
    let result = {
        let mut directory = state.directory.write().await;
        remove(&mut directory, activity, email)
    };

    match &result {
        Ok(_) => info!(%activity, %email, "participant removed"),
        Err(e) => debug!(%activity, %email, error = %e, "removal rejected"),
    }
    result
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
