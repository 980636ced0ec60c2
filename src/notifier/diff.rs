use serde_json::Value;

use crate::services::{mpris::Notification, radiotray::PlayerState};

/// One field that differs between two consecutive player states.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    /// Field name
    pub field: String,
    /// Value in the previous snapshot, if the field existed
    pub old_value: Option<Value>,
    /// Value in the new snapshot
    pub new_value: Value,
}

/// Compares two player states field by field.
///
/// A field is reported when its new value differs from the old one. A field
/// missing from the old state compares as `null`, so a new `null` field is
/// not a change. Fields that disappeared are not reported. Changes come out
/// in the order the player reported the fields.
pub fn diff_states(old: &PlayerState, new: &PlayerState) -> Vec<StateChange> {
    new.iter()
        .filter(|(field, value)| old.get(field.as_str()).unwrap_or(&Value::Null) != *value)
        .map(|(field, value)| StateChange {
            field: field.clone(),
            old_value: old.get(field.as_str()).cloned(),
            new_value: value.clone(),
        })
        .collect()
}

/// Notification announced when `field` changes to `value`, if any.
pub fn field_notification(field: &str, value: &Value) -> Option<Notification> {
    match field {
        "artist" | "title" => Some(Notification::Metadata),
        "mute" | "volume" => Some(Notification::Volume),
        "state" => match value.as_str() {
            Some("stopped") => Some(Notification::PlaybackPause),
            Some("playing") => Some(Notification::PlaybackState),
            _ => None,
        },
        _ => None,
    }
}

/// Distinct notifications for a batch of changes, in field order.
pub fn notifications_for(changes: &[StateChange]) -> Vec<Notification> {
    let mut notifications = Vec::new();
    for change in changes {
        if let Some(notification) = field_notification(&change.field, &change.new_value)
            && !notifications.contains(&notification)
        {
            notifications.push(notification);
        }
    }
    notifications
}
