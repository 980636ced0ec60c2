use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of the fields reported by `get_player_state`.
///
/// The player does not publish a schema, so every field is kept as a raw
/// JSON scalar. Fields keep the order the player reported them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerState(Map<String, Value>);

impl PlayerState {
    /// Raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates fields in reported order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the player reported no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field rendered as text; missing fields render as an empty string.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Playback state token, e.g. `"playing"` or `"stopped"`.
    pub fn state(&self) -> String {
        self.text("state")
    }

    /// Current volume in the player's 0-100 range.
    ///
    /// Accepts both integers and numeric strings; out of range values are
    /// clamped.
    pub fn volume(&self) -> Option<u8> {
        let raw = match self.0.get("volume")? {
            Value::Number(number) => number.as_f64()?,
            Value::String(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        Some(raw.clamp(0.0, 100.0) as u8)
    }

    /// Whether the player output is muted.
    pub fn mute(&self) -> bool {
        match self.0.get("mute") {
            Some(Value::Bool(value)) => *value,
            Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
            Some(Value::Number(number)) => number.as_i64().is_some_and(|n| n != 0),
            _ => false,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PlayerState {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Player settings as returned by `get_config`.
pub type PlayerConfig = Map<String, Value>;

/// One bookmark group with its stations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkGroup {
    /// Group name
    pub group: String,
    /// Group image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Stations in this group
    #[serde(default)]
    pub stations: Vec<Station>,
}

/// A bookmarked radio station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station name
    pub name: String,
    /// Stream URL
    pub url: String,
    /// Station image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// All bookmark groups, in the order the player stores them.
pub type Bookmarks = Vec<BookmarkGroup>;
