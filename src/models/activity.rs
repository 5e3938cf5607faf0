// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity-log item models: the raw API shape and the normalized UI record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Keep a field that is present with an explicit `null` as `Some(Value::Null)`.
///
/// Paired with `#[serde(default)]`, an absent key stays `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Decode a nested mapping, treating anything that is not an object as absent.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(T::deserialize(value).ok())
}

/// Activity item as returned by the activity-log API.
///
/// Nothing about this shape is guaranteed, so every field is optional. Presence
/// is tracked separately from value: `"summary": null` is present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawActivityItem {
    #[serde(default, deserialize_with = "present")]
    pub activity_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub published: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub summary: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub gridicon: Option<Value>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub actor: Option<RawActor>,
}

/// Actor sub-mapping of a raw activity item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawActor {
    #[serde(default, deserialize_with = "lenient_object")]
    pub icon: Option<RawActorIcon>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub external_user_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub wpcom_user_id: Option<Value>,
}

/// Actor avatar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawActorIcon {
    #[serde(default, deserialize_with = "present")]
    pub url: Option<Value>,
}

impl RawActivityItem {
    /// Decode one element of `orderedItems`.
    ///
    /// Returns `None` for elements that are not JSON objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// Whether the named top-level property exists on the item.
    pub fn has(&self, prop: &str) -> bool {
        match prop {
            "activity_id" => self.activity_id.is_some(),
            "name" => self.name.is_some(),
            "published" => self.published.is_some(),
            "summary" => self.summary.is_some(),
            "gridicon" => self.gridicon.is_some(),
            "actor" => self.actor.is_some(),
            _ => false,
        }
    }

    /// The `name` field when it is a string.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }
}

/// Activity record in the shape the UI renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NormalizedActivity {
    /// `activity_id`, copied verbatim
    pub activity_id: Value,
    /// `name`, e.g. "post__updated"
    pub activity_name: String,
    /// Leading segment of the name, e.g. "post"
    pub activity_group: String,
    /// `published`, copied verbatim
    pub activity_date: Value,
    /// `published` as epoch milliseconds, `None` if it does not parse
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub activity_ts: Option<i64>,
    pub activity_title: Value,
    pub activity_icon: Value,
    pub actor_avatar_url: Value,
    pub actor_name: Value,
    pub actor_remote_id: Value,
    pub actor_role: Value,
    pub actor_wpcom_id: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_field_counts_as_present() {
        let item = RawActivityItem::from_value(&json!({ "summary": null })).unwrap();
        assert_eq!(item.summary, Some(Value::Null));
        assert!(item.has("summary"));
        assert!(!item.has("published"));
    }

    #[test]
    fn test_falsy_identifiers_are_present() {
        let item = RawActivityItem::from_value(&json!({ "activity_id": 0, "published": "" }))
            .unwrap();
        assert!(item.has("activity_id"));
        assert!(item.has("published"));
    }

    #[test]
    fn test_non_object_elements_rejected() {
        assert!(RawActivityItem::from_value(&json!("post__updated")).is_none());
        assert!(RawActivityItem::from_value(&json!([1, 2, 3])).is_none());
        assert!(RawActivityItem::from_value(&Value::Null).is_none());
    }

    #[test]
    fn test_non_object_actor_treated_as_absent() {
        let item = RawActivityItem::from_value(&json!({ "actor": "alice" })).unwrap();
        assert!(item.actor.is_none());

        let item = RawActivityItem::from_value(&json!({ "actor": { "icon": 7 } })).unwrap();
        let actor = item.actor.unwrap();
        assert!(actor.icon.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let item = RawActivityItem::from_value(&json!({
            "activity_id": "a1",
            "is_rewindable": true,
            "object": { "type": "Article" }
        }))
        .unwrap();
        assert_eq!(item.activity_id, Some(json!("a1")));
    }

    #[test]
    fn test_name_str_only_for_strings() {
        let item = RawActivityItem::from_value(&json!({ "name": 12 })).unwrap();
        assert!(item.has("name"));
        assert_eq!(item.name_str(), None);
    }

    #[test]
    fn test_normalized_activity_serializes_camel_case() {
        let record = NormalizedActivity {
            activity_id: json!("1"),
            activity_name: "post__updated".to_string(),
            activity_group: "post".to_string(),
            activity_date: json!("2020-01-01T00:00:00Z"),
            activity_ts: Some(1_577_836_800_000),
            activity_title: json!("Post updated"),
            activity_icon: json!("posts"),
            actor_avatar_url: json!("http://x/a.png"),
            actor_name: json!("Alice"),
            actor_remote_id: json!("9"),
            actor_role: json!("admin"),
            actor_wpcom_id: json!(42),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["activityId"], "1");
        assert_eq!(value["activityTs"], 1_577_836_800_000_i64);
        assert_eq!(value["actorWpcomId"], 42);
        assert!(value.get("activity_id").is_none());
    }
}
