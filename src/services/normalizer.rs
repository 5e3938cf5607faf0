// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-log normalization.
//!
//! Turns an activity-log API response into [`NormalizedActivity`] records:
//! 1. Extract `orderedItems` (absent means empty)
//! 2. Drop items that fail [`validate_item`]
//! 3. Map each remaining item with [`process_item`]
//!
//! Invalid items are dropped without being reported. Only a response whose
//! top-level shape is wrong produces an error.

use crate::models::{NormalizedActivity, RawActivityItem, RawActor};
use crate::time_utils::parse_timestamp_millis;
use serde_json::Value;
use std::str::FromStr;

/// Properties an item must carry to be shown.
pub const ACTIVITY_REQUIRED_PROPS: [&str; 4] = ["activity_id", "name", "published", "summary"];

/// Activity names the UI knows how to render.
pub const ACTIVITY_ALLOWLIST: [&str; 1] = ["post__updated"];

pub const DEFAULT_GRAVATAR_URL: &str = "https://www.gravatar.com/avatar/0";
pub const DEFAULT_GRIDICON: &str = "info-outline";

/// Separates the group from the action in an activity name.
pub const ACTIVITY_GROUP_SEPARATOR: &str = "__";

/// Errors for responses that cannot be normalized at all.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Malformed activity log response: {0}")]
    MalformedResponse(String),
}

/// Fallbacks used for actor fields missing from an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActorDefaults {
    /// Every missing actor field falls back to [`DEFAULT_GRAVATAR_URL`].
    #[default]
    Legacy,
    /// Avatar falls back to [`DEFAULT_GRAVATAR_URL`], name and role to `""`,
    /// identifiers to `null`.
    FieldAppropriate,
}

impl FromStr for ActorDefaults {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "field" | "field_appropriate" | "field-appropriate" => Ok(Self::FieldAppropriate),
            other => Err(format!(
                "unknown actor defaults '{}' (expected 'legacy' or 'field')",
                other
            )),
        }
    }
}

/// Knobs for [`from_api_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    pub actor_defaults: ActorDefaults,
}

/// Normalize an activity-log response with default options.
pub fn from_api(response: &Value) -> Result<Vec<NormalizedActivity>, NormalizeError> {
    from_api_with(response, NormalizerOptions::default())
}

/// Normalize an activity-log response.
///
/// Output order matches the order of `orderedItems`.
pub fn from_api_with(
    response: &Value,
    options: NormalizerOptions,
) -> Result<Vec<NormalizedActivity>, NormalizeError> {
    let items = ordered_items(response)?;

    let activities: Vec<NormalizedActivity> = items
        .iter()
        .filter_map(RawActivityItem::from_value)
        .filter(validate_item)
        .map(|item| process_item(&item, options))
        .collect();

    let dropped = items.len() - activities.len();
    if dropped > 0 {
        tracing::debug!(
            received = items.len(),
            dropped,
            "Dropped unsupported or incomplete activity items"
        );
    }

    Ok(activities)
}

/// Borrow the `orderedItems` array, checking the response shape first.
fn ordered_items(response: &Value) -> Result<&[Value], NormalizeError> {
    let body = response.as_object().ok_or_else(|| {
        NormalizeError::MalformedResponse(format!(
            "expected a JSON object, found {}",
            json_type(response)
        ))
    })?;

    match body.get("orderedItems") {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(NormalizeError::MalformedResponse(format!(
            "'orderedItems' must be an array, found {}",
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether an item carries every required property and an allow-listed name.
pub fn validate_item(item: &RawActivityItem) -> bool {
    ACTIVITY_REQUIRED_PROPS.iter().all(|prop| item.has(prop))
        && item.name_str().is_some_and(is_allowlisted)
}

pub fn is_allowlisted(name: &str) -> bool {
    ACTIVITY_ALLOWLIST.contains(&name)
}

/// Leading segment of an activity name, up to the first separator.
pub fn activity_group(name: &str) -> &str {
    name.split_once(ACTIVITY_GROUP_SEPARATOR)
        .map_or(name, |(group, _)| group)
}

/// Map a validated item to its UI record. Does not re-validate.
pub fn process_item(item: &RawActivityItem, options: NormalizerOptions) -> NormalizedActivity {
    let base = process_item_base(item);
    let actor = process_item_actor(item.actor.as_ref(), options.actor_defaults);

    NormalizedActivity {
        activity_id: base.id,
        activity_name: base.name,
        activity_group: base.group,
        activity_date: base.date,
        activity_ts: base.ts,
        activity_title: base.title,
        activity_icon: base.icon,
        actor_avatar_url: actor.avatar_url,
        actor_name: actor.name,
        actor_remote_id: actor.remote_id,
        actor_role: actor.role,
        actor_wpcom_id: actor.wpcom_id,
    }
}

struct ActivityBase {
    id: Value,
    name: String,
    group: String,
    date: Value,
    ts: Option<i64>,
    title: Value,
    icon: Value,
}

struct ActorFields {
    avatar_url: Value,
    name: Value,
    remote_id: Value,
    role: Value,
    wpcom_id: Value,
}

fn process_item_base(item: &RawActivityItem) -> ActivityBase {
    let name = item.name_str().unwrap_or_default();
    let date = item.published.clone().unwrap_or(Value::Null);
    let ts = date.as_str().and_then(parse_timestamp_millis);

    ActivityBase {
        id: item.activity_id.clone().unwrap_or(Value::Null),
        name: name.to_string(),
        group: activity_group(name).to_string(),
        date,
        ts,
        title: value_or(item.summary.as_ref(), ""),
        icon: value_or(item.gridicon.as_ref(), DEFAULT_GRIDICON),
    }
}

fn process_item_actor(actor: Option<&RawActor>, defaults: ActorDefaults) -> ActorFields {
    let (text_default, id_default) = match defaults {
        ActorDefaults::Legacy => (
            DEFAULT_GRAVATAR_URL,
            Value::String(DEFAULT_GRAVATAR_URL.to_string()),
        ),
        ActorDefaults::FieldAppropriate => ("", Value::Null),
    };

    let avatar_url = actor
        .and_then(|a| a.icon.as_ref())
        .and_then(|icon| icon.url.as_ref());

    ActorFields {
        avatar_url: value_or(avatar_url, DEFAULT_GRAVATAR_URL),
        name: value_or(actor.and_then(|a| a.name.as_ref()), text_default),
        remote_id: actor
            .and_then(|a| a.external_user_id.clone())
            .unwrap_or_else(|| id_default.clone()),
        role: value_or(actor.and_then(|a| a.role.as_ref()), text_default),
        wpcom_id: actor
            .and_then(|a| a.wpcom_user_id.clone())
            .unwrap_or(id_default),
    }
}

/// A field copied verbatim, or the string `default` when it is absent.
///
/// A present `null` is kept as `null`.
fn value_or(value: Option<&Value>, default: &str) -> Value {
    value
        .cloned()
        .unwrap_or_else(|| Value::String(default.to_string()))
}
