use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::asset::null_as_default;

/// Entity type used when querying the activity log for assets.
pub const ASSET_ENTITY_TYPE: &str = "ASSET";

/// The user or integration that performed an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityActor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Append-only audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, alias = "createdAt")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub actor: Option<ActivityActor>,
    #[serde(default)]
    pub details: Option<String>,
}

impl Activity {
    /// Name shown for the actor; entries without one were written by the system.
    pub fn actor_name(&self) -> &str {
        self.actor
            .as_ref()
            .and_then(|a| a.display_name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("System")
    }
}

/// Order entries newest first. Timestamps are compared as instants, so mixed
/// offsets order correctly; unparseable ones fall back to string order and
/// entries without a timestamp go last.
pub fn sort_newest_first(entries: &mut [Activity]) {
    entries.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
        (Some(x), Some(y)) => match (parse_instant(x), parse_instant(y)) {
            (Some(tx), Some(ty)) => ty.cmp(&tx),
            _ => y.cmp(x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn parse_instant(ts: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(ts.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, ts: Option<&str>) -> Activity {
        Activity {
            id: id.into(),
            entity_type: ASSET_ENTITY_TYPE.into(),
            entity_id: "a-1".into(),
            action: "UPDATED".into(),
            timestamp: ts.map(String::from),
            actor: None,
            details: None,
        }
    }

    #[test]
    fn deserializes_created_at_alias() {
        let a: Activity = serde_json::from_value(json!({
            "id": "act-1",
            "entityType": "ASSET",
            "entityId": "a-1",
            "action": "ASSIGNED",
            "createdAt": "2026-01-20T21:35:00Z",
            "actor": { "id": "u-1", "displayName": "Dana Scully" },
            "details": "Assigned to Fox Mulder"
        }))
        .unwrap();
        assert_eq!(a.timestamp.as_deref(), Some("2026-01-20T21:35:00Z"));
        assert_eq!(a.actor_name(), "Dana Scully");
    }

    #[test]
    fn missing_actor_is_system() {
        let a = entry("x", None);
        assert_eq!(a.actor_name(), "System");
    }

    #[test]
    fn sorts_newest_first_with_missing_last() {
        let mut list = vec![
            entry("old", Some("2025-01-01T00:00:00Z")),
            entry("none", None),
            entry("new", Some("2026-02-01T00:00:00Z")),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "none"]);
    }

    #[test]
    fn mixed_offsets_sort_by_instant() {
        // 10:00+02:00 is 08:00Z, an hour before 09:00Z.
        let mut list = vec![
            entry("berlin", Some("2026-01-20T10:00:00+02:00")),
            entry("utc", Some("2026-01-20T09:00:00Z")),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["utc", "berlin"]);
    }

    #[test]
    fn null_fields_do_not_reject_the_log() {
        let list: Vec<Activity> = serde_json::from_value(json!([
            { "id": "x1", "action": "CREATED", "createdAt": "2026-01-01T00:00:00Z" },
            { "id": "x2", "action": null, "entityType": null },
            { "action": "UPDATED", "actor": { "displayName": "Dana Scully" } }
        ]))
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].action, "");
        assert_eq!(list[1].entity_type, "");
        assert_eq!(list[2].id, "");
        assert_eq!(list[2].actor_name(), "Dana Scully");
    }
}
