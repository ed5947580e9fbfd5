//! Wire data model for the Opinionate backend
//!
//! Server records are kept opaque beyond the fields the client actually
//! reads: everything else rides along in a flattened map and is replaced
//! wholesale with each response.

use crate::upload::SelectedFile;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The current user's profile. Replaced wholesale on every successful
/// fetch or avatar upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A topic as listed by GET /topics. The id keys the per-user vote state;
/// the rest of the record is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Topic {
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    pub fn up_votes(&self) -> i64 {
        self.extra.get("up_votes").and_then(Value::as_i64).unwrap_or(0)
    }

    pub fn down_votes(&self) -> i64 {
        self.extra.get("down_votes").and_then(Value::as_i64).unwrap_or(0)
    }
}

// Datastore keys serialize as numbers; JSON object keys are strings. Ids
// are normalized to strings so both sides of the vote-state lookup agree.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "topic id must be a string or number, got {}",
            other
        ))),
    }
}

/// Payload of GET /topics: the list plus the caller's voting state, all
/// replaced together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicsSnapshot {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub can_vote: bool,
    #[serde(default)]
    pub my_topics: HashMap<String, Value>,
    #[serde(default)]
    pub my_votes: HashMap<String, Value>,
}

/// Payload of PUT /topics/{id}/{vote}: the updated topic and the full
/// authoritative vote set.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteReceipt {
    pub topic: Topic,
    #[serde(default)]
    pub my_votes: HashMap<String, Value>,
}

/// Direction of a vote; becomes the final path segment of the vote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChoice {
    Up,
    Down,
}

impl VoteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Up => "up",
            VoteChoice::Down => "down",
        }
    }
}

impl std::str::FromStr for VoteChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteChoice::Up),
            "down" => Ok(VoteChoice::Down),
            other => Err(format!("vote must be 'up' or 'down', got '{}'", other)),
        }
    }
}

/// One field of a multipart submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text(String),
    File(SelectedFile),
}

/// Client-held form state for a topic that has not been submitted yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicDraft {
    pub name: String,
    /// Comma-separated; the server does the splitting.
    pub tags: String,
    pub image: Option<SelectedFile>,
}

impl TopicDraft {
    /// Marshal the draft for submission. Empty strings and a missing image
    /// are omitted entirely; the backend tolerates absent fields.
    pub fn form_fields(&self) -> Vec<(&'static str, FormField)> {
        let mut fields = Vec::new();
        if !self.name.is_empty() {
            fields.push(("name", FormField::Text(self.name.clone())));
        }
        if !self.tags.is_empty() {
            fields.push(("tags", FormField::Text(self.tags.clone())));
        }
        if let Some(image) = &self.image {
            fields.push(("image", FormField::File(image.clone())));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_from_number() {
        let topic: Topic = serde_json::from_str(
            r#"{"id": 5066549580791808, "name": "Pineapple on pizza", "up_votes": 3}"#,
        )
        .unwrap();
        assert_eq!(topic.id, "5066549580791808");
        assert_eq!(topic.name(), Some("Pineapple on pizza"));
        assert_eq!(topic.up_votes(), 3);
        assert_eq!(topic.down_votes(), 0);
    }

    #[test]
    fn test_topic_id_from_string() {
        let topic: Topic = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        assert_eq!(topic.id, "abc123");
    }

    #[test]
    fn test_topic_id_rejects_other_types() {
        assert!(serde_json::from_str::<Topic>(r#"{"id": [1]}"#).is_err());
    }

    #[test]
    fn test_topics_snapshot_wire_shape() {
        let snapshot: TopicsSnapshot = serde_json::from_str(
            r#"{
                "topics": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}],
                "can_vote": true,
                "my_topics": {"1": true},
                "my_votes": {"2": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.topics.len(), 2);
        assert!(snapshot.can_vote);
        assert!(snapshot.my_topics.contains_key("1"));
        assert!(snapshot.my_votes.contains_key("2"));
    }

    #[test]
    fn test_topics_snapshot_defaults_for_anonymous_user() {
        // The backend sends empty vote state when nobody is signed in.
        let snapshot: TopicsSnapshot =
            serde_json::from_str(r#"{"topics": [], "can_vote": false}"#).unwrap();
        assert!(!snapshot.can_vote);
        assert!(snapshot.my_topics.is_empty());
        assert!(snapshot.my_votes.is_empty());
    }

    #[test]
    fn test_vote_receipt_wire_shape() {
        let receipt: VoteReceipt = serde_json::from_str(
            r#"{"topic": {"id": 7, "up_votes": 4}, "my_votes": {"7": 1}}"#,
        )
        .unwrap();
        assert_eq!(receipt.topic.id, "7");
        assert_eq!(receipt.my_votes.len(), 1);
    }

    #[test]
    fn test_profile_keeps_opaque_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"avatar": "/uploads/abc.png", "created": 1427200000, "modified": 1427300000}"#,
        )
        .unwrap();
        assert_eq!(profile.avatar.as_deref(), Some("/uploads/abc.png"));
        assert_eq!(
            profile.extra.get("created").and_then(Value::as_i64),
            Some(1427200000)
        );
    }

    #[test]
    fn test_draft_marshals_only_truthy_fields() {
        let draft = TopicDraft {
            name: "Test".to_string(),
            tags: String::new(),
            image: None,
        };
        let fields = draft.form_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "name");
        assert_eq!(fields[0].1, FormField::Text("Test".to_string()));
    }

    #[test]
    fn test_draft_marshals_all_fields_when_present() {
        let draft = TopicDraft {
            name: "Test".to_string(),
            tags: "food,opinions".to_string(),
            image: Some(SelectedFile {
                name: "pic.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            }),
        };
        let names: Vec<&str> = draft.form_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "tags", "image"]);
    }

    #[test]
    fn test_empty_draft_marshals_nothing() {
        assert!(TopicDraft::default().form_fields().is_empty());
    }

    #[test]
    fn test_vote_choice_parse_and_path_segment() {
        assert_eq!("up".parse::<VoteChoice>().unwrap(), VoteChoice::Up);
        assert_eq!("down".parse::<VoteChoice>().unwrap(), VoteChoice::Down);
        assert!("sideways".parse::<VoteChoice>().is_err());
        assert_eq!(VoteChoice::Up.as_str(), "up");
        assert_eq!(VoteChoice::Down.as_str(), "down");
    }
}
