//! Relay Events
//!
//! What the bridge glue tells the index about a source message, and what it
//! should do in the destination channel as a result.
//!
//! The index never talks to the chat platform. A `Skip` action means the
//! message is not eligible for edit/delete propagation and is dropped
//! silently.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::{MirrorIndex, MAX_ID_LENGTH};
use crate::error::{CacheError, Result};

// == Relay Event ==
/// A notification about a source message on a bridged channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayEvent {
    /// The source message was re-posted as `mirror` in the destination channel
    Mirrored { source: String, mirror: String },
    /// The source message was deleted
    Deleted { source: String },
    /// The source message was edited
    Edited { source: String, content: String },
}

impl RelayEvent {
    /// Source message id the event refers to.
    pub fn source(&self) -> &str {
        match self {
            RelayEvent::Mirrored { source, .. }
            | RelayEvent::Deleted { source }
            | RelayEvent::Edited { source, .. } => source,
        }
    }

    /// Checks message ids before they reach the index.
    pub fn validate(&self) -> Result<()> {
        validate_id("source", self.source())?;
        if let RelayEvent::Mirrored { mirror, .. } = self {
            validate_id("mirror", mirror)?;
        }
        Ok(())
    }
}

// == Relay Action ==
/// What the caller should do against the destination channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayAction {
    /// The mirror was recorded; nothing to do
    Recorded,
    /// Delete the mirrored message
    DeleteMirror { mirror: String },
    /// Replace the mirrored message's content
    EditMirror { mirror: String, content: String },
    /// No mirror known; ignore the event
    Skip,
}

// == Apply ==
/// Applies an event to the index and returns the action for the caller.
pub fn apply(index: &mut MirrorIndex, event: RelayEvent) -> RelayAction {
    match event {
        RelayEvent::Mirrored { source, mirror } => {
            debug!(%source, %mirror, "Recording mirror");
            index.record(source, mirror);
            RelayAction::Recorded
        }
        RelayEvent::Deleted { source } => match index.resolve(&source) {
            Some(mirror) => {
                info!(%source, %mirror, "Propagating deletion");
                RelayAction::DeleteMirror { mirror }
            }
            None => RelayAction::Skip,
        },
        RelayEvent::Edited { source, content } => match index.resolve(&source) {
            Some(mirror) => {
                info!(%source, %mirror, "Propagating edit");
                RelayAction::EditMirror { mirror, content }
            }
            None => RelayAction::Skip,
        },
    }
}

/// Rejects empty or oversized message ids.
pub fn validate_id(field: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CacheError::InvalidRequest(format!(
            "{} id cannot be empty",
            field
        )));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "{} id exceeds maximum length of {} bytes",
            field, MAX_ID_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> MirrorIndex {
        MirrorIndex::new(4).unwrap()
    }

    #[test]
    fn test_mirrored_records() {
        let mut index = index();
        let action = apply(
            &mut index,
            RelayEvent::Mirrored {
                source: "src".to_string(),
                mirror: "dst".to_string(),
            },
        );

        assert_eq!(action, RelayAction::Recorded);
        assert!(index.contains("src"));
    }

    #[test]
    fn test_deleted_known_source() {
        let mut index = index();
        index.record("src", "dst");

        let action = apply(
            &mut index,
            RelayEvent::Deleted {
                source: "src".to_string(),
            },
        );

        assert_eq!(
            action,
            RelayAction::DeleteMirror {
                mirror: "dst".to_string()
            }
        );
    }

    #[test]
    fn test_edited_known_source() {
        let mut index = index();
        index.record("src", "dst");

        let action = apply(
            &mut index,
            RelayEvent::Edited {
                source: "src".to_string(),
                content: "fixed typo".to_string(),
            },
        );

        assert_eq!(
            action,
            RelayAction::EditMirror {
                mirror: "dst".to_string(),
                content: "fixed typo".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_source_skips() {
        let mut index = index();

        let deleted = apply(
            &mut index,
            RelayEvent::Deleted {
                source: "gone".to_string(),
            },
        );
        let edited = apply(
            &mut index,
            RelayEvent::Edited {
                source: "gone".to_string(),
                content: "x".to_string(),
            },
        );

        assert_eq!(deleted, RelayAction::Skip);
        assert_eq!(edited, RelayAction::Skip);
        assert_eq!(index.stats().misses, 2);
    }

    #[test]
    fn test_evicted_source_skips() {
        let mut index = MirrorIndex::new(1).unwrap();
        index.record("old", "m1");
        index.record("new", "m2");

        let action = apply(
            &mut index,
            RelayEvent::Deleted {
                source: "old".to_string(),
            },
        );
        assert_eq!(action, RelayAction::Skip);
    }

    #[test]
    fn test_event_json_shape() {
        let event: RelayEvent =
            serde_json::from_str(r#"{"type":"edited","source":"a","content":"hi"}"#).unwrap();
        assert_eq!(
            event,
            RelayEvent::Edited {
                source: "a".to_string(),
                content: "hi".to_string()
            }
        );

        let json = serde_json::to_value(RelayAction::DeleteMirror {
            mirror: "m".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "delete_mirror");
        assert_eq!(json["mirror"], "m");
    }

    #[test]
    fn test_validate() {
        let empty = RelayEvent::Deleted {
            source: String::new(),
        };
        assert!(matches!(
            empty.validate(),
            Err(CacheError::InvalidRequest(_))
        ));

        let long_mirror = RelayEvent::Mirrored {
            source: "src".to_string(),
            mirror: "x".repeat(MAX_ID_LENGTH + 1),
        };
        assert!(long_mirror.validate().is_err());

        let ok = RelayEvent::Mirrored {
            source: "src".to_string(),
            mirror: "x".repeat(MAX_ID_LENGTH),
        };
        assert!(ok.validate().is_ok());
    }
}
