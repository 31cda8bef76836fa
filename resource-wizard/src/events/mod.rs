//! Broadcast naming for resource events
//!
//! Generated event classes broadcast on presence channels named
//! `{account}.resource.{resource}.{suffix}`. The suffix tells listeners which
//! view is affected: `m` (menu), `b` (browse list), and `r`/`e`/`d` followed
//! by the object id for the read, edit and delete views of one object.
//!
//! | action | with object id | without |
//! |---|---|---|
//! | Browse | `b` | `b` |
//! | Read | `r{id}` | nothing |
//! | Add | `m`, `b` | `m`, `b` |
//! | Edit, Delete, Lock, Unlock | `m`, `b`, `r{id}`, `e{id}`, `d{id}` | `m`, `b` |

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Account used when an event does not name one
pub const DEFAULT_ACCOUNT: &str = "default";

/// Resource event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventAction {
    /// Listing was viewed
    Browse,
    /// One object was viewed
    Read,
    /// One object was changed
    Edit,
    /// An object was created
    Add,
    /// An object was removed
    Delete,
    /// An object was locked for editing
    Lock,
    /// An object lock was released
    Unlock,
}

impl EventAction {
    /// All actions, in generation order
    pub const ALL: [Self; 7] = [
        Self::Browse,
        Self::Read,
        Self::Edit,
        Self::Add,
        Self::Delete,
        Self::Lock,
        Self::Unlock,
    ];

    /// Class-name suffix (`Browse`, `Read`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::Read => "Read",
            Self::Edit => "Edit",
            Self::Add => "Add",
            Self::Delete => "Delete",
            Self::Lock => "Lock",
            Self::Unlock => "Unlock",
        }
    }

    /// Past tense used in the broadcast name
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Browse => "browsed",
            Self::Read => "read",
            Self::Edit => "edited",
            Self::Add => "added",
            Self::Delete => "deleted",
            Self::Lock => "locked",
            Self::Unlock => "unlocked",
        }
    }

    /// Browse events are named after the plural resource
    #[must_use]
    pub const fn uses_plural_name(self) -> bool {
        matches!(self, Self::Browse)
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence channels an event broadcasts on
///
/// # Examples
///
/// ```
/// # use resource_wizard::events::{channel_names, EventAction};
/// assert_eq!(
///     channel_names(EventAction::Read, "person", "acme", Some("7")),
///     vec!["acme.resource.person.r7"],
/// );
/// ```
#[must_use]
pub fn channel_names(
    action: EventAction,
    resource: &str,
    account: &str,
    object_id: Option<&str>,
) -> Vec<String> {
    let channel = |suffix: &str| format!("{account}.resource.{resource}.{suffix}");

    match (action, object_id) {
        (EventAction::Browse, _) => vec![channel("b")],
        (EventAction::Read, Some(id)) => vec![channel(&format!("r{id}"))],
        (EventAction::Read, None) => Vec::new(),
        (EventAction::Add, _) | (_, None) => vec![channel("m"), channel("b")],
        (_, Some(id)) => vec![
            channel("m"),
            channel("b"),
            channel(&format!("r{id}")),
            channel(&format!("e{id}")),
            channel(&format!("d{id}")),
        ],
    }
}

/// Event name seen by listeners, e.g. `person.edited`
#[must_use]
pub fn broadcast_name(action: EventAction, resource: &str) -> String {
    format!("{resource}.{}", action.past_tense())
}

/// User that triggered an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// User id
    pub id: Value,
    /// Display name
    pub name: String,
}

impl Default for Requester {
    fn default() -> Self {
        Self {
            id: json!(0),
            name: "System".to_string(),
        }
    }
}

/// One resource event ready to broadcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastEvent {
    action: EventAction,
    resource: String,
    account: String,
    object_id: Option<String>,
    requester: Requester,
}

impl BroadcastEvent {
    /// Event for `resource` in the default account with the system requester
    #[must_use]
    pub fn new(action: EventAction, resource: impl Into<String>) -> Self {
        Self {
            action,
            resource: resource.into(),
            account: DEFAULT_ACCOUNT.to_string(),
            object_id: None,
            requester: Requester::default(),
        }
    }

    /// Scope to an account
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Attach the affected object's id
    #[must_use]
    pub fn with_object_id(mut self, id: impl ToString) -> Self {
        self.object_id = Some(id.to_string());
        self
    }

    /// Record who triggered the event
    #[must_use]
    pub fn with_requester(mut self, requester: Requester) -> Self {
        self.requester = requester;
        self
    }

    /// Event kind
    #[must_use]
    pub const fn action(&self) -> EventAction {
        self.action
    }

    /// Account the event is scoped to
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Channels to broadcast on
    #[must_use]
    pub fn channels(&self) -> Vec<String> {
        channel_names(
            self.action,
            &self.resource,
            &self.account,
            self.object_id.as_deref(),
        )
    }

    /// Broadcast name
    #[must_use]
    pub fn broadcast_as(&self) -> String {
        broadcast_name(self.action, &self.resource)
    }

    /// Payload sent with the event
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({ "requester": self.requester })
    }
}
