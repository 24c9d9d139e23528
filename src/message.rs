use uuid::Uuid;

/// Conversation role for a displayed message.
///
/// The closed set is `user`/`assistant`/`system`; `Other` preserves any
/// service-defined role outside it verbatim rather than rejecting the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
    Other(String),
}

impl Role {
    /// Maps the service's wire vocabulary onto the display vocabulary:
    /// `human → user`, `ai → assistant`, anything else passes through.
    #[must_use]
    pub fn from_wire(role: &str) -> Self {
        match role {
            "human" | "user" => Self::User,
            "ai" | "assistant" => Self::Assistant,
            "system" => Self::System,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Other(role) => role,
        }
    }
}

/// One displayed conversation entry.
///
/// `id` is a local display concern only; the service never assigns or
/// expects message identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Synthesizes an optimistic user message shown before server
    /// confirmation.
    #[must_use]
    pub fn optimistic_user(content: impl Into<String>) -> Self {
        Self {
            id: new_message_id("user"),
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Generates a collision-free local message identifier.
///
/// Ids are never derived from content, so duplicate-content messages stay
/// independently addressable, and never cross the network boundary.
#[must_use]
pub fn new_message_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
