use qa_provider::WireHistoryEntry;

use crate::message::{new_message_id, Message, Role};

/// Maps the service's wire history onto display messages.
///
/// Pure and total over any `{role, content}` sequence: length and order are
/// preserved, `human`/`ai` map to `user`/`assistant`, unrecognized roles
/// pass through verbatim, and every message receives a freshly generated
/// local id. Safe to call repeatedly; only the ids differ between calls.
#[must_use]
pub fn normalize(entries: &[WireHistoryEntry]) -> Vec<Message> {
    entries
        .iter()
        .map(|entry| Message {
            id: new_message_id(&entry.role),
            role: Role::from_wire(&entry.role),
            content: entry.content.clone(),
        })
        .collect()
}
