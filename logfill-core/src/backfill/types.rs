/// A single qualifying view extracted from one log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    /// Alphanumeric share-link token, as stored in `messages.message_url`.
    pub message_url: String,
    /// SQL datetime (`YYYY-MM-DD HH:MM:SS`) of the hit.
    pub viewed_at: String,
}

/// How a line must establish a successful response before extraction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Substring containment: the line qualifies if ` 200 ` appears anywhere
    /// in it, whichever field the digits belong to. Can over-match, e.g. on
    /// a 200-byte response size.
    Permissive,
    /// Positional: the line must match the common access-log layout and its
    /// status field must be exactly 200.
    Strict,
}
