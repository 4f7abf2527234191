pub mod articles;
pub mod topics;
pub mod users;

/// What a listing endpoint answers when its table holds no rows at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// Respond with an empty collection.
    Empty,
    /// Treat the empty table as a missing resource.
    NotFound,
}

impl EmptyListPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" | "ok" => Some(Self::Empty),
            "not_found" | "notfound" | "404" => Some(Self::NotFound),
            _ => None,
        }
    }
}
