/// Errors raised while constructing list requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ODataError {
    /// Item ids are positive; zero addresses nothing.
    InvalidItemId(u64),
    /// Item id text that is not a number.
    UnparsableItemId(String),
    /// A verbose payload must be a JSON object to carry `__metadata`.
    NotAnObject,
    /// Response body lacks the expected `d` / `value` member.
    MissingEnvelope(&'static str),
}

impl std::fmt::Display for ODataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidItemId(id) => write!(f, "invalid item id: {id}"),
            Self::UnparsableItemId(raw) => write!(f, "item id is not a number: {raw:?}"),
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::MissingEnvelope(member) => write!(f, "response has no `{member}` member"),
        }
    }
}

impl std::error::Error for ODataError {}
