use serde::{Deserialize, Serialize};

/// An audience segment. Produced by the backend and read-only from the
/// console; the full list is refreshed wholesale on each fetch.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub count: u64,
}
