use serde::{Deserialize, Serialize};

/// Standard success envelope every endpoint responds with.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: T,
}

/// Error body returned alongside non-2xx statuses, when the backend
/// managed to produce one.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}
