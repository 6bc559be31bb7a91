use serde::{Deserialize, Serialize};

/// Client-side copy of the logged-in operator, hydrated from
/// localStorage. The `access_token` cookie remains the authorization
/// signal; this is display/bootstrapping state only.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionProfile {
    pub username: String,
    pub token: String,
}
