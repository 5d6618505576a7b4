use serde::Serialize;

/// Identity of the signed-in user, as resolved from a session token.
/// The calculator core never sees this; only the shell does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
}
