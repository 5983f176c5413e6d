use serde::{Deserialize, Serialize};

/// The one record this service knows about. Signup and login both
/// deserialize the request body into this shape; fields missing from the
/// body become empty strings.
///
/// The password is stored and echoed back as plain text; clients of this
/// backend rely on the full record coming back in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Case-insensitive identity collision: same email OR same username.
    pub fn collides_with(&self, other: &User) -> bool {
        self.email.eq_ignore_ascii_case(&other.email)
            || self.username.eq_ignore_ascii_case(&other.username)
    }

    /// True if `identifier` names this user by email or by username
    /// (case-insensitive either way).
    pub fn answers_to(&self, identifier: &str) -> bool {
        self.email.eq_ignore_ascii_case(identifier)
            || self.username.eq_ignore_ascii_case(identifier)
    }
}
