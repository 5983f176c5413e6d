use tokio::sync::RwLock;
use tracing::debug;

use crate::auth::dto::User;

/// In-memory user store. Insertion order is preserved and lookups are a
/// linear scan; data lives for the lifetime of the process only.
///
/// `exists` and `append` each take the lock separately; there is no
/// atomic check-then-insert. A concurrent pair of signups for the same
/// identity can both pass the existence check and both insert.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-loaded with the test account that ships with every start.
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(vec![User::new(
                "testuser",
                "test@example.com",
                "password123",
            )]),
        }
    }

    /// True if any stored user's email or username case-insensitively
    /// equals the candidate's corresponding field.
    pub async fn exists(&self, candidate: &User) -> bool {
        self.users
            .read()
            .await
            .iter()
            .any(|u| u.collides_with(candidate))
    }

    /// Append to the end of the list. Uniqueness is the caller's problem,
    /// checked (non-atomically) before calling this.
    pub async fn append(&self, user: User) {
        let mut users = self.users.write().await;
        users.push(user);
        debug!(total_users = users.len(), "user appended to store");
    }

    /// First user (insertion order) whose email OR username matches
    /// `identifier` case-insensitively and whose password equals `secret`
    /// exactly.
    pub async fn find_match(&self, identifier: &str, secret: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.answers_to(identifier) && u.password == secret)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
