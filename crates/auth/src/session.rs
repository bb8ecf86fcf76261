use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::credentials::Principal;

/// In-memory session tokens.
///
/// Tokens are opaque random strings; they live as long as the process,
/// matching the session-state model of the original dashboards.
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashMap<String, Principal>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new token for an authenticated principal.
    pub fn issue(&self, principal: Principal) -> String {
        let token = Uuid::now_v7().simple().to_string();
        if let Ok(mut guard) = self.tokens.write() {
            guard.insert(token.clone(), principal);
        }
        token
    }

    /// Resolve a presented token back to its principal.
    pub fn lookup(&self, token: &str) -> Option<Principal> {
        self.tokens.read().ok()?.get(token).cloned()
    }

    pub fn revoke(&self, token: &str) -> bool {
        match self.tokens.write() {
            Ok(mut guard) => guard.remove(token).is_some(),
            Err(_) => false,
        }
    }
}
