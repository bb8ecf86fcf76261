use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use faturas_core::{DomainError, DomainResult};

/// Authenticated user identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
}

/// Static credential table (username -> password).
///
/// Matches the dashboards' gate: a fixed table checked against submitted
/// credentials, nothing more. An empty table means the gate is open.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: HashMap<String, String>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `user:pass,user2:pass2` spec (the shape the env config uses).
    pub fn from_spec(spec: &str) -> DomainResult<Self> {
        let mut entries = HashMap::new();
        for pair in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (user, pass) = pair.split_once(':').ok_or_else(|| {
                DomainError::validation(format!("credential entry '{pair}' is not user:pass"))
            })?;
            if user.trim().is_empty() {
                return Err(DomainError::validation("credential username cannot be empty"));
            }
            entries.insert(user.trim().to_string(), pass.to_string());
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.entries.insert(username.into(), password.into());
    }

    /// Whether any credentials are configured at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check submitted credentials.
    pub fn verify(&self, username: &str, password: &str) -> DomainResult<Principal> {
        match self.entries.get(username) {
            Some(expected) if expected == password => Ok(Principal {
                username: username.to_string(),
            }),
            _ => Err(DomainError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_matching_pair() {
        let mut table = CredentialTable::new();
        table.insert("ana", "segredo");
        let principal = table.verify("ana", "segredo").unwrap();
        assert_eq!(principal.username, "ana");
    }

    #[test]
    fn verify_rejects_wrong_password_and_unknown_user() {
        let mut table = CredentialTable::new();
        table.insert("ana", "segredo");
        assert_eq!(table.verify("ana", "errado").unwrap_err(), DomainError::Unauthorized);
        assert_eq!(table.verify("bob", "segredo").unwrap_err(), DomainError::Unauthorized);
    }

    #[test]
    fn spec_parses_multiple_entries() {
        let table = CredentialTable::from_spec("ana:segredo, bob:outra").unwrap();
        assert!(table.verify("ana", "segredo").is_ok());
        assert!(table.verify("bob", "outra").is_ok());
    }

    #[test]
    fn spec_rejects_entries_without_separator() {
        assert!(CredentialTable::from_spec("ana").is_err());
    }

    #[test]
    fn empty_spec_yields_open_gate() {
        let table = CredentialTable::from_spec("").unwrap();
        assert!(table.is_empty());
    }
}
