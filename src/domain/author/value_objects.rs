use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if len < NAME_MIN_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at least {NAME_MIN_LEN} characters"
            )));
        }
        if len > NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEmail(String);

impl AuthorEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_valid_syntax(&value) {
            return Err(DomainError::Validation(
                "email must be a valid address".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Structural check only: one `@`, non-empty local part, dotted domain,
    /// no whitespace. Uniqueness is enforced by the store, not here.
    pub fn is_valid_syntax(value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AuthorEmail> for String {
    fn from(value: AuthorEmail) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
