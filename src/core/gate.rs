//! Shared-secret authorization, used at session entry and at commit time.

use crate::config::Config;
use crate::errors::AppError;
use std::str::FromStr;

/// A 4-digit numeric key as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential(u32);

impl Credential {
    pub const MIN: u32 = 1000;
    pub const MAX: u32 = 9999;

    pub fn new(value: u32) -> Result<Self, AppError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::InvalidCredential(value.to_string()))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for Credential {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: u32 = s
            .parse()
            .map_err(|_| AppError::InvalidCredential(s.to_string()))?;
        Credential::new(value)
    }
}

/// What a key is being checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Open a session.
    Entry,
    /// See outreach status and save edits.
    Secret,
}

#[derive(Debug, Clone, Default)]
pub struct Gate {
    secret: Option<Credential>,
    access_keys: Vec<Credential>,
}

impl Gate {
    /// Out-of-range configured keys are ignored.
    pub fn new(secret: Option<u32>, access_keys: &[u32]) -> Self {
        Self {
            secret: secret.and_then(|s| Credential::new(s).ok()),
            access_keys: access_keys
                .iter()
                .filter_map(|k| Credential::new(*k).ok())
                .collect(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.secret_key, &cfg.access_keys)
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    pub fn authorize(&self, access: Access, key: &Credential) -> bool {
        let is_secret = self.secret.as_ref() == Some(key);
        match access {
            Access::Secret => is_secret,
            Access::Entry => is_secret || self.access_keys.contains(key),
        }
    }
}
