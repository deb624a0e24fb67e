//! On-device session persistence.
//!
//! Stores the auth token, the signed-in user's profile, the UI language and
//! the onboarding flag as small files under one directory. Writes go through a
//! temp file in the same directory and are renamed into place, so a crash
//! never leaves a half-written file behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config;
use crate::error::Result;
use crate::models::User;

const TOKEN_FILE: &str = "auth_token";
const USER_FILE: &str = "user_data.json";
const LANGUAGE_FILE: &str = "app_language";
const ONBOARDING_FILE: &str = "onboarding_completed";

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Wo,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::Wo];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Wo => "wo",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::Wo => "Wolof",
        }
    }

    /// Parse a language code, ignoring any region suffix (`fr-SN` → `Fr`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `dir`, or the platform default when `None`.
    /// Creates the directory if needed.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_session_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // -- Auth token ---------------------------------------------------------

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_FILE)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.write(TOKEN_FILE, token.as_bytes())
    }

    // -- User profile -------------------------------------------------------

    /// The cached profile. A corrupt file is deleted and reads as `None`.
    pub fn user(&self) -> Option<User> {
        let raw = self.read(USER_FILE)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "corrupt cached user profile, removing");
                let _ = fs::remove_file(self.dir.join(USER_FILE));
                None
            }
        }
    }

    pub fn set_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_vec(user)?;
        self.write(USER_FILE, &json)
    }

    /// Forget the token and the cached profile.
    pub fn clear(&self) -> Result<()> {
        for name in [TOKEN_FILE, USER_FILE] {
            match fs::remove_file(self.dir.join(name)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        debug!(dir = %self.dir.display(), "session cleared");
        Ok(())
    }

    // -- Preferences --------------------------------------------------------

    /// Saved UI language; unknown or missing values give the default.
    pub fn language(&self) -> Language {
        self.read(LANGUAGE_FILE)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.write(LANGUAGE_FILE, language.code().as_bytes())
    }

    /// Resolve the language on first launch: a saved choice wins, otherwise
    /// the system locale when supported, otherwise the default. The result is
    /// persisted.
    pub fn init_language(&self, system_locale: Option<&str>) -> Result<Language> {
        if let Some(saved) = self.read(LANGUAGE_FILE).and_then(|c| Language::from_code(&c)) {
            return Ok(saved);
        }
        let language = system_locale
            .and_then(Language::from_code)
            .unwrap_or_default();
        self.set_language(language)?;
        Ok(language)
    }

    pub fn onboarding_completed(&self) -> bool {
        self.read(ONBOARDING_FILE).is_some_and(|s| s.trim() == "true")
    }

    pub fn set_onboarding_completed(&self) -> Result<()> {
        self.write(ONBOARDING_FILE, b"true")
    }

    // -- Files --------------------------------------------------------------

    fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(name)).ok()
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents)?;
        tmp.persist(self.dir.join(name))
            .map_err(|e| crate::PriceTrackerError::Io(e.error))?;
        Ok(())
    }
}
