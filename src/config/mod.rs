use crate::core::locator::AmbiguityPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOWNLOAD_URL: &str = "https://drive.google.com/uc";
pub const DEFAULT_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";

/// Where the remote copy of the dataset lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemoteConfig {
    /// File-sharing service reachable over HTTP.
    Http {
        #[serde(default = "default_download_url")]
        download_url: String,
        #[serde(default = "default_upload_url")]
        upload_url: String,
    },
    /// A plain directory used as object store (object id = file name).
    Dir {
        path: String,
        #[serde(default)]
        read_only: bool,
    },
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig::Http {
            download_url: default_download_url(),
            upload_url: default_upload_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Opaque id of the dataset object in the remote store.
    #[serde(default)]
    pub dataset_object_id: String,
    /// Opaque id of the service credential object used for uploads.
    #[serde(default)]
    pub credentials_object_id: String,
    #[serde(default = "default_local_dataset")]
    pub local_dataset: String,
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
    #[serde(default = "default_audit_database")]
    pub audit_database: String,
    /// Secret required to see outreach status and to save edits.
    #[serde(default)]
    pub secret_key: Option<u32>,
    /// Keys that may open a session (the secret always can).
    #[serde(default)]
    pub access_keys: Vec<u32>,
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,
    #[serde(default)]
    pub remote: RemoteConfig,
}

fn default_download_url() -> String {
    DEFAULT_DOWNLOAD_URL.to_string()
}
fn default_upload_url() -> String {
    DEFAULT_UPLOAD_URL.to_string()
}
fn default_local_dataset() -> String {
    Config::config_dir()
        .join("job_data.csv")
        .to_string_lossy()
        .to_string()
}
fn default_credentials_file() -> String {
    Config::config_dir()
        .join("credentials.json")
        .to_string_lossy()
        .to_string()
}
fn default_audit_database() -> String {
    Config::config_dir()
        .join("jobhunter.sqlite")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_object_id: String::new(),
            credentials_object_id: String::new(),
            local_dataset: default_local_dataset(),
            credentials_file: default_credentials_file(),
            audit_database: default_audit_database(),
            secret_key: None,
            access_keys: Vec::new(),
            ambiguity: AmbiguityPolicy::default(),
            remote: RemoteConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobhunter")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jobhunter")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobhunter.conf")
    }

    /// Load configuration from the default file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.expand_paths();
        Ok(cfg)
    }

    fn expand_paths(&mut self) {
        self.local_dataset = expand_tilde(&self.local_dataset)
            .to_string_lossy()
            .to_string();
        self.credentials_file = expand_tilde(&self.credentials_file)
            .to_string_lossy()
            .to_string();
        self.audit_database = expand_tilde(&self.audit_database)
            .to_string_lossy()
            .to_string();
        if let RemoteConfig::Dir { path, .. } = &mut self.remote {
            *path = expand_tilde(path).to_string_lossy().to_string();
        }
    }

    /// Initialize configuration file and data directory.
    /// An existing configuration file is never overwritten.
    pub fn init_all(target: &Path) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if target.exists() {
            println!("ℹ️  Config file already present: {}", target.display());
            return Self::load_from(target);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(target)?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {}", target.display());

        Ok(config)
    }
}
