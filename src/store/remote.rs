//! Remote object stores holding the replica of the dataset.

use crate::config::{Config, RemoteConfig};
use crate::errors::{AppError, AppResult};
use crate::store::csv_io::write_atomic;
use serde::Deserialize;
use std::cell::OnceCell;
use std::fs;
use std::path::PathBuf;

/// A store of opaque objects addressed by id.
pub trait RemoteStore {
    /// Download the full content of `object_id`.
    fn fetch(&self, object_id: &str) -> AppResult<Vec<u8>>;

    /// Overwrite `object_id` in place with `body`.
    fn upload(&self, object_id: &str, body: Vec<u8>) -> AppResult<()>;

    /// Short description for messages and the audit log.
    fn describe(&self) -> String;
}

/// Build the store selected in the configuration.
pub fn from_config(cfg: &Config) -> Box<dyn RemoteStore> {
    match &cfg.remote {
        RemoteConfig::Http {
            download_url,
            upload_url,
        } => Box::new(HttpStore::new(
            download_url,
            upload_url,
            &cfg.credentials_object_id,
            PathBuf::from(&cfg.credentials_file),
        )),
        RemoteConfig::Dir { path, read_only } => {
            Box::new(DirStore::new(PathBuf::from(path)).read_only(*read_only))
        }
    }
}

/// Service credential object. Only the bearer token is used.
#[derive(Debug, Deserialize)]
struct ServiceCredentials {
    access_token: String,
}

/// File-sharing service over HTTP: `GET <download>?id=<id>` and
/// `PATCH <upload>/<id>?uploadType=media` with a bearer token.
pub struct HttpStore {
    client: reqwest::blocking::Client,
    download_url: String,
    upload_url: String,
    credentials_object_id: String,
    credentials_file: PathBuf,
    token: OnceCell<String>,
}

impl HttpStore {
    pub fn new(
        download_url: &str,
        upload_url: &str,
        credentials_object_id: &str,
        credentials_file: PathBuf,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            download_url: download_url.trim_end_matches('/').to_string(),
            upload_url: upload_url.trim_end_matches('/').to_string(),
            credentials_object_id: credentials_object_id.to_string(),
            credentials_file,
            token: OnceCell::new(),
        }
    }

    /// Bearer token, fetched at most once per process.
    fn token(&self) -> AppResult<String> {
        if let Some(t) = self.token.get() {
            return Ok(t.clone());
        }

        if !self.credentials_file.exists() {
            if self.credentials_object_id.is_empty() {
                return Err(AppError::Config(
                    "no credentials_object_id configured and no local credentials file".into(),
                ));
            }
            let body = self.fetch(&self.credentials_object_id)?;
            write_atomic(&self.credentials_file, &body)?;
        }

        let raw = fs::read_to_string(&self.credentials_file)?;
        let creds: ServiceCredentials = serde_json::from_str(&raw)?;
        let _ = self.token.set(creds.access_token.clone());
        Ok(creds.access_token)
    }
}

impl RemoteStore for HttpStore {
    fn fetch(&self, object_id: &str) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get(&self.download_url)
            .query(&[("id", object_id)])
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Other(format!(
                "download of '{object_id}' failed with status {status}"
            )));
        }

        Ok(response.bytes()?.to_vec())
    }

    fn upload(&self, object_id: &str, body: Vec<u8>) -> AppResult<()> {
        let token = self.token()?;
        let response = self
            .client
            .patch(format!("{}/{}", self.upload_url, object_id))
            .query(&[("uploadType", "media")])
            .bearer_auth(token)
            .header("content-type", "application/csv")
            .body(body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(AppError::Other(format!(
                "upload rejected with status {status}: {error_text}"
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.download_url.clone()
    }
}

/// A local directory acting as object store.
pub struct DirStore {
    root: PathBuf,
    read_only: bool,
}

impl DirStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            read_only: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    fn object_path(&self, object_id: &str) -> AppResult<PathBuf> {
        if object_id.is_empty() || object_id.contains(['/', '\\']) || object_id == ".." {
            return Err(AppError::Other(format!("invalid object id '{object_id}'")));
        }
        Ok(self.root.join(object_id))
    }
}

impl RemoteStore for DirStore {
    fn fetch(&self, object_id: &str) -> AppResult<Vec<u8>> {
        Ok(fs::read(self.object_path(object_id)?)?)
    }

    fn upload(&self, object_id: &str, body: Vec<u8>) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Other(format!(
                "permission denied: {} is read-only",
                self.root.display()
            )));
        }
        write_atomic(&self.object_path(object_id)?, &body)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
