#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use jobhunter::core::gate::{Credential, Gate};
use jobhunter::core::locator::AmbiguityPolicy;
use jobhunter::core::session::Session;
use jobhunter::store::{DatasetStore, DirStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SECRET: &str = "5678";
pub const ACCESS: &str = "1111";
pub const OBJECT_ID: &str = "job_data.csv";

pub const HEADER: &str = "hr_name,hr_job_title,hr_email,hr_phone,hr_linkedin_username,\
hr_twitter_username,hr_facebook_username,company_name,company_website,company_email,\
company_linkedin_username,company_twitter_username,company_facebook_username,\
company_location,company_niche,status,job_status,linkedin_status,twitter_status,facebook_status";

/// Four rows: two HRs at Acme, and an HR name (Alice) present at two companies.
pub const ROWS: [&str; 4] = [
    "Alice,Recruiter,alice@acme.io,555-0100,alice-li,alice_tw,alice.fb,Acme,https://acme.io,jobs@acme.io,acme,acme_tw,acme.fb,Berlin,Robotics,No Openings,False,False,False,False",
    "Bob,Talent Lead,bob@acme.io,555-0101,,,,Acme,https://acme.io,jobs@acme.io,acme,acme_tw,acme.fb,Berlin,Robotics,Invitation Sent,True,True,False,False",
    "Carol,HR Manager,carol@globex.com,555-0200,carol-li,,,Globex,https://globex.com,hr@globex.com,globex,,,Paris,Energy,In Talks,True,False,True,False",
    "Alice,Sourcer,alice@initech.com,,,,,Initech,https://initech.com,,,,,London,Software,,False,False,False,True",
];

pub fn sample_csv() -> String {
    let mut s = String::from(HEADER);
    s.push('\n');
    for row in ROWS {
        s.push_str(row);
        s.push('\n');
    }
    s
}

pub fn jh() -> Command {
    cargo_bin_cmd!("jobhunter")
}

/// A throw-away environment: a directory acting as remote store seeded with
/// the sample dataset, a config file and paths for the local copy and the
/// audit log.
pub struct Fixture {
    pub root: PathBuf,
    pub remote_dir: PathBuf,
    pub local: PathBuf,
    pub audit: PathBuf,
    pub config: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        Self::build(name, false)
    }

    /// Same as `new`, but every upload to the remote fails.
    pub fn read_only(name: &str) -> Self {
        Self::build(name, true)
    }

    fn build(name: &str, read_only: bool) -> Self {
        let mut root: PathBuf = env::temp_dir();
        root.push(format!("jobhunter_tests_{name}"));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(&root).expect("create fixture dir");

        let remote_dir = root.join("remote");
        fs::create_dir_all(&remote_dir).expect("create remote dir");
        fs::write(remote_dir.join(OBJECT_ID), sample_csv()).expect("seed remote");

        let local = root.join("local").join("job_data.csv");
        let audit = root.join("jobhunter.sqlite");
        let config = root.join("jobhunter.conf");

        let yaml = format!(
            "dataset_object_id: {OBJECT_ID}\n\
             local_dataset: {}\n\
             audit_database: {}\n\
             secret_key: {SECRET}\n\
             access_keys: [{ACCESS}]\n\
             remote:\n  kind: dir\n  path: {}\n  read_only: {read_only}\n",
            local.display(),
            audit.display(),
            remote_dir.display()
        );
        fs::write(&config, yaml).expect("write config");

        Self {
            root,
            remote_dir,
            local,
            audit,
            config,
        }
    }

    /// CLI command bound to this fixture's config.
    pub fn cmd(&self) -> Command {
        let mut cmd = jh();
        cmd.env("HOME", &self.root)
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    /// Flip the remote between writable and read-only.
    pub fn set_read_only(&self, read_only: bool) {
        let yaml = fs::read_to_string(&self.config).expect("read config");
        let yaml = yaml
            .replace("read_only: true", &format!("read_only: {read_only}"))
            .replace("read_only: false", &format!("read_only: {read_only}"));
        fs::write(&self.config, yaml).expect("rewrite config");
    }

    pub fn remote_object(&self) -> PathBuf {
        self.remote_dir.join(OBJECT_ID)
    }

    pub fn remote_text(&self) -> String {
        fs::read_to_string(self.remote_object()).expect("read remote object")
    }

    pub fn local_text(&self) -> String {
        fs::read_to_string(&self.local).expect("read local copy")
    }

    pub fn pending_marker(&self) -> PathBuf {
        self.root.join("local").join("job_data.csv.pending")
    }

    /// Library-level store over this fixture.
    pub fn store(&self, read_only: bool) -> DatasetStore {
        let remote = DirStore::new(self.remote_dir.clone()).read_only(read_only);
        DatasetStore::new(Box::new(remote), OBJECT_ID, self.local.clone())
    }

    /// Library-level session opened with `key`, without audit log.
    pub fn session(&self, key: &str, read_only: bool) -> Session {
        self.session_with(key, read_only, AmbiguityPolicy::FirstMatch)
    }

    pub fn session_with(&self, key: &str, read_only: bool, policy: AmbiguityPolicy) -> Session {
        Session::start(self.store(read_only), gate(), credential(key), policy)
            .expect("start session")
    }
}

pub fn gate() -> Gate {
    Gate::new(Some(5678), &[1111])
}

pub fn credential(key: &str) -> Credential {
    key.parse().expect("valid credential")
}
