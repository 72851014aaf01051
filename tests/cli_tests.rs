use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ACCESS, Fixture, SECRET, jh};

#[test]
fn test_show_record_with_access_key() {
    let fx = Fixture::new("cli_show_access");

    fx.cmd()
        .args(["--key", ACCESS, "show", "--hr", "Carol"])
        .assert()
        .success()
        .stdout(contains("Carol @ Globex"))
        .stdout(contains("carol@globex.com"))
        .stdout(contains("Outreach status is visible with the secret key."))
        .stdout(contains("in-talk").not());
}

#[test]
fn test_show_record_with_secret_includes_advisories() {
    let fx = Fixture::new("cli_show_secret");

    fx.cmd()
        .args(["--key", SECRET, "show", "--company", "Globex"])
        .assert()
        .success()
        .stdout(contains("You are in-talk with this Company/HR!"))
        .stdout(contains("You've already applied for Job/Internship!"))
        .stdout(contains("You've not contacted with HR/Company on LinkedIn!"));
}

#[test]
fn test_show_ambiguous_selection_warns_and_takes_first() {
    let fx = Fixture::new("cli_show_ambiguous");

    fx.cmd()
        .args(["--key", ACCESS, "show", "--hr", "Alice"])
        .assert()
        .success()
        .stdout(contains("2 records match hr_name 'Alice'"))
        .stdout(contains("Alice @ Acme"));
}

#[test]
fn test_session_needs_a_valid_key() {
    let fx = Fixture::new("cli_keys");

    fx.cmd()
        .args(["show", "--hr", "Carol"])
        .assert()
        .failure()
        .stderr(contains("--key"));

    fx.cmd()
        .args(["--key", "1234", "show", "--hr", "Carol"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    fx.cmd()
        .args(["--key", "12", "show", "--hr", "Carol"])
        .assert()
        .failure()
        .stderr(contains("4-digit"));
}

#[test]
fn test_show_unknown_record_fails() {
    let fx = Fixture::new("cli_show_unknown");

    fx.cmd()
        .args(["--key", ACCESS, "show", "--company", "Hooli"])
        .assert()
        .failure()
        .stderr(contains("No record found for company_name 'Hooli'"));
}

#[test]
fn test_edit_saves_locally_and_remotely() {
    let fx = Fixture::new("cli_edit_ok");

    fx.cmd()
        .args([
            "--key",
            ACCESS,
            "edit",
            "--hr",
            "Bob",
            "--set",
            "status=In Talks",
            "--set",
            "twitter_status=true",
            "--set",
            "hr_twitter=bob_tw",
            "--secret",
            SECRET,
        ])
        .assert()
        .success()
        .stdout(contains("Form submitted: Bob @ Acme updated (row 2)."))
        .stdout(contains("Data saved"));

    let expected = "Bob,Talent Lead,bob@acme.io,555-0101,,bob_tw,,Acme,https://acme.io,jobs@acme.io,acme,acme_tw,acme.fb,Berlin,Robotics,In Talks,True,True,True,False";
    assert!(fx.local_text().contains(expected));
    assert_eq!(fx.remote_text(), fx.local_text());
}

#[test]
fn test_edit_with_wrong_secret_changes_nothing() {
    let fx = Fixture::new("cli_edit_rejected");
    let before = fx.remote_text();

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Bob", "--set", "status=In Talks", "--secret", "1234",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid secret key"));

    assert_eq!(fx.remote_text(), before);
    assert_eq!(fx.local_text(), before);
}

#[test]
fn test_edit_rejects_bad_assignments_before_loading() {
    let fx = Fixture::new("cli_edit_bad_input");

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Bob", "--set", "salary=100", "--secret", SECRET,
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown field: salary"));

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Bob", "--set", "status", "--secret", SECRET,
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid value for --set"));

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Bob", "--set", "status=Hired", "--secret", SECRET,
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid value for status: Hired"));

    assert!(!fx.local.exists());
}

#[test]
fn test_edit_with_failing_upload_warns_and_sync_recovers() {
    let fx = Fixture::read_only("cli_edit_sync_fail");

    fx.cmd()
        .args([
            "--key",
            SECRET,
            "edit",
            "--company",
            "Globex",
            "--set",
            "company_location=Lyon",
            "--secret",
            SECRET,
        ])
        .assert()
        .success()
        .stdout(contains("Form submitted"))
        .stdout(contains("An error occurred while uploading"))
        .stdout(contains("jobhunter sync"));

    assert!(fx.local_text().contains("Lyon"));
    assert!(!fx.remote_text().contains("Lyon"));
    assert!(fx.pending_marker().exists());

    // next session keeps the local edit even though the remote is stale
    fx.cmd()
        .args(["--key", ACCESS, "show", "--company", "Globex"])
        .assert()
        .success()
        .stdout(contains("not yet synced"))
        .stdout(contains("Lyon"));

    // still read-only: sync fails
    fx.cmd()
        .args(["--key", SECRET, "sync"])
        .assert()
        .failure()
        .stderr(contains("read-only"));

    fx.set_read_only(false);
    fx.cmd()
        .args(["--key", SECRET, "sync"])
        .assert()
        .success()
        .stdout(contains("File updated successfully!"));

    assert!(fx.remote_text().contains("Lyon"));
    assert!(!fx.pending_marker().exists());
}

#[test]
fn test_sync_requires_secret_and_local_copy() {
    let fx = Fixture::new("cli_sync_guard");

    fx.cmd()
        .args(["--key", ACCESS, "sync"])
        .assert()
        .failure()
        .stderr(contains("Invalid secret key"));

    fx.cmd()
        .args(["--key", SECRET, "sync"])
        .assert()
        .failure()
        .stderr(contains("no local copy"));
}

#[test]
fn test_list_requires_secret() {
    let fx = Fixture::new("cli_list_guard");

    fx.cmd()
        .args(["--key", ACCESS, "list"])
        .assert()
        .failure()
        .stderr(contains("Contact Admin for Secret Key"));
}

#[test]
fn test_list_filters_and_pages() {
    let fx = Fixture::new("cli_list");

    fx.cmd()
        .args(["--key", SECRET, "list"])
        .assert()
        .success()
        .stdout(contains("Carol"))
        .stdout(contains("Initech"))
        .stdout(contains("Page 1/1 (4 records)"))
        .stdout(contains("Summary of Status"));

    fx.cmd()
        .args(["--key", SECRET, "list", "--status", "in-talks"])
        .assert()
        .success()
        .stdout(contains("Carol"))
        .stdout(contains("Bob").not())
        .stdout(contains("(1 records)"));

    fx.cmd()
        .args(["--key", SECRET, "list", "--applied", "--linkedin"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Carol").not());

    fx.cmd()
        .args(["--key", SECRET, "list", "--per-page", "1", "--page", "9"])
        .assert()
        .success()
        .stdout(contains("Page 4/4"));

    fx.cmd()
        .args(["--key", SECRET, "list", "-s", "Hooli"])
        .assert()
        .success()
        .stdout(contains("No Data Found!"));
}

#[test]
fn test_stats_and_companies() {
    let fx = Fixture::new("cli_stats");

    fx.cmd()
        .args(["--key", ACCESS, "stats"])
        .assert()
        .success()
        .stdout(contains("Top Companies by Count"))
        .stdout(contains("Acme"))
        .stdout(contains("Top Companies by Niche"))
        .stdout(contains("Robotics"))
        .stdout(contains("Summary of Status").not());

    fx.cmd()
        .args(["--key", SECRET, "stats"])
        .assert()
        .success()
        .stdout(contains("Summary of Status"))
        .stdout(contains("Top Companies by Location"));

    fx.cmd()
        .args(["--key", ACCESS, "companies"])
        .assert()
        .success()
        .stdout(contains("Globex"))
        .stdout(contains("https://initech.com"));
}

#[test]
fn test_prompt_for_company() {
    let fx = Fixture::new("cli_prompt");

    fx.cmd()
        .args(["--key", SECRET, "prompt", "--company", "Globex"])
        .assert()
        .success()
        .stdout(contains("comprehensive overview of Globex"))
        .stdout(contains("### Major Points"))
        .stdout(contains("- **Location**: Paris"));

    fx.cmd()
        .args(["--key", ACCESS, "prompt", "--company", "Globex"])
        .assert()
        .failure();
}

#[test]
fn test_export_warns_when_audit_log_is_unavailable() {
    let fx = Fixture::new("cli_export_no_audit");
    fs::create_dir_all(&fx.audit).unwrap();
    let out = fx.root.join("status.csv");

    // once at session start, once for the export entry
    fx.cmd()
        .args(["--key", SECRET, "export", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Audit log unavailable").count(2));

    assert!(out.exists());
}

#[test]
fn test_export_csv_and_json() {
    let fx = Fixture::new("cli_export");
    let csv_out = fx.root.join("status.csv");
    let json_out = fx.root.join("status.json");

    fx.cmd()
        .args(["--key", SECRET, "export", "--file"])
        .arg(&csv_out)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(csv.starts_with(
        "hr_name,company_name,status,job_status,linkedin_status,twitter_status,facebook_status"
    ));
    assert!(csv.contains("Carol,Globex,In Talks,Applied,Not Reached Out,Reached Out,Not Reached Out"));

    fx.cmd()
        .args(["--key", SECRET, "export", "--format", "json", "--status", "invitation-sent", "--file"])
        .arg(&json_out)
        .assert()
        .success();

    let json = fs::read_to_string(&json_out).expect("read exported json");
    assert!(json.contains("\"hr_name\": \"Bob\""));
    assert!(json.contains("\"status\": \"Invitation Sent\""));
    assert!(!json.contains("Carol"));

    // existing file, no --force, answer "n"
    fx.cmd()
        .args(["--key", SECRET, "export", "--file"])
        .arg(&csv_out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    fx.cmd()
        .args(["--key", SECRET, "export", "--force", "--file"])
        .arg(&csv_out)
        .assert()
        .success();
}

#[test]
fn test_backup_plain_and_compressed() {
    let fx = Fixture::new("cli_backup");

    // no local copy yet
    fx.cmd()
        .args(["backup", "--file"])
        .arg(fx.root.join("bk.csv"))
        .assert()
        .failure();

    fx.cmd()
        .args(["--key", ACCESS, "show", "--hr", "Bob"])
        .assert()
        .success();

    fx.cmd()
        .args(["backup", "--file"])
        .arg(fx.root.join("bk.csv"))
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(
        fs::read_to_string(fx.root.join("bk.csv")).unwrap(),
        fx.local_text()
    );

    fx.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(fx.root.join("bk2.csv"))
        .assert()
        .success();
    assert!(fx.root.join("bk2.zip").exists());
}

#[test]
fn test_audit_log_records_operations() {
    let fx = Fixture::new("cli_log");

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Carol", "--set", "hr_phone=555-0999", "--secret", "4321",
        ])
        .assert()
        .failure();

    fx.cmd()
        .args([
            "--key", SECRET, "edit", "--hr", "Carol", "--set", "hr_phone=555-0999", "--secret", SECRET,
        ])
        .assert()
        .success();

    fx.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("load"))
        .stdout(contains("commit_rejected"))
        .stdout(contains("Carol @ Globex"))
        .stdout(contains("bytes uploaded"));
}

#[test]
fn test_shell_edit_session() {
    let fx = Fixture::new("cli_shell");

    let script = "\
list company
select hr Carol
edit
set status Invitation Sent
set linkedin_status yes
save 1234
save 5678
quit
";

    fx.cmd()
        .args(["--key", SECRET, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Initech"))
        .stdout(contains("Editing Carol @ Globex"))
        .stdout(contains("Form submitted: Carol @ Globex updated (row 3)."))
        .stdout(contains("Session closed."))
        .stderr(contains("Invalid secret key"));

    assert!(fx.remote_text().contains("Invitation Sent,True,True,True,False"));
}

#[test]
fn test_shell_locked_and_cancel() {
    let fx = Fixture::new("cli_shell_cancel");

    let script = "\
set status In Talks
select company Initech
set status In Talks
edit
set company_niche Fintech
cancel
show
frobnicate
";

    fx.cmd()
        .args(["--key", ACCESS, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(contains("No record selected"))
        .stderr(contains("Record is locked"))
        .stderr(contains("unknown command 'frobnicate'"))
        .stdout(contains("Edit cancelled; record locked."))
        .stdout(contains("Session closed."));

    assert!(!fx.local_text().contains("Fintech"));
}

#[test]
fn test_init_creates_config() {
    let fx = Fixture::new("cli_init");
    let cfg = fx.root.join("fresh").join("jobhunter.conf");

    jh().env("HOME", &fx.root)
        .arg("--config")
        .arg(&cfg)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let yaml = fs::read_to_string(&cfg).expect("read new config");
    assert!(yaml.contains("dataset_object_id"));
    assert!(yaml.contains("kind: http"));

    // a second init keeps the file
    jh().env("HOME", &fx.root)
        .arg("--config")
        .arg(&cfg)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_config_print() {
    let fx = Fixture::new("cli_config_print");

    fx.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("dataset_object_id: job_data.csv"))
        .stdout(contains("kind: dir"))
        .stdout(contains("ambiguity: first"));
}
