mod common;
use common::sample_csv;
use jobhunter::core::prompt::company_overview;
use jobhunter::core::views::{
    MAX_PER_PAGE, StatusFilter, companies, paginate, status_counts, status_view, top_counts,
};
use jobhunter::errors::AppError;
use jobhunter::models::{Dataset, OutreachStatus};
use jobhunter::store::csv_io::parse_dataset;
use jobhunter::ui::view::{Level, advisories};
use jobhunter::utils::fs::confirm_overwrite;
use std::env;
use std::fs;

fn dataset() -> Dataset {
    parse_dataset(sample_csv().as_bytes()).expect("parse sample")
}

#[test]
fn test_status_view_labels() {
    let rows = status_view(&dataset(), &StatusFilter::default());
    assert_eq!(rows.len(), 4);

    let bob = &rows[1];
    assert_eq!(bob.hr_name, "Bob");
    assert_eq!(bob.status, OutreachStatus::InvitationSent);
    assert_eq!(bob.job_status, "Applied");
    assert_eq!(bob.linkedin_status, "Reached Out");
    assert_eq!(bob.twitter_status, "Not Reached Out");
}

#[test]
fn test_status_filters_combine() {
    let ds = dataset();

    let filter = StatusFilter {
        status: Some(OutreachStatus::NoOpenings),
        ..Default::default()
    };
    let names: Vec<String> = status_view(&ds, &filter)
        .into_iter()
        .map(|r| r.company_name)
        .collect();
    assert_eq!(names, ["Acme", "Initech"]);

    let filter = StatusFilter {
        applied: true,
        twitter: true,
        ..Default::default()
    };
    let rows = status_view(&ds, &filter);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hr_name, "Carol");

    let filter = StatusFilter {
        search: Some("lob".into()),
        ..Default::default()
    };
    assert_eq!(status_view(&ds, &filter)[0].company_name, "Globex");

    let filter = StatusFilter {
        search: Some("Al".into()),
        facebook: true,
        ..Default::default()
    };
    let rows = status_view(&ds, &filter);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].company_name, "Initech");
}

#[test]
fn test_paginate_bounds() {
    let items: Vec<u32> = (1..=45).collect();

    let p = paginate(&items, 1, 10);
    assert_eq!((p.number, p.pages, p.total), (1, 5, 45));
    assert_eq!(p.items, &items[0..10]);

    let last = paginate(&items, 5, 10);
    assert_eq!(last.items, &items[40..45]);

    // out-of-range page is clamped to the last one
    assert_eq!(paginate(&items, 99, 10).number, 5);
    assert_eq!(paginate(&items, 0, 10).number, 1);

    // per-page is clamped to 1..=20
    assert_eq!(paginate(&items, 1, 500).items.len(), MAX_PER_PAGE);
    assert_eq!(paginate(&items, 1, 0).items.len(), 1);

    let empty: Vec<u32> = Vec::new();
    let p = paginate(&empty, 3, 10);
    assert_eq!((p.number, p.pages, p.total), (1, 1, 0));
    assert!(p.items.is_empty());
}

#[test]
fn test_counts() {
    let ds = dataset();
    let rows = status_view(&ds, &StatusFilter::default());
    assert_eq!(
        status_counts(&rows),
        vec![
            (OutreachStatus::NoOpenings, 2),
            (OutreachStatus::InvitationSent, 1),
            (OutreachStatus::InTalks, 1),
        ]
    );

    let by_company = top_counts(&ds, |r| r.company_name.as_str(), 10);
    assert_eq!(by_company[0], ("Acme".to_string(), 2));
    assert_eq!(by_company.len(), 3);
    // ties sorted by name
    assert_eq!(by_company[1].0, "Globex");

    let by_location = top_counts(&ds, |r| r.company_location.as_str(), 1);
    assert_eq!(by_location, vec![("Berlin".to_string(), 2)]);
}

#[test]
fn test_companies_are_deduplicated() {
    let list = companies(&dataset());
    let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Globex", "Initech"]);
    assert_eq!(list[1].location, "Paris");
    assert_eq!(list[1].linkedin, "globex");
}

#[test]
fn test_company_overview_prompt() {
    let list = companies(&dataset());
    let text = company_overview(&list[0]);

    assert!(text.starts_with("Can you provide a comprehensive overview of Acme"));
    assert!(text.contains("### Major Points"));
    assert!(text.contains("1. **Company Overview**"));
    assert!(text.contains("### Minor Points"));
    assert!(text.contains("- **Website**: https://acme.io"));
    assert!(text.contains("- **Niche**: Robotics"));
    assert!(text.lines().next().unwrap().chars().count() <= 80);
}

#[test]
fn test_advisories_follow_status_and_flags() {
    let ds = dataset();

    let carol = advisories(&ds.records()[2]);
    assert_eq!(carol.len(), 5);
    assert_eq!(carol[0].level, Level::Success);
    assert_eq!(carol[0].text, "You are in-talk with this Company/HR!");
    assert_eq!(carol[1].text, "You've already applied for Job/Internship!");
    assert_eq!(carol[2].level, Level::Alert);
    assert_eq!(carol[3].text, "You've already contacted with HR/Company on Twitter!");

    let bob = advisories(&ds.records()[1]);
    assert_eq!(bob[0].level, Level::Warning);
    assert_eq!(bob[0].text, "Mail is already sent!");

    let alice = advisories(&ds.records()[0]);
    assert_eq!(alice[0].level, Level::Info);
}

#[test]
fn test_overwrite_guard() {
    let missing = env::temp_dir().join("jobhunter_views_guard_missing.txt");
    fs::remove_file(&missing).ok();
    assert!(confirm_overwrite(&missing, false, &mut "".as_bytes()).is_ok());

    let existing = env::temp_dir().join("jobhunter_views_guard_existing.txt");
    fs::write(&existing, "x").unwrap();
    assert!(confirm_overwrite(&existing, true, &mut "".as_bytes()).is_ok());
    assert!(confirm_overwrite(&existing, false, &mut "Yes\n".as_bytes()).is_ok());
    assert!(matches!(
        confirm_overwrite(&existing, false, &mut "\n".as_bytes()),
        Err(AppError::Export(_))
    ));
}
