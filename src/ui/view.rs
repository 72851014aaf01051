//! Terminal rendering of records, advisories and listings.

use crate::core::views::{Company, Page, StatusRow};
use crate::models::{Field, OutreachStatus, Record};
use crate::ui::messages::{alert, header, info, success, warning};
use crate::utils::colors::{BLUE, RESET, YELLOW, colorize_optional};
use crate::utils::table::Table;

const HR_FIELDS: [Field; 7] = [
    Field::HrName,
    Field::HrJobTitle,
    Field::HrEmail,
    Field::HrPhone,
    Field::HrLinkedin,
    Field::HrTwitter,
    Field::HrFacebook,
];

const COMPANY_FIELDS: [Field; 8] = [
    Field::CompanyName,
    Field::CompanyNiche,
    Field::CompanyWebsite,
    Field::CompanyEmail,
    Field::CompanyLocation,
    Field::CompanyLinkedin,
    Field::CompanyTwitter,
    Field::CompanyFacebook,
];

const STATUS_FIELDS: [Field; 5] = [
    Field::Status,
    Field::JobStatus,
    Field::LinkedinStatus,
    Field::TwitterStatus,
    Field::FacebookStatus,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Success,
    Alert,
}

/// Display-only banner derived from the stored status values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub level: Level,
    pub text: &'static str,
}

pub fn advisories(r: &Record) -> Vec<Advisory> {
    let mut out = vec![match r.status {
        OutreachStatus::NoOpenings => Advisory {
            level: Level::Info,
            text: "There is no opening for Job or You've not reach out to them!",
        },
        OutreachStatus::InvitationSent => Advisory {
            level: Level::Warning,
            text: "Mail is already sent!",
        },
        OutreachStatus::InTalks => Advisory {
            level: Level::Success,
            text: "You are in-talk with this Company/HR!",
        },
    }];

    let flags = [
        (
            r.job_status,
            "You've already applied for Job/Internship!",
            "You've not applied for Job/Internship!",
        ),
        (
            r.linkedin_status,
            "You've already contacted with HR/Company on LinkedIn!",
            "You've not contacted with HR/Company on LinkedIn!",
        ),
        (
            r.twitter_status,
            "You've already contacted with HR/Company on Twitter!",
            "You've not contacted with HR/Company on Twitter!",
        ),
        (
            r.facebook_status,
            "You've already contacted with HR/Company on Facebook!",
            "You've not contacted with HR/Company on Facebook!",
        ),
    ];
    for (done, yes, no) in flags {
        out.push(if done {
            Advisory {
                level: Level::Success,
                text: yes,
            }
        } else {
            Advisory {
                level: Level::Alert,
                text: no,
            }
        });
    }
    out
}

pub fn print_advisories(r: &Record) {
    for a in advisories(r) {
        match a.level {
            Level::Info => info(a.text),
            Level::Warning => warning(a.text),
            Level::Success => success(a.text),
            Level::Alert => alert(a.text),
        }
    }
}

fn print_fields(r: &Record, fields: &[Field], original: Option<&Record>) {
    let width = fields.iter().map(|f| f.label().len()).max().unwrap_or(0);
    for f in fields {
        let value = r.get(*f);
        let changed = original.is_some_and(|o| o.get(*f) != value);
        let marker = if changed {
            format!(" {YELLOW}(changed){RESET}")
        } else {
            String::new()
        };
        println!(
            "  {:<width$} : {}{}",
            f.label(),
            colorize_optional(&value),
            marker,
            width = width
        );
    }
}

/// Locked view: contact and company details, read-only.
pub fn print_record(r: &Record) {
    header(format!("{} @ {}", r.hr_name, r.company_name));
    println!("{BLUE}HR contact{RESET}");
    print_fields(r, &HR_FIELDS, None);
    println!("{BLUE}Company{RESET}");
    print_fields(r, &COMPANY_FIELDS, None);
    println!();
}

/// Unlocked view: staged values, changed fields marked.
pub fn print_staged(staged: &Record, original: &Record) {
    header(format!("Editing {} @ {}", original.hr_name, original.company_name));
    println!("{BLUE}HR contact{RESET}");
    print_fields(staged, &HR_FIELDS, Some(original));
    println!("{BLUE}Company{RESET}");
    print_fields(staged, &COMPANY_FIELDS, Some(original));
    println!("{BLUE}Status{RESET}");
    print_fields(staged, &STATUS_FIELDS, Some(original));
    println!();
}

pub fn print_status_page(page: &Page<'_, StatusRow>) {
    let mut table = Table::with_headers(&[
        "HR", "Company", "Status", "Job", "LinkedIn", "Twitter", "Facebook",
    ]);
    for row in page.items {
        table.add_row(vec![
            row.hr_name.clone(),
            row.company_name.clone(),
            row.status.badge().to_string(),
            row.job_status.to_string(),
            row.linkedin_status.to_string(),
            row.twitter_status.to_string(),
            row.facebook_status.to_string(),
        ]);
    }
    print!("{}", table.render());
    println!(
        "\nPage {}/{} ({} records)",
        page.number, page.pages, page.total
    );
}

/// Horizontal bar chart of counts.
pub fn print_counts(title: &str, counts: &[(String, usize)]) {
    header(title);
    if counts.is_empty() {
        info("No data.");
        return;
    }
    let label_w = counts.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    for (label, n) in counts {
        let bar = "█".repeat((n * 30).div_ceil(max));
        println!("  {:<label_w$} {:>4} {}", label, n, bar, label_w = label_w);
    }
    println!();
}

pub fn print_companies(companies: &[Company]) {
    let mut table = Table::with_headers(&[
        "Company", "Website", "LinkedIn", "Twitter", "Facebook", "Location", "Niche",
    ]);
    for c in companies {
        table.add_row(vec![
            c.name.clone(),
            c.website.clone(),
            c.linkedin.clone(),
            c.twitter.clone(),
            c.facebook.clone(),
            c.location.clone(),
            c.niche.clone(),
        ]);
    }
    print!("{}", table.render());
}
