//! Read-only projections of the dataset: status listing, search,
//! pagination, aggregate counts, company directory.

use crate::models::{Dataset, OutreachStatus, Record};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct StatusFilter {
    pub status: Option<OutreachStatus>,
    pub applied: bool,
    pub linkedin: bool,
    pub twitter: bool,
    pub facebook: bool,
    /// Substring of the HR name or of the company name.
    pub search: Option<String>,
}

impl StatusFilter {
    pub fn accepts(&self, r: &Record) -> bool {
        if let Some(st) = self.status
            && r.status != st
        {
            return false;
        }
        if (self.applied && !r.job_status)
            || (self.linkedin && !r.linkedin_status)
            || (self.twitter && !r.twitter_status)
            || (self.facebook && !r.facebook_status)
        {
            return false;
        }
        match &self.search {
            Some(term) if !term.is_empty() => {
                r.hr_name.contains(term.as_str()) || r.company_name.contains(term.as_str())
            }
            _ => true,
        }
    }
}

/// Flat row of the status listing (also the export model).
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    pub hr_name: String,
    pub company_name: String,
    #[serde(serialize_with = "as_label")]
    pub status: OutreachStatus,
    pub job_status: &'static str,
    pub linkedin_status: &'static str,
    pub twitter_status: &'static str,
    pub facebook_status: &'static str,
}

fn as_label<S: serde::Serializer>(st: &OutreachStatus, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(st.label())
}

pub fn applied_label(v: bool) -> &'static str {
    if v { "Applied" } else { "Not Applied" }
}

pub fn reached_label(v: bool) -> &'static str {
    if v { "Reached Out" } else { "Not Reached Out" }
}

impl From<&Record> for StatusRow {
    fn from(r: &Record) -> Self {
        Self {
            hr_name: r.hr_name.clone(),
            company_name: r.company_name.clone(),
            status: r.status,
            job_status: applied_label(r.job_status),
            linkedin_status: reached_label(r.linkedin_status),
            twitter_status: reached_label(r.twitter_status),
            facebook_status: reached_label(r.facebook_status),
        }
    }
}

pub fn status_view(dataset: &Dataset, filter: &StatusFilter) -> Vec<StatusRow> {
    dataset
        .records()
        .iter()
        .filter(|r| filter.accepts(r))
        .map(StatusRow::from)
        .collect()
}

#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped to `pages`.
    pub number: usize,
    pub pages: usize,
    pub total: usize,
}

pub const MAX_PER_PAGE: usize = 20;

/// Slice `rows` into pages of `per_page` (clamped to 1..=20).
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total = rows.len();
    let pages = total.div_ceil(per_page).max(1);
    let number = page.clamp(1, pages);

    let start = ((number - 1) * per_page).min(total);
    let end = (start + per_page).min(total);

    Page {
        items: &rows[start..end],
        number,
        pages,
        total,
    }
}

/// Count per status, in pipeline order, over `rows`.
pub fn status_counts(rows: &[StatusRow]) -> Vec<(OutreachStatus, usize)> {
    OutreachStatus::ALL
        .into_iter()
        .map(|st| (st, rows.iter().filter(|r| r.status == st).count()))
        .collect()
}

/// The `limit` most frequent non-empty values, most frequent first;
/// ties are broken alphabetically.
pub fn top_counts<F>(dataset: &Dataset, key: F, limit: usize) -> Vec<(String, usize)>
where
    F: Fn(&Record) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in dataset.records() {
        let k = key(r).trim();
        if !k.is_empty() {
            *counts.entry(k).or_default() += 1;
        }
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.truncate(limit);
    out
}

/// Company-level columns of a record.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub name: String,
    pub website: String,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub location: String,
    pub niche: String,
}

/// One entry per company name (first occurrence wins), empty names skipped.
pub fn companies(dataset: &Dataset) -> Vec<Company> {
    let mut seen = std::collections::HashSet::new();
    dataset
        .records()
        .iter()
        .filter(|r| !r.company_name.trim().is_empty())
        .filter(|r| seen.insert(r.company_name.clone()))
        .map(|r| Company {
            name: r.company_name.clone(),
            website: r.company_website.clone(),
            linkedin: r.company_linkedin_username.clone(),
            twitter: r.company_twitter_username.clone(),
            facebook: r.company_facebook_username.clone(),
            location: r.company_location.clone(),
            niche: r.company_niche.clone(),
        })
        .collect()
}
