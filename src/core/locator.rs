//! Resolution of a user selection (HR name or company name) to records.

use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Record};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Axis a selection is made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selector {
    Hr,
    Company,
}

impl Selector {
    pub fn column(&self) -> &'static str {
        match self {
            Selector::Hr => "hr_name",
            Selector::Company => "company_name",
        }
    }

    fn value_of<'r>(&self, record: &'r Record) -> &'r str {
        match self {
            Selector::Hr => &record.hr_name,
            Selector::Company => &record.company_name,
        }
    }
}

/// What to do when a selection matches several records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmbiguityPolicy {
    /// Act on the first match by dataset order.
    #[default]
    #[serde(rename = "first")]
    FirstMatch,
    /// Refuse to act until the selection is unique.
    #[serde(rename = "reject")]
    Reject,
}

#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub index: usize,
    pub record: &'a Record,
}

/// All records matching a selection, in dataset order.
#[derive(Debug)]
pub struct Matches<'a> {
    selector: Selector,
    value: String,
    hits: Vec<Match<'a>>,
}

impl<'a> Matches<'a> {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.hits.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match<'a>> {
        self.hits.iter()
    }

    pub fn first(&self) -> Option<Match<'a>> {
        self.hits.first().copied()
    }

    /// Pick one match according to `policy`.
    pub fn resolve(&self, policy: AmbiguityPolicy) -> AppResult<Match<'a>> {
        match (self.hits.as_slice(), policy) {
            ([], _) => Err(AppError::NotFound {
                field: self.selector.column().to_string(),
                value: self.value.clone(),
            }),
            ([_, _, ..], AmbiguityPolicy::Reject) => Err(AppError::Ambiguous {
                field: self.selector.column().to_string(),
                value: self.value.clone(),
                count: self.hits.len(),
            }),
            ([first, ..], _) => Ok(*first),
        }
    }
}

/// Every record whose `selector` field equals `value` exactly.
pub fn locate<'a>(dataset: &'a Dataset, selector: Selector, value: &str) -> Matches<'a> {
    let hits = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| selector.value_of(r) == value)
        .map(|(index, record)| Match { index, record })
        .collect();

    Matches {
        selector,
        value: value.to_string(),
        hits,
    }
}

/// Sorted distinct values on an axis, as offered for selection.
pub fn distinct_values(dataset: &Dataset, selector: Selector) -> Vec<String> {
    let mut values: Vec<String> = dataset
        .records()
        .iter()
        .map(|r| selector.value_of(r).to_string())
        .collect();
    values.sort();
    values.dedup();
    values
}
