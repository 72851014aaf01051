use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a contact/company stands in the outreach pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum OutreachStatus {
    #[default]
    NoOpenings,
    InvitationSent,
    InTalks,
}

impl OutreachStatus {
    pub const ALL: [OutreachStatus; 3] = [
        OutreachStatus::NoOpenings,
        OutreachStatus::InvitationSent,
        OutreachStatus::InTalks,
    ];

    /// Label as stored in the dataset file.
    pub fn label(&self) -> &'static str {
        match self {
            OutreachStatus::NoOpenings => "No Openings",
            OutreachStatus::InvitationSent => "Invitation Sent",
            OutreachStatus::InTalks => "In Talks",
        }
    }

    /// Parse a stored label. Matching ignores case and surrounding blanks;
    /// an empty cell means no outreach yet.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Some(OutreachStatus::NoOpenings);
        }
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
    }

    /// Colored marker used by the status view.
    pub fn badge(&self) -> &'static str {
        match self {
            OutreachStatus::NoOpenings => "🔴 No Openings",
            OutreachStatus::InvitationSent => "🟡 Invitation Sent",
            OutreachStatus::InTalks => "🟢 In Talks",
        }
    }
}

impl std::fmt::Display for OutreachStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OutreachStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for OutreachStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        OutreachStatus::from_label(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown status '{raw}' (expected No Openings, Invitation Sent or In Talks)"
            ))
        })
    }
}

/// Boolean cells as written by spreadsheet tools: `True` / `False`.
pub mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(s: &str) -> Option<bool> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "1.0" => Some(true),
            "false" | "0" | "no" | "n" | "0.0" | "" => Some(false),
            _ => None,
        }
    }

    pub fn as_str(v: bool) -> &'static str {
        if v { "True" } else { "False" }
    }

    pub fn serialize<S: Serializer>(v: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(as_str(*v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid boolean '{raw}'")))
    }
}
