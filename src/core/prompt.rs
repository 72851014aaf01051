//! Company overview prompt, ready to paste into an LLM chat.

use crate::core::views::Company;
use std::fmt::Write;

const WRAP_WIDTH: usize = 80;

const MAJOR_POINTS: &[(&str, &[&str])] = &[
    (
        "Company Overview",
        &[
            "Mission and vision statements",
            "Core values and culture",
            "Company history and milestones",
        ],
    ),
    (
        "Products and Services",
        &[
            "Key products or services offered",
            "Unique selling propositions (USPs)",
            "Recent launches or innovations",
        ],
    ),
    (
        "Market Position",
        &[
            "Industry standing (leaders, competitors)",
            "Target audience and customer demographics",
            "Market trends and challenges",
        ],
    ),
    (
        "Financial Health",
        &[
            "Recent funding rounds or investments",
            "Revenue growth and profitability",
            "Key financial metrics",
        ],
    ),
    (
        "Work Culture",
        &[
            "Employee reviews",
            "Work-life balance and remote work policies",
            "Diversity and inclusion initiatives",
        ],
    ),
    (
        "Career Opportunities",
        &[
            "Current job openings and roles",
            "Typical career progression paths",
            "Professional development opportunities",
        ],
    ),
    (
        "Leadership Team",
        &[
            "Key executives and their backgrounds",
            "Leadership style and management approach",
        ],
    ),
];

const MINOR_POINTS: &[(&str, &[&str])] = &[
    (
        "Company News",
        &[
            "Recent press releases or news articles",
            "Awards and recognitions",
            "Community involvement and social responsibility efforts",
        ],
    ),
    (
        "Networking Opportunities",
        &[
            "Key employees to connect with on LinkedIn",
            "Relevant industry events or webinars",
        ],
    ),
    (
        "Tech Stack and Tools",
        &[
            "Technologies used in operations",
            "Tools for project management and collaboration",
        ],
    ),
    (
        "Work Environment",
        &[
            "Office layout and team dynamics",
            "Employee engagement activities",
        ],
    ),
    (
        "Interview Process",
        &["Typical interview format and common questions"],
    ),
    (
        "Compensation and Benefits",
        &["Salary ranges for specific roles", "Benefits offered"],
    ),
    (
        "Company Policies",
        &[
            "Code of conduct and ethical guidelines",
            "Policies on promotions and performance reviews",
        ],
    ),
];

fn write_section(out: &mut String, title: &str, points: &[(&str, &[&str])]) {
    let _ = writeln!(out, "### {title}");
    for (n, (heading, items)) in points.iter().enumerate() {
        let _ = writeln!(out, "{}. **{}**", n + 1, heading);
        for item in items.iter() {
            let _ = writeln!(out, "   - {item}");
        }
        out.push('\n');
    }
}

pub fn company_overview(company: &Company) -> String {
    let intro = format!(
        "Can you provide a comprehensive overview of {} that includes the following information:",
        company.name
    );
    let mut out = textwrap::fill(&intro, WRAP_WIDTH);
    out.push_str("\n\n");

    write_section(&mut out, "Major Points", MAJOR_POINTS);
    write_section(&mut out, "Minor Points", MINOR_POINTS);

    out.push_str("### Additional Information\n");
    for (label, value) in [
        ("Website", &company.website),
        ("LinkedIn", &company.linkedin),
        ("Twitter", &company.twitter),
        ("Facebook", &company.facebook),
        ("Location", &company.location),
        ("Niche", &company.niche),
    ] {
        let _ = writeln!(out, "- **{label}**: {value}");
    }
    out
}
