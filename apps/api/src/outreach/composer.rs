//! Personalized application-email composition.
//!
//! Every populated profile field contributes a sentence or section; missing
//! optional fields simply drop their section. Pure string assembly, no
//! templating engine.

use crate::models::profile::SearchProfile;

/// The configured applicant identity stamped into every outgoing email.
#[derive(Debug, Clone)]
pub struct SenderIdentity {
    pub name: String,
    pub email: String,
    pub resume_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

pub fn compose_subject(profile: &SearchProfile) -> String {
    format!("Application for {} Position", profile.job_title)
}

pub fn compose_body(profile: &SearchProfile, sender: &SenderIdentity) -> String {
    let mut body = String::new();

    body.push_str("Dear Hiring Manager,\n\n");
    body.push_str(&format!(
        "I hope this email finds you well. I am writing to express my strong interest in the {} position at your organization.\n\n",
        profile.job_title
    ));

    body.push_str(&experience_intro(profile));
    body.push_str(
        "I am excited about the opportunity to contribute to your team. My background includes:\n\n",
    );

    if !profile.required_skills.is_empty() {
        body.push_str(&format!(
            "- Proficient in: {}\n",
            profile.required_skills.join(", ")
        ));
    }
    if !profile.preferred_skills.is_empty() {
        body.push_str(&format!(
            "- Additional experience with: {}\n",
            profile.preferred_skills.join(", ")
        ));
    }
    body.push_str("- Strong problem-solving skills and ability to work in agile environments\n");
    body.push_str("- Passion for creating efficient, scalable solutions\n");
    if !profile.domains.is_empty() {
        body.push_str(&format!(
            "- Expertise spanning {} development\n",
            profile.domains.join(", ").to_lowercase()
        ));
    }
    body.push('\n');

    if !profile.industries.is_empty() {
        body.push_str(&format!(
            "I am passionate about working in the {} space. ",
            profile.industries.join(", ")
        ));
    }
    if !profile.company_types.is_empty() {
        body.push_str(&format!(
            "I am particularly interested in {} companies.",
            profile.company_types.join(", ").to_lowercase()
        ));
    }
    body.push_str("\n\n");

    body.push_str(&location_line(profile));

    if profile.is_urgent() {
        body.push_str(
            "I am actively seeking new opportunities and available for immediate start.\n\n",
        );
    }
    if let Some(range) = &profile.salary_range {
        body.push_str(&format!("My salary expectation is in the range of {range}.\n\n"));
    }

    body.push_str(
        "I have attached my resume for your review and would welcome the opportunity to discuss how my skills and enthusiasm can contribute to your team's success.\n\n",
    );

    let links = link_section(sender);
    if !links.is_empty() {
        body.push_str("You can also find more about my work:\n");
        body.push_str(&links);
        body.push('\n');
    }

    body.push_str(
        "Thank you for considering my application. I look forward to hearing from you.\n\n",
    );
    body.push_str(&format!("Best regards,\n{}\n{}\n", sender.name, sender.email));

    collapse_blank_runs(&body)
}

fn experience_intro(profile: &SearchProfile) -> String {
    match (
        profile.experience_level.as_deref(),
        profile.experience_years.as_deref(),
    ) {
        (Some(level), Some(years)) => format!(
            "As a {}-level professional with {} of experience, ",
            level.to_lowercase(),
            years
        ),
        (Some(level), None) => format!("As a {}-level professional, ", level.to_lowercase()),
        (None, Some(years)) => format!("With {years} of experience, "),
        (None, None) => "As a dedicated software professional, ".to_string(),
    }
}

fn location_line(profile: &SearchProfile) -> String {
    if !profile.locations.is_empty() {
        let joined = profile.locations.join(", ");
        if profile.remote_ok {
            format!("I am open to opportunities in {joined} as well as remote positions.\n\n")
        } else {
            format!("I am specifically interested in opportunities in {joined}.\n\n")
        }
    } else if profile.remote_ok {
        "I am open to both on-site and remote opportunities.\n\n".to_string()
    } else {
        String::new()
    }
}

fn link_section(sender: &SenderIdentity) -> String {
    let mut links = String::new();
    if let Some(url) = &sender.resume_url {
        links.push_str(&format!("- Resume: {url}\n"));
    }
    if let Some(url) = &sender.github_url {
        links.push_str(&format!("- GitHub: {url}\n"));
    }
    if let Some(url) = &sender.linkedin_url {
        links.push_str(&format!("- LinkedIn: {url}\n"));
    }
    links
}

/// Collapses runs of blank lines down to a single blank line and trims the
/// edges, so dropped sections leave no gaps behind.
fn collapse_blank_runs(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && out.last().is_some_and(|l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
