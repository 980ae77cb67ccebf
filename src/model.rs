//! Page content model and contact-form validation.
//!
//! The portfolio's copy lives in `content/profile.json`, embedded at compile
//! time and deserialized once at startup. A parse failure falls back to an
//! empty profile so a content typo can never blank the whole page.

use serde::{Deserialize, Serialize};

const PROFILE_JSON: &str = include_str!("../content/profile.json");

/// Page sections, in document order. Doubles as the nav model: each entry is
/// both an element id and a nav label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn load() -> Result<Profile, serde_json::Error> {
        serde_json::from_str(PROFILE_JSON)
    }
}

/// Same acceptance as the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, no
/// whitespace anywhere, and a dot in the domain with at least one character
/// on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_profile_parses() {
        let profile = Profile::load().expect("profile.json must deserialize");
        assert!(!profile.name.is_empty());
        assert!(is_valid_email(&profile.email));
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = Profile::load().unwrap();
        let text = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&text).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn section_ids_serialize_as_anchors() {
        for id in SectionId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.anchor()));
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn domain_dot_needs_neighbors() {
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        // dots next to dots still satisfy the pattern
        assert!(is_valid_email("user@a..b"));
    }
}
