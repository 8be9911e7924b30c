use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::icons::Icon;

static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
    pub github: String,
    pub linkedin: String,
    pub about: Vec<String>,
    pub contact_title: String,
    pub contact_blurb: String,
    pub copyright_year: u16,
}

/// An icon link to one of the profile's contact channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: Icon,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
}

impl Profile {
    pub fn contact_links(&self) -> Vec<ContactLink> {
        vec![
            ContactLink {
                icon: Icon::Mail,
                href: format!("mailto:{}", self.email),
                external: false,
            },
            ContactLink {
                icon: Icon::Phone,
                href: format!("tel:{}", self.phone),
                external: false,
            },
            ContactLink {
                icon: Icon::Github,
                href: self.github.clone(),
                external: true,
            },
            ContactLink {
                icon: Icon::Linkedin,
                href: self.linkedin.clone(),
                external: true,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub organization: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: parse_asset("profile.json")?,
            experience: parse_asset("experience.json")?,
            skills: parse_asset("skills.json")?,
        })
    }

    pub fn skills_for(&self, category: &str) -> Option<&[String]> {
        self.skills
            .iter()
            .find(|c| c.key == category)
            .map(|c| c.skills.as_slice())
    }
}

/// Content baked into the binary, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

fn parse_asset<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse(name, &file.data)
}

fn parse<T: DeserializeOwned>(name: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("content should load");

        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.profile.about.len(), 3);
        assert!(portfolio.profile.email.contains('@'));

        assert_eq!(portfolio.experience.len(), 2);
        let first = &portfolio.experience[0];
        assert_eq!(first.organization, "Fundación Soluciones Colombia");
        assert_eq!(first.achievements.len(), 3);

        let keys: Vec<&str> = portfolio.skills.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            ["frontend", "backend", "database", "cloud", "tools", "mobile"]
        );
    }

    #[test]
    fn test_skills_lookup() {
        let portfolio = portfolio();

        let frontend = portfolio.skills_for("frontend").expect("frontend exists");
        assert_eq!(frontend.first().map(String::as_str), Some("React"));
        assert!(frontend.contains(&"JavaScript".to_string()));

        assert!(portfolio.skills_for("cobol").is_none());
    }

    #[test]
    fn test_skill_icons_resolve() {
        let icons: Vec<Icon> = portfolio().skills.iter().map(|c| c.icon).collect();
        assert_eq!(
            icons,
            [
                Icon::Code,
                Icon::Server,
                Icon::Database,
                Icon::Cloud,
                Icon::Globe,
                Icon::Smartphone
            ]
        );

        // an icon-font class name is not a glyph we can draw
        let err = parse::<Vec<SkillCategory>>(
            "skills.json",
            br#"[{"key": "frontend", "title": "Frontend", "icon": "extra-code", "skills": []}]"#,
        );
        assert!(matches!(err, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_contact_links() {
        let profile = &portfolio().profile;
        let links = profile.contact_links();

        let icons: Vec<Icon> = links.iter().map(|l| l.icon).collect();
        assert_eq!(icons, [Icon::Mail, Icon::Phone, Icon::Github, Icon::Linkedin]);
        assert_eq!(links[0].href, format!("mailto:{}", profile.email));
        assert_eq!(links[1].href, "tel:+573155765423");
        assert!(links[2].href.starts_with("https://github.com/"));
        assert!(links.iter().all(|l| l.external == l.href.starts_with("https://")));
        // every link has a drawable glyph and a visible caption
        assert!(links
            .iter()
            .all(|l| !l.icon.paths().is_empty() && !l.icon.label().is_empty()));
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(portfolio().profile.copyright_year, 2024);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_asset::<Profile>("missing.json"),
            Err(ContentError::Missing(name)) if name == "missing.json"
        ));

        let err = parse::<Vec<ExperienceEntry>>("experience.json", b"[{\"role\": 1}]")
            .expect_err("bad shape should fail");
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "experience.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
