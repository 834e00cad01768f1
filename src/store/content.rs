use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::animation::skills::SkillTargets;
use crate::animation::typing::WordList;
use crate::error::InvalidConfiguration;

#[derive(Embed)]
#[folder = "assets/content/"]
struct ContentAssets;

const DEFAULT_CONTENT: &str = "portfolio.toml";

/// Static text shown by the sections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub greeting: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub featured: Vec<String>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub contact: Vec<ContactMethod>,
    #[serde(default)]
    pub quick_messages: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactMethod {
    pub name: String,
    pub value: String,
}

impl Portfolio {
    /// Load `path` if given, otherwise the bundled portfolio.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("reading portfolio {}", path.display()))?;
                Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
            }
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self> {
        let file = ContentAssets::get(DEFAULT_CONTENT)
            .context("bundled portfolio content is missing")?;
        let content = std::str::from_utf8(file.data.as_ref())?;
        Self::parse(content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn role_words(&self) -> Result<WordList, InvalidConfiguration> {
        WordList::new(self.roles.iter().cloned())
    }

    /// Every skill across all categories, in display order.
    pub fn skill_targets(&self) -> Result<SkillTargets, InvalidConfiguration> {
        SkillTargets::new(
            self.skill_categories
                .iter()
                .flat_map(|c| c.skills.iter())
                .map(|s| (s.name.clone(), s.level)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_portfolio_is_valid() {
        let portfolio = Portfolio::bundled().unwrap();
        assert!(!portfolio.name.is_empty());
        assert!(portfolio.role_words().is_ok());
        let targets = portfolio.skill_targets().unwrap();
        assert!(!targets.is_empty());
        assert!(!portfolio.experience.is_empty());
        assert!(!portfolio.quick_messages.is_empty());
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let portfolio = Portfolio::parse(
            r#"
name = "Ada"
roles = ["Engineer"]
"#,
        )
        .unwrap();
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.skill_targets().unwrap().is_empty());
        assert_eq!(portfolio.role_words().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_roles_rejected() {
        let portfolio = Portfolio::parse("name = \"Ada\"\nroles = []\n").unwrap();
        assert_eq!(
            portfolio.role_words().unwrap_err(),
            InvalidConfiguration::EmptyWordList
        );
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let doc = r#"
name = "Ada"
roles = ["Engineer"]

[[skill_categories]]
name = "Core"
skills = [{ name = "Rust", level = 120 }]
"#;
        let portfolio = Portfolio::parse(doc).unwrap();
        assert!(matches!(
            portfolio.skill_targets(),
            Err(InvalidConfiguration::TargetOutOfRange { value: 120, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        fs::write(&path, "name = \"Grace\"\nroles = [\"Admiral\"]\n").unwrap();
        let portfolio = Portfolio::load(Some(&path)).unwrap();
        assert_eq!(portfolio.name, "Grace");
        assert!(Portfolio::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
