// Portfolio content - everything the page renders, as typed data
//
// Content is TOML (see bundled.rs for the full layout). The bundled copy is
// compiled in; a user file given by `content` in the config replaces it
// wholesale. Nothing here has behavior beyond loading and validation.

mod bundled;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use bundled::CONTENT as BUNDLED_CONTENT;

/// Complete page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub experience: Experience,
    pub testimonials: Testimonials,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub role: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub description: String,
    pub location: String,
    pub email: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Label, title and subtitle shown above a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHeader {
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Static text before the rotating phrase
    pub lead: String,
    /// Phrases cycled by the typewriter
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub header: SectionHeader,
    pub greeting: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub header: SectionHeader,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projects {
    pub header: SectionHeader,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub header: SectionHeader,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonials {
    pub header: SectionHeader,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub quote: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Star rating, 1-5
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// First letter of each word, e.g. "RR" for "Rakesh Reddy"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub header: SectionHeader,
    pub heading: String,
    pub text: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

impl Portfolio {
    /// Parse and validate portfolio TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(content).context("Failed to parse portfolio content")?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Content compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CONTENT).context("Bundled portfolio content is invalid")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {:?}", path))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid content file {:?}", path))
    }

    /// User file if configured, bundled content otherwise
    pub fn load(content_path: Option<&Path>) -> Result<Self> {
        match content_path {
            Some(path) => {
                tracing::info!("Loading portfolio content from {:?}", path);
                Self::from_file(path)
            }
            None => Self::bundled(),
        }
    }

    /// Reject content the page can't render sensibly
    pub fn validate(&self) -> Result<()> {
        if self.profile.email.trim().is_empty() {
            bail!("profile.email must not be empty");
        }
        if self.hero.phrases.iter().all(|p| p.trim().is_empty()) {
            bail!("hero.phrases needs at least one non-empty phrase");
        }
        for category in &self.skills.categories {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                bail!(
                    "skill '{}' in '{}' has level {} (max 100)",
                    skill.name,
                    category.title,
                    skill.level
                );
            }
        }
        if let Some(t) = self.testimonials.items.iter().find(|t| t.rating > 5) {
            bail!("testimonial from '{}' has rating {} (max 5)", t.name, t.rating);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let portfolio = Portfolio::bundled().unwrap();
        assert_eq!(portfolio.profile.full_name(), "Phanidhar Akula");
        assert_eq!(portfolio.profile.email, "phanidharakula@gmail.com");
        assert_eq!(portfolio.hero.phrases.len(), 4);
        assert_eq!(portfolio.about.stats.len(), 4);
        assert_eq!(portfolio.skills.categories.len(), 4);
        assert_eq!(portfolio.projects.items.len(), 4);
        assert_eq!(portfolio.experience.roles.len(), 2);
        assert_eq!(portfolio.testimonials.items.len(), 2);
        assert_eq!(portfolio.contact.socials.len(), 4);
        assert!(portfolio.about.education.is_some());
    }

    #[test]
    fn initials_skip_punctuation() {
        let portfolio = Portfolio::bundled().unwrap();
        let initials: Vec<_> = portfolio
            .testimonials
            .items
            .iter()
            .map(Testimonial::initials)
            .collect();
        assert_eq!(initials, vec!["DDR", "RR"]);
    }

    #[test]
    fn rejects_out_of_range_skill_level() {
        let content = BUNDLED_CONTENT.replace("level = 95", "level = 150");
        let err = Portfolio::from_toml_str(&content).unwrap_err();
        assert!(format!("{:#}", err).contains("max 100"));
    }

    #[test]
    fn rejects_empty_phrases() {
        let mut portfolio = Portfolio::bundled().unwrap();
        portfolio.hero.phrases = vec!["  ".to_string()];
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn missing_file_has_context() {
        let err = Portfolio::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn override_file_replaces_bundled() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("content.toml");
        let content = BUNDLED_CONTENT.replace("name = \"Phanidhar\"", "name = \"Ada\"");
        std::fs::write(&path, content).unwrap();

        let portfolio = Portfolio::load(Some(&path)).unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
    }
}
