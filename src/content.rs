//! Page copy and tunables, loaded from the embedded `content/site.json`.

use crate::{carousel::CarouselSettings, marquee::MarqueeConfig, scroll::AnimationSettings};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");
pub const ASSET_ROOT: &str = "/assets/";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {list} id `{id}`")]
    DuplicateId { list: &'static str, id: String },
    #[error("navigation item `{id}` points at `{href}`, expected an in-page anchor")]
    InvalidAnchor { id: String, href: String },
    #[error("marquee {field} must be {expected}")]
    InvalidMarquee {
        field: &'static str,
        expected: &'static str,
    },
    #[error("asset `{path}` must live under /assets/")]
    InvalidAsset { path: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
    /// SVG path data for a 24x24 stroked icon.
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroAction {
    pub label: String,
    /// Anchor id to scroll to.
    pub target: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub actions: Vec<HeroAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SkillsConfig {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub marquee: MarqueeConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectItem {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub asset: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortfolioContent {
    pub heading: String,
    pub highlight: String,
    pub blurb: String,
    pub image: String,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectsContent {
    pub heading: String,
    pub highlight: String,
    pub blurb: String,
    #[serde(default)]
    pub items: Vec<ProjectItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// Lottie vector animation.
    Animation,
}

impl MediaKind {
    pub fn from_path(path: &str) -> Self {
        let extension = path
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json" | "lottie") => Self::Animation,
            _ => Self::Image,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub meta: PageMeta,
    pub navigation: Vec<NavItem>,
    pub hero: HeroContent,
    #[serde(default)]
    pub skills: SkillsConfig,
    pub about: AboutContent,
    pub portfolio: PortfolioContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    #[serde(default)]
    pub animations: AnimationSettings,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("navigation", self.navigation.iter().map(|item| item.id.clone()))?;
        ensure_unique(
            "project",
            self.projects.items.iter().map(|item| item.id.to_string()),
        )?;

        for item in &self.navigation {
            let anchor = item.href.strip_prefix('#').unwrap_or_default();
            if anchor.is_empty() || anchor.contains(char::is_whitespace) {
                return Err(ContentError::InvalidAnchor {
                    id: item.id.clone(),
                    href: item.href.clone(),
                });
            }
        }

        let marquee = &self.skills.marquee;
        if !marquee.speed.is_finite() {
            return Err(ContentError::InvalidMarquee {
                field: "speed",
                expected: "a finite number",
            });
        }
        if !marquee.gap.is_finite() || marquee.gap < 0.0 {
            return Err(ContentError::InvalidMarquee {
                field: "gap",
                expected: "a finite, non-negative number",
            });
        }

        let assets = std::iter::once(&self.portfolio.image)
            .chain(self.projects.items.iter().map(|item| &item.asset));
        for path in assets {
            if !path.starts_with(ASSET_ROOT) {
                return Err(ContentError::InvalidAsset { path: path.clone() });
            }
        }

        Ok(())
    }
}

fn ensure_unique(
    list: &'static str,
    ids: impl IntoIterator<Item = String>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(ContentError::DuplicateId { list, id });
        }
    }
    Ok(())
}
