use std::path::Path;

use crate::foundation::error::{ScrollreelError, ScrollreelResult};

fn present(s: &str) -> bool {
    !s.is_empty()
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub background_text: String,
    pub hero_image: String,
    pub hero_image_alt: String,
    pub overlay_text: String,
    pub brand_name: String,
    pub nav_links: Vec<Link>,
    pub headline: String,
    pub subheadline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

impl HeroContent {
    pub fn has_content(&self) -> bool {
        present(&self.background_text) || present(&self.hero_image) || !self.nav_links.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroGridContent {
    pub title_line1: String,
    pub title_line2: String,
    pub description: String,
    pub portfolio_images: Vec<ImageRef>,
    pub accent_text: String,
}

impl IntroGridContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_line1) || present(&self.title_line2) || !self.portfolio_images.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceItem {
    pub icon_name: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesContent {
    pub subtitle: String,
    pub title_line1: String,
    pub title_line2_italic: String,
    pub description: String,
    pub services: Vec<ServiceItem>,
}

impl ServicesContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_line1) || !self.services.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    pub value: f64,
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureCard {
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceContent {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    pub stats_label: String,
    pub stats: Vec<Stat>,
    pub feature_cards: Vec<FeatureCard>,
    pub wide_image: String,
    pub wide_image_alt: String,
    pub wide_title: String,
    pub wide_description: String,
}

impl ExperienceContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_regular) || !self.stats.is_empty() || !self.feature_cards.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectsContent {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    pub view_all_text: String,
    pub view_all_href: String,
    pub view_project_text: String,
    pub projects: Vec<Project>,
}

impl ProjectsContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_regular) || !self.projects.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsContent {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    /// Skill categories (kept under the original key).
    pub testimonials: Vec<SkillCategory>,
}

impl SkillsContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_regular) || !self.testimonials.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementsContent {
    pub subtitle: String,
    pub title_regular: String,
    pub title_italic: String,
    pub cta_text: String,
    pub cta_button_text: String,
    pub cta_href: String,
    /// Achievement items (kept under the original key).
    pub faqs: Vec<Achievement>,
}

impl AchievementsContent {
    pub fn has_content(&self) -> bool {
        present(&self.title_regular) || !self.faqs.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub icon_name: String,
    pub href: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub logo_text: String,
    pub contact_label: String,
    pub email: String,
    pub location_text: String,
    pub navigation_label: String,
    pub nav_links: Vec<Link>,
    pub social_label: String,
    pub social_links: Vec<SocialLink>,
    pub tagline: String,
    pub copyright: String,
    pub bottom_links: Vec<Link>,
}

impl FooterContent {
    pub fn has_content(&self) -> bool {
        present(&self.logo_text) || present(&self.email) || !self.nav_links.is_empty()
    }
}

/// The whole page's content. Every field is optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub language: String,
    pub site_title: String,
    pub site_description: String,
    pub hero: HeroContent,
    pub intro_grid: IntroGridContent,
    pub services: ServicesContent,
    pub why_choose_me: ExperienceContent,
    pub featured_projects: ProjectsContent,
    pub testimonials: SkillsContent,
    pub faq: AchievementsContent,
    pub footer: FooterContent,
}

/// Document-level metadata; empty values are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SiteConfig {
    pub fn from_json_str(s: &str) -> ScrollreelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ScrollreelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ScrollreelError::config(format!("read {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn meta(&self) -> PageMeta {
        let keep = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        PageMeta {
            title: keep(&self.site_title),
            description: keep(&self.site_description),
            language: keep(&self.language),
        }
    }
}

/// Motion tunables. Defaults reproduce the stock choreography.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionSettings {
    /// Default reveal start: element top at this fraction of the viewport height.
    pub reveal_start: f64,
    /// Hero pin distance as a fraction of the viewport height.
    pub pin_distance: f64,
    /// Pin progress at which the hero exit begins.
    pub exit_start: f64,
    pub hero_scrub_lag: f64,
    pub parallax_lag: f64,
    pub snap_tolerance: f64,
    pub snap_min_duration: f64,
    pub snap_max_duration: f64,
    /// Idle seconds after scroll input before snapping.
    pub snap_delay: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            reveal_start: 0.85,
            pin_distance: 1.30,
            exit_start: 0.70,
            hero_scrub_lag: 0.6,
            parallax_lag: 1.2,
            snap_tolerance: 0.02,
            snap_min_duration: 0.15,
            snap_max_duration: 0.35,
            snap_delay: 0.0,
        }
    }
}

impl MotionSettings {
    pub fn validate(&self) -> ScrollreelResult<()> {
        let fraction = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ScrollreelError::validation(format!("{name} must be in [0, 1], got {v}")))
            }
        };
        fraction("revealStart", self.reveal_start)?;
        fraction("exitStart", self.exit_start)?;
        if !(0.0..0.5).contains(&self.snap_tolerance) {
            return Err(ScrollreelError::validation(format!(
                "snapTolerance must be in [0, 0.5), got {}",
                self.snap_tolerance
            )));
        }
        for (name, v) in [
            ("pinDistance", self.pin_distance),
            ("heroScrubLag", self.hero_scrub_lag),
            ("parallaxLag", self.parallax_lag),
            ("snapMinDuration", self.snap_min_duration),
            ("snapMaxDuration", self.snap_max_duration),
            ("snapDelay", self.snap_delay),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollreelError::validation(format!(
                    "{name} must be non-negative, got {v}"
                )));
            }
        }
        if self.snap_min_duration > self.snap_max_duration {
            return Err(ScrollreelError::validation(
                "snapMinDuration must not exceed snapMaxDuration",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/config.rs"]
mod tests;
