use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Text stored in both site languages
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LocalizedText {
    /// Arabic text (primary language of the site)
    #[serde(default)]
    pub ar: String,
    /// English text
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    /// Creates a bilingual text
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Returns the text for `lang`, falling back to Arabic
    #[must_use]
    pub fn get(&self, lang: &str) -> &str {
        match lang {
            "en" if !self.en.is_empty() => &self.en,
            _ => &self.ar,
        }
    }

    /// True when neither language has content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ar.trim().is_empty() && self.en.trim().is_empty()
    }
}

/// Landing page hero block
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    /// Main heading
    #[serde(default)]
    pub title: LocalizedText,
    /// Supporting sentence under the heading
    #[serde(default)]
    pub subtitle: LocalizedText,
    /// Call-to-action button label
    #[serde(default)]
    pub cta_text: LocalizedText,
    /// Call-to-action target
    #[serde(default)]
    pub cta_link: String,
    /// Background image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// Study destination shown in the countries section
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Stable identifier (usually the ISO code)
    pub id: String,
    /// Country name
    pub name: LocalizedText,
    /// Short description of studying there
    #[serde(default)]
    pub description: LocalizedText,
    /// Flag emoji or image URL
    #[serde(default)]
    pub flag: String,
    /// Card image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of partner universities
    #[serde(default)]
    pub universities: u32,
}

/// Student testimonial
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Stable identifier
    pub id: String,
    /// Student name
    pub name: LocalizedText,
    /// Quote
    pub text: LocalizedText,
    /// University the student was placed at
    #[serde(default)]
    pub university: String,
    /// Destination country id
    #[serde(default)]
    pub country: String,
    /// Rating from 1 to 5
    #[serde(default = "default_rating")]
    pub rating: u8,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_rating() -> u8 {
    5
}

impl Testimonial {
    /// Rating clamped into the displayable 1..=5 range
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// SEO metadata for the site or a single page
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// `<title>` content
    #[serde(default)]
    pub title: LocalizedText,
    /// Meta description
    #[serde(default)]
    pub description: LocalizedText,
    /// Meta keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Open Graph image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// Canonical URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}
