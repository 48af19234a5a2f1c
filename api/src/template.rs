use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE: &str = "modern";

// the six fixed looks a media kit can be rendered with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Modern,
    Creative,
    Professional,
    Lifestyle,
    Fashion,
    Tech,
}

// css values applied to the preview page
//
// background is the page gradient, accent is used for headings, price figures and the call to
// action card, cards is the translucent fill behind every section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePreset {
    pub background: &'static str,
    pub accent: &'static str,
    pub cards: &'static str,
}

impl Template {
    pub fn all() -> [Self; 6] {
        [
            Self::Modern,
            Self::Creative,
            Self::Professional,
            Self::Lifestyle,
            Self::Fashion,
            Self::Tech,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|template| template.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Creative => "creative",
            Self::Professional => "professional",
            Self::Lifestyle => "lifestyle",
            Self::Fashion => "fashion",
            Self::Tech => "tech",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Creative => "Creative",
            Self::Professional => "Professional",
            Self::Lifestyle => "Lifestyle",
            Self::Fashion => "Fashion",
            Self::Tech => "Tech",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Modern => "Clean, minimalist design with bold typography",
            Self::Creative => "Vibrant colors and artistic layouts",
            Self::Professional => "Corporate-friendly with sophisticated styling",
            Self::Lifestyle => "Warm tones perfect for lifestyle influencers",
            Self::Fashion => "Elegant and stylish for fashion content",
            Self::Tech => "Sleek design for tech and gaming influencers",
        }
    }

    // only modern carries the "Popular" badge in the selector
    pub fn is_popular(self) -> bool {
        self == Self::Modern
    }

    // overlay gradient on the selector thumbnail
    pub fn swatch(self) -> &'static str {
        match self {
            Self::Modern => "linear-gradient(90deg, #A855F7, #3B82F6)",
            Self::Creative => "linear-gradient(90deg, #EC4899, #F97316)",
            Self::Professional => "linear-gradient(90deg, #4B5563, #2563EB)",
            Self::Lifestyle => "linear-gradient(90deg, #22C55E, #14B8A6)",
            Self::Fashion => "linear-gradient(90deg, #F43F5E, #EC4899)",
            Self::Tech => "linear-gradient(90deg, #6366F1, #A855F7)",
        }
    }

    pub fn thumbnail(self) -> &'static str {
        match self {
            Self::Modern => "linear-gradient(135deg, #F3E8FF, #DBEAFE)",
            Self::Creative => "linear-gradient(135deg, #FCE7F3, #FFEDD5)",
            Self::Professional => "linear-gradient(135deg, #F3F4F6, #DBEAFE)",
            Self::Lifestyle => "linear-gradient(135deg, #DCFCE7, #CCFBF1)",
            Self::Fashion => "linear-gradient(135deg, #FFE4E6, #FCE7F3)",
            Self::Tech => "linear-gradient(135deg, #E0E7FF, #F3E8FF)",
        }
    }

    pub fn style(self) -> StylePreset {
        match self {
            Self::Modern => StylePreset {
                background: "linear-gradient(135deg, #FAF5FF, #FFFFFF, #EFF6FF)",
                accent: "linear-gradient(90deg, #9333EA, #2563EB)",
                cards: "rgba(255, 255, 255, 0.7)",
            },
            Self::Creative => StylePreset {
                background: "linear-gradient(135deg, #FDF2F8, #FFF7ED, #FEFCE8)",
                accent: "linear-gradient(90deg, #DB2777, #EA580C)",
                cards: "rgba(255, 255, 255, 0.7)",
            },
            Self::Professional => StylePreset {
                background: "linear-gradient(135deg, #F9FAFB, #EFF6FF, #EEF2FF)",
                accent: "linear-gradient(90deg, #4B5563, #2563EB)",
                cards: "rgba(255, 255, 255, 0.8)",
            },
            Self::Lifestyle => StylePreset {
                background: "linear-gradient(135deg, #F0FDF4, #F0FDFA, #ECFDF5)",
                accent: "linear-gradient(90deg, #16A34A, #0D9488)",
                cards: "rgba(255, 255, 255, 0.7)",
            },
            Self::Fashion => StylePreset {
                background: "linear-gradient(135deg, #FFF1F2, #FDF2F8, #FAF5FF)",
                accent: "linear-gradient(90deg, #E11D48, #DB2777)",
                cards: "rgba(255, 255, 255, 0.7)",
            },
            Self::Tech => StylePreset {
                background: "linear-gradient(135deg, #EEF2FF, #FAF5FF, #EFF6FF)",
                accent: "linear-gradient(90deg, #4F46E5, #9333EA)",
                cards: "rgba(255, 255, 255, 0.7)",
            },
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::Modern
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// total over every string: anything that isn't one of the six ids renders as modern
pub fn resolve_style(id: &str) -> StylePreset {
    Template::from_id(id).unwrap_or_default().style()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_resolve_to_their_own_preset() {
        for template in Template::all() {
            assert_eq!(Template::from_id(template.id()), Some(template));
            assert_eq!(resolve_style(template.id()), template.style());
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_modern() {
        let modern = Template::Modern.style();

        assert_eq!(resolve_style(""), modern);
        assert_eq!(resolve_style("Modern"), modern);
        assert_eq!(resolve_style("retro"), modern);
        assert_eq!(resolve_style(" tech"), modern);
    }

    #[test]
    fn default_id_is_modern() {
        assert_eq!(Template::from_id(DEFAULT_TEMPLATE), Some(Template::Modern));
        assert_eq!(Template::default().id(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn presets_are_distinct() {
        let accents: std::collections::HashSet<_> =
            Template::all().iter().map(|t| t.style().accent).collect();
        assert_eq!(accents.len(), 6);
    }

    #[test]
    fn only_modern_is_popular() {
        let popular: Vec<_> = Template::all()
            .into_iter()
            .filter(|t| t.is_popular())
            .collect();
        assert_eq!(popular, vec![Template::Modern]);
    }
}
