use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::template::DEFAULT_TEMPLATE;

// structs and types

// the record edited by the builder and rendered by the preview
//
// every leaf is free text ("50K", "5.2%", "$500" are never parsed), and an empty string is a
// valid value at every stage. the preview omits whatever an empty leaf would have driven
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaKitData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub instagram: InstagramStats,
    pub youtube: YoutubeStats,
    pub pricing: Pricing,
    pub collaborations: Vec<Collaboration>,
    #[serde(default = "default_template")]
    pub selected_template: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramStats {
    pub handle: String,
    pub followers: String,
    pub engagement: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeStats {
    pub handle: String,
    pub subscribers: String,
    pub views: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub post: String,
    pub story: String,
    pub video: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    pub brand: String,
    pub description: String,
}

fn default_template() -> String {
    String::from(DEFAULT_TEMPLATE)
}

impl Default for MediaKitData {
    fn default() -> Self {
        MediaKitData {
            name: String::new(),
            title: String::new(),
            bio: String::new(),
            email: String::new(),
            instagram: InstagramStats::default(),
            youtube: YoutubeStats::default(),
            pricing: Pricing::default(),
            collaborations: Vec::new(),
            selected_template: default_template(),
        }
    }
}

// field lenses
//
// each variant names exactly one string leaf of MediaKitData, so a write through a Field can
// only ever touch that leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Title,
    Bio,
    Email,
    Instagram(InstagramField),
    Youtube(YoutubeField),
    Pricing(PricingField),
    Template,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstagramField {
    Handle,
    Followers,
    Engagement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum YoutubeField {
    Handle,
    Subscribers,
    Views,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingField {
    Post,
    Story,
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollabField {
    Brand,
    Description,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Title,
        Field::Bio,
        Field::Email,
        Field::Instagram(InstagramField::Handle),
        Field::Instagram(InstagramField::Followers),
        Field::Instagram(InstagramField::Engagement),
        Field::Youtube(YoutubeField::Handle),
        Field::Youtube(YoutubeField::Subscribers),
        Field::Youtube(YoutubeField::Views),
        Field::Pricing(PricingField::Post),
        Field::Pricing(PricingField::Story),
        Field::Pricing(PricingField::Video),
        Field::Template,
    ];

    // dotted path, matching the serialized shape of the record
    pub fn path(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Title => "title",
            Field::Bio => "bio",
            Field::Email => "email",
            Field::Instagram(InstagramField::Handle) => "instagram.handle",
            Field::Instagram(InstagramField::Followers) => "instagram.followers",
            Field::Instagram(InstagramField::Engagement) => "instagram.engagement",
            Field::Youtube(YoutubeField::Handle) => "youtube.handle",
            Field::Youtube(YoutubeField::Subscribers) => "youtube.subscribers",
            Field::Youtube(YoutubeField::Views) => "youtube.views",
            Field::Pricing(PricingField::Post) => "pricing.post",
            Field::Pricing(PricingField::Story) => "pricing.story",
            Field::Pricing(PricingField::Video) => "pricing.video",
            Field::Template => "selectedTemplate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(path: &str) -> anyhow::Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.path() == path)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown media kit field: {path}")))
    }
}

impl MediaKitData {
    // a blank record using the given template id
    pub fn with_template(template: impl Into<String>) -> Self {
        MediaKitData {
            selected_template: template.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Title => &self.title,
            Field::Bio => &self.bio,
            Field::Email => &self.email,
            Field::Instagram(f) => match f {
                InstagramField::Handle => &self.instagram.handle,
                InstagramField::Followers => &self.instagram.followers,
                InstagramField::Engagement => &self.instagram.engagement,
            },
            Field::Youtube(f) => match f {
                YoutubeField::Handle => &self.youtube.handle,
                YoutubeField::Subscribers => &self.youtube.subscribers,
                YoutubeField::Views => &self.youtube.views,
            },
            Field::Pricing(f) => match f {
                PricingField::Post => &self.pricing.post,
                PricingField::Story => &self.pricing.story,
                PricingField::Video => &self.pricing.video,
            },
            Field::Template => &self.selected_template,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Title => &mut self.title,
            Field::Bio => &mut self.bio,
            Field::Email => &mut self.email,
            Field::Instagram(f) => match f {
                InstagramField::Handle => &mut self.instagram.handle,
                InstagramField::Followers => &mut self.instagram.followers,
                InstagramField::Engagement => &mut self.instagram.engagement,
            },
            Field::Youtube(f) => match f {
                YoutubeField::Handle => &mut self.youtube.handle,
                YoutubeField::Subscribers => &mut self.youtube.subscribers,
                YoutubeField::Views => &mut self.youtube.views,
            },
            Field::Pricing(f) => match f {
                PricingField::Post => &mut self.pricing.post,
                PricingField::Story => &mut self.pricing.story,
                PricingField::Video => &mut self.pricing.video,
            },
            Field::Template => &mut self.selected_template,
        }
    }

    // replace one leaf, leaving everything else as it was
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn set_path(&mut self, path: &str, value: impl Into<String>) -> anyhow::Result<()> {
        let field = path.parse::<Field>()?;
        self.set(field, value);
        Ok(())
    }

    // the section/field form used by the social and pricing tabs
    //
    // only the three sub-records are addressable this way; top-level fields go through set()
    pub fn update_nested_field(
        &mut self,
        section: &str,
        field: &str,
        value: impl Into<String>,
    ) -> anyhow::Result<()> {
        match section {
            "instagram" | "youtube" | "pricing" => self.set_path(&format!("{section}.{field}"), value),
            _ => Err(anyhow::Error::msg(format!(
                "unknown media kit section: {section}"
            ))),
        }
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn add_collaboration(&mut self) -> usize {
        self.collaborations.push(Collaboration::default());

        debug!(count = self.collaborations.len(), "added collaboration");
        self.collaborations.len() - 1
    }

    pub fn update_collaboration(
        &mut self,
        index: usize,
        field: CollabField,
        value: impl Into<String>,
    ) -> anyhow::Result<()> {
        let count = self.collaborations.len();

        let collab = self.collaborations.get_mut(index).ok_or_else(|| {
            anyhow::Error::msg(format!(
                "collaboration {index} does not exist ({count} present)"
            ))
        })?;

        match field {
            CollabField::Brand => collab.brand = value.into(),
            CollabField::Description => collab.description = value.into(),
        }

        Ok(())
    }
}

// completion panel shown next to the builder tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub basic: bool,
    pub social: bool,
    pub pricing: bool,
}

impl Progress {
    pub fn of(data: &MediaKitData) -> Self {
        Progress {
            basic: !data.name.is_empty() && !data.bio.is_empty(),
            social: !data.instagram.handle.is_empty() || !data.youtube.handle.is_empty(),
            pricing: !data.pricing.post.is_empty(),
        }
    }

    pub fn steps(&self) -> [(&'static str, bool); 3] {
        [
            ("Basic Info", self.basic),
            ("Social Media", self.social),
            ("Pricing", self.pricing),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.basic && self.social && self.pricing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_blank_with_modern_template() {
        let data = MediaKitData::with_template(DEFAULT_TEMPLATE);

        for field in Field::ALL {
            if field == Field::Template {
                assert_eq!(data.get(field), "modern");
            } else {
                assert_eq!(data.get(field), "", "{field} should start empty");
            }
        }
        assert!(data.collaborations.is_empty());
    }

    #[test]
    fn paths_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.path().parse::<Field>().unwrap(), field);
        }
        assert!("instagram.likes".parse::<Field>().is_err());
        assert!("".parse::<Field>().is_err());
    }

    #[test]
    fn nested_updates_accumulate_within_a_section() {
        let mut data = MediaKitData::default();

        data.update_nested_field("instagram", "handle", "@x").unwrap();
        data.update_nested_field("instagram", "followers", "10K").unwrap();

        assert_eq!(
            data.instagram,
            InstagramStats {
                handle: "@x".into(),
                followers: "10K".into(),
                engagement: "".into(),
            }
        );
        assert_eq!(data.youtube, YoutubeStats::default());
        assert_eq!(data.pricing, Pricing::default());
    }

    #[test]
    fn update_nested_field_rejects_top_level_and_unknown_names() {
        let mut data = MediaKitData::default();

        assert!(data.update_nested_field("name", "first", "Ada").is_err());
        assert!(data.update_nested_field("tiktok", "handle", "@x").is_err());
        assert!(data.update_nested_field("pricing", "reel", "$5").is_err());
        assert_eq!(data, MediaKitData::default());
    }

    #[test]
    fn collaborations_are_edited_by_index() {
        let mut data = MediaKitData::default();

        assert_eq!(data.add_collaboration(), 0);
        assert_eq!(data.add_collaboration(), 1);

        data.update_collaboration(1, CollabField::Brand, "Nike").unwrap();
        data.update_collaboration(1, CollabField::Description, "Spring campaign")
            .unwrap();

        assert_eq!(data.collaborations[0], Collaboration::default());
        assert_eq!(data.collaborations[1].brand, "Nike");
        assert_eq!(data.collaborations[1].description, "Spring campaign");
    }

    #[test]
    fn out_of_range_collaboration_edit_changes_nothing() {
        let mut data = MediaKitData::default();
        data.add_collaboration();
        let before = data.clone();

        assert!(data.update_collaboration(3, CollabField::Brand, "Nope").is_err());
        assert_eq!(data, before);
    }

    #[test]
    fn serialized_shape_uses_camel_case_template() {
        let mut data = MediaKitData::default();
        data.set_path("pricing.post", "$500").unwrap();
        data.add_collaboration();

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["selectedTemplate"], "modern");
        assert_eq!(json["pricing"]["post"], "$500");
        assert_eq!(json["collaborations"][0]["brand"], "");
        assert!(json.get("selected_template").is_none());
    }

    #[test]
    fn progress_tracks_the_three_sections() {
        let mut data = MediaKitData::default();
        assert_eq!(Progress::of(&data), Progress::default());

        data.set(Field::Name, "Ada");
        assert!(!Progress::of(&data).basic);
        data.set(Field::Bio, "Tech creator");
        assert!(Progress::of(&data).basic);

        data.set(Field::Youtube(YoutubeField::Handle), "Ada Codes");
        assert!(Progress::of(&data).social);

        // only the post price counts toward pricing
        data.set(Field::Pricing(PricingField::Story), "$200");
        assert!(!Progress::of(&data).pricing);
        data.set(Field::Pricing(PricingField::Post), "$500");
        assert!(Progress::of(&data).is_complete());
    }
}
