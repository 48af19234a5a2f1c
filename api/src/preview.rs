use crate::media_kit::{Collaboration, MediaKitData};
use crate::template::{StylePreset, resolve_style};

// read-only view model behind the preview page
//
// each optional section is None (or empty) exactly when the field that drives it is empty, so
// the component never has to re-derive the omission rules
#[derive(Clone, Debug, PartialEq)]
pub struct KitPreview {
    pub initial: char,
    pub name: String,
    pub title: String,
    pub email: String,
    pub bio: Option<String>,
    pub instagram: Option<PlatformCard>,
    pub youtube: Option<PlatformCard>,
    pub rates: Vec<RateCard>,
    pub collaborations: Vec<Collaboration>,
    pub style: StylePreset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Youtube,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Youtube => "YouTube",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformCard {
    pub platform: Platform,
    pub handle: String,
    pub stats: [Stat; 2],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateCard {
    pub label: &'static str,
    pub price: String,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    match value.is_empty() {
        true => String::from(placeholder),
        false => value.to_owned(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

impl KitPreview {
    pub fn has_pricing(&self) -> bool {
        !self.rates.is_empty()
    }

    pub fn has_collaborations(&self) -> bool {
        !self.collaborations.is_empty()
    }
}

impl From<&MediaKitData> for KitPreview {
    fn from(data: &MediaKitData) -> Self {
        let initial = data
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');

        let instagram = (!data.instagram.handle.is_empty()).then(|| PlatformCard {
            platform: Platform::Instagram,
            handle: data.instagram.handle.clone(),
            stats: [
                Stat {
                    label: "Followers",
                    value: data.instagram.followers.clone(),
                },
                Stat {
                    label: "Engagement",
                    value: data.instagram.engagement.clone(),
                },
            ],
        });

        let youtube = (!data.youtube.handle.is_empty()).then(|| PlatformCard {
            platform: Platform::Youtube,
            handle: data.youtube.handle.clone(),
            stats: [
                Stat {
                    label: "Subscribers",
                    value: data.youtube.subscribers.clone(),
                },
                Stat {
                    label: "Monthly Views",
                    value: data.youtube.views.clone(),
                },
            ],
        });

        let rates = [
            ("Instagram Post", &data.pricing.post),
            ("Instagram Story", &data.pricing.story),
            ("YouTube Video", &data.pricing.video),
        ]
        .into_iter()
        .filter(|(_, price)| !price.is_empty())
        .map(|(label, price)| RateCard {
            label,
            price: price.clone(),
        })
        .collect();

        KitPreview {
            initial,
            name: or_placeholder(&data.name, "Your Name"),
            title: or_placeholder(&data.title, "Your Title"),
            email: or_placeholder(&data.email, "your@email.com"),
            bio: non_empty(&data.bio),
            instagram,
            youtube,
            rates,
            collaborations: data.collaborations.clone(),
            style: resolve_style(&data.selected_template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_kit::{Field, PricingField};
    use crate::template::Template;

    #[test]
    fn blank_record_shows_placeholders_only() {
        let preview = KitPreview::from(&MediaKitData::default());

        assert_eq!(preview.initial, '?');
        assert_eq!(preview.name, "Your Name");
        assert_eq!(preview.title, "Your Title");
        assert_eq!(preview.email, "your@email.com");
        assert_eq!(preview.bio, None);
        assert_eq!(preview.instagram, None);
        assert_eq!(preview.youtube, None);
        assert!(!preview.has_pricing());
        assert!(!preview.has_collaborations());
        assert_eq!(preview.style, Template::Modern.style());
    }

    #[test]
    fn instagram_card_shows_followers() {
        let mut data = MediaKitData::default();
        data.update_nested_field("instagram", "handle", "@x").unwrap();
        data.update_nested_field("instagram", "followers", "10K").unwrap();

        let card = KitPreview::from(&data).instagram.expect("instagram card");

        assert_eq!(card.handle, "@x");
        assert_eq!(card.stats[0].label, "Followers");
        assert_eq!(card.stats[0].value, "10K");
        assert_eq!(card.stats[1].value, "");
    }

    #[test]
    fn stats_without_a_handle_are_not_shown() {
        let mut data = MediaKitData::default();
        data.update_nested_field("youtube", "subscribers", "25K").unwrap();

        assert_eq!(KitPreview::from(&data).youtube, None);
    }

    #[test]
    fn each_rate_card_is_independent() {
        let mut data = MediaKitData::default();
        data.set(Field::Pricing(PricingField::Story), "$200");

        let preview = KitPreview::from(&data);
        assert_eq!(
            preview.rates,
            vec![RateCard {
                label: "Instagram Story",
                price: "$200".into()
            }]
        );

        data.set(Field::Pricing(PricingField::Post), "$500");
        data.set(Field::Pricing(PricingField::Video), "$1000");
        let labels: Vec<_> = KitPreview::from(&data).rates.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Instagram Post", "Instagram Story", "YouTube Video"]);
    }

    #[test]
    fn empty_collaboration_entries_still_count() {
        let mut data = MediaKitData::default();
        data.add_collaboration();

        assert!(KitPreview::from(&data).has_collaborations());
    }

    #[test]
    fn initial_is_uppercased_and_template_applied() {
        let mut data = MediaKitData::with_template("fashion");
        data.set(Field::Name, "élodie");

        let preview = KitPreview::from(&data);
        assert_eq!(preview.initial, 'É');
        assert_eq!(preview.name, "élodie");
        assert_eq!(preview.style, Template::Fashion.style());
    }
}
