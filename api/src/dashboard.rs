// sample data for the dashboard
//
// none of this is fetched or computed; the dashboard is display-only until there is a backend
// that records views and downloads

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Overview,
    MediaKits,
    Analytics,
    Profile,
}

impl DashboardTab {
    pub fn all() -> [Self; 4] {
        [
            Self::Overview,
            Self::MediaKits,
            Self::Analytics,
            Self::Profile,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::MediaKits => "Media Kits",
            Self::Analytics => "Analytics",
            Self::Profile => "Profile",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Overview => "▦",
            Self::MediaKits => "◉",
            Self::Analytics => "↗",
            Self::Profile => "☺",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub glyph: &'static str,
    pub gradient: &'static str,
}

pub const STATS: [StatCard; 6] = [
    StatCard {
        title: "Total Views",
        value: "24,567",
        change: "+12%",
        glyph: "◉",
        gradient: "linear-gradient(90deg, #3B82F6, #06B6D4)",
    },
    StatCard {
        title: "Downloads",
        value: "3,421",
        change: "+8%",
        glyph: "⤓",
        gradient: "linear-gradient(90deg, #22C55E, #10B981)",
    },
    StatCard {
        title: "Followers",
        value: "18.2K",
        change: "+23%",
        glyph: "☺",
        gradient: "linear-gradient(90deg, #A855F7, #EC4899)",
    },
    StatCard {
        title: "Engagement",
        value: "8.4%",
        change: "+2.1%",
        glyph: "♥",
        gradient: "linear-gradient(90deg, #EF4444, #F97316)",
    },
    StatCard {
        title: "Shares",
        value: "1,234",
        change: "+15%",
        glyph: "⇪",
        gradient: "linear-gradient(90deg, #6366F1, #3B82F6)",
    },
    StatCard {
        title: "Growth Rate",
        value: "24.5%",
        change: "+5.2%",
        glyph: "↗",
        gradient: "linear-gradient(90deg, #14B8A6, #22C55E)",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    View,
    Download,
    Share,
    Engagement,
    Meeting,
}

impl ActivityKind {
    pub fn badge(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Download => "Download",
            Self::Share => "Share",
            Self::Engagement => "Engagement",
            Self::Meeting => "Meeting",
        }
    }

    // css class suffix for the badge colour
    pub fn tone(self) -> &'static str {
        match self {
            Self::View => "blue",
            Self::Download => "green",
            Self::Share => "purple",
            Self::Engagement => "pink",
            Self::Meeting => "orange",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::View => "◉",
            Self::Download => "⤓",
            Self::Share => "⇪",
            Self::Engagement => "♥",
            Self::Meeting => "▣",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 5] = [
    Activity {
        id: 1,
        kind: ActivityKind::View,
        title: "Fashion Brand Media Kit viewed",
        description: "Someone viewed your fashion portfolio",
        time: "2 hours ago",
    },
    Activity {
        id: 2,
        kind: ActivityKind::Download,
        title: "Media Kit downloaded",
        description: "Brand X downloaded your tech media kit",
        time: "4 hours ago",
    },
    Activity {
        id: 3,
        kind: ActivityKind::Share,
        title: "Portfolio shared",
        description: "Your portfolio was shared on LinkedIn",
        time: "1 day ago",
    },
    Activity {
        id: 4,
        kind: ActivityKind::Engagement,
        title: "High engagement post",
        description: "Your latest Instagram post got 500+ likes",
        time: "2 days ago",
    },
    Activity {
        id: 5,
        kind: ActivityKind::Meeting,
        title: "Brand meeting scheduled",
        description: "Nike wants to discuss partnership",
        time: "3 days ago",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KitStatus {
    Published,
    Draft,
}

impl KitStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Self::Published => "green",
            Self::Draft => "secondary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KitSummary {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub views: u32,
    pub downloads: u32,
    pub status: KitStatus,
    pub last_updated: &'static str,
    pub thumbnail: &'static str,
}

pub const MEDIA_KITS: [KitSummary; 4] = [
    KitSummary {
        id: 1,
        title: "Fashion & Lifestyle",
        description: "Complete portfolio showcasing fashion content and lifestyle photography",
        views: 1234,
        downloads: 89,
        status: KitStatus::Published,
        last_updated: "2 days ago",
        thumbnail: "linear-gradient(135deg, #F472B6, #9333EA)",
    },
    KitSummary {
        id: 2,
        title: "Tech Reviews",
        description: "Technology content creation and product review portfolio",
        views: 856,
        downloads: 45,
        status: KitStatus::Published,
        last_updated: "1 week ago",
        thumbnail: "linear-gradient(135deg, #60A5FA, #0891B2)",
    },
    KitSummary {
        id: 3,
        title: "Travel Adventures",
        description: "Travel photography and destination content showcase",
        views: 2341,
        downloads: 123,
        status: KitStatus::Published,
        last_updated: "3 days ago",
        thumbnail: "linear-gradient(135deg, #4ADE80, #0D9488)",
    },
    KitSummary {
        id: 4,
        title: "Food & Cooking",
        description: "Culinary content and recipe development portfolio",
        views: 567,
        downloads: 23,
        status: KitStatus::Draft,
        last_updated: "5 days ago",
        thumbnail: "linear-gradient(135deg, #FB923C, #DC2626)",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub color: &'static str,
}

pub const ANALYTICS: [AnalyticsCard; 3] = [
    AnalyticsCard {
        title: "Total Views",
        subtitle: "Last 30 days",
        value: "12,543",
        change: "+23% from last month",
        color: "#9333EA",
    },
    AnalyticsCard {
        title: "Downloads",
        subtitle: "Media kit downloads",
        value: "1,234",
        change: "+15% from last month",
        color: "#2563EB",
    },
    AnalyticsCard {
        title: "Engagement Rate",
        subtitle: "Average across platforms",
        value: "8.4%",
        change: "+2.1% from last month",
        color: "#16A34A",
    },
];

// prefilled values on the profile tab
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub display_name: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
}

pub const PROFILE: ProfileDefaults = ProfileDefaults {
    display_name: "Creator Name",
    email: "content@creator.com",
    bio: "Content creator passionate about lifestyle and technology...",
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_activity_kind_has_its_own_tone() {
        let tones: HashSet<_> = RECENT_ACTIVITY.iter().map(|a| a.kind.tone()).collect();
        assert_eq!(tones.len(), RECENT_ACTIVITY.len());
    }

    #[test]
    fn sample_kits_have_unique_ids_and_one_draft() {
        let ids: HashSet<_> = MEDIA_KITS.iter().map(|k| k.id).collect();
        assert_eq!(ids.len(), MEDIA_KITS.len());

        let drafts = MEDIA_KITS
            .iter()
            .filter(|k| k.status == KitStatus::Draft)
            .count();
        assert_eq!(drafts, 1);
    }

    #[test]
    fn overview_is_the_first_tab() {
        assert_eq!(DashboardTab::default(), DashboardTab::all()[0]);
    }
}
