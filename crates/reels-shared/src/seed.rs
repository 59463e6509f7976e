//! Static seed data loaded into a fresh session state.

use crate::models::{Platform, Template};

/// The fixed set of publishing platforms. Only the `connected` flag and the
/// display strings change after initialisation.
pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform {
            id: "tiktok".into(),
            name: "TikTok".into(),
            icon: "🎵".into(),
            color: "from-[#67c50a] to-[#7cd7c2]".into(),
            connected: false,
            followers: "0".into(),
            engagement: "0%".into(),
            last_post: None,
        },
        Platform {
            id: "instagram".into(),
            name: "Instagram".into(),
            icon: "📷".into(),
            color: "from-[#ffd900] to-[#67c50a]".into(),
            connected: false,
            followers: "0".into(),
            engagement: "0%".into(),
            last_post: None,
        },
        Platform {
            id: "youtube".into(),
            name: "YouTube Shorts".into(),
            icon: "▶️".into(),
            color: "from-[#7cd7c2] to-[#054e6f]".into(),
            connected: false,
            followers: "0".into(),
            engagement: "0%".into(),
            last_post: None,
        },
    ]
}

/// The built-in template catalogue. Never mutated at runtime.
pub fn default_templates() -> Vec<Template> {
    vec![
        Template {
            id: "1".into(),
            title: "Viral Transition Pack".into(),
            category: "trending".into(),
            thumbnail: "gradient-1".into(),
            likes: 2500,
            downloads: 1200,
            is_new: true,
            is_pro: false,
            description: "Smooth transitions for viral content".into(),
            tags: vec!["transition".into(), "viral".into(), "trending".into()],
        },
        Template {
            id: "2".into(),
            title: "Business Intro Set".into(),
            category: "business".into(),
            thumbnail: "gradient-2".into(),
            likes: 1800,
            downloads: 890,
            is_new: false,
            is_pro: true,
            description: "Professional business introductions".into(),
            tags: vec!["business".into(), "professional".into(), "intro".into()],
        },
        Template {
            id: "3".into(),
            title: "Lifestyle Aesthetic".into(),
            category: "lifestyle".into(),
            thumbnail: "gradient-3".into(),
            likes: 3200,
            downloads: 1500,
            is_new: true,
            is_pro: false,
            description: "Beautiful lifestyle content templates".into(),
            tags: vec!["lifestyle".into(), "aesthetic".into(), "beauty".into()],
        },
    ]
}
