//! Category shortcuts and example queries
//!
//! Static reference data: each category pairs a display name with the canned
//! search phrase that is actually sent to the backend.

use serde::Serialize;

/// A category shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Search phrase dispatched when the category is picked
    pub query: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "chatbot",
        name: "Chatbot",
        icon: "🤖",
        query: "AI chatbot assistant conversation",
    },
    Category {
        id: "code",
        name: "Code Assistant",
        icon: "💻",
        query: "AI code assistant programming development",
    },
    Category {
        id: "content",
        name: "Content Creation",
        icon: "📝",
        query: "AI content creation writing generator",
    },
    Category {
        id: "education",
        name: "Education",
        icon: "🎓",
        query: "AI education learning tutorial platform",
    },
    Category {
        id: "generative",
        name: "Generative AI",
        icon: "✨",
        query: "generative AI model LLM GPT",
    },
    Category {
        id: "healthcare",
        name: "Healthcare",
        icon: "🏥",
        query: "AI healthcare medical diagnosis",
    },
    Category {
        id: "image",
        name: "Image Generation",
        icon: "🎨",
        query: "AI image generation art DALL-E Midjourney",
    },
    Category {
        id: "music",
        name: "Music",
        icon: "🎵",
        query: "AI music generation audio sound",
    },
    Category {
        id: "productivity",
        name: "Productivity",
        icon: "⚡",
        query: "AI productivity automation workflow tools",
    },
    Category {
        id: "research",
        name: "Research",
        icon: "🔬",
        query: "AI research papers academic science",
    },
    Category {
        id: "video",
        name: "Video Generation",
        icon: "🎬",
        query: "AI video generation editing deepfake",
    },
];

/// Chips offered when a search comes back empty
pub const EXAMPLE_QUERIES: [&str; 5] = [
    "ChatGPT",
    "Midjourney",
    "Stable Diffusion",
    "OpenAI",
    "Machine Learning",
];

/// Look up a category by id, case-insensitively
pub fn find(id: &str) -> Option<&'static Category> {
    let id = id.trim();
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}
