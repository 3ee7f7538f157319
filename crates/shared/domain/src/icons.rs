//! Icons referenced by name from reference data and backend payloads.

/// Closed set of icons the front end can draw.
///
/// Names are matched case-insensitively; anything else maps to [`IconKey::Unknown`]
/// so a new backend value never breaks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    HeartPulse,
    Droplet,
    Ambulance,
    Hospital,
    Utensils,
    LifeBuoy,
    HandHeart,
    MessageCircle,
    BookOpen,
    Stethoscope,
    Leaf,
    Users,
    Calendar,
    HandCoins,
    Megaphone,
    MapPin,
    Phone,
    Mail,
    Unknown,
}

impl IconKey {
    /// A glyph suitable for text-only rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::HeartPulse => "❤",
            Self::Droplet => "🩸",
            Self::Ambulance => "🚑",
            Self::Hospital => "🏥",
            Self::Utensils => "🍽",
            Self::LifeBuoy => "🛟",
            Self::HandHeart => "🤲",
            Self::MessageCircle => "💬",
            Self::BookOpen => "📖",
            Self::Stethoscope => "🩺",
            Self::Leaf => "🌿",
            Self::Users => "👥",
            Self::Calendar => "📅",
            Self::HandCoins => "🪙",
            Self::Megaphone => "📣",
            Self::MapPin => "📍",
            Self::Phone => "📞",
            Self::Mail => "✉",
            Self::Unknown => "•",
        }
    }
}

impl From<&str> for IconKey {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "heart-pulse" | "heartpulse" => Self::HeartPulse,
            "droplet" => Self::Droplet,
            "ambulance" => Self::Ambulance,
            "hospital" => Self::Hospital,
            "utensils" => Self::Utensils,
            "life-buoy" | "lifebuoy" => Self::LifeBuoy,
            "hand-heart" | "handheart" => Self::HandHeart,
            "message-circle" | "messagecircle" => Self::MessageCircle,
            "book-open" | "bookopen" => Self::BookOpen,
            "stethoscope" => Self::Stethoscope,
            "leaf" => Self::Leaf,
            "users" => Self::Users,
            "calendar" => Self::Calendar,
            "hand-coins" | "handcoins" => Self::HandCoins,
            "megaphone" => Self::Megaphone,
            "map-pin" | "mappin" => Self::MapPin,
            "phone" => Self::Phone,
            "mail" => Self::Mail,
            _ => Self::Unknown,
        }
    }
}
