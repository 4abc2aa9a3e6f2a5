#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FeatureIcon {
    Lock,
    ShieldCheck,
    EyeOff,
    UserX,
    Bitcoin,
    Onion,
    Envelope,
}

impl FeatureIcon {
    pub const ALL: [FeatureIcon; 7] = [
        Self::Lock,
        Self::ShieldCheck,
        Self::EyeOff,
        Self::UserX,
        Self::Bitcoin,
        Self::Onion,
        Self::Envelope,
    ];

    /// Stable kebab-case identifier, rendered into `data-icon`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::ShieldCheck => "shield-check",
            Self::EyeOff => "eye-off",
            Self::UserX => "user-x",
            Self::Bitcoin => "bitcoin",
            Self::Onion => "onion",
            Self::Envelope => "envelope",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Lock => "🔒",
            Self::ShieldCheck => "🛡",
            Self::EyeOff => "🙈",
            Self::UserX => "🚫",
            Self::Bitcoin => "₿",
            Self::Onion => "🧅",
            Self::Envelope => "✉",
        }
    }
}

impl std::fmt::Display for FeatureIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FeatureIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == wanted)
            .ok_or_else(|| format!("invalid feature icon: {}", s))
    }
}
