/// Skin types offered by the analysis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinType {
    Oily,
    Dry,
    Combo,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combo,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combo => "combo",
            SkinType::Sensitive => "sensitive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combo => "Combination",
            SkinType::Sensitive => "Sensitive",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Primary concerns offered by the analysis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Acne,
    Wrinkles,
    Texture,
    Hair,
}

impl Concern {
    pub const ALL: [Concern; 4] = [
        Concern::Acne,
        Concern::Wrinkles,
        Concern::Texture,
        Concern::Hair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Acne => "acne",
            Concern::Wrinkles => "wrinkles",
            Concern::Texture => "texture",
            Concern::Hair => "hair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Concern::Acne => "Acne / Breakouts",
            Concern::Wrinkles => "Wrinkles / Aging",
            Concern::Texture => "Texture / Tone",
            Concern::Hair => "Unwanted Hair",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}
