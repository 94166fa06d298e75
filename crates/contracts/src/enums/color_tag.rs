use serde::{Deserialize, Serialize};

/// Theme color assigned to a category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Indigo,
    Emerald,
    Amber,
    Rose,
    Sky,
    Violet,
}

impl ColorTag {
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorTag::Indigo => "Indigo",
            ColorTag::Emerald => "Emerald",
            ColorTag::Amber => "Amber",
            ColorTag::Rose => "Rose",
            ColorTag::Sky => "Sky",
            ColorTag::Violet => "Violet",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ColorTag::Indigo => "tag--indigo",
            ColorTag::Emerald => "tag--emerald",
            ColorTag::Amber => "tag--amber",
            ColorTag::Rose => "tag--rose",
            ColorTag::Sky => "tag--sky",
            ColorTag::Violet => "tag--violet",
        }
    }

    pub fn all() -> Vec<ColorTag> {
        vec![
            ColorTag::Indigo,
            ColorTag::Emerald,
            ColorTag::Amber,
            ColorTag::Rose,
            ColorTag::Sky,
            ColorTag::Violet,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(value))
    }
}
