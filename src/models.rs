//! Catalog Models
//!
//! The `Item` record shown in the grid plus the PokeAPI response shapes it is
//! built from.

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub sprite_url: Option<String>,
}

impl Item {
    /// Name with the first letter upper-cased ("bulbasaur" -> "Bulbasaur")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Catalog number as shown on the card ("#025")
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }
}

impl From<ItemDetail> for Item {
    fn from(detail: ItemDetail) -> Self {
        let sprite_url = detail.sprites.preferred_url();
        Self {
            id: detail.id,
            name: detail.name,
            sprite_url,
        }
    }
}

// ========================
// API Response Shapes
// ========================

/// `GET <base>?limit=N`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemList {
    pub results: Vec<ItemRef>,
}

/// Reference to a detail record
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRef {
    pub url: String,
}

/// `GET <item-url>`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// Official artwork if present, else the default sprite
    pub fn preferred_url(&self) -> Option<String> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.clone())
            .or_else(|| self.front_default.clone())
    }
}
