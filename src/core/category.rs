use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};


/// Destination section of the portal a search can land on.
///
/// The declaration order is the classification order: when a query hits
/// keywords of several sections, the earliest one wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Jobs,
    #[default]
    Market,
    Guides,
    Community,
}

impl Category {

    pub fn slug(&self) -> &'static str {
        self.into()
    }

    /// Path segment of the listing page. The guide page is mounted at
    /// `/guide`, not `/guides`.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Market => "market",
            Self::Guides => "guide",
            Self::Community => "community",
        }
    }


    pub fn label(&self) -> &'static str {
        match self {
            Self::Jobs => "งาน",
            Self::Market => "ตลาด",
            Self::Guides => "ที่เที่ยว",
            Self::Community => "ชุมชน",
        }
    }


    pub fn icon(&self) -> &'static str {
        match self {
            Self::Jobs => "💼",
            Self::Market => "🛒",
            Self::Guides => "🗺️",
            Self::Community => "💬",
        }
    }


    pub fn from_route(route: &str) -> Option<Self> {
        Self::iter().find(|c| c.route() == route)
    }


    pub fn classification_order() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
