//! Wholesale packaging units and product categories.

use serde::{Deserialize, Serialize};

/// A wholesale packaging/measure label.
///
/// Each product supports a subset of units, and every supported unit
/// carries its own price. Serialized names match the persisted catalog
/// format (`"5L-Bottle"`, `"Kg"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    Kongo,
    Portion,
    Bag,
    #[serde(rename = "5L-Bottle")]
    Bottle5L,
    #[serde(rename = "10L-Bottle")]
    Bottle10L,
    Kg,
    Crate,
    Carton,
}

impl Unit {
    /// Every unit label the storefront understands.
    pub const ALL: [Self; 8] = [
        Self::Kongo,
        Self::Portion,
        Self::Bag,
        Self::Bottle5L,
        Self::Bottle10L,
        Self::Kg,
        Self::Crate,
        Self::Carton,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kongo => "Kongo",
            Self::Portion => "Portion",
            Self::Bag => "Bag",
            Self::Bottle5L => "5L-Bottle",
            Self::Bottle10L => "10L-Bottle",
            Self::Kg => "Kg",
            Self::Crate => "Crate",
            Self::Carton => "Carton",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid unit: {s}"))
    }
}

/// Product category, a fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Grains & Staples")]
    GrainsAndStaples,
    #[serde(rename = "Vegetables & Spices")]
    VegetablesAndSpices,
    #[serde(rename = "Oils & Condiments")]
    OilsAndCondiments,
    Proteins,
    #[serde(rename = "Eggs & Others")]
    EggsAndOthers,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::GrainsAndStaples,
        Self::VegetablesAndSpices,
        Self::OilsAndCondiments,
        Self::Proteins,
        Self::EggsAndOthers,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GrainsAndStaples => "Grains & Staples",
            Self::VegetablesAndSpices => "Vegetables & Spices",
            Self::OilsAndCondiments => "Oils & Condiments",
            Self::Proteins => "Proteins",
            Self::EggsAndOthers => "Eggs & Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}
