//! Sub-topics a generator can focus on
//!
//! Several generators answer a family of questions ("cement" vs "steel",
//! "kitchen size" vs "bedroom size"). The focus is picked from the
//! lower-cased query by substring checks, in the order listed on each enum.

/// Material a specification answer focuses on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialFocus {
    Cement,
    Steel,
    Brick,
    Flooring,
    /// No specific material; answer with the package comparison
    General,
}

impl MaterialFocus {
    pub fn from_query(lower: &str) -> Self {
        if lower.contains("cement") {
            Self::Cement
        } else if lower.contains("steel") {
            Self::Steel
        } else if lower.contains("brick") {
            Self::Brick
        } else if lower.contains("floor") || lower.contains("tile") {
            Self::Flooring
        } else {
            Self::General
        }
    }
}

/// Material a consumption answer is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionMaterial {
    Cement,
    Steel,
    Brick,
    Sand,
}

impl ConsumptionMaterial {
    /// `None` when the query names no tracked material
    pub fn from_query(lower: &str) -> Option<Self> {
        if lower.contains("cement") {
            Some(Self::Cement)
        } else if ["steel", "rod", "bar"].iter().any(|w| lower.contains(w)) {
            Some(Self::Steel)
        } else if lower.contains("brick") {
            Some(Self::Brick)
        } else if lower.contains("sand") {
            Some(Self::Sand)
        } else {
            None
        }
    }
}

/// Room a size answer focuses on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFocus {
    Bedroom,
    Kitchen,
    Bathroom,
    All,
}

impl RoomFocus {
    pub fn from_query(lower: &str) -> Self {
        if lower.contains("bedroom") {
            Self::Bedroom
        } else if lower.contains("kitchen") {
            Self::Kitchen
        } else if lower.contains("bathroom") {
            Self::Bathroom
        } else {
            Self::All
        }
    }

    /// Knowledge base key of the room
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Bedroom => Some("bedroom"),
            Self::Kitchen => Some("kitchen"),
            Self::Bathroom => Some("bathroom"),
            Self::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseFocus {
    Foundation,
    All,
}

impl PhaseFocus {
    pub fn from_query(lower: &str) -> Self {
        if lower.contains("foundation") {
            Self::Foundation
        } else {
            Self::All
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorFocus {
    ModularKitchen,
    General,
}

impl InteriorFocus {
    pub fn from_query(lower: &str) -> Self {
        if lower.contains("modular kitchen") {
            Self::ModularKitchen
        } else {
            Self::General
        }
    }
}

/// Brand question redirected to a trade-specific answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandFocus {
    Electrical,
    Plumbing,
    General,
}

impl BrandFocus {
    pub fn from_query(lower: &str) -> Self {
        if lower.contains("electrical") || lower.contains("switch") {
            Self::Electrical
        } else if lower.contains("plumb") {
            Self::Plumbing
        } else {
            Self::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_focus_order() {
        assert_eq!(MaterialFocus::from_query("cement and steel"), MaterialFocus::Cement);
        assert_eq!(MaterialFocus::from_query("which tiles"), MaterialFocus::Flooring);
        assert_eq!(MaterialFocus::from_query("materials used"), MaterialFocus::General);
    }

    #[test]
    fn test_consumption_material() {
        assert_eq!(
            ConsumptionMaterial::from_query("how much rod needed"),
            Some(ConsumptionMaterial::Steel)
        );
        assert_eq!(ConsumptionMaterial::from_query("how much paint"), None);
    }

    #[test]
    fn test_room_focus() {
        assert_eq!(RoomFocus::from_query("kitchen size"), RoomFocus::Kitchen);
        assert_eq!(RoomFocus::Kitchen.key(), Some("kitchen"));
        assert_eq!(RoomFocus::from_query("room size"), RoomFocus::All);
    }

    #[test]
    fn test_brand_focus() {
        assert_eq!(BrandFocus::from_query("best switch brand"), BrandFocus::Electrical);
        assert_eq!(BrandFocus::from_query("best plumbing brand"), BrandFocus::Plumbing);
        assert_eq!(BrandFocus::from_query("best brand"), BrandFocus::General);
    }
}
