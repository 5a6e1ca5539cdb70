// 🏷️ Category - The fixed set of bookable services
//
// Selection used to be "whatever sits at position N of the combo box".
// Here it is a closed enum; a missing selection is `None`, never a magic index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hotel,
    Flight,
    Tour,
    Restaurant,
    Car,
}

impl Category {
    /// All categories in declaration order (also the display order of the selector)
    pub const ALL: [Category; 5] = [
        Category::Hotel,
        Category::Flight,
        Category::Tour,
        Category::Restaurant,
        Category::Car,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hotel => "Hotel",
            Category::Flight => "Flight",
            Category::Tour => "Tour",
            Category::Restaurant => "Restaurant",
            Category::Car => "Car",
        }
    }

    /// Map a selector position to a category.
    ///
    /// Out-of-range positions mean "nothing selected".
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Position of this category in `Category::ALL`
    pub fn index(&self) -> usize {
        match self {
            Category::Hotel => 0,
            Category::Flight => 1,
            Category::Tour => 2,
            Category::Restaurant => 3,
            Category::Car => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCategory(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Hotel", "Flight", "Tour", "Restaurant", "Car"]);
    }

    #[test]
    fn test_index_round_trips_through_from_index() {
        for category in Category::ALL {
            assert_eq!(Category::from_index(category.index()), Some(category));
        }
    }

    #[test]
    fn test_from_index_out_of_range_is_no_selection() {
        assert_eq!(Category::from_index(5), None);
        assert_eq!(Category::from_index(usize::MAX), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hotel".parse::<Category>(), Ok(Category::Hotel));
        assert_eq!(" RESTAURANT ".parse::<Category>(), Ok(Category::Restaurant));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Spa".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Spa".to_string()));
        assert_eq!(err.to_string(), "unknown category: Spa");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Category::Car.to_string(), "Car");
        assert_eq!(format!("{}", Category::Flight), "Flight");
    }
}
