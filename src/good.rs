use serde::{Deserialize, Serialize};
use std::fmt;

/// A kind of bulk good. One container holds exactly one kind.
///
/// This is the default key type for [`Storage`](crate::Storage); any
/// `Eq + Hash` key works in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Good {
    Wheat,
    Rice,
    Barley,
    Oats,
    Corn,
}

impl Good {
    /// Every good type, for exhaustive iteration in fixtures and reports.
    pub const ALL: [Good; 5] = [
        Good::Wheat,
        Good::Rice,
        Good::Barley,
        Good::Oats,
        Good::Corn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Good::Wheat => "wheat",
            Good::Rice => "rice",
            Good::Barley => "barley",
            Good::Oats => "oats",
            Good::Corn => "corn",
        }
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_variant_once() {
        assert_eq!(Good::ALL.len(), 5);
        for (i, good) in Good::ALL.iter().enumerate() {
            assert!(!Good::ALL[..i].contains(good));
        }
    }

    #[test]
    fn test_display_matches_label() {
        for good in Good::ALL {
            assert_eq!(good.to_string(), good.label());
        }
    }
}
