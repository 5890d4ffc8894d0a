//! Basic types for the transaction engine

use serde::{Deserialize, Serialize};

/// Direction of a transfer relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Money arriving in one of the viewer's accounts
    Credit,
    /// Money leaving one of the viewer's accounts
    Debit,
    /// Movement between two of the viewer's own accounts
    Transfer,
}

impl std::str::FromStr for Direction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREDIT" => Ok(Direction::Credit),
            "DEBIT" => Ok(Direction::Debit),
            "TRANSFER" => Ok(Direction::Transfer),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Credit => write!(f, "CREDIT"),
            Direction::Debit => write!(f, "DEBIT"),
            Direction::Transfer => write!(f, "TRANSFER"),
        }
    }
}

/// Spending category
///
/// Classified transfers are always `Transfer`; the remaining variants are
/// what the dashboard knows how to badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shopping,
    Dining,
    Transportation,
    Bills,
    Income,
    Investment,
    Healthcare,
    Groceries,
    Transfer,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Transfer
    }
}

impl Category {
    /// Badge shown next to the category name
    pub fn badge(&self) -> CategoryBadge {
        let (icon, tone) = match self {
            Category::Shopping => ("shopping-bag", BadgeTone::Purple),
            Category::Dining => ("utensils", BadgeTone::Orange),
            Category::Transportation => ("car", BadgeTone::Blue),
            Category::Bills => ("home", BadgeTone::Red),
            Category::Income => ("briefcase", BadgeTone::Green),
            Category::Investment => ("trending-up", BadgeTone::Indigo),
            Category::Healthcare => ("heart", BadgeTone::Pink),
            Category::Groceries | Category::Transfer | Category::Other => {
                ("more-horizontal", BadgeTone::Gray)
            }
        };
        CategoryBadge { icon, tone }
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    /// Unknown names map to `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "shopping" => Category::Shopping,
            "dining" => Category::Dining,
            "transportation" => Category::Transportation,
            "bills" => Category::Bills,
            "income" => Category::Income,
            "investment" => Category::Investment,
            "healthcare" => Category::Healthcare,
            "groceries" => Category::Groceries,
            "transfer" => Category::Transfer,
            _ => Category::Other,
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Shopping => "Shopping",
            Category::Dining => "Dining",
            Category::Transportation => "Transportation",
            Category::Bills => "Bills",
            Category::Income => "Income",
            Category::Investment => "Investment",
            Category::Healthcare => "Healthcare",
            Category::Groceries => "Groceries",
            Category::Transfer => "Transfer",
            Category::Other => "Other",
        };
        f.pad(name)
    }
}

/// Icon and colour for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryBadge {
    pub icon: &'static str,
    pub tone: BadgeTone,
}

/// Colour family used for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Purple,
    Orange,
    Blue,
    Red,
    Green,
    Indigo,
    Pink,
    Gray,
}
