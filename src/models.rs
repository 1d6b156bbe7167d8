//! Planner Models
//!
//! Records persisted per day: cards holding checklist items.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Calendar day identifying one column of the week strip (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

macro_rules! record_id {
    ($name:ident) => {
        /// Opaque unique token; never reused after deletion
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id!(CardId);
record_id!(ItemId);

/// Checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ItemRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Titled group of checklist items. An empty title means untitled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    #[serde(default)]
    pub title: String,
    /// Older saves call this list `todos`
    #[serde(default, alias = "todos")]
    pub items: Vec<ItemRecord>,
}

impl CardRecord {
    pub fn new() -> Self {
        Self {
            id: CardId::generate(),
            title: String::new(),
            items: Vec::new(),
        }
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }
}

impl Default for CardRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key_round_trip() {
        let day: DayKey = "2024-06-03".parse().unwrap();
        assert_eq!(day.to_string(), "2024-06-03");
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2024-06-03\"");
        assert!("06/03/2024".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_card_accepts_legacy_todos_field() {
        let raw = r#"{"id":"c1","title":"Errands","todos":[{"id":"i1","text":"buy milk","completed":true}]}"#;
        let card: CardRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(card.items.len(), 1);
        assert!(card.has_completed());
        assert_eq!(card.items[0].id, ItemId::from("i1"));
    }

    #[test]
    fn test_new_card_is_untitled_and_empty() {
        let card = CardRecord::new();
        assert!(card.title.is_empty());
        assert!(card.items.is_empty());
    }
}
