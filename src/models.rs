//! Frontend Models
//!
//! Post records, sort direction and the category color mapping.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Blog post (immutable once loaded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_post_date")]
    pub date: NaiveDateTime,
    pub category: String,
}

impl Post {
    /// Date as shown on the post card, e.g. "June 1, 2024"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Accepts `YYYY-MM-DD` as well as a full `YYYY-MM-DDTHH:MM:SS`
fn deserialize_post_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_post_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid post date: {}", raw)))
}

pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Date sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Value used by the sort `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Name of the fallback category entry
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub name: String,
    pub color: String,
}

/// Category -> badge color, with a default for anything unlisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColors {
    #[serde(default = "default_entries")]
    pub entries: Vec<CategoryColor>,
    #[serde(default = "default_category_color")]
    pub default_color: String,
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            default_color: default_category_color(),
        }
    }
}

fn default_entries() -> Vec<CategoryColor> {
    [
        ("Tech", "var(--color-blue)"),
        ("Life", "var(--color-green)"),
        ("Sample", "var(--color-pink)"),
    ]
    .into_iter()
    .map(|(name, color)| CategoryColor {
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

fn default_category_color() -> String {
    "var(--color-charcoal)".to_string()
}

impl CategoryColors {
    /// Never fails: unknown categories get the default color
    pub fn color_for(&self, category: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.name == category)
            .map(|entry| entry.color.as_str())
            .unwrap_or(&self.default_color)
    }

    /// Selectable category names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.name != UNKNOWN_CATEGORY)
            .map(|entry| entry.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_date_formats() {
        let day = parse_post_date("2024-06-01").unwrap();
        assert_eq!(day.to_string(), "2024-06-01 00:00:00");

        let full = parse_post_date("2024-06-01T13:45:00").unwrap();
        assert_eq!(full.to_string(), "2024-06-01 13:45:00");

        assert!(parse_post_date("June 1st").is_none());
    }

    #[test]
    fn test_post_deserialize() {
        let json = r#"{"id":1,"title":"Hello","content":"World","date":"2024-01-05","category":"Tech"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.display_date(), "January 5, 2024");
    }

    #[test]
    fn test_post_deserialize_bad_date() {
        let json = r#"{"id":1,"title":"Hello","content":"World","date":"soon","category":"Tech"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_category_color_fallback() {
        let colors = CategoryColors::default();
        assert_eq!(colors.color_for("Tech"), "var(--color-blue)");
        assert_eq!(colors.color_for("Cooking"), "var(--color-charcoal)");
        assert_eq!(colors.color_for(""), "var(--color-charcoal)");
    }

    #[test]
    fn test_category_names_skip_unknown() {
        let mut colors = CategoryColors::default();
        colors.entries.push(CategoryColor {
            name: UNKNOWN_CATEGORY.to_string(),
            color: "gray".to_string(),
        });
        assert_eq!(colors.names(), vec!["Tech", "Life", "Sample"]);
    }

    #[test]
    fn test_sort_direction_values() {
        assert_eq!(SortDirection::from_value("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_value("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_value("bogus"), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.as_str(), "desc");
    }
}
