use serde::{Deserialize, Serialize};

/// A selectable `(glyph, title)` entry. The title is what ends up in the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub glyph: String,
    pub title: String,
}

impl OptionItem {
    pub fn new(glyph: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            title: title.into(),
        }
    }
}

/// Ordered, read-only list of options. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<OptionItem>,
}

impl Catalog {
    pub fn new(items: Vec<OptionItem>) -> Self {
        Self { items }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(glyph, title)| OptionItem::new(glyph, title))
                .collect(),
        )
    }

    pub fn professions() -> Self {
        Self::from_pairs([
            ("💻", "Developer"),
            ("🎨", "Designer"),
            ("📚", "Student"),
            ("👩‍🏫", "Teacher"),
            ("🩺", "Healthcare"),
            ("💼", "Business"),
            ("✍️", "Creative"),
            ("⚙️", "Engineer"),
            ("✨", "Other"),
        ])
    }

    pub fn interests() -> Self {
        Self::from_pairs([
            ("🤖", "Technology"),
            ("🎮", "Gaming"),
            ("🎵", "Music"),
            ("⚽", "Sports"),
            ("✈️", "Travel"),
            ("🍕", "Food"),
            ("🖼️", "Art"),
            ("🔬", "Science"),
            ("💪", "Fitness"),
            ("📖", "Reading"),
            ("🎬", "Movies"),
            ("📷", "Photography"),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First entry with this title; duplicates are the caller's concern.
    pub fn find(&self, title: &str) -> Option<&OptionItem> {
        self.items.iter().find(|o| o.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.find(title).is_some()
    }

    /// Titles that appear more than once, in first-seen order.
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.items.len());
        let mut dups: Vec<&str> = Vec::new();
        for item in &self.items {
            let t = item.title.as_str();
            if seen.contains(&t) {
                if !dups.contains(&t) {
                    dups.push(t);
                }
            } else {
                seen.push(t);
            }
        }
        dups
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a OptionItem;
    type IntoIter = std::slice::Iter<'a, OptionItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_sizes() {
        assert_eq!(Catalog::professions().len(), 9);
        assert_eq!(Catalog::interests().len(), 12);
    }

    #[test]
    fn find_by_title() {
        let c = Catalog::interests();
        assert_eq!(c.find("Gaming").map(|o| o.glyph.as_str()), Some("🎮"));
        assert!(!c.contains("gaming"));
    }

    #[test]
    fn duplicates_reported_once() {
        let c = Catalog::from_pairs([("a", "X"), ("b", "Y"), ("c", "X"), ("d", "X")]);
        assert_eq!(c.duplicate_titles(), vec!["X"]);
        assert!(Catalog::professions().duplicate_titles().is_empty());
    }
}
