//! Heading index for the generated table of contents.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Map an element tag name (`"H2"`, `"h3"`, ...) to a collected level.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }

    /// Class put on the list item so nested levels can be indented by CSS.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

/// A heading as found in the document, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSource {
    pub id: Option<String>,
    pub level: HeadingLevel,
    pub text: String,
}

impl HeadingSource {
    pub fn new(id: Option<&str>, level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()).map(str::to_string),
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: String,
    pub level: HeadingLevel,
    pub text: String,
}

impl TocEntry {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Flat, document-ordered list of links to the article's headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocIndex {
    entries: Vec<TocEntry>,
    assignments: Vec<(usize, String)>,
}

impl TocIndex {
    /// Index `headings`, or `None` when there are fewer than `min_headings`.
    #[must_use]
    pub fn build(headings: &[HeadingSource], id_prefix: &str, min_headings: usize) -> Option<Self> {
        Self::build_avoiding(headings, id_prefix, min_headings, |_| false)
    }

    /// Like [`Self::build`], but generated ids also steer clear of ids for which
    /// `taken` answers true (ids used elsewhere on the page).
    #[must_use]
    pub fn build_avoiding<F>(
        headings: &[HeadingSource],
        id_prefix: &str,
        min_headings: usize,
        taken: F,
    ) -> Option<Self>
    where
        F: Fn(&str) -> bool,
    {
        if headings.len() < min_headings {
            return None;
        }

        let mut used: HashSet<String> = headings.iter().filter_map(|h| h.id.clone()).collect();
        let mut entries = Vec::with_capacity(headings.len());
        let mut assignments = Vec::new();

        for (index, heading) in headings.iter().enumerate() {
            let id = if let Some(existing) = &heading.id {
                existing.clone()
            } else {
                let base = format!("{id_prefix}{index}");
                let mut candidate = base.clone();
                let mut suffix = 1;
                while used.contains(&candidate) || taken(&candidate) {
                    candidate = format!("{base}-{suffix}");
                    suffix += 1;
                }
                used.insert(candidate.clone());
                assignments.push((index, candidate.clone()));
                candidate
            };
            entries.push(TocEntry {
                id,
                level: heading.level,
                text: heading.text.trim().to_string(),
            });
        }

        Some(Self {
            entries,
            assignments,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// `(heading index, id)` pairs for headings that had no id and must receive one.
    #[must_use]
    pub fn assignments(&self) -> &[(usize, String)] {
        &self.assignments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(id: Option<&str>, level: HeadingLevel, text: &str) -> HeadingSource {
        HeadingSource::new(id, level, text)
    }

    #[test]
    fn two_headings_produce_no_toc() {
        let headings = [h(None, HeadingLevel::H2, "A"), h(None, HeadingLevel::H3, "B")];
        assert!(TocIndex::build(&headings, "heading-", 3).is_none());
    }

    #[test]
    fn links_follow_document_order_and_resolve() {
        let headings = [
            h(None, HeadingLevel::H2, " Intro "),
            h(Some("setup"), HeadingLevel::H3, "Setup"),
            h(None, HeadingLevel::H2, "Usage"),
        ];
        let toc = TocIndex::build(&headings, "heading-", 3).expect("toc");
        let hrefs: Vec<String> = toc.entries().iter().map(TocEntry::href).collect();
        assert_eq!(hrefs, vec!["#heading-0", "#setup", "#heading-2"]);
        assert_eq!(toc.entries()[0].text, "Intro");
        assert_eq!(toc.entries()[1].level.class(), "h3");
        assert_eq!(
            toc.assignments(),
            &[(0, "heading-0".to_string()), (2, "heading-2".to_string())]
        );

        for (index, entry) in toc.entries().iter().enumerate() {
            let resolved = headings[index].id.clone().or_else(|| {
                toc.assignments()
                    .iter()
                    .find(|(i, _)| *i == index)
                    .map(|(_, id)| id.clone())
            });
            assert_eq!(resolved.as_deref(), Some(entry.id.as_str()));
        }
    }

    #[test]
    fn generated_ids_do_not_collide_with_existing_ones() {
        let headings = [
            h(Some("heading-1"), HeadingLevel::H2, "Pinned"),
            h(None, HeadingLevel::H2, "Second"),
            h(None, HeadingLevel::H2, "Third"),
        ];
        let toc = TocIndex::build_avoiding(&headings, "heading-", 3, |id| id == "heading-2")
            .expect("toc");
        let ids: Vec<&str> = toc.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["heading-1", "heading-1-1", "heading-2-1"]);
    }

    #[test]
    fn tag_names_map_to_levels() {
        assert_eq!(HeadingLevel::from_tag("H2"), Some(HeadingLevel::H2));
        assert_eq!(HeadingLevel::from_tag("h3"), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_tag("H4"), None);
    }
}
