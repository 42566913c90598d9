use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// An ordered, fixed sequence of slides plus deck-level metadata. Read-only
/// for the lifetime of a viewing session; validated to be non-empty at load.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(flatten)]
    pub meta: DeckMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub footer: Option<String>,
}

/// One displayable unit. `kind` selects the layout treatment; `icon` is a
/// key resolved by [`crate::icons`] at render time.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub id: u32,

    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub points: Vec<String>,

    #[serde(rename = "type", default)]
    pub kind: SlideKind,

    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Cover,
    #[default]
    Content,
    Section,
    List,
}

impl SlideKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Content => "content",
            Self::Section => "section",
            Self::List => "list",
        }
    }
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let deck =
            parse(&content).with_context(|| format!("Invalid deck file {}", path.display()))?;
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Window/export title: deck title, or a placeholder when the metadata
    /// block doesn't carry one.
    pub fn display_title(&self) -> String {
        self.meta
            .title
            .clone()
            .unwrap_or_else(|| "Untitled deck".to_string())
    }
}

pub fn parse(content: &str) -> Result<Deck> {
    let deck: Deck = serde_yaml::from_str(content)?;
    if deck.slides.is_empty() {
        anyhow::bail!("Deck contains no slides");
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_parses() {
        let content = include_str!("../../../sample-decks/intro.yaml");
        let deck = parse(content).unwrap();
        assert!(
            deck.len() >= 5,
            "expected at least 5 slides, got {}",
            deck.len()
        );
        assert_eq!(deck.slides[0].kind, SlideKind::Cover);
        assert!(deck.meta.title.is_some());
        assert!(deck.meta.footer.is_some());
    }

    #[test]
    fn slide_kinds_parse_from_type_tag() {
        let content = "
slides:
  - { id: 1, title: A, type: cover }
  - { id: 2, title: B, type: content }
  - { id: 3, title: C, type: section }
  - { id: 4, title: D, type: list }
";
        let deck = parse(content).unwrap();
        let kinds: Vec<SlideKind> = deck.slides.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Cover,
                SlideKind::Content,
                SlideKind::Section,
                SlideKind::List,
            ]
        );
    }

    #[test]
    fn optional_fields_default() {
        let content = "
slides:
  - id: 1
    title: Only a title
";
        let deck = parse(content).unwrap();
        let slide = &deck.slides[0];
        assert_eq!(slide.kind, SlideKind::Content);
        assert!(slide.subtitle.is_none());
        assert!(slide.icon.is_none());
        assert!(slide.points.is_empty());
    }

    #[test]
    fn empty_deck_is_rejected() {
        let content = "
title: Nothing here
slides: []
";
        assert!(parse(content).is_err());
    }

    #[test]
    fn unknown_slide_kind_is_rejected() {
        let content = "
slides:
  - { id: 1, title: A, type: carousel }
";
        assert!(parse(content).is_err());
    }

    #[test]
    fn display_title_falls_back() {
        let deck = parse("slides:\n  - { id: 1, title: A }\n").unwrap();
        assert_eq!(deck.display_title(), "Untitled deck");
    }
}
