//! Icon-key resolution. A pure mapping from the string keys used in deck
//! files to displayable glyphs; the controller and renderer never know which
//! keys exist. Unknown keys fall back to a neutral marker rather than
//! erroring, matching the clamp-or-ignore policy everywhere else.

/// Resolve a slide icon key to its glyph.
pub fn glyph(key: &str) -> &'static str {
    match key {
        "rocket" => "\u{1F680}",
        "compass" => "\u{1F9ED}",
        "pencil" => "\u{270F}\u{FE0F}",
        "arrows" => "\u{2194}\u{FE0F}",
        "screen" => "\u{1F5A5}\u{FE0F}",
        "map" => "\u{1F5FA}\u{FE0F}",
        "toolbox" => "\u{1F9F0}",
        "sparkles" => "\u{2728}",
        "book" => "\u{1F4D6}",
        "bulb" => "\u{1F4A1}",
        "chart" => "\u{1F4CA}",
        "check" => "\u{2705}",
        "flag" => "\u{1F6A9}",
        "gear" => "\u{2699}\u{FE0F}",
        "globe" => "\u{1F310}",
        "heart" => "\u{2764}\u{FE0F}",
        "key" => "\u{1F511}",
        "star" => "\u{2B50}",
        "target" => "\u{1F3AF}",
        "warning" => "\u{26A0}\u{FE0F}",
        "diamond" => FALLBACK,
        _ => FALLBACK,
    }
}

/// Whether a key resolves to a real glyph (used by `deckview check`).
pub fn is_known(key: &str) -> bool {
    key == "diamond" || glyph(key) != FALLBACK
}

const FALLBACK: &str = "\u{25C6}";

// Chrome glyphs for the viewer itself, not addressable from deck files.
pub const CHEVRON_LEFT: &str = "\u{2039}";
pub const CHEVRON_RIGHT: &str = "\u{203A}";
pub const MAXIMIZE: &str = "\u{26F6}";
pub const MINIMIZE: &str = "\u{2715}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(glyph("rocket"), "\u{1F680}");
        assert_eq!(glyph("star"), "\u{2B50}");
        assert!(is_known("rocket"));
        assert!(is_known("diamond"));
    }

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(glyph("no-such-icon"), FALLBACK);
        assert!(!is_known("no-such-icon"));
    }

    #[test]
    fn sample_deck_icons_all_resolve() {
        let content = include_str!("../../../sample-decks/intro.yaml");
        let deck = crate::deck::parse(content).unwrap();
        for slide in &deck.slides {
            if let Some(key) = &slide.icon {
                assert!(is_known(key), "unresolved icon key: {key}");
            }
        }
    }
}
