use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;

use crate::deck::{Deck, SlideKind};
use crate::icons;

/// Load and validate a deck file, then print a short summary. Warnings
/// (duplicate ids, unresolved icon keys) don't fail the check; a deck that
/// doesn't parse or has no slides does.
pub fn run(file: &Path) -> anyhow::Result<()> {
    let deck = Deck::load(file)?;

    println!("{} {}", "Deck:".bold(), deck.display_title());
    if let Some(author) = &deck.meta.author {
        println!("{} {author}", "Author:".bold());
    }

    let count_of = |kind: SlideKind| deck.slides.iter().filter(|s| s.kind == kind).count();
    println!(
        "{} {} ({} cover, {} content, {} section, {} list)",
        "Slides:".bold(),
        deck.len(),
        count_of(SlideKind::Cover),
        count_of(SlideKind::Content),
        count_of(SlideKind::Section),
        count_of(SlideKind::List),
    );

    let mut warnings = 0;

    let mut seen = HashSet::new();
    for slide in &deck.slides {
        if !seen.insert(slide.id) {
            println!(
                "{} duplicate slide id {}",
                "warning:".yellow().bold(),
                slide.id
            );
            warnings += 1;
        }
    }

    for slide in &deck.slides {
        if let Some(key) = &slide.icon {
            if !icons::is_known(key) {
                println!(
                    "{} slide {} uses unknown icon key '{key}' (falls back to a generic glyph)",
                    "warning:".yellow().bold(),
                    slide.id
                );
                warnings += 1;
            }
        }
    }

    if warnings == 0 {
        println!("{}", "OK".green().bold());
    } else {
        println!("{} with {warnings} warning(s)", "OK".yellow().bold());
    }
    Ok(())
}
