//! Canned text the bot hands out.

pub mod bob_ross;
pub mod bovonto;
pub mod tarot;
pub mod welcome;

use poise::serenity_prelude::{CreateEmbed, CreateEmbedAuthor};
use rand::seq::IndexedRandom;

pub fn random_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.choose(&mut rand::rng()).copied()
}

pub fn embed_author(name: &str, icon: Option<&str>) -> CreateEmbedAuthor {
    let author = CreateEmbedAuthor::new(name);

    match icon {
        Some(icon) => author.icon_url(icon),
        None => author,
    }
}

/// An embed holding a random line from `lines`, credited to `name`.
pub fn random_line_embed(name: &str, icon: Option<&str>, lines: &[&str]) -> CreateEmbed {
    CreateEmbed::new()
        .description(random_line(lines).unwrap_or_default())
        .author(embed_author(name, icon))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn random_line_comes_from_the_list() {
        let lines = ["one", "two", "three"];

        for _ in 0..50 {
            assert!(lines.contains(&random_line(&lines).unwrap()));
        }
    }

    #[test]
    fn random_line_of_nothing() {
        assert_eq!(random_line(&[]), None);
    }

    #[test]
    fn content_lists_are_not_empty() {
        assert!(!bob_ross::QUOTES.is_empty());
        assert!(!bovonto::PITCHES.is_empty());
    }
}
