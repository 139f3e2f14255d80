use color_eyre::eyre::{Result, WrapErr};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};
use rand::seq::IndexedRandom;
use serde::Deserialize;
use std::path::Path;

pub const FOOTER: &str = "Images © Labyrinthos LLC";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TarotCard {
    pub title: String,
    pub meaning: String,
    pub url: String,
    pub keywords: Vec<String>,
    pub yesno: String,
    pub image: String,
}

/// The deck file as written on disk.
///
/// A file shipped with a `__template` key is an example that nobody has
/// filled in yet.
#[derive(Deserialize)]
struct DeckFile {
    #[serde(rename = "__template")]
    template: Option<serde_json::Value>,
    deck: Option<Vec<TarotCard>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TarotDeck {
    /// Still the example file.
    Template,
    /// No deck configured, or the file has no cards.
    Missing,
    Loaded(Vec<TarotCard>),
}

impl TarotDeck {
    pub fn load(path: Option<&Path>) -> Result<TarotDeck> {
        let Some(path) = path else {
            tracing::warn!("No tarot deck configured");
            return Ok(TarotDeck::Missing);
        };

        let file = std::fs::read_to_string(path).wrap_err("Could not read tarot deck")?;
        let deck = TarotDeck::parse(&file)?;

        if let TarotDeck::Loaded(cards) = &deck {
            tracing::info!("Loaded {} tarot cards from {}", cards.len(), path.display());
        }

        Ok(deck)
    }

    pub fn parse(json: &str) -> Result<TarotDeck> {
        let file: DeckFile = serde_json::from_str(json).wrap_err("Could not parse tarot deck")?;

        Ok(match file {
            DeckFile {
                template: Some(_), ..
            } => TarotDeck::Template,
            DeckFile {
                deck: Some(cards), ..
            } if !cards.is_empty() => TarotDeck::Loaded(cards),
            _ => TarotDeck::Missing,
        })
    }

    pub fn draw(&self) -> Option<&TarotCard> {
        match self {
            TarotDeck::Loaded(cards) => cards.choose(&mut rand::rng()),
            _ => None,
        }
    }
}

impl TarotCard {
    pub fn embed(&self) -> CreateEmbed {
        CreateEmbed::new()
            .title(&self.title)
            .description(&self.meaning)
            .url(&self.url)
            .field("Keywords", self.keywords.join(", "), true)
            .field("Yes/No?", &self.yesno, true)
            .image(&self.image)
            .footer(CreateEmbedFooter::new(FOOTER))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DECK: &str = r#"{
        "deck": [
            {
                "title": "The Fool",
                "meaning": "Beginnings, innocence, spontaneity.",
                "url": "https://example.com/fool",
                "keywords": ["beginnings", "innocence"],
                "yesno": "Yes",
                "image": "https://example.com/fool.png"
            },
            {
                "title": "The Fool (Reversed)",
                "meaning": "Holding back, recklessness.",
                "url": "https://example.com/fool-reversed",
                "keywords": ["recklessness"],
                "yesno": "No",
                "image": "https://example.com/fool-reversed.png"
            }
        ]
    }"#;

    #[test]
    fn loaded_deck_draws_its_cards() {
        let deck = TarotDeck::parse(DECK).unwrap();
        let TarotDeck::Loaded(cards) = &deck else {
            panic!("expected a loaded deck, got {deck:?}");
        };

        assert_eq!(cards.len(), 2);
        for _ in 0..20 {
            assert!(deck.draw().unwrap().title.starts_with("The Fool"));
        }
    }

    #[test]
    fn template_wins_over_cards() {
        let deck = TarotDeck::parse(r#"{ "__template": "fill me in", "deck": [] }"#).unwrap();

        assert_eq!(deck, TarotDeck::Template);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn no_deck_key_is_missing() {
        assert_eq!(TarotDeck::parse("{}").unwrap(), TarotDeck::Missing);
        assert_eq!(TarotDeck::parse(r#"{ "deck": [] }"#).unwrap(), TarotDeck::Missing);
        assert_eq!(TarotDeck::load(None).unwrap(), TarotDeck::Missing);
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(TarotDeck::parse("{ deck").is_err());
    }
}
