pub mod help;
pub mod memes;
pub mod pronoun_picker;
pub mod quotes;
pub mod register;
pub mod roles;
pub mod tarot;
pub mod welcome;
