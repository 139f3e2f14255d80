use crate::{content::tarot::TarotDeck, data::PoiseContext};
use color_eyre::eyre::Result;
use poise::CreateReply;

/// Draws a random card from a 78 card Rider-Waite tarot deck, including reversed cards.
#[poise::command(slash_command, prefix_command)]
pub async fn tarot(ctx: PoiseContext<'_>) -> Result<()> {
    let deck = &ctx.data().tarot;

    if let TarotDeck::Template = deck {
        ctx.say("Oops, someone needs to put a proper tarot deck into my brain first!")
            .await?;
        return Ok(());
    }

    let Some(card) = deck.draw() else {
        ctx.say("Oops, I do not seem to have a valid tarot deck loaded, sorry!")
            .await?;
        return Ok(());
    };

    let name = match ctx.author_member().await {
        Some(member) => member.display_name().to_owned(),
        None => ctx.author().display_name().to_owned(),
    };

    ctx.send(
        CreateReply::default()
            .content(format!("{name}, you have drawn: "))
            .embed(card.embed()),
    )
    .await?;

    Ok(())
}
