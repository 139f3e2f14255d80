use crate::{
    content::{bob_ross, bovonto, random_line_embed},
    data::PoiseContext,
};
use color_eyre::eyre::Result;
use poise::CreateReply;

/// Sends a Bob Ross quote
#[poise::command(slash_command, prefix_command)]
pub async fn bobross(ctx: PoiseContext<'_>) -> Result<()> {
    let icon = ctx.data().config.read().await.icons.bob_ross.clone();
    let embed = random_line_embed(bob_ross::AUTHOR, icon.as_deref(), bob_ross::QUOTES);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Sends a Bovonto advertising pitch
#[poise::command(slash_command, prefix_command)]
pub async fn bovonto(ctx: PoiseContext<'_>) -> Result<()> {
    let icon = ctx.data().config.read().await.icons.bovonto.clone();
    let embed = random_line_embed(bovonto::AUTHOR, icon.as_deref(), bovonto::PITCHES);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
