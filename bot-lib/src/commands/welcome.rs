use crate::{
    config::Config,
    content::{embed_author, welcome},
    data::{PoiseContext, State},
};
use color_eyre::eyre::{Result, WrapErr};
use poise::{
    CreateReply,
    serenity_prelude::{self as serenity, CreateEmbed, CreateMessage, Member, Mentionable},
};

fn welcome_embed(config: &Config, member: Option<&Member>) -> CreateEmbed {
    let greeting = config
        .greeting
        .as_deref()
        .map_or(welcome::GREETING, |greeting| greeting.as_str());
    let description = match member {
        Some(member) => format!("{}! {}", member.mention(), greeting),
        None => greeting.to_owned(),
    };
    let icon = config.icons.timey.as_deref().unwrap_or(welcome::DEFAULT_ICON);

    CreateEmbed::new()
        .description(description)
        .author(embed_author(welcome::AUTHOR, Some(icon)))
}

/// Greets a new member in the guild's system channel, if it has one.
pub async fn welcome_member(ctx: &serenity::Context, data: &State, member: &Member) -> Result<()> {
    let guild = member
        .guild_id
        .to_partial_guild(ctx)
        .await
        .wrap_err("Couldn't get guild")?;

    let Some(channel_id) = guild.system_channel_id else {
        tracing::debug!("No system channel, not welcoming {}", member.user.name);
        return Ok(());
    };

    let embed = welcome_embed(&*data.config.read().await, Some(member));

    channel_id
        .send_message(ctx, CreateMessage::new().embed(embed))
        .await
        .wrap_err("Couldn't send welcome message")?;

    tracing::info!("Welcomed {}", member.user.name);

    Ok(())
}

/// Sends my welcome message again, in case a new member missed it
#[poise::command(slash_command, prefix_command)]
pub async fn resend(ctx: PoiseContext<'_>) -> Result<()> {
    let embed = welcome_embed(&*ctx.data().config.read().await, None);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
