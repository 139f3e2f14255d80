use crate::{commands::welcome::welcome_member, data::State};
use bot_traits::TraceErr;
use color_eyre::eyre::{Error, Result};
use poise::serenity_prelude as serenity;

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, State, Error>,
    data: &State,
) -> Result<()> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!(
                "Logged in as {} ({})",
                data_about_bot.user.name,
                data_about_bot.user.id
            );
            tracing::info!("Resistance is futile.");
        }
        serenity::FullEvent::GuildMemberAddition { new_member } => {
            welcome_member(ctx, data, new_member).await.trace_err_ok();
        }
        serenity::FullEvent::Ratelimit { data } => {
            tracing::warn!("Ratelimited: {:?}", data);
        }
        _ => {}
    };

    Ok(())
}
