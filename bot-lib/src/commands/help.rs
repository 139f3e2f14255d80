use crate::data::PoiseContext;
use color_eyre::eyre::Result;

/// Shows what I can do
#[poise::command(slash_command, prefix_command)]
pub async fn help(
    ctx: PoiseContext<'_>,
    #[description = "A command to explain"] command: Option<String>,
) -> Result<()> {
    let help_text = ctx.data().config.read().await.help_text.clone();

    match (help_text, command) {
        (Some(help_text), None) => {
            ctx.say(&*help_text).await?;
        }
        (_, command) => {
            poise::builtins::help(ctx, command.as_deref(), Default::default()).await?;
        }
    }

    Ok(())
}
