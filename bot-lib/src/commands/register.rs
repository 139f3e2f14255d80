use crate::data::PoiseContext;
use color_eyre::eyre::Result;
use poise::builtins::register_application_commands_buttons;

/// Register or unregister the slash commands
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn register(ctx: PoiseContext<'_>) -> Result<()> {
    register_application_commands_buttons(ctx).await?;
    Ok(())
}
