use crate::{
    data::PoiseContext,
    role_policy::{self, GuildRole},
};
use ahash::AHashSet;
use color_eyre::eyre::{OptionExt, Result, WrapErr, bail};
use itertools::Itertools;
use poise::{
    CreateReply,
    serenity_prelude::{
        ComponentInteractionDataKind, CreateActionRow, CreateInteractionResponse,
        CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
        CreateSelectMenuOption, ReactionType, RoleId,
    },
};
use std::time::Duration;

const PICKER_ID: &str = "pronoun_picker";
const PICKER_TIMEOUT: Duration = Duration::from_secs(120);
/// Discord refuses select menus with more options than this.
const MAX_OPTIONS: usize = 25;
/// Longest description Discord accepts on a select menu option.
const MAX_DESCRIPTION: usize = 100;

fn option_description(role_name: &str) -> String {
    format!("Tag me as {role_name}, please")
        .chars()
        .take(MAX_DESCRIPTION)
        .collect()
}

fn picker_menu(assignable: &[GuildRole], held: &AHashSet<RoleId>) -> CreateSelectMenu {
    let options = assignable
        .iter()
        .map(|role| {
            let option = CreateSelectMenuOption::new(&role.name, role.id.to_string())
                .description(option_description(&role.name))
                .default_selection(held.contains(&role.id));

            match &role.unicode_emoji {
                Some(emoji) => option.emoji(ReactionType::Unicode(emoji.clone())),
                None => option,
            }
        })
        .collect_vec();

    CreateSelectMenu::new(PICKER_ID, CreateSelectMenuKind::String { options })
        .placeholder("Choose which pronoun sets you'd like to have")
        .min_values(0)
        .max_values(assignable.len() as u8)
}

fn parse_selection(values: &[String]) -> AHashSet<RoleId> {
    values
        .iter()
        .filter_map(|value| value.parse::<u64>().ok())
        .filter(|id| *id != 0)
        .map(RoleId::new)
        .collect()
}

/// Get a menu to pick your pronouns from
#[poise::command(slash_command, guild_only, ephemeral)]
pub async fn pickpronoun(ctx: PoiseContext<'_>) -> Result<()> {
    let guild_id = ctx.guild_id().ok_or_eyre("Couldn't get guild")?;
    let author = ctx.author();
    let roles = role_policy::snapshot(guild_id.roles(ctx).await?.values());

    let bot_id = ctx.serenity_context().cache.current_user().id;
    let bot_member = guild_id
        .member(ctx, bot_id)
        .await
        .wrap_err("Couldn't get bot member")?;
    let bot_top_position = roles
        .iter()
        .filter(|role| bot_member.roles.contains(&role.id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0);

    let everyone = guild_id.everyone_role();
    let assignable = roles
        .into_iter()
        .rev()
        .filter(|role| role_policy::is_self_assignable(role, everyone, bot_top_position))
        .collect_vec();

    if assignable.is_empty() {
        ctx.say("There aren't any roles I'm able to hand out here.")
            .await?;
        return Ok(());
    }

    if assignable.len() > MAX_OPTIONS {
        tracing::warn!(
            "{} assignable roles, only the top {} fit in the picker",
            assignable.len(),
            MAX_OPTIONS
        );
    }
    let assignable = assignable.into_iter().take(MAX_OPTIONS).collect_vec();

    let held: AHashSet<RoleId> = guild_id
        .member(ctx, author.id)
        .await
        .wrap_err("Couldn't get member")?
        .roles
        .into_iter()
        .collect();

    let reply = ctx
        .send(
            CreateReply::default()
                .content("Please choose any number of pronouns:")
                .components(vec![CreateActionRow::SelectMenu(picker_menu(
                    &assignable,
                    &held,
                ))])
                .ephemeral(true),
        )
        .await?;

    let message = reply.into_message().await?;
    let Some(interaction) = message
        .await_component_interaction(ctx)
        .author_id(author.id)
        .custom_ids(vec![PICKER_ID.to_owned()])
        .timeout(PICKER_TIMEOUT)
        .await
    else {
        tracing::debug!("{} never picked their pronouns", author.name);
        return Ok(());
    };

    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        bail!("Pronoun picker got a {:?} interaction", interaction.data.kind);
    };
    let selected = parse_selection(values);

    // Roles may have changed while the menu was open, diff against what they have now.
    let held: AHashSet<RoleId> = guild_id
        .member(ctx, author.id)
        .await
        .wrap_err("Couldn't get member")?
        .roles
        .into_iter()
        .collect();
    let delta = role_policy::reconcile(&assignable, &held, &selected);

    let reason = format!("Added by {} via pronoun picker", author.name);
    for role_id in delta.add {
        ctx.http()
            .add_member_role(guild_id, author.id, role_id, Some(reason.as_str()))
            .await
            .wrap_err("Couldn't add role")?;
    }

    let reason = format!("Removed by {} via pronoun picker", author.name);
    for role_id in delta.remove {
        ctx.http()
            .remove_member_role(guild_id, author.id, role_id, Some(reason.as_str()))
            .await
            .wrap_err("Couldn't remove role")?;
    }

    let chosen = assignable
        .iter()
        .filter(|role| selected.contains(&role.id))
        .map(|role| role.name.as_str())
        .join(", ");
    tracing::info!("{} picked pronouns: {}", author.name, chosen);

    interaction
        .create_response(
            ctx,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(format!("Your pronouns are now: {chosen}"))
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
