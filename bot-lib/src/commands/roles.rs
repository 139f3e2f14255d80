use crate::{
    data::PoiseContext,
    role_policy::{self, CallMe, GuildRole, Join, RoleAnchors},
    utils::{MESSAGE_LIMIT, split_message},
};
use color_eyre::eyre::{OptionExt, Result, WrapErr};
use poise::serenity_prelude::{GuildId, Member, Mentionable};

const RUDY: &str = "<:rudy:441453959215972352>";
const SALUTE: &str = "<:heathsalute:482273509951799296>";

/// The guild's roles, lowest first.
async fn guild_roles(ctx: PoiseContext<'_>) -> Result<(GuildId, Vec<GuildRole>)> {
    let guild_id = ctx.guild_id().ok_or_eyre("Couldn't get guild")?;
    let roles = guild_id.roles(ctx).await.wrap_err("Couldn't get roles")?;

    Ok((guild_id, role_policy::snapshot(roles.values())))
}

async fn author_member(ctx: PoiseContext<'_>, guild_id: GuildId) -> Result<Member> {
    guild_id
        .member(ctx, ctx.author().id)
        .await
        .wrap_err("Couldn't get member")
}

/// `None` (after telling the user) when the anchor roles are missing.
async fn resolve_anchors(ctx: PoiseContext<'_>, roles: &[GuildRole]) -> Result<Option<RoleAnchors>> {
    let names = ctx.data().config.read().await.role_anchors.clone();

    match RoleAnchors::resolve(roles, &names) {
        Ok(anchors) => Ok(Some(anchors)),
        Err(missing) => {
            tracing::error!("Role self-service is broken: {missing}");
            ctx.say("Role self-service isn't set up on this server, poke a mod.")
                .await?;
            Ok(None)
        }
    }
}

async fn find_or_complain<'a>(
    ctx: PoiseContext<'_>,
    roles: &'a [GuildRole],
    name: &str,
) -> Result<Option<&'a GuildRole>> {
    let role = role_policy::find_role(roles, name);

    if role.is_none() {
        ctx.say(format!("{RUDY} I couldn't find a role called {name}."))
            .await?;
    }

    Ok(role)
}

/// Add a pronoun role to yourself
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn callme(
    ctx: PoiseContext<'_>,
    #[description = "Your pronouns, eg. they/them"]
    #[rest]
    pronoun: String,
) -> Result<()> {
    let (guild_id, roles) = guild_roles(ctx).await?;
    let Some(anchors) = resolve_anchors(ctx, &roles).await? else {
        return Ok(());
    };
    let Some(role) = find_or_complain(ctx, &roles, &pronoun).await? else {
        return Ok(());
    };

    let member = author_member(ctx, guild_id).await?;
    let mention = ctx.author().mention();

    match role_policy::callme(anchors, role, member.roles.contains(&role.id)) {
        CallMe::Refuse => {
            tracing::info!("{} tried to callme `{}`", ctx.author().name, role.name);
            ctx.say(format!(
                "{RUDY} Oooooh, {mention} isn't as sneaky as they think they are. "
            ))
            .await?;
        }
        CallMe::AlreadyHeld => {
            ctx.say(format!("{RUDY} You already have {pronoun} pronouns."))
                .await?;
        }
        CallMe::Grant => {
            member
                .add_role(ctx, role.id)
                .await
                .wrap_err("Couldn't add role")?;
            tracing::info!("{} is now {}", ctx.author().name, role.name);

            ctx.say(format!("{SALUTE} Comrade {mention} wants to be called {pronoun}."))
                .await?;
        }
    }

    Ok(())
}

/// Remove a pronoun role from yourself
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn imnot(
    ctx: PoiseContext<'_>,
    #[description = "The pronouns to drop"]
    #[rest]
    old_pronoun: String,
) -> Result<()> {
    let (guild_id, roles) = guild_roles(ctx).await?;
    let Some(role) = find_or_complain(ctx, &roles, &old_pronoun).await? else {
        return Ok(());
    };

    let member = author_member(ctx, guild_id).await?;
    let held = member.roles.contains(&role.id);

    // Removal and confirmation happen whether or not the role was held, the
    // "never picked" note follows the confirmation.
    member
        .remove_role(ctx, role.id)
        .await
        .wrap_err("Couldn't remove role")?;

    ctx.say(format!(
        "{SALUTE} Comrade {} no longer wants to be called {old_pronoun}.",
        ctx.author().mention()
    ))
    .await?;

    if !held {
        ctx.say(format!("{RUDY} You never picked those pronouns."))
            .await?;
    }

    Ok(())
}

/// Join one of the other role-based groups
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn join(
    ctx: PoiseContext<'_>,
    #[description = "The group to join, see /listroles"]
    #[rest]
    new_role: String,
) -> Result<()> {
    let (guild_id, roles) = guild_roles(ctx).await?;
    let Some(anchors) = resolve_anchors(ctx, &roles).await? else {
        return Ok(());
    };
    let Some(role) = find_or_complain(ctx, &roles, &new_role.to_lowercase()).await? else {
        return Ok(());
    };

    match role_policy::join(anchors, role) {
        Join::Refuse => {
            tracing::info!("{} tried to join `{}`", ctx.author().name, role.name);
            ctx.say(format!("{RUDY} That's not what this is for."))
                .await?;
        }
        Join::Grant => {
            author_member(ctx, guild_id)
                .await?
                .add_role(ctx, role.id)
                .await
                .wrap_err("Couldn't add role")?;
            tracing::info!("{} joined {}", ctx.author().name, role.name);

            ctx.say(format!(
                "{SALUTE} {} has joined {new_role}!",
                ctx.author().mention()
            ))
            .await?;
        }
    }

    Ok(())
}

/// Leave one of the other role-based groups
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn leave(
    ctx: PoiseContext<'_>,
    #[description = "The group to leave"]
    #[rest]
    old_role: String,
) -> Result<()> {
    let (guild_id, roles) = guild_roles(ctx).await?;
    let Some(role) = find_or_complain(ctx, &roles, &old_role.to_lowercase()).await? else {
        return Ok(());
    };

    let member = author_member(ctx, guild_id).await?;
    let held = member.roles.contains(&role.id);

    member
        .remove_role(ctx, role.id)
        .await
        .wrap_err("Couldn't remove role")?;

    ctx.say(format!(
        "{} is no longer a member of {old_role}.",
        ctx.author().mention()
    ))
    .await?;

    if !held {
        ctx.say(format!("{RUDY} You were never in that role."))
            .await?;
    }

    Ok(())
}

/// List all roles on the server, joinable or otherwise
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn listroles(ctx: PoiseContext<'_>) -> Result<()> {
    let (_, roles) = guild_roles(ctx).await?;
    let names = role_policy::list_role_names(&roles);

    for chunk in split_message(&names, ", ", MESSAGE_LIMIT) {
        ctx.say(chunk).await?;
    }

    Ok(())
}
