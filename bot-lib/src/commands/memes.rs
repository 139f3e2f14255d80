use crate::{
    data::PoiseContext,
    utils::{MESSAGE_LIMIT, split_message},
};
use bot_db::memes::{MemeEntry, MemeStore};
use color_eyre::eyre::Result;

const DENIED_GIF: &str = "https://imgur.com/IiaYjzH.gif";
const NOT_FOUND: &str = "Sorry, this command doesn't exist.";
const NOTHING_STORED: &str = "My necroborgic memories are empty.";

fn denial(username: &str) -> String {
    format!("Uh uh uh! {username} didn't say the magic word!\n{DENIED_GIF}")
}

/// Stores the meme if `username` is approved. Returns the reply either way.
fn add_meme(
    memes: &MemeStore,
    username: &str,
    approved: bool,
    name: &str,
    url: &str,
) -> Result<String> {
    if !approved {
        return Ok(denial(username));
    }

    memes.add(name, url)?;
    tracing::info!("{} added meme `{}` -> {}", username, name, url);

    Ok(format!("{name} has been added to my necroborgic memories"))
}

/// Purges every meme matching `query` if `username` is approved.
fn remove_meme(memes: &MemeStore, username: &str, approved: bool, query: &str) -> Result<String> {
    if !approved {
        return Ok(denial(username));
    }

    let removed = memes.remove(query)?;
    tracing::info!("{} removed {} meme(s) matching `{}`", username, removed, query);

    Ok(format!("{query} has been purged from my necroborgic memories"))
}

/// Retrieves a stored meme from my necroborgic memories
#[poise::command(slash_command, prefix_command)]
pub async fn bb(
    ctx: PoiseContext<'_>,
    #[description = "The meme's name, or part of it"]
    #[rest]
    meme: String,
) -> Result<()> {
    match ctx.data().memes.lookup(&meme)? {
        Some(MemeEntry { link, .. }) => ctx.say(link).await?,
        None => ctx.say(NOT_FOUND).await?,
    };

    Ok(())
}

/// Adds a meme to my necroborgic memories, if you have permission
#[poise::command(slash_command, prefix_command)]
pub async fn add(
    ctx: PoiseContext<'_>,
    #[description = "What to call the meme"] name: String,
    #[description = "Link to the meme"] url: String,
) -> Result<()> {
    let author = &ctx.author().name;
    let approved = ctx.data().is_approved(author).await;

    let reply = add_meme(&ctx.data().memes, author, approved, &name, &url)?;
    ctx.say(reply).await?;

    Ok(())
}

/// Removes a meme from my necroborgic memories, if you have permission
#[poise::command(slash_command, prefix_command)]
pub async fn remove(
    ctx: PoiseContext<'_>,
    #[description = "The meme's name, every meme containing it goes"]
    #[rest]
    meme: String,
) -> Result<()> {
    let author = &ctx.author().name;
    let approved = ctx.data().is_approved(author).await;

    let reply = remove_meme(&ctx.data().memes, author, approved, &meme)?;
    ctx.say(reply).await?;

    Ok(())
}

/// Lists all memes stored in my necroborgic memories
#[poise::command(slash_command, prefix_command)]
pub async fn beanfo(ctx: PoiseContext<'_>) -> Result<()> {
    let names = ctx.data().memes.list_names()?;

    if names.is_empty() {
        ctx.say(NOTHING_STORED).await?;
        return Ok(());
    }

    for chunk in split_message(&names, ", ", MESSAGE_LIMIT) {
        ctx.say(chunk).await?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use bot_db::ButterbeanDb;

    fn store() -> MemeStore {
        MemeStore::new(&ButterbeanDb::temporary().unwrap()).unwrap()
    }

    #[test]
    fn denial_names_the_user() {
        let message = denial("someone");

        assert!(message.starts_with("Uh uh uh! someone didn't say the magic word!"));
        assert!(message.ends_with(DENIED_GIF));
    }

    #[test]
    fn denied_add_leaves_store_alone() {
        let memes = store();
        memes.add("cabbage", "https://example.com/cabbage.png").unwrap();

        let reply = add_meme(&memes, "smoltz", false, "flanders", "https://example.com/f.gif").unwrap();

        assert_eq!(reply, denial("smoltz"));
        assert_eq!(memes.names().unwrap(), vec!["cabbage"]);
    }

    #[test]
    fn denied_remove_leaves_store_alone() {
        let memes = store();
        memes.add("cabbage", "https://example.com/cabbage.png").unwrap();

        let reply = remove_meme(&memes, "smoltz", false, "cabbage").unwrap();

        assert_eq!(reply, denial("smoltz"));
        assert_eq!(memes.names().unwrap(), vec!["cabbage"]);
    }

    #[test]
    fn approved_add_and_remove() {
        let memes = store();

        let reply = add_meme(&memes, "tupperward", true, "flanders", "https://example.com/f.gif").unwrap();
        assert_eq!(reply, "flanders has been added to my necroborgic memories");
        assert_eq!(memes.lookup("flanders").unwrap().unwrap().link, "https://example.com/f.gif");

        let reply = remove_meme(&memes, "tupperward", true, "flanders").unwrap();
        assert_eq!(reply, "flanders has been purged from my necroborgic memories");
        assert!(memes.names().unwrap().is_empty());
    }
}
