//! Which roles members may hand themselves.
//!
//! The guild's role list is split into zones by two anchor roles, looked up by
//! name:
//!
//! ```text
//! position > upper            staff roles, never self-service
//! lower < position <= upper   pronoun roles, `callme`
//! position <= lower           everything else
//! ```
//!
//! `join` only checks the lower anchor, so it will hand out staff roles as
//! well. That matches how the commands have always behaved and is kept until
//! someone decides otherwise.

use crate::config::RoleAnchorNames;
use ahash::AHashSet;
use itertools::Itertools;
use poise::serenity_prelude::{Role, RoleId};
use thiserror::Error;

/// The parts of a guild role the policy looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    pub id: RoleId,
    pub name: String,
    pub position: u16,
    /// Owned by an integration (bots, boosts), cannot be assigned.
    pub managed: bool,
    pub unicode_emoji: Option<String>,
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        GuildRole {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
            managed: role.managed,
            unicode_emoji: role.unicode_emoji.clone(),
        }
    }
}

/// Lowest position first, ties broken by id like the client does.
pub fn snapshot<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Vec<GuildRole> {
    roles
        .into_iter()
        .map(GuildRole::from)
        .sorted_by_key(|role| (role.position, role.id))
        .collect()
}

/// First role with exactly this name.
pub fn find_role<'a>(roles: &'a [GuildRole], name: &str) -> Option<&'a GuildRole> {
    roles.iter().find(|role| role.name == name)
}

pub fn list_role_names(roles: &[GuildRole]) -> String {
    roles.iter().map(|role| role.name.as_str()).join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("anchor role `{0}` does not exist")]
pub struct MissingAnchor(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Staff,
    Pronoun,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAnchors {
    pub upper: u16,
    pub lower: u16,
}

impl RoleAnchors {
    pub fn resolve(roles: &[GuildRole], names: &RoleAnchorNames) -> Result<Self, MissingAnchor> {
        let position = |name: &str| {
            find_role(roles, name)
                .map(|role| role.position)
                .ok_or_else(|| MissingAnchor(name.to_owned()))
        };

        Ok(RoleAnchors {
            upper: position(&names.upper)?,
            lower: position(&names.lower)?,
        })
    }

    pub fn zone(&self, position: u16) -> Zone {
        if position > self.upper {
            Zone::Staff
        } else if position <= self.lower {
            Zone::Closed
        } else {
            Zone::Pronoun
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMe {
    /// Outside the pronoun zone, someone is trying their luck.
    Refuse,
    AlreadyHeld,
    Grant,
}

pub fn callme(anchors: RoleAnchors, role: &GuildRole, held: bool) -> CallMe {
    match anchors.zone(role.position) {
        Zone::Staff | Zone::Closed => CallMe::Refuse,
        Zone::Pronoun if held => CallMe::AlreadyHeld,
        Zone::Pronoun => CallMe::Grant,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    Refuse,
    Grant,
}

pub fn join(anchors: RoleAnchors, role: &GuildRole) -> Join {
    if role.position <= anchors.lower {
        Join::Refuse
    } else {
        Join::Grant
    }
}

/// Roles the bot can put on members: not `@everyone`, not integration owned,
/// and below the bot's own highest role.
pub fn is_self_assignable(role: &GuildRole, everyone: RoleId, bot_top_position: u16) -> bool {
    role.id != everyone && !role.managed && role.position < bot_top_position
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RoleDelta {
    pub add: Vec<RoleId>,
    pub remove: Vec<RoleId>,
}

/// The changes that bring a member's `held` roles in line with `selected`,
/// only touching the `assignable` roles.
pub fn reconcile(
    assignable: &[GuildRole],
    held: &AHashSet<RoleId>,
    selected: &AHashSet<RoleId>,
) -> RoleDelta {
    let mut delta = RoleDelta::default();

    for role in assignable {
        match (selected.contains(&role.id), held.contains(&role.id)) {
            (true, false) => delta.add.push(role.id),
            (false, true) => delta.remove.push(role.id),
            _ => {}
        }
    }

    delta
}

#[cfg(test)]
mod test {
    use super::*;

    fn role(id: u64, name: &str, position: u16) -> GuildRole {
        GuildRole {
            id: RoleId::new(id),
            name: name.to_owned(),
            position,
            managed: false,
            unicode_emoji: None,
        }
    }

    fn guild() -> Vec<GuildRole> {
        vec![
            role(10, "streampiggies", 1),
            role(11, "Catillac Cat", 2),
            role(12, "she/her", 3),
            role(13, "he/him", 4),
            role(14, "Admin", 5),
        ]
    }

    fn anchors() -> RoleAnchors {
        RoleAnchors::resolve(&guild(), &RoleAnchorNames::default()).unwrap()
    }

    #[test]
    fn resolves_anchor_positions() {
        assert_eq!(anchors(), RoleAnchors { upper: 4, lower: 2 });
    }

    #[test]
    fn missing_anchor_is_reported() {
        let roles = vec![role(13, "he/him", 4), role(14, "Admin", 5)];

        assert_eq!(
            RoleAnchors::resolve(&roles, &RoleAnchorNames::default()),
            Err(MissingAnchor("Catillac Cat".to_owned()))
        );
        assert_eq!(
            MissingAnchor("Catillac Cat".to_owned()).to_string(),
            "anchor role `Catillac Cat` does not exist"
        );
    }

    #[test]
    fn zones() {
        let anchors = anchors();

        assert_eq!(anchors.zone(5), Zone::Staff);
        assert_eq!(anchors.zone(4), Zone::Pronoun);
        assert_eq!(anchors.zone(3), Zone::Pronoun);
        assert_eq!(anchors.zone(2), Zone::Closed);
        assert_eq!(anchors.zone(1), Zone::Closed);
    }

    #[test]
    fn callme_scenario() {
        let roles = guild();
        let anchors = anchors();
        let pick = |name| find_role(&roles, name).unwrap();

        assert_eq!(callme(anchors, pick("Admin"), false), CallMe::Refuse);
        assert_eq!(callme(anchors, pick("she/her"), false), CallMe::Grant);
        assert_eq!(callme(anchors, pick("she/her"), true), CallMe::AlreadyHeld);
        assert_eq!(callme(anchors, pick("he/him"), false), CallMe::Grant);
        assert_eq!(callme(anchors, pick("Catillac Cat"), false), CallMe::Refuse);
        assert_eq!(callme(anchors, pick("streampiggies"), false), CallMe::Refuse);
    }

    #[test]
    fn callme_refuses_staff_even_when_held() {
        let roles = guild();
        let admin = find_role(&roles, "Admin").unwrap();

        assert_eq!(callme(anchors(), admin, true), CallMe::Refuse);
    }

    #[test]
    fn join_only_checks_lower_anchor() {
        let roles = guild();
        let anchors = anchors();
        let pick = |name| find_role(&roles, name).unwrap();

        assert_eq!(join(anchors, pick("streampiggies")), Join::Refuse);
        assert_eq!(join(anchors, pick("Catillac Cat")), Join::Refuse);
        assert_eq!(join(anchors, pick("she/her")), Join::Grant);
        assert_eq!(join(anchors, pick("Admin")), Join::Grant);
    }

    #[test]
    fn find_role_is_exact() {
        let roles = guild();

        assert!(find_role(&roles, "she/her").is_some());
        assert!(find_role(&roles, "She/Her").is_none());
        assert!(find_role(&roles, "she").is_none());
    }

    #[test]
    fn list_names_in_position_order() {
        assert_eq!(
            list_role_names(&guild()),
            "streampiggies, Catillac Cat, she/her, he/him, Admin"
        );
    }

    #[test]
    fn self_assignable_filter() {
        let everyone = role(1, "@everyone", 0);
        let mut bot_role = role(20, "Butterbean", 3);
        bot_role.managed = true;
        let low = role(21, "they/them", 1);
        let high = role(22, "Mods", 6);

        let bot_top = 4;
        assert!(!is_self_assignable(&everyone, everyone.id, bot_top));
        assert!(!is_self_assignable(&bot_role, everyone.id, bot_top));
        assert!(is_self_assignable(&low, everyone.id, bot_top));
        assert!(!is_self_assignable(&high, everyone.id, bot_top));
        assert!(!is_self_assignable(&role(23, "equal", 4), everyone.id, bot_top));
    }

    #[test]
    fn reconcile_adds_and_removes() {
        let assignable = vec![role(1, "he/him", 3), role(2, "she/her", 2), role(3, "they/them", 1)];
        let held: AHashSet<RoleId> = [RoleId::new(1), RoleId::new(2), RoleId::new(99)]
            .into_iter()
            .collect();
        let selected: AHashSet<RoleId> = [RoleId::new(2), RoleId::new(3)].into_iter().collect();

        let delta = reconcile(&assignable, &held, &selected);

        assert_eq!(delta.add, vec![RoleId::new(3)]);
        assert_eq!(delta.remove, vec![RoleId::new(1)]);
    }

    #[test]
    fn reconcile_empty_selection_clears() {
        let assignable = vec![role(1, "he/him", 3), role(2, "she/her", 2)];
        let held: AHashSet<RoleId> = [RoleId::new(1), RoleId::new(2)].into_iter().collect();

        let delta = reconcile(&assignable, &held, &AHashSet::new());

        assert!(delta.add.is_empty());
        assert_eq!(delta.remove, vec![RoleId::new(1), RoleId::new(2)]);
    }
}
