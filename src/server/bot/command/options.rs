//! Accessors over resolved slash command options.

use serenity::all::{PartialChannel, PartialMember, ResolvedOption, ResolvedValue, Role, User};

use crate::server::model::moderation::ModerationTarget;

/// Splits the invoked subcommand off a command's top-level options.
pub fn subcommand(options: Vec<ResolvedOption<'_>>) -> Option<(&str, Vec<ResolvedOption<'_>>)> {
    options.into_iter().find_map(|option| match option.value {
        ResolvedValue::SubCommand(options) => Some((option.name, options)),
        _ => None,
    })
}

pub fn string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn integer(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn user<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Option<(&'a User, Option<&'a PartialMember>)> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, member) if option.name == name => Some((user, member)),
        _ => None,
    })
}

pub fn channel<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a PartialChannel> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel),
        _ => None,
    })
}

pub fn role<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a Role> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Role(role) if option.name == name => Some(role),
        _ => None,
    })
}

/// Builds a moderation target from a resolved user option, preferring the guild nickname.
pub fn target(user: &User, member: Option<&PartialMember>) -> ModerationTarget {
    ModerationTarget {
        user_id: user.id.get(),
        display_name: member
            .and_then(|member| member.nick.clone())
            .unwrap_or_else(|| user.display_name().to_string()),
    }
}
