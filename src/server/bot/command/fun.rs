//! `/8ball`, `/coinflip`, `/rps`, `/rate` and `/ship`.
//!
//! Every draw happens before the reply is sent, so no generator is held across an
//! await point.

use rand::{seq::IndexedRandom, Rng};
use serde_json::Value;
use serenity::all::{
    CommandOptionType, CreateCommand, CreateEmbed, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::{
        localizations, localized_command, localized_option, options, CommandContext,
        REGISTRATION_LANGUAGE,
    },
    error::AppError,
    i18n::Catalog,
};

const EIGHT_BALL_COLOUR: u32 = 0x3498db;
const COINFLIP_COLOUR: u32 = 0xf1c40f;
const RPS_COLOUR: u32 = 0x5865f2;
const RATE_COLOUR: u32 = 0x9b59b6;
const SHIP_COLOUR: u32 = 0xe74c3c;

/// Names of the commands this module answers.
pub const COMMANDS: [&str; 5] = ["8ball", "coinflip", "rps", "rate", "ship"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsMove {
    Rock,
    Paper,
    Scissors,
}

impl RpsMove {
    pub const ALL: [RpsMove; 3] = [RpsMove::Rock, RpsMove::Paper, RpsMove::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mv| mv.name() == name)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Rock => "rps_rock",
            Self::Paper => "rps_paper",
            Self::Scissors => "rps_scissors",
        }
    }

    fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }
}

/// Translation key of a round's result, seen from the player.
pub fn rps_result_key(player: RpsMove, bot: RpsMove) -> &'static str {
    if player == bot {
        "rps_tie"
    } else if player.beats(bot) {
        "rps_win"
    } else {
        "rps_lose"
    }
}

/// Translation key of the comment on a compatibility percentage.
pub fn ship_comment_key(percentage: u32) -> &'static str {
    match percentage {
        91.. => "ship_perfect",
        71..=90 => "ship_good",
        41..=70 => "ship_medium",
        _ => "ship_bad",
    }
}

/// Picks one of the language's 8-ball answers.
pub fn eight_ball_answer<R: Rng + ?Sized>(catalog: &Catalog, language: &str, rng: &mut R) -> String {
    catalog
        .value(language, "8ball_answers")
        .and_then(Value::as_array)
        .and_then(|answers| answers.choose(rng))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "8ball_answers".to_string())
}

pub fn register(catalog: &Catalog) -> Vec<CreateCommand> {
    let required = |kind, name: &str, key: &str| {
        localized_option(catalog, kind, name, key).required(true)
    };
    let choice = RpsMove::ALL.iter().fold(
        required(CommandOptionType::String, "choice", "opt_rps_choice"),
        |option, mv| {
            option.add_string_choice_localized(
                catalog.text(REGISTRATION_LANGUAGE, mv.label_key(), &[]),
                mv.name(),
                localizations(catalog, mv.label_key()),
            )
        },
    );

    vec![
        localized_command(catalog, "8ball", "cmd_8ball")
            .add_option(required(CommandOptionType::String, "question", "opt_question")),
        localized_command(catalog, "coinflip", "cmd_coinflip"),
        localized_command(catalog, "rps", "cmd_rps").add_option(choice),
        localized_command(catalog, "rate", "cmd_rate")
            .add_option(required(CommandOptionType::String, "thing", "opt_thing")),
        localized_command(catalog, "ship", "cmd_ship")
            .add_option(required(CommandOptionType::User, "user1", "opt_user1"))
            .add_option(required(CommandOptionType::User, "user2", "opt_user2")),
    ]
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let options = cx.command.data.options();
    let text = |key: &str, params: &[(&str, &str)]| cx.text(key, params);

    let embed = {
        let mut rng = rand::rng();

        match cx.command.data.name.as_str() {
            "8ball" => {
                let question = options::string(&options, "question").unwrap_or_default();
                let answer = eight_ball_answer(cx.catalog, &cx.language, &mut rng);
                CreateEmbed::new()
                    .title(text("8ball_title", &[]))
                    .colour(EIGHT_BALL_COLOUR)
                    .field(
                        text("8ball_question", &[("question", question)]),
                        text("8ball_answer", &[("answer", answer.as_str())]),
                        false,
                    )
            }
            "coinflip" => {
                let side = text(if rng.random_bool(0.5) { "heads" } else { "tails" }, &[]);
                CreateEmbed::new()
                    .title(text("coinflip_title", &[]))
                    .description(text("coinflip_result", &[("result", side.as_str())]))
                    .colour(COINFLIP_COLOUR)
            }
            "rps" => {
                let Some(player) = options::string(&options, "choice").and_then(RpsMove::from_name)
                else {
                    return Ok(());
                };
                let bot = RpsMove::ALL.choose(&mut rng).copied().unwrap_or(RpsMove::Rock);
                CreateEmbed::new()
                    .title(text("rps_title", &[]))
                    .description(text(rps_result_key(player, bot), &[]))
                    .colour(RPS_COLOUR)
                    .field(text("rps_user_choice", &[]), text(player.label_key(), &[]), true)
                    .field(text("rps_bot_choice", &[]), text(bot.label_key(), &[]), true)
            }
            "rate" => {
                let thing = options::string(&options, "thing").unwrap_or_default();
                let rating = rng.random_range(1..=10u32).to_string();
                CreateEmbed::new()
                    .title(text("rate_title", &[]))
                    .description(text(
                        "rate_result",
                        &[("thing", thing), ("rating", rating.as_str())],
                    ))
                    .colour(RATE_COLOUR)
            }
            "ship" => {
                let mention = |name: &str| {
                    options::user(&options, name)
                        .map(|(user, _)| format!("<@{}>", user.id))
                        .unwrap_or_default()
                };
                let (user1, user2) = (mention("user1"), mention("user2"));
                let percentage = rng.random_range(0..=100u32);
                let result = text(
                    "ship_result",
                    &[
                        ("user1", user1.as_str()),
                        ("user2", user2.as_str()),
                        ("percentage", percentage.to_string().as_str()),
                    ],
                );
                CreateEmbed::new()
                    .title(text("ship_title", &[]))
                    .description(format!(
                        "{}\n\n{}",
                        result,
                        text(ship_comment_key(percentage), &[])
                    ))
                    .colour(SHIP_COLOUR)
            }
            other => {
                tracing::warn!("Received unknown fun command /{}", other);
                return Ok(());
            }
        }
    };

    cx.reply(CreateInteractionResponseMessage::new().embed(embed))
        .await
}
