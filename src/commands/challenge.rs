use super::CampArgs;
use crate::{
    libs::{
        challenge::{challenge_for_day, DayChallenge},
        messages::Message,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ChallengeArgs {
    #[command(flatten)]
    camp: CampArgs,

    #[command(subcommand)]
    command: Option<ChallengeCommand>,
}

#[derive(Debug, Subcommand)]
enum ChallengeCommand {
    /// Show day challenges
    Show {
        /// Only this day
        #[arg(short, long)]
        day: Option<u32>,
    },
    /// Create or replace the challenge of a day
    Set {
        /// Day number
        day: u32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove the challenge of a day
    Delete {
        /// Day number
        day: u32,
    },
}

pub async fn cmd(args: ChallengeArgs) -> Result<()> {
    let mut sync = args.camp.connect().await?;

    match args.command.unwrap_or(ChallengeCommand::Show { day: None }) {
        ChallengeCommand::Show { day: Some(day) } => {
            match challenge_for_day(sync.challenges(), day) {
                Some(challenge) => View::challenges(std::slice::from_ref(challenge))?,
                None => msg_info!(Message::NoChallengeForDay(day)),
            }
            Ok(())
        }
        ChallengeCommand::Show { day: None } => {
            if sync.challenges().is_empty() {
                msg_info!(Message::NoChallengesFound);
                return Ok(());
            }
            msg_print!(Message::ChallengesHeader, true);
            View::challenges(sync.challenges())?;
            Ok(())
        }
        ChallengeCommand::Set { day, title, description } => {
            let current = challenge_for_day(sync.challenges(), day).cloned();
            sync.open_challenge(day);

            let title = match title {
                Some(title) => title,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptChallengeTitle.to_string())
                    .default(current.as_ref().map(|c| c.title.clone()).unwrap_or_default())
                    .allow_empty(true)
                    .interact_text()?,
            };
            let description = match description {
                Some(description) => description,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptChallengeDescription.to_string())
                    .default(current.as_ref().map(|c| c.description.clone()).unwrap_or_default())
                    .allow_empty(true)
                    .interact_text()?,
            };

            sync.save_challenge(DayChallenge::new(day, &title, &description)).await?;
            msg_success!(Message::ChallengeSaved(day));
            Ok(())
        }
        ChallengeCommand::Delete { day } => {
            sync.delete_challenge(day).await?;
            msg_success!(Message::ChallengeDeleted(day));
            Ok(())
        }
    }
}
