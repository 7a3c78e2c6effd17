pub mod challenge;
pub mod export;
pub mod groups;
pub mod import;
pub mod init;
pub mod tasks;

use crate::api::rest::RestClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::sync::{CampSync, Confirm};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the camp API connection and default camp")]
    Init(init::InitArgs),
    #[command(about = "Manage daily tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Manage task groups")]
    Groups(groups::GroupsArgs),
    #[command(about = "Manage day challenges")]
    Challenge(challenge::ChallengeArgs),
    #[command(about = "Import tasks from a JSON, CSV or Excel file")]
    Import(import::ImportArgs),
    #[command(about = "Export camp tasks")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Groups(args) => groups::cmd(args).await,
            Commands::Challenge(args) => challenge::cmd(args).await,
            Commands::Import(args) => import::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Camp selection shared by every command that talks to the API.
#[derive(Debug, Args)]
pub struct CampArgs {
    /// Camp to work on instead of the configured one
    #[arg(long, global = true)]
    camp: Option<i64>,

    /// Cohort to filter tasks by
    #[arg(long, global = true)]
    cohort: Option<u32>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,
}

impl CampArgs {
    /// Builds a controller from the configuration and loads the camp.
    pub async fn connect(&self) -> Result<CampSync<RestClient>> {
        let config = Config::read()?.with_env_overrides();
        let Some(server) = config.server else {
            msg_bail_anyhow!(Message::ServerNotConfigured);
        };
        let Some(camp_id) = self.camp.or(config.camp.as_ref().map(|c| c.camp_id)) else {
            msg_bail_anyhow!(Message::CampNotConfigured);
        };
        let cohort = self.cohort.or(config.camp.and_then(|c| c.cohort_number));

        let client = RestClient::new(&server)?;
        let mut sync = CampSync::new(client, camp_id).with_cohort(cohort);
        sync.load().await?;

        if let Some(camp) = sync.camp() {
            msg_print!(Message::CampHeader(camp.name.clone(), camp.id));
            if let Some(days) = camp.duration_days {
                msg_print!(Message::CampDuration(days));
            }
        }
        if let Some(cohort) = sync.cohort_number() {
            msg_print!(Message::CohortFilter(cohort));
        }
        Ok(sync)
    }

    pub fn prompt(&self) -> Prompt {
        Prompt { assume_yes: self.yes }
    }
}

/// Terminal confirmation backed by dialoguer.
pub struct Prompt {
    assume_yes: bool,
}

impl Confirm for Prompt {
    fn confirm(&self, prompt: &Message) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
