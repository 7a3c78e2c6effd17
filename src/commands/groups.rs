use super::CampArgs;
use crate::{
    libs::{
        group::{parent_candidates, GroupForm},
        messages::Message,
        sync::Outcome,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(flatten)]
    camp: CampArgs,

    #[command(subcommand)]
    command: Option<GroupsCommand>,
}

#[derive(Debug, Subcommand)]
enum GroupsCommand {
    /// List task groups
    List,
    /// Create a group
    Add {
        /// Group title; prompted for when omitted
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Parent group ID
        #[arg(long)]
        parent: Option<i64>,
        /// Position among the camp's groups
        #[arg(long)]
        order: Option<i32>,
    },
    /// Edit a group
    Edit {
        /// Group ID
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New parent group ID
        #[arg(long, conflicts_with = "no_parent")]
        parent: Option<i64>,
        /// Leave the current parent unchanged on the server
        #[arg(long)]
        no_parent: bool,
        #[arg(long)]
        order: Option<i32>,
    },
    /// Delete a group; its tasks are kept without a group
    Delete {
        /// Group ID
        id: i64,
    },
}

pub async fn cmd(args: GroupsArgs) -> Result<()> {
    let mut sync = args.camp.connect().await?;

    match args.command.unwrap_or(GroupsCommand::List) {
        GroupsCommand::List => {
            if sync.groups().is_empty() {
                msg_info!(Message::NoGroupsFound);
                return Ok(());
            }
            msg_print!(Message::GroupsHeader, true);
            View::groups(sync.groups())?;
            Ok(())
        }
        GroupsCommand::Add {
            title,
            description,
            parent,
            order,
        } => {
            let title = match title {
                Some(title) => title,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptGroupTitle.to_string())
                    .interact_text()?,
            };
            if let Some(parent_id) = parent {
                if !parent_candidates(sync.groups(), None).iter().any(|g| g.id == parent_id) {
                    return Err(msg_error_anyhow!(Message::ValidationFailed(format!("group {} does not exist", parent_id))));
                }
            }

            let form = GroupForm {
                title: title.clone(),
                description,
                parent_group_id: parent,
                order_in_camp: order,
            };
            sync.add_group(form).await?;
            msg_success!(Message::GroupCreated(title));
            Ok(())
        }
        GroupsCommand::Edit {
            id,
            title,
            description,
            parent,
            no_parent,
            order,
        } => {
            let Some(group) = sync.group(id) else {
                return Err(msg_error_anyhow!(Message::ValidationFailed(format!("group {} not found", id))));
            };

            let mut form = GroupForm::from(group);
            if let Some(title) = title {
                form.title = title;
            }
            if description.is_some() {
                form.description = description;
            }
            if parent.is_some() {
                form.parent_group_id = parent;
            }
            if no_parent {
                form.parent_group_id = None;
            }
            if order.is_some() {
                form.order_in_camp = order;
            }

            let title = form.title.clone();
            sync.update_group(id, form).await?;
            msg_success!(Message::GroupUpdated(title));
            Ok(())
        }
        GroupsCommand::Delete { id } => {
            let title = sync.group(id).map(|g| g.title.clone()).unwrap_or_default();
            match sync.delete_group(id, &args.camp.prompt()).await? {
                Outcome::Done => msg_success!(Message::GroupDeleted(title)),
                Outcome::Declined => msg_info!(Message::OperationCancelled),
            }
            Ok(())
        }
    }
}
