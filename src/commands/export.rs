use super::CampArgs;
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    camp: CampArgs,

    /// Output format; json and csv are produced by the server, excel locally
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Output file; defaults to campdesk_export_<camp>_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let mut sync = args.camp.connect().await?;
    if args.format == ExportFormat::Excel && sync.tasks().is_empty() {
        msg_warning!(Message::ExportEmpty);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, sync.camp_id(), args.output);
    let path = exporter.export(&mut sync).await?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
