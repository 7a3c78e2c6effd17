//! Task import from JSON, CSV and Excel files.
//!
//! JSON files are validated locally first and a preview is printed; only the
//! valid records are submitted. CSV and Excel files are uploaded unchanged
//! and validated by the server. Errors reported by the server replace the
//! local preview.

use super::CampArgs;
use crate::{
    libs::{
        import::ImportFile,
        messages::Message,
        sync::{Confirm, SyncError},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    camp: CampArgs,

    /// File to import (.json, .csv, .xlsx or .xls)
    file: PathBuf,

    /// Delete all existing camp tasks before importing
    #[arg(long)]
    replace: bool,

    /// Validate and preview a JSON file without sending it
    #[arg(long)]
    dry_run: bool,
}

pub async fn cmd(args: ImportArgs) -> Result<()> {
    let file = ImportFile::read(&args.file)?;
    let mut sync = args.camp.connect().await?;
    let prompt = args.camp.prompt();

    if file.kind.is_validated_locally() {
        let report = sync.preview_import(&file.text()).clone();
        msg_print!(Message::ImportPreviewHeader(report.valid_tasks.len(), report.errors.len()), true);
        if !report.valid_tasks.is_empty() {
            View::import_preview(&report)?;
        }
        if !report.errors.is_empty() {
            msg_print!(Message::ImportErrorsHeader);
            View::import_errors(&report.errors)?;
        }
        if args.dry_run {
            msg_info!(Message::ImportDryRun);
            return Ok(());
        }
    } else {
        msg_info!(Message::ImportUploading(file.file_name.clone()));
    }

    if args.replace && !prompt.confirm(&Message::ConfirmReplaceTasks) {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let result = if file.kind.is_validated_locally() {
        sync.submit_import(args.replace).await
    } else {
        sync.import_file(&file, args.replace).await
    };

    match result {
        Ok(response) => {
            msg_success!(Message::ImportCompleted(response.imported));
            Ok(())
        }
        Err(SyncError::ImportRejected(count)) => {
            if let Some(preview) = sync.import_preview() {
                msg_print!(Message::ImportErrorsHeader);
                View::import_errors(&preview.errors)?;
            }
            Err(SyncError::ImportRejected(count).into())
        }
        Err(e) => Err(e.into()),
    }
}
