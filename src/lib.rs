//! # Campdesk - camp day planning client
//!
//! A command-line client for the camp management REST API. It keeps a camp's
//! daily tasks, task groups and day challenges in sync with the server and
//! enforces the client-side rules around them.
//!
//! ## Features
//!
//! - **Task Model**: Typed daily tasks with tolerant decoding of flexible link and attachment fields
//! - **Ordering**: Dense per-day ordering with drag-style move semantics
//! - **Import**: Preview validation of JSON task batches, opaque CSV/XLSX upload
//! - **Sync**: Mutate-then-refresh orchestration with concurrent fan-out for bulk operations
//! - **Export**: Server-side JSON/CSV export and local Excel rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
