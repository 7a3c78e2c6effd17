//! Core library modules of campdesk.
//!
//! - **Domain model**: [`task`], [`group`], [`challenge`], [`camp`]
//! - **Rules**: [`ordering`], [`import`], [`flexible`]
//! - **Synchronization**: [`sync`] keeps local state in step with the camp API
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Output**: [`view`], [`export`]

pub mod camp;
pub mod challenge;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod flexible;
pub mod group;
pub mod import;
pub mod messages;
pub mod ordering;
pub mod sync;
pub mod task;
pub mod view;
