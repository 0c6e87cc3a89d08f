pub mod app_program;
pub mod error;
pub mod event_msg;
pub mod event_sync_subscriptions;
pub mod logger;
pub mod styles;
pub mod tea_model;
pub mod tea_update;
pub mod tea_view;
pub mod terminal;
mod tracing_macros;
pub mod ui_components;
pub mod views;
