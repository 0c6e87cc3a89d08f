//! Terminal dashboard shell: a header, a navigation sidebar, a content frame
//! showing one of four views, and a status bar.
//!
//! The application follows the Elm architecture. `tea_update::update` is the
//! only place state changes, `tea_view::view` draws a frame from the model,
//! and `app_program::Program` drives both from crossterm events.

pub mod app;
