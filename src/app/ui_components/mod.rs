pub mod block;
pub mod content_frame;
pub mod header;
pub mod inline_renderer;
pub mod sidebar;
pub mod status_bar;

pub use block::Block;
pub use content_frame::{ContentFrame, ContentSize};
pub use header::Header;
pub use inline_renderer::render_text_inline;
pub use sidebar::{Sidebar, SidebarItem, SIDEBAR_ITEMS};
pub use status_bar::StatusBar;

use crate::app::event_msg::{Cmd, CmdOrBatch, Msg};

/// Component trait for modular ELM architecture
///
/// Every piece of chrome and every view receives the same messages through
/// this trait, so the controller fans out without inspecting types.
pub trait Component {
    /// Called once at startup, and again for a view each time it is selected.
    fn init(&mut self) -> CmdOrBatch<Cmd> {
        CmdOrBatch::Single(Cmd::None)
    }

    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd>;
}

/// Last known size of a component, as cached from resize messages.
pub trait DynamicSize {
    fn get_height(&self) -> u16;
    fn get_width(&self) -> u16;
}
