use crate::app::{
    error::Result,
    event_msg::{Cmd, CmdOrBatch, Key, Msg},
    tea_model::Model,
    tracing_macros::{debug_event, trace_event},
    ui_components::Component,
    views::ViewId,
};

/// Runs every component's `init` plus the initially active view's.
pub fn init(model: &mut Model) -> Result<CmdOrBatch<Cmd>> {
    let chrome = [
        model.header.init(),
        model.sidebar.init(),
        model.content.init(),
    ];
    let view = model.active_view_mut()?.init();

    Ok(CmdOrBatch::batch(chrome.into_iter().chain([view])))
}

pub fn update(model: &mut Model, msg: Msg) -> Result<CmdOrBatch<Cmd>> {
    if model.state.quitting {
        trace_event!("Ignoring {:?} while quitting", msg);
        return Ok(CmdOrBatch::none());
    }

    let mut cmds = Vec::new();

    match &msg {
        Msg::Resize(width, height) => {
            debug_event!("Terminal resized to {}x{}", width, height);
            // A missing active view fails before anything is resized
            model.active_view()?;
            model.state.terminal_width = *width;
            model.state.terminal_height = *height;

            cmds.push(model.header.update(&msg));
            cmds.push(model.sidebar.update(&msg));
            cmds.push(model.content.update(&msg));
        }

        Msg::KeyPressed(key) => match key.as_str() {
            "q" | "ctrl+c" => {
                tracing::info!("Quit requested with '{}'", key);
                model.state.quitting = true;
                return Ok(CmdOrBatch::Single(Cmd::Quit));
            }
            name => {
                if let Some(id) = ViewId::from_key(name) {
                    cmds = switch_view(model, id)?;
                } else {
                    trace_event!("Forwarding key '{}' to {}", key, model.state.active_view);
                }
            }
        },
    }

    cmds.push(model.active_view_mut()?.update(&msg));

    Ok(CmdOrBatch::batch(cmds))
}

/// Selects `id` and runs its `init`. Commands gathered before the switch
/// are discarded.
fn switch_view(model: &mut Model, id: ViewId) -> Result<Vec<CmdOrBatch<Cmd>>> {
    // Lookup first so a missing view leaves the selection unchanged
    let init = model.views.get_mut(id)?.init();

    if model.state.active_view != id {
        tracing::info!("Switching view {} -> {}", model.state.active_view, id);
    }
    model.state.active_view = id;

    Ok(vec![init])
}

/// Convenience for tests and callers that only have a key name.
pub fn press(model: &mut Model, name: &str) -> Result<CmdOrBatch<Cmd>> {
    update(model, Msg::KeyPressed(Key::from(name)))
}
