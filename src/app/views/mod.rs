pub mod dashboard;
pub mod data;
pub mod help;
pub mod settings;

pub use dashboard::DashboardView;
pub use data::DataView;
pub use help::HelpView;
pub use settings::SettingsView;

use crate::app::{
    error::{context, Result},
    styles::Palette,
    tea_model::LayoutConfig,
    ui_components::{Component, DynamicSize},
};
use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};
use std::{collections::HashMap, fmt, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    Dashboard,
    Data,
    Settings,
    Help,
}

impl ViewId {
    /// Display order, matching the number keys.
    pub const ALL: [ViewId; 4] = [
        ViewId::Dashboard,
        ViewId::Data,
        ViewId::Settings,
        ViewId::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Data => "data",
            ViewId::Settings => "settings",
            ViewId::Help => "help",
        }
    }

    /// The id with its first letter capitalised, as shown in the status bar.
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Data => "Data",
            ViewId::Settings => "Settings",
            ViewId::Help => "Help",
        }
    }

    /// Name of the view as listed in navigation help.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Data => "Data Browser",
            ViewId::Settings => "Settings",
            ViewId::Help => "Help",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "1",
            ViewId::Data => "2",
            ViewId::Settings => "3",
            ViewId::Help => "4",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page of content shown inside the content frame.
///
/// Views only cache their size on resize. `render` depends on nothing but
/// static content and the palette.
pub trait View: Component + DynamicSize + fmt::Debug {
    fn id(&self) -> ViewId;

    fn title(&self) -> &'static str {
        self.id().title()
    }

    fn description(&self) -> &'static str;
    /// First line of the rendered text.
    fn heading(&self) -> &'static str;
    fn render(&self) -> Text<'static>;
}

/// The four views, built once at startup.
#[derive(Debug)]
pub struct ViewRegistry {
    views: HashMap<ViewId, Box<dyn View>>,
}

impl ViewRegistry {
    pub fn new(palette: &Rc<Palette>, config: &LayoutConfig) -> Self {
        let views: [Box<dyn View>; 4] = [
            Box::new(DashboardView::new(Rc::clone(palette), config)),
            Box::new(DataView::new(Rc::clone(palette), config)),
            Box::new(SettingsView::new(Rc::clone(palette), config)),
            Box::new(HelpView::new(Rc::clone(palette), config)),
        ];

        Self {
            views: views.into_iter().map(|view| (view.id(), view)).collect(),
        }
    }

    pub fn get(&self, id: ViewId) -> Result<&dyn View> {
        self.views
            .get(&id)
            .map(|view| view.as_ref())
            .ok_or_else(|| missing_view(id))
    }

    pub fn get_mut(&mut self, id: ViewId) -> Result<&mut dyn View> {
        match self.views.get_mut(&id) {
            Some(view) => {
                let view: &mut dyn View = view.as_mut();
                Ok(view)
            }
            None => Err(missing_view(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, id: ViewId) -> Option<Box<dyn View>> {
        self.views.remove(&id)
    }

    /// Registers `view` under its own id, returning the one it replaces.
    #[cfg(test)]
    pub(crate) fn insert(&mut self, view: Box<dyn View>) -> Option<Box<dyn View>> {
        self.views.insert(view.id(), view)
    }
}

fn missing_view(id: ViewId) -> eyre::Report {
    context::configuration(format!("view '{}' is not registered", id))
}

// Line builders shared by the views

pub(crate) fn heading_line(palette: &Palette, heading: &'static str) -> Line<'static> {
    Line::styled(heading, palette.title)
}

pub(crate) fn section_line(palette: &Palette, label: &'static str) -> Line<'static> {
    Line::styled(label, palette.subtitle)
}

/// "• ✓ label" with the mark in success colour, or "• ○ label" when unchecked.
pub(crate) fn check_line(palette: &Palette, checked: bool, label: &'static str) -> Line<'static> {
    let mark = if checked {
        Span::styled("✓", palette.success_text)
    } else {
        Span::styled("○", palette.text)
    };
    Line::from(vec![Span::raw("• "), mark, Span::raw(format!(" {}", label))])
}

/// "• key - action" with the key muted.
pub(crate) fn key_line(palette: &Palette, key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("• "),
        Span::styled(key, palette.muted_text),
        Span::raw(format!(" - {}", action)),
    ])
}

/// "• label: value" with the value styled.
pub(crate) fn value_line(label: &'static str, value: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("• {}: ", label)),
        Span::styled(value.into(), style),
    ])
}
