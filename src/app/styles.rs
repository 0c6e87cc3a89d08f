//! Colour palette and composite style rules for every semantic role.
//!
//! The palette is built once at startup and shared read-only through an
//! `Rc`. Nothing mutates it after construction.

use crate::app::tea_model::LayoutConfig;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{BorderType, Padding},
};

// Base colours
pub const PRIMARY: Color = Color::from_u32(0x007ACC);
pub const SECONDARY: Color = Color::from_u32(0x6C757D);
pub const SUCCESS: Color = Color::from_u32(0x28A745);
pub const WARNING: Color = Color::from_u32(0xFFC107);
pub const ERROR: Color = Color::from_u32(0xDC3545);
pub const INFO: Color = Color::from_u32(0x17A2B8);

// Background colours
pub const BG_PRIMARY: Color = Color::from_u32(0xFFFFFF);
pub const BG_SECONDARY: Color = Color::from_u32(0xF8F9FA);
pub const BG_SUCCESS: Color = Color::from_u32(0xD4EDDA);
pub const BG_WARNING: Color = Color::from_u32(0xFFF3CD);
pub const BG_ERROR: Color = Color::from_u32(0xF8D7DA);

// Text colours
pub const TEXT_PRIMARY: Color = Color::from_u32(0x000000);
pub const TEXT_SECONDARY: Color = Color::from_u32(0x6C757D);
pub const TEXT_MUTED: Color = Color::from_u32(0xADB5BD);

/// A named bundle of attributes applied when rendering a whole region:
/// text style, optional border, padding and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub style: Style,
    pub border: Option<BorderType>,
    pub border_style: Style,
    pub padding: Padding,
    pub alignment: Alignment,
}

impl StyleRule {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            border: None,
            border_style: Style::new(),
            padding: Padding::ZERO,
            alignment: Alignment::Left,
        }
    }

    pub fn bordered(mut self, border: BorderType, color: Color) -> Self {
        self.border = Some(border);
        self.border_style = Style::new().fg(color);
        self
    }

    pub fn padded(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Colour roles, region rules and text styles. The input, border and
/// tinted-background roles are plain data for widgets built outside the
/// dashboard chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Colours
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_success: Color,
    pub bg_warning: Color,
    pub bg_error: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Region rules
    pub header: StyleRule,
    pub sidebar: StyleRule,
    pub content: StyleRule,
    pub status_bar: StyleRule,
    pub input: StyleRule,
    pub input_focus: StyleRule,
    pub border: StyleRule,
    pub border_focus: StyleRule,

    // Inline text styles
    pub button: Style,
    pub button_active: Style,
    pub quit_text: Style,
    pub title: Style,
    pub subtitle: Style,
    pub text: Style,
    pub muted_text: Style,
    pub error_text: Style,
    pub success_text: Style,
    pub warning_text: Style,
}

impl Palette {
    pub fn new(config: &LayoutConfig) -> Self {
        let border_type = if config.rounded_borders {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let boxed = |fg: Color, bg: Color, border: Color| {
            StyleRule::new(Style::new().fg(fg).bg(bg)).bordered(border_type, border)
        };

        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
            info: INFO,
            bg_primary: BG_PRIMARY,
            bg_secondary: BG_SECONDARY,
            bg_success: BG_SUCCESS,
            bg_warning: BG_WARNING,
            bg_error: BG_ERROR,
            text_primary: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
            text_muted: TEXT_MUTED,

            // Title sits on the middle row of the 3-row header
            header: StyleRule::new(
                Style::new()
                    .fg(TEXT_PRIMARY)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .padded(Padding::new(1, 1, 1, 0))
            .aligned(Alignment::Center),
            sidebar: boxed(TEXT_PRIMARY, BG_SECONDARY, SECONDARY).padded(Padding::horizontal(1)),
            content: boxed(TEXT_PRIMARY, BG_PRIMARY, SECONDARY).padded(Padding::new(2, 2, 1, 1)),
            status_bar: StyleRule::new(Style::new().fg(TEXT_SECONDARY).bg(BG_SECONDARY))
                .padded(Padding::horizontal(1))
                .aligned(Alignment::Center),
            input: boxed(TEXT_PRIMARY, BG_PRIMARY, SECONDARY).padded(Padding::horizontal(1)),
            input_focus: boxed(TEXT_PRIMARY, BG_PRIMARY, PRIMARY).padded(Padding::horizontal(1)),
            border: StyleRule::new(Style::new()).bordered(border_type, SECONDARY),
            border_focus: StyleRule::new(Style::new()).bordered(border_type, PRIMARY),

            button: Style::new().fg(TEXT_PRIMARY).bg(PRIMARY),
            button_active: Style::new()
                .fg(BG_PRIMARY)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
            quit_text: Style::new().fg(SUCCESS).add_modifier(Modifier::BOLD),
            title: Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD),
            subtitle: Style::new().fg(SECONDARY).add_modifier(Modifier::BOLD),
            text: Style::new().fg(TEXT_PRIMARY),
            muted_text: Style::new().fg(TEXT_MUTED),
            error_text: Style::new().fg(ERROR).add_modifier(Modifier::BOLD),
            success_text: Style::new().fg(SUCCESS).add_modifier(Modifier::BOLD),
            warning_text: Style::new().fg(WARNING).add_modifier(Modifier::BOLD),
        }
    }

    pub fn button_style(&self, active: bool) -> Style {
        if active {
            self.button_active
        } else {
            self.button
        }
    }

    pub fn input_style(&self, focused: bool) -> StyleRule {
        if focused {
            self.input_focus
        } else {
            self.input
        }
    }

    /// Plain text recoloured with one of the palette colours.
    pub fn text_with(&self, color: Color) -> Style {
        self.text.fg(color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}
