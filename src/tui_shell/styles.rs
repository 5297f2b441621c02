use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub(super) struct Styles {
    pub(super) title: Style,
    pub(super) normal: Style,
    pub(super) cursor: Style,
    pub(super) selected: Style,
    pub(super) border: Style,
    pub(super) instruction: Style,
    pub(super) active_column: Style,
}

impl Styles {
    pub(super) fn new(theme: &Theme) -> Self {
        Styles {
            title: Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
            normal: Style::default().fg(theme.normal_text),
            // Highlighted rows use the active background as their foreground.
            cursor: Style::default()
                .fg(theme.active_column_bg)
                .bg(theme.cursor)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(theme.active_column_bg)
                .bg(theme.selected)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(theme.border),
            instruction: Style::default().fg(theme.instruction),
            active_column: Style::default().bg(theme.active_column_bg),
        }
    }
}
