use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::Inventory;
use crate::nav::{Flow, NavEvent, NavState};
use crate::projector::project;
use crate::theme::Theme;

use super::input::nav_event;
use super::{ColumnRole, Styles, render_column, render_detail};

mod event_loop;
mod render;

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(opts.inventory, opts.theme);
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    inventory: Inventory,
    nav: NavState,
    styles: Styles,
    quit: bool,
}

impl App {
    pub(super) fn new(inventory: Inventory, theme: Theme) -> Self {
        App {
            inventory,
            nav: NavState::new(),
            styles: Styles::new(&theme),
            quit: false,
        }
    }

    pub(super) fn handle(&mut self, ev: NavEvent) {
        if self.nav.apply(ev, &self.inventory) == Flow::Quit {
            self.quit = true;
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
