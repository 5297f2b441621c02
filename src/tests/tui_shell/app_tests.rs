use ratatui::backend::TestBackend;
use ratatui::style::Color;

use super::*;

fn theme() -> Theme {
    Theme {
        title: Color::Yellow,
        normal_text: Color::White,
        cursor: Color::Magenta,
        selected: Color::Green,
        border: Color::Gray,
        instruction: Color::DarkGray,
        active_column_bg: Color::Black,
    }
}

fn screen(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|f| render::draw(f, app))
        .expect("draw frame");
    terminal
        .backend()
        .buffer()
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn initial_frame_shows_boxes_and_details() {
    let app = App::new(Inventory::demo(), theme());
    let out = screen(&app, 160, 20);
    assert!(out.contains("ZBox alpha"));
    assert!(out.contains("ZBox beta"));
    assert!(out.contains("Details"));
    assert!(out.contains("Hostname: alpha.lan"));
    assert!(out.contains("Press 'q' to quit"));
}

#[test]
fn empty_levels_render_placeholder() {
    let mut app = App::new(Inventory::demo(), theme());
    app.handle(NavEvent::In);
    app.handle(NavEvent::Down);
    app.handle(NavEvent::In);
    let out = screen(&app, 160, 20);
    assert!(out.contains("Datasets"));
    assert!(out.contains("No items"));
}

#[test]
fn quit_event_sets_flag() {
    let mut app = App::new(Inventory::default(), theme());
    app.handle(NavEvent::Down);
    assert!(!app.quit);
    app.handle(NavEvent::Quit);
    assert!(app.quit);
}

#[test]
fn narrow_terminal_still_draws() {
    let app = App::new(Inventory::demo(), theme());
    let out = screen(&app, 30, 8);
    assert!(!out.trim().is_empty());
}

#[test]
fn column_width_keeps_minimum_when_room() {
    assert_eq!(render::column_width(240), 40);
    assert_eq!(render::column_width(100), 20);
    assert_eq!(render::column_width(50), 12);
}
