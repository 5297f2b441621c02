use super::*;

const MIN_COLUMN_WIDTH: u16 = 20;
const INSTRUCTIONS: &str =
    "Navigate with h (left), j (down), k (up), l (right). Press 'q' to quit.";

/// Width of each of the three list columns for a terminal `total` cells wide.
/// Half the screen goes to the columns; the detail pane takes the rest.
pub(in crate::tui_shell) fn column_width(total: u16) -> u16 {
    let width = (total / 2 / 3).max(MIN_COLUMN_WIDTH);
    if width.saturating_mul(3) >= total {
        total / 4
    } else {
        width
    }
}

pub(in crate::tui_shell) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let col_w = column_width(rows[0].width);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(col_w),
            Constraint::Length(col_w),
            Constraint::Length(col_w),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let projection = project(&app.inventory, &app.nav);
    render_column(frame, cols[0], &projection.parent, ColumnRole::Parent, &app.styles);
    render_column(frame, cols[1], &projection.current, ColumnRole::Current, &app.styles);
    render_column(frame, cols[2], &projection.next, ColumnRole::Next, &app.styles);
    render_detail(frame, cols[3], &projection.detail, &app.styles);

    frame.render_widget(
        Paragraph::new(Line::styled(INSTRUCTIONS, app.styles.instruction)),
        instruction_area(rows[1]),
    );
}

fn instruction_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(1),
        ..area
    }
}
