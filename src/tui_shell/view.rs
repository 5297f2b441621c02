use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::projector::{Column, Detail};

use super::Styles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ColumnRole {
    Parent,
    Current,
    Next,
}

fn chrome<'a>(title: &'a str, styles: &Styles) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border)
        .title(Span::styled(format!(" {} ", title), styles.title))
}

pub(super) fn render_column(
    frame: &mut ratatui::Frame,
    area: Rect,
    column: &Column,
    role: ColumnRole,
    styles: &Styles,
) {
    let title = column.level.map(|l| l.title()).unwrap_or("");
    let mut block = chrome(title, styles);
    if role == ColumnRole::Current {
        block = block.style(styles.active_column);
    }

    if column.is_empty() {
        let empty = Paragraph::new(Line::styled("No items", styles.normal)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mark_style = match role {
        ColumnRole::Parent => styles.selected,
        ColumnRole::Current => styles.cursor,
        ColumnRole::Next => styles.normal,
    };

    let rows: Vec<ListItem> = column
        .items
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if column.marked == Some(i) {
                ListItem::new(Line::from(vec![
                    Span::raw("➤ "),
                    Span::styled(name.as_str(), mark_style),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(name.as_str(), styles.normal),
                ]))
            }
        })
        .collect();

    frame.render_widget(List::new(rows).block(block), area);
}

pub(super) fn render_detail(
    frame: &mut ratatui::Frame,
    area: Rect,
    detail: &Detail,
    styles: &Styles,
) {
    let lines: Vec<Line> = detail
        .fields
        .iter()
        .map(|(label, value)| Line::styled(format!("{}: {}", label, value), styles.normal))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(chrome("Details", styles)),
        area,
    );
}
