use crate::todo::models::Filter;
use crate::todo::storage::KeyValueStore;
use crate::todo::view::{EMPTY_STATE_TITLE, Projection};
use crate::tui::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let projection = app.projection();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Length(3), // New task input
            Constraint::Min(0),    // Tasks
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_filters(frame, chunks[0], &projection);
    draw_input(frame, chunks[1], app);
    draw_task_list(frame, chunks[2], app, &projection);
    draw_footer(frame, chunks[3], app, &projection);

    if app.mode == Mode::Help {
        draw_help_window(frame);
    }
}

fn draw_filters(frame: &mut Frame, area: Rect, projection: &Projection) {
    let titles: Vec<Line> = Filter::ALL
        .iter()
        .map(|filter| Line::from(projection.filter_label(*filter)))
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|filter| *filter == projection.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Todo App"))
        .select(selected)
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn draw_input<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let line = if app.mode == Mode::Adding {
        let (before_cursor, after_cursor) = app.input.split_at_cursor();
        Line::from(Span::styled(
            format!("{}█{}", before_cursor, after_cursor),
            Style::default().fg(Color::White),
        ))
    } else {
        Line::from(Span::styled(
            "What needs to be done?",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let border_style = if app.mode == Mode::Adding {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("New"),
    );
    frame.render_widget(input, area);
}

fn draw_task_list<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    projection: &Projection,
) {
    let block = Block::default().borders(Borders::ALL).title("Tasks");

    if let Some(message) = projection.empty_message() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                EMPTY_STATE_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = projection
        .visible
        .iter()
        .map(|task| {
            let checkbox = if task.completed { "☑" } else { "☐" };
            let is_editing = app.mode == Mode::Editing && app.store.is_editing(&task.id);

            if is_editing {
                let (before_cursor, after_cursor) = app.input.split_at_cursor();
                let content = format!("{} {}█{}", checkbox, before_cursor, after_cursor);
                let style = Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                return ListItem::new(Line::from(Span::styled(content, style)));
            }

            let style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", checkbox, task.text),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    if app.mode != Mode::Editing {
        list_state.select(Some(app.navigation.selected_index));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    projection: &Projection,
) {
    let hints = match app.mode {
        Mode::Adding => "Enter: add | Esc: close",
        Mode::Editing => "Enter: save | Esc: cancel | ←→: cursor | Ctrl+W: delete word",
        Mode::Normal | Mode::Help => {
            "a: add | e: edit | Enter: toggle | d: delete | Tab: filter | ?: help | q: quit"
        }
    };

    let footer_text = match projection.footer() {
        Some(items_left) => format!("{} | {}", items_left, hints),
        None => hints.to_string(),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Todo App - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move cursor",
        "  g/G               First/last task",
        "",
        "TASKS:",
        "  a                 Add tasks (Enter submits, Esc closes)",
        "  Enter / x         Toggle completion",
        "  e                 Edit task (Enter saves, Esc cancels)",
        "  d                 Delete task",
        "",
        "FILTERS:",
        "  1 / 2 / 3         All / Active / Completed",
        "  Tab / Shift+Tab   Next / previous filter",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
