use crate::todo::models::FilterBy;
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    if app.user_warning {
        draw_user_warning(frame);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Todo list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);

    // List and footer stay hidden until something has been loaded.
    if !app.todos.is_empty() {
        draw_todo_list(frame, chunks[1], app);
        draw_footer(frame, chunks[2], app);
    } else if app.loading {
        let loading = Paragraph::new("Loading todos...")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, chunks[1]);
    }

    if !app.error_message.is_empty() {
        draw_error_banner(frame, app);
    }

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let toggle_indicator = if app.toggle_all { "☑" } else { "☐" };
    let header_text = format!("todos  {} toggle all (t)", toggle_indicator);
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Todo"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .filtered_todos()
        .iter()
        .map(|todo| {
            let checkbox = if todo.completed { "☑" } else { "☐" };
            let display_content = format!("{} {}", checkbox, todo.title);

            let style = if todo.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(Span::styled(display_content, style));
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let filters = [FilterBy::All, FilterBy::Active, FilterBy::Completed]
        .iter()
        .enumerate()
        .map(|(i, filter)| {
            if *filter == app.filtered_by {
                format!("[{}:{}]", i + 1, filter.label())
            } else {
                format!(" {}:{} ", i + 1, filter.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let footer_text = format!(
        "{} items left | {} | c: clear completed | ?: help | q: quit",
        app.number_of_not_completed(),
        filters
    );

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_error_banner(frame: &mut Frame, app: &App) {
    let area = frame.size();
    if area.height < 2 {
        return;
    }
    let banner_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let banner = Paragraph::new(format!(" {} (x to dismiss)", app.error_message))
        .style(Style::default().bg(Color::Red).fg(Color::White));

    frame.render_widget(Clear, banner_area);
    frame.render_widget(banner, banner_area);
}

fn draw_user_warning(frame: &mut Frame) {
    let warning_text = vec![
        "No user id configured",
        "",
        "This app needs a user id before it can fetch any todos.",
        "Run 'todoapp config set user_id <id>' and start again.",
        "",
        "Press q or Esc to quit",
    ];

    let warning = Paragraph::new(warning_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Warning ")
                .style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(60, 40, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(warning, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Todo Client - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move cursor up/down",
        "",
        "TODOS:",
        "  Enter             Toggle completion of the selected todo",
        "  t                 Toggle all todos complete/incomplete",
        "  c                 Clear (remove) all completed todos",
        "",
        "FILTERS:",
        "  1 / 2 / 3         Show all / active / completed",
        "  Tab               Cycle through the filters",
        "",
        "OTHER:",
        "  x / Esc           Dismiss the error notification",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(70, 70, frame.size());

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
