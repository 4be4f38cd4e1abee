use ratatui::{
    layout::{Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::state::Status;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Top bar
    let top = match app.focus {
        Focus::Editing => "newsdesk — Enter:search  Esc:results  Ctrl+U:clear  Ctrl+C:quit",
        Focus::Browsing => "newsdesk — j/k:move  o:open  s:search again  /:edit query  q:quit",
    };
    f.render_widget(Paragraph::new(top), chunks[0]);

    // Query box
    let border = match app.focus {
        Focus::Editing => Style::default().fg(Color::Magenta),
        Focus::Browsing => Style::default(),
    };
    let query = if app.search.query.is_empty() && app.focus == Focus::Browsing {
        Line::from("Enter your query...").style(Style::default().add_modifier(Modifier::DIM))
    } else {
        Line::from(app.search.query.as_str())
    };
    // Keep the end of the query and one free cell for the cursor in view.
    let inner_width = chunks[1].width.saturating_sub(2);
    let typed = u16::try_from(query.width()).unwrap_or(u16::MAX);
    let offset = typed.saturating_sub(inner_width.saturating_sub(1));
    f.render_widget(
        Paragraph::new(query)
            .scroll((0, offset))
            .block(Block::default().borders(Borders::ALL).border_style(border).title("Search")),
        chunks[1],
    );
    if app.focus == Focus::Editing {
        let x = (chunks[1].x + 1).saturating_add(typed - offset);
        f.set_cursor_position(Position::new(x, chunks[1].y + 1));
    }

    // Results
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let items: Vec<ListItem> = app.articles().iter().map(|a| {
        let line = format!("{:<10} {}", a.date_line().unwrap_or(""), a.title);
        ListItem::new(Line::from(line))
    }).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!("Results ({})", app.articles().len())))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    // Built per frame; ratatui scrolls the window so the selection stays visible.
    let mut list_state = ListState::default()
        .with_selected((!app.articles().is_empty()).then_some(app.selected));
    f.render_stateful_widget(list, panes[0], &mut list_state);

    let body = if let Some(a) = app.selected_article() {
        let mut text = Text::default();
        text.lines.push(Line::from(a.title.clone()).style(Style::default().add_modifier(Modifier::BOLD)));
        if let Some(date) = a.date_line() {
            text.lines.push(Line::from(format!("Date: {}", date)));
        }
        if let Some(image) = &a.image {
            text.lines.push(Line::from(format!("Image: {}", image)));
        }
        text.lines.push(Line::from(""));
        text.lines.extend(Text::from(a.body.clone()).lines);
        text.lines.push(Line::from(""));
        text.lines.push(Line::from(format!("Link: {}", a.url)));
        text.lines.push(Line::from("o: Read full article").style(Style::default().fg(Color::Magenta)));
        text
    } else {
        Text::from("No articles yet. Type a query and press Enter.")
    };

    let preview = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[1]);

    // Bottom status
    let status_style = match app.search.status {
        Status::Error(_) => Style::default().fg(Color::Red),
        _ => Style::default(),
    };
    f.render_widget(Paragraph::new(app.status_line()).style(status_style), chunks[3]);
}
