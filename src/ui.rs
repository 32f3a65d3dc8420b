use crate::{
    app::App,
    colors::*,
    file_node::Node,
    utils::{format_size, format_time},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(1), // Root info
            Constraint::Min(0),    // Tree and details
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let [title_area, root_info_area, body_area, footer_area] = *chunks else {
        return;
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body_area);

    let [tree_area, details_area] = *body else {
        return;
    };

    render_title_bar(f, title_area);
    render_root_info(f, app, root_info_area);
    render_tree(f, app, tree_area);
    render_details(f, app, details_area);
    render_footer(f, app, footer_area);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_title_bar(f: &mut Frame, area: ratatui::layout::Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let terminal_width = f.area().width as usize;

    // " treenav vX.X.X    (press ? for help)"
    let title_len = 1 + 7 + 2 + version.len() + 11 + 1 + 10;
    let padding = terminal_width.saturating_sub(title_len);

    let title_bar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("treenav", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" v{}    (press ", version)),
        Span::styled("?", Style::default().fg(COLOR_HEADER_FG).add_modifier(Modifier::BOLD)),
        Span::raw(" for help)"),
        Span::raw(" ".repeat(padding)),
    ]))
    .style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(title_bar, area);
}

fn render_root_info(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut info = format!(" {} ({} visible)", app.root_path.display(), app.rows().len());
    if app.error_count > 0 {
        info.push_str(&format!(", {} unreadable", app.error_count));
    }
    let line = Paragraph::new(Line::from(vec![Span::styled(info, Style::default().fg(COLOR_DIR_INFO))]))
        .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(line, area);
}

fn render_tree(f: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let active = app.explorer.active().map(|file| file.path.clone());

    let items: Vec<ListItem> = app
        .rows()
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            match &row.node {
                Node::Folder(folder) => {
                    let marker = if app.explorer.is_expanded(&folder.path) { "▾ " } else { "▸ " };
                    ListItem::new(Line::from(vec![
                        Span::raw(indent),
                        Span::styled(format!("{}{}/", marker, folder.name), Style::default().fg(COLOR_DIRECTORY)),
                    ]))
                }
                Node::File(file) => {
                    let is_active = active.as_ref() == Some(&file.path);
                    let style = if is_active {
                        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(COLOR_FILE)
                    };
                    let marker = if is_active { "● " } else { "  " };
                    ListItem::new(Line::from(vec![
                        Span::raw(indent),
                        Span::styled(format!("{}{}", marker, file.name), style),
                    ]))
                }
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(Style::default().bg(COLOR_HIGHLIGHT_BG).fg(COLOR_HIGHLIGHT_FG));

    f.render_stateful_widget(list, area, &mut app.explorer.state);
}

fn render_details(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(COLOR_LABEL));

    let lines = match app.explorer.active() {
        Some(file) => vec![
            Line::from(Span::styled(file.name.clone(), Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(vec![label("Path      "), Span::raw(file.path.display().to_string())]),
            Line::from(vec![label("Size      "), Span::styled(format_size(file.size), Style::default().fg(COLOR_SIZE))]),
            Line::from(vec![label("Modified  "), Span::raw(format_time(file.modified_time))]),
            Line::from(vec![label("Created   "), Span::raw(format_time(file.created_time))]),
        ],
        None => vec![Line::from(Span::styled(
            "No file open. Press n or p to open the first or last file.",
            Style::default().fg(COLOR_HELP_HINT),
        ))],
    };

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::RIGHT | Borders::BOTTOM).title(" Open file "));
    f.render_widget(details, area);
}

fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let terminal_width = f.area().width as usize;
    let status_msg = app.status_message.as_deref().unwrap_or("");
    let sort_name = match app.explorer.sort_mode() {
        Some(mode) => mode.name().to_string(),
        None => format!("{} (unsupported)", app.settings.sort_order),
    };
    let footer_left = format!(" Sort: {}", sort_name);
    let footer_right = if !status_msg.is_empty() {
        format!("  {} ", status_msg)
    } else {
        String::new()
    };
    let footer_padding = terminal_width.saturating_sub(footer_left.len() + footer_right.len());
    let footer_text = format!("{}{:padding$}{}", footer_left, "", footer_right, padding = footer_padding);

    let footer = Paragraph::new(footer_text).style(Style::default().fg(COLOR_HEADER_FG).bg(COLOR_HEADER_BG));
    f.render_widget(footer, area);
}

fn render_help_overlay(f: &mut Frame) {
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  treenav - Explorer Keyboard Navigation", Style::default().fg(COLOR_HELP_TITLE).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("  Commands:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    n               Go to next file"),
        Line::from("    p               Go to previous file"),
        Line::from("    N               Go to next folder"),
        Line::from("    P               Go to previous folder"),
        Line::from(""),
        Line::from(Span::styled("  Cursor:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    j / ↓           Move down 1 row"),
        Line::from("    k / ↑           Move up 1 row"),
        Line::from("    Ctrl+d / PgDn   Move down 10 rows"),
        Line::from("    Ctrl+u / PgUp   Move up 10 rows"),
        Line::from("    H / Home        Go to first row"),
        Line::from("    G / End         Go to last row"),
        Line::from("    l / Enter       Open file / toggle folder"),
        Line::from("    h / ←           Collapse / go to folder"),
        Line::from("    r               Rescan tree"),
        Line::from(""),
        Line::from(Span::styled("  Sort order:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    a               Toggle sort by name"),
        Line::from("    m               Toggle sort by mtime"),
        Line::from("    c               Toggle sort by ctime"),
        Line::from(""),
        Line::from(Span::styled("  Other:", Style::default().fg(COLOR_HELP_HEADER).add_modifier(Modifier::BOLD))),
        Line::from("    ?               Toggle this help"),
        Line::from("    q / Esc         Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", Style::default().fg(COLOR_HELP_HINT))),
        Line::from(""),
    ];

    let help_height = help_text.len() as u16 + 2;
    let help_width = 46;
    let area = f.area();
    let help_area = ratatui::layout::Rect {
        x: area.width.saturating_sub(help_width) / 2,
        y: area.height.saturating_sub(help_height) / 2,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);
    let help_block = Paragraph::new(help_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(Color::Black)))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(help_block, help_area);
}
