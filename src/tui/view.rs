// File: src/tui/view.rs
use crate::model::display::{SchoolDisplay, format_date};
use crate::model::{RegistrationState, School};
use crate::store::StatusFilter;
use crate::tui::state::{AppState, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down  PgUp/PgDn:Jump  g/G:First/Last  Enter:Expand Description"),
        ]),
        Line::from(vec![
            Span::styled(
                " FILTERS ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" /:Name  s:Status (All/Open/Closed)  o:Sort Order  c:Clear All"),
        ]),
        Line::from(vec![
            Span::styled(
                " DATE BOUNDS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" f:Start From  t:Start To  b:Deadline Before  (YYYY-MM-DD)"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), footer_height])
        .split(f.area());

    draw_filter_bar(f, state, v_chunks[0]);

    // --- Terminal-state screens take over the main area ---
    if let Some(err) = &state.error {
        let p = Paragraph::new(format!("Error: {}", err))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Schools "));
        f.render_widget(p, v_chunks[1]);
        draw_footer(f, state, v_chunks[2], &full_help_text);
        return;
    }
    if state.loading {
        let p = Paragraph::new("Loading schools data...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Schools "));
        f.render_widget(p, v_chunks[1]);
        draw_footer(f, state, v_chunks[2], &full_help_text);
        return;
    }
    if state.store.is_empty() {
        let p = Paragraph::new("No schools data available.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Schools "));
        f.render_widget(p, v_chunks[1]);
        draw_footer(f, state, v_chunks[2], &full_help_text);
        return;
    }

    // --- 1. Prepare Details Text ---
    let mut full_details = String::new();
    if let Some(school) = state.get_selected_school() {
        full_details.push_str(&format!("Link: {}\n", school.link));
        full_details.push_str(&format!("Venue: {}\n", school.venue_label()));
        full_details.push_str(&format!("Dates: {}\n", school.format_date_range()));
        full_details.push_str(&format!(
            "Deadline: {}\n",
            format_date(school.application_deadline.as_deref())
        ));
        if let Some(desc) = &school.description {
            full_details.push('\n');
            full_details.push_str(desc);
        }
    }
    if full_details.is_empty() {
        full_details = "No details.".to_string();
    }

    // --- 2. Calculate Dynamic Height ---
    let details_width = v_chunks[1].width.saturating_sub(2); // subtract borders
    let mut required_lines: u16 = 0;

    if details_width > 0 {
        for line in full_details.lines() {
            let line_len = line.chars().count() as u16;
            if line_len == 0 {
                required_lines += 1;
            } else {
                required_lines += line_len.div_ceil(details_width);
            }
        }
    }

    let calculated_height = required_lines + 2;
    let available_height = v_chunks[1].height;
    let max_details_height = available_height / 2;
    let final_details_height = calculated_height.clamp(3, max_details_height.max(3));

    // --- 3. Dynamic Layout ---
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                       // Card list takes remaining space
            Constraint::Length(final_details_height), // Details takes only what it needs
        ])
        .split(v_chunks[1]);

    // --- Card List Rendering ---
    let title = format!(
        " Schools (Showing {} of {}) ",
        state.schools.len(),
        state.store.len()
    );

    if state.schools.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No schools found matching your criteria"),
            Line::from(Span::styled(
                "Try adjusting your filters to see more results",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(p, main_chunks[0]);
    } else {
        let card_items: Vec<ListItem> = state
            .schools
            .iter()
            .map(|s| card_item(s, state.expanded.contains(&s.link)))
            .collect();

        let card_list = List::new(card_items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::Green)
                    .fg(Color::Black),
            );
        f.render_stateful_widget(card_list, main_chunks[0], &mut state.list_state);
    }

    // Details
    let details = Paragraph::new(full_details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(details, main_chunks[1]);

    draw_footer(f, state, v_chunks[2], &full_help_text);
}

fn card_item(school: &School, expanded: bool) -> ListItem<'static> {
    let status_style = match school.registration_state() {
        RegistrationState::Open => Style::default().fg(Color::Green),
        RegistrationState::Closed => Style::default().fg(Color::Red),
        RegistrationState::Unknown => Style::default().fg(Color::DarkGray),
    };

    let mut spans = vec![
        Span::styled(school.status_symbol().to_string(), status_style),
        Span::raw(" "),
        Span::styled(
            school.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if !school.registration_status.trim().is_empty() {
        spans.push(Span::styled(
            format!(" ({})", school.registration_status.trim()),
            status_style,
        ));
    }

    let mut lines = vec![
        Line::from(spans),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                school.venue_label().to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(
                school.format_date_range(),
                Style::default().fg(Color::Blue),
            ),
            Span::raw("  "),
            Span::styled(school.format_deadline(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if let Some(desc) = &school.description {
        if expanded {
            for l in desc.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", l),
                    Style::default().fg(Color::Gray),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "    [+] Description (Enter to expand)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    ListItem::new(lines)
}

fn draw_filter_bar(f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    let filters = &state.filters;
    let mut spans: Vec<Span> = Vec::new();

    let chip = |label: &str, value: String, active: bool| -> Vec<Span<'static>> {
        let style = if active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(format!("{}:", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, style),
            Span::raw("  "),
        ]
    };

    let name_value = if state.mode == InputMode::Searching {
        state.input_buffer.clone()
    } else {
        filters.name.clone()
    };
    spans.extend(chip(
        "Name",
        if name_value.trim().is_empty() {
            "-".to_string()
        } else {
            format!("'{}'", name_value)
        },
        !name_value.trim().is_empty(),
    ));
    spans.extend(chip(
        "Status",
        filters.status.label().to_string(),
        filters.status != StatusFilter::All,
    ));
    spans.extend(chip(
        "Start",
        format!(
            "[{} .. {}]",
            if filters.start_from.is_empty() {
                "∞"
            } else {
                &filters.start_from
            },
            if filters.start_to.is_empty() {
                "∞"
            } else {
                &filters.start_to
            },
        ),
        !filters.start_from.is_empty() || !filters.start_to.is_empty(),
    ));
    spans.extend(chip(
        "Deadline≤",
        if filters.deadline_before.is_empty() {
            "-".to_string()
        } else {
            filters.deadline_before.clone()
        },
        !filters.deadline_before.is_empty(),
    ));
    spans.extend(chip("Sort", filters.sort.label().to_string(), true));

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Filters "));
    f.render_widget(bar, area);
}

fn draw_footer(
    f: &mut Frame,
    state: &AppState,
    footer_area: ratatui::layout::Rect,
    full_help_text: &[Line<'static>],
) {
    f.render_widget(Clear, footer_area);

    match state.mode {
        InputMode::Searching
        | InputMode::EditingStartFrom
        | InputMode::EditingStartTo
        | InputMode::EditingDeadline => {
            let (title_str, prefix, color) = match state.mode {
                InputMode::Searching => (" Filter by Name ", "/ ", Color::Green),
                InputMode::EditingStartFrom => (" Start Date From (YYYY-MM-DD) ", "> ", Color::Blue),
                InputMode::EditingStartTo => (" Start Date To (YYYY-MM-DD) ", "> ", Color::Blue),
                InputMode::EditingDeadline => {
                    (" Application Deadline Before (YYYY-MM-DD) ", "> ", Color::Cyan)
                }
                InputMode::Normal => unreachable!(),
            };

            let input_text = Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::styled(state.input_buffer.clone(), Style::default().fg(color)),
            ]);

            let input = Paragraph::new(input_text)
                .style(Style::default())
                .block(Block::default().borders(Borders::ALL).title(title_str))
                .wrap(Wrap { trim: false });

            f.render_widget(input, footer_area);

            // Cursor rendering
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            f.set_cursor_position((
                cursor_x.min(footer_area.x + footer_area.width.saturating_sub(2)),
                footer_area.y + 1,
            ));
        }
        InputMode::Normal => {
            if state.show_full_help {
                let p = Paragraph::new(full_help_text.to_vec())
                    .block(Block::default().borders(Borders::ALL).title(" Help "))
                    .wrap(Wrap { trim: false });
                f.render_widget(p, footer_area);
            } else {
                let status = Paragraph::new(state.message.clone())
                    .style(Style::default().fg(Color::Cyan))
                    .block(
                        Block::default()
                            .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                            .title(" Status "),
                    );
                let help_str =
                    "?:Help q:Quit /:Name s:Status o:Sort f/t:Start b:Deadline c:Clear ↵:Expand";
                let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );

                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
                    .split(footer_area);
                f.render_widget(status, chunks[0]);
                f.render_widget(help, chunks[1]);
            }
        }
    }
}
