//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use skillgrep_core::{store, Candidate, FitBand, ScoreFilter, SyncMode, Stage};

use crate::app::{App, ChatFocus, Screen, StatusFilter};

// ========== Color Palette ==========

/// Brand accent for titles and focused borders
const ACCENT: Color = Color::Rgb(0, 180, 180);
/// Dim gray for secondary text and hints
const DIM: Color = Color::Rgb(128, 128, 128);
/// Separator and unfocused border color
const BORDER_DIM: Color = Color::Rgb(60, 60, 60);
/// User chat bubble label
const USER_COLOR: Color = Color::Rgb(100, 180, 255);
/// Assistant chat bubble label
const ASSISTANT_COLOR: Color = Color::Rgb(180, 140, 255);

/// Score band to display color; every screen goes through this.
fn band_color(band: FitBand) -> Color {
    match band {
        FitBand::Strong => Color::Green,
        FitBand::Good => Color::Cyan,
        FitBand::Moderate => Color::Yellow,
        FitBand::Review => Color::Red,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Auth => render_auth(frame, app),
        Screen::Onboarding => render_onboarding(frame, app),
        Screen::Jobs => render_jobs(frame, app),
        Screen::Chat { job_id } => render_chat(frame, app, job_id),
        Screen::Results { job_id } => render_results(frame, app, job_id),
        Screen::NotFound { job_id } => render_not_found(frame, job_id),
    }

    // Overlays, topmost last
    if let Some(sample) = &app.sample_results {
        render_sample_drawer(frame, app, sample);
    }
    if let Some(candidate) = &app.viewing_resume {
        render_resume_modal(frame, candidate);
    }
}

// ============================================
// Auth
// ============================================

fn render_auth(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 12, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));

    let status = if app.signing_in {
        Line::from(Span::styled("Signing in...", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(" Sign in with SSO    "),
            Span::styled("q", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Skill Grep",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "AI-powered candidate filtering",
            Style::default().fg(DIM),
        )),
        Line::from(""),
        Line::from(""),
        status,
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================
// Onboarding
// ============================================

fn render_onboarding(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 14, frame.area());
    let block = Block::default()
        .title(" Connect your ATS ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));

    let shown_key = if app.show_key {
        app.api_key.clone()
    } else {
        "•".repeat(app.api_key.chars().count())
    };

    let status = if app.connecting {
        Line::from(Span::styled("Connecting...", Style::default().fg(Color::Yellow)))
    } else if app.can_connect() {
        Line::from(Span::styled("Ready to connect", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(
            "Paste the API key from your ATS admin console",
            Style::default().fg(DIM),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw("API key:")),
        Line::from(Span::styled(
            format!(" {}_", shown_key),
            Style::default().fg(Color::White).bg(BORDER_DIM),
        )),
        Line::from(""),
        status,
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(ACCENT)),
            Span::raw(" Connect  "),
            Span::styled("Ctrl-R", Style::default().fg(ACCENT)),
            Span::raw(if app.show_key { " Hide key  " } else { " Show key  " }),
            Span::styled("Esc", Style::default().fg(ACCENT)),
            Span::raw(" Back"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

// ============================================
// Jobs
// ============================================

fn render_jobs(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: search header, table (plus optional panel), footer
    let chunks = Layout::vertical([
        Constraint::Length(3), // Search + status tabs
        Constraint::Min(5),    // Job table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_jobs_header(frame, app, chunks[0]);

    if app.panel_open {
        let cols = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_job_table(frame, app, cols[0]);
        render_sync_panel(frame, app, cols[1]);
    } else {
        render_job_table(frame, app, chunks[1]);
    }

    render_jobs_footer(frame, app, chunks[2]);
}

fn render_jobs_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(DIM)),
        Span::styled(
            format!("{}_", app.search_query),
            Style::default().fg(Color::White),
        ),
        Span::raw("    "),
    ];
    for filter in [StatusFilter::All, StatusFilter::Open, StatusFilter::Closed] {
        let style = if filter == app.status_filter {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    let block = Block::default()
        .title(" Jobs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_DIM));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_job_table(frame: &mut Frame, app: &App, area: Rect) {
    let jobs = app.visible_jobs();

    let header = Row::new(vec!["Title", "Location", "Req", "Status", "Cands", "Synced", "Sync"])
        .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let status_style = match job.status {
                skillgrep_core::JobStatus::Open => Style::default().fg(Color::Green),
                skillgrep_core::JobStatus::Closed => Style::default().fg(Color::Red),
            };
            let sync = match job.sync_mode {
                SyncMode::All => "All".to_string(),
                SyncMode::None => "Off".to_string(),
                SyncMode::Specific => format!("{} stages", job.sync_stages.len()),
            };
            let row = Row::new(vec![
                Cell::from(job.title.clone()),
                Cell::from(format!("{} ({})", job.location, job.work_type.as_str())),
                Cell::from(job.req_id.clone()),
                Cell::from(Span::styled(job.status.as_str(), status_style)),
                Cell::from(job.candidate_count.to_string()),
                Cell::from(job.last_sync.clone()),
                Cell::from(sync),
            ]);
            if i == app.job_cursor {
                row.style(Style::default().bg(BORDER_DIM).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(24),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER_DIM)));

    frame.render_widget(table, area);
}

/// Sync configuration panel for the selected job.
fn render_sync_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(job) = app.selected_job() else { return };

    let mode_label = match job.sync_mode {
        SyncMode::All => "All candidates",
        SyncMode::Specific => "Specific stages",
        SyncMode::None => "Don't sync",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", job.req_id, job.location),
            Style::default().fg(DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Sync mode: "),
            Span::styled(mode_label, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    for (i, stage) in Stage::ALL.iter().enumerate() {
        let selected = job.sync_stages.contains(stage);
        let enabled = job.sync_mode == SyncMode::Specific;
        let mark = if selected { "[x]" } else { "[ ]" };
        let style = if !enabled {
            Style::default().fg(BORDER_DIM)
        } else if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {} {}", i + 1, mark, stage.as_str()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("m", Style::default().fg(ACCENT)),
        Span::raw(" Mode  "),
        Span::styled("1-6", Style::default().fg(ACCENT)),
        Span::raw(" Stage  "),
        Span::styled("f", Style::default().fg(ACCENT)),
        Span::raw(" Filter Candidates  "),
        Span::styled("Esc", Style::default().fg(ACCENT)),
        Span::raw(" Close"),
    ]));

    let block = Block::default()
        .title(" Candidate Sync ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_jobs_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.panel_open {
        "m mode · 1-6 stages · f filter candidates · Esc close panel".to_string()
    } else {
        format!(
            "{} jobs · type to search · Tab status · ↑/↓ select · Enter configure · Ctrl-C quit",
            app.visible_jobs().len()
        )
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(DIM)),
        area,
    );
}

// ============================================
// Chat
// ============================================

fn render_chat(frame: &mut Frame, app: &App, job_id: &str) {
    let area = frame.area();
    let title = app.job_title(job_id).unwrap_or_default();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Conversation + prompt
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let header = Paragraph::new(format!("Filter Candidates · {}", title))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER_DIM)));
    frame.render_widget(header, chunks[0]);

    if app.prompt_panel_visible() {
        let cols = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_conversation(frame, app, cols[0]);
        render_prompt_panel(frame, app, cols[1]);
    } else {
        render_conversation(frame, app, chunks[1]);
    }

    render_chat_footer(frame, app, chunks[2]);
}

fn render_conversation(frame: &mut Frame, app: &App, area: Rect) {
    let suggestion_rows = if app.suggestions_visible() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Min(3),                    // Messages
        Constraint::Length(suggestion_rows),   // Quick suggestions
        Constraint::Length(3),                 // Input
    ])
    .split(area);

    // Messages, newest at the bottom
    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages {
        let (label, color) = match msg.role {
            skillgrep_core::Role::User => ("You", USER_COLOR),
            skillgrep_core::Role::Assistant => ("Assistant", ASSISTANT_COLOR),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for content_line in msg.content.lines() {
            lines.push(Line::from(markup_spans(content_line, Style::default())));
        }
        lines.push(Line::from(""));
    }
    if app.is_typing {
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the tail visible in a fixed-height viewport
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let block = Block::default()
        .title(" Conversation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_DIM));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        chunks[0],
    );

    if app.suggestions_visible() {
        let spans: Vec<Span> = store::QUICK_SUGGESTIONS
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                vec![
                    Span::styled(format!("F{}", i + 1), Style::default().fg(ACCENT)),
                    Span::raw(format!(" {}   ", s)),
                ]
            })
            .collect();
        let block = Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DIM));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(block).wrap(Wrap { trim: false }),
            chunks[1],
        );
    }

    let input_style = if app.chat_focus == ChatFocus::Input {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER_DIM)
    };
    let input = Paragraph::new(format!("{}_", app.input)).block(
        Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(input_style),
    );
    frame.render_widget(input, chunks[2]);
}

fn render_prompt_panel(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.prompt_edited {
        " Evaluation Prompt (edited) "
    } else {
        " Evaluation Prompt "
    };
    let border = if app.chat_focus == ChatFocus::Prompt {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER_DIM)
    };

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).split(area);

    let paragraph = Paragraph::new(app.generated_prompt.as_str())
        .block(Block::default().title(title).borders(Borders::ALL).border_style(border))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    let run_hint = if app.is_testing {
        Span::styled("Testing sample...", Style::default().fg(Color::Yellow))
    } else if app.is_running {
        Span::styled("Running on all candidates...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Ctrl-T Test on 5 candidates", Style::default().fg(ACCENT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            run_hint,
            Span::styled("   Tab Edit prompt", Style::default().fg(DIM)),
        ])),
        chunks[1],
    );
}

fn render_chat_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.sample_results.is_some() {
        "↑/↓ select · v resume · r run on all · Esc close"
    } else if app.prompt_panel_visible() {
        "Enter send · Tab focus prompt · Ctrl-T test sample · Esc back to jobs"
    } else {
        "Enter send · F1-F5 suggestions · Esc back to jobs"
    };
    frame.render_widget(Paragraph::new(text).style(Style::default().fg(DIM)), area);
}

/// Bottom drawer listing the sample run results.
fn render_sample_drawer(frame: &mut Frame, app: &App, sample: &[Candidate]) {
    let area = centered_rect(70, (sample.len() as u16) + 6, frame.area());
    frame.render_widget(Clear, area);

    let header = Row::new(vec!["Name", "Role", "Score", "Fit"])
        .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = sample
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let color = band_color(c.band());
            let row = Row::new(vec![
                Cell::from(c.name.clone()),
                Cell::from(c.current_role.clone()),
                Cell::from(Span::styled(c.score.to_string(), Style::default().fg(color))),
                Cell::from(Span::styled(c.band().label(), Style::default().fg(color))),
            ]);
            if i == app.drawer_cursor {
                row.style(Style::default().bg(BORDER_DIM).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Sample Results (top 5) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(table, area);
}

// ============================================
// Results
// ============================================

fn render_results(frame: &mut Frame, app: &App, job_id: &str) {
    let area = frame.area();
    let title = app.job_title(job_id).unwrap_or_default();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header with band counts
        Constraint::Length(1), // Filter tabs
        Constraint::Min(5),    // Candidate table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let counts = store::band_counts(&app.candidates);
    let header = Line::from(vec![
        Span::styled(
            format!("Results · {}   ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} scored   ", counts.total), Style::default().fg(DIM)),
        Span::styled(format!("{} strong  ", counts.excellent), Style::default().fg(Color::Green)),
        Span::styled(format!("{} good  ", counts.strong), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{} moderate  ", counts.potential), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{} review", counts.weak), Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(
        Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(BORDER_DIM))),
        chunks[0],
    );

    let mut tab_spans: Vec<Span> = Vec::new();
    for filter in ScoreFilter::ALL_FILTERS {
        let style = if filter == app.score_filter {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        tab_spans.push(Span::styled(format!("  {}  ", filter.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[1]);

    render_results_table(frame, app, chunks[2]);

    frame.render_widget(
        Paragraph::new("←/→ filter · ↑/↓ select · Enter why · v resume · e refine · b back · q quit")
            .style(Style::default().fg(DIM)),
        chunks[3],
    );
}

fn render_results_table(frame: &mut Frame, app: &App, area: Rect) {
    let candidates = app.results_rows();

    let header = Row::new(vec!["Score", "Fit", "Name", "Role", "Stage", "Location", "Experience"])
        .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = Vec::new();
    for (i, c) in candidates.iter().enumerate() {
        let color = band_color(c.band());
        let row = Row::new(vec![
            Cell::from(Span::styled(
                c.score.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(c.band().label(), Style::default().fg(color))),
            Cell::from(c.name.clone()),
            Cell::from(c.current_role.clone()),
            Cell::from(c.stage.as_str()),
            Cell::from(c.location.clone()),
            Cell::from(c.experience.clone()),
        ]);
        let row = if i == app.result_cursor {
            row.style(Style::default().bg(BORDER_DIM).add_modifier(Modifier::BOLD))
        } else {
            row
        };
        rows.push(row);
        if app.expanded.as_deref() == Some(c.id.as_str()) {
            rows.push(
                Row::new(vec![Cell::from(""), Cell::from(""), Cell::from(
                    Span::styled(format!("↳ {}", c.reason), Style::default().fg(DIM)),
                )])
                .height(2),
            );
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Min(18),
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DIM)),
    );
    frame.render_widget(table, area);
}

/// Full candidate record in a centered modal.
fn render_resume_modal(frame: &mut Frame, candidate: &Candidate) {
    let area = centered_rect(60, 18, frame.area());
    frame.render_widget(Clear, area);

    let color = band_color(candidate.band());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                candidate.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {} · {}", candidate.score, candidate.band().label()),
                Style::default().fg(color),
            ),
        ]),
        Line::from(Span::styled(candidate.current_role.clone(), Style::default().fg(DIM))),
        Line::from(""),
        field("Stage", candidate.stage.as_str()),
        field("Location", &candidate.location),
        field("Experience", &candidate.experience),
        field("Skills", &candidate.skills.join(", ")),
        field("Leadership", &candidate.leadership),
        field("Background", &candidate.background),
    ];
    if let Some(email) = &candidate.email {
        lines.push(field("Email", email));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        candidate.reason.clone(),
        Style::default().fg(DIM),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc Close", Style::default().fg(ACCENT))));

    let block = Block::default()
        .title(" Resume ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(DIM)),
        Span::raw(value.to_string()),
    ])
}

// ============================================
// Not found
// ============================================

fn render_not_found(frame: &mut Frame, job_id: &str) {
    let area = centered_rect(50, 8, frame.area());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Job not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("No job with id {}", job_id), Style::default().fg(DIM))),
        Line::from(""),
        Line::from(Span::styled("Esc Back to jobs", Style::default().fg(ACCENT))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

// ============================================
// Helpers
// ============================================

/// Split `**bold**` chat markup into styled spans.
fn markup_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = text;
    let mut bold = false;
    while let Some(pos) = rest.find("**") {
        if pos > 0 {
            let style = if bold { base.add_modifier(Modifier::BOLD) } else { base };
            spans.push(Span::styled(rest[..pos].to_string(), style));
        }
        bold = !bold;
        rest = &rest[pos + 2..];
    }
    if !rest.is_empty() {
        let style = if bold { base.add_modifier(Modifier::BOLD) } else { base };
        spans.push(Span::styled(rest.to_string(), style));
    }
    spans
}

/// A centered rect of at most `width` x `height` inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
