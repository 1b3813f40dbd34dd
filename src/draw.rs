use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem, Modal, StatusPanel};
use crate::state::fixture::Side;
use crate::state::form::{FormField, FormMode, MatchForm, VENUES};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use futnorte_api::{Match, MatchStatus, Player};

static TABS: &[&str; 2] = &["Fixture", "Help"];

const HELP_TEXT: &str = "\
Board:   Tab=panel  j/k=move  Enter/e=edit  n=new  d=delete  r=refresh  p=export to logs
Filter:  w=weekend  m=month  f=apply  x=clear  [ ]=start ±1d  { }=end ±1d
Form:    Tab=field  h/l=choice  a=add scorer  x=drop scorer  +/-=goals  Enter=save  Esc=cancel
Global:  \"=logs  F=full screen  ?=help  q=quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
                draw_filter_bar(f, layout.filter_bar, app);
            }

            match app.active_tab {
                MenuItem::Board => draw_board(f, layout.main, app),
                MenuItem::Help => draw_help(f, layout.main),
            }

            draw_status_bar(f, layout.status_bar, app);

            if app.show_logs {
                draw_logs(f, layout.main);
            }

            match &app.modal {
                Modal::Form(form) => draw_form_modal(f, f.area(), app, form),
                Modal::ConfirmDelete { label, .. } => draw_confirm_modal(f, f.area(), label),
                Modal::None => {}
            }

            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let tab_index = match app.active_tab {
        MenuItem::Board => 0,
        MenuItem::Help => 1,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(Style::default().fg(Color::White));
    f.render_widget(tabs, tab_bar[0]);

    let name = app
        .store
        .tournament
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| format!("torneo {}", app.tournament_id));
    f.render_widget(
        Paragraph::new(name)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right),
        tab_bar[1],
    );
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let window = match (app.store.window_start, app.store.window_end) {
        (Some(start), Some(end)) => {
            format!("{} → {}", start.format("%d/%m/%Y"), end.format("%d/%m/%Y"))
        }
        _ => "all matches".to_owned(),
    };
    let mut spans = vec![
        Span::styled("Window: ", Style::default().fg(Color::Gray)),
        Span::styled(window, Style::default().fg(Color::Cyan)),
    ];
    if app.store.filtering {
        spans.push(Span::styled("  (filtering…)", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        "   w=weekend m=month f=apply x=clear",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ---------------------------------------------------------------------------
// Board — one column per status, matches grouped by venue
// ---------------------------------------------------------------------------

fn draw_board(f: &mut Frame, area: Rect, app: &App) {
    let [scheduled, finalized, postponed] = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .areas(area);

    draw_status_column(f, scheduled, app, StatusPanel::Scheduled, app.store.scheduled());
    draw_status_column(f, finalized, app, StatusPanel::Finalized, app.store.finalized());
    draw_status_column(f, postponed, app, StatusPanel::Postponed, app.store.postponed());
}

fn draw_status_column(
    f: &mut Frame,
    area: Rect,
    app: &App,
    panel: StatusPanel,
    matches: Vec<&Match>,
) {
    let active = app.panel == panel;
    let border_color = if active { Color::White } else { Color::DarkGray };
    let block = default_border(border_color).title(format!(" {} ({}) ", panel.title(), matches.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut last_venue: Option<&str> = None;

    for (index, m) in matches.iter().enumerate() {
        if last_venue != Some(m.venue.as_str()) {
            last_venue = Some(m.venue.as_str());
            lines.push(Line::from(Span::styled(
                format!("· {}", m.venue),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        let is_selected = active && index == app.selected;
        if is_selected {
            selected_line = lines.len();
        }
        lines.push(match_line(m, is_selected, inner.width));
    }

    // Keep the selection visible when the column overflows.
    let capacity = inner.height as usize;
    let skip = (selected_line + 1).saturating_sub(capacity);
    let visible: Vec<Line> = lines.into_iter().skip(skip).take(capacity).collect();

    f.render_widget(Paragraph::new(visible), inner);
}

fn match_line(m: &Match, selected: bool, width: u16) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let text = format!(
        "{}{} {} {} {}",
        marker,
        m.kickoff.format("%d/%m %H:%M"),
        m.home_team,
        m.score_label(),
        m.away_team,
    );
    let clipped: String = text.chars().take(width.saturating_sub(1) as usize).collect();

    let style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        match m.status {
            MatchStatus::Scheduled => Style::default().fg(Color::White),
            MatchStatus::Finalized => Style::default().fg(Color::Green),
            MatchStatus::Postponed => Style::default().fg(Color::Magenta),
        }
    };
    Line::from(Span::styled(clipped, style))
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.last_error {
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {} matches ", app.store.match_count()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                "| n=new e=edit d=delete r=refresh Tab=panel ?=help q=quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let [_, log_area] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
    f.render_widget(Clear, log_area);
    f.render_widget(
        TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
        log_area,
    );
}

// ---------------------------------------------------------------------------
// Modals
// ---------------------------------------------------------------------------

fn draw_form_modal(f: &mut Frame, area: Rect, app: &App, form: &MatchForm) {
    let modal = centered_rect(area, 64, 80);
    f.render_widget(Clear, modal);

    let title = match form.mode {
        FormMode::Create => " New match ",
        FormMode::Edit { .. } => " Edit match ",
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let mut lines: Vec<Line> = Vec::new();

    if form.mode == FormMode::Create {
        lines.push(field_line(
            form,
            FormField::HomeTeam,
            "Home team",
            team_name(app, form.home_team),
        ));
        lines.push(field_line(
            form,
            FormField::AwayTeam,
            "Away team",
            team_name(app, form.away_team),
        ));
    }

    lines.push(field_line(form, FormField::Kickoff, "Kickoff", form.kickoff_input.clone()));
    lines.push(field_line(
        form,
        FormField::Venue,
        "Venue",
        VENUES[form.venue_choice].to_owned(),
    ));
    if form.venue_choice == VENUES.len() - 1 {
        lines.push(field_line(form, FormField::CustomVenue, "Custom venue", form.custom_venue.clone()));
    }

    if matches!(form.mode, FormMode::Edit { .. }) {
        lines.push(field_line(form, FormField::Status, "Status", form.status.label().to_owned()));

        if form.status == MatchStatus::Finalized {
            lines.push(field_line(form, FormField::HomeScore, "Home score", form.home_score.to_string()));
            lines.push(field_line(form, FormField::AwayScore, "Away score", form.away_score.to_string()));
            lines.push(Line::from(""));
            push_scorer_section(&mut lines, app, form, Side::Home);
            push_scorer_section(&mut lines, app, form, Side::Away);
        }
    }

    if !form.errors.is_empty() {
        lines.push(Line::from(""));
        for error in &form.errors {
            lines.push(Line::from(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter=save  Esc=cancel  Tab=next field",
        Style::default().fg(Color::DarkGray),
    )));

    let capacity = inner.height as usize;
    let visible: Vec<Line> = lines.into_iter().take(capacity).collect();
    f.render_widget(Paragraph::new(visible), inner);
}

fn push_scorer_section(lines: &mut Vec<Line<'static>>, app: &App, form: &MatchForm, side: Side) {
    let (label, field, roster, score) = match side {
        Side::Home => ("Home scorers", FormField::HomeScorers, &app.store.home_roster, form.home_score),
        Side::Away => ("Away scorers", FormField::AwayScorers, &app.store.away_roster, form.away_score),
    };
    let focused = form.focus == field;
    let sum = form.scorer_sum(side);
    let sum_style = if sum == score {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("{}{label}  ", if focused { "▸ " } else { "  " }),
            if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::styled(format!("Σ {sum} / {score}"), sum_style),
    ]));

    let rows = form.scorer_rows(side);
    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "    (none — a=add)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (index, row) in rows.iter().enumerate() {
        let cursor = focused && index == form.scorer_cursor;
        let name = row
            .player_id
            .map(|id| player_name(roster, id))
            .unwrap_or_else(|| "— pick a player —".to_owned());
        let style = if cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("   {}{} ×{}", if cursor { "▸ " } else { "  " }, name, row.goals),
            style,
        )));
    }
}

fn draw_confirm_modal(f: &mut Frame, area: Rect, label: &str) {
    let modal = centered_rect(area, 50, 20);
    f.render_widget(Clear, modal);

    let block = default_border(Color::Red).title(" Delete match ");
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!("Delete {label}?"))),
        Line::from(""),
        Line::from(Span::styled(
            "y=delete  n/Esc=keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    horizontal
}

fn field_line(form: &MatchForm, field: FormField, label: &str, value: String) -> Line<'static> {
    let focused = form.focus == field;
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style =
        if focused { Style::default().fg(Color::White) } else { Style::default().fg(Color::Gray) };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<14}"), label_style),
        Span::styled(value, value_style),
    ])
}

fn team_name(app: &App, team_id: Option<u32>) -> String {
    team_id
        .and_then(|id| app.store.teams.iter().find(|t| t.id == id))
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "— pick a team —".to_owned())
}

fn player_name(roster: &[Player], player_id: u32) -> String {
    roster
        .iter()
        .find(|p| p.id == player_id)
        .map(Player::full_name)
        .unwrap_or_else(|| format!("player #{player_id}"))
}
