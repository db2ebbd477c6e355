#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

use std::str::FromStr;

use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::canvas::Circle;
use ratatui::widgets::canvas::Points;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Gauge;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use strum::IntoEnumIterator;

use crate::domain::models::profile;
use crate::domain::models::profile::ProjectFilter;
use crate::domain::models::profile::SkillCategory;
use crate::domain::models::Backdrop;
use crate::domain::models::ContactField;
use crate::domain::models::FormStatus;
use crate::domain::models::LineKind;
use crate::domain::models::MapView;
use crate::domain::models::Route;
use crate::domain::models::Theme;
use crate::domain::models::DEFAULT_ZOOM;
use crate::domain::services::AppState;
use crate::domain::services::WELCOME;

/// Half the visible map width at the default zoom, in meters.
const MAP_HALF_SPAN_M: f64 = 2_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub accent_alt: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub night: Color,
    pub day: Color,
    pub success: Color,
    pub danger: Color,
}

pub fn palette_for(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Rgb(0, 238, 255),
            accent_alt: Color::Rgb(0, 255, 136),
            text: Color::Gray,
            muted: Color::DarkGray,
            border: Color::Rgb(60, 60, 80),
            night: Color::Rgb(10, 10, 18),
            day: Color::Rgb(24, 24, 36),
            success: Color::Rgb(0, 255, 136),
            danger: Color::LightRed,
        },
        Theme::Cyberpunk => Palette {
            accent: Color::Rgb(255, 0, 170),
            accent_alt: Color::Rgb(0, 238, 255),
            text: Color::Rgb(240, 240, 120),
            muted: Color::Rgb(140, 90, 160),
            border: Color::Magenta,
            night: Color::Rgb(18, 4, 30),
            day: Color::Rgb(40, 10, 60),
            success: Color::LightGreen,
            danger: Color::LightRed,
        },
        Theme::Glassmorphism => Palette {
            accent: Color::Rgb(170, 200, 255),
            accent_alt: Color::Rgb(200, 170, 255),
            text: Color::White,
            muted: Color::Rgb(150, 160, 190),
            border: Color::Rgb(120, 140, 190),
            night: Color::Rgb(20, 28, 48),
            day: Color::Rgb(48, 62, 96),
            success: Color::LightGreen,
            danger: Color::LightRed,
        },
        Theme::Minimal => Palette {
            accent: Color::Black,
            accent_alt: Color::Blue,
            text: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            night: Color::Rgb(220, 220, 220),
            day: Color::White,
            success: Color::Green,
            danger: Color::Red,
        },
    }
}

/// Palette selected by the active `theme-*` marker. Falls back to dark.
pub fn palette_for_marker(marker: Option<&str>) -> Palette {
    let theme = marker
        .and_then(|m| m.strip_prefix("theme-"))
        .and_then(|name| Theme::from_str(name).ok())
        .unwrap_or_default();

    return palette_for(theme);
}

fn block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
}

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

pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = palette_for_marker(state.theme.scope().active());
    let area = frame.area();

    let backdrop = match Backdrop::for_hour(state.theme.clock().hour()) {
        Backdrop::Night => palette.night,
        Backdrop::Day => palette.day,
    };
    frame.render_widget(Block::default().style(Style::default().bg(backdrop)), area);

    if state.loading {
        render_preloader(frame, area, state, &palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    render_navbar(frame, chunks[0], state, &palette);
    match state.route {
        Route::Home => render_home(frame, chunks[1], state, &palette),
        Route::About => render_about(frame, chunks[1], state, &palette),
        Route::Projects => render_projects(frame, chunks[1], state, &palette),
        Route::Contact => render_contact(frame, chunks[1], state, &palette),
    }
    render_footer(frame, chunks[2], &palette);

    if state.terminal.is_active() {
        render_terminal(frame, area, state, &palette);
    }
}

fn render_preloader(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let rain = state
        .matrix
        .glyphs()
        .map(|glyph| {
            Line::from(Span::styled(
                glyph.to_string(),
                Style::default().fg(palette.success),
            ))
        })
        .collect::<Vec<Line>>();
    let reversed = rain.iter().rev().cloned().collect::<Vec<Line>>();
    frame.render_widget(Paragraph::new(rain), columns[0]);
    frame.render_widget(Paragraph::new(reversed), columns[2]);

    let center = centered_rect(50, 7, columns[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(center);

    let typed = Paragraph::new(Line::from(vec![
        Span::styled(
            state.typed.as_str(),
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "_",
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(typed, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.success).bg(palette.border))
        .percent(u16::from(state.progress.min(100)))
        .label("");
    frame.render_widget(gauge, rows[1]);

    let label = Paragraph::new(format!("SYSTEM LOADING {}%", state.progress))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center);
    frame.render_widget(label, rows[3]);
}

fn render_navbar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let titles = Route::iter()
        .map(|route| Line::from(route.title()))
        .collect::<Vec<Line>>();
    let selected = Route::iter()
        .position(|route| route == state.route)
        .unwrap_or(0);

    let status = Line::from(Span::styled(
        format!(" {} ", state.theme.status_label()),
        Style::default().fg(palette.accent_alt),
    ))
    .alignment(Alignment::Right);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(block("folio", palette).title(status));

    frame.render_widget(tabs, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            profile::GREETING,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("I'm a ", Style::default().fg(palette.text)),
            Span::styled(
                state.role.current(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(profile::INTRO, Style::default().fg(palette.muted))),
    ];
    frame.render_widget(
        Paragraph::new(hero)
            .wrap(Wrap { trim: true })
            .block(block("Home", palette)),
        rows[0],
    );

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);
    for (idx, (value, label)) in profile::HIGHLIGHTS.iter().enumerate() {
        let text = vec![
            Line::from(Span::styled(
                *value,
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(palette.muted))),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            ),
            cells[idx],
        );
    }

    let hints = Paragraph::new(vec![Line::from(Span::styled(
        "←/→ pages · a auto theme · t next theme · g GitHub · q quit · Ctrl+Alt+P console",
        Style::default().fg(palette.muted),
    ))])
    .wrap(Wrap { trim: true });
    frame.render_widget(hints, rows[2]);
}

fn render_about(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(columns[0]);

    frame.render_widget(
        Paragraph::new(profile::WHOAMI)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: true })
            .block(block("About", palette)),
        left[0],
    );

    let label = Style::default().fg(palette.accent);
    let stats = match state.github_stats {
        Some(stats) => vec![
            Line::from(vec![
                Span::styled("Repositories: ", label),
                Span::raw(stats.public_repos.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Followers:    ", label),
                Span::raw(stats.followers.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Following:    ", label),
                Span::raw(stats.following.to_string()),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Loading GitHub stats...",
            Style::default().fg(palette.muted),
        ))],
    };
    frame.render_widget(
        Paragraph::new(stats)
            .style(Style::default().fg(palette.text))
            .block(block("GitHub", palette)),
        left[1],
    );

    let mut skills = vec![];
    for category in SkillCategory::iter() {
        skills.push(Line::from(Span::styled(
            category.to_string(),
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        )));
        skills.push(Line::from(Span::styled(
            profile::skills_in(category).join(" · "),
            Style::default().fg(palette.text),
        )));
        skills.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(skills)
            .wrap(Wrap { trim: true })
            .block(block("Skills", palette)),
        columns[1],
    );
}

fn render_projects(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut filters = vec![Span::styled("Filter: ", Style::default().fg(palette.muted))];
    for filter in ProjectFilter::iter() {
        let style = if filter == state.project_filter {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        filters.push(Span::styled(format!(" {filter} "), style));
        filters.push(Span::raw(" "));
    }
    filters.push(Span::styled("(f to change)", Style::default().fg(palette.muted)));

    let mut lines = vec![Line::from(filters), Line::from("")];
    for project in profile::projects(state.project_filter) {
        lines.push(Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            project.description,
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(Span::styled(
            project.tags.join(", "),
            Style::default().fg(palette.accent_alt),
        )));
        lines.push(Line::from(Span::styled(
            profile::repository_url(&state.github_user, project),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block("Projects", palette)),
        area,
    );
}

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "Your Email",
        ContactField::Subject => "Subject",
        ContactField::Message => "Message",
    }
}

fn render_contact(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let desk = &state.contact;
    let mut lines = vec![];
    for field in ContactField::iter() {
        let focused = field == desk.focus;
        let marker = if focused { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field_label(field)),
            Style::default().fg(if focused { palette.accent } else { palette.muted }),
        )));

        let mut value = desk.form.field(field).to_string();
        if focused {
            value.push('_');
        }
        lines.push(Line::from(Span::styled(
            format!("  {value}"),
            Style::default().fg(palette.text),
        )));

        if let Some(err) = desk.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("  {err}"),
                Style::default().fg(palette.danger),
            )));
        }
        if field == ContactField::Email {
            if let Some(suggestion) = &desk.suggestion {
                lines.push(Line::from(Span::styled(
                    format!("  {suggestion}"),
                    Style::default().fg(palette.accent_alt),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let banner = match desk.status {
        FormStatus::Idle => Line::from(Span::styled(
            "Enter: Send Message · Tab/Shift+Tab: next field · F4: zoom map",
            Style::default().fg(palette.muted),
        )),
        FormStatus::Submitting => Line::from(Span::styled(
            "Sending...",
            Style::default().fg(palette.accent),
        )),
        FormStatus::Success => Line::from(Span::styled(
            "Your message has been sent successfully!",
            Style::default().fg(palette.success),
        )),
        FormStatus::Error => Line::from(Span::styled(
            "There was an error sending your message. Please try again.",
            Style::default().fg(palette.danger),
        )),
    };
    lines.push(banner);
    if desk.status == FormStatus::Error {
        if let Some(reason) = &desk.failure {
            lines.push(Line::from(Span::styled(
                reason.as_str(),
                Style::default().fg(palette.muted),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block("Get in Touch", palette)),
        columns[0],
    );

    render_map(frame, columns[1], &desk.map, palette);
}

fn render_map(frame: &mut Frame, area: Rect, map: &MapView, palette: &Palette) {
    let half_span = MAP_HALF_SPAN_M / 2f64.powi(i32::from(map.zoom) - i32::from(DEFAULT_ZOOM));
    let landmark = map.landmark.clone();
    let radii = map.overlay_radii_m;
    let title = format!(
        "Location ({:.4}, {:.4}) zoom {}",
        landmark.latitude, landmark.longitude, map.zoom
    );
    let colors = [palette.accent, palette.accent_alt];
    let marker = palette.danger;
    let label = palette.text;

    let canvas = Canvas::default()
        .block(block(&title, palette))
        .x_bounds([-half_span, half_span])
        .y_bounds([-half_span, half_span])
        .paint(move |ctx| {
            for (radius, color) in radii.iter().zip(colors.iter()) {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: f64::from(*radius),
                    color: *color,
                });
            }
            ctx.draw(&Points {
                coords: &[(0.0, 0.0)],
                color: marker,
            });
            ctx.print(
                half_span * 0.05,
                half_span * 0.05,
                Span::styled(landmark.name, Style::default().fg(label)),
            );
        });

    frame.render_widget(canvas, area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut links = vec![Span::styled(
        format!("© {} All rights reserved.", chrono::Local::now().format("%Y")),
        Style::default().fg(palette.muted),
    )];
    for (name, url) in profile::SOCIAL_LINKS.iter() {
        links.push(Span::raw("   "));
        links.push(Span::styled(
            format!("{name}: {url}"),
            Style::default().fg(palette.accent_alt),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(links)).alignment(Alignment::Center),
        area,
    );
}

fn render_terminal(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let width = area.width.saturating_sub(4).min(90);
    let height = if state.terminal.minimized {
        3
    } else {
        area.height.saturating_sub(4).min(20)
    }
    .min(area.height);
    let window = Rect {
        x: area.x + area.width.saturating_sub(width + 2),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let hint = if state.terminal.minimized {
        "Esc: restore"
    } else {
        "Esc: minimize"
    };
    let frame_block = block("Terminal", palette).title(
        Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Right),
    );

    frame.render_widget(Clear, window);
    if state.terminal.minimized {
        frame.render_widget(frame_block, window);
        return;
    }

    let mut lines = vec![];
    if state.terminal.show_welcome {
        lines.push(Line::from(Span::styled(
            WELCOME,
            Style::default().fg(palette.muted),
        )));
    }
    for line in state.terminal.scrollback.lines() {
        match line.kind {
            LineKind::Prompt => lines.push(Line::from(vec![
                Span::styled("$ ", Style::default().fg(palette.success)),
                Span::styled(line.text.as_str(), Style::default().fg(palette.text)),
            ])),
            LineKind::Output => {
                for text in line.text.lines() {
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(palette.text),
                    )));
                }
            }
        }
    }
    lines.push(Line::from(vec![
        Span::styled("$ ", Style::default().fg(palette.success)),
        Span::styled(
            format!("{}_", state.terminal.input),
            Style::default().fg(palette.accent),
        ),
    ]));

    let inner_height = usize::from(height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(inner_height);
    let paragraph = Paragraph::new(lines)
        .block(frame_block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, window);
}
