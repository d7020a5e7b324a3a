//! "Destinations" screen: searchable list with a detail view.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::cards::{
    amenity_preview, day_rate, destination_facts, tag_preview,
};
use nomadplan_core::{Catalog, destination_detail};
use nomadplan_shared::Destination;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::browser::{Browser, BrowserEvent};
use crate::widgets::hint;

pub(crate) struct DestinationsScreen {
    catalog: Rc<Catalog>,
    browser: Browser<Destination>,
    /// Id of the destination whose detail view is open.
    detail: Option<String>,
}

impl DestinationsScreen {
    pub(crate) fn new(catalog: Rc<Catalog>, sort_key: &str) -> Self {
        let browser = Browser::new(catalog.destinations.clone(), sort_key);
        Self {
            catalog,
            browser,
            detail: None,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.browser.is_searching()
    }

    /// Open the detail view for `id` directly.
    pub(crate) fn open(&mut self, id: &str) {
        self.detail = Some(id.to_string());
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        if let Some(id) = &self.detail {
            self.draw_detail(f, area, id);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5), // Controls
                Constraint::Min(1),    // Results
                Constraint::Length(1), // Hint
            ])
            .split(area);

        self.browser.draw_controls(f, chunks[0], "destination");
        self.browser
            .draw_results(f, chunks[1], "Destinations", destination_lines);
        f.render_widget(
            hint("/ search · f/F filter · s/S sort · c clear · Enter details"),
            chunks[2],
        );
    }

    fn draw_detail(&self, f: &mut Frame, area: Rect, id: &str) {
        let Some(detail) = destination_detail(&self.catalog, id) else {
            let missing = Paragraph::new("Destination not found\n\nEsc to go back")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(missing, area);
            return;
        };
        let d = detail.destination;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(11), // Overview
                Constraint::Min(1),     // Coworking spaces
                Constraint::Length(1),  // Hint
            ])
            .split(area);

        let label = Style::default().fg(Color::DarkGray);
        let overview = vec![
            Line::from(d.description.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Cost of living  ", label),
                Span::raw(format!("${}/mo", d.cost_of_living)),
            ]),
            Line::from(vec![
                Span::styled("Internet        ", label),
                Span::raw(format!("{} Mbps", d.internet_speed)),
            ]),
            Line::from(vec![
                Span::styled("Safety          ", label),
                Span::raw(format!("{}/10", d.safety_score)),
            ]),
            Line::from(vec![
                Span::styled("Weather         ", label),
                Span::raw(format!("{}/10", d.weather_score)),
            ]),
            Line::from(vec![
                Span::styled("Timezone        ", label),
                Span::raw(d.timezone.clone()),
            ]),
            Line::from(vec![
                Span::styled("Coordinates     ", label),
                Span::raw(d.coordinates.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Tags            ", label),
                Span::raw(d.tags.join(", ")),
            ]),
        ];
        let overview = Paragraph::new(overview).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {}, {}  ★ {:.1} ", d.name, d.country, d.rating)),
        );
        f.render_widget(overview, chunks[0]);

        let spaces: Vec<Line> = if detail.spaces.is_empty() {
            vec![Line::from("No coworking spaces listed yet")]
        } else {
            detail
                .spaces
                .iter()
                .flat_map(|s| {
                    [
                        Line::from(vec![
                            Span::styled(s.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                            Span::raw(format!("  ★ {:.1}  {}", s.rating, day_rate(s))),
                        ]),
                        Line::from(format!("  {}", s.address)),
                        Line::from(format!("  {}", amenity_preview(s).join(", "))),
                        Line::from(""),
                    ]
                })
                .collect()
        };
        let spaces = Paragraph::new(spaces).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Coworking spaces in {} ", d.name)),
        );
        f.render_widget(spaces, chunks[1]);

        f.render_widget(hint("Esc back to list"), chunks[2]);
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Option<String> {
        if self.detail.is_some() {
            if matches!(code, KeyCode::Esc | KeyCode::Backspace) {
                self.detail = None;
            }
            return None;
        }

        match self.browser.handle_key(code) {
            BrowserEvent::None => None,
            BrowserEvent::Status(msg) => Some(msg),
            BrowserEvent::Open(id) => {
                tracing::debug!(%id, "opening destination detail");
                self.detail = Some(id);
                None
            }
        }
    }
}

fn destination_lines(d: &Destination) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("{}, {}  ★ {:.1}", d.name, d.country, d.rating)),
        Line::from(format!("  {}", destination_facts(d).join(" · "))),
    ];
    let tags = tag_preview(d);
    if !tags.is_empty() {
        lines.push(Line::styled(
            format!("  #{}", tags.join(" #")),
            Style::default().fg(Color::Green),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> DestinationsScreen {
        DestinationsScreen::new(Rc::new(Catalog::mock().unwrap()), "rating")
    }

    #[test]
    fn enter_opens_and_esc_closes_detail() {
        let mut screen = screen();
        screen.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(screen.detail.as_deref(), Some("1"));
        screen.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(screen.detail, None);
    }

    #[test]
    fn card_lines_show_three_tags() {
        let catalog = Catalog::mock().unwrap();
        let lines = destination_lines(&catalog.destinations[1]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].to_string(), "  #beach #surfing #tropical");
    }
}
