//! "Coworking" screen.

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::cards::{amenity_preview, coworking_facts, day_rate};
use nomadplan_query::find_by_id;
use nomadplan_shared::CoworkingSpace;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::browser::{Browser, BrowserEvent};
use crate::widgets::hint;

pub(crate) struct CoworkingScreen {
    browser: Browser<CoworkingSpace>,
    /// Space shown in full, below the list.
    expanded: Option<String>,
}

impl CoworkingScreen {
    pub(crate) fn new(spaces: Vec<CoworkingSpace>, sort_key: &str) -> Self {
        Self {
            browser: Browser::new(spaces, sort_key),
            expanded: None,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.browser.is_searching()
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let expanded = self
            .expanded
            .as_deref()
            .and_then(|id| find_by_id(self.browser.results(), id));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),                                       // Controls
                Constraint::Min(1),                                          // Results
                Constraint::Length(if expanded.is_some() { 8 } else { 0 }), // Expanded space
                Constraint::Length(1),                                       // Hint
            ])
            .split(area);

        self.browser.draw_controls(f, chunks[0], "coworking space");
        self.browser
            .draw_results(f, chunks[1], "Coworking Spaces", space_lines);

        if let Some(space) = expanded {
            let mut lines = vec![
                Line::from(space.description.clone()),
                Line::from(format!(
                    "${}/day · ${}/mo · {} Mbps · {}",
                    space.price_per_day, space.price_per_month, space.internet_speed, space.opening_hours
                )),
                Line::from(format!("Amenities: {}", space.amenities.join(", "))),
                Line::from(format!("Location: {}", space.coordinates)),
            ];
            if let Some(website) = &space.website {
                lines.push(Line::from(format!("Website: {website}")));
            }
            let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", space.name)),
            );
            f.render_widget(panel, chunks[2]);
        }

        f.render_widget(
            hint("/ search · f/F price · s/S sort · c clear · Enter expand"),
            chunks[3],
        );
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Option<String> {
        if code == KeyCode::Esc && self.expanded.is_some() && !self.browser.is_searching() {
            self.expanded = None;
            return None;
        }

        match self.browser.handle_key(code) {
            BrowserEvent::None => None,
            BrowserEvent::Status(msg) => Some(msg),
            BrowserEvent::Open(id) => {
                self.expanded = match self.expanded.take() {
                    Some(open) if open == id => None,
                    _ => Some(id),
                };
                None
            }
        }
    }
}

fn space_lines(s: &CoworkingSpace) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("{}  ★ {:.1}  {}", s.name, s.rating, day_rate(s))),
        Line::from(format!("  {}", s.address)),
        Line::from(format!("  {}", coworking_facts(s).join(" · "))),
    ];
    let amenities = amenity_preview(s);
    if !amenities.is_empty() {
        lines.push(Line::styled(
            format!("  {}", amenities.join(", ")),
            Style::default().fg(Color::Green),
        ));
    }
    lines
}
