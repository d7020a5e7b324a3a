//! "Home" screen: headline stats and featured destinations.

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::cards::destination_facts;
use nomadplan_core::home::HEADLINE_STATS;
use nomadplan_shared::Destination;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::widgets::{hint, row_prefix, row_style};

pub(crate) struct HomeScreen {
    featured: Vec<Destination>,
    selected: usize,
}

impl HomeScreen {
    pub(crate) fn new(featured: Vec<Destination>) -> Self {
        Self {
            featured,
            selected: 0,
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Hero
                Constraint::Length(3), // Stats
                Constraint::Min(1),    // Featured
                Constraint::Length(1), // Hint
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::styled(
                "Work from anywhere. Live everywhere.",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::from("Destinations, coworking spaces and trip plans for digital nomads."),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hero, chunks[0]);

        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);
        for ((label, value), stat_area) in HEADLINE_STATS.iter().zip(stat_areas.iter()) {
            let stat = Paragraph::new(Line::from(vec![
                Span::styled(*value, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {label}")),
            ]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(stat, *stat_area);
        }

        let items: Vec<ListItem> = self
            .featured
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let selected = i == self.selected;
                ListItem::new(vec![
                    Line::from(format!(
                        "{}{}, {}  ★ {:.1}",
                        row_prefix(selected),
                        d.name,
                        d.country,
                        d.rating
                    )),
                    Line::from(format!("    {}", destination_facts(d).join(" · "))),
                ])
                .style(row_style(selected))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Featured Destinations "),
        );
        f.render_widget(list, chunks[2]);

        f.render_widget(hint("↑/↓ select · Enter open destination"), chunks[3]);
    }

    /// Returns the id of a destination to open.
    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Option<String> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.featured.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self.featured.get(self.selected).map(|d| d.id.clone()),
            _ => None,
        }
    }
}
