//! "Trips" screen.

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::trips::{StatusTone, TripCard};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::widgets::{hint, row_prefix, row_style};

pub(crate) struct TripsScreen {
    cards: Vec<TripCard>,
    selected: usize,
}

impl TripsScreen {
    pub(crate) fn new(cards: Vec<TripCard>) -> Self {
        Self { cards, selected: 0 }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" My Trips ({}) ", self.cards.len()));

        if self.cards.is_empty() {
            let empty = Paragraph::new("No trips yet.")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .cards
                .iter()
                .enumerate()
                .map(|(i, card)| trip_item(card, i == self.selected))
                .collect();
            f.render_widget(List::new(items).block(block), chunks[0]);
        }

        f.render_widget(hint("↑/↓ select"), chunks[1]);
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.cards.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }
}

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Info => Color::Blue,
        StatusTone::Success => Color::Green,
        StatusTone::Muted => Color::Gray,
    }
}

fn trip_item(card: &TripCard, selected: bool) -> ListItem<'static> {
    let badge = Span::styled(
        format!(" {} ", card.status),
        Style::default().fg(Color::Black).bg(tone_color(card.tone)),
    );
    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!("{}{}  ", row_prefix(selected), card.title)),
            badge,
        ]),
        Line::from(format!("    {}", card.description)),
        Line::from(format!(
            "    Starts {} · {} · {} · {}",
            card.starts, card.duration, card.budget, card.destinations
        )),
        Line::from(""),
    ])
    .style(row_style(selected))
}
