//! Search, filter, and sort state shared by the catalog screens.

use crossterm::event::KeyCode;
use nomadplan_query::{Choice, Query, Queryable, results_heading};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::widgets::{field_block, row_prefix, row_style};

/// What a key press in the browser asks the owning screen to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowserEvent {
    None,
    /// Show a message in the status bar.
    Status(String),
    /// Open the item with this id.
    Open(String),
}

pub(crate) struct Browser<T: Queryable> {
    items: Vec<T>,
    query: Query<T>,
    results: Vec<T>,
    selected: usize,
    searching: bool,
}

impl<T: Queryable> Browser<T> {
    pub(crate) fn new(items: Vec<T>, sort_key: &str) -> Self {
        let query = Query::new().with_sort_key(sort_key);
        let results = query.apply(&items);
        Self {
            items,
            query,
            results,
            selected: 0,
            searching: false,
        }
    }

    pub(crate) fn is_searching(&self) -> bool {
        self.searching
    }

    pub(crate) fn results(&self) -> &[T] {
        &self.results
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode) -> BrowserEvent {
        if self.searching {
            match code {
                KeyCode::Esc | KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => {
                    self.query.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.query.search.push(c);
                    self.refresh();
                }
                _ => {}
            }
            return BrowserEvent::None;
        }

        match code {
            KeyCode::Char('/') => {
                self.searching = true;
                BrowserEvent::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                BrowserEvent::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
                BrowserEvent::None
            }
            KeyCode::Char('f') => self.set_filter(self.query.filter.next()),
            KeyCode::Char('F') => self.set_filter(self.query.filter.prev()),
            KeyCode::Char('s') => self.set_sort(self.query.sort.next()),
            KeyCode::Char('S') => self.set_sort(self.query.sort.prev()),
            KeyCode::Char('c') => {
                self.query.clear_filters();
                self.refresh();
                BrowserEvent::Status("Filters cleared".to_string())
            }
            KeyCode::Enter => match self.results.get(self.selected) {
                Some(item) => BrowserEvent::Open(item.id().to_string()),
                None => BrowserEvent::None,
            },
            _ => BrowserEvent::None,
        }
    }

    fn set_filter(&mut self, filter: T::Filter) -> BrowserEvent {
        self.query.filter = filter;
        self.refresh();
        BrowserEvent::Status(format!("Filter: {}", filter.label()))
    }

    fn set_sort(&mut self, sort: T::Sort) -> BrowserEvent {
        self.query.sort = sort;
        self.refresh();
        BrowserEvent::Status(format!("Sort: {}", sort.label()))
    }

    fn refresh(&mut self) {
        self.results = self.query.apply(&self.items);
        if self.selected >= self.results.len() {
            self.selected = self.results.len().saturating_sub(1);
        }
    }

    /// Search box, selector line, and result heading.
    pub(crate) fn draw_controls(&self, f: &mut Frame, area: Rect, noun: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(1), // Filter / sort
                Constraint::Length(1), // Heading
            ])
            .split(area);

        let search = if self.query.search.is_empty() && !self.searching {
            Paragraph::new("press / to search").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.query.search.as_str())
        };
        f.render_widget(
            search.block(field_block("Search", true, self.searching)),
            chunks[0],
        );

        let selectors = Line::from(vec![
            Span::styled("Filter ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("< {} >", self.query.filter.label())),
            Span::styled("   Sort ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("< {} >", self.query.sort.label())),
        ]);
        f.render_widget(Paragraph::new(selectors), chunks[1]);

        let heading = Paragraph::new(results_heading(self.results.len(), noun))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(heading, chunks[2]);
    }

    /// Results as multi-line cards, or an empty state.
    pub(crate) fn draw_results<F>(&self, f: &mut Frame, area: Rect, title: &str, card: F)
    where
        F: Fn(&T) -> Vec<Line<'static>>,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "));

        if self.results.is_empty() {
            let empty = Paragraph::new("Nothing matches.\n\nPress 'c' to clear search and filter.")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = i == self.selected;
                let mut lines = card(item);
                if let Some(first) = lines.first_mut() {
                    first.spans.insert(0, Span::raw(row_prefix(selected)));
                }
                lines.push(Line::from(""));
                ListItem::new(lines).style(row_style(selected))
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomadplan_core::Catalog;
    use nomadplan_shared::{CoworkingSpace, Destination};

    fn destinations() -> Browser<Destination> {
        Browser::new(Catalog::mock().unwrap().destinations, "rating")
    }

    fn type_text(browser: &mut Browser<Destination>, text: &str) {
        browser.handle_key(KeyCode::Char('/'));
        for c in text.chars() {
            browser.handle_key(KeyCode::Char(c));
        }
        browser.handle_key(KeyCode::Enter);
    }

    #[test]
    fn typing_narrows_results() {
        let mut browser = destinations();
        assert_eq!(browser.results().len(), 2);
        type_text(&mut browser, "lisb");
        assert!(!browser.is_searching());
        assert_eq!(browser.results().len(), 1);
        assert_eq!(browser.results()[0].name, "Lisbon");
    }

    #[test]
    fn filter_cycles_and_clear_keeps_sort() {
        let mut browser = destinations();
        // All -> Beach -> Affordable -> Startup Friendly
        for _ in 0..3 {
            browser.handle_key(KeyCode::Char('f'));
        }
        assert_eq!(browser.results().len(), 1);

        let event = browser.handle_key(KeyCode::Char('s'));
        assert_eq!(event, BrowserEvent::Status("Sort: Lowest Cost".to_string()));

        browser.handle_key(KeyCode::Char('c'));
        let names: Vec<_> = browser.results().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Canggu", "Lisbon"]);
    }

    #[test]
    fn selection_is_clamped_after_narrowing() {
        let mut browser = destinations();
        browser.handle_key(KeyCode::Down);
        assert_eq!(browser.selected(), 1);
        type_text(&mut browser, "canggu");
        assert_eq!(browser.selected(), 0);
        assert_eq!(
            browser.handle_key(KeyCode::Enter),
            BrowserEvent::Open("2".to_string())
        );
    }

    #[test]
    fn enter_on_empty_results_does_nothing() {
        let mut browser = Browser::<CoworkingSpace>::new(
            Catalog::mock().unwrap().coworking_spaces,
            "price",
        );
        // All -> Budget -> Mid -> Premium
        for _ in 0..3 {
            browser.handle_key(KeyCode::Char('f'));
        }
        assert!(browser.results().is_empty());
        assert_eq!(browser.handle_key(KeyCode::Enter), BrowserEvent::None);
    }
}
