//! "Profile" screen: view and edit the session profile.

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::ProfileEditor;
use nomadplan_core::cards::format_usd;
use nomadplan_core::profile::profile_stats;
use nomadplan_shared::{PreferenceCategory, User};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::widgets::{field_block, hint};

/// Which part of the form is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Location,
    Bio,
    WorkType,
    Budget,
    Preference(PreferenceCategory),
}

impl Field {
    const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Location,
        Field::Bio,
        Field::WorkType,
        Field::Budget,
        Field::Preference(PreferenceCategory::Climate),
        Field::Preference(PreferenceCategory::Activities),
        Field::Preference(PreferenceCategory::WorkingStyle),
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Location => "Location",
            Self::Bio => "Bio",
            Self::WorkType => "Work Type",
            Self::Budget => "Monthly Budget",
            Self::Preference(category) => category.label(),
        }
    }

    fn is_text(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Location | Self::Bio | Self::Budget
        )
    }

    fn step(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

pub(crate) struct ProfileScreen {
    editor: ProfileEditor,
    focused: Field,
    typing: bool,
    buffer: String,
    /// Highlighted option in a preference row.
    option: usize,
}

impl ProfileScreen {
    pub(crate) fn new(profile: User) -> Self {
        Self {
            editor: ProfileEditor::new(profile),
            focused: Field::Name,
            typing: false,
            buffer: String::new(),
            option: 0,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.typing
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Details
                Constraint::Min(5),     // Preferences
                Constraint::Length(1),  // Hint
            ])
            .split(chunks[0]);

        self.draw_details(f, left[0]);
        self.draw_preferences(f, left[1]);

        let keys = if self.typing {
            "Type to edit · Enter/Esc done"
        } else if self.editor.is_editing() {
            "↑/↓ field · Enter type · ←/→ change · Space toggle · s save · Esc cancel"
        } else {
            "e edit profile"
        };
        f.render_widget(hint(keys), left[2]);

        self.draw_stats(f, chunks[1]);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect) {
        let user = self.editor.view();
        let editing = self.editor.is_editing();

        let rows = [
            (Field::Name, user.name.clone()),
            (Field::Email, user.email.clone()),
            (Field::Location, user.location.clone().unwrap_or_default()),
            (Field::Bio, user.bio.clone().unwrap_or_default()),
            (Field::WorkType, format!("< {} >", user.work_type)),
            (Field::Budget, format!("{}/mo", format_usd(user.budget))),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(field, value)| {
                let focused = editing && self.focused == field;
                let value = if focused && self.typing {
                    format!("{}▏", self.buffer)
                } else {
                    value
                };
                let style = match (focused, self.typing) {
                    (true, true) => Style::default().fg(Color::Yellow),
                    (true, false) => Style::default().fg(Color::Cyan),
                    _ => Style::default(),
                };
                Line::from(vec![
                    Span::styled(format!("{:<16}", field.label()), Style::default().fg(Color::DarkGray)),
                    Span::styled(value, style),
                ])
            })
            .collect();

        let title = format!("({}) {}", user.initial(), user.name);
        let details = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(field_block(&title, editing, false));
        f.render_widget(details, area);
    }

    fn draw_preferences(&self, f: &mut Frame, area: Rect) {
        let user = self.editor.view();
        let editing = self.editor.is_editing();
        let mut lines = Vec::new();

        for category in PreferenceCategory::ALL {
            let row_focused = editing && self.focused == Field::Preference(category);
            let chosen = user.preferences.get(category);
            lines.push(Line::styled(
                category.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ));

            let spans: Vec<Span> = if editing {
                category
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        let mark = if chosen.iter().any(|c| c == option) { "x" } else { " " };
                        let style = if row_focused && i == self.option {
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        Span::styled(format!(" [{mark}] {option} "), style)
                    })
                    .collect()
            } else if chosen.is_empty() {
                vec![Span::styled("  none", Style::default().fg(Color::DarkGray))]
            } else {
                vec![Span::styled(
                    format!("  {}", chosen.join(", ")),
                    Style::default().fg(Color::Green),
                )]
            };
            lines.push(Line::from(spans));
        }

        let prefs = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Travel Preferences "));
        f.render_widget(prefs, area);
    }

    fn draw_stats(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = profile_stats(self.editor.profile())
            .into_iter()
            .flat_map(|(label, value)| {
                [
                    Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                    Line::styled(label, Style::default().fg(Color::DarkGray)),
                    Line::from(""),
                ]
            })
            .collect();
        let stats = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Your Stats "));
        f.render_widget(stats, area);
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Option<String> {
        if self.typing {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.typing = false,
                KeyCode::Backspace => {
                    self.buffer.pop();
                    self.apply_buffer();
                }
                KeyCode::Char(c) => {
                    self.buffer.push(c);
                    self.apply_buffer();
                }
                _ => {}
            }
            return None;
        }

        if !self.editor.is_editing() {
            if code == KeyCode::Char('e') {
                self.editor.begin_edit();
                self.focused = Field::Name;
                return Some("Editing profile".to_string());
            }
            return None;
        }

        match code {
            KeyCode::Char('e') | KeyCode::Esc => {
                self.editor.cancel();
                return Some("Changes discarded".to_string());
            }
            KeyCode::Char('s') => {
                let patch = self.editor.save();
                let msg = if patch.is_empty() {
                    "No changes to save"
                } else {
                    "Profile saved"
                };
                return Some(msg.to_string());
            }
            KeyCode::Up | KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Down | KeyCode::Tab => self.move_focus(1),
            KeyCode::Enter if self.focused.is_text() => {
                self.buffer = self.current_text();
                self.typing = true;
            }
            KeyCode::Left | KeyCode::Right => self.change(code == KeyCode::Right),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Field::Preference(category) = self.focused {
                    if let Some(option) = category.options().get(self.option) {
                        self.editor.toggle_preference(category, option);
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn move_focus(&mut self, delta: isize) {
        self.focused = self.focused.step(delta);
        self.option = 0;
    }

    fn change(&mut self, forward: bool) {
        match self.focused {
            Field::WorkType => {
                let current = self.editor.form().work_type;
                let next = if forward { current.next() } else { current.prev() };
                self.editor.set_work_type(next);
            }
            Field::Preference(category) => {
                let len = category.options().len();
                self.option = if forward {
                    (self.option + 1) % len
                } else {
                    (self.option + len - 1) % len
                };
            }
            _ => {}
        }
    }

    fn current_text(&self) -> String {
        let form = self.editor.form();
        match self.focused {
            Field::Name => form.name.clone(),
            Field::Email => form.email.clone(),
            Field::Location => form.location.clone().unwrap_or_default(),
            Field::Bio => form.bio.clone().unwrap_or_default(),
            Field::Budget => form.budget.to_string(),
            Field::WorkType | Field::Preference(_) => String::new(),
        }
    }

    fn apply_buffer(&mut self) {
        let text = self.buffer.as_str();
        match self.focused {
            Field::Name => self.editor.set_name(text),
            Field::Email => self.editor.set_email(text),
            Field::Location => self.editor.set_location(text),
            Field::Bio => self.editor.set_bio(text),
            Field::Budget => self.editor.set_budget_input(text),
            Field::WorkType | Field::Preference(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomadplan_core::Catalog;
    use nomadplan_shared::WorkType;

    fn press(screen: &mut ProfileScreen, code: KeyCode) -> Option<String> {
        screen.handle_key(code, KeyModifiers::NONE)
    }

    fn screen() -> ProfileScreen {
        ProfileScreen::new(Catalog::mock().unwrap().profile)
    }

    #[test]
    fn typing_a_budget_and_saving() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        for _ in 0..5 {
            press(&mut screen, KeyCode::Down);
        }
        assert_eq!(screen.focused, Field::Budget);

        press(&mut screen, KeyCode::Enter);
        assert!(screen.is_editing());
        for _ in 0..4 {
            press(&mut screen, KeyCode::Backspace);
        }
        for c in "3x".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.editor.form().budget, 0);

        let status = press(&mut screen, KeyCode::Char('s'));
        assert_eq!(status.as_deref(), Some("Profile saved"));
        assert_eq!(screen.editor.profile().budget, 0);
    }

    #[test]
    fn escape_discards_work_type_change() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        for _ in 0..4 {
            press(&mut screen, KeyCode::Down);
        }
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.editor.form().work_type, WorkType::Designer);

        press(&mut screen, KeyCode::Esc);
        assert!(!screen.editor.is_editing());
        assert_eq!(screen.editor.profile().work_type, WorkType::SoftwareDeveloper);
    }

    #[test]
    fn space_toggles_preference_options() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        // Up from Name wraps to Working Style.
        press(&mut screen, KeyCode::Up);
        assert_eq!(
            screen.focused,
            Field::Preference(PreferenceCategory::WorkingStyle)
        );

        // quiet -> collaborative -> flexible
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Char(' '));
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Char(' '));
        press(&mut screen, KeyCode::Char('s'));

        assert_eq!(
            screen.editor.profile().preferences.working_style,
            vec!["quiet", "flexible"]
        );
    }

    #[test]
    fn saving_without_changes() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        let status = press(&mut screen, KeyCode::Char('s'));
        assert_eq!(status.as_deref(), Some("No changes to save"));
    }
}
