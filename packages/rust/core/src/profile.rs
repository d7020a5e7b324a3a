//! Profile editing.
//!
//! The editor holds the saved profile and a working copy (the form). Edits
//! only touch the form; `save` commits it and `cancel` throws it away.

use chrono::{DateTime, Utc};
use nomadplan_client::UserPatch;
use nomadplan_shared::{PreferenceCategory, User, WorkType};
use tracing::debug;

/// Session-local profile editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    profile: User,
    form: User,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(profile: User) -> Self {
        Self {
            form: profile.clone(),
            profile,
            editing: false,
        }
    }

    /// The last saved profile.
    pub fn profile(&self) -> &User {
        &self.profile
    }

    /// The working copy.
    pub fn form(&self) -> &User {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// What the profile view shows: the form while editing, else the profile.
    pub fn view(&self) -> &User {
        if self.editing { &self.form } else { &self.profile }
    }

    /// Enter edit mode with a fresh copy of the profile.
    pub fn begin_edit(&mut self) {
        self.form = self.profile.clone();
        self.editing = true;
    }

    /// Toggle edit mode. Leaving edit mode this way discards the form.
    pub fn toggle_edit(&mut self) {
        if self.editing {
            self.cancel();
        } else {
            self.begin_edit();
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Empty text clears the field.
    pub fn set_location(&mut self, location: &str) {
        self.form.location = non_empty(location);
    }

    /// Empty text clears the field.
    pub fn set_bio(&mut self, bio: &str) {
        self.form.bio = non_empty(bio);
    }

    pub fn set_work_type(&mut self, work_type: WorkType) {
        self.form.work_type = work_type;
    }

    pub fn set_budget(&mut self, budget: u32) {
        self.form.budget = budget;
    }

    /// Parse a budget typed by the user. See [`parse_budget`].
    pub fn set_budget_input(&mut self, input: &str) {
        self.form.budget = parse_budget(input);
    }

    /// Add a preference value. Returns `false` when `value` is empty or
    /// already present.
    pub fn add_preference(&mut self, category: PreferenceCategory, value: &str) -> bool {
        let value = value.trim();
        let values = self.form.preferences.get_mut(category);
        if value.is_empty() || values.iter().any(|v| v == value) {
            return false;
        }
        values.push(value.to_string());
        true
    }

    /// Remove every occurrence of `value`. Returns `false` when it was absent.
    pub fn remove_preference(&mut self, category: PreferenceCategory, value: &str) -> bool {
        let values = self.form.preferences.get_mut(category);
        let before = values.len();
        values.retain(|v| v != value);
        values.len() != before
    }

    /// Flip `value` on or off.
    pub fn toggle_preference(&mut self, category: PreferenceCategory, value: &str) {
        if !self.remove_preference(category, value) {
            self.add_preference(category, value);
        }
    }

    /// Replace the profile with the form and leave edit mode.
    ///
    /// Returns the fields that changed, ready to send with
    /// `UsersApi::update`.
    pub fn save(&mut self) -> UserPatch {
        let patch = UserPatch::diff(&self.profile, &self.form);
        self.profile = self.form.clone();
        self.editing = false;
        debug!(changed = !patch.is_empty(), "profile saved");
        patch
    }

    /// Restore the form from the profile and leave edit mode.
    pub fn cancel(&mut self) {
        self.form = self.profile.clone();
        self.editing = false;
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Reads the leading whole number of `input`, ignoring whatever follows it,
/// so `"1500.75"` is 1500 and `"12abc"` is 12. No leading digits, a negative
/// sign, or a value past `u32::MAX` gives 0.
pub fn parse_budget(input: &str) -> u32 {
    let input = input.trim_start();
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    match rest[..end].parse::<u32>() {
        Ok(n) if !negative => n,
        _ => 0,
    }
}

/// The "Your Stats" panel. Only "Member Since" comes from the profile.
pub fn profile_stats(profile: &User) -> [(&'static str, String); 4] {
    [
        ("Countries Visited", "8".to_string()),
        ("Total Trips", "12".to_string()),
        ("Days Traveling", "365".to_string()),
        ("Member Since", member_since(profile.created_at)),
    ]
}

/// `Jan 2024`.
pub fn member_since(created_at: DateTime<Utc>) -> String {
    created_at.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn editor() -> ProfileEditor {
        ProfileEditor::new(Catalog::mock().unwrap().profile)
    }

    #[test]
    fn edits_stay_in_the_form_until_saved() {
        let mut ed = editor();
        ed.begin_edit();
        ed.set_name("Sam Rivera");
        assert_eq!(ed.view().name, "Sam Rivera");
        assert_eq!(ed.profile().name, "Alex Johnson");

        let patch = ed.save();
        assert!(!ed.is_editing());
        assert_eq!(ed.profile().name, "Sam Rivera");
        assert_eq!(patch.name.as_deref(), Some("Sam Rivera"));
        assert_eq!(patch.email, None);
    }

    #[test]
    fn cancel_restores_the_form() {
        let mut ed = editor();
        ed.begin_edit();
        ed.set_work_type(WorkType::Designer);
        ed.set_budget_input("3500");
        ed.cancel();
        assert_eq!(ed.form(), ed.profile());
        assert_eq!(ed.profile().work_type, WorkType::SoftwareDeveloper);
        assert_eq!(ed.profile().budget, 2000);
    }

    #[test]
    fn toggle_edit_discards_changes() {
        let mut ed = editor();
        ed.toggle_edit();
        assert!(ed.is_editing());
        ed.set_email("sam@example.com");
        ed.toggle_edit();
        assert!(!ed.is_editing());
        assert_eq!(ed.view().email, "alex@example.com");
    }

    #[test]
    fn save_without_changes_is_empty() {
        let mut ed = editor();
        ed.begin_edit();
        assert!(ed.save().is_empty());
    }

    #[test]
    fn preferences_ignore_empty_and_duplicates() {
        let mut ed = editor();
        ed.begin_edit();
        assert!(!ed.add_preference(PreferenceCategory::Climate, ""));
        assert!(!ed.add_preference(PreferenceCategory::Climate, "   "));
        assert!(!ed.add_preference(PreferenceCategory::Climate, "warm"));
        assert!(ed.add_preference(PreferenceCategory::Climate, "tropical"));
        assert_eq!(
            ed.form().preferences.climate,
            vec!["warm", "mild", "tropical"]
        );
    }

    #[test]
    fn remove_and_toggle_preferences() {
        let mut ed = editor();
        ed.begin_edit();
        assert!(ed.remove_preference(PreferenceCategory::Activities, "surfing"));
        assert!(!ed.remove_preference(PreferenceCategory::Activities, "surfing"));
        ed.toggle_preference(PreferenceCategory::WorkingStyle, "quiet");
        ed.toggle_preference(PreferenceCategory::WorkingStyle, "flexible");
        assert_eq!(
            ed.form().preferences.working_style,
            vec!["collaborative", "flexible"]
        );

        let patch = ed.save();
        assert!(patch.preferences.is_some());
    }

    #[test]
    fn lenient_budget_parsing() {
        assert_eq!(parse_budget("2500"), 2500);
        assert_eq!(parse_budget(" 42 "), 42);
        assert_eq!(parse_budget("abc"), 0);
        assert_eq!(parse_budget("-10"), 0);
        assert_eq!(parse_budget(""), 0);
        assert_eq!(parse_budget("1500.75"), 1500);
        assert_eq!(parse_budget("12abc"), 12);
        assert_eq!(parse_budget("+300"), 300);
        assert_eq!(parse_budget("$300"), 0);
        assert_eq!(parse_budget("99999999999"), 0);
    }

    #[test]
    fn budget_input_keeps_leading_number() {
        let mut ed = editor();
        ed.begin_edit();
        ed.set_budget_input("1800.50");
        assert_eq!(ed.form().budget, 1800);
    }

    #[test]
    fn blank_optional_fields_are_cleared() {
        let mut ed = editor();
        ed.begin_edit();
        ed.set_location("  ");
        ed.set_bio("Remote designer");
        assert_eq!(ed.form().location, None);
        assert_eq!(ed.form().bio.as_deref(), Some("Remote designer"));
    }

    #[test]
    fn clearing_bio_is_saved_as_a_change() {
        let mut ed = editor();
        ed.begin_edit();
        ed.set_bio("");
        let patch = ed.save();
        assert_eq!(patch.bio, Some(None));
        assert!(ed.profile().bio.is_none());
    }

    #[test]
    fn stats_panel() {
        let ed = editor();
        let stats = profile_stats(ed.profile());
        assert_eq!(stats[0], ("Countries Visited", "8".to_string()));
        assert_eq!(stats[3], ("Member Since", "Jan 2024".to_string()));
    }
}
