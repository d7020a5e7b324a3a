//! Closed option sets for filter and sort selectors.

use std::fmt::Debug;

use tracing::debug;

/// A closed set of options a user picks one of.
///
/// `OPTIONS` lists the selectable values in display order. [`Choice::from_key`]
/// never fails: unrecognized keys map to [`Choice::fallback`].
pub trait Choice: Copy + PartialEq + Debug + Default + 'static {
    /// Selectable values in display order.
    const OPTIONS: &'static [Self];

    /// Stable machine key, e.g. `startup-friendly`.
    fn key(self) -> &'static str;

    /// Human label, e.g. `Startup Friendly`.
    fn label(self) -> &'static str;

    /// Value used for keys that match no option.
    fn fallback() -> Self;

    fn from_key(key: &str) -> Self {
        let wanted = key.trim();
        Self::OPTIONS
            .iter()
            .copied()
            .find(|opt| opt.key().eq_ignore_ascii_case(wanted))
            .unwrap_or_else(|| {
                let fallback = Self::fallback();
                debug!(key = wanted, fallback = fallback.key(), "unrecognized option key");
                fallback
            })
    }

    /// The next option, wrapping around.
    fn next(self) -> Self {
        let opts = Self::OPTIONS;
        match opts.iter().position(|o| *o == self) {
            Some(i) => opts[(i + 1) % opts.len()],
            None => opts[0],
        }
    }

    /// The previous option, wrapping around.
    fn prev(self) -> Self {
        let opts = Self::OPTIONS;
        match opts.iter().position(|o| *o == self) {
            Some(i) => opts[(i + opts.len() - 1) % opts.len()],
            None => opts[opts.len() - 1],
        }
    }

    /// Comma-separated list of keys, for help text.
    fn keys_help() -> String {
        Self::OPTIONS
            .iter()
            .map(|o| o.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
