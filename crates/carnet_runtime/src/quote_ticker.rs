//! Typewriter rotation over the active quotes from the content feed.

use std::time::Duration;

use platform_host::QuoteItem;

pub const TYPE_DELAY: Duration = Duration::from_millis(60);
pub const DELETE_DELAY: Duration = Duration::from_millis(40);
pub const HOLD_FULL: Duration = Duration::from_millis(7000);
pub const HOLD_EMPTY: Duration = Duration::from_millis(500);

pub const EMPTY_FEED_QUOTE: &str = "no quotes in the database yet. add some in the content feed.";
pub const FAILED_FEED_QUOTE: &str = "could not load quotes from the backend (check console).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerPhase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTicker {
    quotes: Vec<String>,
    index: usize,
    shown_chars: usize,
    phase: TickerPhase,
}

impl Default for QuoteTicker {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl QuoteTicker {
    pub fn new(quotes: Vec<String>) -> Self {
        Self {
            quotes,
            index: 0,
            shown_chars: 0,
            phase: TickerPhase::Typing,
        }
    }

    /// Builds the rotation from a feed result. Inactive and blank quotes are dropped; an empty
    /// or failed feed yields a single explanatory line.
    pub fn from_feed(feed: Result<Vec<QuoteItem>, String>) -> Self {
        let quotes: Vec<String> = match feed {
            Ok(items) => items
                .into_iter()
                .filter(|item| item.active && !item.text.trim().is_empty())
                .map(|item| item.text)
                .collect(),
            Err(err) => {
                leptos::logging::warn!("quote feed failed: {err}");
                vec![FAILED_FEED_QUOTE.to_string()]
            }
        };
        if quotes.is_empty() {
            return Self::new(vec![EMPTY_FEED_QUOTE.to_string()]);
        }
        Self::new(quotes)
    }

    /// Nothing to show until a feed has been applied.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn phase(&self) -> TickerPhase {
        self.phase
    }

    pub fn current_quote(&self) -> Option<&str> {
        self.quotes
            .get(self.index % self.quotes.len().max(1))
            .map(String::as_str)
    }

    /// Prefix of the current quote that is visible right now.
    pub fn display_text(&self) -> String {
        self.current_quote()
            .map(|quote| quote.chars().take(self.shown_chars).collect())
            .unwrap_or_default()
    }

    /// Delay before the next [`advance`](Self::advance); `None` while there are no quotes.
    pub fn next_delay(&self) -> Option<Duration> {
        let quote_len = self.current_quote()?.chars().count();
        Some(match self.phase {
            TickerPhase::Typing if self.shown_chars < quote_len => TYPE_DELAY,
            TickerPhase::Typing => HOLD_FULL,
            TickerPhase::Deleting if self.shown_chars > 0 => DELETE_DELAY,
            TickerPhase::Deleting => HOLD_EMPTY,
        })
    }

    /// Performs the step that [`next_delay`](Self::next_delay) was waiting for.
    pub fn advance(&mut self) {
        let Some(quote_len) = self.current_quote().map(|quote| quote.chars().count()) else {
            return;
        };
        match self.phase {
            TickerPhase::Typing if self.shown_chars < quote_len => self.shown_chars += 1,
            TickerPhase::Typing => self.phase = TickerPhase::Deleting,
            TickerPhase::Deleting if self.shown_chars > 0 => self.shown_chars -= 1,
            TickerPhase::Deleting => {
                self.index = (self.index + 1) % self.quotes.len();
                self.shown_chars = 0;
                self.phase = TickerPhase::Typing;
            }
        }
    }
}

/// Inline style tinting the ticker with the active page's card colours.
pub fn ticker_style(active_page: &str) -> String {
    format!(
        "color: var(--{active_page}-card-text-color); text-shadow: 0 2px 4px var(--{active_page}-card-color);"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn quote(text: &str, active: bool) -> QuoteItem {
        QuoteItem {
            text: text.to_string(),
            active,
        }
    }

    #[test]
    fn types_holds_deletes_then_moves_on() {
        let mut ticker = QuoteTicker::new(vec!["hé".to_string(), "yo".to_string()]);
        assert_eq!(ticker.next_delay(), Some(TYPE_DELAY));
        ticker.advance();
        assert_eq!(ticker.display_text(), "h");
        ticker.advance();
        assert_eq!(ticker.display_text(), "hé");
        assert_eq!(ticker.next_delay(), Some(HOLD_FULL));

        ticker.advance();
        assert_eq!(ticker.phase(), TickerPhase::Deleting);
        assert_eq!(ticker.next_delay(), Some(DELETE_DELAY));
        ticker.advance();
        ticker.advance();
        assert_eq!(ticker.display_text(), "");
        assert_eq!(ticker.next_delay(), Some(HOLD_EMPTY));

        ticker.advance();
        assert_eq!(ticker.phase(), TickerPhase::Typing);
        assert_eq!(ticker.current_quote(), Some("yo"));
    }

    #[test]
    fn rotation_wraps_to_the_first_quote() {
        let mut ticker = QuoteTicker::new(vec!["a".to_string()]);
        // type, hold, delete, rest
        for _ in 0..4 {
            ticker.advance();
        }
        assert_eq!(ticker.current_quote(), Some("a"));
        assert_eq!(ticker.phase(), TickerPhase::Typing);
        assert_eq!(ticker.display_text(), "");
    }

    #[test]
    fn feed_drops_inactive_and_blank_quotes() {
        let ticker = QuoteTicker::from_feed(Ok(vec![
            quote("off", false),
            quote("  ", true),
            quote("on", true),
        ]));
        assert_eq!(ticker.current_quote(), Some("on"));
    }

    #[test]
    fn empty_or_failed_feed_shows_an_explanation() {
        assert_eq!(
            QuoteTicker::from_feed(Ok(Vec::new())).current_quote(),
            Some(EMPTY_FEED_QUOTE)
        );
        assert_eq!(
            QuoteTicker::from_feed(Err("offline".to_string())).current_quote(),
            Some(FAILED_FEED_QUOTE)
        );
    }

    #[test]
    fn unloaded_ticker_is_inert() {
        let mut ticker = QuoteTicker::default();
        assert!(ticker.is_empty());
        assert_eq!(ticker.next_delay(), None);
        ticker.advance();
        assert_eq!(ticker.display_text(), "");
    }

    #[test]
    fn style_follows_the_active_page() {
        assert_eq!(
            ticker_style("moon"),
            "color: var(--moon-card-text-color); text-shadow: 0 2px 4px var(--moon-card-color);"
        );
    }
}
