//! Per-document classification session
//!
//! A [`Session`] owns the one piece of cross-line state in the engine: the
//! doc-string flag. It starts out "outside" and flips on every delimiter
//! line seen. The flag has no self-correcting mechanism, so a session is
//! only correct for forward, document-ordered invocation; a host that needs
//! to re-classify from an arbitrary point re-creates the session and replays
//! from the top of the document.
//!
//! Sessions are independent of each other, so separate documents can be
//! classified concurrently from separate threads.
//!
//! The session also owns the change-notification surface the rendering layer
//! subscribes to. The core itself never emits: classification is pure
//! request/response, and only the external buffer-tracking layer knows when
//! a span went stale and calls [`Session::invalidate`].

use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use super::classify::classify_line;
use super::token::Token;

/// Handler invoked when classification results for a character range become
/// stale.
pub type InvalidationHandler = Box<dyn Fn(Range<usize>) + Send>;

/// A classification session for one open document.
pub struct Session {
    in_doc_string: bool,
    invalidation_handlers: Vec<InvalidationHandler>,
}

impl Session {
    /// Create a session for a freshly opened document, outside any
    /// doc-string block.
    pub fn new() -> Self {
        Self {
            in_doc_string: false,
            invalidation_handlers: Vec::new(),
        }
    }

    /// Whether the session is currently inside a doc-string block.
    pub fn in_doc_string(&self) -> bool {
        self.in_doc_string
    }

    /// Classify a single line given the absolute character offset of its
    /// first character.
    pub fn classify_line(&mut self, text: &str, line_start: usize) -> Vec<Token> {
        classify_line(text, line_start, &mut self.in_doc_string)
    }

    /// Classify a range of lines supplied in increasing document order.
    ///
    /// Each item pairs a line's text (without its terminator) with the
    /// absolute character offset of its first character. The output
    /// concatenates each line's tokens in input order.
    ///
    /// Classification is total: an unexpected fault on a line discards that
    /// line's partial work and ends the call with the tokens accumulated so
    /// far, so the caller's rendering pass is never aborted.
    pub fn classify_lines<'a>(
        &mut self,
        lines: impl IntoIterator<Item = (&'a str, usize)>,
    ) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (text, line_start) in lines {
            let line_tokens =
                panic::catch_unwind(AssertUnwindSafe(|| self.classify_line(text, line_start)));
            match line_tokens {
                Ok(line_tokens) => tokens.extend(line_tokens),
                Err(_) => break,
            }
        }
        tokens
    }

    /// Register a handler for stale-range notifications.
    pub fn on_invalidated(&mut self, handler: InvalidationHandler) {
        self.invalidation_handlers.push(handler);
    }

    /// Report that classification results for `range` (absolute character
    /// offsets) are stale. Called by the buffer-tracking layer after edits;
    /// every registered handler observes the range.
    pub fn invalidate(&self, range: Range<usize>) {
        for handler in &self.invalidation_handlers {
            handler(range.clone());
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::new();
        let mut second = Session::new();

        first.classify_line("\"\"\"", 0);
        assert!(first.in_doc_string());
        assert!(!second.in_doc_string());

        let tokens = second.classify_line("Given a thing", 0);
        assert!(!tokens.is_empty());
    }

    #[test]
    fn test_invalidate_reaches_every_handler() {
        let seen = Arc::new(AtomicUsize::new(0));
        let mut session = Session::new();
        for _ in 0..3 {
            let seen = Arc::clone(&seen);
            session.on_invalidated(Box::new(move |range| {
                assert_eq!(range, 5..20);
                seen.fetch_add(1, Ordering::SeqCst);
            }));
        }

        session.invalidate(5..20);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
