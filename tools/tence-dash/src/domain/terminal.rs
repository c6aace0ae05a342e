//! Command terminal session: pending input plus an append-only log.
//!
//! Commands are not interpreted. Every submission echoes the command and
//! appends a fixed placeholder response; a real executor would sit behind
//! [`TerminalSession::submit`].

use std::collections::VecDeque;

/// Prefix of the echoed command line.
pub const ECHO_PREFIX: &str = "> ";

/// Stub reply appended after every echoed command.
pub const PLACEHOLDER_RESPONSE: &str = "Response: ...";

/// Entries appended per submission (echo + response).
const ENTRIES_PER_SUBMIT: usize = 2;

/// Terminal log and input buffer.
#[derive(Debug, Clone, Default)]
pub struct TerminalSession {
    log: VecDeque<String>,
    pending: String,
    /// Optional cap on retained entries. `None` keeps everything.
    max_entries: Option<usize>,
    submitted: usize,
}

impl TerminalSession {
    /// Unbounded session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that evicts the oldest submissions beyond `max_entries`.
    ///
    /// Eviction removes whole echo/response pairs, so the cap is rounded up
    /// to hold at least one submission.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(ENTRIES_PER_SUBMIT)),
            ..Self::default()
        }
    }

    /// Echo `command`, append the placeholder response, clear pending input.
    pub fn submit(&mut self, command: &str) {
        self.log.push_back(format!("{}{}", ECHO_PREFIX, command));
        self.log.push_back(PLACEHOLDER_RESPONSE.to_string());
        self.submitted += 1;
        self.pending.clear();

        if let Some(max) = self.max_entries {
            while self.log.len() > max {
                for _ in 0..ENTRIES_PER_SUBMIT {
                    self.log.pop_front();
                }
            }
        }

        tracing::debug!(
            command_len = command.len(),
            log_len = self.log.len(),
            "Terminal command submitted"
        );
    }

    /// Submit whatever is in the pending buffer.
    pub fn submit_pending(&mut self) {
        let command = std::mem::take(&mut self.pending);
        self.submit(&command);
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_input(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    /// Log entries, oldest first.
    pub fn log(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.log.iter().map(String::as_str)
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Number of submissions this session, including evicted ones.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(session: &TerminalSession) -> Vec<&str> {
        session.log().collect()
    }

    #[test]
    fn test_submit_appends_echo_then_response() {
        let mut session = TerminalSession::new();
        session.submit("status");
        assert_eq!(log_of(&session), vec!["> status", "Response: ..."]);

        session.submit("go");
        assert_eq!(
            log_of(&session),
            vec!["> status", "Response: ...", "> go", "Response: ..."]
        );
    }

    #[test]
    fn test_submit_clears_pending() {
        let mut session = TerminalSession::new();
        session.set_pending_input("deploy");
        session.submit_pending();
        assert_eq!(session.pending_input(), "");
        assert_eq!(log_of(&session)[0], "> deploy");
    }

    #[test]
    fn test_empty_command_is_accepted() {
        let mut session = TerminalSession::new();
        session.submit_pending();
        assert_eq!(log_of(&session), vec!["> ", "Response: ..."]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut session = TerminalSession::new();
        for i in 0..500 {
            session.submit(&i.to_string());
        }
        assert_eq!(session.log_len(), 1000);
        assert_eq!(session.max_entries(), None);
    }

    #[test]
    fn test_cap_evicts_whole_pairs() {
        let mut session = TerminalSession::with_max_entries(5);
        for cmd in ["a", "b", "c", "d"] {
            session.submit(cmd);
        }
        assert_eq!(
            log_of(&session),
            vec!["> c", "Response: ...", "> d", "Response: ..."]
        );
        assert_eq!(session.submitted(), 4);
    }

    #[test]
    fn test_cap_keeps_at_least_one_submission() {
        let mut session = TerminalSession::with_max_entries(0);
        session.submit("x");
        session.submit("y");
        assert_eq!(log_of(&session), vec!["> y", "Response: ..."]);
    }
}
