//! Toast notices: dismissible, each removed by its own timer after a fixed
//! lifetime.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    /// Milliseconds since the epoch.
    pub created_at: u64,
}

/// Ordered stack of live notices. Oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeStack {
    ttl_ms: u64,
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeStack {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            next_id: 1,
            notices: Vec::new(),
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: u64) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });
        id
    }

    /// Remove a notice. Removing one that is already gone is a no-op.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Default for NoticeStack {
    fn default() -> Self {
        NoticeStack::new(crate::config::NOTICE_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_coexist_in_order() {
        let mut stack = NoticeStack::default();
        let a = stack.push("one", Severity::Info, 0);
        let b = stack.push("two", Severity::Error, 10);
        assert_ne!(a, b);
        let messages: Vec<&str> = stack.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut stack = NoticeStack::new(5_000);
        let old = stack.push("old", Severity::Info, 0);
        let young = stack.push("young", Severity::Info, 3_000);
        assert!(stack.dismiss(old));
        assert_eq!(stack.iter().map(|n| n.id).collect::<Vec<_>>(), vec![young]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut stack = NoticeStack::new(5_000);
        let id = stack.push("bye", Severity::Info, 0);
        assert!(stack.dismiss(id));
        assert!(!stack.dismiss(id));
        assert!(stack.is_empty());
    }
}
