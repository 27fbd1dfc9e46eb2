//! Forward stack
//!
//! Holds the pages left by `go_back` so `go_forward` can return to them:
//! - pushed on back, popped on forward
//! - cleared by any user-initiated navigation
//! - bounded; the oldest entries go first when the bound is exceeded

use crate::config::DEFAULT_MAX_FORWARD_DEPTH;
use crate::location::{NavigationRequest, OriginContext};
use crate::trace_log;
use crate::trail::BreadcrumbEntry;

/// A page that can be returned to with `go_forward`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardEntry {
    /// Breadcrumb of the page that was left
    pub entry: BreadcrumbEntry,
    /// Origin context the page was reached with
    pub origin: Option<OriginContext>,
}

impl ForwardEntry {
    /// Create a forward entry
    pub fn new(entry: BreadcrumbEntry, origin: Option<OriginContext>) -> Self {
        Self { entry, origin }
    }

    /// Request that brings the page back, origin included
    pub fn request(&self) -> NavigationRequest {
        NavigationRequest::new(&self.entry.path).with_state(self.origin.clone())
    }
}

/// Bounded LIFO of [`ForwardEntry`] values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardStack {
    entries: Vec<ForwardEntry>,
    /// Maximum depth (0 = unlimited)
    max_size: usize,
}

impl ForwardStack {
    /// Empty stack with the default bound
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_FORWARD_DEPTH)
    }

    /// Empty stack with a custom bound (0 = unlimited)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
        }
    }

    /// Push a page that was just left
    pub fn push(&mut self, entry: ForwardEntry) {
        self.entries.push(entry);
        self.enforce_size_limit();
    }

    /// Take the most recently left page
    pub fn pop(&mut self) -> Option<ForwardEntry> {
        self.entries.pop()
    }

    /// Most recently left page
    pub fn peek(&self) -> Option<&ForwardEntry> {
        self.entries.last()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            trace_log!("discarding {} forward entries", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &[ForwardEntry] {
        &self.entries
    }

    /// Breadcrumbs, oldest first
    pub fn breadcrumbs(&self) -> impl Iterator<Item = &BreadcrumbEntry> + '_ {
        self.entries.iter().map(|forward| &forward.entry)
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
        }
    }
}

impl Default for ForwardStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> ForwardEntry {
        ForwardEntry::new(BreadcrumbEntry::new(path, path), None)
    }

    #[test]
    fn test_stack_creation() {
        let stack = ForwardStack::new();
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = ForwardStack::new();
        stack.push(page("/a"));
        stack.push(page("/b"));

        assert_eq!(stack.peek().map(|f| f.entry.path.as_str()), Some("/b"));
        assert_eq!(stack.pop().map(|f| f.entry.path), Some("/b".to_string()));
        assert_eq!(stack.pop().map(|f| f.entry.path), Some("/a".to_string()));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_clear() {
        let mut stack = ForwardStack::new();
        stack.push(page("/a"));
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut stack = ForwardStack::with_max_size(2);
        stack.push(page("/a"));
        stack.push(page("/b"));
        stack.push(page("/c"));

        let paths: Vec<&str> = stack.breadcrumbs().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["/b", "/c"]);
    }

    #[test]
    fn test_unlimited_size() {
        let mut stack = ForwardStack::with_max_size(0);
        for index in 0..50 {
            stack.push(page(&format!("/page{index}")));
        }
        assert_eq!(stack.len(), 50);
    }

    #[test]
    fn test_request_carries_origin() {
        let origin = OriginContext::from_program("/programs/master-degree/ai", "AI Masters");
        let forward = ForwardEntry::new(
            BreadcrumbEntry::new("/schools/cs", "Computing & AI"),
            Some(origin.clone()),
        );
        let request = forward.request();
        assert_eq!(request.to, "/schools/cs");
        assert_eq!(request.state, Some(origin));
    }
}
