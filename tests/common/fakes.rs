//! Recording fakes for ports the real adapters do not cover.

use std::cell::RefCell;

use tagtree::domain::ports::{Notice, Notifier};

/// Records every notice; confirmations return the configured answer.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
    confirmations: RefCell<Vec<String>>,
    answer: bool,
}

impl RecordingNotifier {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Error(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn confirm(&self, text: &str) -> bool {
        self.confirmations.borrow_mut().push(text.to_string());
        self.answer
    }
}
