// SPDX-License-Identifier: MPL-2.0
//! Sheet actions and the ordered list that keeps Cancel last.

use std::fmt;
use std::sync::Arc;

type SecondaryTitleFn = Arc<dyn Fn(usize) -> String + Send + Sync>;
type HandlerFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Visual and behavioural role of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    /// Dismisses the sheet. At most one exists and it is always shown last.
    Cancel,
    Destructive,
}

/// Font weight hint for an action title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A row the user can tap below the preview strip.
///
/// Both closures receive the number of currently selected images. Cloning an
/// action shares its closures.
#[derive(Clone)]
pub struct Action {
    title: String,
    secondary_title: Option<SecondaryTitleFn>,
    style: ActionStyle,
    handler: HandlerFn,
}

impl Action {
    /// Creates an action whose title does not change with the selection.
    pub fn new<F>(title: impl Into<String>, style: ActionStyle, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            secondary_title: None,
            style,
            handler: Arc::new(handler),
        }
    }

    /// Sets the title shown once at least one image is selected.
    #[must_use]
    pub fn with_secondary_title<F>(mut self, secondary_title: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.secondary_title = Some(Arc::new(secondary_title));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title for the given selection count. Falls back to the primary title.
    #[must_use]
    pub fn secondary_title(&self, selected_count: usize) -> String {
        match &self.secondary_title {
            Some(secondary) => secondary(selected_count),
            None => self.title.clone(),
        }
    }

    /// Title to display: the secondary title once anything is selected.
    #[must_use]
    pub fn display_title(&self, selected_count: usize) -> String {
        if selected_count > 0 {
            self.secondary_title(selected_count)
        } else {
            self.title.clone()
        }
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn is_cancel(&self) -> bool {
        self.style == ActionStyle::Cancel
    }

    /// Invokes the handler with the number of selected images.
    pub fn handle(&self, selected_count: usize) {
        (self.handler)(selected_count);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_secondary_title", &self.secondary_title.is_some())
            .finish_non_exhaustive()
    }
}

/// Actions in display order.
///
/// Invariant: zero or one Cancel action, and if present it is last. Other
/// actions keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action.
    ///
    /// A Cancel action replaces any earlier Cancel action. Whatever Cancel
    /// action remains is moved to the end.
    pub fn add(&mut self, action: Action) {
        if action.is_cancel() {
            self.actions.retain(|existing| !existing.is_cancel());
        }

        self.actions.push(action);

        if let Some(index) = self.index_of_cancel() {
            let cancel = self.actions.remove(index);
            self.actions.push(cancel);
        }
    }

    #[must_use]
    pub fn all(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    #[must_use]
    pub fn index_of_cancel(&self) -> Option<usize> {
        self.actions.iter().position(Action::is_cancel)
    }

    #[must_use]
    pub fn cancel(&self) -> Option<&Action> {
        self.index_of_cancel().map(|index| &self.actions[index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::action;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn titles(list: &ActionList) -> Vec<&str> {
        list.all().iter().map(Action::title).collect()
    }

    #[test]
    fn cancel_added_first_ends_up_last() {
        let mut list = ActionList::new();
        list.add(action("Cancel", ActionStyle::Cancel));
        list.add(action("Take Photo", ActionStyle::Default));
        list.add(action("Delete", ActionStyle::Destructive));

        assert_eq!(titles(&list), ["Take Photo", "Delete", "Cancel"]);
        assert_eq!(list.index_of_cancel(), Some(2));
    }

    #[test]
    fn later_cancel_replaces_earlier_one() {
        let mut list = ActionList::new();
        list.add(action("Take Photo", ActionStyle::Default));
        list.add(action("Cancel", ActionStyle::Cancel));
        list.add(action("Photo Library", ActionStyle::Default));
        list.add(action("Dismiss", ActionStyle::Cancel));
        list.add(action("Close", ActionStyle::Cancel));

        assert_eq!(titles(&list), ["Take Photo", "Photo Library", "Close"]);
        let cancel_count = list.all().iter().filter(|a| a.is_cancel()).count();
        assert_eq!(cancel_count, 1);
        assert_eq!(list.all().last().map(Action::style), Some(ActionStyle::Cancel));
    }

    #[test]
    fn without_cancel_order_is_insertion_order() {
        let mut list = ActionList::new();
        list.add(action("A", ActionStyle::Default));
        list.add(action("B", ActionStyle::Destructive));
        list.add(action("C", ActionStyle::Default));

        assert_eq!(titles(&list), ["A", "B", "C"]);
        assert_eq!(list.index_of_cancel(), None);
        assert!(list.cancel().is_none());
    }

    #[test]
    fn display_title_switches_with_selection() {
        let add = Action::new("Photo Library", ActionStyle::Default, |_| {})
            .with_secondary_title(|count| format!("Add {count} Photos"));

        assert_eq!(add.display_title(0), "Photo Library");
        assert_eq!(add.display_title(3), "Add 3 Photos");
    }

    #[test]
    fn secondary_title_defaults_to_title() {
        let take = action("Take Photo", ActionStyle::Default);
        assert_eq!(take.display_title(2), "Take Photo");
    }

    #[test]
    fn handler_receives_selected_count() {
        let received = Arc::new(AtomicUsize::new(usize::MAX));
        let sink = Arc::clone(&received);
        let send = Action::new("Send", ActionStyle::Default, move |count| {
            sink.store(count, Ordering::SeqCst);
        });

        send.handle(4);

        assert_eq!(received.load(Ordering::SeqCst), 4);
    }
}
