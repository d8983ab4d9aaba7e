//! Delete lifecycle of list rows.
//!
//! A row goes `Idle -> Deleting` when the user confirms, then either
//! `Deleted` (row leaves the visible list) or `DeleteFailed` (the caller must
//! reload the whole list from the backend). Only one delete runs at a time.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    Deleting,
    Deleted,
    DeleteFailed(String),
}

/// Rows that expose a backend identity.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for crate::model::subject::Subject {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for crate::model::student::Student {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for crate::model::grade::Grade {
    fn key(&self) -> i64 {
        self.id
    }
}

/// What the caller has to do after a failed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterFailure {
    Reload,
}

#[derive(Debug, Clone)]
pub struct DeletableList<T> {
    rows: Vec<T>,
    states: HashMap<i64, DeleteState>,
}

impl<T> Default for DeletableList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            states: HashMap::new(),
        }
    }
}

impl<T: Keyed> DeletableList<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            states: HashMap::new(),
        }
    }

    /// Replaces every row with freshly fetched data; all states reset to `Idle`.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.states.clear();
    }

    /// Rows still shown to the user.
    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.rows
            .iter()
            .filter(|row| self.state(row.key()) != &DeleteState::Deleted)
    }

    pub fn is_empty(&self) -> bool {
        self.visible().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.visible().count()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.visible().find(|row| row.key() == id)
    }

    pub fn state(&self, id: i64) -> &DeleteState {
        static IDLE: DeleteState = DeleteState::Idle;
        self.states.get(&id).unwrap_or(&IDLE)
    }

    pub fn is_busy(&self) -> bool {
        self.states.values().any(|s| *s == DeleteState::Deleting)
    }

    /// `Idle`/`DeleteFailed -> Deleting`. Refused for unknown rows, for rows
    /// already gone, and while another delete is in flight.
    pub fn begin(&mut self, id: i64) -> bool {
        if self.is_busy() || self.get(id).is_none() {
            return false;
        }
        self.states.insert(id, DeleteState::Deleting);
        true
    }

    /// `Deleting -> Deleted`; the row disappears from [`visible`](Self::visible).
    pub fn succeed(&mut self, id: i64) {
        if self.state(id) == &DeleteState::Deleting {
            self.states.insert(id, DeleteState::Deleted);
        }
    }

    /// `Deleting -> DeleteFailed`. A row in any other state is left alone and
    /// `None` comes back.
    pub fn fail(&mut self, id: i64, message: impl Into<String>) -> Option<AfterFailure> {
        if self.state(id) != &DeleteState::Deleting {
            return None;
        }
        self.states
            .insert(id, DeleteState::DeleteFailed(message.into()));
        Some(AfterFailure::Reload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i64);

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn successful_delete_hides_row() {
        let mut list = DeletableList::new(vec![Row(1), Row(2), Row(3)]);
        assert!(list.begin(2));
        assert_eq!(list.state(2), &DeleteState::Deleting);
        list.succeed(2);
        assert_eq!(list.visible().cloned().collect::<Vec<_>>(), vec![Row(1), Row(3)]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn only_one_delete_in_flight() {
        let mut list = DeletableList::new(vec![Row(1), Row(2)]);
        assert!(list.begin(1));
        assert!(!list.begin(2));
        list.succeed(1);
        assert!(list.begin(2));
    }

    #[test]
    fn failure_keeps_row_and_asks_for_reload() {
        let mut list = DeletableList::new(vec![Row(1)]);
        list.begin(1);
        assert_eq!(list.fail(1, "Error al eliminar el registro"), Some(AfterFailure::Reload));
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.state(1),
            &DeleteState::DeleteFailed("Error al eliminar el registro".into())
        );

        list.replace(vec![Row(1)]);
        assert_eq!(list.state(1), &DeleteState::Idle);
    }

    #[test]
    fn late_failure_does_not_revive_a_deleted_row() {
        let mut list = DeletableList::new(vec![Row(1), Row(2)]);
        list.begin(1);
        list.succeed(1);
        assert_eq!(list.fail(1, "late"), None);
        assert_eq!(list.state(1), &DeleteState::Deleted);
        assert_eq!(list.len(), 1);

        assert_eq!(list.fail(2, "never started"), None);
        assert_eq!(list.state(2), &DeleteState::Idle);
    }

    #[test]
    fn unknown_or_deleted_rows_cannot_start_a_delete() {
        let mut list = DeletableList::new(vec![Row(1)]);
        assert!(!list.begin(9));
        list.begin(1);
        list.succeed(1);
        assert!(!list.begin(1));
        assert!(list.is_empty());
    }
}
