//! Deadline-ordered timer queue.
//!
//! Entries fire in deadline order. Entries sharing a deadline fire in the
//! order they were scheduled.

use crate::time::Instant;
use core_types::DeliveryId;
use std::collections::BTreeMap;

/// A fired timer entry
#[derive(Debug, Clone, PartialEq)]
pub struct TimerEntry<T> {
    /// Identifier assigned at scheduling time
    pub id: DeliveryId,
    /// Instant the entry became due
    pub deadline: Instant,
    /// Scheduled item
    pub item: T,
}

/// Timer queue keyed by (deadline, insertion sequence)
///
/// There is no cancellation: once scheduled, an entry either fires or is
/// dropped with the queue.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    next_seq: u64,
    entries: BTreeMap<(Instant, u64), (DeliveryId, T)>,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Schedules an item to fire at `deadline`
    pub fn schedule(&mut self, deadline: Instant, item: T) -> DeliveryId {
        let id = DeliveryId::new();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((deadline, seq), (id, item));
        id
    }

    /// Removes and returns the earliest entry due at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerEntry<T>> {
        let (&(deadline, _), _) = self.entries.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.entries
            .pop_first()
            .map(|((deadline, _), (id, item))| TimerEntry { id, deadline, item })
    }

    /// Deadline of the earliest pending entry
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Deadline of the latest pending entry
    pub fn last_deadline(&self) -> Option<Instant> {
        self.entries.keys().next_back().map(|(deadline, _)| *deadline)
    }

    /// Returns the number of pending entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pending entries in firing order
    pub fn iter(&self) -> impl Iterator<Item = (Instant, DeliveryId, &T)> {
        self.entries
            .iter()
            .map(|((deadline, _), (id, item))| (*deadline, *id, item))
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: u64) -> Instant {
        Instant::from_nanos(millis * 1_000_000)
    }

    #[test]
    fn test_nothing_due_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(at(500), "a");

        assert!(queue.pop_due(at(499)).is_none());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(at(500)).unwrap().item, "a");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_deadlines_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(at(500), "first");
        queue.schedule(at(500), "second");
        queue.schedule(at(500), "third");

        assert_eq!(queue.pop_due(at(500)).unwrap().item, "first");
        assert_eq!(queue.pop_due(at(500)).unwrap().item, "second");
        assert_eq!(queue.pop_due(at(500)).unwrap().item, "third");
    }

    #[test]
    fn test_earlier_deadline_fires_first() {
        let mut queue = TimerQueue::new();
        queue.schedule(at(900), "late");
        queue.schedule(at(100), "early");

        assert_eq!(queue.next_deadline(), Some(at(100)));
        assert_eq!(queue.last_deadline(), Some(at(900)));
        assert_eq!(queue.pop_due(at(1000)).unwrap().item, "early");
        assert_eq!(queue.pop_due(at(1000)).unwrap().item, "late");
    }

    #[test]
    fn test_entry_ids_match_schedule() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(at(10), 42);
        let fired = queue.pop_due(at(10)).unwrap();
        assert_eq!(fired.id, id);
        assert_eq!(fired.deadline, at(10));
    }

    #[test]
    fn test_iter_in_firing_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(at(30), 'c');
        queue.schedule(at(10), 'a');
        queue.schedule(at(20), 'b');

        let items: Vec<char> = queue.iter().map(|(_, _, item)| *item).collect();
        assert_eq!(items, vec!['a', 'b', 'c']);
    }
}
