//=========================================================================
// Scene Timers
//=========================================================================
//
// Delays and repeating intervals owned by a single scene.
//
// Architecture:
//   after()/every() → entries (deadline, interval, event)
//                          ↓
//   advance(dt) → clock += dt
//                          ↓
//   pop_due() → earliest due event (deadline order, then schedule order)
//
// Timers are plain data: a scene owns its `Timers` and drains them in
// `update`. Dropping the scene drops every pending timer with it, so a
// timer can never fire on behalf of a scene that is no longer mounted.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== TimerId =============================================================

/// Handle returned when scheduling, used to cancel a single timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

//=== Entry ===============================================================

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    deadline: Duration,
    interval: Option<Duration>,
    event: E,
}

//=== Timers ==============================================================

/// Scene-local timer set with a manually advanced clock.
///
/// Events are popped one at a time so that a handler cancelling another
/// timer also suppresses that timer's occurrences still due in the same
/// frame.
///
/// ```
/// # use std::time::Duration;
/// # use aetheric_story::core::timer::Timers;
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Cue { Enter }
///
/// let mut timers = Timers::new();
/// timers.after(Duration::from_millis(1500), Cue::Enter);
///
/// timers.advance(Duration::from_millis(1000));
/// assert_eq!(timers.pop_due(), None);
///
/// timers.advance(Duration::from_millis(500));
/// assert_eq!(timers.pop_due(), Some(Cue::Enter));
/// ```
#[derive(Debug)]
pub struct Timers<E: Clone> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E: Clone> Timers<E> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty timer set with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    //--- Scheduling -------------------------------------------------------

    /// Schedules `event` to fire once, `delay` from now.
    pub fn after(&mut self, delay: Duration, event: E) -> TimerId {
        self.schedule(delay, None, event)
    }

    /// Schedules `event` to fire every `interval`, first after one interval.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn every(&mut self, interval: Duration, event: E) -> TimerId {
        assert!(!interval.is_zero(), "Timer interval must be positive");
        self.schedule(interval, Some(interval), event)
    }

    /// Cancels one timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    //--- Clock ------------------------------------------------------------

    /// Moves the clock forward. Due events are collected with [`Self::pop_due`].
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Pops the earliest event whose deadline has passed.
    ///
    /// Repeating timers are rescheduled one interval after their previous
    /// deadline, so a long frame yields every missed occurrence in order.
    pub fn pop_due(&mut self) -> Option<E> {
        let now = self.now;
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(index, _)| index)?;

        match self.entries[index].interval {
            Some(interval) => {
                let entry = &mut self.entries[index];
                entry.deadline += interval;
                Some(entry.event.clone())
            }
            None => Some(self.entries.swap_remove(index).event),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns true if the timer is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the number of scheduled timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time elapsed on this timer set's clock.
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    //--- Internal Helpers -------------------------------------------------

    fn schedule(&mut self, delay: Duration, interval: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: self.now + delay,
            interval,
            event,
        });
        id
    }
}

impl<E: Clone> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cue {
        A,
        B,
        Tick,
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(timers: &mut Timers<Cue>) -> Vec<Cue> {
        std::iter::from_fn(|| timers.pop_due()).collect()
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut timers = Timers::new();
        timers.after(ms(100), Cue::A);

        timers.advance(ms(99));
        assert!(drain(&mut timers).is_empty(), "Nothing is due before the deadline");

        timers.advance(ms(1));
        assert_eq!(drain(&mut timers), vec![Cue::A]);

        timers.advance(ms(1000));
        assert!(drain(&mut timers).is_empty(), "One-shot timers must not refire");
        assert!(timers.is_empty());
    }

    #[test]
    fn events_pop_in_deadline_order() {
        let mut timers = Timers::new();
        timers.after(ms(300), Cue::B);
        timers.after(ms(100), Cue::A);

        timers.advance(ms(500));
        assert_eq!(drain(&mut timers), vec![Cue::A, Cue::B]);
    }

    #[test]
    fn equal_deadlines_keep_schedule_order() {
        let mut timers = Timers::new();
        timers.after(ms(100), Cue::B);
        timers.after(ms(100), Cue::A);

        timers.advance(ms(100));
        assert_eq!(drain(&mut timers), vec![Cue::B, Cue::A]);
    }

    #[test]
    fn repeating_timer_catches_up_on_long_frames() {
        let mut timers = Timers::new();
        timers.every(ms(50), Cue::Tick);

        timers.advance(ms(175));
        assert_eq!(drain(&mut timers), vec![Cue::Tick; 3]);

        timers.advance(ms(25));
        assert_eq!(drain(&mut timers), vec![Cue::Tick], "Fourth tick lands at 200ms");
    }

    #[test]
    fn cancel_removes_single_timer() {
        let mut timers = Timers::new();
        let a = timers.after(ms(10), Cue::A);
        timers.after(ms(10), Cue::B);

        assert!(timers.cancel(a));
        assert!(!timers.cancel(a), "Second cancel reports nothing removed");
        assert!(!timers.is_pending(a));

        timers.advance(ms(10));
        assert_eq!(drain(&mut timers), vec![Cue::B]);
    }

    #[test]
    fn cancel_during_drain_suppresses_remaining_occurrences() {
        let mut timers = Timers::new();
        let tick = timers.every(ms(10), Cue::Tick);

        timers.advance(ms(50));
        assert_eq!(timers.pop_due(), Some(Cue::Tick));
        timers.cancel(tick);
        assert_eq!(timers.pop_due(), None, "Cancelled timer must not yield backlog");
    }

    #[test]
    fn cancel_all_prevents_any_future_event() {
        let mut timers = Timers::new();
        timers.after(ms(10), Cue::A);
        timers.every(ms(5), Cue::Tick);

        timers.cancel_all();
        timers.advance(ms(1000));

        assert!(drain(&mut timers).is_empty());
        assert_eq!(timers.len(), 0);
    }

    #[test]
    fn scheduling_is_relative_to_current_clock() {
        let mut timers = Timers::new();
        timers.advance(ms(1000));
        timers.after(ms(100), Cue::A);

        timers.advance(ms(99));
        assert!(drain(&mut timers).is_empty());
        timers.advance(ms(1));
        assert_eq!(drain(&mut timers), vec![Cue::A]);
        assert_eq!(timers.elapsed(), ms(1100));
    }

    #[test]
    #[should_panic(expected = "Timer interval must be positive")]
    fn every_panics_on_zero_interval() {
        let mut timers = Timers::new();
        timers.every(Duration::ZERO, Cue::Tick);
    }
}
