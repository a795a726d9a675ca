//! Scheduled Refresh
//!
//! Owns at most one repeating timer. Starting again replaces the previous
//! timer; stopping (or dropping) cancels it.

use gloo_timers::callback::Interval;

/// Source of repeating timers. Dropping the returned handle cancels it.
pub trait Schedule {
    type Handle;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` through gloo-timers
pub struct IntervalSchedule;

impl Schedule for IntervalSchedule {
    type Handle = Interval;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        web_sys::console::log_1(&format!("[Poller] Started, every {} ms", period_ms).into());
        Interval::new(period_ms, on_tick)
    }
}

pub struct Poller<S: Schedule = IntervalSchedule> {
    schedule: S,
    period_ms: u32,
    active: Option<S::Handle>,
}

impl Poller {
    pub fn new(period_ms: u32) -> Self {
        Self::with_schedule(IntervalSchedule, period_ms)
    }
}

impl<S: Schedule> Poller<S> {
    pub fn with_schedule(schedule: S, period_ms: u32) -> Self {
        Self { schedule, period_ms, active: None }
    }

    pub fn start<F>(&mut self, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        self.active = Some(self.schedule.every(self.period_ms, Box::new(on_tick)));
    }

    pub fn stop(&mut self) {
        // dropping the handle clears the timer
        self.active = None;
    }
}

impl<S: Schedule> Drop for Poller<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts live timers and keeps the latest callback so ticks can be fired by hand
    #[derive(Clone, Default)]
    struct ManualSchedule {
        live: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
        last_period: Rc<Cell<u32>>,
        callback: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
    }

    struct ManualHandle(Rc<Cell<usize>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Schedule for ManualSchedule {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> ManualHandle {
            self.live.set(self.live.get() + 1);
            self.started.set(self.started.get() + 1);
            self.last_period.set(period_ms);
            *self.callback.borrow_mut() = Some(on_tick);
            ManualHandle(self.live.clone())
        }
    }

    impl ManualSchedule {
        fn fire(&self) {
            if let Some(cb) = self.callback.borrow_mut().as_mut() {
                cb();
            }
        }
    }

    #[test]
    fn test_restart_keeps_one_timer() {
        let schedule = ManualSchedule::default();
        let mut poller = Poller::with_schedule(schedule.clone(), 4_000);

        poller.start(|| {});
        poller.start(|| {});
        assert_eq!(schedule.started.get(), 2);
        assert_eq!(schedule.live.get(), 1);
        assert_eq!(schedule.last_period.get(), 4_000);

        poller.stop();
        assert_eq!(schedule.live.get(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let schedule = ManualSchedule::default();
        {
            let mut poller = Poller::with_schedule(schedule.clone(), 4_000);
            poller.start(|| {});
            assert_eq!(schedule.live.get(), 1);
        }
        assert_eq!(schedule.live.get(), 0);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let schedule = ManualSchedule::default();
        let mut poller = Poller::with_schedule(schedule.clone(), 4_000);
        poller.stop();
        assert_eq!(schedule.started.get(), 0);
        assert_eq!(schedule.live.get(), 0);
    }

    #[test]
    fn test_ticks_reach_callback() {
        let schedule = ManualSchedule::default();
        let mut poller = Poller::with_schedule(schedule.clone(), 4_000);
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        poller.start(move || counter.set(counter.get() + 1));

        schedule.fire();
        schedule.fire();
        assert_eq!(ticks.get(), 2);
    }
}
