use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        use web_time::Instant;
    } else {
        use std::time::Instant;
    }
}

#[derive(Debug, Default)]
struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimersMap,
}

impl Stopwatch {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        //bank the running interval if this timer is active
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.subtimers.suspend();
        }
    }

    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.subtimers.resume();
        }
    }
}

#[derive(Debug, Default)]
struct SubTimersMap(HashMap<&'static str, Stopwatch>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, Stopwatch>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn start_subtimer(&mut self, key: &'static str) {
        self.entry(key).or_default().start();
    }

    fn suspend(&mut self) {
        for t in self.values_mut() {
            t.suspend();
        }
    }

    fn resume(&mut self) {
        for t in self.values_mut() {
            t.resume();
        }
    }

    fn total_time(&self) -> Duration {
        self.values().map(|t| t.elapsed).sum()
    }

    fn write_to(&self, out: &mut dyn std::io::Write, depth: usize) -> std::io::Result<()> {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort();
        for key in keys {
            let t = &self[key];
            writeln!(out, "{:indent$}{} : {:?}", "", key, t.elapsed, indent = 4 * depth)?;
            t.subtimers.write_to(out, depth + 1)?;
        }
        Ok(())
    }
}

/// A tree of named timers.
///
/// Timers are started as children of whichever timer is currently active,
/// so that nested `timeit!` blocks produce a breakdown of the solve.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn active_map(&mut self) -> &mut SubTimersMap {
        let mut map = &mut self.subtimers;
        for key in self.stack.iter() {
            map = &mut map.entry(*key).or_default().subtimers;
        }
        map
    }

    /// Clear all timers.  Any timer on the active stack is dropped.
    pub fn reset(&mut self) {
        self.stack.clear();
        for t in self.subtimers.values_mut() {
            t.reset();
        }
        self.subtimers.clear();
    }

    /// Start a timer named `key` as a child of the current timer.
    pub fn start_as_current(&mut self, key: &'static str) {
        self.active_map().start_subtimer(key);
        self.stack.push(key);
    }

    /// Stop the current timer.  Does nothing if no timer is active.
    pub fn stop_current(&mut self) {
        if let Some(key) = self.stack.pop() {
            if let Some(t) = self.active_map().get_mut(key) {
                t.stop();
            }
        }
    }

    //Suspend every timer in the collection.   Used for notimeit!
    pub fn suspend(&mut self) {
        self.subtimers.suspend();
    }

    //Resume every timer in the collection.   Used for notimeit!
    pub fn resume(&mut self) {
        self.subtimers.resume();
    }

    /// Elapsed time of a root timer.
    pub fn elapsed(&self, key: &str) -> Option<Duration> {
        self.subtimers.get(key).map(|t| t.elapsed)
    }

    pub fn total_time(&self) -> Duration {
        self.subtimers.total_time()
    }

    /// Write an indented breakdown of all timers.
    pub fn write_to(&self, out: &mut dyn std::io::Write) -> std::io::Result<()> {
        self.subtimers.write_to(out, 0)
    }
}

macro_rules! timeit {
    ($timer:expr => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:expr; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[test]
fn test_nested_timers() {
    let mut timers = Timers::default();
    timeit! {timers => "solve"; {
        timeit!{timers => "setup"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
        timeit!{timers => "search"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
    }}

    let solve = timers.elapsed("solve").unwrap();
    assert!(solve >= Duration::from_millis(4));
    assert_eq!(timers.total_time(), solve);
    assert!(timers.elapsed("setup").is_none()); // nested, not a root

    let mut out = Vec::new();
    timers.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("solve"));
    assert!(text.contains("    search"));

    timers.reset();
    assert_eq!(timers.total_time(), Duration::ZERO);
}
