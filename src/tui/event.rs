use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Blocking event source: key presses interleaved with a steady tick.
///
/// Nothing here runs in the background, so a poll-based loop is enough;
/// the tick only drives flash-message expiry.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next event. Returns `Tick` when the tick interval
    /// elapses without input.
    pub fn next(&mut self) -> anyhow::Result<Event> {
        loop {
            let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let event::Event::Key(key) = event::read()? {
                    // Filter for Press only (Windows compatibility)
                    if key.kind == KeyEventKind::Press {
                        return Ok(Event::Key(key));
                    }
                }
            } else {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
        }
    }
}
