//! The work step run after a menu selection.
//!
//! There is no real work yet: [`SimulatedWork`] just waits. Anything that
//! implements [`Work`] can take its place.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::debug;

use crate::defaults::SIMULATED_WORK_DELAY;

/// A single long-running step, run once with no retries.
pub trait Work {
    fn run(&mut self) -> Result<()>;
}

impl<T: Work + ?Sized> Work for &mut T {
    fn run(&mut self) -> Result<()> {
        (**self).run()
    }
}

/// Placeholder work that sleeps for a fixed duration and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedWork {
    pub delay: Duration,
}

impl SimulatedWork {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedWork {
    fn default() -> Self {
        Self::new(SIMULATED_WORK_DELAY)
    }
}

impl Work for SimulatedWork {
    fn run(&mut self) -> Result<()> {
        debug!("simulating work for {:?}", self.delay);
        thread::sleep(self.delay);
        Ok(())
    }
}
