use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes to stderr so that stdout carries nothing but the report.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("[{}] {}", self.chronometer.elapsed(), value);
    }
}

/// Reports `done/total` for a labelled loop, once every `interval` steps and once at the end.
pub struct ProgressLogger<'a> {
    label: String,
    done: usize,
    total: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> ProgressLogger<'a> {
    pub fn new(label: impl Into<String>, total: usize, interval: usize, logger: &'a Logger) -> Self {
        Self {
            label: label.into(),
            done: 0,
            total,
            interval: interval.max(1),
            logger,
        }
    }

    fn due(&self) -> bool {
        self.done == self.total || self.done % self.interval == 0
    }

    pub fn step(&mut self) {
        self.done += 1;
        if self.due() {
            self.logger.log(format!("{} {}/{}", self.label, self.done, self.total));
        }
    }
}
