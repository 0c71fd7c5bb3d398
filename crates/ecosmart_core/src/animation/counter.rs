//! Counter tasks and the scheduler that ticks them.

use super::format::group_thousands;
use log::debug;

/// One rendered step of a counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub text: String,
    pub finished: bool,
}

/// Linear 0 -> target interpolation over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTask {
    target: i64,
    start_ms: f64,
    duration_ms: f64,
    finished: bool,
}

impl CounterTask {
    pub fn new(target: i64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Normalized progress in `[0, 1]`; timestamps before start count as 0.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.target == 0 || self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Computes the frame for `now_ms`, flooring toward negative infinity.
    pub fn tick(&mut self, now_ms: f64, separator: char) -> CounterFrame {
        let progress = self.progress(now_ms);
        let value = if progress >= 1.0 {
            self.target
        } else {
            ((self.target as f64) * progress).floor() as i64
        };
        self.finished = progress >= 1.0;
        CounterFrame {
            value,
            text: group_thousands(value, separator),
            finished: self.finished,
        }
    }
}

/// Drives every active counter from one frame callback.
#[derive(Debug, Clone)]
pub struct CounterAnimator<K> {
    tasks: Vec<(K, CounterTask)>,
    duration_ms: f64,
    separator: char,
}

impl<K: Clone> CounterAnimator<K> {
    pub fn new(duration_ms: f64, separator: char) -> Self {
        Self {
            tasks: Vec::new(),
            duration_ms,
            separator,
        }
    }

    /// Registers a counter whose clock starts at `now_ms`.
    pub fn start(&mut self, key: K, target: i64, now_ms: f64) {
        self.tasks
            .push((key, CounterTask::new(target, now_ms, self.duration_ms)));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` once every counter has finished; no more frames are needed.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advances all counters and drops the ones that reached their target.
    pub fn tick(&mut self, now_ms: f64) -> Vec<(K, CounterFrame)> {
        let separator = self.separator;
        let frames = self
            .tasks
            .iter_mut()
            .map(|(key, task)| (key.clone(), task.tick(now_ms, separator)))
            .collect::<Vec<_>>();
        let before = self.tasks.len();
        self.tasks.retain(|(_, task)| !task.is_finished());
        if self.tasks.len() != before {
            debug!(
                "event=counter_finished module=animation status=ok finished={} remaining={}",
                before - self.tasks.len(),
                self.tasks.len()
            );
        }
        frames
    }
}
