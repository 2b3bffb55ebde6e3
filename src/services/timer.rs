//! Per-question countdown
//!
//! The caller forwards one tick per elapsed second; the timer reports when
//! the allotment for the active question has run out.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    Running { remaining: u32 },
    Expired,
    /// Already expired or paused; the tick changed nothing.
    Idle,
}

#[derive(Debug, Clone)]
pub struct QuestionTimer {
    allotted: u32,
    remaining: u32,
    paused: bool,
}

impl QuestionTimer {
    pub fn new(allotted: u32) -> Self {
        QuestionTimer {
            allotted,
            remaining: allotted,
            paused: false,
        }
    }

    pub fn allotted(&self) -> u32 {
        self.allotted
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Restart the full allotment for a new question.
    pub fn reset(&mut self) {
        self.remaining = self.allotted;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn tick(&mut self) -> TimerTick {
        if self.paused || self.remaining == 0 {
            return TimerTick::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            TimerTick::Expired
        } else {
            TimerTick::Running {
                remaining: self.remaining,
            }
        }
    }
}
