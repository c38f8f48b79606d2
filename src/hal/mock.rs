//! Test doubles for the capability traits.

use super::rng::RandomSource;
use crate::animation::AnimationSink;
use crate::led::LedOutput;
use crate::personality::Mood;
use std::collections::VecDeque;

/// Returns a scripted sequence of draws. Panics when the script runs dry or
/// a scripted value falls outside the requested range, so a test notices
/// any unexpected consumption.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    pub calls: Vec<(u32, u32)>,
}

impl ScriptedRandom {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            calls: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.calls.push((low, high));
        let v = self
            .draws
            .pop_front()
            .expect("ScriptedRandom ran out of draws");
        assert!(
            v >= low && v < high,
            "scripted draw {} outside [{}, {})",
            v,
            low,
            high
        );
        v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Mood(Mood),
    Curiosity(bool),
    Frame,
}

/// Records every call it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == SinkCall::Frame).count()
    }

    /// Calls other than frame updates.
    pub fn state_calls(&self) -> Vec<SinkCall> {
        self.calls
            .iter()
            .filter(|c| **c != SinkCall::Frame)
            .cloned()
            .collect()
    }
}

impl AnimationSink for RecordingSink {
    fn set_mood(&mut self, mood: Mood) {
        self.calls.push(SinkCall::Mood(mood));
    }

    fn set_curiosity(&mut self, on: bool) {
        self.calls.push(SinkCall::Curiosity(on));
    }

    fn update_frame(&mut self) {
        self.calls.push(SinkCall::Frame);
    }
}

/// Keeps every level written to it.
#[derive(Debug, Default)]
pub struct RecordingLed {
    pub levels: Vec<u8>,
}

impl LedOutput for RecordingLed {
    fn set_level(&mut self, level: u8) {
        self.levels.push(level);
    }
}
