use std::cell::Cell;
use std::rc::Rc;

pub const TICK_INTERVAL_MS: u32 = 75;
pub const TICK_PEAK_GAIN: f64 = 0.12;
pub const TICK_FULL_VELOCITY: f64 = 0.6;
pub const TICK_MIN_LEVEL: f64 = 0.15;
pub const TICK_BASE_PITCH_HZ: f64 = 130.0;
pub const TICK_PITCH_JITTER_HZ: f64 = 30.0;
pub const TICK_ATTACK_S: f64 = 0.01;
pub const TICK_RELEASE_S: f64 = 0.06;

pub const CHIME_START_HZ: f64 = 880.0;
pub const CHIME_END_HZ: f64 = 1320.0;
pub const CHIME_PEAK_GAIN: f64 = 0.18;
/// Exponential ramps cannot start from or reach zero.
pub const CHIME_FLOOR_GAIN: f64 = 0.0001;
pub const CHIME_ATTACK_S: f64 = 0.02;
pub const CHIME_SWEEP_S: f64 = 0.15;
pub const CHIME_DECAY_S: f64 = 0.65;
pub const CHIME_LENGTH_S: f64 = 0.7;

/// Live view of the wheel's angular velocity, shared with the tick timer.
#[derive(Debug, Clone, Default)]
pub struct VelocityGauge(Rc<Cell<f64>>);

impl VelocityGauge {
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, velocity: f64) {
        self.0.set(velocity);
    }
}

/// Sound hooks driven by the spin engine. Implementations must never panic:
/// a missing sound device only means a silent spin.
pub trait AudioFeedback {
    fn start_ticking(&mut self, velocity: VelocityGauge);

    /// Must be safe to call when not ticking.
    fn stop_ticking(&mut self);

    fn play_completion_chime(&mut self);
}

/// No-op audio for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioFeedback for SilentAudio {
    fn start_ticking(&mut self, _velocity: VelocityGauge) {}
    fn stop_ticking(&mut self) {}
    fn play_completion_chime(&mut self) {}
}

/// Peak gain of one tick pulse for the given angular velocity.
pub fn tick_gain(velocity: f64) -> f64 {
    let level = (velocity / TICK_FULL_VELOCITY).clamp(TICK_MIN_LEVEL, 1.0);
    TICK_PEAK_GAIN * level
}

/// Pulse pitch for a jitter sample in `[0, 1)`.
pub fn tick_pitch(jitter: f64) -> f64 {
    TICK_BASE_PITCH_HZ + jitter.clamp(0.0, 1.0) * TICK_PITCH_JITTER_HZ
}
