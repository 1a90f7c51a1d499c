use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::audio::{AudioFeedback, VelocityGauge};
use crate::constants::SEGMENT_LABEL_MAX_CHARS;
use crate::error::{Error, Result};
use crate::name_list::ParticipantList;
use crate::selection::pick_second_winner;
use crate::week_label::WeekLabel;

/// Tuning for the spin animation. Velocities are radians per display frame (~60 Hz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinConfig {
    pub min_velocity: f64,
    pub max_velocity: f64,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    /// Per-frame damping at the start of the main phase.
    pub base_damping: f64,
    /// How much the damping factor drops as the eased progress reaches 1.
    pub damping_ease_drop: f64,
    pub settle_frames: u32,
    pub settle_damping: f64,
    /// Pointer position in the un-rotated wheel frame (top of the wheel).
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_velocity: 0.70,
            max_velocity: 1.05,
            min_duration_ms: 2800.0,
            max_duration_ms: 3700.0,
            base_damping: 0.995,
            damping_ease_drop: 0.008,
            settle_frames: 26,
            settle_damping: 0.92,
            pointer_angle: -FRAC_PI_2,
        }
    }
}

impl SpinConfig {
    /// Rejects tunings the engine cannot animate. Swapped min/max pairs are
    /// accepted; sampling orders them.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_velocity", self.min_velocity),
            ("max_velocity", self.max_velocity),
            ("min_duration_ms", self.min_duration_ms),
            ("max_duration_ms", self.max_duration_ms),
            ("base_damping", self.base_damping),
            ("damping_ease_drop", self.damping_ease_drop),
            ("settle_damping", self.settle_damping),
            ("pointer_angle", self.pointer_angle),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidSpinConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.min_velocity.min(self.max_velocity) <= 0.0 {
            return Err(Error::InvalidSpinConfig("velocities must be positive".to_string()));
        }
        Ok(())
    }
}

/// Uniform sample from the closed range spanned by `a` and `b`, in either order.
fn sample_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if low == high {
        low
    } else {
        rng.gen_range(low..=high)
    }
}

/// Eased-progress input for a spin; a non-positive duration counts as already elapsed.
fn spin_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Rotation state read by rendering and audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    /// Radians, unbounded; accumulates across spins until reset.
    pub rotation_angle: f64,
    pub angular_velocity: f64,
    pub is_spinning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning { started_at_ms: f64, duration_ms: f64 },
    Settling { frames_left: u32 },
}

/// Outcome of one completed spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub conductor_name: String,
    pub conductor_index: usize,
    pub vip_name: String,
    pub vip_index: usize,
}

/// Identifies one spin. Frames carrying an older ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Spinning,
    Settling,
    Finished(SpinResult),
    /// The ticket was cancelled or the engine is idle; nothing changed.
    Stale,
}

impl FrameOutcome {
    pub fn needs_next_frame(&self) -> bool {
        matches!(self, Self::Spinning | Self::Settling)
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Maps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Index of the segment under the pointer for a wheel of `segments` equal slices.
pub fn winning_index(rotation_angle: f64, segments: usize, pointer_angle: f64) -> Option<usize> {
    if segments == 0 || !rotation_angle.is_finite() {
        return None;
    }
    let slice = TAU / segments as f64;
    let index = (normalize_angle(pointer_angle - rotation_angle) / slice).floor() as usize;
    Some(index.min(segments - 1))
}

/// Label drawn on a wheel segment; long names are cut with an ellipsis.
pub fn segment_label(name: &str) -> String {
    if name.chars().count() > SEGMENT_LABEL_MAX_CHARS {
        let cut: String = name.chars().take(SEGMENT_LABEL_MAX_CHARS).collect();
        format!("{}…", cut)
    } else {
        name.to_string()
    }
}

/// Owns the wheel for one operator session: the loaded names, the rotation
/// and the Idle -> Spinning -> Settling -> Idle state machine.
///
/// Frames are pushed in by the host through [`SpinEngine::advance_frame`], so
/// the whole animation can be stepped synchronously.
pub struct SpinEngine<A, R = SmallRng> {
    config: SpinConfig,
    state: WheelState,
    phase: SpinPhase,
    participants: ParticipantList,
    last_result: Option<SpinResult>,
    week: WeekLabel,
    generation: u64,
    gauge: VelocityGauge,
    audio: A,
    rng: R,
}

impl<A: AudioFeedback> SpinEngine<A, SmallRng> {
    pub fn new(config: SpinConfig, audio: A) -> Self {
        Self::with_rng(config, audio, SmallRng::from_entropy())
    }
}

impl<A: AudioFeedback, R: Rng> SpinEngine<A, R> {
    pub fn with_rng(config: SpinConfig, audio: A, rng: R) -> Self {
        Self {
            config,
            state: WheelState::default(),
            phase: SpinPhase::Idle,
            participants: ParticipantList::default(),
            last_result: None,
            week: WeekLabel::current(),
            generation: 0,
            gauge: VelocityGauge::default(),
            audio,
            rng,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SpinPhase::Idle
    }

    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn week(&self) -> &WeekLabel {
        &self.week
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn can_spin(&self) -> bool {
        self.is_idle() && self.participants.can_spin()
    }

    /// Replaces the name list. Any running spin is dropped and the wheel
    /// returns to its starting orientation.
    pub fn load_participants(&mut self, participants: ParticipantList) {
        self.cancel();
        self.state.rotation_angle = 0.0;
        self.last_result = None;
        log::debug!("Loaded {} participants", participants.len());
        self.participants = participants;
    }

    /// Starts a spin if the wheel is idle, has at least two names and a usable
    /// config. Returns `None` (and changes nothing) otherwise.
    pub fn start_spin(&mut self, now_ms: f64) -> Option<SpinTicket> {
        if !self.can_spin() {
            log::debug!(
                "Spin request ignored (phase: {:?}, names: {})",
                self.phase,
                self.participants.len()
            );
            return None;
        }
        if let Err(e) = self.config.validate() {
            log::error!("Spin request rejected: {}", e);
            return None;
        }

        let config = &self.config;
        let velocity = sample_between(&mut self.rng, config.min_velocity, config.max_velocity);
        let duration_ms =
            sample_between(&mut self.rng, config.min_duration_ms, config.max_duration_ms);

        self.generation += 1;
        self.state.angular_velocity = velocity;
        self.state.is_spinning = true;
        self.gauge.set(velocity);
        self.phase = SpinPhase::Spinning { started_at_ms: now_ms, duration_ms };

        log::debug!(
            "Spin started: velocity {:.3} rad/frame, duration {:.0} ms",
            velocity,
            duration_ms
        );
        self.audio.start_ticking(self.gauge.clone());
        Some(SpinTicket(self.generation))
    }

    /// Advances the animation by one display frame.
    pub fn advance_frame(&mut self, ticket: SpinTicket, now_ms: f64) -> FrameOutcome {
        if ticket.0 != self.generation {
            return FrameOutcome::Stale;
        }

        match self.phase {
            SpinPhase::Idle => FrameOutcome::Stale,
            SpinPhase::Spinning { started_at_ms, duration_ms } => {
                let t = spin_progress(now_ms - started_at_ms, duration_ms);
                let damping =
                    self.config.base_damping - ease_out_cubic(t) * self.config.damping_ease_drop;
                self.step(damping);

                if t < 1.0 {
                    return FrameOutcome::Spinning;
                }
                if self.config.settle_frames == 0 {
                    return self.finish();
                }
                log::debug!("Spin settling at velocity {:.4}", self.state.angular_velocity);
                self.phase = SpinPhase::Settling { frames_left: self.config.settle_frames };
                FrameOutcome::Settling
            }
            SpinPhase::Settling { frames_left } => {
                self.step(self.config.settle_damping);
                let frames_left = frames_left.saturating_sub(1);
                if frames_left == 0 {
                    return self.finish();
                }
                self.phase = SpinPhase::Settling { frames_left };
                FrameOutcome::Settling
            }
        }
    }

    /// Stops everything immediately: no further frame of the current spin has
    /// any effect. Zeroes the wheel, clears the result and refreshes the week.
    pub fn reset(&mut self) {
        self.cancel();
        self.state.rotation_angle = 0.0;
        self.last_result = None;
        self.week = WeekLabel::current();
        log::debug!("Wheel reset for {}", self.week);
    }

    /// Segment currently under the pointer.
    pub fn current_winning_index(&self) -> Option<usize> {
        winning_index(self.state.rotation_angle, self.participants.len(), self.config.pointer_angle)
    }

    fn step(&mut self, damping: f64) {
        self.state.rotation_angle += self.state.angular_velocity;
        self.state.angular_velocity *= damping;
        self.gauge.set(self.state.angular_velocity);
    }

    fn cancel(&mut self) {
        self.generation += 1;
        self.audio.stop_ticking();
        self.halt();
    }

    fn halt(&mut self) {
        self.state.angular_velocity = 0.0;
        self.state.is_spinning = false;
        self.gauge.set(0.0);
        self.phase = SpinPhase::Idle;
    }

    fn finish(&mut self) -> FrameOutcome {
        self.audio.stop_ticking();
        self.halt();

        let Some(result) = self.draw_winners() else {
            return FrameOutcome::Stale;
        };

        self.audio.play_completion_chime();
        log::info!(
            "Draw complete: conductor {:?}, VIP {:?}",
            result.conductor_name,
            result.vip_name
        );
        self.last_result = Some(result.clone());
        FrameOutcome::Finished(result)
    }

    fn draw_winners(&mut self) -> Option<SpinResult> {
        let Some(conductor_index) = self.current_winning_index() else {
            log::error!(
                "Spin finished with no pointer position (angle {})",
                self.state.rotation_angle
            );
            return None;
        };
        let Some((vip_name, vip_index)) =
            pick_second_winner(&self.participants, conductor_index, &mut self.rng)
        else {
            log::error!("Spin finished with fewer than two participants");
            return None;
        };
        let conductor_name = self.participants.get(conductor_index)?.to_string();

        Some(SpinResult {
            conductor_name,
            conductor_index,
            vip_name: vip_name.to_string(),
            vip_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::name_list::parse_names;
    use crate::share_link::{build_share_url, decode_share_url};
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Default)]
    struct RecordingAudio {
        starts: u32,
        stops: u32,
        chimes: u32,
        gauge: Option<VelocityGauge>,
    }

    impl AudioFeedback for RecordingAudio {
        fn start_ticking(&mut self, velocity: VelocityGauge) {
            self.starts += 1;
            self.gauge = Some(velocity);
        }

        fn stop_ticking(&mut self) {
            self.stops += 1;
        }

        fn play_completion_chime(&mut self) {
            self.chimes += 1;
        }
    }

    fn engine_with(names: &str, seed: u64) -> SpinEngine<RecordingAudio, StdRng> {
        engine_with_config(names, seed, SpinConfig::default())
    }

    fn engine_with_config(
        names: &str,
        seed: u64,
        config: SpinConfig,
    ) -> SpinEngine<RecordingAudio, StdRng> {
        let mut engine =
            SpinEngine::with_rng(config, RecordingAudio::default(), StdRng::seed_from_u64(seed));
        engine.load_participants(parse_names(names, false));
        engine
    }

    /// Runs a spin to completion and returns the result plus the frame count.
    fn run_to_end<A: AudioFeedback, R: Rng>(
        engine: &mut SpinEngine<A, R>,
        ticket: SpinTicket,
        start_ms: f64,
    ) -> (SpinResult, usize) {
        let mut now = start_ms;
        for frame in 1..10_000 {
            now += FRAME_MS;
            match engine.advance_frame(ticket, now) {
                FrameOutcome::Finished(result) => return (result, frame),
                FrameOutcome::Stale => panic!("spin went stale at frame {}", frame),
                _ => {}
            }
        }
        panic!("spin never finished");
    }

    #[test]
    fn test_winning_index_known_positions() {
        let pointer = -FRAC_PI_2;
        // Un-rotated, the top of a 4-slice wheel is the last slice.
        assert_eq!(winning_index(-0.1, 4, pointer), Some(3));
        assert_eq!(winning_index(-PI / 4.0, 4, pointer), Some(3));
        assert_eq!(winning_index(PI / 4.0, 4, pointer), Some(2));
        assert_eq!(winning_index(3.0 * PI / 4.0, 4, pointer), Some(1));
        assert_eq!(winning_index(5.0 * PI / 4.0, 4, pointer), Some(0));
        assert_eq!(winning_index(5.0 * PI / 4.0 + TAU * 3.0, 4, pointer), Some(0));
        assert_eq!(winning_index(1.0, 0, pointer), None);
        assert_eq!(winning_index(f64::NAN, 3, pointer), None);
    }

    #[test]
    fn test_winning_index_is_pure_and_in_range() {
        let angles = [0.0, 1e-12, -1e-12, 3.3, -7.9, 1234.5678, -98765.4321, 1e9, TAU * 1000.0];
        for n in 1..=12 {
            for &angle in &angles {
                let first = winning_index(angle, n, -FRAC_PI_2).unwrap();
                assert!(first < n);
                assert_eq!(winning_index(angle, n, -FRAC_PI_2), Some(first));
            }
        }
    }

    #[test]
    fn test_normalize_angle_range() {
        for a in [-1e-17, -TAU, TAU, 0.0, 5.0 * TAU + 0.5, -3.0] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{} -> {}", a, n);
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_segment_label_truncation() {
        assert_eq!(segment_label("Ann"), "Ann");
        assert_eq!(segment_label("Bartholomew Jones-Smith"), "Bartholomew Jones-…");
        assert_eq!(segment_label("ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ"), "ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ");
    }

    #[test]
    fn test_spin_needs_two_names() {
        let mut engine = engine_with("Solo", 1);
        assert_eq!(engine.start_spin(0.0), None);
        assert!(engine.is_idle());
        assert_eq!(engine.audio().starts, 0);

        let mut empty = engine_with("", 1);
        assert_eq!(empty.start_spin(0.0), None);
    }

    #[test]
    fn test_spin_request_while_spinning_is_rejected() {
        let mut engine = engine_with("Ann\nBen\nCal", 2);
        let ticket = engine.start_spin(0.0).unwrap();
        engine.advance_frame(ticket, FRAME_MS);
        assert_eq!(engine.start_spin(FRAME_MS), None);
        assert_eq!(engine.audio().starts, 1);
        assert!(engine.advance_frame(ticket, 2.0 * FRAME_MS).needs_next_frame());
    }

    #[test]
    fn test_full_spin_ends_idle_with_distinct_winners() {
        for seed in 0..20 {
            let mut engine = engine_with("Ann\nBen\nCal", seed);
            let ticket = engine.start_spin(1000.0).unwrap();
            assert!(engine.state().is_spinning);

            let (result, frames) = run_to_end(&mut engine, ticket, 1000.0);
            let max_frames = (3700.0 / FRAME_MS).ceil() as usize + 26 + 2;
            assert!(frames <= max_frames, "took {} frames", frames);

            let state = engine.state();
            assert!(engine.is_idle());
            assert!(!state.is_spinning);
            assert_eq!(state.angular_velocity, 0.0);

            let names = ["Ann", "Ben", "Cal"];
            assert!(names.contains(&result.conductor_name.as_str()));
            assert!(names.contains(&result.vip_name.as_str()));
            assert_ne!(result.conductor_name, result.vip_name);
            assert_eq!(engine.current_winning_index(), Some(result.conductor_index));
            assert_eq!(engine.last_result(), Some(&result));

            assert_eq!(engine.audio().chimes, 1);
            assert!(engine.audio().stops >= 1);
        }
    }

    #[test]
    fn test_end_to_end_share_link() {
        let mut engine = engine_with("Ann\nBen\nCal", 11);
        let ticket = engine.start_spin(0.0).unwrap();
        let (result, _) = run_to_end(&mut engine, ticket, 0.0);

        let week = engine.week().to_string();
        let url = build_share_url(
            "https://draw.example.org/",
            &week,
            &result.conductor_name,
            &result.vip_name,
        )
        .unwrap();
        let query = decode_share_url(&url).unwrap();
        assert_eq!(query.week.as_deref(), Some(week.as_str()));
        assert_eq!(query.conductor.as_deref(), Some(result.conductor_name.as_str()));
        assert_eq!(query.vip.as_deref(), Some(result.vip_name.as_str()));
    }

    #[test]
    fn test_velocity_only_decreases() {
        let mut engine = engine_with("Ann\nBen\nCal\nDee", 5);
        let ticket = engine.start_spin(0.0).unwrap();
        let initial = engine.state().angular_velocity;
        assert!((0.70..=1.05).contains(&initial));

        let mut previous = initial;
        let mut previous_angle = engine.state().rotation_angle;
        let mut now = 0.0;
        loop {
            now += FRAME_MS;
            let outcome = engine.advance_frame(ticket, now);
            if !outcome.needs_next_frame() {
                break;
            }
            let state = engine.state();
            assert!(state.angular_velocity < previous);
            assert!(state.rotation_angle > previous_angle);
            previous = state.angular_velocity;
            previous_angle = state.rotation_angle;
        }
        // The settle phase leaves the wheel nearly still before it stops.
        assert!(previous < initial * 0.2, "velocity before stop was {}", previous);
    }

    #[test]
    fn test_gauge_tracks_velocity_and_settles_to_zero() {
        let mut engine = engine_with("Ann\nBen", 9);
        let ticket = engine.start_spin(0.0).unwrap();
        engine.advance_frame(ticket, FRAME_MS);
        let gauge = engine.audio().gauge.clone().unwrap();
        assert_eq!(gauge.get(), engine.state().angular_velocity);

        run_to_end(&mut engine, ticket, FRAME_MS);
        assert_eq!(gauge.get(), 0.0);
    }

    #[test]
    fn test_settle_phase_runs_configured_frames() {
        let mut engine = engine_with("Ann\nBen", 3);
        let ticket = engine.start_spin(0.0).unwrap();
        // Jump past the duration: the main phase ends on this frame.
        assert_eq!(engine.advance_frame(ticket, 10_000.0), FrameOutcome::Settling);
        for _ in 0..25 {
            assert_eq!(engine.advance_frame(ticket, 10_000.0), FrameOutcome::Settling);
        }
        assert!(matches!(engine.advance_frame(ticket, 10_000.0), FrameOutcome::Finished(_)));
        assert_eq!(engine.advance_frame(ticket, 10_000.0), FrameOutcome::Stale);
    }

    #[test]
    fn test_reset_mid_spin_cancels_everything() {
        let mut engine = engine_with("Ann\nBen\nCal", 4);
        let ticket = engine.start_spin(0.0).unwrap();
        for i in 1..=30 {
            engine.advance_frame(ticket, i as f64 * FRAME_MS);
        }
        let stops_before = engine.audio().stops;
        engine.reset();
        assert!(engine.audio().stops > stops_before);

        // Frames scheduled before the reset still arrive.
        for i in 31..=1000 {
            assert_eq!(engine.advance_frame(ticket, i as f64 * FRAME_MS), FrameOutcome::Stale);
        }
        assert!(engine.last_result().is_none());
        assert_eq!(engine.audio().chimes, 0);
        assert!(engine.is_idle());
        assert_eq!(engine.state(), WheelState::default());
    }

    #[test]
    fn test_reset_settling_spin_cancels() {
        let mut engine = engine_with("Ann\nBen\nCal", 4);
        let ticket = engine.start_spin(0.0).unwrap();
        engine.advance_frame(ticket, 10_000.0);
        assert!(matches!(engine.phase(), SpinPhase::Settling { .. }));
        engine.reset();
        assert_eq!(engine.advance_frame(ticket, 10_020.0), FrameOutcome::Stale);
        assert_eq!(engine.audio().chimes, 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = engine_with("Ann\nBen\nCal", 6);
        let ticket = engine.start_spin(0.0).unwrap();
        run_to_end(&mut engine, ticket, 0.0);
        assert!(engine.state().rotation_angle != 0.0);

        engine.reset();
        let snapshot = |e: &SpinEngine<RecordingAudio, StdRng>| {
            (e.state(), e.phase(), e.last_result().cloned(), e.week().clone())
        };
        let once = snapshot(&engine);
        engine.reset();
        let twice = snapshot(&engine);
        assert_eq!(once, twice);
        assert_eq!(once.0.rotation_angle, 0.0);
        assert_eq!(once.1, SpinPhase::Idle);
        assert!(once.2.is_none());
    }

    #[test]
    fn test_new_spin_after_reset_gets_fresh_ticket() {
        let mut engine = engine_with("Ann\nBen\nCal", 8);
        let old = engine.start_spin(0.0).unwrap();
        engine.reset();
        let fresh = engine.start_spin(100.0).unwrap();
        assert_ne!(old, fresh);
        assert_eq!(engine.advance_frame(old, 120.0), FrameOutcome::Stale);
        assert!(engine.advance_frame(fresh, 120.0).needs_next_frame());
    }

    #[test]
    fn test_loading_names_cancels_spin() {
        let mut engine = engine_with("Ann\nBen\nCal", 12);
        let ticket = engine.start_spin(0.0).unwrap();
        engine.advance_frame(ticket, FRAME_MS);
        engine.load_participants(parse_names("Dee, Eve", false));

        assert_eq!(engine.advance_frame(ticket, 2.0 * FRAME_MS), FrameOutcome::Stale);
        assert_eq!(engine.state().rotation_angle, 0.0);
        assert_eq!(engine.participants().len(), 2);
        assert_eq!(engine.audio().chimes, 0);
        assert!(engine.can_spin());
    }

    #[test]
    fn test_rotation_accumulates_across_spins() {
        let mut engine = engine_with("Ann\nBen\nCal", 13);
        let ticket = engine.start_spin(0.0).unwrap();
        run_to_end(&mut engine, ticket, 0.0);
        let after_first = engine.state().rotation_angle;

        let ticket = engine.start_spin(10_000.0).unwrap();
        run_to_end(&mut engine, ticket, 10_000.0);
        assert!(engine.state().rotation_angle > after_first);
    }

    #[test]
    fn test_silent_audio_engine_runs() {
        let mut engine = SpinEngine::new(SpinConfig::default(), SilentAudio);
        engine.load_participants(parse_names("Ann;Ben", true));
        let ticket = engine.start_spin(0.0).unwrap();
        let (result, _) = run_to_end(&mut engine, ticket, 0.0);
        assert_ne!(result.conductor_index, result.vip_index);
    }

    #[test]
    fn test_zero_duration_spin_still_draws() {
        let config = SpinConfig {
            min_duration_ms: 0.0,
            max_duration_ms: 0.0,
            ..SpinConfig::default()
        };
        let mut engine = engine_with_config("Ann\nBen\nCal", 21, config);
        let ticket = engine.start_spin(0.0).unwrap();

        // Both frames land on the start timestamp.
        assert_eq!(engine.advance_frame(ticket, 0.0), FrameOutcome::Settling);
        let (result, frames) = run_to_end(&mut engine, ticket, 0.0);

        assert_eq!(frames, 26);
        assert!(engine.state().rotation_angle.is_finite());
        assert_ne!(result.conductor_index, result.vip_index);
        assert_eq!(engine.last_result(), Some(&result));
        assert_eq!(engine.audio().chimes, 1);
    }

    #[test]
    fn test_swapped_ranges_are_sampled_in_order() {
        let config = SpinConfig {
            min_velocity: 1.05,
            max_velocity: 0.70,
            min_duration_ms: 3700.0,
            max_duration_ms: 2800.0,
            ..SpinConfig::default()
        };
        let mut engine = engine_with_config("Ann\nBen\nCal", 22, config);
        let ticket = engine.start_spin(0.0).unwrap();

        let velocity = engine.state().angular_velocity;
        assert!((0.70..=1.05).contains(&velocity));
        match engine.phase() {
            SpinPhase::Spinning { duration_ms, .. } => {
                assert!((2800.0..=3700.0).contains(&duration_ms))
            }
            other => panic!("unexpected phase {:?}", other),
        }
        run_to_end(&mut engine, ticket, 0.0);
    }

    #[test]
    fn test_non_finite_config_refuses_to_spin() {
        let config = SpinConfig { max_duration_ms: f64::NAN, ..SpinConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidSpinConfig(_))));

        let mut engine = engine_with_config("Ann\nBen\nCal", 23, config);
        assert!(engine.start_spin(0.0).is_none());
        assert!(engine.is_idle());
        assert_eq!(engine.audio().starts, 0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SpinConfig::default().validate().is_ok());
    }
}
