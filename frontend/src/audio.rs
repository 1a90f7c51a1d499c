use gloo_timers::callback::Interval;
use shared::audio::*;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

/// Web Audio ticking and chime for the wheel.
///
/// The `AudioContext` is created on first use and reused. Every failure is
/// logged and swallowed so a blocked or missing sound device never affects a spin.
#[derive(Default)]
pub struct WebAudioFeedback {
    context: Option<AudioContext>,
    ticker: Option<Ticker>,
}

struct Ticker {
    oscillator: OscillatorNode,
    gain: GainNode,
    _interval: Interval,
}

impl WebAudioFeedback {
    fn context(&mut self) -> Option<AudioContext> {
        if self.context.is_none() {
            match AudioContext::new() {
                Ok(context) => self.context = Some(context),
                Err(e) => {
                    log::warn!("Audio unavailable: {:?}", e);
                    return None;
                }
            }
        }

        let context = self.context.clone()?;
        if context.state() == AudioContextState::Suspended {
            if let Err(e) = context.resume() {
                log::warn!("Failed to resume audio: {:?}", e);
            }
        }
        Some(context)
    }
}

impl AudioFeedback for WebAudioFeedback {
    fn start_ticking(&mut self, velocity: VelocityGauge) {
        self.stop_ticking();
        let Some(context) = self.context() else {
            return;
        };
        match start_ticker(&context, velocity) {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => log::warn!("Failed to start tick sound: {:?}", e),
        }
    }

    fn stop_ticking(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            #[allow(deprecated)]
            let _ = ticker.oscillator.stop();
            let _ = ticker.gain.disconnect();
        }
    }

    fn play_completion_chime(&mut self) {
        let Some(context) = self.context() else {
            return;
        };
        if let Err(e) = play_chime(&context) {
            log::warn!("Failed to play chime: {:?}", e);
        }
    }
}

fn start_ticker(context: &AudioContext, velocity: VelocityGauge) -> Result<Ticker, JsValue> {
    let gain = context.create_gain()?;
    gain.gain().set_value(0.0);
    gain.connect_with_audio_node(&context.destination())?;

    let oscillator = context.create_oscillator()?;
    oscillator.set_type(OscillatorType::Square);
    oscillator.frequency().set_value(TICK_BASE_PITCH_HZ as f32);
    oscillator.connect_with_audio_node(&gain)?;
    #[allow(deprecated)]
    oscillator.start()?;

    let interval = {
        let context = context.clone();
        let gain = gain.clone();
        let oscillator = oscillator.clone();
        Interval::new(TICK_INTERVAL_MS, move || {
            if let Err(e) = pulse(&context, &gain, &oscillator, velocity.get()) {
                log::debug!("Tick pulse failed: {:?}", e);
            }
        })
    };

    Ok(Ticker { oscillator, gain, _interval: interval })
}

fn pulse(context: &AudioContext, gain: &GainNode, oscillator: &OscillatorNode, velocity: f64) -> Result<(), JsValue> {
    let now = context.current_time();
    let level = gain.gain();
    level.cancel_scheduled_values(now)?;
    level.set_value_at_time(0.0, now)?;
    level.linear_ramp_to_value_at_time(tick_gain(velocity) as f32, now + TICK_ATTACK_S)?;
    level.linear_ramp_to_value_at_time(0.0, now + TICK_RELEASE_S)?;
    oscillator
        .frequency()
        .set_value_at_time(tick_pitch(rand::random::<f64>()) as f32, now)?;
    Ok(())
}

fn play_chime(context: &AudioContext) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    oscillator.set_type(OscillatorType::Sine);
    oscillator.frequency().set_value(CHIME_START_HZ as f32);
    gain.gain().set_value(CHIME_FLOOR_GAIN as f32);

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    let now = context.current_time();
    gain.gain().exponential_ramp_to_value_at_time(CHIME_PEAK_GAIN as f32, now + CHIME_ATTACK_S)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(CHIME_END_HZ as f32, now + CHIME_SWEEP_S)?;
    gain.gain().exponential_ramp_to_value_at_time(CHIME_FLOOR_GAIN as f32, now + CHIME_DECAY_S)?;

    #[allow(deprecated)]
    {
        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(now + CHIME_LENGTH_S)?;
    }
    Ok(())
}
