//! Audio cues via the Web Audio API
//!
//! All tones are synthesized - no external files. Multi-tone cues are short
//! (delay, tone) lists scheduled on the audio context clock; the simulation
//! tick never drives audio timing.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Discrete sound cues the simulation emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Upward impulse
    Flap,
    /// Obstacle cleared
    Score,
    /// Terminal collision
    Hit,
    /// Game-over sting
    Die,
    /// New run armed
    Swoosh,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context; cues are dropped then
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Resume the audio context (required after a user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue. Free to drop it when muted or without a context.
    pub fn play(&self, cue: Cue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            Cue::Flap => self.play_flap(ctx, vol),
            Cue::Score => self.play_score(ctx, vol),
            Cue::Hit => self.play_hit(ctx, vol),
            Cue::Die => self.play_die(ctx, vol),
            Cue::Swoosh => self.play_swoosh(ctx, vol),
        }
    }

    // === Tone plumbing ===

    /// Create an oscillator with a gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// One enveloped tone at an offset on the context clock
    fn tone(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
        delay: f64,
        duration: f64,
        vol: f32,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + delay;

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + duration + 0.05).ok();
    }

    // === Cue generators ===

    /// Flap - two quick square chirps
    fn play_flap(&self, ctx: &AudioContext, vol: f32) {
        self.tone(ctx, 400.0, OscillatorType::Square, 0.0, 0.1, vol * 0.2);
        self.tone(ctx, 500.0, OscillatorType::Square, 0.05, 0.08, vol * 0.15);
    }

    /// Score - rising three-note arpeggio
    fn play_score(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 659.0, 784.0].iter().enumerate() {
            let delay = i as f64 * 0.1;
            let duration = if i == 2 { 0.15 } else { 0.1 };
            self.tone(ctx, *freq, OscillatorType::Square, delay, duration, vol * 0.2);
        }
    }

    /// Hit - harsh sawtooth crunch
    fn play_hit(&self, ctx: &AudioContext, vol: f32) {
        self.tone(ctx, 200.0, OscillatorType::Sawtooth, 0.0, 0.2, vol * 0.3);
        self.tone(ctx, 150.0, OscillatorType::Sawtooth, 0.0, 0.3, vol * 0.2);
    }

    /// Die - five descending squares, 80 ms apart
    fn play_die(&self, ctx: &AudioContext, vol: f32) {
        for i in 0..5 {
            let freq = 300.0 - i as f32 * 40.0;
            self.tone(
                ctx,
                freq,
                OscillatorType::Square,
                i as f64 * 0.08,
                0.1,
                vol * 0.2,
            );
        }
    }

    /// Swoosh - soft sine whoosh
    fn play_swoosh(&self, ctx: &AudioContext, vol: f32) {
        self.tone(ctx, 200.0, OscillatorType::Sine, 0.0, 0.15, vol * 0.1);
    }
}
