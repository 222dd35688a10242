//! Sound cues
//!
//! On the web each cue plays the page's matching `<audio>` element. When the
//! page has no element for a cue, a short tone is synthesized with the Web
//! Audio API instead. Playback is fire-and-forget: rejected play promises
//! are logged, never surfaced.

use crate::error::GameError;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player jumped
    Jump,
    /// Run ended
    GameOver,
    /// Obstacle speed ramped up
    Shield,
}

impl Cue {
    /// Id of the page's `<audio>` element for this cue
    pub fn element_id(&self) -> &'static str {
        match self {
            Cue::Jump => "jumpSound",
            Cue::GameOver => "gameOverSound",
            Cue::Shield => "shieldSound",
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    /// Start playback. Only synchronous failures are returned; failures that
    /// surface later are logged by the implementation.
    fn play(&mut self, cue: Cue) -> Result<(), GameError>;
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AudioContext, Document, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

    use super::{AudioSink, Cue};
    use crate::error::GameError;

    /// Audio manager for the game
    pub struct WebAudio {
        jump: Option<HtmlAudioElement>,
        game_over: Option<HtmlAudioElement>,
        shield: Option<HtmlAudioElement>,
        /// Fallback synth, created on first use
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl WebAudio {
        pub fn from_document(document: &Document, volume: f32) -> Self {
            let find = |cue: Cue| {
                let el = document
                    .get_element_by_id(cue.element_id())
                    .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
                if el.is_none() {
                    log::info!("No #{} element, using synthesized {:?} cue", cue.element_id(), cue);
                }
                el
            };
            Self {
                jump: find(Cue::Jump),
                game_over: find(Cue::GameOver),
                shield: find(Cue::Shield),
                ctx: None,
                volume,
            }
        }

        fn element(&self, cue: Cue) -> Option<&HtmlAudioElement> {
            match cue {
                Cue::Jump => self.jump.as_ref(),
                Cue::GameOver => self.game_over.as_ref(),
                Cue::Shield => self.shield.as_ref(),
            }
        }

        fn play_element(&self, el: &HtmlAudioElement) -> Result<(), GameError> {
            el.set_volume(self.volume as f64);
            // Rewind so rapid re-triggers restart the clip
            el.set_current_time(0.0);
            let promise = el
                .play()
                .map_err(|e| GameError::Audio(GameError::describe(&e)))?;
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Audio error: {}", GameError::describe(&e));
                }
            });
            Ok(())
        }

        fn context(&mut self) -> Result<&AudioContext, GameError> {
            if self.ctx.is_none() {
                let ctx = AudioContext::new().map_err(|e| GameError::Audio(GameError::describe(&e)))?;
                self.ctx = Some(ctx);
            }
            let ctx = self
                .ctx
                .as_ref()
                .ok_or_else(|| GameError::Audio("no audio context".to_string()))?;
            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Ok(ctx)
        }

        fn synthesize(&mut self, cue: Cue) -> Result<(), GameError> {
            let vol = self.volume;
            let ctx = self.context()?;
            match cue {
                Cue::Jump => play_jump(ctx, vol),
                Cue::GameOver => play_game_over(ctx, vol),
                Cue::Shield => play_shield(ctx, vol),
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: Cue) -> Result<(), GameError> {
            if self.volume <= 0.0 {
                return Ok(());
            }
            if let Some(el) = self.element(cue).cloned() {
                return self.play_element(&el);
            }
            self.synthesize(cue)
        }
    }

    /// Create an oscillator routed through a gain envelope
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Result<(OscillatorNode, GainNode), GameError> {
        let err = |e: wasm_bindgen::JsValue| GameError::Audio(GameError::describe(&e));
        let osc = ctx.create_oscillator().map_err(err)?;
        let gain = ctx.create_gain().map_err(err)?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).map_err(err)?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(err)?;

        Ok((osc, gain))
    }

    /// Jump - quick upward chirp
    fn play_jump(ctx: &AudioContext, vol: f32) -> Result<(), GameError> {
        let (osc, gain) = create_osc(ctx, 300.0, OscillatorType::Triangle)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.18)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(700.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
        Ok(())
    }

    /// Game over - sad descending
    fn play_game_over(ctx: &AudioContext, vol: f32) -> Result<(), GameError> {
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            let (osc, gain) = create_osc(ctx, *freq, OscillatorType::Sine)?;
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.4).ok();
        }
        Ok(())
    }

    /// Shield - bright rising arpeggio
    fn play_shield(ctx: &AudioContext, vol: f32) -> Result<(), GameError> {
        for (i, freq) in [500.0, 700.0, 1000.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            let (osc, gain) = create_osc(ctx, *freq, OscillatorType::Triangle)?;
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.3).ok();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_element_ids() {
        assert_eq!(Cue::Jump.element_id(), "jumpSound");
        assert_eq!(Cue::GameOver.element_id(), "gameOverSound");
        assert_eq!(Cue::Shield.element_id(), "shieldSound");
    }
}
