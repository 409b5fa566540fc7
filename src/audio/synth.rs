//! Procedural cue sounds.
//!
//! Each cue is a handful of oscillator voices with pitch and gain envelopes,
//! rendered once to 16-bit mono PCM and wrapped in a WAV container so the
//! audio backend can load it like any other sound file.

use std::f32::consts::TAU;

use crate::application::Cue;

pub const SAMPLE_RATE: u32 = 22_050;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wave {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl Wave {
    /// Sample the waveform at `phase` in [0, 1)
    fn sample(self, phase: f32) -> f32 {
        match self {
            Wave::Sine => (TAU * phase).sin(),
            Wave::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Wave::Sawtooth => 2.0 * phase - 1.0,
            Wave::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ramp {
    Linear,
    /// Endpoints must be non-zero
    Exponential,
}

impl Ramp {
    fn at(self, from: f32, to: f32, t: f32) -> f32 {
        match self {
            Ramp::Linear => from + (to - from) * t,
            Ramp::Exponential => from * (to / from).powf(t),
        }
    }
}

/// One oscillator with a pitch sweep and a gain envelope
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voice {
    pub wave: Wave,
    pub hz: (f32, f32),
    pub pitch: Ramp,
    pub gain: (f32, f32),
    pub envelope: Ramp,
    /// Start time in seconds
    pub offset: f32,
    /// Length in seconds
    pub duration: f32,
}

impl Voice {
    fn new(wave: Wave, hz: (f32, f32), pitch: Ramp, gain: (f32, f32), envelope: Ramp, duration: f32) -> Self {
        Self {
            wave,
            hz,
            pitch,
            gain,
            envelope,
            offset: 0.0,
            duration,
        }
    }

    fn at(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    fn end(&self) -> f32 {
        self.offset + self.duration
    }
}

/// Voices that make up a cue. `Step` fires every generation and stays silent.
pub fn voices(cue: Cue) -> Vec<Voice> {
    use Ramp::{Exponential, Linear};

    match cue {
        Cue::Click | Cue::Pause => vec![Voice::new(
            Wave::Sine,
            (800.0, 1200.0),
            Exponential,
            (0.1, 0.01),
            Exponential,
            0.1,
        )],
        Cue::Start => vec![Voice::new(Wave::Triangle, (300.0, 600.0), Linear, (0.1, 0.0), Linear, 0.2)],
        Cue::Reset => vec![Voice::new(
            Wave::Sawtooth,
            (400.0, 100.0),
            Exponential,
            (0.05, 0.001),
            Exponential,
            0.3,
        )],
        Cue::Clear => vec![Voice::new(
            Wave::Square,
            (150.0, 50.0),
            Exponential,
            (0.05, 0.001),
            Exponential,
            0.15,
        )],
        // Major chord arpeggio
        Cue::Success => [440.0, 554.0, 659.0]
            .iter()
            .enumerate()
            .map(|(i, &hz)| {
                Voice::new(Wave::Sine, (hz, hz), Linear, (0.05, 0.001), Exponential, 0.3)
                    .at(i as f32 * 0.05)
            })
            .collect(),
        Cue::Step => Vec::new(),
    }
}

/// Mix voices into samples in [-1, 1]
pub fn render(voices: &[Voice]) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    let total = voices.iter().map(Voice::end).fold(0.0_f32, f32::max);
    let mut samples = vec![0.0_f32; (total * rate).ceil() as usize];

    for voice in voices {
        let start = (voice.offset * rate) as usize;
        let len = (voice.duration * rate) as usize;
        let mut phase = 0.0_f32;

        for (i, out) in samples.iter_mut().skip(start).take(len).enumerate() {
            let t = i as f32 / len as f32;
            let hz = voice.pitch.at(voice.hz.0, voice.hz.1, t);
            let gain = voice.envelope.at(voice.gain.0, voice.gain.1, t);
            *out += voice.wave.sample(phase) * gain;
            phase = (phase + hz / rate).fract();
        }
    }

    samples.iter_mut().for_each(|s| *s = s.clamp(-1.0, 1.0));
    samples
}

/// Wrap samples in a 16-bit mono PCM WAV container
pub fn encode_wav(samples: &[f32]) -> Vec<u8> {
    const BITS: u16 = 16;
    const CHANNELS: u16 = 1;
    let block_align = CHANNELS * BITS / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data_len = (samples.len() * usize::from(block_align)) as u32;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample * f32::from(i16::MAX)) as i16;
        wav.extend_from_slice(&pcm.to_le_bytes());
    }
    wav
}

/// Rendered WAV bytes for a cue, or `None` for silent cues
pub fn cue_wav(cue: Cue) -> Option<Vec<u8>> {
    let voices = voices(cue);
    (!voices.is_empty()).then(|| encode_wav(&render(&voices)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_silent() {
        assert!(cue_wav(Cue::Step).is_none());
        assert!(Cue::ALL
            .iter()
            .filter(|&&cue| cue != Cue::Step)
            .all(|&cue| cue_wav(cue).is_some()));
    }

    #[test]
    fn test_render_length_covers_last_voice() {
        // Last arpeggio note starts at 0.1 s and lasts 0.3 s
        let samples = render(&voices(Cue::Success));
        let expected = (0.4 * SAMPLE_RATE as f32).ceil() as usize;
        assert!(samples.len().abs_diff(expected) <= 1);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(samples.iter().any(|s| s.abs() > 0.01));
    }

    #[test]
    fn test_wav_header() {
        let samples = render(&voices(Cue::Click));
        let wav = encode_wav(&samples);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        let data_len = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
        assert_eq!(data_len, samples.len() * 2);
        assert_eq!(wav.len(), 44 + data_len);
    }

    #[test]
    fn test_ramps() {
        assert_eq!(Ramp::Linear.at(0.0, 10.0, 0.5), 5.0);
        let mid = Ramp::Exponential.at(100.0, 400.0, 0.5);
        assert!((mid - 200.0).abs() < 1e-3);
    }
}
