//! Sound effects, synthesized at startup. No audio files are shipped.

use std::f32::consts::TAU;

use rand::Rng;

use crate::error::GameError;

pub const SAMPLE_RATE: u32 = 44_100;
#[cfg(feature = "audio")]
const SFX_VOLUME: f32 = 0.3;
const PEAK: f32 = 0.5;

const LASER_SECS: f32 = 0.15;
const LASER_START_HZ: f32 = 1000.0;
const LASER_SWEEP_HZ: f32 = 800.0;

const EXPLOSION_SECS: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    Laser,
    /// Enemy or player destroyed
    Explosion,
}

/// Descending sine chirp, mono.
pub fn laser_samples() -> Vec<f32> {
    let n = (SAMPLE_RATE as f32 * LASER_SECS) as usize;
    (0..n)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let freq = LASER_START_HZ - (t / LASER_SECS) * LASER_SWEEP_HZ;
            PEAK * (TAU * freq * t).sin()
        })
        .collect()
}

/// White noise with a linear fade-out, mono.
pub fn explosion_samples<R: Rng + ?Sized>(rng: &mut R) -> Vec<f32> {
    let n = (SAMPLE_RATE as f32 * EXPLOSION_SECS) as usize;
    (0..n)
        .map(|i| {
            let decay = 1.0 - i as f32 / n as f32;
            rng.gen_range(-1.0f32..=1.0) * PEAK * decay
        })
        .collect()
}

/// Plays the two effects on the default output device.
pub struct AudioManager {
    #[cfg(feature = "audio")]
    _stream: rodio::OutputStream,
    #[cfg(feature = "audio")]
    handle: rodio::OutputStreamHandle,
    laser: Vec<f32>,
    explosion: Vec<f32>,
}

impl AudioManager {
    /// Opens the output device and renders both effects.
    #[cfg(feature = "audio")]
    pub fn open() -> Result<Self, GameError> {
        let (stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| GameError::AudioDevice(e.to_string()))?;
        log::info!("audio output opened at {} Hz", SAMPLE_RATE);
        Ok(Self {
            _stream: stream,
            handle,
            laser: laser_samples(),
            explosion: explosion_samples(&mut rand::thread_rng()),
        })
    }

    #[cfg(not(feature = "audio"))]
    pub fn open() -> Result<Self, GameError> {
        log::info!("built without the `audio` feature, sound effects are muted (rebuild with --features audio)");
        Ok(Self {
            laser: laser_samples(),
            explosion: explosion_samples(&mut rand::thread_rng()),
        })
    }

    fn samples(&self, effect: SoundEffect) -> &[f32] {
        match effect {
            SoundEffect::Laser => &self.laser,
            SoundEffect::Explosion => &self.explosion,
        }
    }

    #[cfg(feature = "audio")]
    pub fn play(&self, effect: SoundEffect) {
        use rodio::buffer::SamplesBuffer;
        use rodio::Source;

        let buffer = SamplesBuffer::new(1, SAMPLE_RATE, self.samples(effect).to_vec());
        if let Err(e) = self.handle.play_raw(buffer.amplify(SFX_VOLUME)) {
            log::warn!("dropped {:?}: {}", effect, e);
        }
    }

    #[cfg(not(feature = "audio"))]
    pub fn play(&self, effect: SoundEffect) {
        log::trace!("{:?} ({} samples, muted)", effect, self.samples(effect).len());
    }
}
