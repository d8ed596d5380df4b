use anyhow::{ensure, Result};

use crate::types::AudioData;

/// Sample rate whisper models expect
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Linearly resample `samples` from `source_rate` to `target_rate`.
pub fn linear_resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    ensure!(source_rate > 0, "source sample rate must be positive");
    ensure!(target_rate > 0, "target sample rate must be positive");
    if samples.is_empty() || source_rate == target_rate {
        return Ok(samples.to_vec());
    }
    let step = source_rate as f64 / target_rate as f64;
    let output_len = ((samples.len() as f64) / step).ceil().max(1.0) as usize;
    let last_index = samples.len() - 1;
    let output = (0..output_len)
        .map(|i| {
            let position = i as f64 * step;
            let left = (position.floor() as usize).min(last_index);
            let right = (left + 1).min(last_index);
            let t = (position - left as f64) as f32;
            samples[left] * (1.0 - t) + samples[right] * t
        })
        .collect();
    Ok(output)
}

/// Convert decoded audio to the 16 kHz mono layout whisper consumes
pub fn to_whisper_rate(audio: &AudioData) -> Result<AudioData> {
    Ok(AudioData {
        samples: linear_resample(&audio.samples, audio.sample_rate, WHISPER_SAMPLE_RATE)?,
        sample_rate: WHISPER_SAMPLE_RATE,
    })
}
