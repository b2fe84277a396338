//! Silence padding arithmetic
//!
//! Sizes are compared in bytes and turned into seconds with the configured
//! encoding. All arithmetic is floating point, so bit depths that are not a
//! multiple of 8 still give an exact byte rate.

use crate::config::{AudioConfig, Config};
use crate::processing::scan::WavFile;

/// Output file names and padding for one input file
#[derive(Debug, Clone, PartialEq)]
pub struct PaddingPlan {
    pub file: WavFile,
    pub padding_seconds: f64,
    pub padded_name: String,
    pub raw_name: String,
}

impl PaddingPlan {
    /// Padding as passed on the tool command line
    pub fn padding_arg(&self) -> String {
        format_seconds(self.padding_seconds)
    }
}

/// Bytes of audio per second of playback
pub fn byte_rate(audio: &AudioConfig) -> f64 {
    audio.sample_rate as f64 * audio.channels as f64 * audio.bits_per_sample as f64 / 8.0
}

/// Seconds of silence needed to grow `size` bytes to `target` bytes.
pub fn padding_seconds(target: u64, size: u64, audio: &AudioConfig) -> f64 {
    let missing = target.saturating_sub(size);
    if missing == 0 {
        return 0.0;
    }
    missing as f64 / byte_rate(audio)
}

pub fn target_size(files: &[WavFile]) -> Option<u64> {
    files.iter().map(|f| f.size).max()
}

pub fn padded_name(base: &str, suffix: &str) -> String {
    format!("{}{}.wav", base, suffix)
}

pub fn raw_name(base: &str) -> String {
    format!("{}.raw", base)
}

/// Shortest decimal text that reads back as the same value
pub fn format_seconds(seconds: f64) -> String {
    format!("{}", seconds)
}

/// Build one plan per file, keeping input order.
pub fn plan(files: &[WavFile], config: &Config) -> Vec<PaddingPlan> {
    let Some(target) = target_size(files) else {
        return Vec::new();
    };

    files.iter()
        .map(|file| {
            let base = file.base_name();
            PaddingPlan {
                padding_seconds: padding_seconds(target, file.size, &config.audio),
                padded_name: padded_name(base, config.padded_suffix()),
                raw_name: raw_name(base),
                file: file.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn wav(name: &str, size: u64) -> WavFile {
        WavFile { name: name.to_string(), path: PathBuf::from(name), size }
    }

    #[test]
    fn test_byte_rate() {
        assert_eq!(byte_rate(&AudioConfig::default()), 44100.0);

        let stereo = AudioConfig { sample_rate: 48000, channels: 2, bits_per_sample: 24 };
        assert_eq!(byte_rate(&stereo), 288000.0);

        // 12 bit mono at 22050 Hz is 33075 bytes per second, no truncation
        let odd = AudioConfig { sample_rate: 22050, channels: 1, bits_per_sample: 12 };
        assert_eq!(byte_rate(&odd), 33075.0);
    }

    #[test]
    fn test_padding_example() {
        let audio = AudioConfig::default();
        let a = padding_seconds(2000, 1000, &audio);
        assert!((a - 1000.0 / 44100.0).abs() < 1e-12);
        assert!((a - 0.02268).abs() < 1e-5);
        assert_eq!(padding_seconds(2000, 2000, &audio), 0.0);
    }

    #[test]
    fn test_padding_never_negative() {
        let audio = AudioConfig::default();
        assert_eq!(padding_seconds(100, 500, &audio), 0.0);
        for size in [0u64, 1, 44099, 44100, 88200] {
            assert!(padding_seconds(88200, size, &audio) >= 0.0);
        }
        assert_eq!(padding_seconds(88200, 0, &audio), 2.0);
    }

    #[test]
    fn test_plan_pads_to_longest() {
        let config = Config::default();
        let files = vec![wav("a.wav", 1000), wav("b.wav", 2000), wav("c.wav", 1500)];

        let plans = plan(&files, &config);
        assert_eq!(plans.len(), 3);

        assert_eq!(plans[0].padded_name, "a_padd.wav");
        assert_eq!(plans[0].raw_name, "a.raw");
        assert!((plans[0].padding_seconds - 1000.0 / 44100.0).abs() < 1e-12);

        assert_eq!(plans[1].padding_seconds, 0.0);
        assert_eq!(plans[1].padding_arg(), "0");

        assert!((plans[2].padding_seconds - 500.0 / 44100.0).abs() < 1e-12);
    }

    #[test]
    fn test_plan_equal_sizes() {
        let config = Config::default();
        let files = vec![wav("x.wav", 64), wav("y.wav", 64)];
        assert!(plan(&files, &config).iter().all(|p| p.padding_seconds == 0.0));
    }

    #[test]
    fn test_plan_empty() {
        assert!(plan(&[], &Config::default()).is_empty());
        assert_eq!(target_size(&[]), None);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(1.5), "1.5");
        assert_eq!(format_seconds(0.25), "0.25");
    }
}
