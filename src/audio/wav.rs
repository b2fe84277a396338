//! WAV header inspection

use std::path::Path;
use std::fs::File;
use std::io::BufReader;
use hound::{WavReader, SampleFormat};
use crate::config::AudioConfig;
use crate::error::{WavPadError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct WavHeader {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    pub total_frames: u32,
    pub duration: f64,
}

impl WavHeader {
    /// Read only the header of a WAV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| WavPadError::Audio {
                message: format!("Cannot open audio file {}: {}", path.display(), e)
            })?;

        let reader = WavReader::new(BufReader::new(file))
            .map_err(|e| WavPadError::Audio {
                message: format!("Cannot read WAV header of {}: {}", path.display(), e)
            })?;

        let spec = reader.spec();
        if spec.sample_rate == 0 {
            return Err(WavPadError::audio(format!("Invalid sample rate in {}", path.display())));
        }

        let total_frames = reader.duration();
        Ok(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
            total_frames,
            duration: total_frames as f64 / spec.sample_rate as f64,
        })
    }

    /// Describe every way this header differs from `expected`
    pub fn mismatches(&self, expected: &AudioConfig) -> Vec<String> {
        let mut out = Vec::new();
        if self.sample_rate != expected.sample_rate {
            out.push(format!("sample rate {} Hz (expected {} Hz)", self.sample_rate, expected.sample_rate));
        }
        if self.channels != expected.channels {
            out.push(format!("{} channels (expected {})", self.channels, expected.channels));
        }
        if self.bits_per_sample != expected.bits_per_sample {
            out.push(format!("{} bits (expected {})", self.bits_per_sample, expected.bits_per_sample));
        }
        out
    }

    pub fn matches(&self, expected: &AudioConfig) -> bool {
        self.mismatches(expected).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::TempDir;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: u32) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for _ in 0..frames * channels as u32 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_read_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tone.wav");
        write_wav(&path, 22050, 1, 11025);

        let header = WavHeader::from_file(&path).unwrap();
        assert_eq!(header.sample_rate, 22050);
        assert_eq!(header.channels, 1);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.sample_format, SampleFormat::Int);
        assert_eq!(header.total_frames, 11025);
        assert!((header.duration - 0.5).abs() < f64::EPSILON);
        assert!(header.matches(&AudioConfig::default()));
    }

    #[test]
    fn test_header_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 44100, 2, 10);

        let header = WavHeader::from_file(&path).unwrap();
        let problems = header.mismatches(&AudioConfig::default());
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("44100"));
        assert!(problems[1].contains("2 channels"));
    }

    #[test]
    fn test_not_a_wav() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.wav");
        std::fs::write(&path, b"definitely not RIFF data").unwrap();
        assert!(matches!(WavHeader::from_file(&path), Err(WavPadError::Audio { .. })));
    }
}
