//! # Microphone Capture
//!
//! Start/stop recording from the default input device. The cpal stream is not
//! `Send`, so it lives on a dedicated capture thread; the stream callback
//! accumulates sample chunks into a shared buffer and an atomic flag tells the
//! thread to wind down. [`Recorder::stop`] joins the thread and finalizes the
//! buffer into a single WAV-encoded [`MediaFile`].
//!
//! Device and permission failures surface as [`FlowError::AudioDevice`] from
//! [`Recorder::start`] so the UI can tell the user instead of silently doing
//! nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use tracing::{info, warn};

use crate::errors::{FlowError, FlowResult};
use crate::input::MediaFile;

/// File name given to finished recordings.
pub const RECORDING_FILE_NAME: &str = "recording.wav";

/// How long [`Recorder::start`] waits for the capture thread to open the device.
const INIT_TIMEOUT: Duration = Duration::from_secs(5);

/// How often the capture thread checks the stop flag.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// A finished recording: accumulated PCM plus the stream parameters needed to
/// encode it.
#[derive(Debug, Clone)]
pub struct RecordedAudio {
    /// Interleaved samples, normalized to -1.0..1.0
    pub samples: Vec<f32>,

    /// Stream sample rate in Hz
    pub sample_rate: u32,

    /// Interleaved channel count
    pub channels: u16,

    /// When the recording was finalized
    pub finished: DateTime<Utc>,
}

impl RecordedAudio {
    /// Approximate duration of the recording.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 || self.channels == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as u64 / self.channels as u64;
        Duration::from_secs_f64(frames as f64 / self.sample_rate as f64)
    }

    /// Encode as 16-bit PCM WAV bytes.
    pub fn to_wav(&self) -> Vec<u8> {
        pcm_f32_to_wav(&self.samples, self.sample_rate, self.channels)
    }

    /// Package as the audio-modality upload file.
    pub fn into_media_file(self) -> MediaFile {
        let bytes = self.to_wav();
        MediaFile {
            name: RECORDING_FILE_NAME.to_string(),
            mime: "audio/wav".to_string(),
            bytes,
        }
    }
}

/// Encode interleaved f32 PCM to 16-bit WAV bytes.
fn pcm_f32_to_wav(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    use std::io::Write;

    let data_len = samples.len() * 2; // 16-bit = 2 bytes per sample
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels * 2;
    let file_len = 44u32 + data_len as u32;

    let mut buf = Vec::with_capacity(44 + data_len);
    // RIFF header
    buf.write_all(b"RIFF").unwrap();
    buf.write_all(&(file_len - 8).to_le_bytes()).unwrap();
    buf.write_all(b"WAVE").unwrap();
    // fmt subchunk
    buf.write_all(b"fmt ").unwrap();
    buf.write_all(&16u32.to_le_bytes()).unwrap();
    buf.write_all(&1u16.to_le_bytes()).unwrap(); // PCM
    buf.write_all(&channels.to_le_bytes()).unwrap();
    buf.write_all(&sample_rate.to_le_bytes()).unwrap();
    buf.write_all(&byte_rate.to_le_bytes()).unwrap();
    buf.write_all(&block_align.to_le_bytes()).unwrap();
    buf.write_all(&16u16.to_le_bytes()).unwrap(); // bits per sample
    // data subchunk
    buf.write_all(b"data").unwrap();
    buf.write_all(&(data_len as u32).to_le_bytes()).unwrap();
    for &s in samples {
        let clamped = s.clamp(-1.0, 1.0);
        let i = (clamped * 32767.0).round() as i16;
        buf.write_all(&i.to_le_bytes()).unwrap();
    }
    buf
}

/// In-progress microphone capture. Drop without [`Recorder::stop`] to discard.
pub struct Recorder {
    stop: Arc<AtomicBool>,
    samples: Arc<Mutex<Vec<f32>>>,
    sample_rate: u32,
    channels: u16,
    handle: thread::JoinHandle<()>,
}

impl Recorder {
    /// Open the default input device and start accumulating samples.
    ///
    /// Blocks briefly (bounded by [`INIT_TIMEOUT`]) until the capture thread
    /// reports that the stream is live, so device and permission errors are
    /// returned here rather than lost on a background thread.
    pub fn start() -> FlowResult<Recorder> {
        let stop = Arc::new(AtomicBool::new(false));
        let samples = Arc::new(Mutex::new(Vec::new()));
        let (init_tx, init_rx) = mpsc::channel::<FlowResult<(u32, u16)>>();

        let thread_stop = Arc::clone(&stop);
        let thread_samples = Arc::clone(&samples);
        let handle = thread::spawn(move || {
            capture_thread(thread_stop, thread_samples, init_tx);
        });

        match init_rx.recv_timeout(INIT_TIMEOUT) {
            Ok(Ok((sample_rate, channels))) => {
                info!(sample_rate, channels, "microphone capture started");
                Ok(Recorder {
                    stop,
                    samples,
                    sample_rate,
                    channels,
                    handle,
                })
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                stop.store(true, Ordering::Relaxed);
                Err(FlowError::audio_device(
                    "timed out waiting for the input device to open",
                ))
            }
        }
    }

    /// Stop capturing and finalize the accumulated buffer.
    pub fn stop(self) -> FlowResult<RecordedAudio> {
        self.stop.store(true, Ordering::Relaxed);
        self.handle
            .join()
            .map_err(|_| FlowError::AudioStream {
                reason: "capture thread panicked".to_string(),
            })?;
        let samples = std::mem::take(
            &mut *self
                .samples
                .lock()
                .map_err(|_| FlowError::AudioStream {
                    reason: "capture buffer lock poisoned".to_string(),
                })?,
        );
        let recording = RecordedAudio {
            samples,
            sample_rate: self.sample_rate,
            channels: self.channels,
            finished: Utc::now(),
        };
        info!(
            seconds = recording.duration().as_secs_f32(),
            "microphone capture finished"
        );
        Ok(recording)
    }
}

/// Owns the cpal stream for the lifetime of the capture.
fn capture_thread(
    stop: Arc<AtomicBool>,
    samples: Arc<Mutex<Vec<f32>>>,
    init_tx: mpsc::Sender<FlowResult<(u32, u16)>>,
) {
    let device = match cpal::default_host().default_input_device() {
        Some(d) => d,
        None => {
            let _ = init_tx.send(Err(FlowError::audio_device("no input device available")));
            return;
        }
    };

    let supported = match device.default_input_config() {
        Ok(c) => c,
        Err(e) => {
            let _ = init_tx.send(Err(e.into()));
            return;
        }
    };
    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let sample_rate = config.sample_rate.0;
    let channels = config.channels;

    let stream = match sample_format {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&samples)),
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&samples)),
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&samples)),
        other => Err(FlowError::AudioStream {
            reason: format!("unsupported sample format {:?}", other),
        }),
    };
    let stream = match stream {
        Ok(s) => s,
        Err(e) => {
            let _ = init_tx.send(Err(e));
            return;
        }
    };

    if let Err(e) = stream.play() {
        let _ = init_tx.send(Err(e.into()));
        return;
    }
    let _ = init_tx.send(Ok((sample_rate, channels)));

    while !stop.load(Ordering::Relaxed) {
        thread::sleep(STOP_POLL_INTERVAL);
    }
    drop(stream);
}

/// Build an input stream whose callback appends converted samples to the
/// shared buffer.
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    samples: Arc<Mutex<Vec<f32>>>,
) -> FlowResult<cpal::Stream>
where
    T: SizedSample,
    f32: FromSample<T>,
{
    let stream = device.build_input_stream(
        config,
        move |data: &[T], _: &cpal::InputCallbackInfo| {
            if let Ok(mut buffer) = samples.lock() {
                buffer.extend(data.iter().map(|&s| f32::from_sample(s)));
            }
        },
        move |err| {
            warn!("audio stream error: {}", err);
        },
        None,
    )?;
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header_mono() {
        let samples = vec![0.0f32; 480];
        let wav = pcm_f32_to_wav(&samples, 16000, 1);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(wav.len(), 44 + 480 * 2);
        // sample rate field at offset 24
        assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 16000);
        // channel count at offset 22
        assert_eq!(u16::from_le_bytes(wav[22..24].try_into().unwrap()), 1);
    }

    #[test]
    fn test_wav_clamps_out_of_range_samples() {
        let wav = pcm_f32_to_wav(&[2.0, -2.0], 8000, 1);
        let first = i16::from_le_bytes(wav[44..46].try_into().unwrap());
        let second = i16::from_le_bytes(wav[46..48].try_into().unwrap());
        assert_eq!(first, 32767);
        assert_eq!(second, -32767);
    }

    #[test]
    fn test_recording_duration() {
        let recording = RecordedAudio {
            samples: vec![0.0; 32000],
            sample_rate: 16000,
            channels: 2,
            finished: Utc::now(),
        };
        assert_eq!(recording.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_into_media_file() {
        let recording = RecordedAudio {
            samples: vec![0.0; 16],
            sample_rate: 16000,
            channels: 1,
            finished: Utc::now(),
        };
        let file = recording.into_media_file();
        assert_eq!(file.name, RECORDING_FILE_NAME);
        assert_eq!(file.mime, "audio/wav");
        assert_eq!(&file.bytes[0..4], b"RIFF");
    }
}
