//! # Input Collection
//!
//! The input side of the session: which modality is active, what content each
//! modality currently holds, and how dropped/picked files are classified.
//!
//! Switching modality never clears the other modalities' content. It stays in
//! memory, inert, until the user returns to it. A single file slot is shared
//! by the image and audio modalities; attaching a new file replaces it.
//!
//! ## Classification
//!
//! Files arrive as a name plus raw bytes (from a drop, a picker, or the
//! recorder). The extension resolves to a MIME type, and the MIME prefix picks
//! the modality: `image/*` activates image input, `audio/*` and `video/*`
//! activate audio input. Anything else is rejected.

use serde::{Deserialize, Serialize};

use crate::errors::{FlowError, FlowResult};

/// Content substituted for audio submissions. Client-side transcription is an
/// acknowledged stub; the backend receives this marker instead of a transcript.
pub const AUDIO_PLACEHOLDER_CONTENT: &str =
    "Audio file uploaded - please implement speech-to-text conversion";

/// The category of input the user is composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Code,
    Image,
    Audio,
}

impl Modality {
    /// All modalities, in selector display order.
    pub const ALL: [Modality; 4] = [
        Modality::Text,
        Modality::Code,
        Modality::Image,
        Modality::Audio,
    ];

    /// Wire tag sent as `input_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Code => "code",
            Modality::Image => "image",
            Modality::Audio => "audio",
        }
    }

    /// Selector label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Modality::Text => "Text Description",
            Modality::Code => "Code Snippet",
            Modality::Image => "Image/Diagram",
            Modality::Audio => "Voice/Audio",
        }
    }

    /// Classify a MIME type into the modality it activates.
    ///
    /// `image/*` files become image input; `audio/*` and `video/*` files both
    /// become audio input (the backend extracts the audio track from video).
    pub fn from_mime(mime: &str) -> Option<Modality> {
        if mime.starts_with("image/") {
            Some(Modality::Image)
        } else if mime.starts_with("audio/") || mime.starts_with("video/") {
            Some(Modality::Audio)
        } else {
            None
        }
    }
}

/// MIME type for a file extension, restricted to the accepted upload set.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "m4a" => Some("audio/mp4"),
        "ogg" => Some("audio/ogg"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// Extensions accepted by the file picker, matching [`mime_for_extension`].
pub const ACCEPTED_EXTENSIONS: [&str; 14] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "mp3", "wav", "m4a", "ogg", "mp4", "webm", "mov",
    "avi",
];

/// An uploaded or recorded file: name, MIME type, and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Original file name (used for display and the multipart part name)
    pub name: String,

    /// MIME type resolved at classification time
    pub mime: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Build a media file from a name and bytes, classifying by extension.
    ///
    /// Returns [`FlowError::UnsupportedFile`] when the extension is not in the
    /// accepted image/audio/video set.
    pub fn classify(name: impl Into<String>, bytes: Vec<u8>) -> FlowResult<MediaFile> {
        let name = name.into();
        let ext = name.rsplit('.').next().filter(|e| *e != name.as_str());
        let mime = ext
            .and_then(mime_for_extension)
            .ok_or_else(|| FlowError::unsupported_file(&name))?;
        Ok(MediaFile {
            name,
            mime: mime.to_string(),
            bytes,
        })
    }

    /// The modality this file activates.
    pub fn modality(&self) -> Modality {
        // classify() only accepts image/audio/video MIME types
        Modality::from_mime(&self.mime).unwrap_or(Modality::Audio)
    }
}

/// One submission-ready input, carved from the collector state at submit time.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Text { content: String },
    Code { content: String },
    Image { file: MediaFile, description: String },
    Audio { file: MediaFile },
}

impl Submission {
    /// The wire tag for this submission.
    pub fn modality(&self) -> Modality {
        match self {
            Submission::Text { .. } => Modality::Text,
            Submission::Code { .. } => Modality::Code,
            Submission::Image { .. } => Modality::Image,
            Submission::Audio { .. } => Modality::Audio,
        }
    }
}

/// Collector state: the active modality plus every modality's current content.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Which modality the next submission draws from
    pub active: Option<Modality>,

    /// Free-text algorithm description
    pub text: String,

    /// Pasted code snippet
    pub code: String,

    /// Uploaded or recorded file (shared by image and audio modalities)
    pub file: Option<MediaFile>,

    /// Optional description accompanying image input
    pub image_description: String,
}

impl InputState {
    /// Fresh collector with the text modality active.
    pub fn new() -> Self {
        InputState {
            active: Some(Modality::Text),
            ..InputState::default()
        }
    }

    /// The active modality (text when none has been chosen yet).
    pub fn active(&self) -> Modality {
        self.active.unwrap_or(Modality::Text)
    }

    /// Switch the active modality. Other modalities' content is untouched.
    pub fn select(&mut self, modality: Modality) {
        self.active = Some(modality);
    }

    /// Attach a classified file and activate the modality it implies.
    pub fn attach(&mut self, file: MediaFile) {
        self.active = Some(file.modality());
        self.file = Some(file);
    }

    /// Submission is possible once any of text, code, or a file is present.
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty() || !self.code.is_empty() || self.file.is_some()
    }

    /// Carve a [`Submission`] for the active modality.
    ///
    /// Image and audio submissions require an attached file; text and code
    /// submit their current content verbatim.
    pub fn submission(&self) -> FlowResult<Submission> {
        match self.active() {
            Modality::Text => Ok(Submission::Text {
                content: self.text.clone(),
            }),
            Modality::Code => Ok(Submission::Code {
                content: self.code.clone(),
            }),
            Modality::Image => {
                let file = self.file.clone().ok_or_else(|| {
                    FlowError::invalid_input("file", "image submission requires an uploaded file")
                })?;
                Ok(Submission::Image {
                    file,
                    description: self.image_description.clone(),
                })
            }
            Modality::Audio => {
                let file = self.file.clone().ok_or_else(|| {
                    FlowError::invalid_input("file", "audio submission requires a recording or upload")
                })?;
                Ok(Submission::Audio { file })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_classification() {
        assert_eq!(Modality::from_mime("image/png"), Some(Modality::Image));
        assert_eq!(Modality::from_mime("audio/wav"), Some(Modality::Audio));
        assert_eq!(Modality::from_mime("video/mp4"), Some(Modality::Audio));
        assert_eq!(Modality::from_mime("application/pdf"), None);
    }

    #[test]
    fn test_classify_switches_modality_on_attach() {
        let mut input = InputState::new();
        assert_eq!(input.active(), Modality::Text);

        let file = MediaFile::classify("diagram.png", vec![1, 2, 3]).unwrap();
        input.attach(file);
        assert_eq!(input.active(), Modality::Image);

        let clip = MediaFile::classify("talk.MOV", vec![4]).unwrap();
        input.attach(clip);
        assert_eq!(input.active(), Modality::Audio);
    }

    #[test]
    fn test_classify_rejects_unknown_extension() {
        let err = MediaFile::classify("notes.pdf", vec![]).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_FILE");

        let err = MediaFile::classify("no_extension", vec![]).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_FILE");
    }

    #[test]
    fn test_can_submit_requires_some_content() {
        let mut input = InputState::new();
        assert!(!input.can_submit());

        input.text = "reverse a string".to_string();
        assert!(input.can_submit());

        input.text.clear();
        input.code = "fn main() {}".to_string();
        assert!(input.can_submit());

        input.code.clear();
        input.file = Some(MediaFile::classify("a.png", vec![0]).unwrap());
        assert!(input.can_submit());
    }

    #[test]
    fn test_switching_modality_preserves_content() {
        let mut input = InputState::new();
        input.text = "bubble sort".to_string();
        input.select(Modality::Code);
        input.select(Modality::Text);
        assert_eq!(input.text, "bubble sort");
    }

    #[test]
    fn test_submission_shapes() {
        let mut input = InputState::new();
        input.text = "reverse a string".to_string();
        assert_eq!(
            input.submission().unwrap(),
            Submission::Text {
                content: "reverse a string".to_string()
            }
        );

        input.select(Modality::Image);
        assert!(input.submission().is_err());

        input.attach(MediaFile::classify("flow.png", vec![9]).unwrap());
        input.image_description = "a flowchart".to_string();
        match input.submission().unwrap() {
            Submission::Image { file, description } => {
                assert_eq!(file.name, "flow.png");
                assert_eq!(description, "a flowchart");
            }
            other => panic!("expected image submission, got {:?}", other),
        }
    }
}
