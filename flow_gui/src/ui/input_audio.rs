//! Input view for the audio modality
//!
//! Record from the microphone or upload an audio/video file. Transcription
//! happens on the backend; the client only ships the bytes.

use iced::widget::{button, column, container, text, Column};
use iced::{Length, Padding};

use crate::{App, Message};

/// Render the audio record/upload editor
pub fn view(app: &App) -> Column<'_, Message> {
    let input = app.input_state();

    let record_label = if app.is_recording() {
        "Stop Recording"
    } else {
        "Start Recording"
    };
    let record_style = if app.is_recording() {
        button::danger
    } else {
        button::primary
    };
    let record = button(text(record_label).size(12))
        .on_press(Message::ToggleRecording)
        .padding(Padding::from([6, 14]))
        .style(record_style);

    let attached = match &input.file {
        Some(file) => format!("{} ({})", file.name, file.mime),
        None => "Upload an audio or video file".to_string(),
    };

    let upload_zone = container(
        column![
            text(attached).size(12),
            text("Supports MP3, WAV, M4A, OGG, and common video formats")
                .size(10)
                .color([0.5, 0.5, 0.5]),
            button(text("Choose File").size(11))
                .on_press(Message::PickFile)
                .padding(Padding::from([4, 10]))
                .style(button::secondary),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    column![
        text("Record or upload audio:").size(12),
        record,
        text("or").size(10).color([0.5, 0.5, 0.5]),
        upload_zone,
    ]
    .spacing(8)
}
