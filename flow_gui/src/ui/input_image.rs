//! Input view for the image modality
//!
//! Upload an image or diagram via the picker or by dropping a file onto the
//! window, with an optional free-text description sent alongside it.

use iced::widget::{button, column, container, text, text_input, Column};
use iced::{Length, Padding};

use crate::{App, Message};

/// Render the image upload editor
pub fn view(app: &App) -> Column<'_, Message> {
    let input = app.input_state();

    let attached = match &input.file {
        Some(file) => format!("{} ({})", file.name, file.mime),
        None => "Drag & drop an image onto the window, or choose a file".to_string(),
    };

    let drop_zone = container(
        column![
            text(attached).size(12),
            text("Supports PNG, JPG, GIF, BMP, and WebP").size(10).color([0.5, 0.5, 0.5]),
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

    let mut panel = column![text("Upload an image or diagram:").size(12), drop_zone].spacing(6);

    // Description only applies once an image is attached
    if input
        .file
        .as_ref()
        .is_some_and(|f| f.mime.starts_with("image/"))
    {
        panel = panel.push(
            column![
                text("Optional: describe what's in the image:").size(12),
                text_input(
                    "E.g., flowchart showing a sorting algorithm, handwritten pseudocode...",
                    &input.image_description,
                )
                .on_input(Message::ImageDescriptionChanged)
                .size(12)
                .padding(6),
            ]
            .spacing(6),
        );
    }

    panel
}
