//! Input view for the free-text modality
//!
//! A multi-line editor for describing the algorithm, plus a rotating example
//! prompt the user can insert with one click.

use iced::widget::{button, column, row, text, text_editor, Column, Space};
use iced::{Alignment, Length, Padding};

use crate::{App, Message};

/// Render the text description editor
pub fn view(app: &App) -> Column<'_, Message> {
    let (example_category, example_prompt) = app.next_example();

    let editor = text_editor(app.text_editor_content())
        .placeholder("E.g., Create a function that sorts an array using bubble sort algorithm...")
        .on_action(Message::TextEdited)
        .height(Length::Fixed(180.0));

    column![
        text("Describe your algorithm or logic:").size(12),
        editor,
        Space::new().height(4),
        row![
            button(text("Try an example").size(11))
                .on_press(Message::UseExamplePrompt)
                .padding(Padding::from([4, 10]))
                .style(button::secondary),
            Space::new().width(8),
            text(format!("{}: {}", example_category, example_prompt))
                .size(10)
                .color([0.5, 0.5, 0.5]),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6)
}
