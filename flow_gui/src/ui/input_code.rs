//! Input view for the code snippet modality

use iced::widget::{column, text, text_editor, Column};
use iced::{Font, Length};

use crate::{App, Message};

/// Render the code snippet editor
pub fn view(app: &App) -> Column<'_, Message> {
    let editor = text_editor(app.code_editor_content())
        .placeholder("Paste your code here...")
        .on_action(Message::CodeEdited)
        .font(Font::MONOSPACE)
        .height(Length::Fixed(180.0));

    column![text("Paste your code:").size(12), editor].spacing(6)
}
