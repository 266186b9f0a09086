//! Input Panel (Center)
//!
//! Modality selector grid, dispatch to the active modality's editor, and the
//! submit trigger. The trigger is disabled while a submission is in flight or
//! while no modality holds content.

use iced::widget::{button, column, container, row, text, Column};
use iced::{Element, Length, Padding};

use flow_core::input::Modality;

use super::{input_audio, input_code, input_image, input_text};
use crate::{App, Message};

/// Render the input tab
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let selector = view_modality_selector(app.input_state().active());

    let editor: Column<'_, Message> = match app.input_state().active() {
        Modality::Text => input_text::view(app),
        Modality::Code => input_code::view(app),
        Modality::Image => input_image::view(app),
        Modality::Audio => input_audio::view(app),
    };

    let submit_label = if app.is_processing() {
        "Processing with AI..."
    } else {
        "Transform with AI"
    };
    let submit = button(text(submit_label).size(13))
        .on_press_maybe(app.can_submit().then_some(Message::Submit))
        .padding(Padding::from([8, 24]))
        .style(button::primary);

    column![
        container(selector)
            .padding(10)
            .width(Length::Fill)
            .style(container::bordered_box),
        container(editor)
            .padding(10)
            .width(Length::Fill)
            .style(container::bordered_box),
        row![submit].padding(Padding::from([6, 0])),
    ]
    .spacing(10)
    .into()
}

/// Render the four modality choice buttons
fn view_modality_selector(active: Modality) -> Element<'static, Message> {
    let mut choices = row![].spacing(6);
    for modality in Modality::ALL {
        let style = if active == modality {
            button::primary
        } else {
            button::secondary
        };
        choices = choices.push(
            button(text(modality.display_name()).size(12))
                .on_press(Message::ModalitySelected(modality))
                .padding(Padding::from([8, 14]))
                .style(style),
        );
    }

    column![text("Choose Input Type").size(14), choices]
        .spacing(8)
        .into()
}
