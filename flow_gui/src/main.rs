//! # Polyflow Desktop Application
//!
//! Single stateful view over `flow_core`: collect one of four input
//! modalities, submit it to the AI backend, and render the returned
//! pseudocode, flowchart text, and per-language code.
//!
//! Built with Iced. Two tabs (`Input`, `Results`); the results tab stays
//! disabled until a submission succeeds. Exactly one submission may be in
//! flight at a time; the trigger is disabled while one is pending.

use std::path::PathBuf;

use iced::widget::{column, container, row, scrollable, text, text_editor, Space};
use iced::{Alignment, Element, Length, Padding, Subscription, Task, Theme};
use tracing::info;

use flow_core::audio::Recorder;
use flow_core::client::{BackendClient, BackendConfig};
use flow_core::export::{download_filename, export_code, DiskSink};
use flow_core::input::{InputState, MediaFile, Modality};
use flow_core::languages::Language;
use flow_core::result::TransformResult;
use flow_core::session::Session;
use flow_core::{prompts, FlowError};

mod ui;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((1100.0, 760.0))
        .run()
}

/// The two mutually exclusive view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Input,
    Results,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    ModalitySelected(Modality),
    TextEdited(text_editor::Action),
    CodeEdited(text_editor::Action),
    ImageDescriptionChanged(String),
    UseExamplePrompt,
    PickFile,
    FileDropped(PathBuf),
    FileLoaded(Result<Option<MediaFile>, String>),
    ToggleRecording,
    Submit,
    SubmissionFinished(Result<TransformResult, FlowError>),
    LanguageSelected(Language),
    CopyPseudocode,
    CopyCode,
    DownloadCode,
    DownloadTargetChosen(Option<PathBuf>),
    DismissError,
}

/// Application state: one session, one collector, at most one result.
pub struct App {
    session: Session,
    client: Option<BackendClient>,

    active_tab: Tab,
    input: InputState,
    text_content: text_editor::Content,
    code_content: text_editor::Content,

    recorder: Option<Recorder>,
    is_processing: bool,

    result: Option<TransformResult>,
    selected_language: Language,

    error_message: Option<String>,
    status: String,

    prompt_cursor: usize,
}

impl App {
    fn new() -> (App, Task<Message>) {
        let session = Session::generate();
        let config = BackendConfig::from_env();
        info!(
            session = session.id(),
            backend = config.base_url(),
            "starting Polyflow"
        );

        let mut error_message = None;
        let client = match BackendClient::new(config) {
            Ok(client) => Some(client),
            Err(e) => {
                error_message = Some(e.user_message());
                None
            }
        };

        let app = App {
            session,
            client,
            active_tab: Tab::Input,
            input: InputState::new(),
            text_content: text_editor::Content::new(),
            code_content: text_editor::Content::new(),
            recorder: None,
            is_processing: false,
            result: None,
            selected_language: Language::Python,
            error_message,
            status: "Ready".to_string(),
            prompt_cursor: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Polyflow - AI Multimodal Coding Assistant".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Window-level file drops feed the same classification path as the picker
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    /// Submission is allowed once any modality holds content and nothing is
    /// already in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_processing && self.client.is_some() && self.input.can_submit()
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    pub fn session_id(&self) -> &str {
        self.session.id()
    }

    pub fn backend_url(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.config().base_url())
            .unwrap_or("(not configured)")
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn text_editor_content(&self) -> &text_editor::Content {
        &self.text_content
    }

    pub fn code_editor_content(&self) -> &text_editor::Content {
        &self.code_content
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn result(&self) -> Option<&TransformResult> {
        self.result.as_ref()
    }

    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    /// The example prompt the "Try an example" affordance would insert next.
    pub fn next_example(&self) -> (&'static str, &'static str) {
        prompts::nth(self.prompt_cursor)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                if tab == Tab::Results && self.result.is_none() {
                    return Task::none();
                }
                self.active_tab = tab;
                Task::none()
            }

            Message::ModalitySelected(modality) => {
                self.input.select(modality);
                Task::none()
            }

            Message::TextEdited(action) => {
                self.text_content.perform(action);
                self.input.text = editor_text(&self.text_content);
                Task::none()
            }

            Message::CodeEdited(action) => {
                self.code_content.perform(action);
                self.input.code = editor_text(&self.code_content);
                Task::none()
            }

            Message::ImageDescriptionChanged(description) => {
                self.input.image_description = description;
                Task::none()
            }

            Message::UseExamplePrompt => {
                let (category, prompt) = prompts::nth(self.prompt_cursor);
                self.prompt_cursor += 1;
                self.text_content = text_editor::Content::with_text(prompt);
                self.input.text = prompt.to_string();
                self.input.select(Modality::Text);
                self.status = format!("Example: {}", category);
                Task::none()
            }

            Message::PickFile => Task::perform(pick_media_file(), Message::FileLoaded),

            Message::FileDropped(path) => {
                Task::perform(load_dropped_file(path), Message::FileLoaded)
            }

            Message::FileLoaded(Ok(Some(file))) => {
                self.status = format!("Attached {}", file.name);
                self.input.attach(file);
                Task::none()
            }

            Message::FileLoaded(Ok(None)) => Task::none(),

            Message::FileLoaded(Err(reason)) => {
                self.error_message = Some(reason);
                Task::none()
            }

            Message::ToggleRecording => {
                match self.recorder.take() {
                    Some(recorder) => match recorder.stop() {
                        Ok(recording) => {
                            let file = recording.into_media_file();
                            self.status = format!("Recorded {}", file.name);
                            self.input.attach(file);
                        }
                        Err(e) => self.error_message = Some(e.user_message()),
                    },
                    None => match Recorder::start() {
                        Ok(recorder) => {
                            self.recorder = Some(recorder);
                            self.status = "Recording...".to_string();
                        }
                        Err(e) => self.error_message = Some(e.user_message()),
                    },
                }
                Task::none()
            }

            Message::Submit => {
                if !self.can_submit() {
                    return Task::none();
                }
                let submission = match self.input.submission() {
                    Ok(submission) => submission,
                    Err(e) => {
                        self.error_message = Some(e.user_message());
                        return Task::none();
                    }
                };
                let Some(client) = self.client.clone() else {
                    return Task::none();
                };
                self.is_processing = true;
                self.error_message = None;
                self.status = "Processing with AI...".to_string();
                let session_id = self.session.id().to_string();
                Task::perform(
                    async move { client.submit(&session_id, &submission).await },
                    Message::SubmissionFinished,
                )
            }

            Message::SubmissionFinished(outcome) => {
                // Both arms re-enable submission, whatever happened
                self.is_processing = false;
                match outcome {
                    Ok(result) => {
                        self.result = Some(result);
                        self.active_tab = Tab::Results;
                        self.status = "Done".to_string();
                    }
                    Err(e) => {
                        self.error_message = Some(e.user_message());
                        self.status = "Failed".to_string();
                    }
                }
                Task::none()
            }

            Message::LanguageSelected(language) => {
                self.selected_language = language;
                Task::none()
            }

            Message::CopyPseudocode => match &self.result {
                Some(result) => iced::clipboard::write(result.pseudocode.clone()),
                None => Task::none(),
            },

            Message::CopyCode => match &self.result {
                Some(result) => {
                    iced::clipboard::write(result.code_for(self.selected_language).to_string())
                }
                None => Task::none(),
            },

            Message::DownloadCode => {
                let suggested = download_filename(self.selected_language.key());
                Task::perform(choose_save_target(suggested), Message::DownloadTargetChosen)
            }

            Message::DownloadTargetChosen(Some(path)) => {
                let Some(result) = &self.result else {
                    return Task::none();
                };
                let code = result.code_for(self.selected_language);
                let mut sink = DiskSink;
                match export_code(&mut sink, &path, code) {
                    Ok(()) => self.status = format!("Saved {}", path.display()),
                    Err(e) => self.error_message = Some(e.user_message()),
                }
                Task::none()
            }

            Message::DownloadTargetChosen(None) => Task::none(),

            Message::DismissError => {
                self.error_message = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.active_tab, self.result.is_some());

        let body: Element<'_, Message> = match self.active_tab {
            Tab::Input => ui::input_panel::view_input_panel(self),
            Tab::Results => ui::results_panel::view_results_panel(self),
        };

        let mut content = column![header].spacing(10).padding(12);

        if let Some(error) = &self.error_message {
            content = content.push(view_error_banner(error));
        }

        content = content
            .push(
                container(scrollable(body))
                    .height(Length::Fill)
                    .width(Length::Fill),
            )
            .push(ui::status_bar::view_status_bar(
                self.session_id(),
                self.backend_url(),
                self.is_recording(),
                self.is_processing,
                &self.status,
            ));

        content.into()
    }
}

/// Dismissable error banner shown above the active panel.
fn view_error_banner(error: &str) -> Element<'_, Message> {
    let dismiss = iced::widget::button(text("Dismiss").size(11))
        .on_press(Message::DismissError)
        .padding(Padding::from([4, 8]))
        .style(iced::widget::button::secondary);

    container(
        row![
            text("Error:").size(12).color([0.8, 0.2, 0.2]),
            text(error).size(12).color([0.8, 0.2, 0.2]),
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// `Content::text()` always appends a trailing newline; strip it so an empty
/// editor reads as empty content.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Native file picker filtered to the accepted image/audio/video set.
async fn pick_media_file() -> Result<Option<MediaFile>, String> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Media", &flow_core::input::ACCEPTED_EXTENSIONS)
        .pick_file()
        .await;
    let Some(handle) = handle else {
        return Ok(None);
    };
    let bytes = handle.read().await;
    MediaFile::classify(handle.file_name(), bytes)
        .map(Some)
        .map_err(|e| e.user_message())
}

/// Read and classify a file dropped onto the window.
async fn load_dropped_file(path: PathBuf) -> Result<Option<MediaFile>, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    MediaFile::classify(name, bytes)
        .map(Some)
        .map_err(|e| e.user_message())
}

/// Native save dialog seeded with the catalog-derived filename.
async fn choose_save_target(suggested_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(suggested_name)
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
