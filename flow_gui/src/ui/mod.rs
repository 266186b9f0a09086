//! UI module for the Polyflow desktop app
//!
//! # Panel Structure
//! - `toolbar` - Application header and the Input/Results tab switcher
//! - `input_panel` - Modality selector grid, dispatches to input_* children,
//!   and the submit trigger
//! - `results_panel` - Pseudocode, flowchart text, and generated code views
//! - `status_bar` - Session id, backend target, recording/processing state
//!
//! # Input Panel Children
//! - `input_text` - Free-text algorithm description editor
//! - `input_code` - Code snippet editor
//! - `input_image` - Image upload + optional description
//! - `input_audio` - Microphone record controls + audio upload

// Top-level panels
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

// Input panel children
pub mod input_audio;
pub mod input_code;
pub mod input_image;
pub mod input_text;
