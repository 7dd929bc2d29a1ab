//! Jarvis Library
//!
//! Core library for the Jarvis floating assistant: the chat widget state
//! machine and its Dioxus desktop front end.

pub mod app;
pub mod chat;
pub mod storage;
pub mod types;
pub mod ui;
