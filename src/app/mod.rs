//! Terminal Frontend Module
//!
//! Thin glue between the chat client and a terminal: a login prompt,
//! ANSI rendering of the chat view, and the stdin send loop live in the
//! `michat` binary (`src/app/main.rs`); the reusable pieces are here.

pub mod terminal;

pub use terminal::{prompt_line, render_line};
