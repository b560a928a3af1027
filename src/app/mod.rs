//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod decoration;
pub mod event;
pub mod handler;
pub mod proposal;
pub mod state;
