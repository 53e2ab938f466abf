// SPDX-License-Identifier: MPL-2.0
//! `imgv` is a shuffled photo slideshow built with the Iced GUI framework.
//!
//! Photos are collected from user-chosen folders, shuffled into a playlist
//! and shown one at a time in a pan-and-zoom viewport. Files that fail to
//! decode are skipped so the slideshow keeps going.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod media;
pub mod slideshow;
pub mod ui;

#[cfg(test)]
mod test_utils;
