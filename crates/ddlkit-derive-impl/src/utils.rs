// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`naming`]: default SQL names derived from Rust identifiers
//! - [`types`]: syntactic inspection of field types

pub mod naming;
pub mod types;
