// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for the Trendpulse workspace.

pub mod mock_provider;

pub use mock_provider::{MockProvider, ScriptedResult};
