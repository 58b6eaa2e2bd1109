// ABOUTME: Re-exports nutrient tables, serving constants, scoring thresholds and limits from ate-core
// ABOUTME: Shared by the catalog normalizer, the meal scorer and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ate_core::constants::*;
