// ABOUTME: Re-exports the error system from ate-core
// ABOUTME: AppError, ErrorCode, CatalogError and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ate_core::errors::*;
