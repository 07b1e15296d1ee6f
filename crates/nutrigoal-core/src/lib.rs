// ABOUTME: Core types and constants for the nutrigoal calorie and macro goal service
// ABOUTME: Foundation crate with error handling, profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrigoal Core
//!
//! Foundation crate providing shared types and constants for the nutrigoal
//! service. It changes rarely, so the service crate compiles incrementally
//! on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological constants, defaults, and environment variable names
//! - **models**: Profile enums and the value objects exchanged with callers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Profile and nutrition goal models
pub mod models;
