// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides deterministic activity histories for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
