//! Common test utilities for tagtree integration tests.
//!
//! This module provides:
//! - `RecordingNotifier`: notifier fake that records notices and answers confirmations
//! - `TestStore`: a JSON store in a temp directory, seeded with fixtures
//! - Fixtures: reusable registries and counts

#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
