//! Test utilities and fixtures for tileloop development.
//!
//! Provides the reference maps used across the workspace's tests and a
//! [`RecordingSink`] that captures diagnostics for assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Mutex;
use tileloop_core::{Diagnostic, DiagnosticSink};

pub use fixtures::*;

/// Diagnostic sink that keeps everything it receives.
///
/// Share it with the code under test through an `Arc`, then inspect
/// [`take`](RecordingSink::take).
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.seen.lock().unwrap())
    }

    /// Number of diagnostics recorded so far.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.seen.lock().unwrap().push(diagnostic.clone());
    }
}
