//! Attempt-with-fallback
//!
//! Every AI-backed endpoint is the same two-state machine: try the AI once,
//! and on any error switch to the deterministic generator. This module is
//! the only place that policy lives.

use std::fmt;
use std::future::Future;

use crate::error::AiError;

/// Which branch produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Ai,
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Ai => "ai",
            Source::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value together with the branch that produced it
#[derive(Debug)]
pub struct Generated<T> {
    pub value: T,
    pub source: Source,
}

/// Await `primary` once; on error, log it and return `fallback()` instead.
///
/// The error never escapes: the warning log is its only trace.
pub async fn with_fallback<T, Fut, F>(label: &str, primary: Fut, fallback: F) -> Generated<T>
where
    Fut: Future<Output = Result<T, AiError>>,
    F: FnOnce() -> T,
{
    match primary.await {
        Ok(value) => {
            tracing::info!(task = label, "✅ AI generation succeeded");
            Generated {
                value,
                source: Source::Ai,
            }
        }
        Err(AiError::NotConfigured) => {
            tracing::info!(task = label, "🔄 AI not configured, using fallback");
            Generated {
                value: fallback(),
                source: Source::Fallback,
            }
        }
        Err(err) => {
            tracing::warn!(task = label, error = %err, "⚠️ AI generation failed, using fallback");
            Generated {
                value: fallback(),
                source: Source::Fallback,
            }
        }
    }
}
