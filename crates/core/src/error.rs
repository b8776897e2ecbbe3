// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by trace recorders

use thiserror::Error;

/// A begin/end mismatch detected while completing a traced call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("no active trace chain while completing '{message}'")]
    NoActiveChain { message: String },
    #[error("'{message}' belongs to chain {status_id} but chain {active_id} is active")]
    ChainMismatch {
        message: String,
        status_id: String,
        active_id: String,
    },
}
