//! # Program Optimizer
//!
//! Passes, in order:
//!
//! 1. **Remove redundant init**: an `Init` is dropped only when the printer
//!    is already in its reset state: no content since the previous `Init` and
//!    every tracked setting back at its default
//! 2. **Remove redundant settings**: a setting op equal to the current
//!    [`Session`] value is dropped
//!
//! Both passes preserve what the printer prints. Text is never merged: on
//! ZPL every text op is its own field.

use tracing::trace;

use super::ops::Op;
use super::Program;
use crate::session::Session;

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = remove_redundant_init(self.ops);
        let ops = remove_redundant_settings(ops);
        Program { ops }
    }
}

fn remove_redundant_init(ops: Vec<Op>) -> Vec<Op> {
    let mut session = Session::new();
    // A reset also clears the print buffer, so unterminated text or any other
    // content since the last reset keeps the next one alive.
    let mut content_since_init = true;
    let mut result = Vec::with_capacity(ops.len());

    for (index, op) in ops.into_iter().enumerate() {
        if matches!(op, Op::Init) {
            if !content_since_init && session == Session::after_init() {
                trace!(index, "Dropping repeated init");
                continue;
            }
            content_since_init = false;
        } else if !op.is_setting() {
            content_since_init = true;
        }
        session.apply(&op);
        result.push(op);
    }

    result
}

fn remove_redundant_settings(ops: Vec<Op>) -> Vec<Op> {
    let mut session = Session::new();
    let mut result = Vec::with_capacity(ops.len());

    for (index, op) in ops.into_iter().enumerate() {
        if session.apply(&op) {
            result.push(op);
        } else {
            trace!(index, ?op, "Dropping redundant setting");
        }
    }

    result
}
