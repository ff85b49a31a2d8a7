//! # Job Programs
//!
//! A [`Program`] is an ordered list of protocol-neutral [`Op`]s. Programs can
//! be built in code or loaded from JSON, optimized, and compiled against any
//! [`Aggregator`](crate::Aggregator):
//!
//! ```text
//! JSON / code → Program (Vec<Op>) → optimize → compile(&Aggregator) → JobBuffer
//! ```
//!
//! ## Example
//!
//! ```
//! use rollcode::job::{Op, Program};
//! use rollcode::{Aggregator, ProtocolId};
//!
//! let program = Program::from_json(r#"[
//!     {"op": "init"},
//!     {"op": "bold", "on": true},
//!     {"op": "line", "text": "RECEIPT"},
//!     {"op": "cut", "partial": true}
//! ]"#)?;
//!
//! let job = program.optimize().compile(&Aggregator::new(ProtocolId::EscPos))?;
//! assert_eq!(&job.as_bytes()[..2], &[0x1B, 0x40]);
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```

mod compile;
mod ops;
mod optimize;

pub use ops::Op;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An ordered list of ops. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one op.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Append all ops of `other`.
    pub fn extend(&mut self, other: Program) {
        self.ops.extend(other.ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<Op>> for Program {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcodeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_is_bare_array() {
        let program = Program::from(vec![Op::Init, Op::Feed { lines: 2 }]);
        let json = serde_json::to_string(&program).unwrap();
        assert_eq!(json, r#"[{"op":"init"},{"op":"feed","lines":2}]"#);
    }

    #[test]
    fn test_json_round_trip() {
        let program: Program = vec![Op::LabelStart, Op::Quantity { copies: 3 }, Op::LabelEnd]
            .into_iter()
            .collect();
        let back = Program::from_json(&program.to_json().unwrap()).unwrap();
        assert_eq!(back, program);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Program::from_json(r#"[{"op": "init"}, {"op": "feed"}]"#),
            Err(RollcodeError::Json(_))
        ));
    }

    #[test]
    fn test_push_and_extend() {
        let mut program = Program::new();
        assert!(program.is_empty());
        program.push(Op::Init);
        program.extend(Program::from(vec![Op::text("a"), Op::text("b")]));
        assert_eq!(program.len(), 3);
        assert_eq!(program.iter().last(), Some(&Op::text("b")));
    }
}
