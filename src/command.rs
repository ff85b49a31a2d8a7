//! # Commands and Job Buffers
//!
//! A [`Command`] is the output of exactly one capability operation: the
//! instruction bytes plus their encoded parameters. It is immutable once
//! built and has no identity beyond its content.
//!
//! A [`JobBuffer`] collects commands in call order. Order matters: printers
//! are stateful, so `GS w` (barcode width) must precede `GS k` (print barcode)
//! to take effect.
//!
//! ```
//! use rollcode::escpos::EscPos;
//! use rollcode::prelude::*;
//!
//! let printer = EscPos::new();
//! let mut job = JobBuffer::new();
//! job.push(printer.control.init());
//! job.push(printer.barcode.set_width(3));
//! job.push(printer.barcode.print_barcode(b"4006381333931", Symbology::Ean13)?);
//! job.push(printer.control.cut(CutMode::Partial));
//!
//! assert_eq!(job.command_count(), 4);
//! assert_eq!(&job.as_bytes()[..2], &[0x1B, 0x40]);
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```

use std::ops::Deref;

use uuid::Uuid;

/// One encoded printer instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command(Vec<u8>);

impl Command {
    /// Wrap already-encoded bytes.
    ///
    /// Capability implementations outside this crate (test doubles, vendor
    /// extensions) use this to produce their commands.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Command {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Command {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Command> for Vec<u8> {
    fn from(cmd: Command) -> Self {
        cmd.0
    }
}

/// Ordered byte buffer for one print job.
///
/// Each buffer gets a random id at creation. The id is not part of the bytes;
/// it only tags log events at the transport boundary.
#[derive(Debug, Clone)]
pub struct JobBuffer {
    id: Uuid,
    bytes: Vec<u8>,
    commands: usize,
}

impl JobBuffer {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            bytes: Vec::with_capacity(capacity),
            commands: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append one command after everything pushed so far.
    pub fn push(&mut self, cmd: Command) {
        self.bytes.extend_from_slice(cmd.as_bytes());
        self.commands += 1;
    }

    /// Append all commands of `other`, keeping this buffer's id.
    pub fn append(&mut self, other: JobBuffer) {
        self.bytes.extend(other.bytes);
        self.commands += other.commands;
    }

    /// Number of commands pushed.
    pub fn command_count(&self) -> usize {
        self.commands
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for JobBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Command> for JobBuffer {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        for cmd in iter {
            self.push(cmd);
        }
    }
}

impl FromIterator<Command> for JobBuffer {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        let mut job = JobBuffer::new();
        job.extend(iter);
        job
    }
}

impl AsRef<[u8]> for JobBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_accessors() {
        let cmd = Command::new(vec![0x1B, 0x40]);
        assert_eq!(cmd.len(), 2);
        assert!(!cmd.is_empty());
        assert_eq!(cmd.as_bytes(), &[0x1B, 0x40]);
        assert_eq!(&cmd[..1], &[0x1B]);
        assert_eq!(cmd.into_bytes(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_push_preserves_order() {
        let a = Command::new(vec![1, 2, 3]);
        let b = Command::new(vec![4, 5]);

        let mut job = JobBuffer::new();
        job.push(a.clone());
        job.push(b.clone());

        assert_eq!(&job.as_bytes()[..a.len()], a.as_bytes());
        assert_eq!(&job.as_bytes()[a.len()..], b.as_bytes());
        assert_eq!(job.command_count(), 2);
    }

    #[test]
    fn test_append_keeps_id() {
        let mut first: JobBuffer = vec![Command::new(vec![1])].into_iter().collect();
        let second: JobBuffer = vec![Command::new(vec![2]), Command::new(vec![3])]
            .into_iter()
            .collect();
        let id = first.id();

        first.append(second);

        assert_eq!(first.id(), id);
        assert_eq!(first.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_job_ids_differ() {
        assert_ne!(JobBuffer::new().id(), JobBuffer::new().id());
    }

    #[test]
    fn test_empty_job() {
        let job = JobBuffer::default();
        assert!(job.is_empty());
        assert_eq!(job.len(), 0);
        assert_eq!(job.command_count(), 0);
    }
}
