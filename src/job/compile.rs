//! # Compilation
//!
//! Lowers ops to commands through an [`Aggregator`]'s capability accessors.

use super::ops::Op;
use super::Program;
use crate::capability::CutMode;
use crate::command::{Command, JobBuffer};
use crate::error::Result;
use crate::protocol::Aggregator;

impl Op {
    /// Encode this op for `printer`.
    ///
    /// Fails with `UnknownCapability` if the protocol lacks the op's
    /// capability, or with the capability's validation error.
    pub fn encode(&self, printer: &Aggregator) -> Result<Command> {
        let cmd = match self {
            // ===== Control =====
            Op::Init => printer.control()?.init(),
            Op::Feed { lines } => printer.control()?.feed_lines(*lines),
            Op::Cut { partial } => {
                let mode = if *partial { CutMode::Partial } else { CutMode::Full };
                printer.control()?.cut(mode)
            }

            // ===== Content =====
            Op::Text { text } => printer.print()?.text(text)?,
            Op::Line { text } => printer.print()?.line(text)?,

            // ===== Style =====
            Op::Bold { on } => printer.text_style()?.bold(*on),
            Op::Underline { mode } => printer.text_style()?.underline(*mode),
            Op::Align { alignment } => printer.text_style()?.align(*alignment),
            Op::Size { width, height } => printer.text_style()?.size(*width, *height),
            Op::LineSpacing { dots } => printer.line_spacing()?.set_spacing(*dots),
            Op::DefaultLineSpacing => printer.line_spacing()?.default_spacing(),
            Op::CodePage { page } => printer.code_page()?.select(*page),

            // ===== Barcodes =====
            Op::BarcodeHeight { dots } => printer.barcode()?.set_height(*dots),
            Op::BarcodeWidth { module } => printer.barcode()?.set_width(*module),
            Op::Barcode { data, symbology } => {
                printer.barcode()?.print_barcode(data.as_bytes(), *symbology)?
            }
            Op::Qr { data, options } => printer.qr()?.print_qr(data.as_bytes(), *options)?,

            // ===== Peripherals =====
            Op::OpenDrawer { pin, on_ms, off_ms } => {
                printer.cash_drawer()?.pulse(*pin, *on_ms, *off_ms)
            }

            // ===== Labels =====
            Op::LabelStart => printer.label()?.start(),
            Op::LabelEnd => printer.label()?.end(),
            Op::FieldOrigin { x, y } => printer.label()?.field_origin(*x, *y),
            Op::PrintWidth { dots } => printer.label()?.print_width(*dots),
            Op::Quantity { copies } => printer.label()?.quantity(*copies),

            Op::Raw { bytes } => Command::new(bytes.clone()),
        };
        Ok(cmd)
    }
}

impl Program {
    /// Compile every op in order into one job buffer.
    ///
    /// The first failing op aborts compilation; no partial buffer is
    /// returned.
    pub fn compile(&self, printer: &Aggregator) -> Result<JobBuffer> {
        let mut job = JobBuffer::new();
        for op in &self.ops {
            job.push(op.encode(printer)?);
        }
        Ok(job)
    }
}
