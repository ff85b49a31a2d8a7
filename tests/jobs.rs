//! # Job Program Tests
//!
//! Programs loaded from JSON must produce exactly the bytes of the equivalent
//! direct capability calls, on both protocols.

use pretty_assertions::assert_eq;
use rollcode::config::PrinterProfile;
use rollcode::job::{Op, Program};
use rollcode::prelude::*;
use rollcode::transport::{MemoryTransport, RetryPolicy, deliver_with_retry};
use rollcode::{Aggregator, ProtocolId, RollcodeError, TransportError};

const RECEIPT: &str = r#"[
    {"op": "init"},
    {"op": "code_page", "page": 0},
    {"op": "align", "alignment": "center"},
    {"op": "size", "width": 2, "height": 2},
    {"op": "line", "text": "CORNER CAFE"},
    {"op": "size", "width": 1, "height": 1},
    {"op": "align", "alignment": "left"},
    {"op": "line", "text": "Espresso        2.80"},
    {"op": "line", "text": "Croissant       3.10"},
    {"op": "bold", "on": true},
    {"op": "line", "text": "TOTAL           5.90"},
    {"op": "bold", "on": false},
    {"op": "barcode_height", "dots": 60},
    {"op": "barcode_width", "module": 2},
    {"op": "barcode", "data": "0001234", "symbology": "code39"},
    {"op": "qr", "data": "https://cafe.example/r/0001234", "options": {"module_size": 5}},
    {"op": "feed", "lines": 3},
    {"op": "open_drawer"},
    {"op": "cut", "partial": true}
]"#;

fn direct_receipt(printer: &Aggregator) -> Result<Vec<u8>, RollcodeError> {
    let control = printer.control()?;
    let style = printer.text_style()?;
    let print = printer.print()?;
    let barcode = printer.barcode()?;

    let commands = vec![
        control.init(),
        printer.code_page()?.select(0),
        style.align(Alignment::Center),
        style.size(2, 2),
        print.line("CORNER CAFE")?,
        style.size(1, 1),
        style.align(Alignment::Left),
        print.line("Espresso        2.80")?,
        print.line("Croissant       3.10")?,
        style.bold(true),
        print.line("TOTAL           5.90")?,
        style.bold(false),
        barcode.set_height(60),
        barcode.set_width(2),
        barcode.print_barcode(b"0001234", Symbology::Code39)?,
        printer.qr()?.print_qr(
            b"https://cafe.example/r/0001234",
            QrOptions {
                module_size: 5,
                ..QrOptions::default()
            },
        )?,
        control.feed_lines(3),
        printer.cash_drawer()?.pulse(DrawerPin::Pin2, 100, 500),
        control.cut(CutMode::Partial),
    ];
    Ok(commands.into_iter().flat_map(Command::into_bytes).collect())
}

#[test]
fn test_json_receipt_matches_direct_calls() {
    let printer = Aggregator::new(ProtocolId::EscPos);
    let program = Program::from_json(RECEIPT).unwrap();

    let job = program.compile(&printer).unwrap();

    assert_eq!(job.as_bytes(), &direct_receipt(&printer).unwrap()[..]);
    assert_eq!(job.command_count(), program.len());
}

#[test]
fn test_receipt_needs_escpos_capabilities() {
    let program = Program::from_json(RECEIPT).unwrap();
    assert!(matches!(
        program.compile(&Aggregator::new(ProtocolId::Zpl)),
        Err(RollcodeError::UnknownCapability { .. })
    ));
}

#[test]
fn test_json_label_matches_direct_calls() {
    let printer = Aggregator::new(ProtocolId::Zpl);
    let program = Program::from_json(
        r#"[
            {"op": "label_start"},
            {"op": "print_width", "dots": 812},
            {"op": "field_origin", "x": 40, "y": 40},
            {"op": "text", "text": "SHIP TO: Berlin"},
            {"op": "field_origin", "x": 40, "y": 120},
            {"op": "barcode_width", "module": 3},
            {"op": "barcode", "data": "4006381333931", "symbology": "ean13"},
            {"op": "field_origin", "x": 500, "y": 120},
            {"op": "qr", "data": "PKG-77", "options": {"module_size": 4, "error_correction": "Q"}},
            {"op": "quantity", "copies": 2},
            {"op": "label_end"}
        ]"#,
    )
    .unwrap();

    let job = program.compile(&printer).unwrap();

    assert_eq!(
        String::from_utf8(job.into_bytes()).unwrap(),
        "^XA^PW812^FO40,40^FDSHIP TO: Berlin^FS^FO40,120^BY3^BEN^FD4006381333931^FS\
         ^FO500,120^BQN,2,4^FDQA,PKG-77^FS^PQ2^XZ"
    );
}

#[test]
fn test_optimized_program_prints_the_same_receipt_with_fewer_ops() {
    let printer = Aggregator::new(ProtocolId::EscPos);
    let mut program = Program::new();
    program.push(Op::Init);
    program.push(Op::Bold { on: false });
    program.push(Op::line("A"));
    program.push(Op::Init);
    program.push(Op::Bold { on: true });
    program.push(Op::Bold { on: true });
    program.push(Op::line("B"));

    let optimized = program.clone().optimize();

    assert_eq!(
        optimized.ops,
        vec![
            Op::Init,
            Op::line("A"),
            Op::Init,
            Op::Bold { on: true },
            Op::line("B"),
        ]
    );
    let bytes = optimized.compile(&printer).unwrap().into_bytes();
    assert_eq!(bytes, b"\x1b@A\n\x1b@\x1bE\x01B\n".to_vec());
}

#[test]
fn test_optimizer_keeps_reset_that_clears_bold() {
    let printer = Aggregator::new(ProtocolId::EscPos);
    let program = Program::from(vec![
        Op::Init,
        Op::Bold { on: true },
        Op::line("A"),
        Op::Init,
        Op::line("B"),
    ]);

    let raw = program.compile(&printer).unwrap().into_bytes();
    let optimized = program.optimize().compile(&printer).unwrap().into_bytes();

    assert_eq!(optimized, raw);
    assert_eq!(&optimized[7..], b"\x1b@B\n");
}

#[test]
fn test_profile_prologue_then_delivery_with_retry() {
    let profile = PrinterProfile::parse("zd421").unwrap();
    let registry = rollcode::Registry::with_defaults();
    let printer = profile.aggregator(&registry).unwrap();

    let mut program = profile.prologue();
    program.push(Op::FieldOrigin { x: 10, y: 10 });
    program.push(Op::text("Hi"));
    program.push(Op::LabelEnd);
    let job = program.compile(printer).unwrap();

    let mut transport = MemoryTransport::new();
    transport.fail_next(TransportError::transient("printer busy"));
    deliver_with_retry(&mut transport, &job, &RetryPolicy::immediate(1)).unwrap();

    assert_eq!(transport.attempts(), 2);
    assert_eq!(
        transport.deliveries()[0],
        b"^XA^PW832^FO10,10^FDHi^FS^XZ".to_vec()
    );
}
