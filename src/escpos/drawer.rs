//! # Cash Drawer Kick-Out (ESC p m t1 t2)
//!
//! Drives the drawer solenoid through the printer's RJ-11 port.
//!
//! ## Protocol Details
//!
//! | Format  | Bytes |
//! |---------|-------|
//! | ASCII   | ESC p m t1 t2 |
//! | Hex     | 1B 70 m t1 t2 |
//!
//! - `m`: connector pin, 0 = pin 2, 1 = pin 5
//! - `t1`: on time, in units of 2 ms
//! - `t2`: off time, in units of 2 ms
//!
//! Durations are given in milliseconds, clamped to 2..=510 and rounded down to
//! the 2 ms unit. Most drawers open reliably with 100-200 ms on.

use crate::capability::{Capability, CapabilityKind, CashDrawerCommands, DrawerPin};
use crate::codec::ESC;
use crate::command::Command;
use crate::validate::Bounds;

pub const PULSE_MS: Bounds = Bounds::clamp("drawer pulse", 2, 510);

#[derive(Debug, Clone, Copy, Default)]
pub struct CashDrawer;

fn units(ms: u16) -> u8 {
    (PULSE_MS.normalize(ms.into()) / 2) as u8
}

impl Capability for CashDrawer {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::CashDrawer
    }
}

impl CashDrawerCommands for CashDrawer {
    fn pulse(&self, pin: DrawerPin, on_ms: u16, off_ms: u16) -> Command {
        let m = match pin {
            DrawerPin::Pin2 => 0,
            DrawerPin::Pin5 => 1,
        };
        Command::new(vec![ESC, b'p', m, units(on_ms), units(off_ms)])
    }
}
