//! Serial backend for boards that talk to the host over a 16550 UART

use core::arch::asm;
use core::sync::atomic::{AtomicBool, Ordering};

/// Writer over the legacy COM ports
pub(super) static SERIAL_WRITER: SerialWriter = SerialWriter {
    ports: [
        SerialPort::Com1,
        SerialPort::Com2,
        SerialPort::Com3,
        SerialPort::Com4,
    ],
    usable: [const { AtomicBool::new(false) }; 4],
};

/// Possible errors serial driver could encounter
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(super) enum SerialError {
    /// Port didn't echo back the loopback test byte
    FaultySerialPort,
}

/// Serial port base addresses
#[derive(Debug, Clone, Copy)]
#[repr(u16)]
enum SerialPort {
    Com1 = 0x3f8,
    Com2 = 0x2f8,
    Com3 = 0x3e8,
    Com4 = 0x2e8,
}

/// Writes to every port that passed its loopback test
pub(super) struct SerialWriter {
    ports: [SerialPort; 4],
    usable: [AtomicBool; 4],
}

impl SerialPort {
    /// Byte sent and expected back while the UART is in loopback mode
    const LOOPBACK_PROBE: u8 = 0xae;

    /// Program the UART for 38400 baud 8N1 and probe it
    unsafe fn init(self) -> Result<(), SerialError> {
        let base = self as u16;

        unsafe {
            outb_8(base + 1, 0x00); // Disable all interrupts
            outb_8(base + 3, 0x80); // DLAB on
            outb_8(base, 0x03); // Divisor lo byte, 38400 baud
            outb_8(base + 1, 0x00); // Divisor hi byte
            outb_8(base + 3, 0x03); // 8 bits, no parity, one stop bit
            outb_8(base + 2, 0xc7); // FIFO on, cleared, 14-byte threshold
            outb_8(base + 4, 0x1e); // Loopback mode
            outb_8(base, Self::LOOPBACK_PROBE);
        }

        if unsafe { inb_8(base) } != Self::LOOPBACK_PROBE {
            return Err(SerialError::FaultySerialPort);
        }

        // Back to normal operation
        unsafe { outb_8(base + 4, 0x0f) };

        Ok(())
    }

    /// Write a byte, expanding `\n` to `\r\n` for terminals
    fn write_byte(self, byte: u8) {
        if byte == b'\n' {
            unsafe { outb_8(self as u16, b'\r') };
        }
        unsafe { outb_8(self as u16, byte) };
    }
}

impl SerialWriter {
    /// Probe each port and remember which ones work
    pub(super) fn init(&self) {
        for (port, usable) in self.ports.iter().zip(&self.usable) {
            let ok = unsafe { port.init() }.is_ok();
            usable.store(ok, Ordering::Relaxed);
        }
    }

    /// Write a byte to all usable ports
    pub(super) fn write_byte_all(&self, byte: u8) {
        self.ports
            .iter()
            .zip(&self.usable)
            .filter(|(_, usable)| usable.load(Ordering::Relaxed))
            .for_each(|(port, _)| port.write_byte(byte));
    }
}

/// Wrapper for the 'out' instruction, accessing a `u8` port
#[inline]
unsafe fn outb_8(port: u16, value: u8) {
    unsafe {
        asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nomem, nostack),
        );
    };
}

/// Wrapper for the 'in' instruction, accessing a `u8` port
#[inline]
unsafe fn inb_8(port: u16) -> u8 {
    let res: u8;
    unsafe {
        asm!(
            "in al, dx",
            out("al") res,
            in("dx") port,
            options(nomem, nostack),
        );
    };

    res
}
