use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::command::Command;
use crate::error::Error;
use crate::timing::Timings;

/// Linux has a default limit of 4096 bytes per SPI transfer, so payloads are
/// split into chunks of at most this size.
///
/// See <https://raspberrypi.stackexchange.com/questions/65595/spi-transfer-fails-with-buffer-size-greater-than-4096>
pub(crate) const MAX_CHUNK_SIZE: usize = 4096;

/// Transfer size used when streaming a repeated fill byte, see
/// [`DisplayInterface::data_x_times`]
const FILL_CHUNK_SIZE: usize = 128;

type IfResult<SPI, CS, BUSY, DC, RST> = Result<(), Error<SPI, CS, BUSY, DC, RST>>;

/// The connection interface between the display controller and the host
///
/// Owns the four control line roles; the SPI bus and the delay provider are
/// borrowed per call so they can be shared outside of a transfer.
pub(crate) struct DisplayInterface<SPI, CS, BUSY, DC, RST> {
    /// SPI
    _spi: PhantomData<SPI>,
    /// Chip select, low active, frames one bus transaction
    cs: CS,
    /// Low while the controller is busy, poll until ready!
    busy: BUSY,
    /// Data/command control pin (high for data, low for command)
    dc: DC,
    /// Pin for resetting
    rst: RST,
}

impl<SPI, CS, BUSY, DC, RST> DisplayInterface<SPI, CS, BUSY, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new `DisplayInterface` from the four control pins
    pub(crate) fn new(cs: CS, busy: BUSY, dc: DC, rst: RST) -> Self {
        DisplayInterface {
            _spi: PhantomData,
            cs,
            busy,
            dc,
            rst,
        }
    }

    /// Basic function for sending [Commands](Command)
    ///
    /// Drives DC low, frames one byte with CS and releases the bus again.
    pub(crate) fn cmd(
        &mut self,
        spi: &mut SPI,
        command: Command,
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        // low for commands
        self.dc.set_low().map_err(Error::Dc)?;
        self.cs.set_low().map_err(Error::Cs)?;

        let result = self.write(spi, &[command.address()]);

        self.cs.set_high().map_err(Error::Cs)?;
        result
    }

    /// Basic function for sending an array of u8-values of data over spi
    ///
    /// The payload is split into chunks of at most [`MAX_CHUNK_SIZE`] bytes,
    /// each chunk being one bus transmission. An empty payload transmits
    /// nothing.
    pub(crate) fn data(
        &mut self,
        spi: &mut SPI,
        data: &[u8],
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        // high for data
        self.dc.set_high().map_err(Error::Dc)?;
        self.cs.set_low().map_err(Error::Cs)?;

        let mut result = Ok(());
        for chunk in data.chunks(MAX_CHUNK_SIZE) {
            result = self.write(spi, chunk);
            if result.is_err() {
                break;
            }
        }

        self.cs.set_high().map_err(Error::Cs)?;
        result
    }

    /// Basic function for sending [Commands](Command) and the data belonging to it
    pub(crate) fn cmd_with_data(
        &mut self,
        spi: &mut SPI,
        command: Command,
        data: &[u8],
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        self.cmd(spi, command)?;
        self.data(spi, data)
    }

    /// Basic function for sending the same byte of data multiple times
    ///
    /// Streams a whole frame of a single fill byte without needing a frame
    /// sized buffer on the host.
    pub(crate) fn data_x_times(
        &mut self,
        spi: &mut SPI,
        val: u8,
        repetitions: u32,
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        // high for data
        self.dc.set_high().map_err(Error::Dc)?;
        self.cs.set_low().map_err(Error::Cs)?;

        let chunk = [val; FILL_CHUNK_SIZE];
        let mut remaining = repetitions as usize;
        let mut result = Ok(());
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_SIZE);
            result = self.write(spi, &chunk[..n]);
            if result.is_err() {
                break;
            }
            remaining -= n;
        }

        self.cs.set_high().map_err(Error::Cs)?;
        result
    }

    // spi write helper, flushes the bus so CS is only released after the
    // transfer completed
    fn write(&mut self, spi: &mut SPI, data: &[u8]) -> IfResult<SPI, CS, BUSY, DC, RST> {
        spi.write(data).map_err(Error::Spi)?;
        spi.flush().map_err(Error::Spi)
    }

    /// Waits until the device isn't busy anymore (busy == HIGH)
    ///
    /// The controller wants a status query before each probe of the busy
    /// line. After readiness is observed the fixed settle delay is applied.
    ///
    /// Returns [`Error::DeviceNotReady`] when the controller does not report
    /// ready within `timings.busy_timeout_ms`.
    pub(crate) fn wait_until_idle<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
        timings: &Timings,
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        let mut waited_ms: u32 = 0;
        loop {
            self.cmd(spi, Command::GetStatus)?;

            if self.busy.is_high().map_err(Error::Busy)? {
                delay.delay_ms(timings.busy_settle_ms);
                return Ok(());
            }

            if waited_ms >= timings.busy_timeout_ms {
                return Err(Error::DeviceNotReady);
            }
            delay.delay_ms(timings.busy_poll_ms);
            waited_ms = waited_ms.saturating_add(timings.busy_poll_ms.max(1));
        }
    }

    /// Resets the device
    ///
    /// Used to awake the controller from deep sleep, see
    /// [`Epd7in5::sleep`](crate::Epd7in5::sleep).
    pub(crate) fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timings: &Timings,
    ) -> IfResult<SPI, CS, BUSY, DC, RST> {
        self.rst.set_high().map_err(Error::Rst)?;
        delay.delay_ms(timings.reset_hold_ms);

        self.rst.set_low().map_err(Error::Rst)?;
        delay.delay_ms(timings.reset_pulse_ms);

        self.rst.set_high().map_err(Error::Rst)?;
        delay.delay_ms(timings.reset_hold_ms);
        Ok(())
    }

    /// Consumes the interface and hands the control pins back
    ///
    /// The output lines are driven low first so the panel's inputs aren't
    /// left floating high. Pin errors during teardown are ignored, there is
    /// nothing left to recover.
    pub(crate) fn release(mut self) -> (CS, BUSY, DC, RST) {
        let _ = self.cs.set_low();
        let _ = self.dc.set_low();
        let _ = self.rst.set_low();
        (self.cs, self.busy, self.dc, self.rst)
    }
}
