//! A simple Driver for the Waveshare 7.5" E-Ink Display (V2) via SPI
//!
//! # References
//!
//! - [Datasheet](https://www.waveshare.com/wiki/7.5inch_e-Paper_HAT)
//! - [Waveshare C driver](https://github.com/waveshare/e-Paper/blob/702def0/RaspberryPi%26JetsonNano/c/lib/e-Paper/EPD_7in5_V2.c)
//! - [Waveshare Python driver](https://github.com/waveshare/e-Paper/blob/702def0/RaspberryPi%26JetsonNano/python/lib/waveshare_epd/epd7in5_V2.py)
//!
//! Important note for V2:
//! Revision V2 has been released on 2019.11, the resolution is upgraded to
//! 800×480, from 640×384 of V1. The hardware and interface of V2 are
//! compatible with V1, however, the related software should be updated.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::buffer_len;
use crate::color::Color;
use crate::command::Command;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::lut::{LutSet, LUT_FAST, LUT_NORMAL};
use crate::timing::Timings;

/// Width of the display
pub const WIDTH: u32 = 800;
/// Height of the display
pub const HEIGHT: u32 = 480;
/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::White;

/// Panel setting byte selecting the factory waveforms from OTP
const PANEL_SETTING_OTP: u8 = 0x1F;
/// Panel setting byte selecting the waveforms from the LUT registers
const PANEL_SETTING_CUSTOM_LUT: u8 = 0x3F;

/// Selects which waveform source drives a full refresh
///
/// The quick refresh of [`Epd7in5::refresh_quick`] always runs from the LUT
/// registers, independent of this mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RefreshMode {
    /// Factory waveforms from the controller's OTP memory. Best image
    /// quality, slowest refresh.
    #[default]
    Otp,
    /// Host-supplied waveform tables. Shortens the full refresh at the cost
    /// of slight ghosting.
    CustomLut,
}

impl RefreshMode {
    fn panel_setting(self) -> u8 {
        match self {
            RefreshMode::Otp => PANEL_SETTING_OTP,
            RefreshMode::CustomLut => PANEL_SETTING_CUSTOM_LUT,
        }
    }
}

/// Epd7in5 (V2) driver
///
/// Exclusively owns the four control lines for its whole lifetime; the SPI
/// bus and the delay provider are borrowed per operation. Every operation
/// blocks the calling thread until the controller is done with it, there is
/// no internal concurrency and no retry anywhere. Serialize access from
/// multiple threads externally.
pub struct Epd7in5<SPI, CS, BUSY, DC, RST> {
    /// Connection interface
    interface: DisplayInterface<SPI, CS, BUSY, DC, RST>,
    /// Active refresh mode
    mode: RefreshMode,
    /// Protocol delay table
    timings: Timings,
    /// Whether the panel is initialised and not in deep sleep
    awake: bool,
}

impl<SPI, CS, BUSY, DC, RST> Epd7in5<SPI, CS, BUSY, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates the driver from the four control pins
    ///
    /// Does not touch the hardware; call [`init`](Epd7in5::init) before the
    /// first update. Acquiring the pins and the bus (and failing when they
    /// are unavailable) is the job of the HAL before this point.
    pub fn new(cs: CS, busy: BUSY, dc: DC, rst: RST, mode: RefreshMode) -> Self {
        Epd7in5 {
            interface: DisplayInterface::new(cs, busy, dc, rst),
            mode,
            timings: Timings::default(),
            awake: false,
        }
    }

    /// Replaces the protocol delay table
    ///
    /// Only useful for tests and for panels with deviating datasheets, the
    /// default values are the documented ones.
    pub fn set_timings(&mut self, timings: Timings) {
        self.timings = timings;
    }

    /// The active protocol delay table
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Powers on and configures the panel
    ///
    /// Pulses the reset line, runs the booster and power-on sequence and
    /// writes the panel configuration for the chosen [`RefreshMode`]. The
    /// command order is controller-mandated and reproduced exactly.
    pub fn init<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        log::info!("initializing display");

        self.interface.reset(delay, &self.timings)?;

        // Booster strength per the reference C source (5, 5, 6, 3)
        self.cmd_with_data(spi, Command::BoosterSoftStart, &[0x27, 0x27, 0x2F, 0x17])?;
        // Internal power, border LDO disabled
        self.cmd_with_data(spi, Command::PowerSetting, &[0x07, 0x17, 0x3F, 0x3F])?;

        self.cmd(spi, Command::PowerOn)?;
        delay.delay_ms(self.timings.power_on_ms);
        self.wait_until_idle(spi, delay)?;

        self.cmd_with_data(spi, Command::PanelSetting, &[self.mode.panel_setting()])?;
        self.send_resolution(spi)?;
        self.cmd_with_data(spi, Command::DualSpi, &[0x00])?;
        self.cmd_with_data(spi, Command::TconSetting, &[0x22])?;
        self.cmd_with_data(spi, Command::VcomAndDataIntervalSetting, &[0x10, 0x07])?;

        self.awake = true;
        Ok(())
    }

    /// Wakes the device up from deep sleep
    ///
    /// Just a readable alias for [`init`](Epd7in5::init), which already
    /// contains the necessary reset.
    pub fn wake_up<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        self.init(spi, delay)
    }

    /// Transmits a full frame into the SRAM of the EPD
    ///
    /// The controller double-buffers: the same frame goes to the old-image
    /// and the new-image plane. Use [`refresh`](Epd7in5::refresh) to make it
    /// visible.
    pub fn update_frame(
        &mut self,
        spi: &mut SPI,
        buffer: &[u8],
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        let expected = buffer_len(WIDTH as usize, HEIGHT as usize);
        if buffer.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        log::debug!("updating frame");
        self.cmd_with_data(spi, Command::DataStartTransmission1, buffer)?;
        self.cmd_with_data(spi, Command::DataStartTransmission2, buffer)
    }

    /// Refreshes the display from SRAM
    ///
    /// In [`RefreshMode::CustomLut`] the custom full-refresh waveforms are
    /// (re)loaded first; otherwise the OTP panel setting is reasserted.
    /// Blocks until the controller reports ready again.
    pub fn refresh<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        log::info!("refreshing display");

        match self.mode {
            RefreshMode::CustomLut => self.set_lut(spi, &LUT_NORMAL)?,
            RefreshMode::Otp => {
                self.cmd_with_data(spi, Command::PanelSetting, &[PANEL_SETTING_OTP])?
            }
        }

        self.cmd(spi, Command::DisplayRefresh)?;
        delay.delay_ms(self.timings.refresh_latch_ms);
        self.wait_until_idle(spi, delay)
    }

    /// Refreshes the display with the quick waveforms
    ///
    /// Always runs from the LUT registers; when the panel is configured for
    /// OTP waveforms the custom-LUT panel setting is forced first (without
    /// changing the configured [`RefreshMode`], the next full
    /// [`refresh`](Epd7in5::refresh) switches back). Trades ghosting for a
    /// much shorter wait.
    pub fn refresh_quick<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        log::info!("refreshing display (quick)");

        if self.mode != RefreshMode::CustomLut {
            self.cmd_with_data(spi, Command::PanelSetting, &[PANEL_SETTING_CUSTOM_LUT])?;
        }
        self.set_lut(spi, &LUT_FAST)?;

        self.cmd(spi, Command::DisplayRefresh)?;
        delay.delay_ms(self.timings.refresh_latch_ms);
        self.wait_until_idle(spi, delay)
    }

    /// Transmits a frame and refreshes in one go
    ///
    /// Initialises the panel first when it is uninitialised or sleeping, so
    /// a drawing surface can flush without tracking power state.
    pub fn update_and_refresh<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
        buffer: &[u8],
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        if !self.awake {
            self.init(spi, delay)?;
        }
        self.update_frame(spi, buffer)?;
        self.refresh(spi, delay)
    }

    /// Same as [`update_and_refresh`](Epd7in5::update_and_refresh) with the
    /// quick waveforms
    pub fn update_and_refresh_quick<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
        buffer: &[u8],
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        if !self.awake {
            self.init(spi, delay)?;
        }
        self.update_frame(spi, buffer)?;
        self.refresh_quick(spi, delay)
    }

    /// Clears the screen to white and refreshes right away
    ///
    /// Streams an all-zero frame (white) to both planes without needing a
    /// frame sized buffer on the host.
    pub fn clear<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        log::info!("clearing display");

        let pixel_count = WIDTH / 8 * HEIGHT;
        let fill = DEFAULT_BACKGROUND_COLOR.get_byte_value();

        self.cmd(spi, Command::DataStartTransmission1)?;
        self.interface.data_x_times(spi, fill, pixel_count)?;
        self.cmd(spi, Command::DataStartTransmission2)?;
        self.interface.data_x_times(spi, fill, pixel_count)?;

        self.refresh(spi, delay)
    }

    /// Puts the display into deep sleep to save power
    ///
    /// Keeping the panel powered for long periods can damage it, so send it
    /// to sleep whenever it doesn't need to update. Afterwards only
    /// [`wake_up`](Epd7in5::wake_up)/[`init`](Epd7in5::init) are valid.
    pub fn sleep<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        log::info!("entering deep sleep");

        self.cmd(spi, Command::PowerOff)?;
        self.wait_until_idle(spi, delay)?;
        self.cmd_with_data(spi, Command::DeepSleep, &[0xA5])?;
        delay.delay_ms(self.timings.sleep_settle_ms);

        self.awake = false;
        Ok(())
    }

    /// Get the width of the display
    pub fn width(&self) -> u32 {
        WIDTH
    }

    /// Get the height of the display
    pub fn height(&self) -> u32 {
        HEIGHT
    }

    /// The configured refresh mode
    pub fn refresh_mode(&self) -> RefreshMode {
        self.mode
    }

    /// Whether the panel is initialised and not in deep sleep
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Consumes the driver and hands the control pins back
    ///
    /// The output lines are parked low first so the panel's inputs aren't
    /// left floating high.
    pub fn release(self) -> (CS, BUSY, DC, RST) {
        self.interface.release()
    }

    /// Loads one waveform table set into the LUT registers, in the
    /// controller's table order
    fn set_lut(
        &mut self,
        spi: &mut SPI,
        set: &LutSet,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        for (command, table) in set.tables() {
            self.cmd_with_data(spi, command, table)?;
        }
        Ok(())
    }

    fn send_resolution(&mut self, spi: &mut SPI) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        let w = self.width();
        let h = self.height();

        self.cmd_with_data(
            spi,
            Command::ResolutionSetting,
            &[(w >> 8) as u8, w as u8, (h >> 8) as u8, h as u8],
        )
    }

    fn wait_until_idle<D: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut D,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        self.interface.wait_until_idle(spi, delay, &self.timings)
    }

    fn cmd(
        &mut self,
        spi: &mut SPI,
        command: Command,
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        self.interface.cmd(spi, command)
    }

    fn cmd_with_data(
        &mut self,
        spi: &mut SPI,
        command: Command,
        data: &[u8],
    ) -> Result<(), Error<SPI, CS, BUSY, DC, RST>> {
        self.interface.cmd_with_data(spi, command, data)
    }
}
