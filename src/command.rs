//! SPI commands for the UC8179 controller behind the Waveshare 7.5" V2 panel
//!
//! For more infos about the addresses and what they are doing look into the
//! [specification PDF](https://www.waveshare.com/w/upload/6/60/7.5inch_e-Paper_V2_Specification.pdf).

/// EPD7in5 v2 commands
///
/// Should rarely (never?) be needed directly.
#[allow(dead_code)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Command {
    /// Resolution source, LUT selection, BWR pixels, gate scan direction,
    /// source shift direction, booster switch, soft reset.
    PanelSetting = 0x00,

    /// Selecting internal and external power
    PowerSetting = 0x01,

    /// After the Power Off command, the driver will power off following the
    /// Power Off Sequence; BUSY signal will become "0".
    PowerOff = 0x02,

    /// Turning on the power
    ///
    /// After the Power ON command, the driver will power on following the
    /// Power ON sequence. Once complete, the BUSY signal will become "1".
    PowerOn = 0x04,

    /// Booster soft start strength configuration, one byte per phase
    BoosterSoftStart = 0x06,

    /// This command makes the chip enter the deep-sleep mode to save power.
    ///
    /// Deep sleep returns to stand-by by hardware reset. The only parameter
    /// is a check code, the command is executed if check code = 0xA5.
    DeepSleep = 0x07,

    /// Starts transmitting the "old" image plane into SRAM
    DataStartTransmission1 = 0x10,

    /// After this command is issued, the driver refreshes the display
    /// (data/VCOM) according to SRAM data and LUT.
    ///
    /// BUSY signal will become "0" until the display update is finished.
    DisplayRefresh = 0x12,

    /// Starts transmitting the "new" image plane into SRAM
    DataStartTransmission2 = 0x13,

    /// Dual SPI mode on/off
    DualSpi = 0x15,

    /// This command builds the VCOM Look-Up Table (LUTC)
    LutVcom = 0x20,
    /// This command builds the white-to-white Look-Up Table (LUTWW)
    LutWhiteToWhite = 0x21,
    /// This command builds the black-to-white Look-Up Table (LUTBW)
    LutBlackToWhite = 0x22,
    /// This command builds the white-to-black Look-Up Table (LUTWB)
    LutWhiteToBlack = 0x23,
    /// This command builds the black-to-black Look-Up Table (LUTBB)
    LutBlackToBlack = 0x24,

    /// This command indicates the interval of VCOM and data output. When
    /// setting the vertical back porch, the total blanking will be kept.
    VcomAndDataIntervalSetting = 0x50,

    /// This command defines non-overlap period of Gate and Source
    TconSetting = 0x60,

    /// This command defines alternative resolution, of higher priority
    /// than the RES\[1:0\] bits in the panel setting register
    ResolutionSetting = 0x61,

    /// This command reads the IC status, used to probe the busy line
    GetStatus = 0x71,

    /// This command sets the `VCOM_DC` value
    VcmDcSetting = 0x82,
}

impl Command {
    /// Returns the register address of the command
    pub(crate) fn address(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_addr() {
        assert_eq!(Command::PanelSetting.address(), 0x00);
        assert_eq!(Command::PowerSetting.address(), 0x01);
        assert_eq!(Command::PowerOff.address(), 0x02);
        assert_eq!(Command::PowerOn.address(), 0x04);
        assert_eq!(Command::BoosterSoftStart.address(), 0x06);
        assert_eq!(Command::DeepSleep.address(), 0x07);
        assert_eq!(Command::DataStartTransmission1.address(), 0x10);
        assert_eq!(Command::DisplayRefresh.address(), 0x12);
        assert_eq!(Command::DataStartTransmission2.address(), 0x13);
        assert_eq!(Command::DualSpi.address(), 0x15);
        assert_eq!(Command::VcomAndDataIntervalSetting.address(), 0x50);
        assert_eq!(Command::TconSetting.address(), 0x60);
        assert_eq!(Command::ResolutionSetting.address(), 0x61);
        assert_eq!(Command::GetStatus.address(), 0x71);
        assert_eq!(Command::VcmDcSetting.address(), 0x82);
    }

    #[test]
    fn lut_registers_are_contiguous() {
        assert_eq!(Command::LutVcom.address(), 0x20);
        assert_eq!(Command::LutWhiteToWhite.address(), 0x21);
        assert_eq!(Command::LutBlackToWhite.address(), 0x22);
        assert_eq!(Command::LutWhiteToBlack.address(), 0x23);
        assert_eq!(Command::LutBlackToBlack.address(), 0x24);
    }
}
