//! The lookup tables for on-host waveform control
//!
//! The controller can either run the factory waveforms from its OTP memory or
//! waveforms written into its LUT registers. Two sets are carried here: the
//! custom full-refresh set, which is faster than the factory one with a
//! slight ghosting penalty, and the quick set, which trades more ghosting
//! for a much shorter refresh.
//!
//! Each set has one table per transition type, loaded through the registers
//! 0x20..=0x24 in the order VCOM, WW, BW, WB, BB.

use crate::command::Command;

/// Length of every waveform table in bytes
pub(crate) const LUT_LEN: usize = 42;

/// One full register set of waveform tables
pub(crate) struct LutSet {
    pub(crate) vcom: &'static [u8; LUT_LEN],
    pub(crate) ww: &'static [u8; LUT_LEN],
    pub(crate) bw: &'static [u8; LUT_LEN],
    pub(crate) wb: &'static [u8; LUT_LEN],
    pub(crate) bb: &'static [u8; LUT_LEN],
}

impl LutSet {
    /// The tables paired with their registers, in controller load order
    pub(crate) fn tables(&self) -> [(Command, &'static [u8; LUT_LEN]); 5] {
        [
            (Command::LutVcom, self.vcom),
            (Command::LutWhiteToWhite, self.ww),
            (Command::LutBlackToWhite, self.bw),
            (Command::LutWhiteToBlack, self.wb),
            (Command::LutBlackToBlack, self.bb),
        ]
    }
}

/// Custom full-refresh waveforms, taken from the Waveshare reference driver
pub(crate) const LUT_NORMAL: LutSet = LutSet {
    vcom: &LUT_VCOM,
    ww: &LUT_WW,
    bw: &LUT_BW,
    wb: &LUT_WB,
    bb: &LUT_BB,
};

/// Quick-refresh waveforms: same shape as the full set with the frame
/// durations cut down
pub(crate) const LUT_FAST: LutSet = LutSet {
    vcom: &LUT_VCOM_FAST,
    ww: &LUT_WW_FAST,
    bw: &LUT_BW_FAST,
    wb: &LUT_WB_FAST,
    bb: &LUT_BB_FAST,
};

#[rustfmt::skip]
const LUT_VCOM: [u8; LUT_LEN] = [
    0x00, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x0F, 0x01, 0x0F, 0x01, 0x02,
    0x00, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_WW: [u8; LUT_LEN] = [
    0x10, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x84, 0x0F, 0x01, 0x0F, 0x01, 0x02,
    0x20, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_BW: [u8; LUT_LEN] = [
    0x10, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x84, 0x0F, 0x01, 0x0F, 0x01, 0x02,
    0x20, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_WB: [u8; LUT_LEN] = [
    0x80, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x84, 0x0F, 0x01, 0x0F, 0x01, 0x02,
    0x40, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_BB: [u8; LUT_LEN] = [
    0x80, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x84, 0x0F, 0x01, 0x0F, 0x01, 0x02,
    0x40, 0x0F, 0x0F, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_VCOM_FAST: [u8; LUT_LEN] = [
    0x00, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x04, 0x01, 0x04, 0x01, 0x02,
    0x00, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_WW_FAST: [u8; LUT_LEN] = [
    0x10, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x84, 0x04, 0x01, 0x04, 0x01, 0x02,
    0x20, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_BW_FAST: [u8; LUT_LEN] = [
    0x10, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x84, 0x04, 0x01, 0x04, 0x01, 0x02,
    0x20, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_WB_FAST: [u8; LUT_LEN] = [
    0x80, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x84, 0x04, 0x01, 0x04, 0x01, 0x02,
    0x40, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const LUT_BB_FAST: [u8; LUT_LEN] = [
    0x80, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x84, 0x04, 0x01, 0x04, 0x01, 0x02,
    0x40, 0x04, 0x04, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_tables_per_set() {
        assert_eq!(LUT_NORMAL.tables().len(), 5);
        assert_eq!(LUT_FAST.tables().len(), 5);
    }

    #[test]
    fn tables_have_documented_length() {
        for set in [&LUT_NORMAL, &LUT_FAST] {
            for (_, table) in set.tables() {
                assert_eq!(table.len(), 42);
            }
        }
    }

    #[test]
    fn load_order_is_vcom_ww_bw_wb_bb() {
        let registers: [u8; 5] = LUT_NORMAL.tables().map(|(cmd, _)| cmd.address());
        assert_eq!(registers, [0x20, 0x21, 0x22, 0x23, 0x24]);
    }
}
