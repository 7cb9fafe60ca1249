use core::fmt::{self, Debug, Display, Formatter};

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

/// Everything that can go wrong while driving the display
///
/// Generic over the peripheral types so that the error of the failing
/// line/bus is preserved. The peripheral errors all implement [`Debug`]
/// through their `embedded-hal` error bounds.
pub enum Error<SPI, CS, BUSY, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Encountered an SPI error
    Spi(SPI::Error),

    /// Encountered an error on the chip select GPIO
    Cs(CS::Error),

    /// Encountered an error on the busy GPIO
    Busy(BUSY::Error),

    /// Encountered an error on the data/command GPIO
    Dc(DC::Error),

    /// Encountered an error on the reset GPIO
    Rst(RST::Error),

    /// The busy line did not report ready within
    /// [`Timings::busy_timeout_ms`](crate::Timings::busy_timeout_ms)
    DeviceNotReady,

    /// A frame buffer of the wrong length was passed in,
    /// needed is `width / 8 * height` bytes
    BufferSize {
        /// Required buffer length in bytes
        expected: usize,
        /// Provided buffer length in bytes
        actual: usize,
    },
}

impl<SPI, CS, BUSY, DC, RST> Debug for Error<SPI, CS, BUSY, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(err) => f.debug_tuple("Spi").field(err).finish(),
            Self::Cs(err) => f.debug_tuple("Cs").field(err).finish(),
            Self::Busy(err) => f.debug_tuple("Busy").field(err).finish(),
            Self::Dc(err) => f.debug_tuple("Dc").field(err).finish(),
            Self::Rst(err) => f.debug_tuple("Rst").field(err).finish(),
            Self::DeviceNotReady => f.write_str("DeviceNotReady"),
            Self::BufferSize { expected, actual } => f
                .debug_struct("BufferSize")
                .field("expected", expected)
                .field("actual", actual)
                .finish(),
        }
    }
}

impl<SPI, CS, BUSY, DC, RST> Display for Error<SPI, CS, BUSY, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(err) => write!(f, "SPI error: {:?}", err),
            Self::Cs(err) => write!(f, "chip select pin error: {:?}", err),
            Self::Busy(err) => write!(f, "busy pin error: {:?}", err),
            Self::Dc(err) => write!(f, "data/command pin error: {:?}", err),
            Self::Rst(err) => write!(f, "reset pin error: {:?}", err),
            Self::DeviceNotReady => write!(f, "display did not report ready in time"),
            Self::BufferSize { expected, actual } => write!(
                f,
                "wrong buffer length: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}
