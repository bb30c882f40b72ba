use severity::Severity;

const ERROR_BIT: u8 = 0x01;
const WARN_BIT: u8 = 0x02;
const INFO_BIT: u8 = 0x04;
const DEBUG_BIT: u8 = 0x08;
const TRACE_BIT: u8 = 0x10;

/// Per-level switches derived from a threshold.
///
/// Each field equals `threshold <= level` for the threshold the set was built
/// from. There is no field for [`Severity::NONE`]; nothing is ever logged at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gates {
    pub error: bool,
    pub warn: bool,
    pub info: bool,
    pub debug: bool,
    pub trace: bool,
}

impl Gates {
    pub const fn for_threshold(threshold: Severity) -> Self {
        Self {
            error: threshold.admits(Severity::ERROR),
            warn: threshold.admits(Severity::WARN),
            info: threshold.admits(Severity::INFO),
            debug: threshold.admits(Severity::DEBUG),
            trace: threshold.admits(Severity::TRACE),
        }
    }

    /// Returns whether messages at `level` pass. Always false for
    /// [`Severity::NONE`] and unnamed values.
    pub const fn is_open(self, level: Severity) -> bool {
        match level {
            Severity::ERROR => self.error,
            Severity::WARN => self.warn,
            Severity::INFO => self.info,
            Severity::DEBUG => self.debug,
            Severity::TRACE => self.trace,
            _ => false,
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        let mut bits = 0u8;
        if self.error {
            bits |= ERROR_BIT;
        }
        if self.warn {
            bits |= WARN_BIT;
        }
        if self.info {
            bits |= INFO_BIT;
        }
        if self.debug {
            bits |= DEBUG_BIT;
        }
        if self.trace {
            bits |= TRACE_BIT;
        }
        bits
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self {
            error: bits & ERROR_BIT != 0,
            warn: bits & WARN_BIT != 0,
            info: bits & INFO_BIT != 0,
            debug: bits & DEBUG_BIT != 0,
            trace: bits & TRACE_BIT != 0,
        }
    }
}
