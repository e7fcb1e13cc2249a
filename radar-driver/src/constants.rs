pub const DEFAULT_BAUD_RATE: u32 = 115200;
pub(crate) const READ_TIMEOUT_MS: u64 = 100;
pub(crate) const FIELD_SEPARATOR: char = ',';
pub(crate) const N_FIELDS: usize = 2;
pub(crate) const LINE_TERMINATOR: u8 = b'\n';
// A sensor line is a handful of characters; anything longer without a
// terminator is noise from a baud mismatch.
pub(crate) const MAX_LINE_LENGTH: usize = 256;
