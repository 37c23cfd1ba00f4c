//! Process exit codes (BSD sysexits.h compatible where applicable)

/// Successful termination, including lookups with zero matches
pub const OK: i32 = 0;

/// Dataset could not be resolved, read, or parsed
pub const DATASET: i32 = 2;

/// Data format error (a matched control cannot be rendered)
pub const DATAERR: i32 = 65;

/// Input/output error (writing results failed)
pub const IOERR: i32 = 74;
