// ---------------------------------------------------------------------------
// Device-type inference
// ---------------------------------------------------------------------------
//
// Guesses a device category from indirect, possibly-conflicting signals:
// OUI vendor string, open-port set, OS match, resolved hostname. Two rule
// sets exist because fast and full scans supply different signals; they are
// deliberately not unified.

pub mod signals;
pub mod strategy;

pub use signals::gather_signals;
pub use strategy::{VENDOR_KEYWORDS, infer};
