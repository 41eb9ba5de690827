//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers_en.rs"));
include!(concat!(env!("OUT_DIR"), "/valid_en.rs"));
include!(concat!(env!("OUT_DIR"), "/answers_de.rs"));
include!(concat!(env!("OUT_DIR"), "/valid_de.rs"));
