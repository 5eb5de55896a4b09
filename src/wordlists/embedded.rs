//! Embedded reference corpus
//!
//! Prose compiled into the binary at build time, used when no corpus file is given.

// Include generated corpus from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
