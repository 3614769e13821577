//! Popcount "compression": a file is folded into the sum of its set bits,
//! re-encoded as 8 big-endian bytes and folded again until the value stops
//! changing. The result is written as hex to a `.zr` file next to the input.
//! Lossy by construction, there is no way back.

pub mod compressor;
pub mod error;
pub mod utils;
pub mod writer;

use colored::*;

pub use compressor::*;
pub use error::{Error, Result};
pub use utils::*;
pub use writer::*;
