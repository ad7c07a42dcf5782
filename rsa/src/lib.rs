use std::sync::LazyLock;
use std::time::Instant;

pub mod batch;
pub mod config;
pub mod io;
pub mod opt;
pub mod samplers;
pub mod util;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
