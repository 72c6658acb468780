//! sprite-adjust - rewrites the cat sprite frames with the built-in corrections
//!
//! Run from the repository root. Takes no arguments; set `RUST_LOG=debug` for
//! per-frame diagnostics on stderr.

use std::io;

use anyhow::Context;
use log::debug;
use sprite_adjust_core::{apply_all, version, AdjustmentTable, DriverConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    debug!("sprite-adjust-core {}", version());

    let table = AdjustmentTable::builtin();
    let config = DriverConfig::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    apply_all(&table, &config, &mut out).with_context(|| {
        format!(
            "adjustment pass aborted under {}",
            config.assets_dir.display()
        )
    })?;

    Ok(())
}
