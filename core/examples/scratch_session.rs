//! Adds a few kinds of scratch data to a file and prints what comes back.
//!
//! Run with: `RUST_LOG=debug cargo run -q --example scratch_session -p nwb_scratch_core`

use nwb_scratch_core::types::Table;
use nwb_scratch_core::{Conversion, NwbFile, ScratchOptions};
use std::time::SystemTime;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut file = NwbFile::new("scratch demo", "DEMO", SystemTime::now());

    file.add_scratch(42i64, ScratchOptions::new().name("answer").notes("the answer"))?;

    let outcome = file.add_scratch(
        vec![0.5f64, 1.5, 2.5],
        ScratchOptions::new().name("offsets"),
    )?;
    for warning in &outcome.warnings {
        println!("warning: {warning}");
    }

    let table = Table::builder()
        .column("unit", vec!["a", "b"])
        .column("rate_hz", vec![3.2f64, 7.9])
        .build()?;
    file.add_scratch(table, ScratchOptions::new().name("units"))?;

    for name in file.scratch().names() {
        let value = file.get_scratch(name, Conversion::Unwrap)?;
        println!("{name}: {value:?}");
    }
    Ok(())
}
