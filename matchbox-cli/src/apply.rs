use std::io::{self, Write};

use matchbox_lib::PreferenceReconciler;

use crate::error::Error;

pub fn handle(reconciler: &PreferenceReconciler, pretty: bool) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    let batches = reconciler.batches();

    if pretty {
        serde_json::to_writer_pretty(&mut stdout, batches)?;
    } else {
        serde_json::to_writer(&mut stdout, batches)?;
    }
    writeln!(stdout).map_err(serde_json::Error::io)?;

    Ok(())
}
