use tracing::debug;

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    debug!(
        before = %cli.before.display(),
        after = %cli.after.display(),
        "comparing documents"
    );

    let report = confdiff::diff_files(&cli.before, &cli.after)?;
    println!("{report}");
    Ok(())
}
