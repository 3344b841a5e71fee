use anyhow::Context;

use stockroom_cli::{CliConfig, Console, bootstrap_warehouse};

fn main() -> anyhow::Result<()> {
    // Keep the interactive session quiet unless RUST_LOG asks otherwise.
    stockroom_observability::init_with_default_filter("warn");

    let config = CliConfig::from_env().context("invalid console configuration")?;
    tracing::info!(
        default_bin = %config.default_bin,
        capacity = config.default_bin_capacity,
        report_format = ?config.report_format,
        "starting console"
    );

    let warehouse = bootstrap_warehouse(&config).context("failed to register default bin")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), warehouse, config.report_format);
    console.run().context("console I/O failed")?;

    Ok(())
}
