//! ftloc command-line binary

fn main() -> anyhow::Result<()> {
    ftloc::cli::run_cli()
}
