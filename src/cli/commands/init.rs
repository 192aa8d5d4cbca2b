use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimeTracker…");

    let data_path = Config::init_all(cli.data.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Data file   : {}", data_path.display());

    success("rTimeTracker initialization completed!");
    Ok(())
}
