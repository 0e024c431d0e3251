//! `show` command: prints the settings a run would use.

use anyhow::Result;

use multireplace_core::load_settings;

use crate::cli::ShowCommand;

pub fn run_show(cmd: &ShowCommand) -> Result<()> {
    let settings = load_settings(cmd.settings.as_deref())?;
    if cmd.json {
        println!("{}", settings.to_json_string()?);
    } else {
        print!("{}", settings.to_yaml_string()?);
    }
    Ok(())
}
