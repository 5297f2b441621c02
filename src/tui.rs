use anyhow::Result;

use crate::model::Inventory;
use crate::theme::Theme;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub theme: Theme,
    pub inventory: Inventory,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
