use anyhow::Result;

mod app;
mod input;
mod styles;
mod view;

use styles::Styles;
use view::{ColumnRole, render_column, render_detail};

pub(crate) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
