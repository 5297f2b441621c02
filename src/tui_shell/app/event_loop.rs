use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        let ev = event::read().context("read event")?;
        if let Event::Resize(width, height) = ev {
            tracing::trace!(width, height, "resize");
        }
        if let Some(nav) = nav_event(&ev) {
            app.handle(nav);
        }
    }
}
