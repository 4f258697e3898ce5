//! Generic runtime for application orchestration.
//!
//! The Runtime drives the event loop, feeding [`Driver`] events into the
//! [`App`] and executing the actions it returns.

use crate::{App, AppAction, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime around `app`.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// Renders once, then processes events until the App asks to quit or the
    /// driver runs out of input. The driver is stopped in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error. The driver is
    /// still stopped.
    pub async fn run(mut self) -> Result<App, D::Error> {
        let result = self.event_loop().await;
        self.driver.stop();
        result.map(|()| self.app)
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        while let Some(event) = self.driver.poll_event().await? {
            tracing::trace!(?event, "app event");
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                tracing::debug!(frames = self.app.frame_count(), "quit requested");
                return Ok(());
            }
        }

        tracing::debug!("input source exhausted");
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }
}
