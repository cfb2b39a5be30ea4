//! Screen lifecycle: activities take the shared context, draw until they
//! ask to leave, then hand the context back to the manager.

use std::io::Stdout;

use color_eyre::eyre::{Result, eyre};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Theme;
use super::activities::{CameraActivity, GalleryActivity};
use crate::capture::{CameraPage, CaptureService};
use crate::host::GalleryHost;
use crate::registry::ComponentRegistry;

/// State that outlives any single screen.
pub struct Context {
    pub registry: ComponentRegistry,
    pub host: GalleryHost,
    pub camera: CameraPage<Box<dyn CaptureService>>,
    pub theme: Theme,
    pub show_help: bool,
    /// Replaces the footer hints until the next successful action.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToGallery,
    SwitchToCamera,
}

impl ExitReason {
    /// Screen to open next; `None` ends the session.
    fn next(&self) -> Option<ActivityType> {
        match self {
            ExitReason::Quit => None,
            ExitReason::SwitchToGallery => Some(ActivityType::Gallery),
            ExitReason::SwitchToCamera => Some(ActivityType::Camera),
        }
    }
}

pub trait Activity {
    fn on_create(&mut self, context: Context);

    /// Draw one frame and process one tick of input.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// `Some` once the activity wants to be torn down.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Release the activity's application and return the context.
    fn on_destroy(&mut self) -> Option<Context>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Gallery,
    Camera,
}

impl ActivityType {
    fn spawn(self) -> Box<dyn Activity> {
        match self {
            ActivityType::Gallery => Box::<GalleryActivity>::default(),
            ActivityType::Camera => Box::<CameraActivity>::default(),
        }
    }
}

pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    /// Manager that opens on the gallery.
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: ActivityType::Gallery,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let context = self
                .context
                .take()
                .ok_or_else(|| eyre!("activity context was not returned"))?;
            let mut activity = self.current.spawn();
            activity.on_create(context);
            tracing::debug!(activity = ?self.current, "activity created");

            let reason = loop {
                activity.on_draw(terminal)?;
                if let Some(reason) = activity.will_umount() {
                    break reason.clone();
                }
            };

            self.context = activity.on_destroy();
            match reason.next() {
                Some(next) => {
                    tracing::debug!(from = ?self.current, to = ?next, "switching activity");
                    self.current = next;
                }
                None => return Ok(()),
            }
        }
    }
}
