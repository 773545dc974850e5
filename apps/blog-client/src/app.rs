//! Command dispatch over a shared session.
//!
//! Backend work runs on spawned tasks so the prompt keeps accepting input
//! while a fetch or submit is outstanding. Each task reports back through
//! the event channel when it settles.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use cryptoblog_core::session::View;
use cryptoblog_core::{Session, SubmitOutcome};

use crate::command::Command;

/// A backend operation finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FeedLoaded,
    Submitted(SubmitOutcome),
}

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Help,
    Exit,
}

pub struct App {
    session: Arc<Session>,
    events: UnboundedSender<Event>,
}

impl App {
    pub fn new(session: Arc<Session>, events: UnboundedSender<Event>) -> Self {
        Self { session, events }
    }

    /// Start the initial feed load.
    pub fn mount(&self) {
        let session = self.session.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            session.initialize().await;
            notify(&events, Event::FeedLoaded);
        });
    }

    pub fn handle(&self, command: Command) -> Flow {
        match command {
            Command::Toggle => self.session.toggle_form(),
            Command::Set(field, value) => self.session.set_field(field, value),
            Command::Submit => {
                let session = self.session.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let outcome = session.submit().await;
                    notify(&events, Event::Submitted(outcome));
                });
            }
            Command::Refresh => {
                let session = self.session.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    session.fetch_posts().await;
                    notify(&events, Event::FeedLoaded);
                });
            }
            Command::Help => return Flow::Help,
            Command::Quit => return Flow::Exit,
        }
        Flow::Redraw
    }

    pub fn view(&self) -> View {
        self.session.view()
    }
}

fn notify(events: &UnboundedSender<Event>, event: Event) {
    if events.send(event).is_err() {
        tracing::debug!("Prompt loop gone, dropping event");
    }
}
