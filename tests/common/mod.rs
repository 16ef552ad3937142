//! Shared recording collaborators for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bailout_mode::config::{BailOutConfig, ConfigStore};
use bailout_mode::controller::{Collaborators, FailureOrchestrator, GameplaySetup, MatchContext};
use bailout_mode::error::PresentationError;
use bailout_mode::presentation::{CounterText, FailAnimation, FailIndicator, Placement};
use bailout_mode::session::{InMemorySession, ParticipantSnapshot};

/// Ordered log of every presentation call.
#[derive(Default)]
pub struct Recorder {
    pub calls: Mutex<Vec<String>>,
    pub shows: AtomicUsize,
    pub hides: AtomicUsize,
    pub plays: AtomicUsize,
    pub fail_show: AtomicBool,
    pub fail_play: AtomicBool,
    text: Mutex<String>,
    font_size: Mutex<f32>,
    placement: Mutex<Option<Placement>>,
}

impl Recorder {
    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    pub fn font_size(&self) -> f32 {
        *self.font_size.lock().unwrap()
    }

    pub fn placement(&self) -> Option<Placement> {
        *self.placement.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

impl FailIndicator for Recorder {
    fn show(&self) -> Result<(), PresentationError> {
        if self.fail_show.load(Ordering::SeqCst) {
            return Err(PresentationError::Show("effect destroyed".into()));
        }
        self.shows.fetch_add(1, Ordering::SeqCst);
        self.log("show");
        Ok(())
    }

    fn hide(&self) -> Result<(), PresentationError> {
        self.hides.fetch_add(1, Ordering::SeqCst);
        self.log("hide");
        Ok(())
    }
}

impl FailAnimation for Recorder {
    fn stop(&self) -> Result<(), PresentationError> {
        self.log("stop");
        Ok(())
    }

    fn play(&self) -> Result<(), PresentationError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(PresentationError::Animation("director missing".into()));
        }
        self.plays.fetch_add(1, Ordering::SeqCst);
        self.log("play");
        Ok(())
    }
}

impl CounterText for Recorder {
    fn set_text(&self, text: &str) -> Result<(), PresentationError> {
        *self.text.lock().unwrap() = text.to_string();
        self.log(format!("text:{}", text));
        Ok(())
    }

    fn font_size(&self) -> f32 {
        *self.font_size.lock().unwrap()
    }

    fn set_font_size(&self, size: f32) -> Result<(), PresentationError> {
        *self.font_size.lock().unwrap() = size;
        Ok(())
    }

    fn rendered_size(&self) -> (f32, f32) {
        (100.0, 20.0)
    }

    fn place(&self, placement: Placement) -> Result<(), PresentationError> {
        *self.placement.lock().unwrap() = Some(placement);
        Ok(())
    }
}

/// A connected session with the local player and the given remotes.
pub fn session_with(remotes: &[&str]) -> Arc<InMemorySession> {
    let mut roster = vec![ParticipantSnapshot::local("me")];
    roster.extend(remotes.iter().map(|id| ParticipantSnapshot::remote(*id)));
    Arc::new(InMemorySession::connected(roster))
}

/// An orchestrator wired to one recorder for every presentation role.
pub fn wired(
    config: BailOutConfig,
    gameplay: GameplaySetup,
    session: Option<Arc<InMemorySession>>,
) -> (FailureOrchestrator, Arc<Recorder>, ConfigStore) {
    let recorder = Arc::new(Recorder::default());
    let store = ConfigStore::new(config);

    let mut collaborators = Collaborators::default()
        .with_indicator(recorder.clone())
        .with_animation(recorder.clone())
        .with_counter(recorder.clone());
    if let Some(session) = session {
        collaborators = collaborators
            .with_session(session.clone())
            .with_match_end(session);
    }

    let context = MatchContext::new(store.clone(), gameplay);
    (FailureOrchestrator::new(context, collaborators), recorder, store)
}
