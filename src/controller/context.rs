//! Match-scoped context and collaborator wiring.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::ConfigStore;
use crate::controller::gate::GameplaySetup;
use crate::lifecycle::Teardown;
use crate::presentation::{CounterText, FailAnimation, FailIndicator};
use crate::session::{MatchEndHandler, SessionFacade};

/// Everything that lives exactly as long as one match.
#[derive(Clone)]
pub struct MatchContext {
    pub match_id: Uuid,
    pub config: ConfigStore,
    pub gameplay: GameplaySetup,
    pub teardown: Teardown,
}

impl MatchContext {
    pub fn new(config: ConfigStore, gameplay: GameplaySetup) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            config,
            gameplay,
            teardown: Teardown::new(),
        }
    }
}

/// Host-provided collaborators. Any of them may be missing.
#[derive(Clone, Default)]
pub struct Collaborators {
    pub session: Option<Arc<dyn SessionFacade>>,
    pub match_end: Option<Arc<dyn MatchEndHandler>>,
    pub indicator: Option<Arc<dyn FailIndicator>>,
    pub animation: Option<Arc<dyn FailAnimation>>,
    pub counter: Option<Arc<dyn CounterText>>,
}

impl Collaborators {
    pub fn with_session(mut self, session: Arc<dyn SessionFacade>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_match_end(mut self, handler: Arc<dyn MatchEndHandler>) -> Self {
        self.match_end = Some(handler);
        self
    }

    pub fn with_indicator(mut self, indicator: Arc<dyn FailIndicator>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn with_animation(mut self, animation: Arc<dyn FailAnimation>) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_counter(mut self, counter: Arc<dyn CounterText>) -> Self {
        self.counter = Some(counter);
        self
    }
}
