//! Cancel-then-restart gate for the fail animation.

use std::sync::Arc;

use crate::error::FeedbackError;
use crate::presentation::FailAnimation;

/// Plays the fail animation from the start on every call.
///
/// Holds no state of its own; the player tracks its playback position.
#[derive(Clone)]
pub struct AnimationGate {
    player: Option<Arc<dyn FailAnimation>>,
}

impl AnimationGate {
    pub fn new(player: Option<Arc<dyn FailAnimation>>) -> Self {
        Self { player }
    }

    pub fn is_available(&self) -> bool {
        self.player.is_some()
    }

    /// Stop any in-progress animation and start it again.
    pub fn play(&self) -> Result<(), FeedbackError> {
        let player = self
            .player
            .as_ref()
            .ok_or(FeedbackError::Unavailable("fail animation"))?;

        player.stop()?;
        player.play()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PresentationError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<&'static str>>,
        fail_play: bool,
    }

    impl FailAnimation for Recorder {
        fn stop(&self) -> Result<(), PresentationError> {
            self.calls.lock().unwrap().push("stop");
            Ok(())
        }

        fn play(&self) -> Result<(), PresentationError> {
            self.calls.lock().unwrap().push("play");
            if self.fail_play {
                return Err(PresentationError::Animation("director destroyed".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_every_play_stops_first() {
        let recorder = Arc::new(Recorder::default());
        let gate = AnimationGate::new(Some(recorder.clone()));

        gate.play().unwrap();
        gate.play().unwrap();

        assert_eq!(*recorder.calls.lock().unwrap(), vec!["stop", "play", "stop", "play"]);
    }

    #[test]
    fn test_missing_player_is_unavailable() {
        let gate = AnimationGate::new(None);
        assert_eq!(gate.play(), Err(FeedbackError::Unavailable("fail animation")));
    }

    #[test]
    fn test_player_error_is_returned() {
        let recorder = Arc::new(Recorder {
            fail_play: true,
            ..Default::default()
        });
        let gate = AnimationGate::new(Some(recorder));

        assert!(matches!(gate.play(), Err(FeedbackError::Presentation(_))));
    }
}
