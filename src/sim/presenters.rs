//! Presentation collaborators that log instead of render.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::PresentationError;
use crate::presentation::{CounterText, FailAnimation, FailIndicator, Placement};

/// Approximate glyph width in text units, for layout.
const GLYPH_WIDTH: f32 = 0.55;

#[derive(Debug, Default)]
pub struct LogIndicator {
    shows: AtomicUsize,
    hides: AtomicUsize,
}

impl LogIndicator {
    pub fn shows(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }

    pub fn hides(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }
}

impl FailIndicator for LogIndicator {
    fn show(&self) -> Result<(), PresentationError> {
        self.shows.fetch_add(1, Ordering::SeqCst);
        tracing::info!("[indicator] LEVEL FAILED shown");
        Ok(())
    }

    fn hide(&self) -> Result<(), PresentationError> {
        self.hides.fetch_add(1, Ordering::SeqCst);
        tracing::info!("[indicator] hidden");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct LogAnimation {
    plays: AtomicUsize,
}

impl LogAnimation {
    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }
}

impl FailAnimation for LogAnimation {
    fn stop(&self) -> Result<(), PresentationError> {
        tracing::trace!("[animation] stopped");
        Ok(())
    }

    fn play(&self) -> Result<(), PresentationError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        tracing::info!("[animation] energy bar fail animation playing");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct TextState {
    text: String,
    font_size: f32,
    placement: Option<Placement>,
}

#[derive(Debug, Default)]
pub struct LogCounterText {
    state: Mutex<TextState>,
}

impl LogCounterText {
    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.lock().placement
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TextState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CounterText for LogCounterText {
    fn set_text(&self, text: &str) -> Result<(), PresentationError> {
        tracing::info!("[counter] {}", text);
        self.lock().text = text.to_string();
        Ok(())
    }

    fn font_size(&self) -> f32 {
        self.lock().font_size
    }

    fn set_font_size(&self, size: f32) -> Result<(), PresentationError> {
        self.lock().font_size = size;
        Ok(())
    }

    fn rendered_size(&self) -> (f32, f32) {
        let state = self.lock();
        let width = state.text.chars().count() as f32 * state.font_size * GLYPH_WIDTH;
        (width, state.font_size)
    }

    fn place(&self, placement: Placement) -> Result<(), PresentationError> {
        tracing::debug!(position = %placement.position, "[counter] placed");
        self.lock().placement = Some(placement);
        Ok(())
    }
}
