//=========================================================================
// Making Of
//=========================================================================
//
// Closing credits. Three slides, four seconds each, then a final card
// that stays on screen. There is no scene after this one.
//
//=========================================================================

use std::time::Duration;

use super::StoryContext;
use crate::core::scene::Scene;
use crate::core::timer::{TimerId, Timers};
use crate::story::{SceneId, StoryAction};

pub const STEPS: [(&str, &str); 3] = [
    ("The Concept", "First, I just wanted to say sorry..."),
    ("The Design", "Then I thought about what you love..."),
    ("The Code", "It took some late nights, but it was worth it."),
];

pub const FINAL_CARD: &str = "Made with love, time, and a heart that never forgot.";

const STEP_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    NextStep,
}

pub struct MakingOf {
    step: usize,
    step_timer: Option<TimerId>,
    timers: Timers<Cue>,
}

impl MakingOf {
    pub fn new() -> Self {
        Self {
            step: 0,
            step_timer: None,
            timers: Timers::new(),
        }
    }

    /// Title and text of the slide on screen, `None` on the final card.
    pub fn current_step(&self) -> Option<(&'static str, &'static str)> {
        STEPS.get(self.step).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= STEPS.len()
    }
}

impl Default for MakingOf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for MakingOf {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.step_timer = Some(self.timers.every(STEP_DURATION, Cue::NextStep));
    }

    fn update(&mut self, dt: Duration, _ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(Cue::NextStep) = self.timers.pop_due() {
            self.step += 1;
            if self.is_finished() {
                if let Some(id) = self.step_timer.take() {
                    self.timers.cancel(id);
                }
            }
        }
    }

    fn status(&self) -> String {
        match self.current_step() {
            Some((title, text)) => format!("Making of: {title}. {text}"),
            None => FINAL_CARD.to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::scenes::testing::{enter, press, queued, run_for};

    #[test]
    fn slides_then_final_card() {
        let mut credits = MakingOf::new();
        let mut ctx = enter(&mut credits);
        assert_eq!(credits.current_step(), Some(STEPS[0]));

        run_for(&mut credits, &mut ctx, STEP_DURATION * 2);
        assert_eq!(credits.current_step(), Some(STEPS[2]));

        run_for(&mut credits, &mut ctx, STEP_DURATION);
        assert!(credits.is_finished());
        assert_eq!(credits.status(), FINAL_CARD);
    }

    #[test]
    fn final_card_is_terminal() {
        let mut credits = MakingOf::new();
        let mut ctx = enter(&mut credits);

        run_for(&mut credits, &mut ctx, STEP_DURATION * 10);
        press(&mut credits, &mut ctx, StoryAction::Continue);

        assert_eq!(credits.status(), FINAL_CARD);
        assert!(queued(&mut ctx).is_empty());
    }
}
