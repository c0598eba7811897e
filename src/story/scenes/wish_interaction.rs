//=========================================================================
// Wish Interaction
//=========================================================================
//
// "And I almost forgot..." A single text field. Sending an empty wish
// is not possible; a sent wish is stored and drifts off to the stars
// for three seconds before the rating form.
//
//=========================================================================

use std::time::Duration;

use log::info;

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::Timers;
use crate::story::{SceneId, StoryAction};

const SENDING_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Sent,
}

pub struct WishInteraction {
    draft: String,
    submitted: bool,
    timers: Timers<Cue>,
}

impl WishInteraction {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            submitted: false,
            timers: Timers::new(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Sending is disabled while the draft is blank.
    pub fn can_submit(&self) -> bool {
        !self.submitted && !self.draft.trim().is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn submit(&mut self, ctx: &mut StoryContext) {
        if !self.can_submit() {
            return;
        }
        info!(target: "story::scene", "Wish sent ({} chars)", self.draft.chars().count());
        ctx.store_mut().set_wish(self.draft.clone());
        self.submitted = true;
        self.timers.after(SENDING_DELAY, Cue::Sent);
    }
}

impl Default for WishInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for WishInteraction {
    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if self.submitted {
            return;
        }
        match input {
            StoryInput::Text(text) => self.draft.push_str(text),
            StoryInput::Action(StoryAction::Erase) => {
                self.draft.pop();
            }
            StoryInput::Action(StoryAction::Continue) => self.submit(ctx),
            _ => {}
        }
    }

    fn update(&mut self, dt: Duration, ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(Cue::Sent) = self.timers.pop_due() {
            ctx.transition_to(SceneId::RatingMessage);
        }
    }

    fn status(&self) -> String {
        if self.submitted {
            "The universe is working on it.".to_string()
        } else if self.draft.is_empty() {
            "And I almost forgot... make a wish: I wish...".to_string()
        } else {
            format!("Your wish: {}_ (Enter: send to the stars)", self.draft)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::scenes::testing::{enter, press, queued, run_for, type_text};

    #[test]
    fn typing_and_erasing_edit_the_draft() {
        let mut wish = WishInteraction::new();
        let mut ctx = enter(&mut wish);

        type_text(&mut wish, &mut ctx, "a kite");
        type_text(&mut wish, &mut ctx, "é");
        press(&mut wish, &mut ctx, StoryAction::Erase);

        assert_eq!(wish.draft(), "a kite");
    }

    #[test]
    fn blank_wish_cannot_be_sent() {
        let mut wish = WishInteraction::new();
        let mut ctx = enter(&mut wish);

        press(&mut wish, &mut ctx, StoryAction::Continue);
        type_text(&mut wish, &mut ctx, "   ");
        assert!(!wish.can_submit());
        press(&mut wish, &mut ctx, StoryAction::Continue);

        assert!(!wish.is_submitted());
        assert_eq!(ctx.store().wish(), "");
        run_for(&mut wish, &mut ctx, SENDING_DELAY * 2);
        assert!(queued(&mut ctx).is_empty());
    }

    #[test]
    fn sent_wish_is_stored_then_moves_on() {
        let mut wish = WishInteraction::new();
        let mut ctx = enter(&mut wish);

        type_text(&mut wish, &mut ctx, "a telescope");
        press(&mut wish, &mut ctx, StoryAction::Continue);

        assert_eq!(ctx.store().wish(), "a telescope");
        type_text(&mut wish, &mut ctx, "!");
        assert_eq!(wish.draft(), "a telescope", "Sent wish is frozen");

        run_for(&mut wish, &mut ctx, SENDING_DELAY);
        assert_eq!(queued(&mut ctx), vec![SceneId::RatingMessage]);
    }
}
