//=========================================================================
// Rating Message
//=========================================================================
//
// "Just one last thing..." Pick a favourite part with the arrow keys
// and optionally type a message. Sending needs a favourite.
//
// Digits are typed into the message here, so `Select` is not used for
// picking an option.
//
//=========================================================================

use std::time::Duration;

use log::info;

use super::{StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::story::{SceneId, StoryAction};

pub const OPTIONS: [&str; 6] = [
    "The Late Skeleton",
    "Time Travel Game",
    "The Jungle Memories",
    "The Pyramid Puzzles",
    "The Main Message",
    "Everything!",
];

pub struct RatingMessage {
    selected: Option<usize>,
    message: String,
    sent: bool,
}

impl RatingMessage {
    pub fn new() -> Self {
        Self {
            selected: None,
            message: String::new(),
            sent: false,
        }
    }

    pub fn favourite(&self) -> Option<&'static str> {
        self.selected.map(|i| OPTIONS[i])
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn can_submit(&self) -> bool {
        !self.sent && self.selected.is_some()
    }

    //--- Selection --------------------------------------------------------

    fn select_next(&mut self) {
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % OPTIONS.len(),
        });
    }

    fn select_previous(&mut self) {
        self.selected = Some(match self.selected {
            None | Some(0) => OPTIONS.len() - 1,
            Some(i) => i - 1,
        });
    }

    fn submit(&mut self, ctx: &mut StoryContext) {
        let Some(favourite) = self.favourite() else {
            return;
        };
        info!(target: "story::scene", "Favourite part: {favourite}");
        ctx.store_mut().set_rating(favourite);
        ctx.store_mut().set_message(self.message.clone());
        self.sent = true;
        ctx.transition_to(SceneId::MakingOf);
    }
}

impl Default for RatingMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for RatingMessage {
    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if self.sent {
            return;
        }
        match input {
            StoryInput::Action(StoryAction::Next) => self.select_next(),
            StoryInput::Action(StoryAction::Previous) => self.select_previous(),
            StoryInput::Action(StoryAction::Erase) => {
                self.message.pop();
            }
            StoryInput::Action(StoryAction::Continue) if self.can_submit() => self.submit(ctx),
            StoryInput::Text(text) => self.message.push_str(text),
            _ => {}
        }
    }

    fn update(&mut self, _dt: Duration, _ctx: &mut StoryContext) {}

    fn status(&self) -> String {
        match self.favourite() {
            None => "Just one last thing... Which part did you love the most? (\u{2190} / \u{2192})".to_string(),
            Some(favourite) if self.message.is_empty() => {
                format!("Favourite: {favourite}. Leave a message? (Enter: send)")
            }
            Some(favourite) => format!("Favourite: {favourite}. Message: {}_", self.message),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
