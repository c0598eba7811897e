//=========================================================================
// Main Message
//=========================================================================

use std::time::Duration;

use super::{is_continue, StoryContext, StoryInput};
use crate::core::scene::Scene;
use crate::core::timer::{TimerId, Timers};
use crate::story::{SceneId, StoryAction};

pub const MESSAGE_LINES: [&str; 10] = [
    "I know I was late.",
    "And I know that matters.",
    "But not a single day passed without you in my heart.",
    "You're not just my sister \u{2014}",
    "You're my safe place, my strength,",
    "And my reminder of what kindness looks like.",
    "I hope this journey made you smile,",
    "Even half as much as you've made my life brighter.",
    "Happy Birthday.",
    "You deserve every beautiful thing \u{2014} always.",
];

/// Reading time per line.
const LINE_DURATION: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    NextLine,
}

/// The message itself, one line at a time, then a way forward.
pub struct MainMessage {
    line: usize,
    line_timer: Option<TimerId>,
    timers: Timers<Cue>,
}

impl MainMessage {
    pub fn new() -> Self {
        Self {
            line: 0,
            line_timer: None,
            timers: Timers::new(),
        }
    }

    /// The line on screen, or `None` once all have been read.
    pub fn current_line(&self) -> Option<&'static str> {
        MESSAGE_LINES.get(self.line).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.line >= MESSAGE_LINES.len()
    }
}

impl Default for MainMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<SceneId, StoryAction> for MainMessage {
    fn on_enter(&mut self, _ctx: &mut StoryContext) {
        self.line_timer = Some(self.timers.every(LINE_DURATION, Cue::NextLine));
    }

    fn handle_input(&mut self, input: &StoryInput, ctx: &mut StoryContext) {
        if is_continue(input) && self.is_finished() {
            ctx.transition_to(SceneId::WishInteraction);
        }
    }

    fn update(&mut self, dt: Duration, _ctx: &mut StoryContext) {
        self.timers.advance(dt);
        while let Some(Cue::NextLine) = self.timers.pop_due() {
            self.line += 1;
            if self.is_finished() {
                if let Some(id) = self.line_timer.take() {
                    self.timers.cancel(id);
                }
            }
        }
    }

    fn status(&self) -> String {
        match self.current_line() {
            Some(line) => line.to_string(),
            None => "Press Enter to continue".to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::scenes::testing::{click, enter, press, queued, run_for};

    #[test]
    fn lines_advance_on_schedule() {
        let mut message = MainMessage::new();
        let mut ctx = enter(&mut message);
        assert_eq!(message.current_line(), Some(MESSAGE_LINES[0]));

        run_for(&mut message, &mut ctx, LINE_DURATION * 3);
        assert_eq!(message.current_line(), Some(MESSAGE_LINES[3]));

        run_for(&mut message, &mut ctx, LINE_DURATION * 7);
        assert!(message.is_finished());
        assert!(message.timers.is_empty(), "Line timer stops after the last line");
    }

    #[test]
    fn continue_only_after_last_line() {
        let mut message = MainMessage::new();
        let mut ctx = enter(&mut message);

        run_for(&mut message, &mut ctx, LINE_DURATION * 9);
        press(&mut message, &mut ctx, StoryAction::Continue);
        assert!(queued(&mut ctx).is_empty());

        run_for(&mut message, &mut ctx, LINE_DURATION);
        press(&mut message, &mut ctx, StoryAction::Continue);
        assert_eq!(queued(&mut ctx), vec![SceneId::WishInteraction]);
    }

    #[test]
    fn click_continues_after_last_line() {
        let mut message = MainMessage::new();
        let mut ctx = enter(&mut message);

        click(&mut message, &mut ctx, 400.0, 300.0);
        assert!(queued(&mut ctx).is_empty());

        run_for(&mut message, &mut ctx, LINE_DURATION * 10);
        click(&mut message, &mut ctx, 400.0, 300.0);
        assert_eq!(queued(&mut ctx), vec![SceneId::WishInteraction]);
    }
}
