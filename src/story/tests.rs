//=========================================================================
// Story Playthrough Tests
//=========================================================================
//
// Drives the installed story headlessly: raw platform events in,
// wall-clock time advanced in 10 ms frames, scene ids and the store
// checked on the way out.
//
//=========================================================================

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{install, SceneId, StoryAction};
use crate::core::error::StoryError;
use crate::core::globals::StorySystems;
use crate::core::input::{InputEvent, KeyCode, Modifiers, SceneInput};
use crate::core::runtime::StoryRuntime;

const STEP: Duration = Duration::from_millis(10);

//=== Harness =============================================================

struct Playthrough {
    runtime: StoryRuntime<SceneId, StoryAction>,
    visited: Vec<SceneId>,
}

impl Playthrough {
    fn new(seed: u64) -> Self {
        let mut systems = StorySystems::new();
        install(&mut systems);
        let mut runtime = StoryRuntime::new(systems, StdRng::seed_from_u64(seed));
        runtime.start();

        let visited = vec![runtime.current_scene()];
        Self { runtime, visited }
    }

    fn scene(&self) -> SceneId {
        self.runtime.current_scene()
    }

    fn status(&self) -> String {
        self.runtime.status()
    }

    fn note(&mut self) {
        let scene = self.scene();
        assert!(SceneId::ALL.contains(&scene), "Unknown scene {:?}", scene);
        if self.visited.last() != Some(&scene) {
            self.visited.push(scene);
        }
    }

    fn wait(&mut self, total: Duration) {
        let mut remaining = total;
        while !remaining.is_zero() {
            let dt = remaining.min(STEP);
            self.runtime.frame(&[], dt);
            remaining -= dt;
            self.note();
        }
    }

    /// One frame with a full key press (down + up).
    fn key(&mut self, key: KeyCode) {
        let batch = vec![
            InputEvent::KeyDown { key, modifiers: Modifiers::NONE },
            InputEvent::KeyUp { key, modifiers: Modifiers::NONE },
        ];
        self.runtime.frame(&[batch], STEP);
        self.note();
    }

    fn digit(&mut self, n: u8) {
        let key = KeyCode::digit(n).expect("digit key");
        self.key(key);
    }

    fn type_text(&mut self, text: &str) {
        self.runtime.frame(&[vec![InputEvent::Text(text.to_string())]], STEP);
        self.note();
    }

    fn act(&mut self, action: StoryAction) {
        self.runtime.dispatch(&[SceneInput::Action(action)]);
        self.note();
    }

    //--- Scene Walkthroughs -----------------------------------------------

    fn through_intro(&mut self) {
        self.wait(Duration::from_millis(3100));
        self.key(KeyCode::Enter);
        self.wait(Duration::from_millis(2600));
    }

    fn through_late_room(&mut self) {
        self.wait(Duration::from_millis(4600));
        self.key(KeyCode::Enter);
    }

    fn through_time_theory(&mut self) {
        for _ in 0..5 {
            self.key(KeyCode::Enter);
        }
    }

    fn through_time_travel_game(&mut self) {
        self.key(KeyCode::Enter);
        self.key(KeyCode::ArrowLeft);
        self.wait(Duration::from_secs(12));
        self.key(KeyCode::ArrowRight);
        self.wait(Duration::from_millis(22_100));
    }

    fn through_fixed_timeline_room(&mut self) {
        self.wait(Duration::from_millis(1600));
        self.key(KeyCode::Enter);
    }

    fn through_jungle(&mut self) {
        for n in 1..=3 {
            self.digit(n); // uncover
            self.digit(n); // pick up
            self.key(KeyCode::KeyP);
            self.digit(n); // read
            self.key(KeyCode::Escape);
        }
        self.wait(Duration::from_millis(4100));
    }

    fn through_pyramid(&mut self) {
        for _ in 0..3 {
            for value in 1..=9 {
                let slot = pyramid_slot(&self.status(), value);
                self.digit(slot);
            }
            self.key(KeyCode::Enter);
        }
        self.key(KeyCode::Enter);
    }
}

/// Grid position (1-based) of `value` in the pyramid's status line.
fn pyramid_slot(status: &str, value: u8) -> u8 {
    let grid = status.split(" | ").nth(1).expect("grid section in status");
    let position = grid
        .split(" / ")
        .flat_map(|row| row.split(' '))
        .position(|cell| cell == value.to_string())
        .expect("value on the grid");
    position as u8 + 1
}

//=========================================================================
// Tests
//=========================================================================

#[test]
fn opening_scenario_reaches_time_theory() {
    let mut play = Playthrough::new(1);
    assert_eq!(play.scene(), SceneId::Intro);
    assert!(play.status().starts_with("Building environment"));

    play.key(KeyCode::Enter);
    play.wait(Duration::from_secs(3));
    assert_eq!(play.scene(), SceneId::Intro, "Continue before loading is ignored");

    play.key(KeyCode::Enter);
    play.wait(Duration::from_millis(2600));
    assert_eq!(play.scene(), SceneId::LateRoom);

    play.wait(Duration::from_millis(1600));
    assert_eq!(play.status(), "Someone walks in.");
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::LateRoom, "Continue waits for the second line");

    play.wait(Duration::from_millis(400));
    assert!(play.status().starts_with("Boo!"));

    play.wait(Duration::from_millis(2600));
    assert!(play.status().starts_with("Oh no. I'm late."));
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::TimeTheory);
}

#[test]
fn full_playthrough_visits_every_scene_once() {
    let mut play = Playthrough::new(2024);

    play.through_intro();
    play.through_late_room();
    play.through_time_theory();
    assert_eq!(play.scene(), SceneId::TimeTravelGame);

    play.through_time_travel_game();
    assert_eq!(play.scene(), SceneId::FixedTimelineRoom);

    play.through_fixed_timeline_room();
    play.key(KeyCode::KeyN);
    play.key(KeyCode::KeyY);
    assert_eq!(play.scene(), SceneId::JungleMemoryQuest);

    play.through_jungle();
    assert_eq!(play.scene(), SceneId::PyramidOfEmotions);

    play.through_pyramid();
    assert_eq!(play.scene(), SceneId::MainMessage);

    play.wait(Duration::from_millis(35_100));
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::WishInteraction);

    play.type_text("a telescope");
    play.key(KeyCode::Enter);
    play.wait(Duration::from_millis(3100));
    assert_eq!(play.scene(), SceneId::RatingMessage);

    play.key(KeyCode::ArrowLeft);
    play.type_text("thank you");
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::MakingOf);

    play.wait(Duration::from_secs(20));
    assert!(play.status().starts_with("Made with love"));

    assert_eq!(play.visited, SceneId::ALL.to_vec(), "Each scene exactly once, in order");

    let store = play.runtime.store();
    assert_eq!(store.current_scene(), SceneId::MakingOf);
    assert_eq!(store.wish(), "a telescope");
    assert_eq!(store.rating(), Some("Everything!"));
    assert_eq!(store.message(), "thank you");
}

#[test]
fn declined_adventure_timer_dies_with_the_scene() {
    let mut play = Playthrough::new(3);
    play.runtime.transition_to(SceneId::AdventureChoice).expect("registered");

    play.act(StoryAction::Decline);
    play.act(StoryAction::Accept);
    assert_eq!(play.scene(), SceneId::JungleMemoryQuest);

    play.wait(Duration::from_secs(3));
    assert_eq!(play.scene(), SceneId::JungleMemoryQuest);
    assert_eq!(
        play.visited,
        vec![SceneId::Intro, SceneId::AdventureChoice, SceneId::JungleMemoryQuest]
    );
}

#[test]
fn declined_adventure_goes_anyway() {
    let mut play = Playthrough::new(3);
    play.runtime.transition_to(SceneId::AdventureChoice).expect("registered");

    play.key(KeyCode::KeyN);
    play.wait(Duration::from_millis(1900));
    assert_eq!(play.scene(), SceneId::AdventureChoice);

    play.wait(Duration::from_millis(200));
    assert_eq!(play.scene(), SceneId::JungleMemoryQuest);
}

#[test]
fn remounted_scene_starts_fresh() {
    let mut play = Playthrough::new(4);
    play.wait(Duration::from_secs(1));
    assert_ne!(play.status(), "Building environment... 0%");

    play.runtime.transition_to(SceneId::LateRoom).expect("registered");
    play.runtime.transition_to(SceneId::Intro).expect("registered");

    assert_eq!(play.status(), "Building environment... 0%");
}

#[test]
fn named_navigation_accepts_only_known_scenes() {
    let mut play = Playthrough::new(5);

    play.runtime.transition_to_named("main_message").expect("known scene");
    assert_eq!(play.scene(), SceneId::MainMessage);

    let err = play.runtime.transition_to_named("basement").unwrap_err();
    assert!(matches!(err, StoryError::InvalidScene(ref name) if name == "basement"));
    assert_eq!(play.scene(), SceneId::MainMessage);
}

#[test]
fn same_seed_same_pyramid() {
    let mut first = Playthrough::new(99);
    let mut second = Playthrough::new(99);
    first.runtime.transition_to(SceneId::PyramidOfEmotions).expect("registered");
    second.runtime.transition_to(SceneId::PyramidOfEmotions).expect("registered");

    assert_eq!(first.status(), second.status());
}

#[test]
fn rating_digits_are_typed_not_selected() {
    let mut play = Playthrough::new(6);
    play.runtime.transition_to(SceneId::RatingMessage).expect("registered");

    play.runtime.frame(
        &[vec![
            InputEvent::KeyDown { key: KeyCode::Digit5, modifiers: Modifiers::NONE },
            InputEvent::Text("5".to_string()),
        ]],
        STEP,
    );
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::RatingMessage, "No favourite chosen yet");

    play.key(KeyCode::ArrowRight);
    play.key(KeyCode::Enter);
    assert_eq!(play.scene(), SceneId::MakingOf);
    assert_eq!(play.runtime.store().rating(), Some("The Late Skeleton"));
    assert_eq!(play.runtime.store().message(), "5");
}
