//=========================================================================
// Aetheric Story: Binary
//
// Opens the story window. Logging goes through env_logger (`RUST_LOG`
// overrides the default `info` filter). Set `STORY_SEED` to replay the
// same puzzle layouts.
//
//=========================================================================

use log::warn;

use aetheric_story::story::{self, SceneId, StoryAction};
use aetheric_story::EngineBuilder;

const SEED_VAR: &str = "STORY_SEED";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = EngineBuilder::<SceneId, StoryAction>::new().with_title("Happy Birthday");

    if let Ok(raw) = std::env::var(SEED_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => builder = builder.with_seed(seed),
            Err(err) => warn!(target: "engine", "Ignoring {SEED_VAR}={raw:?}: {err}"),
        }
    }

    builder.build().init(story::install).run();
}
