use clap::Parser;
use memento_core::Difficulty;
use wasm_bindgen::prelude::*;

mod clock;
mod game;
mod settings;
mod share;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start on this difficulty instead of the saved one
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, difficulty: {:?}", args.seed, args.difficulty);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        seed: args.seed,
        difficulty: args.difficulty,
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse("");
        assert_eq!(args.seed, None);
        assert_eq!(args.difficulty, None);
    }

    #[test]
    fn hash_arguments_are_parsed() {
        let args = parse("#--seed=42&--difficulty=hard&-vv");
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(Args::try_parse_from("#--difficulty=extreme".split(['#', '&'])).is_err());
    }
}
