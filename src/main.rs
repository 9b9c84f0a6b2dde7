use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use term_2048::game::{Game, GameConfig, Step};
use term_2048::input::KeyMap;
use term_2048::render::board_text;
use term_2048::terminal::Session;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal (arrow keys to move, q to quit)")]
struct Args {
    /// Seed the tile spawner for a reproducible game
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Do not spawn a tile after a move that changed nothing
    #[arg(long)]
    skip_idle_spawn: bool,

    /// Also accept h/j/k/l for left/down/up/right
    #[arg(long)]
    vim_keys: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = GameConfig { skip_idle_spawn: args.skip_idle_spawn };
    let keys = KeyMap::new(args.vim_keys);
    let mut game = Game::new(rng, config);

    let mut session = Session::enter().context("failed to set up terminal")?;
    let step = run(&mut session, &mut game, keys)?;
    if let Some(message) = step.farewell() {
        session.farewell(message).context("failed to show final message")?;
    }
    drop(session);

    info!(
        "{:?} after {} moves, highest tile {}",
        step,
        game.moves(),
        game.board().highest_tile()
    );
    Ok(())
}

/// Render, wait for a key, apply it; until the game ends or the player quits.
fn run(session: &mut Session, game: &mut Game<StdRng>, keys: KeyMap) -> anyhow::Result<Step> {
    loop {
        session.draw(&board_text(game.board())).context("failed to draw board")?;
        let key = session.read_key().context("failed to read key")?;
        let step = game.step(keys.command(key))?;
        if step != Step::Continue {
            return Ok(step);
        }
    }
}
