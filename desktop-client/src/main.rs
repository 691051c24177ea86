mod broadcaster;
mod command_sender;
mod config;
mod state;
mod ui;

use clap::Parser;
use common::defaults::GRID_SIZE;
use common::session_rng::SessionRng;
use common::snake::{GameCommand, GameSession, TickScheduler};
use common::storage::{HighScoreStore, YamlHighScoreStore};
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use broadcaster::LocalBroadcaster;
use command_sender::CommandSender;
use config::{get_config_store, Config};
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "arcade_snake")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Clear the stored high score before starting
    #[arg(long)]
    reset_high_score: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match get_config_store(args.config.as_deref()).load() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let high_score_store = YamlHighScoreStore::from_yaml_file(&config.high_score_path());
    if args.reset_high_score {
        high_score_store.set_high_score(0)?;
        log!("High score reset");
    }
    let high_score = high_score_store.high_score();

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = GameSession::new(config.speed.to_settings(), high_score, rng);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);
    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    let scheduler_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start scheduler runtime: {}", e);
                return None;
            }
        };
        let scheduler = TickScheduler::new(session, broadcaster, high_score_store);
        Some(rt.block_on(scheduler.run(command_rx)))
    });

    let board_size = config.display.cell_size * GRID_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size + 40.0, board_size + 80.0])
            .with_title("Arcade Snake"),
        ..Default::default()
    };

    let app_sender = command_sender.clone();
    let display = config.display;
    let result = eframe::run_native(
        "Arcade Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, app_sender, display)))),
    );

    command_sender.send(GameCommand::Quit);
    match scheduler_thread.join() {
        Ok(Some(summary)) => log!(
            "Final score: {}, high score: {}, ticks: {}, ended by: {:?}",
            summary.score,
            summary.high_score,
            summary.ticks,
            summary.death_reason
        ),
        Ok(None) => {}
        Err(_) => log!("Scheduler thread panicked"),
    }

    result?;
    Ok(())
}
