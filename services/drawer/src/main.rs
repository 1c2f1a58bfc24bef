use anyhow::Result;
use shared::errors::ServiceError;
use std::io::{self, Stdout};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use drawer::assets::AssetManifest;
use drawer::config::Config;
use drawer::controller::{DrawController, DrawOutcome};
use drawer::sound::{Muted, SoundPlayer};
use drawer::terminal::{Command, TerminalBell, TerminalDigits};

type Controller = DrawController<TerminalDigits<Stdout>, Box<dyn SoundPlayer>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let use_json = drawer::init_tracing();

    info!(
        service = "drawer",
        version = env!("CARGO_PKG_VERSION"),
        log_format = if use_json { "json" } else { "text" },
        "Starting bingo roulette"
    );

    // Load configuration
    let config = Config::load()?;
    info!(
        min = config.min_value,
        max = config.max_value,
        roulette_length = config.roulette.length,
        sound_cues = config.roulette.sound_cues,
        "Configuration loaded"
    );

    let manifest = AssetManifest::from_dir(&config.assets_dir);
    manifest.verify(config.roulette.sound_cues)?;
    info!(assets_dir = %config.assets_dir.display(), "Assets located");

    let sound: Box<dyn SoundPlayer> = if config.roulette.sound_cues {
        Box::new(TerminalBell::new(io::stdout(), manifest))
    } else {
        Box::new(Muted)
    };
    let mut controller = DrawController::new(&config, TerminalDigits::new(io::stdout()), sound);
    controller.refresh()?;

    // Ctrl-C abandons a running spin and ends the session
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                shutdown.cancel();
            }
        }
    });

    println!("Enter: draw   r: reset   h: history   q: quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };

        // The echoed input moved the cursor; start the next frame fresh
        controller.renderer_mut().detach();

        match Command::parse(&line) {
            Some(Command::Draw) => match controller.draw(&shutdown).await {
                Ok(DrawOutcome::Drawn { .. }) => {}
                Ok(DrawOutcome::Exhausted) => notice(&mut controller, "All numbers have been drawn!")?,
                Ok(DrawOutcome::Cancelled) => break,
                Err(e) if !e.is_fatal() => e.log(),
                Err(e) => return Err(e.into()),
            },
            Some(Command::Reset) => controller.reset()?,
            Some(Command::History) => {
                let grid = controller.history().to_string();
                notice(&mut controller, &grid)?;
            }
            Some(Command::Quit) => break,
            None => warn!(input = %line, "Unknown command"),
        }
    }

    let summary = serde_json::to_string(&controller.session().summary())
        .map_err(ServiceError::serialization_error)?;
    info!(summary = %summary, "Session ended");

    Ok(())
}

/// Print a message below the digits, then redraw them underneath it
fn notice(controller: &mut Controller, message: &str) -> Result<()> {
    println!("{}", message.trim_end());
    controller.renderer_mut().detach();
    controller.refresh()?;
    Ok(())
}
