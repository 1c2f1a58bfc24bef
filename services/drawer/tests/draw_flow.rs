//! Integration tests for the draw controller: full draws, exhaustion,
//! reset and cancellation, with paused tokio time so spins finish instantly.
use drawer::config::{Config, LayoutConfig, Position, RouletteConfig, WindowSize};
use drawer::controller::{DrawController, DrawOutcome};
use drawer::display::{Digit, DigitRenderer, DigitSlot};
use drawer::errors::Result;
use drawer::sound::SoundPlayer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::Cue;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Records every number shown, reassembled from its two digits
#[derive(Default)]
struct ShownNumbers {
    shown: Vec<u32>,
    tens: u32,
}

impl DigitRenderer for ShownNumbers {
    fn render_digit(&mut self, slot: DigitSlot, digit: Digit, _: Position) -> Result<()> {
        match slot {
            DigitSlot::Tens => self.tens = digit.value() as u32,
            DigitSlot::Ones => self.shown.push(self.tens * 10 + digit.value() as u32),
        }
        Ok(())
    }
}

#[derive(Default)]
struct CueLog(Vec<Cue>);

impl SoundPlayer for CueLog {
    fn play(&mut self, cue: Cue) -> Result<()> {
        self.0.push(cue);
        Ok(())
    }
}

fn config(min: u32, max: u32) -> Config {
    Config {
        min_value: min as i64,
        max_value: max as i64,
        layout: LayoutConfig {
            digit1: Position { x: 120, y: 80 },
            digit2: Position { x: 320, y: 80 },
            main_window: WindowSize { width: 640, height: 480 },
            history_window: WindowSize { width: 400, height: 360 },
        },
        roulette: RouletteConfig {
            length: 12,
            speed_cs: 5,
            length_margin: 2,
            accel_cs: 1,
            accel_length: 4,
            sound_cues: true,
        },
        assets_dir: PathBuf::from("assets"),
        seed: Some(99),
    }
}

fn controller(min: u32, max: u32) -> DrawController<ShownNumbers, CueLog> {
    DrawController::with_rng(
        &config(min, max),
        ShownNumbers::default(),
        CueLog::default(),
        StdRng::seed_from_u64(42),
    )
}

#[tokio::test(start_paused = true)]
async fn test_draw_commits_the_last_shown_number() {
    let mut controller = controller(1, 75);
    controller.refresh().unwrap();

    let outcome = controller.draw(&CancellationToken::new()).await.unwrap();
    let DrawOutcome::Drawn { number, steps } = outcome else {
        panic!("expected a draw, got {outcome:?}");
    };

    let shown = &controller.display().renderer().shown;
    assert_eq!(shown[0], 0, "fresh session shows 0");
    assert_eq!(shown.last(), Some(&number));
    assert_eq!(shown.len(), steps + 1);
    assert!((10..=14).contains(&steps));

    let session = controller.session();
    assert!(session.is_drawn(number));
    assert_eq!(session.displayed(), number);
    assert_eq!(session.history().len(), 1);
    assert!(controller.animator().is_idle());
}

#[tokio::test(start_paused = true)]
async fn test_draws_are_distinct_until_exhausted() {
    let mut controller = controller(1, 10);
    let cancel = CancellationToken::new();
    let mut drawn = Vec::new();

    for _ in 0..10 {
        match controller.draw(&cancel).await.unwrap() {
            DrawOutcome::Drawn { number, .. } => drawn.push(number),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    drawn.sort_unstable();
    assert_eq!(drawn, (1..=10).collect::<Vec<_>>());

    let shown_before = controller.display().renderer().shown.len();
    assert_eq!(controller.draw(&cancel).await.unwrap(), DrawOutcome::Exhausted);
    assert_eq!(controller.session().drawn().len(), 10);
    assert_eq!(controller.display().renderer().shown.len(), shown_before);
}

#[tokio::test(start_paused = true)]
async fn test_single_number_pool_spins_on_itself() {
    let mut controller = controller(7, 7);

    let outcome = controller.draw(&CancellationToken::new()).await.unwrap();
    assert!(matches!(outcome, DrawOutcome::Drawn { number: 7, .. }));
    assert!(controller.display().renderer().shown.iter().all(|&n| n == 7));
}

#[tokio::test(start_paused = true)]
async fn test_reset_clears_session_and_shows_zero() {
    let mut controller = controller(1, 20);
    let cancel = CancellationToken::new();
    for _ in 0..5 {
        controller.draw(&cancel).await.unwrap();
    }

    controller.reset().unwrap();

    assert!(controller.session().drawn().is_empty());
    assert_eq!(controller.session().displayed(), 0);
    assert_eq!(controller.display().renderer().shown.last(), Some(&0));
    assert_eq!(controller.history().drawn_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_draw_commits_nothing() {
    let mut controller = controller(1, 75);
    let cancel = CancellationToken::new();

    let canceller = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            cancel.cancel();
        })
    };

    let outcome = controller.draw(&cancel).await.unwrap();
    canceller.await.unwrap();

    assert_eq!(outcome, DrawOutcome::Cancelled);
    assert!(controller.session().drawn().is_empty());
    assert_eq!(controller.display().renderer().shown.last(), Some(&0));
    assert!(controller.animator().is_idle());
}

#[tokio::test(start_paused = true)]
async fn test_cues_tick_per_step_then_confirm() {
    let mut controller = controller(1, 30);

    let DrawOutcome::Drawn { steps, .. } = controller.draw(&CancellationToken::new()).await.unwrap()
    else {
        panic!("expected a draw");
    };

    let cues = &controller.sound().0;
    assert_eq!(cues.len(), steps + 1);
    assert!(cues[..steps].iter().all(|&c| c == Cue::SpinTick));
    assert_eq!(cues.last(), Some(&Cue::Confirm));
    assert_eq!(controller.session().history()[0].steps, steps);
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_same_session() {
    let cancel = CancellationToken::new();
    let mut a = controller(1, 75);
    let mut b = controller(1, 75);

    for _ in 0..5 {
        assert_eq!(a.draw(&cancel).await.unwrap(), b.draw(&cancel).await.unwrap());
    }
    assert_eq!(a.session().summary().drawn, b.session().summary().drawn);
}

#[tokio::test(start_paused = true)]
async fn test_negative_min_value_draws_from_zero() {
    let mut config = config(0, 2);
    config.min_value = -3;
    let mut controller = DrawController::with_rng(
        &config,
        ShownNumbers::default(),
        CueLog::default(),
        StdRng::seed_from_u64(42),
    );
    let cancel = CancellationToken::new();

    for _ in 0..3 {
        assert!(matches!(
            controller.draw(&cancel).await.unwrap(),
            DrawOutcome::Drawn { .. }
        ));
    }
    assert_eq!(controller.draw(&cancel).await.unwrap(), DrawOutcome::Exhausted);
    assert_eq!(controller.session().summary().drawn, vec![0, 1, 2]);
}
