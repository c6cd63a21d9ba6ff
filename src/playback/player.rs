//! The playback loop.
//!
//! A producer loop ticks the frame clock and, each time the step timer
//! fires, pulls one placement from the solver. Placements travel over a
//! bounded channel to a render task that owns the renderer. The loop ends
//! when the solve finishes or fails, or when the shutdown future resolves.

use crate::playback::clock::Clock;
use crate::playback::error::PlaybackError;
use crate::playback::render::{Frame, Renderer, Status};
use crate::playback::timer::Timer;
use crate::sudoku::board::Board;
use crate::sudoku::error::SolveError;
use crate::sudoku::solver::{Placement, Steps};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

const NEXT_STEP: &str = "next_step";
const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    Step(Placement),
    Finished,
    Failed(SolveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub step_interval: Duration,
    pub fps: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(400),
            fps: 48,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Solved,
    Failed(SolveError),
    Interrupted,
}

#[derive(Debug)]
pub struct PlaybackSummary<R> {
    /// The board as far as the solve got.
    pub board: Board,
    pub steps: usize,
    pub outcome: Outcome,
    pub renderer: R,
}

#[derive(Debug)]
struct Message {
    event: PlaybackEvent,
    fps: f64,
}

async fn render_loop<R: Renderer>(
    mut rx: mpsc::Receiver<Message>,
    mut renderer: R,
    mut board: Board,
) -> std::io::Result<(R, Board)> {
    let mut steps = 0;
    let mut last = None;
    let mut status = Status::Running;
    renderer.draw(&Frame {
        board: &board,
        last: None,
        steps,
        fps: 0.0,
        status: &status,
    })?;

    while let Some(Message { event, fps }) = rx.recv().await {
        match event {
            PlaybackEvent::Step(placement) => {
                board.set_value(placement.index, placement.value);
                steps += 1;
                last = Some(placement);
            }
            PlaybackEvent::Finished => status = Status::Finished,
            PlaybackEvent::Failed(err) => status = Status::Failed(err),
        }
        renderer.draw(&Frame {
            board: &board,
            last: last.as_ref(),
            steps,
            fps,
            status: &status,
        })?;
    }
    Ok((renderer, board))
}

/// Plays `steps` back through `renderer`, one placement per
/// `config.step_interval`.
///
/// # Errors
///
/// If drawing fails or the render task panics. Solver failures are not
/// errors here; they are reported through `PlaybackSummary::outcome`.
pub async fn play<R, F>(
    mut steps: Steps,
    renderer: R,
    config: PlaybackConfig,
    shutdown: F,
) -> Result<PlaybackSummary<R>, PlaybackError>
where
    R: Renderer + Send + 'static,
    F: Future<Output = ()>,
{
    let mut timer = Timer::new();
    timer.add_event(NEXT_STEP, config.step_interval)?;

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let render = tokio::spawn(render_loop(rx, renderer, steps.board().clone()));

    let mut clock = Clock::new();
    let mut count = 0;
    tokio::pin!(shutdown);
    info!(interval = ?config.step_interval, fps = config.fps, "playback started");

    let outcome = 'frames: loop {
        let elapsed = tokio::select! {
            () = &mut shutdown => {
                info!(steps = count, "playback interrupted");
                break 'frames Outcome::Interrupted;
            }
            elapsed = clock.tick(config.fps) => elapsed,
        };

        for (name, fired) in timer.tick(elapsed) {
            if name != NEXT_STEP {
                continue;
            }
            for _ in 0..fired {
                let (event, done) = match steps.next() {
                    Some(Ok(placement)) => {
                        count += 1;
                        debug!(step = count, %placement, "step");
                        (PlaybackEvent::Step(placement), None)
                    }
                    Some(Err(err)) => (PlaybackEvent::Failed(err.clone()), Some(Outcome::Failed(err))),
                    None => (PlaybackEvent::Finished, Some(Outcome::Solved)),
                };
                // a closed channel means the render task already failed; its
                // error surfaces when it is joined below
                if tx.send(Message { event, fps: clock.fps() }).await.is_err() {
                    break 'frames done.unwrap_or(Outcome::Interrupted);
                }
                if let Some(outcome) = done {
                    break 'frames outcome;
                }
            }
        }
    };
    drop(tx);

    let (renderer, board) = render.await??;
    info!(steps = count, "playback finished");
    Ok(PlaybackSummary {
        board,
        steps: count,
        outcome,
        renderer,
    })
}
