use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use board_logging::{board_info, board_warn};
use chrono::Utc;
use jobboard_client::{NotificationStream, StreamSettings, DEFAULT_BASE_URL};
use jobboard_core::{update, AppState, Effect, JobId, Msg};

use super::effects::{map_notification, EffectRunner};
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone())?;

    // The notification connection is owned here for the lifetime of the
    // app; losing it only costs live toasts, everything else keeps working.
    let stream = match NotificationStream::connect(StreamSettings::new(DEFAULT_BASE_URL)) {
        Ok(stream) => Some(stream),
        Err(err) => {
            board_warn!("notification stream unavailable: {}", err);
            None
        }
    };

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    // Background tick to throttle rendering and drive toast expiry.
    {
        let msg_tx = msg_tx.clone();
        thread::spawn(move || {
            let interval = Duration::from_millis(75);
            while msg_tx.send(Msg::Tick { now_ms: now_ms() }).is_ok() {
                thread::sleep(interval);
            }
        });
    }

    let mut state = AppState::new();
    let mut pending_delete: Option<JobId> = None;

    println!("{}", ui::help());
    dispatch(&mut state, Msg::Started, &runner, &mut pending_delete);

    loop {
        while let Ok(line) = line_rx.try_recv() {
            match ui::parse_line(&line) {
                ui::Command::Quit => {
                    board_info!("quit requested");
                    return Ok(());
                }
                ui::Command::Help => println!("{}", ui::help()),
                ui::Command::ConfirmYes => {
                    if let Some(job_id) = pending_delete.take() {
                        dispatch(
                            &mut state,
                            Msg::DeleteConfirmed { job_id },
                            &runner,
                            &mut pending_delete,
                        );
                    }
                }
                ui::Command::ConfirmNo => {
                    pending_delete = None;
                }
                ui::Command::Msg(msg) => {
                    dispatch(&mut state, msg, &runner, &mut pending_delete)
                }
                ui::Command::Unknown(input) => println!("Unrecognized command: {input}"),
            }
        }

        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner, &mut pending_delete);
        }

        if let Some(stream) = &stream {
            while let Some(event) = stream.try_recv() {
                dispatch(
                    &mut state,
                    Msg::NotificationReceived(map_notification(event)),
                    &runner,
                    &mut pending_delete,
                );
            }
        }

        if state.consume_dirty() {
            print!("{}", ui::render(&state.view()));
        }

        thread::sleep(Duration::from_millis(20));
    }
}

fn dispatch(
    state: &mut AppState,
    msg: Msg,
    runner: &EffectRunner,
    pending_delete: &mut Option<JobId>,
) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;

    for effect in effects {
        match effect {
            Effect::ConfirmDelete { job_id } => {
                println!("Are you sure you want to delete this job? [y/n]");
                *pending_delete = Some(job_id);
            }
            Effect::ShowAlert { message } => println!("*** {message}"),
            Effect::NavigateToJob { job_id } => {
                println!("Open {}/jobs/{}", DEFAULT_BASE_URL, job_id);
            }
            other => runner.apply(other),
        }
    }
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
