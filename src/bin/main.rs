//! Terminal driver for the briskly pacing engine.
//!
//! Wires a monotonic clock and a frame printer to the core session and runs
//! the cooperative tick loop until the session completes.

use std::{env, fs, io, process};

use briskly_core::session::{PaceConfig, PaceMode, PaceSession, PlayState, TickResult};
use briskly_host::{
    layout::{DEFAULT_WRAP_COLUMNS, measure_text_height},
    render::FramePrinter,
};
use embassy_executor::Executor;
use embassy_time::{Instant, Timer};
use log::{LevelFilter, info};
use static_cell::StaticCell;

const TICK_MS: u64 = 1;
const DEFAULT_WPM: u16 = 300;
const PAUSE_DEMO_MS: u64 = 1_500;

/// Fallback text when no file is given: the Gettysburg Address.
const SAMPLE_TEXT: &str = "\
Four score and seven years ago our fathers brought forth on this continent, \
a new nation, conceived in Liberty, and dedicated to the proposition that \
all men are created equal. Now we are engaged in a great civil war, testing \
whether that nation, or any nation so conceived and so dedicated, can long \
endure. We are met on a great battle-field of that war. We have come to \
dedicate a portion of that field, as a final resting place for those who \
here gave their lives that that nation might live. It is altogether fitting \
and proper that we should do this. But, in a larger sense, we can not \
dedicate, we can not consecrate, we can not hallow this ground. The brave \
men, living and dead, who struggled here, have consecrated it, far above \
our poor power to add or detract. The world will little note, nor long \
remember what we say here, but it can never forget what they did here.";

struct Options {
    text: &'static str,
    wpm: u16,
    mode: PaceMode,
    pause_at_ms: Option<u64>,
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

fn main() {
    init_logger();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: briskly [--scroll] [--wpm N] [--pause-at SECS] [FILE]");
            process::exit(2);
        }
    };

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| spawner.must_spawn(pace(options)));
}

fn init_logger() {
    let level = env::var("BRISKLY_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();
}

fn parse_args() -> Result<Options, String> {
    let mut wpm = DEFAULT_WPM;
    let mut mode = PaceMode::Chunk;
    let mut pause_at_ms = None;
    let mut path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scroll" => mode = PaceMode::Scroll,
            "--wpm" => {
                let value = args.next().ok_or_else(|| "--wpm needs a value".to_owned())?;
                wpm = value
                    .parse()
                    .map_err(|_| format!("invalid words-per-minute rate: {value}"))?;
            }
            "--pause-at" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--pause-at needs a value".to_owned())?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid seconds: {value}"))?;
                pause_at_ms = Some(secs.saturating_mul(1_000));
            }
            other if other.starts_with('-') => return Err(format!("unknown flag: {other}")),
            other => path = Some(other.to_owned()),
        }
    }

    let text: &'static str = match path {
        Some(path) => {
            let contents =
                fs::read_to_string(&path).map_err(|err| format!("cannot read {path}: {err}"))?;
            Box::leak(contents.into_boxed_str())
        }
        None => SAMPLE_TEXT,
    };

    Ok(Options {
        text,
        wpm,
        mode,
        pause_at_ms,
    })
}

#[embassy_executor::task]
async fn pace(options: Options) {
    let mut session = PaceSession::new(PaceConfig::default());
    if let Err(err) = session.configure(options.text, options.wpm, options.mode) {
        eprintln!("cannot configure session: {err:?}");
        process::exit(2);
    }
    if options.mode == PaceMode::Scroll {
        session.set_total_distance(measure_text_height(options.text, DEFAULT_WRAP_COLUMNS));
    }

    let mut printer = FramePrinter::new(io::stdout());
    let word_count = options.text.split_whitespace().count() as u64;
    let mut pause_at = options.pause_at_ms;
    let mut resume_at: Option<u64> = None;

    let started = Instant::now();
    if let Err(err) = session.start(0) {
        eprintln!("cannot start session: {err:?}");
        process::exit(2);
    }

    loop {
        let now_ms = started.elapsed().as_millis();

        if let Some(due) = pause_at
            && now_ms >= due
        {
            pause_at = None;
            resume_at = Some(now_ms + PAUSE_DEMO_MS);
            session.pause(now_ms);
        }
        if let Some(due) = resume_at
            && now_ms >= due
        {
            resume_at = None;
            let _ = session.start(now_ms);
        }

        if session.tick(now_ms) == TickResult::RenderRequested {
            session.with_frame(|frame| {
                if let Err(err) = printer.render(&frame) {
                    eprintln!("render failed: {err}");
                    process::exit(1);
                }
            });
        }

        if session.state() == PlayState::Completed {
            break;
        }
        Timer::after_millis(TICK_MS).await;
    }

    let elapsed_ms = started.elapsed().as_millis().max(1);
    let wpm_x100 = word_count * 6_000_000 / elapsed_ms;
    info!(
        "effective_wpm={}.{:02} words={} elapsed_ms={}",
        wpm_x100 / 100,
        wpm_x100 % 100,
        word_count,
        elapsed_ms
    );
    process::exit(0);
}
