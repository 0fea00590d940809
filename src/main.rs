// src/main.rs
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use scanstrip::{
    DisplayConfig, PanelStyle, Sample, SampleHub, ScanClock, SimulatedSweep, SweepPanel,
};

/// Runs a simulated sweep panel for a while and writes what it drew to a PNG.
#[derive(Parser, Debug)]
#[command(name = "scanstrip-demo")]
struct Args {
    /// JSON display config; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 200)]
    height: u32,
    /// Seconds for the cursor to cross the panel.
    #[arg(long, default_value_t = 4.0)]
    window_secs: f64,
    /// Channels the simulated detector produces.
    #[arg(long, default_value_t = 4)]
    channels: usize,
    #[arg(long, default_value_t = 6.0)]
    run_secs: f64,
    #[arg(long, default_value_t = 20)]
    tick_ms: u64,
    /// Samples per second per channel.
    #[arg(long, default_value_t = 40)]
    rate_hz: u32,
    #[arg(long, default_value = "sweep.png")]
    out: PathBuf,
}

fn spawn_acquisition(
    hub: Arc<SampleHub>,
    sweep: Arc<SimulatedSweep>,
    channels: usize,
    rate_hz: u32,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        let period = Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64);
        while running.load(Ordering::Relaxed) {
            let now = sweep.now_ms();
            let phase = now as f64 / 1_000.0;
            for channel in 0..channels {
                let level = 4.0 * channel as f64 + 3.0 * (phase + channel as f64).sin();
                let noise: f64 = rng.gen_range(-1.5..1.5);
                hub.publish(Sample::new(now, channel, level + noise));
            }
            thread::sleep(period);
        }
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DisplayConfig::load(path)
            .with_context(|| format!("loading display config {}", path.display()))?,
        None => DisplayConfig::default(),
    };
    let channels = args.channels.min(config.channels);
    let window = Duration::try_from_secs_f64(args.window_secs).context("window_secs")?;
    let run_for = Duration::try_from_secs_f64(args.run_secs).context("run_secs")?;

    let sweep = Arc::new(SimulatedSweep::new(args.width, args.height, window));
    let hub = Arc::new(SampleHub::new());
    let panel = SweepPanel::open(config, PanelStyle::default(), sweep.clone(), hub.clone())
        .context("opening sweep panel")?;

    let clock = {
        let sweep = Arc::clone(&sweep);
        let renderer = Arc::clone(panel.renderer());
        ScanClock::spawn(Duration::from_millis(args.tick_ms), move || {
            sweep.advance();
            renderer.on_tick();
        })
    };
    let running = Arc::new(AtomicBool::new(true));
    let acquisition = spawn_acquisition(
        hub.clone(),
        sweep.clone(),
        channels,
        args.rate_hz,
        running.clone(),
    );

    let started = Instant::now();
    thread::sleep(run_for);
    let png = panel
        .renderer()
        .snapshot_png()
        .context("rendering snapshot")?
        .context("panel has no canvas")?;
    let stats = panel.renderer().stats();

    clock.stop();
    panel.close();
    running.store(false, Ordering::Relaxed);
    acquisition
        .join()
        .map_err(|_| anyhow::anyhow!("acquisition thread panicked"))?;

    std::fs::write(&args.out, png).with_context(|| format!("writing {}", args.out.display()))?;
    log::info!(
        "ran {:.1}s: {} ticks, {} segments, {} repaints -> {}",
        started.elapsed().as_secs_f64(),
        stats.ticks,
        stats.segments_drawn,
        sweep.repaints(),
        args.out.display()
    );
    Ok(())
}
