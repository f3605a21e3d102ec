//! Prize Drop entry point
//!
//! Native builds run drops headlessly and print where they land. The web
//! build is driven from JavaScript through `prize_drop::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use clap::Parser;

    use prize_drop::sim::rng::{self, RandomSource};
    use prize_drop::{PegHit, PrizeTable, Settings};

    /// Run prize drops without rendering and report the bucket distribution
    #[derive(Debug, Parser)]
    #[command(name = "prize-drop", version)]
    pub struct Args {
        /// Number of drops to simulate
        #[arg(short = 'n', long, default_value_t = 1000)]
        pub drops: u32,
        /// Seed for reproducible runs (overrides the settings file)
        #[arg(short, long)]
        pub seed: Option<u64>,
        /// Drop position; defaults to the board center
        #[arg(long)]
        pub start_x: Option<f32>,
        /// Half-range of random spread around the drop position
        #[arg(long, default_value_t = 20.0)]
        pub spread: f32,
        /// Board width (overrides the settings file)
        #[arg(long)]
        pub width: Option<f32>,
        /// Board height (overrides the settings file)
        #[arg(long)]
        pub height: Option<f32>,
        /// Settings JSON file
        #[arg(short, long)]
        pub config: Option<PathBuf>,
        /// Prize table JSON file
        #[arg(long)]
        pub prizes: Option<PathBuf>,
        /// Print the effective settings as JSON and exit
        #[arg(long)]
        pub print_settings: bool,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let mut settings = match &args.config {
            Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
            None => Settings::default(),
        };
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        if let Some(width) = args.width {
            settings.board_width = width;
        }
        if let Some(height) = args.height {
            settings.board_height = height;
        }
        if args.print_settings {
            println!("{}", settings.to_json()?);
            return Ok(());
        }

        let table = match &args.prizes {
            Some(path) => PrizeTable::from_json(&std::fs::read_to_string(path)?)?,
            None => PrizeTable::reference(),
        };

        let hits = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&hits);
        let mut engine =
            settings.build_engine(move |_: &PegHit| counter.set(counter.get() + 1))?;

        let base_x = args.start_x.unwrap_or(engine.board().center_x());
        let mut spread_rng = match settings.seed {
            Some(seed) => rng::seeded(seed.wrapping_add(1)),
            None => rng::from_entropy(),
        };
        log::info!(
            "Running {} drops at x={:.1}±{:.1} on a {}x{} board",
            args.drops,
            base_x,
            args.spread,
            settings.board_width,
            settings.board_height
        );

        let buckets = table.len();
        let mut counts = vec![0u32; buckets];
        let mut stalled = 0u32;
        let mut slowest = 0u32;
        let mut total_frames = 0u64;

        for _ in 0..args.drops {
            engine.drop_ball(base_x + spread_rng.symmetric(args.spread));
            match engine.run_to_landing(settings.max_frames) {
                Some(frames) => {
                    counts[engine.bucket_index(buckets)] += 1;
                    slowest = slowest.max(frames);
                    total_frames += u64::from(frames);
                }
                None => {
                    stalled += 1;
                    log::warn!("Drop did not land within {} frames", settings.max_frames);
                }
            }
            engine.reset();
        }

        let landed = args.drops - stalled;
        println!("{:>6}  {:<12} {:>7} {:>7}", "bucket", "prize", "drops", "share");
        for (index, count) in counts.iter().enumerate() {
            let label = table
                .prize_for_bucket(index)
                .map(|p| p.label.as_str())
                .unwrap_or("-");
            let share = if landed > 0 {
                *count as f32 / landed as f32 * 100.0
            } else {
                0.0
            };
            let bar = "#".repeat((share / 2.0).round() as usize);
            println!("{index:>6}  {label:<12} {count:>7} {share:>6.2}% {bar}");
        }

        let prize_value: u64 = counts
            .iter()
            .enumerate()
            .filter_map(|(i, c)| table.prize_for_bucket(i).map(|p| u64::from(p.value) * u64::from(*c)))
            .sum();
        println!();
        println!("landed: {landed}  stalled: {stalled}  peg hits: {}", hits.get());
        if landed > 0 {
            println!(
                "frames: avg {:.1}, max {slowest}  prize value: avg {:.2}",
                total_frames as f64 / f64::from(landed),
                prize_value as f64 / f64::from(landed)
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();
    log::info!("Prize Drop (headless) starting...");

    match headless::run(headless::Args::parse()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is prize_drop::web::start, this is just to satisfy the compiler
}
