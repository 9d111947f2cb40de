use pipeline::Pipeline;
use tracker::Tracker;

mod config;
mod measurement;
mod pipeline;
mod report;
mod tracker;

pub type ErrorBox = Box<dyn std::error::Error + Send + Sync>;

fn main() {
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        std::process::exit(1);
    }));

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ErrorBox> {
    log::info!("abtrack {}", env!("ABTRACK_VERSION"));

    let config = config::load().map_err(|e| format!("Unable to load config: {e}"))?;

    log::debug!("Using {:#?}", config);

    let samples = measurement::Reader::open(&config.input)?;
    let mut report = report::Csv::create(&config.output)?;

    let tracker = Tracker::new(config.tracker.alpha, config.tracker.beta);
    let summary = Pipeline::new(tracker, config.tracker.lookahead).run(samples, &mut report)?;

    log::info!(
        "done: {} measurements, {} accepted, {} rejected, report written to '{}'",
        summary.samples,
        summary.accepted,
        summary.rejected,
        config.output.display()
    );

    Ok(())
}
