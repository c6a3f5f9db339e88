/*!
 * Megaverse CLI - replays the goal map for the configured candidate
 *
 * Takes no arguments. Configuration comes from the environment
 * (MEGAVERSE_CANDIDATE_ID, MEGAVERSE_BASE_URL) or from a TOML file named
 * by MEGAVERSE_CONFIG; progress is reported on the logging stream.
 */

use megaverse::{
    config::MegaverseConfig,
    error::{Result, EXIT_PARTIAL, EXIT_SUCCESS},
    grid::GridModel,
    logging,
    processor::GridProcessor,
    stats::TraversalStats,
    MegaverseClient,
};
use tracing::{error, info};

fn main() {
    let code = match run() {
        Ok(stats) => {
            if stats.has_failures() {
                EXIT_PARTIAL
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<TraversalStats> {
    logging::init_logging()?;

    let config = MegaverseConfig::load()?;
    let client = MegaverseClient::new(config)?;

    info!("fetching goal map");
    let goal = match client.goal() {
        Ok(goal) => goal,
        Err(e) => {
            error!(error = %e, "goal fetch failed, aborting");
            return Err(e);
        }
    };

    let grid = GridModel::new(goal)?;
    info!(
        rows = grid.num_rows(),
        columns = grid.num_columns(),
        "goal map loaded"
    );

    let mut processor = GridProcessor::new(&client, grid);
    let stats = processor.run();

    info!(
        polyanets = stats.polyanets,
        soloons = stats.soloons,
        comeths = stats.comeths,
        skipped_soloons = stats.skipped_soloons,
        failed = stats.failed,
        "replay finished"
    );
    println!("{}", processor.render_preview());

    Ok(stats)
}
