use rand::rngs::StdRng;
use rand::SeedableRng;

use block_light::app::{App, Input};
use block_light::config::{
    SolverConfig, DEMO_SEED, DEMO_SOURCE, DEMO_SOURCE_EMISSION, OPAQUE_PROBABILITY,
    SOURCE_PROBABILITY,
};
use block_light::simulation::{Grid, GridError, PassStrategy, Point};
use block_light::view::render_text;

fn main() -> Result<(), GridError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting block light demo...");

    // Test pattern (starter)
    let mut app = App::new(SolverConfig::default())?;
    app.grid_mut()
        .set_emission(Point::from(DEMO_SOURCE), DEMO_SOURCE_EMISSION)?;

    // Scripted clicks: a short wall next to the source, one dim lamp,
    // and one click that misses the grid
    for y in 0..4 {
        app.handle_input(Input::ToggleOpaque(Point::new(3, y)));
    }
    for _ in 0..6 {
        app.handle_input(Input::Cycle(Point::new(10, 12)));
    }
    app.handle_input(Input::Cycle(Point::new(16, 3)));

    let outcome = app.settle()?;
    println!("{}", render_text(app.grid()));
    log::info!(
        "Settled in {} passes ({} level changes)",
        outcome.passes,
        outcome.changed
    );

    // Random scene, solved with every pass strategy
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let scene = Grid::random(
        app.grid().side(),
        SOURCE_PROBABILITY,
        OPAQUE_PROBABILITY,
        &mut rng,
    )?;
    for strategy in [
        PassStrategy::Sweep,
        PassStrategy::Parallel,
        PassStrategy::Synchronous,
    ] {
        let config = SolverConfig {
            strategy,
            ..SolverConfig::default()
        };
        let mut solver = App::with_grid(scene.clone(), config);
        let outcome = solver.settle()?;
        log::info!("{:?}: {} passes", strategy, outcome.passes);
    }

    let mut scene_app = App::with_grid(scene, SolverConfig::default());
    scene_app.settle()?;
    println!("{}", render_text(scene_app.grid()));

    Ok(())
}
