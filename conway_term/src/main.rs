// main.rs - Terminal animation of Conway's Game of Life
// Clears the screen, prints the field, steps, sleeps; repeats for a fixed number of frames.

use std::io::{self, Write};

use conway::{CycleDetector, Pattern, Simulation, patterns};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::info;

mod config;

use config::{HarnessConfig, Seed};

fn build_simulation(config: &HarnessConfig) -> conway::Result<Simulation> {
    let (width, height) = (config.width, config.height);
    match &config.seed {
        Seed::Random(value) => {
            Simulation::new(width, height, patterns::random_soup(width, height, *value))
        }
        Seed::Pattern(name) => {
            let pattern = Pattern::find(name)?;
            let origin = pattern.centered_in(width, height);
            Simulation::with_pattern(width, height, pattern, origin)
        }
    }
}

fn draw(out: &mut impl Write, sim: &Simulation) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(sim.render().as_bytes())?;
    out.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("conway_term=info".parse()?),
        )
        .init();

    let config = HarnessConfig::from_env();
    info!(?config, "starting");

    let mut sim = build_simulation(&config)?;
    let mut cycles = CycleDetector::new();
    let mut stdout = io::stdout();

    for _ in 0..config.frames {
        draw(&mut stdout, &sim)?;

        if config.stop_on_cycle && cycles.observe(sim.current()) {
            info!(generation = sim.generation(), "state repeats, stopping");
            break;
        }

        sim.step();
        tokio::time::sleep(config.delay).await;
    }

    info!(generation = sim.generation(), population = sim.population(), "done");
    Ok(())
}
