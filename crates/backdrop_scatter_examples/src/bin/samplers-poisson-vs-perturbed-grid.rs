use backdrop_scatter::prelude::*;
use backdrop_scatter_examples::{init_tracing, render_sample_set_to_png, RenderConfig};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let extent = Extent::from(Vec3::new(240.0, 135.0, 40.0));
    let mut rng = StdRng::seed_from_u64(42);

    let poisson = PoissonDiskSampling::new(6.0).generate(&extent, &mut rng)?;
    info!(count = poisson.len(), "poisson disk field");

    let grid = RegularGridSampling::new(6.0, 1.5).generate(&extent, &mut rng)?;
    info!(count = grid.len(), "perturbed grid field");

    let config = RenderConfig::default();
    render_sample_set_to_png(&poisson, &config, "target/examples/poisson-disk.png")?;
    render_sample_set_to_png(&grid, &config, "target/examples/perturbed-grid.png")?;

    info!("wrote target/examples/poisson-disk.png and target/examples/perturbed-grid.png");
    Ok(())
}
