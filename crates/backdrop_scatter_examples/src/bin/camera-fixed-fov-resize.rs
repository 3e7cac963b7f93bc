use std::sync::Arc;

use backdrop_scatter::prelude::*;
use backdrop_scatter_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let viewport = SharedViewport::new(1280.0, 720.0);
    let mut camera = FixedFovCamera::new(Arc::new(viewport.clone()), 30.0, 0.1, 10_000.0)?;

    for (width, height) in [
        (1280.0, 720.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
        (360.0, 640.0),
    ] {
        viewport.set(width, height);
        let distance = camera.distance();
        let subtended = (2.0 * ((height / 2.0) / distance).atan()).to_degrees();

        info!(width, height, distance, subtended, "reframed backdrop");
    }

    camera.update_projection();
    info!(aspect = camera.frame().aspect, "final projection updated");

    Ok(())
}
