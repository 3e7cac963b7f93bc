use backdrop_scatter::prelude::*;
use backdrop_scatter_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let sampler = PoissonDiskSampling::new(24.0);
    let mut cache = SampleCache::new();
    let mut rng = StdRng::seed_from_u64(7);

    let first = cache
        .get_or_generate(&sampler, &Extent::new(1280.0, 720.0, 200.0), &mut rng)?
        .clone();
    info!(count = first.len(), "generated field for 1280x720");

    // A depth change alone does not invalidate the cached field.
    let shallower = cache
        .get_or_generate(&sampler, &Extent::new(1280.0, 720.0, 50.0), &mut rng)?
        .clone();
    info!(reused = (shallower == first), "same viewport, different depth");

    // Any drift in width or height regenerates.
    let resized = cache
        .get_or_generate(&sampler, &Extent::new(1920.0, 1080.0, 200.0), &mut rng)?
        .clone();
    info!(
        count = resized.len(),
        entries = cache.len(),
        "regenerated field for 1920x1080"
    );

    Ok(())
}
