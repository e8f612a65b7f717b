use engine_math::math::{pack_slice, packed_slice_as_bytes, unpack_slice, Vec3};
use env_logger::Env;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 42;
const SEED_VAR: &str = "ENGINE_MATH_SEED";

fn read_seed() -> Result<u64, Box<dyn std::error::Error>> {
    match std::env::var(SEED_VAR) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| format!("Invalid {SEED_VAR} value {value:?}: {e}").into()),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_SEED),
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = read_seed()?;
    log::info!("Starting vector demo (seed {seed})");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bounds_min = Vec3::splat(-10.0);
    let bounds_max = Vec3::splat(10.0);

    let corners: Vec<Vec3> = (0..3)
        .map(|_| Vec3::random_in_range_with(&mut rng, &bounds_min, &bounds_max))
        .collect();
    for (i, corner) in corners.iter().enumerate() {
        log::info!("Corner {i}: {corner}");
    }

    let (a, b, c) = (corners[0], corners[1], corners[2]);
    let mut normal = (b - a).cross(&(c - a));
    let area = normal.normalize() * 0.5;
    log::info!("Triangle normal {normal}, area {area:.3}");

    let centroid = corners.iter().copied().sum::<Vec3>() / 3.0;
    log::info!("Centroid {centroid}, midpoint of first edge {}", a.lerp(&b, 0.5));

    let packed = pack_slice(&corners);
    let bytes = packed_slice_as_bytes(&packed);
    log::info!(
        "Packed {} vertices into {} bytes (unpacked size {} bytes)",
        packed.len(),
        bytes.len(),
        std::mem::size_of_val(corners.as_slice())
    );

    if unpack_slice(&packed) != corners {
        return Err("Packed vertices did not round-trip".into());
    }
    log::info!("Round-trip check passed");

    Ok(())
}
