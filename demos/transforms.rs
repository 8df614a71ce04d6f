//! Builds a model transform from translation, rotation and scaling, and applies it to the corners
//! of a unit cube.
//!
//! Usage: `transforms [<angle-degrees> [<axis-x> <axis-y> <axis-z>]]`
//!
//! Set `RUST_LOG=trace` to see diagnostics from the library, for example when passing an axis that
//! is not unit length.

use anyhow::{bail, Context};
use linmath::*;
use log::LevelFilter;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("linmath"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn parse_f32(arg: &str, what: &str) -> anyhow::Result<f32> {
    arg.parse()
        .with_context(|| format!("invalid {what} '{arg}'"))
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (degrees, axis) = match &args[..] {
        [] => (30.0, Vec3f::UP),
        [angle] => (parse_f32(angle, "angle")?, Vec3f::UP),
        [angle, x, y, z] => (
            parse_f32(angle, "angle")?,
            vec3(
                parse_f32(x, "axis component")?,
                parse_f32(y, "axis component")?,
                parse_f32(z, "axis component")?,
            ),
        ),
        _ => bail!("usage: transforms [<angle-degrees> [<axis-x> <axis-y> <axis-z>]]"),
    };
    if axis.length2() == 0.0 {
        bail!("rotation axis must not be zero");
    }

    let model = Mat4f::translate(0.0, 0.0, -5.0)
        * Mat4f::rotate(axis, degrees.to_radians())
        * Mat4f::scaling(Vec3f::splat(0.5));
    log::debug!("model matrix: {:?}", model);

    for i in 0..8 {
        let corner = vec4(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
            1.0,
        );
        let moved = model * corner;
        log::info!("{} -> {:.3}", corner.xyz(), moved.xyz());
    }

    Ok(())
}
