use cubebit_geom::Vec3;

/// Position at time `t` of the `index`th body of the sphere demo.
///
/// Each axis swings through the whole cube on its own frequency, so the path is a
/// Lissajous curve; higher indices move faster.
pub fn orbit(t: f32, index: usize) -> Vec3 {
    let k = (index + 1) as f32 / 5.0;
    Vec3::new(
        0.5 + 0.5 * (t * k).sin(),
        0.5 + 0.5 * (t * 1.2 * k).sin(),
        0.5 + 0.5 * (t * 1.5 * k).sin(),
    )
}
