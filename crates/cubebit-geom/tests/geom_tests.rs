use cubebit_geom::{Dims, Direction, Vec3, Voxel};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn vec3_add_sub_mul() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert_eq!(c, Vec3::new(-3.0, 7.0, -3.0));
    assert_eq!(c - a, b);
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn vec3_distance() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(a.distance(b), 5.0, 1e-6));
    assert!(approx_eq(Vec3::CENTER.distance(Vec3::CENTER), 0.0, 0.0));
}

#[test]
fn step_follows_axis_conventions() {
    let o = Voxel::new(2, 2, 2);
    assert_eq!(o.step(Direction::North), Voxel::new(2, 3, 2));
    assert_eq!(o.step(Direction::South), Voxel::new(2, 1, 2));
    assert_eq!(o.step(Direction::East), Voxel::new(3, 2, 2));
    assert_eq!(o.step(Direction::West), Voxel::new(1, 2, 2));
    assert_eq!(o.step(Direction::Up), Voxel::new(2, 2, 3));
    assert_eq!(o.step(Direction::Down), Voxel::new(2, 2, 1));
}

#[test]
fn turns_are_five_distinct_headings() {
    for d in Direction::ALL {
        let turns = d.turns();
        for (i, a) in turns.iter().enumerate() {
            for b in &turns[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!turns.contains(&d.opposite()));
    }
}

#[test]
fn contains_rejects_every_face() {
    let d = Dims::CUBE5;
    assert!(d.contains(Voxel::new(0, 0, 0)));
    assert!(d.contains(Voxel::new(4, 4, 4)));
    for v in [
        Voxel::new(-1, 0, 0),
        Voxel::new(0, -1, 0),
        Voxel::new(0, 0, -1),
        Voxel::new(5, 0, 0),
        Voxel::new(0, 5, 0),
        Voxel::new(0, 0, 5),
    ] {
        assert!(!d.contains(v), "{v:?}");
    }
}

#[test]
fn normalize_hits_unit_corners() {
    let d = Dims::CUBE5;
    assert_eq!(d.normalize(Voxel::new(0, 0, 0)), Vec3::ZERO);
    assert_eq!(d.normalize(Voxel::new(4, 4, 4)), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(d.normalize(Voxel::new(2, 2, 2)), Vec3::CENTER);
}

#[test]
fn normalize_degenerate_axis_is_zero() {
    let d = Dims::new(1, 3, 1);
    assert_eq!(d.normalize(Voxel::new(0, 2, 0)), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn voxels_visit_x_fastest() {
    let d = Dims::new(2, 2, 2);
    let all: Vec<Voxel> = d.voxels().collect();
    assert_eq!(all.len(), 8);
    assert_eq!(all[0], Voxel::new(0, 0, 0));
    assert_eq!(all[1], Voxel::new(1, 0, 0));
    assert_eq!(all[2], Voxel::new(0, 1, 0));
    assert_eq!(all[4], Voxel::new(0, 0, 1));
}
