#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{IVec3, Vec2, Vec3};
use terranav::camera::ray::Ray;
use terranav::host::simulated::{
    BoxSelectables, SimulatedHost, SimulatedWater, VoxelTerrain,
};
use terranav::host::{CameraRig, CameraSpec, Host, MapSize};
use terranav::input::{InputEvent, MouseButton};
use terranav::navigation::Navigator;
use terranav::options::Options;
use terranav::picking::traversal::traverse;
use terranav::picking::RayPicker;

fn hilly_terrain(map: MapSize) -> VoxelTerrain {
    let mut terrain = VoxelTerrain::flat(map, 2);
    for x in 0..map.width {
        for y in 0..map.depth {
            let height = 2 + ((x * 7 + y * 13) % 9);
            terrain.set_column(x, y, height);
        }
    }
    terrain
}

fn traversal_benchmark(c: &mut Criterion) {
    let size = IVec3::new(256, 256, 32);
    let floor = |v: IVec3| v.z < 1;
    let ray = Ray::new(Vec3::new(-4.0, -4.0, 30.0), Vec3::new(1.0, 1.0, -0.1));
    let _ = c.bench_function("traverse_diagonal_256", |b| {
        b.iter(|| black_box(traverse(black_box(&ray), size, &floor)));
    });
}

fn pick_benchmark(c: &mut Criterion) {
    let map = MapSize {
        width: 128,
        depth: 128,
        ..MapSize::default()
    };
    let terrain = hilly_terrain(map);
    let mut selectables = BoxSelectables::default();
    for i in 0..64 {
        let corner = Vec3::new((i % 8) as f32 * 16.0, 0.0, (i / 8) as f32 * 16.0);
        selectables.add(corner, corner + Vec3::new(3.0, 12.0, 3.0));
    }
    let water = SimulatedWater::default();
    let picker = RayPicker::new(&terrain, &selectables, &water);
    let ray = Ray::new(Vec3::new(10.0, 60.0, 10.0), Vec3::new(0.6, -0.5, 0.7));

    let _ = c.bench_function("ray_picker_world_point", |b| {
        b.iter(|| black_box(picker.world_point(black_box(&ray))));
    });
}

fn navigation_tick_benchmark(c: &mut Criterion) {
    let map = MapSize::default();
    let mut host = SimulatedHost::new(CameraSpec::default(), map, Vec2::new(1280.0, 720.0));
    host.terrain = hilly_terrain(map);
    let mut nav = Navigator::load(&Options::default(), &host);
    host.input.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
    host.input.handle_event(InputEvent::MouseButton {
        button: MouseButton::Right,
        pressed: true,
    });

    let mut x = 640.0;
    let _ = c.bench_function("navigator_orbit_tick", |b| {
        b.iter(|| {
            x = if x > 900.0 { 640.0 } else { x + 1.0 };
            host.input.handle_event(InputEvent::CursorMoved { x, y: 360.0 });
            let parts = host.parts();
            let _ = nav.process_input(&parts.input, parts.rig, &parts.picker);
            black_box(host.camera.target())
        });
    });
}

criterion_group!(
    benches,
    traversal_benchmark,
    pick_benchmark,
    navigation_tick_benchmark
);
criterion_main!(benches);
