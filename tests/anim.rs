#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashSet;

use medcast_wasm::anim::helix::{DnaHelix, Strand, HEIGHT, SEGMENTS};
use medcast_wasm::anim::network::{
    Neuron, NeuronNetwork, BOUND_X, BOUND_Z, LINK_RADIUS, NEURON_COUNT,
};
use medcast_wasm::anim::particle::{Particle, DEPTH_BOUND};
use medcast_wasm::anim::projection::Camera;
use medcast_wasm::anim::{Scene, CYCLE_MS, SCENE_MS};

const EPS: f64 = 1e-9;

fn test_neuron(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64) -> Neuron {
    Neuron {
        x,
        y,
        z,
        vx,
        vy,
        vz,
        pulse: 0.0,
    }
}

#[test]
fn helix_has_two_full_strands() {
    let helix = DnaHelix::new(0.0, 0.0, 0.0);
    let points = helix.points();
    assert_eq!(points.len(), SEGMENTS * 2);

    let first = points.iter().filter(|p| p.strand == Strand::First).count();
    let second = points.iter().filter(|p| p.strand == Strand::Second).count();
    assert_eq!(first, SEGMENTS);
    assert_eq!(second, SEGMENTS);
}

#[test]
fn helix_rungs_are_evenly_spaced() {
    let helix = DnaHelix::new(0.0, 0.0, 0.0);
    let ys: Vec<f64> = helix
        .points()
        .iter()
        .filter(|p| p.strand == Strand::First)
        .map(|p| p.y)
        .collect();

    assert!((ys[0] - (-HEIGHT / 2.0)).abs() < EPS);
    let step = HEIGHT / SEGMENTS as f64;
    for pair in ys.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < EPS);
    }

    // Both strands share each rung's height.
    for pair in helix.points().chunks_exact(2) {
        assert!((pair[0].y - pair[1].y).abs() < EPS);
    }
}

#[test]
fn helix_strands_are_opposed() {
    let helix = DnaHelix::new(0.0, 0.0, 0.0);
    for pair in helix.points().chunks_exact(2) {
        assert!((pair[0].x + pair[1].x).abs() < EPS);
        assert!((pair[0].z + pair[1].z).abs() < EPS);
    }
}

#[test]
fn helix_projection_is_pure_until_update() {
    let mut helix = DnaHelix::new(10.0, -5.0, 40.0);
    let camera = Camera::centered(800.0, 600.0);
    let point = helix.points()[17];

    let a = helix.project(&point, &camera);
    let b = helix.project(&point, &camera);
    assert_eq!(a, b);

    helix.update();
    let c = helix.project(&point, &camera);
    assert_ne!(a, c);
}

#[test]
fn projection_formula() {
    let camera = Camera::centered(800.0, 600.0);

    let origin = camera.project(0.0, 0.0, 0.0);
    assert!((origin.x - 400.0).abs() < EPS);
    assert!((origin.y - 300.0).abs() < EPS);
    assert!((origin.scale - 1.0).abs() < EPS);

    // A point one perspective-length deep projects at half scale.
    let deep = camera.project(100.0, 50.0, 1000.0);
    assert!((deep.scale - 0.5).abs() < EPS);
    assert!((deep.x - 450.0).abs() < EPS);
    assert!((deep.y - 325.0).abs() < EPS);
}

#[test]
fn network_shape_invariants() {
    let network = NeuronNetwork::generate();
    assert_eq!(network.neurons.len(), NEURON_COUNT);

    let mut seen = HashSet::new();
    for conn in &network.connections {
        assert_ne!(conn.from, conn.to);
        assert!(conn.from < NEURON_COUNT);
        assert!(conn.to < NEURON_COUNT);
        assert!((0.0..1.0).contains(&conn.strength));

        let key = (conn.from.min(conn.to), conn.from.max(conn.to));
        assert!(seen.insert(key), "duplicate connection {key:?}");

        // Endpoints were within linking range when generated.
        let dist =
            medcast_wasm::anim::network::distance(&network.neurons[conn.from], &network.neurons[conn.to]);
        assert!(dist < LINK_RADIUS);
    }
}

#[test]
fn network_bounce_flips_only_offending_axis() {
    let mut network = NeuronNetwork {
        neurons: vec![
            // Will cross the +x wall this step; y and z stay inside.
            test_neuron(BOUND_X, 0.0, 0.0, 0.25, 0.1, -0.05),
            // Comfortably inside on every axis.
            test_neuron(0.0, 0.0, 0.0, 0.2, -0.2, 0.1),
            // Already past the -z wall.
            test_neuron(0.0, 0.0, -BOUND_Z - 1.0, 0.1, 0.1, -0.2),
        ],
        connections: vec![],
    };
    network.update();

    let crossed = &network.neurons[0];
    assert!((crossed.vx - (-0.25)).abs() < EPS);
    assert!((crossed.vy - 0.1).abs() < EPS);
    assert!((crossed.vz - (-0.05)).abs() < EPS);

    let inside = &network.neurons[1];
    assert!((inside.vx - 0.2).abs() < EPS);
    assert!((inside.vy - (-0.2)).abs() < EPS);
    assert!((inside.vz - 0.1).abs() < EPS);

    let deep = &network.neurons[2];
    assert!((deep.vz - 0.2).abs() < EPS, "z velocity must reverse");
    assert!((deep.vx - 0.1).abs() < EPS);
    assert!((deep.vy - 0.1).abs() < EPS);
}

#[test]
fn network_positions_are_not_clamped() {
    let mut network = NeuronNetwork {
        neurons: vec![test_neuron(BOUND_X + 5.0, 0.0, 0.0, 0.25, 0.0, 0.0)],
        connections: vec![],
    };
    network.update();

    // The neuron drifted further out; only its velocity reversed.
    assert!(network.neurons[0].x > BOUND_X);
    assert!(network.neurons[0].vx < 0.0);
}

#[test]
fn particle_respawns_inside_bounds() {
    let (width, height) = (800.0, 600.0);
    for _ in 0..50 {
        let mut particle = Particle::spawn(width, height);
        particle.x = width; // far outside the ±width/2 box
        particle.update(width, height);

        assert!(particle.x.abs() <= width / 2.0);
        assert!(particle.y.abs() <= height / 2.0);
        assert!(particle.z.abs() <= DEPTH_BOUND);
        assert!((1.0..3.0).contains(&particle.size));
        assert!((0.1..0.6).contains(&particle.opacity));
    }
}

#[test]
fn particle_in_bounds_just_drifts() {
    let mut particle = Particle::spawn(800.0, 600.0);
    particle.x = 0.0;
    particle.y = 0.0;
    particle.z = 0.0;
    particle.vx = 0.2;
    particle.vy = -0.1;
    particle.vz = 0.05;
    let size = particle.size;

    particle.update(800.0, 600.0);

    assert!((particle.x - 0.2).abs() < EPS);
    assert!((particle.y - (-0.1)).abs() < EPS);
    assert!((particle.z - 0.05).abs() < EPS);
    assert_eq!(particle.size, size, "no respawn expected");
}

#[test]
fn scene_cycle_boundaries() {
    assert_eq!(Scene::at(3_000.0), Scene::Helix);
    assert_eq!(Scene::at(9_000.0), Scene::Network);

    // The cut is exactly at the half-cycle boundary.
    assert_eq!(Scene::at(7_999.0), Scene::Helix);
    assert_eq!(Scene::at(8_000.0), Scene::Network);
    assert_eq!(Scene::at(15_999.0), Scene::Network);
    assert_eq!(Scene::at(16_000.0), Scene::Helix);

    // Real timestamps are far past the first cycle.
    let late = 1_000.0 * CYCLE_MS;
    assert_eq!(Scene::at(late + 3_000.0), Scene::Helix);
    assert_eq!(Scene::at(late + SCENE_MS), Scene::Network);
}
