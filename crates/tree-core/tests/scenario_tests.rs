// Host-side tests for a full wish cycle driven through the simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use wish_tree_core::*;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct CountingSink {
    uploads: usize,
    last_ribbon: Option<GroupMaterial>,
}

impl RenderSink for CountingSink {
    fn upload_group(
        &mut self,
        group: ParticleGroup,
        instances: &[ParticleInstance],
        material: &GroupMaterial,
    ) {
        assert_eq!(instances.len(), group.count());
        self.uploads += 1;
        if group == ParticleGroup::Ribbon {
            self.last_ribbon = Some(*material);
        }
    }
}

fn simulation() -> TreeSimulation {
    let mut rng = StdRng::seed_from_u64(2024);
    TreeSimulation::from_rng(&mut rng)
}

#[test]
fn pinch_wish_and_result_cycle() {
    let mut sim = simulation();
    let mut sink = CountingSink::default();
    let mut events = Vec::new();
    assert_eq!(sim.mode(), Mode::Dispersed);

    sim.step(FRAME, Some(GestureSignal::pinch(0.5, 0.5)), &mut events);
    assert_eq!(sim.mode(), Mode::Assembled);
    assert_eq!(
        events,
        vec![ControllerEvent::ModeChanged {
            from: Mode::Dispersed,
            to: Mode::Assembled
        }]
    );
    events.clear();

    sim.submit_wish("peace").expect("accepted");
    assert_eq!(sim.mode(), Mode::Transmitting);
    assert!(sim.controller.is_locked());

    // 3.2s of frames, waving an open hand the whole time
    for n in 1..=200 {
        sim.step(FRAME, Some(GestureSignal::open(0.2, 0.4)), &mut events);
        sim.commit(&mut sink);
        if n < 200 {
            assert_eq!(sim.mode(), Mode::Transmitting, "frame {n}");
            assert!(sim.controller.is_locked());
        }
        if n == 100 {
            let ribbon = sink.last_ribbon.expect("ribbon uploaded");
            assert_eq!(ribbon.emissive, RIBBON_EMISSIVE_TRANSMIT);
        }
    }

    assert_eq!(sim.mode(), Mode::Dispersed);
    assert!(!sim.controller.is_locked());
    assert!(sim.controller.is_result_visible());
    let results = events
        .iter()
        .filter(|e| **e == ControllerEvent::ResultReady)
        .count();
    assert_eq!(results, 1);
    let starts: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| **e == ControllerEvent::TransmitStarted)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(starts, vec![0]);
    assert_eq!(sink.uploads, 200 * 3);
    assert_eq!(sim.elapsed(), Duration::from_millis(16 + 3200));

    // nothing further until the result is dismissed
    sim.step(FRAME, Some(GestureSignal::pinch(0.5, 0.5)), &mut events);
    assert_eq!(sim.mode(), Mode::Dispersed);
    sim.dismiss_result();
    sim.step(FRAME, Some(GestureSignal::pinch(0.5, 0.5)), &mut events);
    assert_eq!(sim.mode(), Mode::Assembled);
}

#[test]
fn ribbon_spins_and_grows_while_transmitting() {
    let mut sim = simulation();
    let mut events = Vec::new();
    sim.submit_wish("snow").expect("accepted");
    for _ in 0..60 {
        sim.step(FRAME, None, &mut events);
    }
    let t = sim.elapsed().as_secs_f32();
    let ribbon = sim.particles.group(ParticleGroup::Ribbon);
    for inst in ribbon.instances() {
        assert!((inst.scale - RIBBON_SCALE * TRANSMIT_RIBBON_SCALE_BOOST).abs() < 1e-7);
        let spin = inst.position[1] * TILT_PER_UNIT + t * TRANSMIT_RIBBON_SPIN;
        assert!((inst.rotation[1] - spin).abs() < 1e-3);
    }
    // leaves keep their tree scale
    let leaves = sim.particles.group(ParticleGroup::Leaf);
    assert!(leaves.instances().iter().all(|i| i.scale == LEAF_SCALE));
}

#[test]
fn rejected_wish_leaves_the_tree_alone() {
    let mut sim = simulation();
    let mut events = Vec::new();
    sim.step(FRAME, Some(GestureSignal::pinch(0.5, 0.5)), &mut events);
    assert_eq!(sim.submit_wish("   "), Err(SubmitRejected::EmptyWish));
    assert_eq!(sim.mode(), Mode::Assembled);
    assert!(!sim.controller.is_locked());
}
