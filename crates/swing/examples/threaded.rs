//! Physics on one thread, a reader standing in for the renderer on another,
//! and a controller changing the lower link's mass mid-run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use swing::{PendulumState, PhysicalParameters, ScreenFrame, Simulator, SnapshotCell};

fn main() -> swing::Result<()> {
    env_logger::init();

    let params = PhysicalParameters::default();
    let mut sim = Simulator::new(params, 0.005)?;
    let mut state = PendulumState::at_rest(2.0, 2.5);

    let cell = Arc::new(SnapshotCell::new(sim.snapshot(&state)));
    let done = Arc::new(AtomicBool::new(false));
    let handle = sim.parameter_handle();

    let physics = {
        let cell = Arc::clone(&cell);
        let done = Arc::clone(&done);
        thread::spawn(move || -> swing::Result<()> {
            for _ in 0..4000 {
                sim.step(&mut state)?;
                cell.publish(sim.snapshot(&state));
            }
            done.store(true, Ordering::Release);
            Ok(())
        })
    };

    let frame = ScreenFrame::fit(800.0, 600.0, params.reach())?;
    let mut frames = 0;
    while !done.load(Ordering::Acquire) {
        let snap = cell.latest();
        let [_, _, tip] = frame.polyline(&snap.positions);
        if frames % 20 == 0 {
            println!(
                "frame {frames:4}  t={:6.3}  step={:5}  tip=({:6.1}, {:6.1}) px",
                snap.time, snap.step, tip.x, tip.y
            );
        }
        if frames == 40 {
            handle.submit(PhysicalParameters {
                mass2: 3.0,
                ..params
            })?;
            println!("controller: mass2 -> 3.0");
        }
        frames += 1;
        thread::sleep(Duration::from_millis(2));
    }

    physics.join().expect("physics thread panicked")?;
    let last = cell.latest();
    println!("final: t={:.3} s after {} steps", last.time, last.step);
    Ok(())
}
