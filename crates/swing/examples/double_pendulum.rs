//! Double pendulum released from horizontal — angles, trail and energy drift.
//!
//! Usage: `cargo run --example double_pendulum [config.json]`

use swing::{
    ConservationMonitor, ConservationState, IntegrationQuality, RecoveryPolicy, SimulationConfig,
    Simulator, SingularityGuard, TraceBuffer, TrajectoryRecorder,
};

fn main() -> swing::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };

    let mut sim = Simulator::from_config(&config)?;
    let mut state = config.initial;
    let mut trace = TraceBuffer::new(config.trace_capacity);
    let mut recorder = TrajectoryRecorder::new();
    let mut guard = SingularityGuard::new(RecoveryPolicy::Freeze, config.initial, 0)?;

    let params = *sim.parameters();
    let baseline = ConservationState::new(&params, &state);

    println!("Double Pendulum Simulation");
    println!("==========================");
    println!("Initial angles: [{:.3}, {:.3}] rad", state.theta1, state.theta2);
    println!("Initial energy: {:.8} J", baseline.baseline_energy);
    println!("dt: {} s\n", sim.dt());

    println!("time(s)    theta1     theta2     x2        y2        drift");
    println!("-------------------------------------------------------------");

    let total_steps = 600;
    let mut max_drift: f64 = 0.0;

    for step in 0..total_steps {
        if let Err(err) = sim.step(&mut state) {
            match guard.recover(&err, &state) {
                Some(next) => state = next,
                None => return Err(err),
            }
        }

        let tip = sim.positions(&state).bob2;
        trace.push(tip);
        recorder.record(sim.clock().time(), &params, &state);

        let monitor = ConservationMonitor::check(&baseline, &params, &state);
        max_drift = max_drift.max(monitor.energy_error);

        if step % 60 == 0 {
            println!(
                "{:7.3}   {:+8.4}   {:+8.4}   {:+7.4}   {:+7.4}   {:.2e}",
                sim.clock().time(),
                state.theta1,
                state.theta2,
                tip.x,
                tip.y,
                monitor.energy_error
            );
        }
    }

    let stats = recorder.stats();
    let quality = IntegrationQuality::assess(max_drift, 1e-2);

    println!("\n-- Summary --");
    println!("Steps:           {}", stats.nsteps);
    println!("Duration:        {:.3} s", stats.duration);
    println!("Peak |theta|:    {:.4} rad", stats.max_abs_angle);
    println!("Trail points:    {}", trace.len());
    println!("Max drift:       {max_drift:.2e} ({quality:?})");
    println!("Recoveries:      {}", guard.recoveries());

    Ok(())
}
