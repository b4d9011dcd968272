use shuttle_sim::io::summary::{net_clearance, FlightSummary};
use shuttle_sim::scenario::{presets, CourtMarks, NET_HEIGHT};
use shuttle_sim::{run_batch, LaunchCondition, SimConfig, Shuttle};

fn main() {
    let shuttle = Shuttle::standard();
    let config = SimConfig::default();
    let marks = CourtMarks::default();
    let scenarios = presets::clear_comparison();

    let results = run_batch(&shuttle, &scenarios, &config);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SHUTTLE FLIGHT SIMULATION — {}", presets::CLEAR_COMPARISON_TITLE);
    println!("====================================================================");
    println!();
    println!("  Shuttle Parameters — {}", shuttle.name);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.3} kg    Cd:            {:>8.2}",
        shuttle.mass, shuttle.cd
    );
    println!(
        "  Area:          {:>8.4} m^2   Air density:   {:>8.3} kg/m^3",
        shuttle.area, shuttle.air_density
    );
    println!(
        "  Drag constant: {:>8.6}      Terminal speed:{:>8.1} m/s",
        shuttle.drag_constant(),
        shuttle.terminal_speed()
    );
    println!(
        "  Timestep:      {:>8.2} s     Time ceiling:  {:>8.1} s",
        config.dt, config.max_time
    );
    println!();

    println!("  Strokes");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>4}  {:>9}  {:>6}  {:>6}  {:>7}  {:>7}  {:>7}  {:>6}  {:>6}",
        "#", "v0(km/h)", "θ(°)", "x0(m)", "apex(m)", "net(m)", "range", "t(s)", "call"
    );
    println!("  {}", "─".repeat(66));

    for (i, (launch, result)) in scenarios.iter().zip(&results).enumerate() {
        match result {
            Ok(traj) => {
                let sum = FlightSummary::from_trajectory(traj);
                let clearance = net_clearance(traj, marks.net, NET_HEIGHT);
                let net_col = match clearance {
                    Some(c) => format!("{c:+.2}"),
                    None => "—".into(),
                };
                let call = if sum.capped {
                    "AIRBORNE"
                } else {
                    marks.landing_verdict(sum.landing_range)
                };
                println!(
                    "  {:>4}  {:>9.0}  {:>6.0}  {:>6.2}  {:>7.2}  {:>7}  {:>7.2}  {:>6.2}  {:>6}",
                    i + 1,
                    launch.speed_kmh,
                    launch.angle_deg,
                    launch.offset,
                    sum.apex_height,
                    net_col,
                    sum.landing_range,
                    sum.flight_time,
                    call,
                );
            }
            Err(e) => {
                // A failed stroke never silences its siblings
                println!("  {:>4}  stroke failed: {e}", i + 1);
            }
        }
    }

    println!();
    println!("  Court marks (m from near baseline)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  near baseline {:.2} | doubles service {:.2} | short service {:.2}",
        marks.near_baseline, marks.near_doubles_service, marks.near_short_service
    );
    println!(
        "  net {:.3} (tape {:.2} m) | short service {:.3} | doubles service {:.2} | baseline {:.2}",
        marks.net, NET_HEIGHT, marks.far_short_service, marks.far_doubles_service, marks.far_baseline
    );
    println!();

    // -----------------------------------------------------------------------
    // Sampled trajectory of the reference clear
    // -----------------------------------------------------------------------
    if let Some(Ok(traj)) = results.first() {
        print_trajectory_table(&scenarios[0], traj, config.dt);
    }

    println!("====================================================================");
    println!();
}

fn print_trajectory_table(launch: &LaunchCondition, traj: &shuttle_sim::Trajectory, dt: f64) {
    println!(
        "  Reference clear — v0={:.0} km/h, θ={:.0}°",
        launch.speed_kmh, launch.angle_deg
    );
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>9}  {:>6}",
        "t (s)", "x (m)", "y (m)", "v (m/s)", "phase"
    );
    println!("  {}", "─".repeat(48));

    let sample_interval = (traj.states.len() / 20).max(1);
    for (i, s) in traj.states.iter().enumerate() {
        let print = i % sample_interval == 0 || i == traj.states.len() - 1;
        if !print {
            continue;
        }
        let phase = if s.vel.y > 0.0 { "RISE" } else { "FALL" };
        println!(
            "  {:>7.2}  {:>8.2}  {:>8.2}  {:>9.1}  {:>6}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.speed(),
            phase
        );
    }
    println!();
    println!(
        "  Simulation: {} samples, dt={} s{}",
        traj.states.len(),
        dt,
        if traj.capped { " (time ceiling hit)" } else { "" }
    );
    println!();
}
