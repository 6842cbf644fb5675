use std::io::{self, BufRead, Write};

use lander_simulation::telemetry_system::telemetry::{BANNER, HEADER};
use lander_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let mut mission = MissionControl::new(MissionConfig::default())?;
    let mut telemetry = Telemetry::new();

    println!("LUNAR LANDER");
    println!();
    for line in BANNER {
        println!("{}", line);
    }
    println!("{}", HEADER);
    for record in mission.history() {
        println!("{}", telemetry.record(record));
    }
    let mut printed = mission.history().len();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    while !mission.is_complete() {
        print!("K? ");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            println!();
            break;
        };
        let fuel_rates = match parse_fuel_rates(&line?) {
            Ok(rates) => rates,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        // Rows come from the history so steps made before a failure still print.
        let result = mission.execute(&fuel_rates);
        for record in &mission.history()[printed..] {
            println!("{}", telemetry.record(record));
        }
        printed = mission.history().len();

        if let Err(e) = result {
            println!("Error during simulation step: {}", e);
            break;
        }
    }

    if let Some(final_state) = mission.final_state() {
        println!();
        println!(
            "{}",
            Telemetry::final_report(&final_state, mission.fuel_out_time())
        );
    }

    Ok(())
}
