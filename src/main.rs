//! Interactive operator interface.
//!
//! Collects a process set from stdin, then loops over a policy menu:
//! each selection runs one discipline, prints the results table, the
//! Gantt chart, and the aggregate metrics, and drives the execution
//! simulation before the next iteration.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use cpusched::models::{Process, ProcessSet, MAX_PROCESSES};
use cpusched::policies::{Fcfs, Priority, RoundRobin, SchedulingPolicy, Sjf};
use cpusched::render::{render_gantt, render_metrics, render_process_table};
use cpusched::session::Session;
use cpusched::sim::BurstSimulator;

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let set = read_process_set(&mut input)?;
    let mut session = Session::new(set);
    let simulator = BurstSimulator::new();

    loop {
        println!();
        println!("--- Process Scheduler Simulator ---");
        println!("1. FCFS");
        println!("2. SJF");
        println!("3. Round Robin");
        println!("4. Priority Scheduling");
        println!("5. Exit");

        let choice = prompt_u64(&mut input, "Select an option: ")?;
        let policy: Box<dyn SchedulingPolicy> = match choice {
            1 => Box::new(Fcfs),
            2 => Box::new(Sjf),
            3 => {
                let quantum = prompt_u64(&mut input, "Enter time quantum for Round Robin: ")?;
                Box::new(RoundRobin::new(quantum))
            }
            4 => Box::new(Priority),
            5 => {
                println!("Exiting the program. Goodbye!");
                return Ok(());
            }
            _ => {
                println!("Invalid choice! Please try again.");
                continue;
            }
        };

        match session.run(policy.as_ref()) {
            Ok(report) => {
                println!();
                print!("{}", render_process_table(&report.processes));
                println!();
                println!("Gantt Chart:");
                println!("{}", render_gantt(&report.timeline));
                println!();
                print!("{}", render_metrics(&report.metrics));

                println!();
                println!("Simulating processes using multithreading...");
                simulator
                    .run_all(session.process_set())
                    .context("execution simulation failed")?;
            }
            Err(err) => println!("Scheduling failed: {err}"),
        }
    }
}

/// Reads the process set, re-prompting until it validates.
fn read_process_set(input: &mut impl BufRead) -> Result<ProcessSet> {
    loop {
        let count = prompt_u64(
            input,
            &format!("Enter the number of processes (1-{MAX_PROCESSES}): "),
        )?;

        let mut processes = Vec::with_capacity(count as usize);
        for id in 1..=count as u32 {
            println!();
            println!("Enter details for process {id}:");
            let arrival = prompt_u64(input, "Arrival Time: ")?;
            let burst = prompt_u64(input, "Burst Time: ")?;
            let priority = prompt_i32(input, "Priority (lower = higher): ")?;
            processes.push(Process::new(id, arrival, burst).with_priority(priority));
        }

        match ProcessSet::new(processes) {
            Ok(set) => return Ok(set),
            Err(err) => println!("Invalid process set: {err}"),
        }
    }
}

fn prompt_u64(input: &mut impl BufRead, prompt: &str) -> Result<u64> {
    loop {
        match prompt_line(input, prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a non-negative integer."),
        }
    }
}

fn prompt_i32(input: &mut impl BufRead, prompt: &str) -> Result<i32> {
    loop {
        match prompt_line(input, prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter an integer."),
        }
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input stream closed");
    }

    Ok(line.trim().to_string())
}
