// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod debug;
mod error;
mod grid;
mod heap;
mod input;
mod search;

mod day16;
mod day18;
mod day20;
mod day21;

use std::{path::Path, process::ExitCode};
use clap::Parser;
use error::Error;


/// Solves the given days' puzzles (or all of them), reading `inputs/dayNN.txt`.
#[derive(Parser)]
#[command(name = "advent24", version)]
struct Args {
	/// Days to solve
	days: Vec<u8>,
}

macro_rules! solvers {
	( $( $day:literal ),* ) => { paste::paste! {
		const DAYS: &[u8] = &[ $( $day ),* ];

		fn solve(day: u8, input: &str) -> Result<[String; 2], Error> {
			match day {
				$( $day => Ok([
					[<day $day>]::part1(input).map_err(|e| Error::puzzle(day, 1, e))?.to_string(),
					[<day $day>]::part2(input).map_err(|e| Error::puzzle(day, 2, e))?.to_string(),
				]), )*
				_ => Err(Error::UnknownDay(day)),
			}
		}
	} };
}

solvers!(16, 18, 20, 21);


fn run(args: Args) -> Result<(), Error> {
	let path = Path::new(debug::DEBUG_LOG);
	debug::DebugLog::create(path, false, log::LevelFilter::Debug)
		.map_err(|source| Error::DebugLog { path: path.to_owned(), source })?
		.install()?;

	let days = if args.days.is_empty() { DAYS.to_vec() } else { args.days };
	for day in days {
		if !DAYS.contains(&day) { return Err(Error::UnknownDay(day)) }
		let input = input::read_day_input(Path::new(input::INPUT_DIR), day)?;
		log::info!("Day {day}: {} bytes of input", input.len());

		let [part1, part2] = solve(day, &input)?;
		println!("day{day:02} part1: {part1}");
		println!("day{day:02} part2: {part2}");
	}

	Ok(())
}

fn main() -> ExitCode {
	let result = run(Args::parse());
	if let Err(err) = &result { log::error!("{err}") }
	log::logger().flush();

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}
