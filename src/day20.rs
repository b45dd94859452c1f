// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{manhattan, Grid, Pos}, search};


pub(crate) const MIN_SAVING: usize = 100;
pub(crate) const SHORT_CHEAT: usize = 2;
pub(crate) const LONG_CHEAT: usize = 20;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile { Track, Wall, Start, End }

struct Racetrack {
	grid: Grid<Tile>,
	start: Pos,
	end: Pos,
}

impl Racetrack {
	/// Every position along the (single) track, from start to end.
	fn trail(&self) -> Option<Vec<Pos>> {
		let grid = &self.grid;
		let search = search::explore_until(
			[self.start],
			|&pos| grid.neighbors(pos)
				.filter(|&(_, p)| grid[p] != Tile::Wall)
				.map(|(_, p)| (p, 1))
				.collect::<Vec<_>>(),
			|&pos| pos == self.end);
		search.trail(search.reached()?)
	}
}

/// Counts shortcuts through walls of up to `max_cheat` steps saving at least `min_saving` steps.
fn count_cheats(trail: &[Pos], max_cheat: usize, min_saving: usize) -> usize {
	let mut count = 0;
	for (i, &from) in trail.iter().enumerate() {
		for (j, &to) in trail.iter().enumerate().skip(i + min_saving) {
			let cheat = manhattan(from, to);
			if !(2..=max_cheat).contains(&cheat) { continue }
			if j - i - cheat >= min_saving { count += 1 }
		}
	}
	count
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Racetrack(#[from] parsing::RacetrackError),
	#[error("the end cannot be reached")]
	Unreachable,
}

fn part1and2_impl(racetrack: &Racetrack, max_cheat: usize, min_saving: usize) -> Option<usize> {
	let trail = racetrack.trail()?;
	log::debug!("Racetrack of {} picoseconds", trail.len() - 1);
	Some(count_cheats(&trail, max_cheat, min_saving))
}

pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	part1and2_impl(&input.parse()?, SHORT_CHEAT, MIN_SAVING).ok_or(Error::Unreachable)
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	part1and2_impl(&input.parse()?, LONG_CHEAT, MIN_SAVING).ok_or(Error::Unreachable)
}


mod parsing {
	use std::str::FromStr;
	use crate::grid::{Grid, parsing::GridError};
	use super::{Racetrack, Tile};

	impl TryFrom<char> for Tile {
		type Error = char;
		fn try_from(chr: char) -> Result<Self, Self::Error> {
			match chr {
				'.' => Ok(Tile::Track),
				'#' => Ok(Tile::Wall),
				'S' => Ok(Tile::Start),
				'E' => Ok(Tile::End),
				invalid => Err(invalid),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum RacetrackError {
		#[error(transparent)]
		Layout(#[from] GridError),
		#[error("expected exactly one “S” and one “E”")]
		Ends,
	}

	impl FromStr for Racetrack {
		type Err = RacetrackError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let grid = s.parse::<Grid<Tile>>()?;
			let find_one = |tile: Tile| {
				let mut found = grid.positions().filter(|&p| grid[p] == tile);
				match (found.next(), found.next()) {
					(Some(pos), None) => Ok(pos),
					_ => Err(RacetrackError::Ends),
				}
			};
			let (start, end) = (find_one(Tile::Start)?, find_one(Tile::End)?);
			Ok(Racetrack { grid, start, end })
		}
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;

	const INPUT: &str = indoc! { "
		###############
		#...#...#.....#
		#.#.#.#.#.###.#
		#S#...#.#.#...#
		#######.#.#.###
		#######.#.#...#
		#######.#.###.#
		###..E#...#...#
		###.#######.###
		#...###...#...#
		#.#####.#.###.#
		#.#...#.#.#...#
		#.#.#.#.#.#.###
		#...#...#...###
		###############
	" };

	#[test]
	fn trail() {
		let racetrack = INPUT.parse::<Racetrack>().unwrap();
		let trail = racetrack.trail().unwrap();
		assert_eq!(trail.len() - 1, 84);
		assert_eq!((trail[0], trail[84]), ([1, 3], [5, 7]));
		assert!(trail.windows(2).all(|w| manhattan(w[0], w[1]) == 1));

		assert!(matches!("S#E".parse::<Racetrack>().map(|r| r.trail()), Ok(None)));
		assert!(matches!("S.S.E".parse::<Racetrack>(), Err(parsing::RacetrackError::Ends)));
	}

	#[test]
	fn part1() {
		let racetrack = INPUT.parse::<Racetrack>().unwrap();
		assert_eq!(part1and2_impl(&racetrack, SHORT_CHEAT, 1), Some(44));
		assert_eq!(part1and2_impl(&racetrack, SHORT_CHEAT, 10), Some(10));
		assert_eq!(part1and2_impl(&racetrack, SHORT_CHEAT, 64), Some(1));
		assert_eq!(super::part1(INPUT).unwrap(), 0);
	}

	#[test]
	fn part2() {
		let racetrack = INPUT.parse::<Racetrack>().unwrap();
		assert_eq!(part1and2_impl(&racetrack, LONG_CHEAT, 50), Some(285));
		assert_eq!(part1and2_impl(&racetrack, LONG_CHEAT, 76), Some(3));
		assert!(matches!(super::part2("S#E"), Err(Error::Unreachable)));
	}
}
