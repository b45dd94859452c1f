// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use itertools::Itertools as _;
use crate::{grid::{parsing::GridError, Dir, Grid}, search};


pub(crate) const PART1_ROBOTS: usize = 2;
pub(crate) const PART2_ROBOTS: usize = 25;

const NUMERIC_KEYPAD: &str = "789\n456\n123\n 0A";
const DIRECTIONAL_KEYPAD: &str = " ^A\n<v>";
const GAP: char = ' ';
const PRESS: char = 'A';


/// For each pair of keys, every cheapest sequence of directional keys
/// moving between them and then pressing the second one.
struct Keypad(HashMap<(char, char), Vec<String>>);

impl std::str::FromStr for Keypad {
	type Err = GridError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let grid = s.parse::<Grid<char>>()?;
		let keys = grid.positions()
			.filter(|&p| grid[p] != GAP)
			.map(|p| (grid[p], p))
			.collect::<Vec<_>>();

		let mut routes = HashMap::new();
		for &(from, from_pos) in &keys {
			let search = search::explore([from_pos], |&pos| grid.neighbors(pos)
				.filter(|&(_, p)| grid[p] != GAP)
				.map(|(_, p)| (p, 1))
				.collect::<Vec<_>>());
			for &(to, to_pos) in &keys {
				let seqs = search.shortest_paths(&to_pos)
					.into_iter()
					.map(|path| path.iter()
						.tuple_windows()
						.filter_map(|(&a, &b)| Dir::between(a, b))
						.map(char::from)
						.chain([PRESS])
						.collect::<String>())
					.collect::<Vec<_>>();
				routes.insert((from, to), seqs);
			}
		}

		Ok(Keypad(routes))
	}
}

impl Keypad {
	/// Sums the cost of the cheapest route between consecutive keys of `seq` (starting at `A`).
	fn cheapest(&self, seq: &str, mut cost: impl FnMut(&str) -> Option<u64>) -> Option<u64> {
		std::iter::once(PRESS).chain(seq.chars())
			.tuple_windows()
			.map(|(from, to)| self.0.get(&(from, to))?
				.iter()
				.filter_map(|route| cost(route.as_str()))
				.min())
			.sum()
	}
}


/// Presses per sequence & number of robots in between.
type Cache = HashMap<(String, usize), u64>;

struct Keypads {
	numeric: Keypad,
	directional: Keypad,
}

impl Keypads {
	fn new() -> Result<Self, GridError> {
		Ok(Keypads { numeric: NUMERIC_KEYPAD.parse()?, directional: DIRECTIONAL_KEYPAD.parse()? })
	}

	/// The number of presses needed to make the robot `robots` directional keypads away type `seq`.
	fn presses(&self, seq: &str, robots: usize, cache: &mut Cache) -> Option<u64> {
		if robots == 0 { return Some(seq.len() as u64) }
		let key = (seq.to_owned(), robots);
		if let Some(&presses) = cache.get(&key) { return Some(presses) }
		let presses = self.directional.cheapest(seq, |route| self.presses(route, robots - 1, cache))?;
		cache.insert(key, presses);
		Some(presses)
	}

	fn code_presses(&self, code: &str, robots: usize, cache: &mut Cache) -> Option<u64> {
		self.numeric.cheapest(code, |route| self.presses(route, robots, cache))
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Codes(#[from] parsing::CodeError),
	#[error("invalid keypad: {0}")]
	Keypad(#[from] GridError),
	#[error("no route between some keys")]
	Unroutable,
}

fn part1and2_impl(codes: &[parsing::Code], robots: usize) -> Result<u64, Error> {
	let keypads = Keypads::new()?;
	let mut cache = Cache::new();
	let complexities = codes.iter()
		.map(|code| keypads.code_presses(&code.keys, robots, &mut cache).map(|n| n * code.value))
		.sum::<Option<u64>>();
	log::debug!("{} sequences cached for {robots} robots", cache.len());
	complexities.ok_or(Error::Unroutable)
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1and2_impl(&parsing::codes_from_str(input)?, PART1_ROBOTS)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part1and2_impl(&parsing::codes_from_str(input)?, PART2_ROBOTS)
}


mod parsing {
	use crate::input::non_empty_lines;

	#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
	pub(super) struct Code {
		pub(super) keys: String,
		/// The numeric part, ignoring leading zeroes.
		pub(super) value: u64,
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum CodeError {
		#[error("line {line}, column {column}: invalid key {found:?}")]
		Key { line: usize, column: usize, found: char },
		#[error("line {line}: expected digits followed by “A”")]
		Format { line: usize },
	}

	pub(super) fn codes_from_str(s: &str) -> Result<Vec<Code>, CodeError> {
		non_empty_lines(s)
			.map(|(line, l)| {
				let l = l.trim();
				if let Some((c, found)) = l.chars().enumerate().find(|&(_, c)| !c.is_ascii_digit() && c != 'A') {
					return Err(CodeError::Key { line, column: c + 1, found })
				}
				let value = l.strip_suffix('A')
					.filter(|digits| !digits.is_empty() && !digits.contains('A'))
					.and_then(|digits| digits.parse().ok())
					.ok_or(CodeError::Format { line })?;
				Ok(Code { keys: l.to_owned(), value })
			})
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(codes_from_str("029A\n\n980A").unwrap(), [
			Code { keys: "029A".to_owned(), value: 29 },
			Code { keys: "980A".to_owned(), value: 980 },
		]);
		assert!(matches!(codes_from_str("029A\n12B"), Err(CodeError::Key { line: 2, column: 3, found: 'B' })));
		assert!(matches!(codes_from_str("029"), Err(CodeError::Format { line: 1 })));
		assert!(matches!(codes_from_str("A"), Err(CodeError::Format { line: 1 })));
		assert!(matches!(codes_from_str("0A1A"), Err(CodeError::Format { line: 1 })));
	}
}
