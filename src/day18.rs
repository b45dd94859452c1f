// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Grid, Pos}, search};


pub(crate) const FALLEN_BYTES: usize = 1024;

/// A square memory space, sized to fit all falling bytes.
struct MemorySpace<'a> {
	bytes: &'a [Pos],
	size: usize,
}

impl<'a> MemorySpace<'a> {
	fn new(bytes: &'a [Pos]) -> Self {
		let size = bytes.iter().flatten().max().map_or(1, |&max| max + 1);
		MemorySpace { bytes, size }
	}

	fn exit(&self) -> Pos {
		[self.size - 1; 2]
	}

	fn corrupted(&self, fallen: usize) -> Grid<bool> {
		let mut grid = Grid::new(self.size, self.size, false);
		for &pos in &self.bytes[..fallen.min(self.bytes.len())] { grid[pos] = true }
		grid
	}

	/// The number of steps to the exit after `fallen` bytes, if it is reachable at all.
	fn steps_to_exit(&self, fallen: usize) -> Option<u64> {
		let grid = self.corrupted(fallen);
		if grid[[0, 0]] { return None }
		let exit = self.exit();
		let search = search::explore_until(
			[[0, 0]],
			|&pos| grid.neighbors(pos)
				.filter(|&(_, p)| !grid[p])
				.map(|(_, p)| (p, 1))
				.collect::<Vec<_>>(),
			|&pos| pos == exit);
		search.cost(&exit)
	}

	/// The first byte that cuts off the exit.
	fn first_blocking(&self) -> Option<Pos> {
		// Reachability only gets lost as bytes fall, so bisect on the number fallen
		let (mut lo, mut hi) = (0, self.bytes.len());
		while lo < hi {
			let mid = lo + (hi - lo) / 2;
			if self.steps_to_exit(mid + 1).is_some() { lo = mid + 1 } else { hi = mid }
		}
		log::debug!("Exit cut off by byte {} of {}", lo + 1, self.bytes.len());
		self.bytes.get(lo).copied()
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Bytes(#[from] parsing::BytesError),
	#[error("the exit cannot be reached")]
	Unreachable,
	#[error("the exit is never cut off")]
	NeverBlocked,
}


fn part1_impl(bytes: &[Pos], fallen: usize) -> Option<u64> {
	MemorySpace::new(bytes).steps_to_exit(fallen)
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(&parsing::bytes_from_str(input)?, FALLEN_BYTES).ok_or(Error::Unreachable)
}


fn part2_impl(bytes: &[Pos]) -> Option<String> {
	MemorySpace::new(bytes).first_blocking().map(|[x, y]| format!("{x},{y}"))
}

pub(crate) fn part2(input: &str) -> Result<String, Error> {
	part2_impl(&parsing::bytes_from_str(input)?).ok_or(Error::NeverBlocked)
}


mod parsing {
	use std::num::ParseIntError;
	use crate::{grid::Pos, input::non_empty_lines};

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum BytesError {
		#[error("line {line}: expected “x,y”")]
		Format { line: usize },
		#[error("line {line}: {source}")]
		Coord { line: usize, source: ParseIntError },
	}

	pub(super) fn bytes_from_str(s: &str) -> Result<Vec<Pos>, BytesError> {
		non_empty_lines(s)
			.map(|(line, l)| -> Result<Pos, BytesError> {
				let (x, y) = l.trim().split_once(',').ok_or(BytesError::Format { line })?;
				let coord = |c: &str| c.trim().parse::<usize>().map_err(|e| BytesError::Coord { line, source: e });
				Ok([coord(x)?, coord(y)?])
			})
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(bytes_from_str("5,4\n\n4,2\n").unwrap(), [[5, 4], [4, 2]]);
		assert!(matches!(bytes_from_str("5,4\n42"), Err(BytesError::Format { line: 2 })));
		assert!(matches!(bytes_from_str("1,2\n3,-4"), Err(BytesError::Coord { line: 2, .. })));
	}
}
