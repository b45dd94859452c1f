// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Dir, Grid, Pos}, search::{self, Search}};


pub(crate) const TURN_COST: u64 = 1000;

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Tile { Floor, Wall, Start, End }

/// Position & facing.
type Reindeer = (Pos, Dir);

struct Maze {
	grid: Grid<Tile>,
	start: Pos,
	end: Pos,
}

impl Maze {
	fn moves(&self, (pos, dir): Reindeer) -> impl Iterator<Item = (Reindeer, u64)> + '_ {
		self.grid.step(pos, dir)
			.filter(|&p| self.grid[p] != Tile::Wall)
			.map(|p| ((p, dir), 1))
			.into_iter()
			.chain([((pos, dir.cw()), TURN_COST), ((pos, dir.ccw()), TURN_COST)])
	}

	fn start(&self) -> Reindeer {
		(self.start, Dir::East)
	}

	fn ends(&self) -> [Reindeer; 4] {
		Dir::ALL.map(|dir| (self.end, dir))
	}

	fn explore(&self) -> Search<Reindeer> {
		log::trace!("Maze:\n{}", self.grid);
		search::explore([self.start()], |&r| self.moves(r))
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error(transparent)]
	Maze(#[from] parsing::MazeError),
	#[error("the end tile cannot be reached")]
	Unreachable,
}


fn part1_impl(maze: &Maze) -> Option<u64> {
	let search = search::explore_until([maze.start()], |&r| maze.moves(r), |&(pos, _)| pos == maze.end);
	search.reached().and_then(|r| search.cost(r))
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(&input.parse()?).ok_or(Error::Unreachable)
}


fn part2_impl(maze: &Maze) -> Option<usize> {
	use std::collections::HashSet;

	let search = maze.explore();
	let ends = maze.ends();
	let best = search.min_cost(&ends)?;
	let best_ends = ends.into_iter().filter(|r| search.cost(r) == Some(best));

	if log::log_enabled!(log::Level::Debug) {
		let paths = best_ends.clone()
			.try_fold(0_u64, |sum, r| sum.checked_add(search.count_shortest_paths(&r)?));
		log::debug!("{} best paths of score {best} among {} reindeer states",
			paths.map_or("Too many".to_owned(), |n| n.to_string()), search.len());
	}

	let tiles = search.on_shortest_paths(best_ends)
		.into_iter()
		.map(|(pos, _)| pos)
		.collect::<HashSet<_>>();
	Some(tiles.len())
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	part2_impl(&input.parse()?).ok_or(Error::Unreachable)
}


mod parsing {
	use std::str::FromStr;
	use crate::grid::{Grid, parsing::GridError};
	use super::{Maze, Tile};

	impl TryFrom<char> for Tile {
		type Error = char;
		fn try_from(chr: char) -> Result<Self, Self::Error> {
			match chr {
				'.' => Ok(Tile::Floor),
				'#' => Ok(Tile::Wall),
				'S' => Ok(Tile::Start),
				'E' => Ok(Tile::End),
				invalid => Err(invalid),
			}
		}
	}

	impl From<Tile> for char {
		fn from(tile: Tile) -> Self {
			match tile { Tile::Floor => '.', Tile::Wall => '#', Tile::Start => 'S', Tile::End => 'E' }
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum MazeError {
		#[error(transparent)]
		Layout(#[from] GridError),
		#[error("no {0:?} tile")]
		Missing(char),
		#[error("line {line}, column {column}: another {found:?} tile")]
		Duplicate { line: usize, column: usize, found: char },
	}

	impl FromStr for Maze {
		type Err = MazeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MazeError::*;

			let grid = s.parse::<Grid<Tile>>()?;
			let (mut start, mut end) = (None, None);
			for pos in grid.positions() {
				let (found, chr) = match grid[pos] {
					Tile::Start => (&mut start, 'S'),
					Tile::End => (&mut end, 'E'),
					_ => continue,
				};
				if found.replace(pos).is_some() {
					return Err(Duplicate { line: pos[1] + 1, column: pos[0] + 1, found: chr })
				}
			}

			let start = start.ok_or(Missing('S'))?;
			let end = end.ok_or(Missing('E'))?;
			Ok(Maze { grid, start, end })
		}
	}

	#[test]
	fn tests() {
		use MazeError::*;

		let maze = super::tests::INPUTS[0].parse::<Maze>().unwrap();
		assert_eq!((maze.start, maze.end), ([1, 13], [13, 1]));
		assert_eq!(maze.grid[[0, 0]], Tile::Wall);
		assert_eq!(maze.grid[[1, 1]], Tile::Floor);

		assert!(matches!("#S#\n#.#".parse::<Maze>(), Err(Missing('E'))));
		assert!(matches!("SE.E".parse::<Maze>(), Err(Duplicate { line: 1, column: 4, found: 'E' })));
		assert!(matches!("SE\n.".parse::<Maze>(), Err(Layout(GridError::Format { line: 2, .. }))));
		assert!(matches!("S.x.E".parse::<Maze>(),
			Err(Layout(GridError::Tile { line: 1, column: 3, found: 'x' }))));
	}
}
