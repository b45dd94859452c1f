// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Column & row (`[x, y]`), with the origin in the top-left corner.
pub(crate) type Pos = [usize; 2];

pub(crate) fn manhattan(a: Pos, b: Pos) -> usize {
	a[0].abs_diff(b[0]) + a[1].abs_diff(b[1])
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(Debug))]
pub(crate) enum Dir { North, East, South, West }

impl Dir {
	pub(crate) const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

	pub(crate) fn cw(self) -> Self {
		use Dir::*;
		match self { North => East, East => South, South => West, West => North }
	}

	pub(crate) fn ccw(self) -> Self {
		self.cw().rev()
	}

	pub(crate) fn rev(self) -> Self {
		self.cw().cw()
	}

	fn offset(self) -> [isize; 2] {
		use Dir::*;
		match self { North => [0, -1], East => [1, 0], South => [0, 1], West => [-1, 0] }
	}

	/// Steps from `pos`, unless that would leave the first quadrant.
	pub(crate) fn step(self, pos: Pos) -> Option<Pos> {
		let [dx, dy] = self.offset();
		Some([pos[0].checked_add_signed(dx)?, pos[1].checked_add_signed(dy)?])
	}

	/// The direction of a single step from `from` to `to`, if they are adjacent.
	pub(crate) fn between(from: Pos, to: Pos) -> Option<Self> {
		Self::ALL.into_iter().find(|dir| dir.step(from) == Some(to))
	}
}

impl From<Dir> for char {
	fn from(dir: Dir) -> Self {
		use Dir::*;
		match dir { North => '^', East => '>', South => 'v', West => '<' }
	}
}


/// Rectangular grid of tiles, stored row-major.
#[derive(Clone)]
pub(crate) struct Grid<T> {
	tiles: Vec<T>,
	width: usize,
}

impl<T> Grid<T> {
	pub(crate) fn new(width: usize, height: usize, fill: T) -> Self where T: Clone {
		Grid { tiles: vec![fill; width * height], width }
	}

	pub(crate) fn width(&self) -> usize {
		self.width
	}

	pub(crate) fn height(&self) -> usize {
		if self.width == 0 { 0 } else { self.tiles.len() / self.width }
	}

	pub(crate) fn contains(&self, pos: Pos) -> bool {
		pos[0] < self.width && pos[1] < self.height()
	}

	pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
		self.contains(pos).then(|| &self.tiles[pos[1] * self.width + pos[0]])
	}

	/// Steps from `pos`, unless that would leave the grid.
	pub(crate) fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
		dir.step(pos).filter(|&p| self.contains(p))
	}

	pub(crate) fn neighbors(&self, pos: Pos) -> impl Iterator<Item = (Dir, Pos)> + '_ {
		Dir::ALL.into_iter().filter_map(move |dir| self.step(pos, dir).map(|p| (dir, p)))
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
		let (width, height) = (self.width(), self.height());
		(0..height).flat_map(move |y| (0..width).map(move |x| [x, y]))
	}
}

impl<T> std::ops::Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, pos: Pos) -> &Self::Output {
		self.get(pos).unwrap_or_else(|| panic!("Position {pos:?} out of bounds"))
	}
}

impl<T> std::ops::IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
		assert!(self.contains(pos), "Position {pos:?} out of bounds");
		&mut self.tiles[pos[1] * self.width + pos[0]]
	}
}

impl<T: Copy + Into<char>> std::fmt::Display for Grid<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;

		for (y, row) in self.tiles.chunks(self.width.max(1)).enumerate() {
			if y > 0 { f.write_char('\n')? }
			for &tile in row { f.write_char(tile.into())? }
		}
		Ok(())
	}
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[derive(Debug, thiserror::Error)]
	pub(crate) enum GridError {
		#[error("line {line}: expected {} tiles, found {len}", .width.map_or("some".to_owned(), |w| w.to_string()))]
		Format { line: usize, width: Option<usize>, len: usize },
		#[error("line {line}, column {column}: invalid tile {found:?}")]
		Tile { line: usize, column: usize, found: char },
		#[error("empty grid")]
		Empty,
	}

	impl<T: TryFrom<char>> FromStr for Grid<T> {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use GridError::*;

			let mut tiles = Vec::with_capacity(s.len());
			let mut width = None;
			for (l, line) in s.lines().enumerate() {
				let len = line.chars().count();
				if len == 0 || len != *width.get_or_insert(len) {
					return Err(Format { line: l + 1, width, len })
				}
				for (c, chr) in line.chars().enumerate() {
					tiles.push(T::try_from(chr)
						.map_err(|_| Tile { line: l + 1, column: c + 1, found: chr })?);
				}
			}

			let width = width.ok_or(Empty)?;
			Ok(Grid { tiles, width })
		}
	}
}
