// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::{HashMap, HashSet}, hash::Hash};
use crate::heap::{HeapItem, MinHeap};


struct Frontier<S> {
	cost: u64,
	state: S,
}

impl<S> HeapItem for Frontier<S> {
	type Key = u64;
	fn key(&self) -> u64 { self.cost }
}


struct Arrival<S> {
	cost: u64,
	/// All states from which this one was reached at `cost`.
	from: Vec<S>,
}


/// Cheapest arrival costs (and their predecessors) per state, as found by [`explore`].
pub(crate) struct Search<S> {
	arrivals: HashMap<S, Arrival<S>>,
	reached: Option<S>,
}

/// Explores every state reachable from `starts`, cheapest first.
pub(crate) fn explore<S, I>(
	starts: impl IntoIterator<Item = S>,
	successors: impl FnMut(&S) -> I,
) -> Search<S>
where S: Clone + Eq + Hash, I: IntoIterator<Item = (S, u64)> {
	explore_until(starts, successors, |_| false)
}

/// Like [`explore`], but stops as soon as a state for which `is_target` holds
/// is finalized (see [`Search::reached`]).
pub(crate) fn explore_until<S, I>(
	starts: impl IntoIterator<Item = S>,
	mut successors: impl FnMut(&S) -> I,
	mut is_target: impl FnMut(&S) -> bool,
) -> Search<S>
where S: Clone + Eq + Hash, I: IntoIterator<Item = (S, u64)> {
	use std::{cmp::Ordering::*, collections::hash_map::Entry::*};

	let mut arrivals = HashMap::new();
	let mut heap = MinHeap::new();
	for state in starts {
		if let Vacant(entry) = arrivals.entry(state) {
			heap.insert(Frontier { cost: 0, state: entry.key().clone() });
			entry.insert(Arrival { cost: 0, from: Vec::new() });
		}
	}

	let mut reached = None;
	let (mut popped, mut max_frontier) = (0_usize, heap.size());
	while let Some(Frontier { cost, state }) = heap.extract_min() {
		// Stale: a cheaper arrival was found after this one was pushed
		if arrivals.get(&state).map_or(false, |a: &Arrival<S>| a.cost < cost) { continue }
		popped += 1;

		if is_target(&state) {
			reached = Some(state);
			break
		}

		for (next, step) in successors(&state) {
			let next_cost = cost + step;
			match arrivals.entry(next) {
				Vacant(entry) => {
					heap.insert(Frontier { cost: next_cost, state: entry.key().clone() });
					entry.insert(Arrival { cost: next_cost, from: vec![state.clone()] });
				}
				Occupied(mut entry) => match next_cost.cmp(&entry.get().cost) {
					Less => {
						heap.insert(Frontier { cost: next_cost, state: entry.key().clone() });
						*entry.get_mut() = Arrival { cost: next_cost, from: vec![state.clone()] };
					}
					// Zero-cost ties are dropped to keep the predecessors acyclic
					Equal if step > 0 => {
						let from = &mut entry.get_mut().from;
						if !from.contains(&state) { from.push(state.clone()) }
					}
					_ => (),
				}
			}
		}
		max_frontier = max_frontier.max(heap.size());
	}

	log::debug!("Explored {popped} states ({} reached, frontier peaked at {max_frontier}, {})",
		arrivals.len(), if heap.is_empty() { "exhausted" } else { "stopped early" });

	Search { arrivals, reached }
}


impl<S: Clone + Eq + Hash> Search<S> {
	/// The number of states reached (finalized or not).
	pub(crate) fn len(&self) -> usize {
		self.arrivals.len()
	}

	/// The target state that stopped [`explore_until`], if any.
	pub(crate) fn reached(&self) -> Option<&S> {
		self.reached.as_ref()
	}

	/// The cost of the cheapest arrival at `state` found so far, or `None` if it was never reached.
	///
	/// **Note**: After [`explore_until`] stopped early, only the cost of states that were
	/// finalized (expanded, or [`Search::reached`]) is final; for the rest it is an upper bound.
	pub(crate) fn cost(&self, state: &S) -> Option<u64> {
		self.arrivals.get(state).map(|a| a.cost)
	}

	pub(crate) fn min_cost<'a>(&self, states: impl IntoIterator<Item = &'a S>) -> Option<u64> where S: 'a {
		states.into_iter().filter_map(|s| self.cost(s)).min()
	}

	pub(crate) fn predecessors(&self, state: &S) -> &[S] {
		self.arrivals.get(state).map(|a| a.from.as_slice()).unwrap_or(&[])
	}

	/// One cheapest path, from a start state up to and including `target`.
	pub(crate) fn trail(&self, target: &S) -> Option<Vec<S>> {
		self.arrivals.get(target)?;
		let mut trail = vec![target.clone()];
		while let Some(prev) = self.predecessors(trail.last()?).first() {
			trail.push(prev.clone());
		}
		trail.reverse();
		Some(trail)
	}

	/// Every cheapest path to `target`, each from a start state up to and including `target`.
	pub(crate) fn shortest_paths(&self, target: &S) -> Vec<Vec<S>> {
		if self.cost(target).is_none() { return Vec::new() }
		let from = self.predecessors(target);
		if from.is_empty() { return vec![vec![target.clone()]] }
		from.iter()
			.flat_map(|prev| self.shortest_paths(prev))
			.map(|mut path| { path.push(target.clone()); path })
			.collect()
	}

	/// The number of cheapest paths to `target` (zero if it is unreachable),
	/// or `None` if that number does not fit in a `u64`.
	pub(crate) fn count_shortest_paths(&self, target: &S) -> Option<u64> {
		fn count<'a, S: Clone + Eq + Hash>(
			search: &'a Search<S>,
			state: &'a S,
			cache: &mut HashMap<&'a S, Option<u64>>,
		) -> Option<u64> {
			if let Some(&n) = cache.get(state) { return n }
			let from = search.predecessors(state);
			let n = if from.is_empty() { Some(1) } else {
				from.iter().try_fold(0_u64, |sum, s| sum.checked_add(count(search, s, cache)?))
			};
			cache.insert(state, n);
			n
		}

		if self.cost(target).is_none() { return Some(0) }
		count(self, target, &mut HashMap::new())
	}

	/// All states on any cheapest path into any of `targets`.
	pub(crate) fn on_shortest_paths(&self, targets: impl IntoIterator<Item = S>) -> HashSet<S> {
		let mut stack = targets.into_iter()
			.filter(|s| self.arrivals.contains_key(s))
			.collect::<Vec<_>>();
		let mut seen = stack.iter().cloned().collect::<HashSet<_>>();
		while let Some(state) = stack.pop() {
			for prev in self.predecessors(&state) {
				if seen.insert(prev.clone()) { stack.push(prev.clone()) }
			}
		}
		seen
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use crate::grid::{Dir, Grid, Pos};
	use super::*;

	fn open_grid(s: &str) -> (Grid<bool>, Pos, Pos) {
		let chars = s.parse::<Grid<char>>().unwrap();
		let mut grid = Grid::new(chars.width(), chars.height(), false);
		for pos in chars.positions() { grid[pos] = chars[pos] != '#' }
		let find = |c: char| chars.positions().find(|&p| chars[p] == c).unwrap();
		(grid, find('S'), find('E'))
	}

	fn walk(grid: &Grid<bool>, pos: &Pos) -> Vec<(Pos, u64)> {
		grid.neighbors(*pos).filter(|&(_, p)| grid[p]).map(|(_, p)| (p, 1)).collect()
	}

	fn turn(grid: &Grid<bool>, &(pos, dir): &(Pos, Dir)) -> Vec<((Pos, Dir), u64)> {
		grid.step(pos, dir)
			.filter(|&p| grid[p])
			.map(|p| ((p, dir), 1))
			.into_iter()
			.chain([((pos, dir.cw()), 1000), ((pos, dir.ccw()), 1000)])
			.collect()
	}

	#[test]
	fn unreachable() {
		let (grid, start, target) = open_grid(indoc! { "
			S.#..
			..#.E
			..#..
		" });
		let search = explore([start], |p| walk(&grid, p));
		assert_eq!(search.cost(&target), None);
		assert_eq!(search.len(), 6);
		assert_eq!(search.trail(&target), None);
		assert_eq!(search.count_shortest_paths(&target), Some(0));
		assert!(search.shortest_paths(&target).is_empty());

		let search = explore_until([start], |p| walk(&grid, p), |&p| p == target);
		assert!(search.reached().is_none());
	}

	#[test]
	fn ties() {
		let (grid, start, target) = open_grid(indoc! { "
			S..
			.#.
			..E
		" });
		let search = explore([start], |p| walk(&grid, p));
		assert_eq!(search.cost(&target), Some(4));
		assert_eq!(search.count_shortest_paths(&target), Some(2));
		assert_eq!(search.predecessors(&target).len(), 2);

		let mut paths = search.shortest_paths(&target);
		paths.sort();
		assert_eq!(paths, [
			vec![[0, 0], [0, 1], [0, 2], [1, 2], [2, 2]],
			vec![[0, 0], [1, 0], [2, 0], [2, 1], [2, 2]],
		]);

		let tiles = search.on_shortest_paths([target]);
		assert_eq!(tiles, grid.positions().filter(|&p| grid[p]).collect::<HashSet<_>>());
		assert_eq!(tiles.len(), 8);

		let trail = search.trail(&target).unwrap();
		assert!(paths.contains(&trail));
	}

	#[test]
	fn early_stop() {
		let (grid, start, target) = open_grid(indoc! { "
			S.......
			.######.
			.......E
		" });
		let full = explore([start], |p| walk(&grid, p));
		let stopped = explore_until([start], |p| walk(&grid, p), |&p| p == target);
		assert_eq!(stopped.reached(), Some(&target));
		assert_eq!(stopped.cost(&target), full.cost(&target));
		assert_eq!(stopped.cost(&target), Some(9));
		assert_eq!(stopped.count_shortest_paths(&target), Some(2));
	}

	#[test]
	fn many_ties() {
		let open = |size| {
			let grid = Grid::new(size, size, true);
			explore([[0, 0]], |p| walk(&grid, p)).count_shortest_paths(&[size - 1, size - 1])
		};
		assert_eq!(open(10), Some(48620));
		assert_eq!(open(33), Some(1832624140942590534));
		assert_eq!(open(40), None);
	}

	#[test]
	fn upper_bounds() {
		let edges = |&s: &u8| match s { 0 => vec![(1, 10), (2, 1)], 2 => vec![(1, 1)], _ => Vec::new() };
		let stopped = explore_until([0], edges, |&s| s == 2);
		assert_eq!(stopped.reached(), Some(&2));
		assert_eq!(stopped.cost(&1), Some(10));
		assert_eq!(explore([0], edges).cost(&1), Some(2));
	}

	#[test]
	fn turn_penalties() {
		let (grid, start, target) = open_grid(indoc! { "
			#####
			#..E#
			#.#.#
			#S..#
			#####
		" });
		let search = explore([(start, Dir::East)], |s| turn(&grid, s));
		let targets = Dir::ALL.map(|d| (target, d));
		assert_eq!(search.min_cost(&targets), Some(1004));
		assert_eq!(search.cost(&(start, Dir::West)), Some(2000));
		assert_eq!(search.cost(&(target, Dir::North)), Some(1004));
		assert_eq!(search.cost(&(target, Dir::East)), Some(2004));
	}

	fn random_grid(rng: &mut impl rand::Rng) -> Grid<bool> {
		let (width, height) = (rng.gen_range(1..8), rng.gen_range(1..8));
		let mut grid = Grid::new(width, height, true);
		for pos in grid.positions().collect::<Vec<_>>() {
			grid[pos] = pos == [0, 0] || rng.gen_bool(0.7);
		}
		grid
	}

	#[test]
	fn random_bfs() {
		use {std::collections::VecDeque, rand::{SeedableRng as _, rngs::StdRng}};

		let mut rng = StdRng::seed_from_u64(18);
		for _ in 0..200 {
			let grid = random_grid(&mut rng);
			let search = explore([[0, 0]], |p| walk(&grid, p));

			let mut dists = HashMap::from([([0, 0], 0)]);
			let mut queue = VecDeque::from([[0, 0]]);
			while let Some(pos) = queue.pop_front() {
				let dist = dists[&pos];
				for (next, _) in walk(&grid, &pos) {
					dists.entry(next).or_insert_with(|| { queue.push_back(next); dist + 1 });
				}
			}

			for pos in grid.positions() {
				assert_eq!(search.cost(&pos), dists.get(&pos).copied());
			}
		}
	}

	#[test]
	fn random_relaxation() {
		use rand::{SeedableRng as _, rngs::StdRng};

		let mut rng = StdRng::seed_from_u64(16);
		for _ in 0..100 {
			let grid = random_grid(&mut rng);
			let start = ([0, 0], Dir::East);
			let search = explore([start], |s| turn(&grid, s));

			// Bellman-Ford style: relax every edge until nothing improves
			let states = grid.positions()
				.filter(|&p| grid[p])
				.flat_map(|p| Dir::ALL.map(|d| (p, d)))
				.collect::<Vec<_>>();
			let mut costs = HashMap::from([(start, 0_u64)]);
			loop {
				let mut improved = false;
				for state in &states {
					let Some(&cost) = costs.get(state) else { continue };
					for (next, step) in turn(&grid, state) {
						let best = costs.entry(next).or_insert(u64::MAX);
						if cost + step < *best { *best = cost + step; improved = true }
					}
				}
				if !improved { break }
			}

			for state in &states {
				assert_eq!(search.cost(state), costs.get(state).copied());
			}
		}
	}
}
