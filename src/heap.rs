// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Anything that can be ordered in a [`MinHeap`] by an extracted key.
pub(crate) trait HeapItem {
	type Key: Ord;
	fn key(&self) -> Self::Key;
}


/// Array-backed binary heap, surfacing the item with the smallest key first.
///
/// **Note**: Items with equal keys come out in no particular order.
pub(crate) struct MinHeap<T> {
	items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}

impl<T: HeapItem> MinHeap<T> {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn size(&self) -> usize {
		self.items.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub(crate) fn insert(&mut self, item: T) {
		self.items.push(item);
		self.sift_up(self.items.len() - 1);
	}

	pub(crate) fn extract_min(&mut self) -> Option<T> {
		if self.items.is_empty() { return None }
		// Moves the last item into the root slot
		let min = self.items.swap_remove(0);
		if !self.items.is_empty() { self.sift_down(0) }
		Some(min)
	}

	fn sift_up(&mut self, mut i: usize) {
		while i > 0 {
			let parent = (i - 1) / 2;
			if self.items[i].key() >= self.items[parent].key() { break }
			self.items.swap(i, parent);
			i = parent;
		}
	}

	fn sift_down(&mut self, mut i: usize) {
		let len = self.items.len();
		loop {
			let (left, right) = (2 * i + 1, 2 * i + 2);
			let mut min = i;
			if left < len && self.items[left].key() < self.items[min].key() { min = left }
			if right < len && self.items[right].key() < self.items[min].key() { min = right }
			if min == i { break }
			self.items.swap(i, min);
			i = min;
		}
	}
}

impl<T: HeapItem> Extend<T> for MinHeap<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for item in iter { self.insert(item) }
	}
}

impl<T: HeapItem> FromIterator<T> for MinHeap<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut heap = Self::new();
		heap.extend(iter);
		heap
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq, Eq)]
	struct Entry { size: u64, tag: usize }

	impl HeapItem for Entry {
		type Key = u64;
		fn key(&self) -> u64 { self.size }
	}

	fn entries(sizes: impl IntoIterator<Item = u64>) -> Vec<Entry> {
		sizes.into_iter().enumerate().map(|(tag, size)| Entry { size, tag }).collect()
	}

	fn drain(heap: &mut MinHeap<Entry>) -> Vec<Entry> {
		std::iter::from_fn(|| heap.extract_min()).collect()
	}

	#[test]
	fn ordering() {
		let mut heap = entries([5, 3, 1, 4, 2]).into_iter().collect::<MinHeap<_>>();
		let sizes = drain(&mut heap).into_iter().map(|s| s.size).collect::<Vec<_>>();
		assert_eq!(sizes, [1, 2, 3, 4, 5]);
		assert!(heap.is_empty());
		assert!(heap.extract_min().is_none());
	}

	#[test]
	fn size() {
		let mut heap = MinHeap::new();
		heap.extend(entries([7, 7, 2, 9, 0, 4]));
		assert_eq!(heap.size(), 6);
		for m in 1..=4 {
			heap.extract_min();
			assert_eq!(heap.size(), 6 - m);
		}
		heap.insert(Entry { size: 1, tag: 99 });
		assert_eq!(heap.size(), 3);
	}

	#[test]
	fn duplicates() {
		let mut heap = entries([3, 1, 3, 1, 3, 2]).into_iter().collect::<MinHeap<_>>();
		let drained = drain(&mut heap);
		assert_eq!(drained.iter().map(|s| s.size).collect::<Vec<_>>(), [1, 1, 2, 3, 3, 3]);
		let mut tags = drained.iter().map(|s| s.tag).collect::<Vec<_>>();
		tags.sort_unstable();
		assert_eq!(tags, [0, 1, 2, 3, 4, 5]);
	}

	#[test]
	fn random() {
		use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

		let mut rng = StdRng::seed_from_u64(16);
		for _ in 0..50 {
			let len = rng.gen_range(0..200);
			let sizes = (0..len).map(|_| rng.gen_range(0..50)).collect::<Vec<u64>>();
			let mut heap = MinHeap::new();

			// Interleave some extractions with the insertions
			let mut extracted = Vec::new();
			for item in entries(sizes.iter().copied()) {
				heap.insert(item);
				if rng.gen_bool(0.2) { extracted.extend(heap.extract_min()) }
			}
			let mut rest = drain(&mut heap);
			assert!(rest.windows(2).all(|w| w[0].size <= w[1].size));

			extracted.append(&mut rest);
			assert_eq!(extracted.len(), sizes.len());
			let mut tags = extracted.iter().map(|s| s.tag).collect::<Vec<_>>();
			tags.sort_unstable();
			assert!(tags.into_iter().eq(0..sizes.len()));
		}
	}
}
