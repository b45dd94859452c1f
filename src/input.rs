// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::{Path, PathBuf};
use crate::error::Error;


pub(crate) const INPUT_DIR: &str = "inputs";

pub(crate) fn day_input_path(dir: &Path, day: u8) -> PathBuf {
	dir.join(format!("day{day:02}.txt"))
}

/// Reads a day’s whole input; a missing or unreadable file is fatal to that day.
pub(crate) fn read_day_input(dir: &Path, day: u8) -> Result<String, Error> {
	let path = day_input_path(dir, day);
	std::fs::read_to_string(&path).map_err(|source| Error::Input { path, source })
}

/// Returns an iterator over (1-based) line numbers and lines with anything but whitespace.
pub(crate) fn non_empty_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
	s.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(l, line)| (l + 1, line))
}
