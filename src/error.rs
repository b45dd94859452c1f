// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;


pub(crate) type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("failed to read input {}: {source}", .path.display())]
	Input { path: PathBuf, source: std::io::Error },
	#[error("day {day}, part {part}: {source}")]
	Puzzle { day: u8, part: u8, source: BoxedError },
	#[error("day {0} has no solution here")]
	UnknownDay(u8),
	#[error("failed to open debug log {}: {source}", .path.display())]
	DebugLog { path: PathBuf, source: std::io::Error },
	#[error("failed to install debug log: {0}")]
	Logger(#[from] log::SetLoggerError),
}

impl Error {
	pub(crate) fn puzzle(day: u8, part: u8, source: impl Into<BoxedError>) -> Self {
		Error::Puzzle { day, part, source: source.into() }
	}
}
