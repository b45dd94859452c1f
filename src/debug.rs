// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fs::File, io::{BufWriter, Write as _}, path::Path, sync::Mutex};
use log::{LevelFilter, Log, Metadata, Record};


pub(crate) const DEBUG_LOG: &str = "debug.log";

/// Writes `log` records to a side file, one `[LEVEL target] message` line each.
pub(crate) struct DebugLog {
	file: Mutex<BufWriter<File>>,
	level: LevelFilter,
}

impl DebugLog {
	pub(crate) fn create(path: &Path, append: bool, level: LevelFilter) -> std::io::Result<Self> {
		let file = std::fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(append)
			.truncate(!append)
			.open(path)?;
		Ok(DebugLog { file: Mutex::new(BufWriter::new(file)), level })
	}

	/// Installs this as the global logger (which can only be done once per process).
	pub(crate) fn install(self) -> Result<(), log::SetLoggerError> {
		let level = self.level;
		log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(level))
	}
}

impl Log for DebugLog {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) { return }
		// Write failures are dropped
		if let Ok(mut file) = self.file.lock() {
			_ = writeln!(file, "[{} {}] {}", record.level(), record.target(), record.args());
		}
	}

	fn flush(&self) {
		if let Ok(mut file) = self.file.lock() { _ = file.flush() }
	}
}
