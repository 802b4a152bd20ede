use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Error;
use crate::path;
use crate::rewrite;
use crate::rules::Replacement;
use crate::walk;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Source files visited, whether or not they changed.
    pub scanned: usize,
    pub fixed_files: usize,
    pub writes: usize,
    pub failures: usize,
}

/// Walks a tree and rewrites every source file in it, printing progress to `out`.
pub struct Scanner<W> {
    out: W,
    display_base: Option<PathBuf>,
}

impl<W: Write> Scanner<W> {
    pub fn new(out: W) -> Self {
        Scanner {
            out,
            display_base: None,
        }
    }

    /// Print file paths relative to `base` where possible.
    pub fn display_relative_to(mut self, base: PathBuf) -> Self {
        self.display_base = Some(base);
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn display(&self, file_path: &Path) -> PathBuf {
        match &self.display_base {
            Some(base) => path::relative_to(file_path, base),
            None => file_path.to_path_buf(),
        }
    }

    pub fn run(&mut self, root: &Path, rules: &[Replacement]) -> io::Result<Summary> {
        writeln!(self.out, "Scanning {}...", root.display())?;

        let mut summary = Summary::default();

        match walk::source_files(root) {
            Ok(files) => {
                for file_path in files {
                    summary.scanned += 1;
                    self.process(&file_path, rules, &mut summary)?;
                }
            }
            Err(err) => {
                warn!(root = %root.display(), error = %err, "can't walk root");
                writeln!(self.out, "Directory not found: {}", err.path().display())?;
            }
        }

        writeln!(self.out, "Scanned {} files.", summary.scanned)?;
        Ok(summary)
    }

    fn process(
        &mut self,
        file_path: &Path,
        rules: &[Replacement],
        summary: &mut Summary,
    ) -> io::Result<()> {
        let shown = self.display(file_path);

        // Printed after the rewrite returns; the callback can't surface sink errors.
        let mut fixed_lines = 0;
        let result = rewrite::rewrite_file(file_path, rules, |_| fixed_lines += 1);

        for _ in 0..fixed_lines {
            writeln!(self.out, "Fixed: {}", shown.display())?;
        }

        match result {
            Ok(0) => debug!(path = %shown.display(), "no match"),
            Ok(writes) => {
                summary.fixed_files += 1;
                summary.writes += writes;
            }
            Err(err) => {
                summary.failures += 1;
                if fixed_lines > 0 {
                    summary.fixed_files += 1;
                    summary.writes += fixed_lines;
                }
                let action = match &err {
                    Error::Write { .. } => "writing",
                    _ => "reading",
                };
                writeln!(self.out, "Error {} {}: {}", action, shown.display(), err)?;
            }
        }
        Ok(())
    }
}
