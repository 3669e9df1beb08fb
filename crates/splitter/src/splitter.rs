use crate::error::{Result, SplitError};
use crate::types::{Capability, UnitKind};
use crate::unit::SourceUnit;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// How emitted files are named under the destination root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// `dest/<base>/<name>.<ext>`, units keep their natural names
    #[default]
    Nested,
    /// Same subdirectory, but named units get a literal `_` prefix so
    /// they cannot collide with language-reserved names
    Flat,
}

/// What one split session wrote, and which named units it refused to
/// overwrite
#[derive(Debug, Default, Serialize)]
pub struct SplitOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Per-file emission state machine.
///
/// Writes the role aggregates (imports, literals), one file per named
/// unit, and after every step rewrites the aggregator file from the
/// accumulated import list, so the aggregator is current at all times.
/// Role files are overwritten unconditionally; named-unit files are
/// never overwritten.
#[derive(Debug)]
pub struct FileSplitter<'a> {
    unit: &'a SourceUnit,
    destination: PathBuf,
    base: String,
    extension: String,
    layout: Layout,
    import_list: Vec<String>,
    aggregator_file: PathBuf,
    imports_file: PathBuf,
    literals_file: PathBuf,
    outcome: SplitOutcome,
}

impl<'a> FileSplitter<'a> {
    /// Create a session for one parsed unit. The destination must exist
    /// and be a directory.
    pub fn new(unit: &'a SourceUnit, destination: impl AsRef<Path>, layout: Layout) -> Result<Self> {
        let destination = destination.as_ref();
        if !destination.is_dir() {
            return Err(SplitError::DestinationInvalid(destination.to_path_buf()));
        }
        if !unit.is_parsed() {
            return Err(SplitError::NotParsed(unit.path().to_path_buf()));
        }

        let base = unit
            .path()
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("source")
            .to_string();
        let extension = unit
            .path()
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let spec = unit.language().spec();
        let aggregator_suffix = spec.unit_suffix.unwrap_or(extension.as_str());

        let subdirectory = destination.join(&base);
        Ok(Self {
            unit,
            destination: destination.to_path_buf(),
            aggregator_file: destination.join(format!("{base}{aggregator_suffix}")),
            imports_file: subdirectory.join(format!("imports{extension}")),
            literals_file: subdirectory.join(format!("literals{extension}")),
            base,
            extension,
            layout,
            import_list: Vec::new(),
            outcome: SplitOutcome::default(),
        })
    }

    /// Run the full emission sequence and consume the session
    pub fn split(mut self) -> Result<SplitOutcome> {
        let capability = self.unit.language().capability();
        fs::create_dir_all(self.subdirectory())?;

        self.write_role_file(self.imports_file.clone(), UnitKind::Import, "imports")?;
        self.write_aggregator()?;
        self.write_role_file(self.literals_file.clone(), UnitKind::Literal, "literals")?;
        self.write_aggregator()?;

        if capability >= Capability::Function {
            self.write_named_units(UnitKind::Function)?;
            self.write_aggregator()?;
        }
        if capability >= Capability::Class {
            self.write_named_units(UnitKind::Class)?;
            self.write_aggregator()?;
        }
        if capability >= Capability::Interface {
            self.write_named_units(UnitKind::Interface)?;
            self.write_aggregator()?;
        }

        self.outcome.written.push(self.aggregator_file.clone());
        Ok(self.outcome)
    }

    fn subdirectory(&self) -> PathBuf {
        self.destination.join(&self.base)
    }

    /// Concatenate every span of a category into one role file. Role
    /// files are rewritten on every run, no existence check.
    fn write_role_file(&mut self, path: PathBuf, kind: UnitKind, role: &str) -> Result<()> {
        let mut content = Vec::new();
        for span in self.unit.units(kind) {
            content.extend_from_slice(self.unit.text(span));
            content.push(b'\n');
        }
        fs::write(&path, content)?;
        self.outcome.written.push(path);
        self.import_list.push(format!("{}/{role}", self.base));
        Ok(())
    }

    /// One file per unit, named after the unit's declaration. A file
    /// already on disk aborts that unit's write only.
    fn write_named_units(&mut self, kind: UnitKind) -> Result<()> {
        for span in self.unit.units(kind) {
            let name = span.name.as_deref().ok_or(SplitError::MissingNodeName {
                kind: kind.as_str(),
                start: span.start_byte,
                end: span.end_byte,
            })?;
            let stem = match self.layout {
                Layout::Nested => name.to_string(),
                Layout::Flat => format!("_{name}"),
            };
            let path = self.subdirectory().join(format!("{stem}{}", self.extension));
            match Self::write_new(&path, self.unit.text(span)) {
                Ok(()) => {
                    self.outcome.written.push(path);
                    self.import_list.push(format!("{}/{stem}", self.base));
                }
                Err(err @ SplitError::UnitAlreadyExists(_)) => {
                    log::warn!("{err}, keeping the existing file");
                    self.outcome.skipped.push(path);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn write_new(path: &Path, content: &[u8]) -> Result<()> {
        if path.exists() {
            return Err(SplitError::UnitAlreadyExists(path.to_path_buf()));
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Rewrite the aggregator from the whole accumulated import list,
    /// applying the language's template, path separator and suffix.
    fn write_aggregator(&mut self) -> Result<()> {
        let spec = self.unit.language().spec();
        let mut content = String::new();
        for relative in &self.import_list {
            let mut unit_path = relative.clone();
            if let Some(suffix) = spec.unit_suffix {
                unit_path.push_str(suffix);
            }
            if spec.path_separator != '/' {
                unit_path = unit_path.replace('/', &spec.path_separator.to_string());
            }
            content.push_str(&spec.import_template.replace("%s", &unit_path));
            content.push('\n');
        }
        fs::write(&self.aggregator_file, content)?;
        Ok(())
    }
}
