//! # Deep Ocean Static Export
//!
//! Renders every route to a directory of plain files that any static host can
//! serve: `index.html`, `<route>/index.html`, `404.html`, `sitemap.xml` and
//! `robots.txt`, next to a copy of the public asset directory.
//!
//! ## Example
//! ```no_run
//! use ocean::Site;
//! use ocean_export::{ExportOptions, export};
//!
//! let site = Site::new(Default::default());
//! let report = export(&site, &ExportOptions::new("dist").public_dir("public"))?;
//! assert_eq!(report.pages, 6);
//! # Ok::<(), ocean_export::ExportError>(())
//! ```

use ocean::domain::routes::Route;
use ocean::kernel::render::PageRenderer;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use walkdir::WalkDir;

#[ocean_derive::ocean_error]
pub enum ExportError {
    #[error("Export I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Public directory walk failed{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid export options{}: {message}", format_context(.context))]
    InvalidOptions { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal export error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Where to write and what to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Copied verbatim below `out_dir`; skipped when `None` or missing.
    pub public_dir: Option<PathBuf>,
    /// Remove `out_dir` before writing.
    pub clean: bool,
}

impl ExportOptions {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), public_dir: None, clean: false }
    }

    #[must_use]
    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }
}

/// What an export produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Route documents written, `404.html` excluded.
    pub pages: usize,
    /// Files copied from the public directory.
    pub assets: usize,
    /// Every generated file, relative to the output directory.
    pub files: Vec<PathBuf>,
}

/// Writes the whole site below `options.out_dir`.
///
/// Public assets are copied first so a generated page always wins over an
/// asset at the same path.
///
/// # Errors
/// * [`ExportError::InvalidOptions`] when the output and public directories are
///   the same or one contains the other
/// * [`ExportError::Io`] / [`ExportError::Walk`] for filesystem failures
pub fn export(pages: &impl PageRenderer, options: &ExportOptions) -> Result<ExportReport, ExportError> {
    let out = options.out_dir.as_path();
    if let Some(public) = options.public_dir.as_deref().filter(|public| public.is_dir()) {
        check_disjoint(public, out)?;
    }

    if options.clean && out.exists() {
        fs::remove_dir_all(out).context(format!("cleaning {}", out.display()))?;
    }
    fs::create_dir_all(out).context(format!("creating {}", out.display()))?;

    let mut report = ExportReport::default();

    if let Some(public) = options.public_dir.as_deref() {
        if public.is_dir() {
            report.assets = copy_public(public, out)?;
            info!(from = %public.display(), files = report.assets, "Public assets copied");
        } else {
            debug!(path = %public.display(), "No public directory, skipping assets");
        }
    }

    for route in Route::iter() {
        let relative = page_file(route);
        write_file(out, &relative, &pages.render(route))?;
        report.files.push(relative);
        report.pages += 1;
    }

    for (name, contents) in [
        ("404.html", pages.render_not_found()),
        ("sitemap.xml", pages.sitemap()),
        ("robots.txt", pages.robots()),
    ] {
        let relative = PathBuf::from(name);
        write_file(out, &relative, &contents)?;
        report.files.push(relative);
    }

    info!(
        out = %out.display(),
        pages = report.pages,
        assets = report.assets,
        "Export complete"
    );
    Ok(report)
}

/// `index.html` for the home page, `<slug>/index.html` for the rest.
#[must_use]
pub fn page_file(route: Route) -> PathBuf {
    let slug = route.slug();
    if slug.is_empty() { PathBuf::from("index.html") } else { Path::new(slug).join("index.html") }
}

fn write_file(out: &Path, relative: &Path, contents: &str) -> Result<(), ExportError> {
    let target = out.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).context(format!("creating {}", parent.display()))?;
    }
    fs::write(&target, contents).context(format!("writing {}", target.display()))?;
    info!(file = %relative.display(), bytes = contents.len(), "Wrote");
    Ok(())
}

fn copy_public(public: &Path, out: &Path) -> Result<usize, ExportError> {
    let mut copied = 0;
    for entry in WalkDir::new(public).min_depth(1).follow_links(true) {
        let entry = entry.context(format!("walking {}", public.display()))?;
        let relative = entry
            .path()
            .strip_prefix(public)
            .map_err(|err| ExportError::from(err.to_string()))?;
        let target = out.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).context(format!("creating {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).context(format!("copying {}", relative.display()))?;
            debug!(file = %relative.display(), "Copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}

/// A cleaned output would wipe a public dir inside it, and an output inside
/// the public dir would be copied into itself.
fn check_disjoint(public: &Path, out: &Path) -> Result<(), ExportError> {
    let public_abs = resolve(public)?;
    let out_abs = resolve(out)?;
    if public_abs.starts_with(&out_abs) || out_abs.starts_with(&public_abs) {
        return Err(ExportError::InvalidOptions {
            message: "output and public directories must not overlap".into(),
            context: Some(format!("out {}, public {}", out_abs.display(), public_abs.display()).into()),
        });
    }
    Ok(())
}

/// Canonical form of a path that may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing tail appended.
fn resolve(path: &Path) -> Result<PathBuf, ExportError> {
    let absolute = std::path::absolute(path).context(format!("resolving {}", path.display()))?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_owned());
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = existing.canonicalize().context(format!("resolving {}", path.display()))?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}
