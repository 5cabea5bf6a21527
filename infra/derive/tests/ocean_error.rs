use ocean_derive::ocean_error;
use std::borrow::Cow;

#[ocean_error]
pub enum ExportError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing asset: {path}")]
    MissingAsset { path: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk full"))
}

#[test]
fn ocean_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ocean_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), ExportError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, ExportError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk full");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("writing index.html").unwrap_err();
    assert_eq!(err.to_string(), "IO error (writing index.html): disk full");
}

#[test]
fn context_overrides_on_own_results() {
    let res: Result<(), ExportError> = Err("render failed".into());
    let err = res.context("rendering /world").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (rendering /world): render failed");
}

#[test]
fn context_leaves_variants_without_slot_untouched() {
    let res: Result<(), ExportError> = Err(ExportError::MissingAsset { path: "logo.png".into() });
    let err = res.context("copying assets").unwrap_err();
    assert_eq!(err.to_string(), "Missing asset: logo.png");
}

#[test]
fn owned_messages_become_internal() {
    let err = ExportError::from(format!("route {} failed", "/seas"));
    assert!(matches!(err, ExportError::Internal { ref message, .. } if message == "route /seas failed"));
}
