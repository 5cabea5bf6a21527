use ocean_derive::ocean_error;
use std::borrow::Cow;

#[ocean_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _: DemoError = "boom".into();
    let _: DemoError = std::io::Error::other("disk").into();
}
