use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconfx operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconfx::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid outline '{spec}': {reason}")]
    #[diagnostic(
        code(iconfx::outline),
        help("Expected a width and a colour, e.g. \"14px #bdbabd\" or \"2 rgba(0,0,0,128)\"")
    )]
    InvalidOutlineSpec { spec: String, reason: String },

    #[error("Padding {padding}px is too large for image size {width}x{height}")]
    #[diagnostic(
        code(iconfx::padding),
        help("Padding must leave at least one pixel of content on each axis")
    )]
    InvalidPadding { padding: u32, width: u32, height: u32 },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(iconfx::decode))]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(iconfx::encode))]
    Encode { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconfx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{path} already exists")]
    #[diagnostic(code(iconfx::exists), help("Pass --force to replace it"))]
    AlreadyExists { path: PathBuf },

    #[error("{first} and {second} would both be written to {output}")]
    #[diagnostic(
        code(iconfx::output_collision),
        help("Rename one of the icons or split the manifest sources so their relative paths differ")
    )]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{failed} of {total} icon(s) failed to process")]
    #[diagnostic(code(iconfx::batch))]
    Batch { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, IconError>;
