//! Terminal logging.
//!
//! Every line carries a bracketed, colored `[module]` tag. `log!` always
//! prints; `debug!` prints only under `--verbose`. Output goes to stdout
//! until [`set_stderr`] redirects it, which `query` does so its JSON stays
//! the only thing on stdout.
//!
//! ```ignore
//! log!("build"; "movies: indexed {}", plural_count(n, "item"));
//! debug!("index"; "skip {}", name);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::io::{Write, stderr, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static TO_STDERR: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Send all subsequent logs to stderr.
pub fn set_stderr(v: bool) {
    TO_STDERR.store(v, Ordering::Relaxed);
}

fn stream() -> Stream {
    if TO_STDERR.load(Ordering::Relaxed) {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but silent unless `--verbose` is set.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write one tagged line. Write failures are ignored.
pub fn log(module: &str, message: &str) {
    let stream = stream();
    let line = format!("{} {message}", tag(module, stream));

    match stream {
        Stream::Stderr => {
            let _ = writeln!(stderr().lock(), "{line}");
        }
        _ => {
            let mut out = stdout().lock();
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}

/// `[module]`, colored by module when the stream supports it.
fn tag(module: &str, stream: Stream) -> String {
    let tag = format!("[{module}]");
    let paint: fn(&String) -> String = match module.to_ascii_lowercase().as_str() {
        "build" => |t| t.bright_green().bold().to_string(),
        "query" => |t| t.bright_blue().bold().to_string(),
        "error" => |t| t.bright_red().bold().to_string(),
        "warning" => |t| t.bright_yellow().bold().to_string(),
        _ => |t| t.bright_black().to_string(),
    };
    tag.if_supports_color(stream, paint).to_string()
}
