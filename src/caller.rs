// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site resolution.
//!
//! [`here`] walks the runtime stack and identifies exactly one frame, the
//! one `skip` levels above its own caller.  It is a best-effort diagnostic
//! query: when the walk or the symbolication comes up empty it degrades to
//! the all-`"unknown"` sentinel [`Frame`] rather than failing.  It never
//! produces a full stack trace.

use std::fmt::Display;

/// Field value used when a frame cannot be resolved.  Every field carries
/// it, so "resolution failed" is distinguishable from "resolved to an empty
/// name".
pub const UNKNOWN: &str = "unknown";

/// Demangled prefix of [`here`]'s own symbol.  The walk discards every
/// frame up to and including the one carrying this symbol, so `skip = 0`
/// means "the immediate caller of `here`" no matter how many frames the
/// stack-walking primitive burns before reaching it.  Anchoring on the
/// symbol instead of a fixed frame count keeps the semantics stable across
/// optimization levels; the attribution regression tests pin it.
const RESOLVER_SYMBOL: &str = "teelog::caller::here";

/**
A single identified point in the call stack.

A value type: created fresh on every resolution, immutable once returned,
no identity beyond its fields.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Full path of the source file.
    pub file: String,
    /// Base name of [`Self::file`].
    pub short_file: String,
    /// 1-based line number; `-1` when unresolvable.
    pub line: i32,
    /// Fully qualified symbol, e.g. `teelog::caller::here`.
    pub func: String,
    /// Final path segment of [`Self::func`].
    pub short_func: String,
}

impl Frame {
    /// The sentinel returned when resolution fails.
    pub fn unknown() -> Self {
        Self {
            file: UNKNOWN.to_string(),
            short_file: UNKNOWN.to_string(),
            line: -1,
            func: UNKNOWN.to_string(),
            short_func: UNKNOWN.to_string(),
        }
    }

    /// `<file>:<line> <short_file>`
    pub fn format(&self) -> String {
        format!("{}:{} {}", self.file, self.line, self.short_file)
    }

    /// `<short_file>:<line> <short_func>`
    pub fn format_short(&self) -> String {
        format!("{}:{} {}", self.short_file, self.line, self.short_func)
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_short())
    }
}

/**
Returns the [`Frame`] of the call site `skip` levels above the caller.

`skip = 0` is the immediate caller of `here`, regardless of how many frames
the resolver itself burns internally: the walk discards everything up to
and including the frame carrying [`RESOLVER_SYMBOL`], then counts `skip`
callers from there.  A `skip` beyond the stack depth, or a frame the
symbolizer cannot identify, yields [`Frame::unknown`].  Purely a query; no
side effects.

Symbol names, line numbers and file names require debug info in the
binary; in a stripped release build expect the sentinel even for valid
skips.
*/
#[inline(never)]
pub fn here(skip: usize) -> Frame {
    let mut seen_resolver = false;
    let mut remaining = skip;
    let mut resolved: Option<Frame> = None;

    backtrace::trace(|frame| {
        if !seen_resolver {
            // Still inside the walk's own machinery.  Frames are walked
            // newest-first, so everything before our own symbol belongs to
            // the stack-walking primitive.
            let mut is_resolver = false;
            backtrace::resolve_frame(frame, |symbol| {
                if let Some(name) = symbol.name()
                    && is_resolver_symbol(&name.to_string())
                {
                    is_resolver = true;
                }
            });
            seen_resolver = is_resolver;
            return true;
        }
        if remaining > 0 {
            remaining -= 1;
            return true;
        }
        backtrace::resolve_frame(frame, |symbol| {
            // Inlining can map one physical frame to several symbols; the
            // first is the innermost, which is the one the caller asked for.
            if resolved.is_some() {
                return;
            }
            let func = symbol
                .name()
                .map(|name| name.to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let file = symbol
                .filename()
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let short_file = symbol
                .filename()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let line = symbol.lineno().map(|line| line as i32).unwrap_or(-1);
            let short_func = short_func_name(&func).to_string();
            resolved = Some(Frame {
                file,
                short_file,
                line,
                func,
                short_func,
            });
        });
        false
    });

    resolved.unwrap_or_else(Frame::unknown)
}

// Matches here's own symbol ("teelog::caller::here" with or without the
// compiler's hash suffix) but not the closures instantiated from it, whose
// names carry a "{{closure}}" segment and may be inlined into the walking
// primitive's frames.
fn is_resolver_symbol(name: &str) -> bool {
    match name.strip_prefix(RESOLVER_SYMBOL) {
        Some("") => true,
        Some(rest) => match rest.strip_prefix("::") {
            Some(tail) => is_symbol_hash(tail),
            None => false,
        },
        None => false,
    }
}

/**
Extracts the bare function name from a fully qualified symbol.

`teelog::caller::here` becomes `here`; a trailing disambiguator hash as
emitted by the compiler (`::h` plus 16 hex digits) is stripped first, so
`mycrate::run::ha1b2c3d4e5f60718` also becomes `run`.  An empty input
returns [`UNKNOWN`]; an input without any `::` separator is returned
unchanged.
*/
pub fn short_func_name(full: &str) -> &str {
    if full.is_empty() {
        return UNKNOWN;
    }
    let qualified = match full.rsplit_once("::") {
        Some((rest, last)) if is_symbol_hash(last) => rest,
        _ => full,
    };
    match qualified.rsplit_once("::") {
        Some((_, last)) => last,
        None => qualified,
    }
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}
