//! Call-site, process and host information for debug events

use backtrace::Backtrace;
use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

/// Frames skipped when the caller's frame cannot be found by location or
/// by symbol: the capture itself and the logger method that requested it.
pub const CALLER_DEPTH: usize = 2;

/// Symbol prefixes of frames that belong to the capture machinery.
const INTERNAL_PREFIXES: [&str; 2] = ["backtrace::", "logharbour::"];

/// Upper bound on frames rendered into a stack trace.
const MAX_STACK_FRAMES: usize = 32;

const UNKNOWN: &str = "unknown";

/// Where a debug event was emitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file_name: String,
    pub line_number: u32,
    pub function_name: String,
    pub stack_trace: String,
}

impl CallSite {
    /// Capture the call site for `location`, which should come from a
    /// `#[track_caller]` chain so it names the logger's caller.
    ///
    /// File and line always come from `location`. The function name and
    /// stack are resolved from a backtrace, starting at the frame that
    /// matches `location`. Without line tables (release builds) the first
    /// frame past the logger's own frames is used.
    pub fn capture(location: &'static Location<'static>) -> Self {
        let bt = Backtrace::new();
        let frames = bt.frames();

        let caller_idx = Self::find_caller(&bt, location)
            .or_else(|| {
                let names: Vec<Option<String>> = frames
                    .iter()
                    .map(|frame| {
                        frame
                            .symbols()
                            .first()
                            .and_then(|symbol| symbol.name())
                            .map(|name| format!("{:#}", name))
                    })
                    .collect();
                first_external_frame(&names)
            })
            .unwrap_or(CALLER_DEPTH);

        let function_name = frames
            .get(caller_idx)
            .and_then(|frame| frame.symbols().first())
            .and_then(|symbol| symbol.name())
            .map(|name| format!("{:#}", name))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let stack_trace = frames
            .iter()
            .skip(caller_idx)
            .take(MAX_STACK_FRAMES)
            .filter_map(|frame| {
                frame.symbols().first().map(|symbol| {
                    let name = symbol
                        .name()
                        .map(|n| format!("{:#}", n))
                        .unwrap_or_else(|| "<unknown>".to_string());
                    match (symbol.filename(), symbol.lineno()) {
                        (Some(f), Some(l)) => format!("{} ({}:{})", name, f.display(), l),
                        (Some(f), None) => format!("{} ({})", name, f.display()),
                        _ => name,
                    }
                })
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            file_name: location.file().to_string(),
            line_number: location.line(),
            function_name,
            stack_trace,
        }
    }

    /// Index of the first frame whose source location is `location`,
    /// falling back to the first frame in the same file.
    fn find_caller(bt: &Backtrace, location: &Location<'_>) -> Option<usize> {
        let caller_file = Path::new(location.file());
        let mut same_file = None;

        for (idx, frame) in bt.frames().iter().enumerate() {
            for symbol in frame.symbols() {
                let Some(file) = symbol.filename() else {
                    continue;
                };
                if !file.ends_with(caller_file) {
                    continue;
                }
                if symbol.lineno() == Some(location.line()) {
                    return Some(idx);
                }
                same_file.get_or_insert(idx);
            }
        }

        same_file
    }
}

/// Index of the first frame after the capture machinery, for builds
/// without line tables. `names` holds each frame's demangled symbol.
fn first_external_frame(names: &[Option<String>]) -> Option<usize> {
    let mut seen_internal = false;
    for (idx, name) in names.iter().enumerate() {
        let Some(name) = name else {
            continue;
        };
        let path = name.trim_start_matches('<');
        if INTERNAL_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
            seen_internal = true;
        } else if seen_internal {
            return Some(idx);
        }
    }
    None
}

/// Current process id.
pub fn process_id() -> u32 {
    std::process::id()
}

/// Identifier of the toolchain the logger was compiled with.
pub fn runtime_version() -> &'static str {
    static RUNTIME: OnceLock<String> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        format!(
            "rustc {} ({}/{})",
            env!("LOGHARBOUR_RUSTC_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    })
}

/// Host name of the machine, resolved once per process.
pub fn system_name() -> &'static str {
    static SYSTEM: OnceLock<String> = OnceLock::new();
    SYSTEM.get_or_init(|| {
        sysinfo::System::host_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string())
    })
}
