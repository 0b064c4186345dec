/*!
## Rust Terminal Module

Runs a VSTACK source file against the console. `read` takes lines
from the line editor on a terminal, or plain standard input when
piped. Ctrl-C stops a running program with BREAK.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{self, Error, Scan};
use crate::mach::{Event, Runtime};
use crate::error;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{BufRead, ErrorKind, IsTerminal, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Instructions run between two checks for Ctrl-C.
const SLICE: usize = 5000;

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print the constant, name and vector tables.
    pub tables: bool,
    /// Print the lexeme listing.
    pub lexemes: bool,
    /// Run the program rebuilt from lexemes instead of the source text.
    pub from_lexemes: bool,
    /// Print the stack and variables when the program stops.
    pub dump: bool,
}

/// Returns `false` when anything failed along the way.
pub fn main(path: &Path, options: &Options) -> bool {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("no Ctrl-C handler: {}", e);
    }
    let styles = Styles::new();
    match main_loop(path, options, interrupted, &styles) {
        Ok(success) => success,
        Err(error) => {
            eprintln!("{}", styles.error.paint(error.to_string()));
            false
        }
    }
}

fn main_loop(
    path: &Path,
    options: &Options,
    interrupted: Arc<AtomicBool>,
    styles: &Styles,
) -> Result<bool, Error> {
    let source = load(path)?;
    let scan = lang::lex(&source);
    info!(file = %path.display(), lexemes = scan.lexemes.len(), "scanned");
    if options.tables {
        print!("{}", tables(&scan, styles));
    }
    if options.lexemes {
        print!("{}", lexemes(&scan, styles));
    }
    let mut success = !scan.has_errors();
    for error in scan.errors() {
        eprintln!("{}", styles.error.paint(error.to_string()));
    }
    let lines = if options.from_lexemes {
        match lang::program_from_lexemes(&scan) {
            Ok(lines) => lines,
            Err(errors) => {
                // Scan errors were printed above.
                if success {
                    for error in errors {
                        eprintln!("{}", styles.error.paint(error.to_string()));
                    }
                }
                return Ok(false);
            }
        }
    } else {
        lang::program_lines(&source)
    };
    let mut runtime = Runtime::from_scan(&lines, &scan);
    let mut console = Console::new().map_err(io_error)?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(s.as_bytes()).map_err(io_error)?;
                stdout.flush().map_err(io_error)?;
            }
            Event::Input => match console.read_line().map_err(io_error)? {
                Some(line) => runtime.enter(&line),
                None => runtime.interrupt(),
            },
            Event::Errors(errors) => {
                for error in errors.iter() {
                    eprintln!("{}", styles.error.paint(error.to_string()));
                }
                success = false;
            }
        }
    }
    if options.dump {
        print!("{}", dump(&runtime, styles));
    }
    Ok(success)
}

struct Styles {
    error: Style,
    heading: Style,
}

impl Styles {
    fn new() -> Styles {
        if std::io::stdout().is_terminal() {
            Styles {
                error: Style::new().bold(),
                heading: Style::new().bold(),
            }
        } else {
            Styles {
                error: Style::new(),
                heading: Style::new(),
            }
        }
    }
}

/// Source of `read` lines.
enum Console {
    Editor(Interface<DefaultTerminal>),
    Piped,
}

impl Console {
    fn new() -> std::io::Result<Console> {
        if !std::io::stdin().is_terminal() {
            return Ok(Console::Piped);
        }
        let interface = Interface::new("vstack")?;
        interface.set_prompt("? ")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console::Editor(interface))
    }

    /// `None` on end of input or Ctrl-C.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        match self {
            Console::Editor(interface) => match interface.read_line()? {
                ReadResult::Input(s) => {
                    interface.add_history_unique(s.clone());
                    Ok(Some(s))
                }
                ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
            },
            Console::Piped => {
                let mut s = String::new();
                if std::io::stdin().lock().read_line(&mut s)? == 0 {
                    debug!("input closed");
                    return Ok(None);
                }
                Ok(Some(s))
            }
        }
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}

fn load(path: &Path) -> Result<String, Error> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(InternalError; format!("{}: {}", path.display(), error)));
    }
    Ok(source)
}

/// Constant, name and vector tables as printed by `--tables`.
fn tables(scan: &Scan, styles: &Styles) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n", styles.heading.paint("CONSTANTS")));
    for (index, value) in scan.constants.iter().enumerate() {
        s.push_str(&format!("{:>6}  {}\n", index, value));
    }
    s.push_str(&format!("{}\n", styles.heading.paint("NAMES")));
    for (index, name) in scan.names.iter() {
        s.push_str(&format!("{:>6}  {}\n", index, name));
    }
    s.push_str(&format!("{}\n", styles.heading.paint("VECTORS")));
    for (index, vector) in scan.vectors.iter().enumerate() {
        let values: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
        s.push_str(&format!("{:>6}  << {} >>\n", index, values.join(", ")));
    }
    s
}

/// One lexeme per row: line, class, class code, value, description.
fn lexemes(scan: &Scan, styles: &Styles) -> String {
    let mut s = format!(
        "{}\n",
        styles
            .heading
            .paint(format!("{:>5}  {:<14}{:>6}{:>12}  {}", "LINE", "CLASS", "CODE", "VALUE", "TEXT"))
    );
    for lexeme in &scan.lexemes {
        s.push_str(&format!(
            "{:>5}  {:<14}{:>6}{:>12}  {}\n",
            lexeme.line,
            format!("{:?}", lexeme.class),
            lexeme.class.code(),
            lexeme.value,
            scan.describe(lexeme)
        ));
    }
    s
}

fn dump(runtime: &Runtime, styles: &Styles) -> String {
    let mut s = format!("{}\n", styles.heading.paint("STACK"));
    s.push_str(&runtime.stack().to_string());
    s.push_str(&format!("{}\n", styles.heading.paint("VARIABLES")));
    s.push_str(&runtime.vars().to_string());
    s
}
