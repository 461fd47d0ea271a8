//! ANSI color printing helpers.
//!
//! Tagged status lines (`[SUCCESS]`, `[ERROR]`, `[DEBUG]`, `[WARNING]`), bold
//! color output with printf-style templates, and `safe` variants that never
//! interpret `%` in their text.

pub mod config;
pub mod template;
pub mod tui;
pub mod util;

mod macros;

pub use template::{Arg, FormatError, expand};
pub use tui::colors;
pub use tui::printer::{
    PrintError, Printer, Stream, Tag, print_blue, print_cyan, print_debug, print_error,
    print_green, print_magenta, print_red, print_safe, print_safe_colored, print_success,
    print_warning, print_yellow, write_safe, write_safe_colored,
};
