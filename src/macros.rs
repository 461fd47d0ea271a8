//! printf-style macros over the process streams.
//!
//! ```no_run
//! termtint::print_success!("Processed %d items.\n", 10);
//! termtint::print_red!("Critical error detected!\n");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __tint_call {
    ($func:ident, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::$func($template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Bold-green `[SUCCESS]` tag, then the expanded template, on stdout.
#[macro_export]
macro_rules! print_success {
    ($($t:tt)*) => { $crate::__tint_call!(print_success, $($t)*) };
}

/// Bold-red `[ERROR]` tag, then the expanded template, on stderr.
#[macro_export]
macro_rules! print_error {
    ($($t:tt)*) => { $crate::__tint_call!(print_error, $($t)*) };
}

/// Bold-yellow `[DEBUG]` tag, then the expanded template, on stderr.
#[macro_export]
macro_rules! print_debug {
    ($($t:tt)*) => { $crate::__tint_call!(print_debug, $($t)*) };
}

/// Bold-magenta `[WARNING]` tag, then the expanded template, on stderr.
#[macro_export]
macro_rules! print_warning {
    ($($t:tt)*) => { $crate::__tint_call!(print_warning, $($t)*) };
}

#[macro_export]
macro_rules! print_yellow {
    ($($t:tt)*) => { $crate::__tint_call!(print_yellow, $($t)*) };
}

#[macro_export]
macro_rules! print_red {
    ($($t:tt)*) => { $crate::__tint_call!(print_red, $($t)*) };
}

#[macro_export]
macro_rules! print_green {
    ($($t:tt)*) => { $crate::__tint_call!(print_green, $($t)*) };
}

#[macro_export]
macro_rules! print_blue {
    ($($t:tt)*) => { $crate::__tint_call!(print_blue, $($t)*) };
}

#[macro_export]
macro_rules! print_cyan {
    ($($t:tt)*) => { $crate::__tint_call!(print_cyan, $($t)*) };
}

#[macro_export]
macro_rules! print_magenta {
    ($($t:tt)*) => { $crate::__tint_call!(print_magenta, $($t)*) };
}
