//! Console output macros shared by the Context Free crates.
//!
//! Diagnostics always go to stderr so that rendered output written to
//! stdout stays clean.

#[macro_export]
macro_rules! cf_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! cf_eprint {
    ($($arg:tt)*) => {
        eprint!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! cf_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}
