// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`]. With no arguments this is `Ok(())`.
///
/// ```
/// use r3bl_gstring::{GStringResult, ok};
///
/// fn unit() -> GStringResult<()> { ok!() }
/// fn value() -> GStringResult<usize> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop-in replacement for [`assert_eq!`] that prints a colored diff using
/// [`pretty_assertions`] when the two sides differ.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
