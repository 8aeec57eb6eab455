//! The [`validator!`] macro for declaring primitive constraints.
//!
//! Every primitive in [`validators`](crate::validators) is a small struct
//! implementing [`Validate`](crate::foundation::Validate) plus a factory
//! function. The macro writes both from a `rule` (the pass condition) and an
//! `error` (the violation built when the rule fails).
//!
//! # Forms
//!
//! Unit constraint:
//!
//! ```
//! use isomsg_validator::foundation::{Validate, ValidationError};
//!
//! isomsg_validator::validator! {
//!     /// Upper-case ASCII only.
//!     pub UpperAscii for str;
//!     rule(input) { input.bytes().all(|b| b.is_ascii_uppercase()) }
//!     error(input) { ValidationError::pattern("^[A-Z]*$") }
//!     fn upper_ascii();
//! }
//!
//! assert!(upper_ascii().validate("EUR").is_ok());
//! assert!(upper_ascii().validate("eur").is_err());
//! ```
//!
//! Constraint with parameters; `new` takes every field in order unless a
//! `new(..) { .. }` body is given:
//!
//! ```rust,ignore
//! validator! {
//!     pub Length { min: usize, max: usize, mode: LengthMode } for str;
//!     rule(self, input) { ... }
//!     error(self, input) { ... }
//!     new(min: usize, max: usize) { Self { min, max, mode: LengthMode::Chars } }
//!     fn length(min: usize, max: usize);
//! }
//! ```
//!
//! A fallible constructor names its error type after `->`, and the factory
//! then returns `Result`:
//!
//! ```rust,ignore
//! validator! {
//!     pub Pattern { regex: regex::Regex } for str;
//!     rule(self, input) { self.regex.is_match(input) }
//!     error(self, input) { ValidationError::pattern(self.regex.as_str().to_owned()) }
//!     new(pattern: &str) -> regex::Error { Ok(Self { regex: regex::Regex::new(pattern)? }) }
//!     fn pattern(pattern: &str) -> regex::Error;
//! }
//! ```

/// Declares a primitive constraint: struct, `Validate` impl, constructor
/// and factory function. See the [module docs](crate::macros) for the forms.
///
/// `Debug` and `Clone` are always derived; add more with `#[derive(...)]`.
#[macro_export]
macro_rules! validator {
    // ── unit ───────────────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@validate $name, $input, self, $inp, $rule, $einp, $err);

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── fields, explicit constructor ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@validate $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── fields, fallible constructor ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@validate $name, $input, $self_, $inp, $rule, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── fields, constructor over every field ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@validate $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── internal ───────────────────────────────────────────────────────────
    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    (@validate $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
