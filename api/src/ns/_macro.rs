/// Create a "namespace module"
/// defining a set of IRI constants within a given IRI space.
///
/// # Tests
/// This macro also creates a test module to check that all created IRIs are valid.
///
/// This allows to skip those checks at runtime,
/// so these constants can be turned into terms with
/// [`Term::iri_unchecked`](crate::term::Term::iri_unchecked).
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $r_id: &str = concat!($iri_prefix, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}
