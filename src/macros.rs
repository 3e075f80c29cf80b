#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, buckets: $buckets:expr)?
        , extract: |$words:ident, $ctx:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            buckets: { 0 $(| $buckets)? },
            extract: Box::new(
                move |$words: &[$crate::Token], $ctx: &$crate::Context| -> Option<$crate::PartialMatch> { $body },
            ),
        }
    }};
}
