/// Builds a [`Document`](crate::Document) from section and key literals.
///
/// Values may be any `Display` type. The macro evaluates to
/// [`Result<Document>`](crate::Result) because section and key names are validated.
///
/// # Examples
///
/// ```rust
/// use ini_document::ini;
///
/// let doc = ini! {
///     "Server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "Empty" => {},
/// }
/// .unwrap();
///
/// assert_eq!(doc.get("server", "port"), Some("8080"));
/// assert!(doc.section("Empty").unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        ::std::result::Result::<$crate::Document, $crate::Error>::Ok($crate::Document::new())
    };

    ($($section:expr => { $($key:expr => $value:expr),* $(,)? }),+ $(,)?) => {{
        (|| -> $crate::Result<$crate::Document> {
            let mut document = $crate::Document::new();
            $(
                #[allow(unused_variables)]
                let section = document.add_section($section)?;
                $(
                    section.set_value($key, $value)?;
                )*
            )+
            Ok(document)
        })()
    }};
}
