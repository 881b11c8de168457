//! Configuration options for page extraction.
//!
//! The `Options` struct holds the string-splitting conventions the extractors
//! apply to raw text. The defaults match the page layout this crate targets.

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use product_page_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.title_separator, '—');
///
/// // Customize specific fields
/// let options = Options {
///     title_separator: '|',
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Separator between the page name and the site suffix in `<title>` and
    /// `og:title`. Only the segment before the first separator is kept.
    ///
    /// Default: `'—'` (em dash)
    pub title_separator: char,

    /// Separator between entries of the `keywords` meta tag.
    ///
    /// Default: `','`
    pub keyword_separator: char,

    /// Tag name of the heading that wraps the product description title.
    ///
    /// Its attributes are stripped from the returned description markup.
    ///
    /// Default: `"h3"`
    pub description_heading: String,

    /// Separator used in raw review dates.
    ///
    /// Default: `'/'`
    pub date_separator: char,

    /// Replacement for `date_separator` in normalized review dates.
    ///
    /// Default: `'.'`
    pub date_replacement: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            title_separator: '—',
            keyword_separator: ',',
            description_heading: "h3".to_string(),
            date_separator: '/',
            date_replacement: '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();

        assert_eq!(options.title_separator, '—');
        assert_eq!(options.keyword_separator, ',');
        assert_eq!(options.description_heading, "h3");
        assert_eq!(options.date_separator, '/');
        assert_eq!(options.date_replacement, '.');
    }

    #[test]
    fn test_struct_update_syntax() {
        let options = Options {
            date_replacement: '-',
            ..Options::default()
        };

        assert_eq!(options.date_replacement, '-');
        assert_eq!(options.title_separator, '—');
    }
}
