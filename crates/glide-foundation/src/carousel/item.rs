/// One card of the carousel. Items are identified by their index in the
/// page's fixed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub title: String,
    pub short_description: String,
    pub icon: String,
    /// Long description, one entry per paragraph.
    pub details: Vec<String>,
}

impl CarouselItem {
    /// Build an item, splitting `long_description` into paragraphs on blank
    /// lines.
    pub fn new(
        title: impl Into<String>,
        short_description: impl Into<String>,
        icon: impl Into<String>,
        long_description: &str,
    ) -> Self {
        Self {
            title: title.into(),
            short_description: short_description.into(),
            icon: icon.into(),
            details: Self::paragraphs(long_description),
        }
    }

    pub fn paragraphs(text: &str) -> Vec<String> {
        text.split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_description_is_split_on_blank_lines() {
        let item = CarouselItem::new(
            "Responsive",
            "Works everywhere.",
            "📱",
            "Mobile first.\n\n  Then larger screens.  \n\n\n\nConsistent everywhere.",
        );
        assert_eq!(
            item.details,
            vec![
                "Mobile first.".to_string(),
                "Then larger screens.".to_string(),
                "Consistent everywhere.".to_string(),
            ]
        );
    }

    #[test]
    fn empty_description_has_no_paragraphs() {
        assert!(CarouselItem::paragraphs("").is_empty());
        assert!(CarouselItem::paragraphs("\n\n  \n\n").is_empty());
    }
}
