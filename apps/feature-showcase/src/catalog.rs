use glide_foundation::CarouselItem;

/// The features presented by the showcase carousel, in display order.
pub fn features() -> Vec<CarouselItem> {
    vec![
        CarouselItem::new(
            "Minimal Design",
            "Clean aesthetics that put your content in the spotlight.",
            "✨",
            "Our minimal design philosophy is centered around the principle that less is more. \
             We strip away unnecessary elements to create clean, focused interfaces that \
             highlight what truly matters.\n\n\
             By embracing white space, thoughtful typography, and purposeful imagery, we create \
             designs that are not only visually appealing but also highly functional and \
             user-friendly.\n\n\
             This approach ensures your content takes center stage, allowing your message to \
             resonate with your audience without distraction.",
        ),
        CarouselItem::new(
            "Responsive",
            "Flawless experiences across all devices and screen sizes.",
            "📱",
            "In today's multi-device world, responsive design isn't just a feature, it's \
             essential. Our responsive approach ensures your digital presence adapts seamlessly \
             to any screen size or device.\n\n\
             We build with a mobile-first mindset, then progressively enhance the experience for \
             larger screens. This ensures optimal performance and usability regardless of how \
             users access your content.\n\n\
             From smartphones and tablets to desktops and beyond, your audience will enjoy a \
             consistent, intuitive experience that maintains your brand's integrity across all \
             touchpoints.",
        ),
        CarouselItem::new(
            "Fast Performance",
            "Lightning-quick load times for smooth user interactions.",
            "⚡",
            "Speed is a critical factor in user experience and search engine rankings. Our \
             performance-optimized designs load quickly and respond instantly to user \
             interactions.\n\n\
             We achieve this through efficient code, optimized assets, and strategic \
             implementation of modern web technologies. We regularly test and refine our work \
             to ensure it meets the highest performance standards.\n\n\
             The result is a snappy, responsive experience that keeps users engaged and reduces \
             bounce rates, ultimately driving better conversion and retention metrics for your \
             business.",
        ),
        CarouselItem::new(
            "Accessibility",
            "Inclusive design practices for all users.",
            "🌈",
            "We believe the web should be accessible to everyone. Our designs adhere to WCAG \
             guidelines and best practices to ensure users with disabilities can navigate and \
             interact with your content effectively.\n\n\
             From proper color contrast and keyboard navigation to screen reader compatibility \
             and semantic HTML, we build with accessibility in mind from the ground up.\n\n\
             This inclusive approach not only broadens your audience but also demonstrates your \
             commitment to serving all users equally.",
        ),
        CarouselItem::new(
            "SEO Optimized",
            "Built to help your site rank higher in search results.",
            "🔍",
            "Visibility in search engines is crucial for digital success. Our SEO-optimized \
             approach ensures your content is structured and delivered in ways that search \
             engines can easily understand and index.\n\n\
             We implement proper semantic markup, optimized metadata, and performance \
             enhancements that contribute to better search rankings. We also ensure your site's \
             technical foundation supports your broader SEO strategy.\n\n\
             This attention to SEO fundamentals helps drive organic traffic to your site, \
             reducing your reliance on paid acquisition channels.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_features_with_three_paragraphs_each() {
        let features = features();
        assert_eq!(features.len(), 5);
        for feature in &features {
            assert_eq!(feature.details.len(), 3, "{}", feature.title);
            assert!(!feature.icon.is_empty());
        }
        assert_eq!(features[3].title, "Accessibility");
    }
}
