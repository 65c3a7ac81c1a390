use crate::parsers::extract_meta_property;
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};

fn attr(key: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(key)),
        value: StrTendril::from_slice(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_property_and_content() {
        let attrs = vec![attr("property", "og:image"), attr("content", "I")];
        assert_eq!(
            extract_meta_property(&attrs, "og:image"),
            ("I".to_string(), true)
        );
    }

    #[test]
    fn test_content_before_property() {
        let attrs = vec![attr("content", "I"), attr("property", "og:image")];
        assert_eq!(
            extract_meta_property(&attrs, "og:image"),
            ("I".to_string(), true)
        );
    }

    #[test]
    fn test_other_property_does_not_match() {
        let attrs = vec![attr("property", "og:title"), attr("content", "T")];
        let (content, matched) = extract_meta_property(&attrs, "og:image");
        assert!(!matched);
        // content is still reported, callers only look at it when matched
        assert_eq!(content, "T");
    }

    #[test]
    fn test_matched_without_content() {
        let attrs = vec![attr("property", "og:video")];
        assert_eq!(
            extract_meta_property(&attrs, "og:video"),
            (String::new(), true)
        );
    }

    #[test]
    fn test_name_attribute_is_not_property() {
        let attrs = vec![attr("name", "description"), attr("content", "D")];
        let (_, matched) = extract_meta_property(&attrs, "description");
        assert!(!matched);
    }
}
