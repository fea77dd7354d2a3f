mod prop_tests {
    use crate::{
        Locale, encode_entities, scan_quotes, stage::encode_entities::ENTITIES, to_html,
        to_unicode,
    };
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn typograph_is_deterministic(s in ".{0,300}") {
            prop_assert_eq!(to_unicode(&s), to_unicode(&s));
            prop_assert_eq!(to_html(&s), to_html(&s));
        }

        #[test]
        fn no_straight_quotes_survive(s in "[a-zа-я \"'.,!?()\\-]{0,200}") {
            let out = to_unicode(&s);
            prop_assert!(!out.contains(['"', '\'']), "left a straight quote in {out:?}");
        }

        #[test]
        fn depth_is_bounded_by_quote_count(s in "[a-z \"'.,()]{0,200}") {
            for locale in crate::all_locales() {
                let scan = scan_quotes(&s, locale.glyphs());
                prop_assert!(scan.depth <= s.matches('"').count());
            }
        }

        #[test]
        fn balanced_quotes_return_to_baseline(
            words in prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}"), 1..12)
        ) {
            let text = words
                .iter()
                .map(|(plain, quoted)| format!("{plain} \"{quoted}\""))
                .collect::<Vec<_>>()
                .join(" ");
            for locale in [Locale::En, Locale::Ru] {
                prop_assert_eq!(scan_quotes(&text, locale.glyphs()).depth, 0);
            }
        }

        #[test]
        fn entity_encoding_is_idempotent(s in "[«»„“”’—–\u{00A0}a-z &;#0-9]{0,200}") {
            let once = encode_entities(&s).into_owned();
            let twice = encode_entities(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn html_output_has_no_encodable_code_points(s in "\\PC{0,200}") {
            let out = to_html(&s);
            prop_assert!(out.chars().all(|c| !ENTITIES.contains_key(&c)));
        }

        #[test]
        fn latin_text_never_gains_russian_glyphs(s in "[a-zA-Z0-9 \"'.,-]{0,200}") {
            let out = to_unicode(&s);
            prop_assert!(!out.contains(['«', '»', '„']));
        }
    }
}
