//! Property-based tests for detection and rendering invariants.

use proptest::prelude::*;

use arcdump::{DetectedFileType, Payload, detect, render};

proptest! {
    /// Detection is a pure function of the suffix: directory components
    /// never change the result.
    #[test]
    fn detect_ignores_directory_components(
        dirs in proptest::collection::vec("[a-zA-Z0-9_ .-]{1,12}", 0..4),
        stem in "[a-zA-Z0-9_-]{1,12}",
        suffix in "[a-zA-Z0-9]{0,6}",
    ) {
        let bare = if suffix.is_empty() {
            stem.clone()
        } else {
            format!("{}.{}", stem, suffix)
        };
        let mut nested = dirs.join("/");
        if !nested.is_empty() {
            nested.push('/');
        }
        nested.push_str(&bare);

        prop_assert_eq!(detect(&nested), detect(&bare));
    }

    /// Detection is case-insensitive in the suffix.
    #[test]
    fn detect_case_insensitive(suffix_upper in "(JSON|XML|ZIP|7Z|TBX|MSD|RLTX|PY|RC|PKINFO)") {
        let upper = format!("file.{}", suffix_upper);
        let lower = upper.to_lowercase();
        prop_assert_eq!(detect(&upper), detect(&lower));
        prop_assert!(detect(&lower).is_some());
    }

    /// Binary declared types always round-trip bytes exactly, with no
    /// decode attempt.
    #[test]
    fn binary_types_round_trip_bytes(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        for file_type in DetectedFileType::ALL {
            if !file_type.is_binary() {
                continue;
            }
            let entry = render(&raw, None, Some(file_type)).unwrap();
            prop_assert_eq!(&entry.payload, &Payload::Binary(raw.clone()));
            prop_assert_eq!(entry.fence, "");
        }
    }

    /// Rendering valid JSON is idempotent: the normalized form is a fixed
    /// point.
    #[test]
    fn json_rendering_idempotent(key in "[a-z]{1,8}", value in any::<i64>()) {
        let raw = format!("{{\"{}\":{}}}", key, value);
        let once = render(raw.as_bytes(), None, Some(DetectedFileType::Json)).unwrap();
        prop_assert!(matches!(once.payload, Payload::Text(_)));
        let text = match &once.payload {
            Payload::Text(text) => text.clone(),
            Payload::Binary(_) => unreachable!(),
        };
        let twice = render(text.as_bytes(), None, Some(DetectedFileType::Json)).unwrap();
        prop_assert_eq!(&once.payload, &twice.payload);
    }
}
