//! Laws every public identifier must satisfy.

use std::collections::HashSet;

use chv_id::{
    looks_like_public_id, looks_like_token, CodecConfig, PublicId, PublicIdCodec, RecordKind,
};
use proptest::prelude::*;
use rstest::rstest;

fn codec() -> PublicIdCodec {
    PublicIdCodec::new(&CodecConfig::new("property-salt")).unwrap()
}

fn kind_strategy() -> impl Strategy<Value = RecordKind> {
    prop_oneof![Just(RecordKind::Order), Just(RecordKind::Client)]
}

fn is_canonical(public: &str) -> bool {
    let Some((prefix, token)) = public.split_once('-') else {
        return false;
    };
    matches!(prefix, "ORD" | "CUS")
        && token.len() >= 6
        && token
            .chars()
            .all(|c| (c.is_ascii_uppercase() && c != 'I' && c != 'O') || ('2'..='9').contains(&c))
}

proptest! {
    #[test]
    fn roundtrip(kind in kind_strategy(), id in any::<u64>()) {
        let codec = codec();
        let public = codec.encode(kind, id);
        prop_assert_eq!(codec.decode(kind, &public), Some(id));
    }

    #[test]
    fn format(kind in kind_strategy(), id in any::<u64>()) {
        let public = codec().encode(kind, id);
        prop_assert!(is_canonical(&public), "non-canonical {}", public);
        prop_assert!(public.starts_with(kind.prefix()));
        prop_assert!(looks_like_public_id(&public));
        prop_assert!(looks_like_token(&public));
    }

    #[test]
    fn lowercase_still_decodes(kind in kind_strategy(), id in 0u64..10_000_000) {
        let codec = codec();
        let public = codec.encode(kind, id).to_lowercase();
        prop_assert_eq!(codec.decode(kind, &public), Some(id));
    }

    #[test]
    fn parsed_public_id_decodes(kind in kind_strategy(), id in any::<u64>()) {
        let codec = codec();
        let parsed = PublicId::parse(&codec.encode(kind, id)).unwrap();
        prop_assert_eq!(parsed.kind(), kind);
        prop_assert_eq!(codec.decode_public_id(&parsed), Some(id));
    }

    #[test]
    fn arbitrary_input_never_panics(kind in kind_strategy(), input in ".{0,24}") {
        let codec = codec();
        let _ = codec.decode(kind, &input);
        let _ = codec.decode_any(&input);
        let _ = codec.resolve_lookup(kind, &input);
    }

    #[test]
    fn foreign_prefix_is_rejected(id in any::<u64>()) {
        let codec = codec();
        let order = codec.encode(RecordKind::Order, id);
        prop_assert_eq!(codec.decode(RecordKind::Client, &order), None);
    }
}

#[test]
fn injective_over_sample_range() {
    let codec = codec();
    for kind in RecordKind::ALL {
        let mut seen = HashSet::with_capacity(100_000);
        for id in 0..100_000u64 {
            assert!(
                seen.insert(codec.encode(kind, id)),
                "duplicate {kind} public id for {id}"
            );
        }
    }
}

#[rstest]
#[case("not-a-real-id")]
#[case("")]
#[case("ORD-")]
#[case("CUS-")]
#[case("   ")]
#[case("ORD-ORD-ORD")]
#[case("ORD-\u{1F600}")]
fn malformed_input_is_none(#[case] input: &str) {
    let codec = codec();
    for kind in RecordKind::ALL {
        assert_eq!(codec.decode(kind, input), None, "{kind} decoded {input:?}");
    }
}

#[test]
fn deterministic_under_fixed_config() {
    let config = CodecConfig::new("test-salt");
    let runs: HashSet<String> = (0..5)
        .map(|_| {
            PublicIdCodec::new(&config)
                .unwrap()
                .encode(RecordKind::Order, 101)
        })
        .collect();
    assert_eq!(runs.len(), 1);
    assert!(runs.contains("ORD-JL995L"));
}
