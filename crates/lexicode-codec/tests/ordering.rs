use std::cmp::Ordering;

use lexicode_codec::{
    list, pair, reverse, BigIntLexicoder, DoubleLexicoder, I32Lexicoder, I64Lexicoder, Lexicoder,
    StringLexicoder, U32Lexicoder, U64Lexicoder,
};
use num_bigint::BigInt;
use proptest::prelude::*;

fn assert_order<T, L>(codec: &L, a: &T, b: &T, expected: Ordering) -> Result<(), TestCaseError>
where
    L: Lexicoder<T>,
{
    prop_assert_eq!(codec.encode(a).cmp(&codec.encode(b)), expected);
    Ok(())
}

fn big_ints() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        any::<i64>().prop_map(BigInt::from),
        any::<i128>().prop_map(BigInt::from),
        (any::<i128>(), any::<u64>(), any::<bool>()).prop_map(|(hi, lo, neg)| {
            let value = (BigInt::from(hi) << 64u32) + BigInt::from(lo);
            if neg { -value } else { value }
        }),
    ]
}

proptest! {
    #[test]
    fn i32_order_and_roundtrip(a: i32, b: i32) {
        let codec = I32Lexicoder::new();
        assert_order(&codec, &a, &b, a.cmp(&b))?;
        prop_assert_eq!(codec.decode(&codec.encode(&a)).unwrap(), a);
    }

    #[test]
    fn i64_order_and_roundtrip(a: i64, b: i64) {
        let codec = I64Lexicoder::new();
        assert_order(&codec, &a, &b, a.cmp(&b))?;
        prop_assert_eq!(codec.decode(&codec.encode(&a)).unwrap(), a);
    }

    #[test]
    fn unsigned_order(a: u32, b: u32, c: u64, d: u64) {
        assert_order(&U32Lexicoder, &a, &b, a.cmp(&b))?;
        assert_order(&U64Lexicoder, &c, &d, c.cmp(&d))?;
    }

    #[test]
    fn double_order_and_roundtrip(
        a in any::<f64>().prop_filter("not NaN", |v| !v.is_nan()),
        b in any::<f64>().prop_filter("not NaN", |v| !v.is_nan()),
    ) {
        let codec = DoubleLexicoder::new();
        assert_order(&codec, &a, &b, a.total_cmp(&b))?;
        prop_assert_eq!(codec.decode(&codec.encode(&a)).unwrap().to_bits(), a.to_bits());
    }

    #[test]
    fn bigint_order_and_roundtrip(a in big_ints(), b in big_ints()) {
        let codec = BigIntLexicoder::new();
        assert_order(&codec, &a, &b, a.cmp(&b))?;
        prop_assert_eq!(codec.decode(&codec.encode(&a)).unwrap(), a);
    }

    #[test]
    fn reverse_inverts_order(a in ".{0,8}", b in ".{0,8}") {
        let codec = reverse(StringLexicoder);
        assert_order(&codec, &a, &b, b.cmp(&a))?;
        let decoded: String = codec.decode(&codec.encode(&a)).unwrap();
        prop_assert_eq!(decoded, a);
    }

    #[test]
    fn reverse_bigint_inverts_order(a in big_ints(), b in big_ints()) {
        let codec = reverse(BigIntLexicoder::new());
        assert_order(&codec, &a, &b, b.cmp(&a))?;
    }

    #[test]
    fn pair_is_tuple_ordered(a: (String, i64), b: (String, i64)) {
        let codec = pair(StringLexicoder, I64Lexicoder::new());
        assert_order(&codec, &a, &b, a.cmp(&b))?;
        let decoded: (String, i64) = codec.decode(&codec.encode(&a)).unwrap();
        prop_assert_eq!(decoded, a);
    }

    #[test]
    fn list_is_tuple_ordered(
        a in prop::collection::vec(any::<i32>(), 0..6),
        b in prop::collection::vec(any::<i32>(), 0..6),
    ) {
        let codec = list(I32Lexicoder::new());
        assert_order(&codec, &a, &b, a.cmp(&b))?;
        let decoded: Vec<i32> = codec.decode(&codec.encode(&a)).unwrap();
        prop_assert_eq!(decoded, a);
    }

    #[test]
    fn list_prefix_sorts_first(
        head in prop::collection::vec(any::<i32>(), 0..4),
        tail in prop::collection::vec(any::<i32>(), 1..4),
    ) {
        let codec = list(I32Lexicoder::new());
        let mut longer = head.clone();
        longer.extend(tail);
        prop_assert!(codec.encode(&head) < codec.encode(&longer));
    }

    #[test]
    fn nested_composites_roundtrip(
        value in prop::collection::vec((".{0,4}", any::<i32>()), 0..4),
    ) {
        let codec = list(pair(reverse(StringLexicoder), reverse(I32Lexicoder::new())));
        let decoded: Vec<(String, i32)> = codec.decode(&codec.encode(&value)).unwrap();
        prop_assert_eq!(decoded, value);
    }
}
