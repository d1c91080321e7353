use bitstash_text::{base128, base91, DecodeError, Encoding};
use proptest::prelude::*;

fn patterns(len: usize) -> Vec<Vec<u8>> {
    vec![
        vec![0x00; len],
        vec![0xFF; len],
        vec![0x55; len],
        (0..len).map(|i| i as u8).collect(),
        (0..len).map(|i| (i * 151 + 7) as u8).collect(),
    ]
}

#[test]
fn empty_payloads() {
    for encoding in Encoding::ALL {
        assert_eq!(encoding.encode(&[]), "");
        assert_eq!(encoding.decode("").unwrap(), Vec::<u8>::new());
    }
}

#[test]
fn every_remainder() {
    // Covers every number of bits left in the accumulators before the
    // final flush, for both the 13-bit and 14-bit branches of basE91.
    for len in 0..=64 {
        for data in patterns(len) {
            for encoding in Encoding::ALL {
                let text = encoding.encode(&data);
                assert_eq!(
                    encoding.decode(&text).unwrap(),
                    data,
                    "{} failed for {data:02X?}",
                    encoding.name()
                );
            }
        }
    }
}

#[test]
fn every_byte_pair() {
    for hi in 0..=u8::MAX {
        for lo in 0..=u8::MAX {
            let data = [hi, lo, hi ^ lo];
            assert_eq!(base91::decode(&base91::encode(&data)).unwrap(), data);
        }
    }
}

#[test]
fn known_base64() {
    assert_eq!(Encoding::Base64.encode(b"foobar"), "Zm9vYmFy");
    assert_eq!(Encoding::Base64.encode(b"fooba"), "Zm9vYmE=");
    assert_eq!(Encoding::Base64.decode("Zm8=").unwrap(), b"fo");
}

#[test]
fn known_base91() {
    assert_eq!(base91::encode(b"test"), "fPNKd");
    assert_eq!(base91::decode("fPNKd").unwrap(), b"test");
    assert_eq!(base91::encode(&[0]), "AA");
}

#[test]
fn base91_is_denser_than_base64() {
    let data: Vec<u8> = (0..=u8::MAX).cycle().take(4096).collect();

    let b64 = Encoding::Base64.encode(&data).len();
    let b91 = Encoding::Base91.encode(&data).len();
    assert!(b91 < b64, "{b91} >= {b64}");
}

#[test]
fn streaming_matches_one_shot() {
    let data: Vec<u8> = (0..200u8).map(|i| i.wrapping_mul(37)).collect();

    let mut text = String::new();
    let mut encoder = base91::Encoder::new();
    for chunk in data.chunks(7) {
        encoder.feed_slice(chunk, &mut text);
    }
    encoder.finish(&mut text);
    assert_eq!(text, base91::encode(&data));

    let mut out = Vec::new();
    let mut decoder = base91::Decoder::new();
    for c in text.chars() {
        decoder.feed(c, &mut out).unwrap();
    }
    decoder.finish(&mut out);
    assert_eq!(out, data);
}

#[test]
fn rejects_foreign_characters() {
    assert_eq!(
        base91::decode("fP NKd"),
        Err(DecodeError::InvalidCharacter {
            character: ' ',
            position: 2
        })
    );
    assert_eq!(
        base91::decode("fP'"),
        Err(DecodeError::InvalidCharacter {
            character: '\'',
            position: 2
        })
    );
    assert_eq!(
        base128::decode("ab\u{80}"),
        Err(DecodeError::InvalidCharacter {
            character: '\u{80}',
            position: 2
        })
    );
    assert_eq!(
        Encoding::Base64.decode("Zm9v!mFy"),
        Err(DecodeError::InvalidCharacter {
            character: '!',
            position: 4
        })
    );
    // Positions count characters, not UTF-8 bytes.
    assert_eq!(
        Encoding::Base64.decode("éAAAAAA"),
        Err(DecodeError::InvalidCharacter {
            character: 'é',
            position: 0
        })
    );
    assert_eq!(
        Encoding::Base64.decode("Zm9vYéA"),
        Err(DecodeError::InvalidCharacter {
            character: 'é',
            position: 5
        })
    );
    assert!(Encoding::Base64.decode("Zm9").is_err());
}

#[test]
fn base128_rejects_non_canonical_input() {
    let text = base128::encode(&[0xFF]);
    let mut chars: Vec<char> = text.chars().collect();

    chars.truncate(1);
    let short: String = chars.iter().collect();
    assert_eq!(
        base128::decode(&short),
        Err(DecodeError::InvalidLength { len: 1 })
    );

    chars.push(base128::ALPHABET[0x7F]);
    let padded: String = chars.iter().collect();
    assert_eq!(
        base128::decode(&padded),
        Err(DecodeError::TrailingBits { position: 1 })
    );
}

proptest! {
    #[test]
    fn arbitrary_payloads(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        for encoding in Encoding::ALL {
            let text = encoding.encode(&data);
            prop_assert_eq!(encoding.decode(&text).unwrap(), data.clone());
        }
    }

    #[test]
    fn base128_stays_printable(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let text = base128::encode(&data);
        prop_assert!(text.chars().all(|c| base128::ALPHABET.contains(&c)));
        prop_assert!(text.chars().all(|c| !c.is_control() && !c.is_whitespace()));
        prop_assert_eq!(text.chars().count(), base128::encoded_len(data.len()));
    }

    #[test]
    fn base91_stays_in_alphabet(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let text = base91::encode(&data);
        prop_assert!(text.bytes().all(|c| base91::ALPHABET.contains(&c)));
        prop_assert!(text.len() <= base91::encoded_len_hint(data.len()));
    }
}
