use bitstash_bit_buf::{BitBuffer, Encoding, Error, Result};

fn sample() -> Result<BitBuffer> {
    let mut buf = BitBuffer::new();

    buf.write_uint(32, 150_000)?;
    buf.write_uint(16, 73)?;
    buf.write_f32(61.5);
    buf.write_string("CustomName")?;
    buf.write_bool(true);

    Ok(buf)
}

#[test]
fn every_encoding_round_trips() -> Result<()> {
    let buf = sample()?;

    for encoding in Encoding::ALL {
        let text = buf.to_text(encoding);
        let mut decoded = BitBuffer::from_text(encoding, &text)?;

        assert_eq!(decoded.cursor(), 0);
        assert_eq!(decoded.len(), buf.byte_len() * 8);
        assert_eq!(decoded.to_bytes(), buf.to_bytes());

        assert_eq!(decoded.read_uint(32)?, 150_000);
        assert_eq!(decoded.read_uint(16)?, 73);
        assert_eq!(decoded.read_f32()?, 61.5);
        assert_eq!(decoded.read_utf8()?, "CustomName");
        assert!(decoded.read_bool()?);
    }

    Ok(())
}

#[test]
fn named_constructors() -> Result<()> {
    let buf = sample()?;

    assert_eq!(BitBuffer::from_base64(&buf.to_base64())?.to_bytes(), buf.to_bytes());
    assert_eq!(BitBuffer::from_base91(&buf.to_base91())?.to_bytes(), buf.to_bytes());
    assert_eq!(BitBuffer::from_base128(&buf.to_base128())?.to_bytes(), buf.to_bytes());

    Ok(())
}

#[test]
fn empty_buffer() -> Result<()> {
    let buf = BitBuffer::new();

    assert_eq!(buf.to_base64(), "");
    assert_eq!(buf.to_base91(), "");
    assert_eq!(buf.to_base128(), "");
    assert!(BitBuffer::from_base91("")?.is_empty());

    Ok(())
}

#[test]
fn partial_byte_is_zero_padded() -> Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_uint(3, 0b111)?;

    assert_eq!(buf.to_base64(), "4A==");

    let decoded = BitBuffer::from_base64("4A==")?;
    assert_eq!(decoded.len(), 8);
    assert_eq!(decoded.to_bytes(), [0b1110_0000]);

    Ok(())
}

#[test]
fn malformed_text() {
    assert!(matches!(
        BitBuffer::from_base91("abc def"),
        Err(Error::Decode(..))
    ));
    assert!(matches!(
        BitBuffer::from_base128("\u{e9}"),
        Err(Error::Decode(..))
    ));
    assert!(matches!(
        BitBuffer::from_base64("%%%%"),
        Err(Error::Decode(..))
    ));
}

#[test]
fn base128_output_is_printable() -> Result<()> {
    let mut zeros = BitBuffer::new();
    zeros.write_uint(32, 0)?;
    zeros.write_uint(16, 40)?;

    let mut greeting = BitBuffer::new();
    greeting.write_string("hello")?;

    for buf in [zeros, greeting] {
        let text = buf.to_base128();
        assert!(
            text.chars().all(|c| !c.is_control() && !c.is_whitespace()),
            "{text:?}"
        );
        assert_eq!(text.trim(), text);
        assert_eq!(BitBuffer::from_base128(&text)?.to_bytes(), buf.to_bytes());
    }

    Ok(())
}
