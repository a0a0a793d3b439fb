use sinkhole_dns_domain::header::{Header, HEADER_LEN, RESPONSE_FLAGS};

#[test]
fn test_decode_short_buffers_yield_zero_header() {
    let bytes = [0xFFu8; HEADER_LEN];
    for len in 0..HEADER_LEN {
        let header = Header::decode(&bytes[..len]);
        assert_eq!(header, Header::default(), "length {} should decode to zero", len);
        assert!(header.is_empty());
    }
}

#[test]
fn test_decode_big_endian_fields() {
    let bytes = [
        0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04,
    ];
    let header = Header::decode(&bytes);

    assert_eq!(header.id, 0x1234);
    assert_eq!(header.flags, 0x0100);
    assert_eq!(header.qd_count, 1);
    assert_eq!(header.an_count, 2);
    assert_eq!(header.ns_count, 3);
    assert_eq!(header.ar_count, 4);
    assert!(!header.is_empty());
}

#[test]
fn test_decode_ignores_bytes_after_header() {
    let mut bytes = vec![0xAB, 0xCD, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0];
    bytes.extend_from_slice(&[0xFF; 20]);
    let header = Header::decode(&bytes);
    assert_eq!(header.id, 0xABCD);
    assert_eq!(header.qd_count, 1);
}

#[test]
fn test_id_round_trip() {
    for id in [0u16, 1, 0x00FF, 0xBEEF, u16::MAX] {
        let header = Header {
            id,
            ..Header::default()
        };
        let mut out = [0u8; HEADER_LEN];
        header.encode(&mut out);
        assert_eq!(Header::decode(&out).id, id);
    }
}

#[test]
fn test_encode_writes_at_offset_zero() {
    let header = Header {
        id: 0x0102,
        flags: 0x0304,
        qd_count: 0x0506,
        an_count: 0x0708,
        ns_count: 0x090A,
        ar_count: 0x0B0C,
    };
    let mut out = [0xEEu8; 16];
    header.encode(&mut out);

    assert_eq!(&out[..12], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(&out[12..], &[0xEE; 4]);
}

#[test]
fn test_encode_into_short_buffer_is_noop() {
    let header = Header {
        id: 7,
        ..Header::default()
    };
    let mut out = [0xEEu8; 8];
    header.encode(&mut out);
    assert_eq!(out, [0xEE; 8]);
}

#[test]
fn test_response_header_forces_flags_and_counts() {
    let request = Header {
        id: 0xCAFE,
        flags: 0x0900,
        qd_count: 3,
        an_count: 5,
        ns_count: 1,
        ar_count: 1,
    };

    let answered = Header::response_to(&request, true);
    assert_eq!(answered.id, 0xCAFE);
    assert_eq!(answered.flags, RESPONSE_FLAGS);
    assert_eq!(answered.qd_count, 1);
    assert_eq!(answered.an_count, 1);
    assert_eq!(answered.ns_count, 0);
    assert_eq!(answered.ar_count, 0);

    let unanswered = Header::response_to(&request, false);
    assert_eq!(unanswered.an_count, 0);
}

#[test]
fn test_response_flag_bits() {
    let header = Header {
        flags: RESPONSE_FLAGS,
        ..Header::default()
    };
    assert_eq!(header.to_bytes()[2..4], [0x81, 0x80]);
    assert!(header.is_response());
    assert!(header.recursion_desired());
    assert!(header.recursion_available());
    assert!(!header.is_authoritative());
    assert!(!header.is_truncated());
    assert_eq!(header.opcode(), 0);
    assert_eq!(header.rcode(), 0);
}

#[test]
fn test_flag_accessors_on_arbitrary_flags() {
    // QR=0, opcode=2, AA=1, TC=1, RD=0, RA=0, RCODE=3
    let header = Header {
        flags: 0b0_0010_1_1_0_0_000_0011,
        ..Header::default()
    };
    assert!(!header.is_response());
    assert_eq!(header.opcode(), 2);
    assert!(header.is_authoritative());
    assert!(header.is_truncated());
    assert!(!header.recursion_desired());
    assert!(!header.recursion_available());
    assert_eq!(header.rcode(), 3);
}
