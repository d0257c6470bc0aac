//! Freestanding decimal formatting
//!
//! No allocator exists in minnow userspace, so conversions write into a
//! caller-provided fixed buffer and hand back the textual slice.

/// Bytes needed for the decimal digits of `u64::MAX`.
pub const U64_DEC_LEN: usize = 20;

/// Bytes needed for `i64::MIN` including the sign.
pub const I64_DEC_LEN: usize = 21;

/// Format an unsigned value as decimal ASCII, most-significant digit first,
/// with no leading zeros except for the value zero itself.
pub fn u64_to_dec(value: u64, buf: &mut [u8; U64_DEC_LEN]) -> &str {
    let mut pos = buf.len();
    if value == 0 {
        pos -= 1;
        buf[pos] = b'0';
    } else {
        let mut v = value;
        while v > 0 {
            pos -= 1;
            buf[pos] = b'0' + (v % 10) as u8;
            v /= 10;
        }
    }
    // SAFETY: the slice holds only ASCII digits.
    unsafe { core::str::from_utf8_unchecked(&buf[pos..]) }
}

/// Signed variant of [`u64_to_dec`]. `unsigned_abs` keeps `i64::MIN` exact.
pub fn i64_to_dec(value: i64, buf: &mut [u8; I64_DEC_LEN]) -> &str {
    let mut pos = buf.len();
    let mut v = value.unsigned_abs();
    if v == 0 {
        pos -= 1;
        buf[pos] = b'0';
    } else {
        while v > 0 {
            pos -= 1;
            buf[pos] = b'0' + (v % 10) as u8;
            v /= 10;
        }
        if value < 0 {
            pos -= 1;
            buf[pos] = b'-';
        }
    }
    // SAFETY: the slice holds only ASCII digits and an optional sign.
    unsafe { core::str::from_utf8_unchecked(&buf[pos..]) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_u(value: u64) -> String {
        let mut buf = [0u8; U64_DEC_LEN];
        u64_to_dec(value, &mut buf).to_string()
    }

    fn fmt_i(value: i64) -> String {
        let mut buf = [0u8; I64_DEC_LEN];
        i64_to_dec(value, &mut buf).to_string()
    }

    #[test]
    fn unsigned_boundaries() {
        assert_eq!(fmt_u(0), "0");
        assert_eq!(fmt_u(1), "1");
        assert_eq!(fmt_u(9), "9");
        assert_eq!(fmt_u(10), "10");
        assert_eq!(fmt_u(42), "42");
        assert_eq!(fmt_u(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn no_leading_zeros() {
        assert_eq!(fmt_u(1000), "1000");
        assert_eq!(fmt_u(100_000_007), "100000007");
    }

    #[test]
    fn signed_boundaries() {
        assert_eq!(fmt_i(0), "0");
        assert_eq!(fmt_i(1), "1");
        assert_eq!(fmt_i(-1), "-1");
        assert_eq!(fmt_i(i64::MAX), "9223372036854775807");
        assert_eq!(fmt_i(i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn matches_core_formatting() {
        for v in [0u64, 7, 66, 38804, 123456789, u64::MAX / 3] {
            assert_eq!(fmt_u(v), v.to_string());
        }
        for v in [-42i64, -38804, i64::MIN / 7] {
            assert_eq!(fmt_i(v), v.to_string());
        }
    }
}
