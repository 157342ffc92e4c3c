#[inline]
pub(crate) fn get_split<const N: usize>(data: &[u8]) -> Option<([u8; N], &[u8])> {
    data.split_first_chunk::<N>().map(|(head, rest)| (*head, rest))
}

/// Returns true if the 4 bytes form a scenario version string such as `1.54`:
/// a digit, a period, and two more digits.
#[inline]
pub(crate) const fn is_version_marker(data: &[u8; 4]) -> bool {
    data[0].is_ascii_digit()
        && data[1] == b'.'
        && data[2].is_ascii_digit()
        && data[3].is_ascii_digit()
}

/// Decode bytes as UTF-8, replacing invalid sequences
#[inline]
pub(crate) fn lossy(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
