use crate::{
    campaign::ScenarioEntry,
    util::{get_split, is_version_marker},
    Error, ErrorKind,
};

/// Locate the start of every scenario stream in an archive without a
/// directory.
///
/// Every byte offset is considered, so overlapping candidates are all
/// examined. A candidate is a version marker (`D.DD`) and is only confirmed
/// when the following 4 bytes are null. Confirmed offsets are returned in
/// ascending order.
///
/// ```rust
/// use rge::campaign::scan_offsets;
/// let data = b"xx1.54\0\0\0\0abc1.2\0\0\0\0\x001.36\0\0\0\0";
/// assert_eq!(scan_offsets(data), vec![2, 21]);
/// ```
pub fn scan_offsets(data: &[u8]) -> Vec<usize> {
    data.windows(8)
        .enumerate()
        .filter_map(|(offset, window)| {
            let (marker, trailer) = get_split::<4>(window)?;
            let confirmed = is_version_marker(&marker) && trailer.iter().all(|&b| b == 0);
            confirmed.then_some(offset)
        })
        .collect()
}

/// Convert confirmed offsets into entries where each entry runs until the
/// next offset and the last entry absorbs the rest of the buffer.
pub(crate) fn scan_entries(data: &[u8]) -> Result<Vec<ScenarioEntry>, Error> {
    let len = u32::try_from(data.len())
        .map_err(|_| Error::new(ErrorKind::ArchiveTooLarge { len: data.len() }))?;

    let offsets = scan_offsets(data);
    log::debug!("confirmed {} scenario offsets: {:x?}", offsets.len(), offsets);

    let entries = offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            // offsets never exceed a length that fits in u32
            let start = start as u32;
            let end = offsets.get(i + 1).map_or(len, |&next| next as u32);
            ScenarioEntry::synthesized(i, start, end - start)
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_single_scenario_spans_buffer() {
        let data = b"1.54\0\0\0\0";
        assert_eq!(scan_offsets(data), vec![0]);

        let entries = scan_entries(data).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].offset(), 0);
        assert_eq!(entries[0].size(), 8);
    }

    #[test]
    fn test_marker_without_trailer_is_rejected() {
        // The second marker is cut off before its four null bytes
        let data = b"1.54\0\0\0\0payload1.36\0\0";
        assert_eq!(scan_offsets(data), vec![0]);
    }

    #[test]
    fn test_marker_with_nonzero_trailer_is_rejected() {
        let data = b"1.54\0\0\x01\0";
        assert!(scan_offsets(data).is_empty());
    }

    #[test]
    fn test_no_scenarios_is_empty() {
        assert!(scan_entries(b"").unwrap().is_empty());
        assert!(scan_entries(b"nothing here at all").unwrap().is_empty());
    }

    #[test]
    fn test_entries_are_contiguous() {
        let mut data = b"1.54\0\0\0\0".to_vec();
        data.extend_from_slice(&[0xaa; 13]);
        data.extend_from_slice(b"1.36\0\0\0\0");
        data.extend_from_slice(&[0xbb; 5]);

        let entries = scan_entries(&data).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].offset(), entries[0].size()), (0, 21));
        assert_eq!((entries[1].offset(), entries[1].size()), (21, 13));
        assert_eq!(entries[1].filename(), "scenario_2.aoe2scenario");
    }

    #[quickcheck]
    fn scan_lengths_cover_tail(data: Vec<u8>) -> bool {
        let entries = scan_entries(&data).unwrap();
        let total: usize = entries.iter().map(|e| e.size() as usize).sum();
        match entries.first() {
            Some(first) => total == data.len() - first.offset() as usize,
            None => total == 0,
        }
    }

    #[quickcheck]
    fn scan_lengths_cover_buffer_starting_with_marker(tail: Vec<u8>) -> bool {
        let mut data = b"1.54\0\0\0\0".to_vec();
        data.extend_from_slice(&tail);
        let entries = scan_entries(&data).unwrap();
        let total: usize = entries.iter().map(|e| e.size() as usize).sum();
        total == data.len()
    }
}
