use rge::campaign::{
    ArchiveWarning, CampaignArchive, CampaignFormat, ExtractOptions, STRING_TAG,
};
use rge::scenario::ScenarioHeader;
use rge::ErrorKind;

struct Record<'a> {
    size: u32,
    offset: u32,
    name: &'a str,
    filename: &'a str,
}

fn directory_header(name: &str, count: u32, records: &[Record]) -> Vec<u8> {
    let mut out = b"2.00".to_vec();
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    let mut field = [0u8; 256];
    field[..name.len()].copy_from_slice(name.as_bytes());
    out.extend_from_slice(&field);
    out.extend_from_slice(&count.to_le_bytes());
    for record in records {
        out.extend_from_slice(&record.size.to_le_bytes());
        out.extend_from_slice(&record.offset.to_le_bytes());
        for s in [record.name, record.filename] {
            out.extend_from_slice(&STRING_TAG.to_le_bytes());
            out.extend_from_slice(&(s.len() as u16).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
    }
    out
}

/// A directory archive whose scenarios follow the header back to back
fn directory_archive(scenarios: &[(&str, &[u8])]) -> Vec<u8> {
    let names: Vec<_> = scenarios
        .iter()
        .map(|(name, _)| format!("{}.aoe2scenario", name))
        .collect();

    let layout = |offsets: &[u32]| -> Vec<u8> {
        let records: Vec<_> = scenarios
            .iter()
            .zip(offsets)
            .zip(&names)
            .map(|(((name, data), offset), filename)| Record {
                size: data.len() as u32,
                offset: *offset,
                name,
                filename,
            })
            .collect();
        directory_header("Test Campaign", scenarios.len() as u32, &records)
    };

    let header_len = layout(&vec![0; scenarios.len()][..]).len() as u32;
    let mut offsets = Vec::new();
    let mut next = header_len;
    for (_, data) in scenarios {
        offsets.push(next);
        next += data.len() as u32;
    }

    let mut out = layout(&offsets[..]);
    for (_, data) in scenarios {
        out.extend_from_slice(data);
    }
    out
}

#[test]
fn test_single_scenario_scan() {
    let data = b"1.54\x00\x00\x00\x001.36\x00\x00\x00\x00";
    let data = &data[..8];
    let archive = CampaignArchive::from_slice(data).unwrap();
    assert_eq!(archive.format(), CampaignFormat::HeuristicScan);
    assert_eq!(archive.entries().len(), 1);
    assert_eq!(archive.entries()[0].offset(), 0);
    assert_eq!(archive.entries()[0].size(), 8);
    assert_eq!(archive.entry_data(0).unwrap(), data);
}

#[test]
fn test_scan_covers_whole_buffer() {
    let mut data = Vec::new();
    for (version, body) in [(b"1.54", 100), (b"1.47", 3), (b"1.36", 250)] {
        data.extend_from_slice(version);
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend(std::iter::repeat(0x7f).take(body));
    }

    let archive = CampaignArchive::from_slice(&data).unwrap();
    let sizes: Vec<_> = archive.entries().iter().map(|x| x.size()).collect();
    assert_eq!(sizes, vec![108, 11, 258]);
    assert_eq!(sizes.iter().sum::<u32>() as usize, data.len());

    let versions: Vec<_> = (0..3)
        .map(|i| ScenarioHeader::from_slice(archive.entry_data(i).unwrap()).unwrap().version())
        .collect();
    assert_eq!(versions, vec!["1.54", "1.47", "1.36"]);
}

#[test]
fn test_scan_without_scenarios_is_empty() {
    let archive = CampaignArchive::from_slice(b"not a campaign at all").unwrap();
    assert!(archive.entries().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let report = archive
        .extract(&ExtractOptions::new(dir.path().join("out")))
        .unwrap();
    assert!(report.outcomes().is_empty());
    assert!(report.is_success());
}

#[test]
fn test_directory_exact_sizes() {
    let first = b"1.54\x00\x00\x00\x00first scenario".as_slice();
    let second = b"1.54\x00\x00\x00\x00second".as_slice();
    let data = directory_archive(&[("cam1", first), ("cam2", second)]);

    let archive = CampaignArchive::from_slice(&data).unwrap();
    assert_eq!(archive.format(), CampaignFormat::DirectoryHeader);
    assert_eq!(archive.version(), "2.00");
    assert_eq!(archive.name(), Some("Test Campaign"));
    assert_eq!(archive.dependencies(), &[2]);
    assert!(archive.warnings().is_empty());

    let entries = archive.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), "cam1");
    assert_eq!(entries[1].filename(), "cam2.aoe2scenario");
    assert_eq!(archive.entry_data(0).unwrap(), first);
    assert_eq!(archive.entry_data(1).unwrap(), second);
}

#[test]
fn test_directory_missing_record_is_fatal() {
    let data = directory_header(
        "Short",
        2,
        &[Record {
            size: 8,
            offset: 0,
            name: "one",
            filename: "one.aoe2scenario",
        }],
    );

    let err = CampaignArchive::from_slice(&data).unwrap_err();
    assert!(err.is_structural());
    assert!(matches!(err.kind(), ErrorKind::Eof { .. }));
}

#[test]
fn test_directory_tag_mismatch_is_recoverable() {
    let mut data = directory_archive(&[("cam1", b"1.54\x00\x00\x00\x00".as_slice())]);

    // first string tag sits after version, deps, name, count, size, offset
    let tag_at = 4 + 4 + 4 + 256 + 4 + 8;
    data[tag_at..tag_at + 2].copy_from_slice(&0x1234u16.to_le_bytes());

    let archive = CampaignArchive::from_slice(&data).unwrap();
    assert_eq!(archive.entries().len(), 1);
    assert_eq!(
        archive.warnings(),
        &[ArchiveWarning::TagMismatch {
            entry: 0,
            offset: tag_at,
            found: 0x1234
        }]
    );
}

#[test]
fn test_extract_continues_past_bad_entry() {
    let scenario = b"1.54\x00\x00\x00\x00payload".as_slice();
    let mut data = directory_header(
        "Mixed",
        2,
        &[
            Record {
                size: 1000,
                offset: 0,
                name: "broken",
                filename: "broken.aoe2scenario",
            },
            Record {
                size: scenario.len() as u32,
                offset: 0,
                name: "good",
                filename: "good.aoe2scenario",
            },
        ],
    );

    // point the good record at the scenario appended after the header
    let good_offset = data.len() as u32;
    let second_record = data.len()
        - (4 + 4 + 2 + 2 + "good".len() + 2 + 2 + "good.aoe2scenario".len());
    data[second_record + 4..second_record + 8].copy_from_slice(&good_offset.to_le_bytes());
    data.extend_from_slice(scenario);

    let archive = CampaignArchive::from_slice(&data).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let report = archive.extract(&ExtractOptions::new(dir.path())).unwrap();

    assert_eq!(report.failures(), 1);
    let failure = &report.outcomes()[0];
    assert!(matches!(
        failure.result.as_ref().unwrap_err().kind(),
        ErrorKind::EntryOutOfBounds { index: 0, .. }
    ));

    let written: Vec<_> = report.written().collect();
    assert_eq!(written, vec![dir.path().join("good.aoe2scenario")]);
    assert_eq!(std::fs::read(&written[0]).unwrap(), scenario);
    assert!(!dir.path().join("broken.aoe2scenario").exists());
}

#[test]
fn test_extract_respects_overwrite() {
    let data = b"1.54\x00\x00\x00\x00new".to_vec();
    let archive = CampaignArchive::from_slice(&data).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("scenario_1.aoe2scenario");
    std::fs::write(&existing, b"old").unwrap();

    let keep = ExtractOptions::new(dir.path()).overwrite(false);
    let report = archive.extract(&keep).unwrap();
    assert!(!report.is_success());
    assert_eq!(std::fs::read(&existing).unwrap(), b"old");

    let replace = ExtractOptions::new(dir.path());
    let report = archive.extract(&replace).unwrap();
    assert!(report.is_success());
    assert_eq!(std::fs::read(&existing).unwrap(), data);
}

#[test]
fn test_forced_format() {
    let data = directory_archive(&[("cam1", b"1.54\x00\x00\x00\x00body".as_slice())]);
    let archive = CampaignArchive::parse(&data, CampaignFormat::HeuristicScan).unwrap();
    assert_eq!(archive.format(), CampaignFormat::HeuristicScan);
    assert_eq!(archive.entries().len(), 1);
    assert_eq!(archive.entries()[0].filename(), "scenario_1.aoe2scenario");
}

#[test]
fn test_extract_keeps_entries_with_colliding_names() {
    let first = b"1.54\x00\x00\x00\x00first act".as_slice();
    let second = b"1.54\x00\x00\x00\x00second act".as_slice();
    let header = |offsets: [u32; 2]| {
        directory_header(
            "Acts",
            2,
            &[
                Record {
                    size: first.len() as u32,
                    offset: offsets[0],
                    name: "one",
                    filename: "act1/x.aoe2scenario",
                },
                Record {
                    size: second.len() as u32,
                    offset: offsets[1],
                    name: "two",
                    filename: "act2/x.aoe2scenario",
                },
            ],
        )
    };

    let start = header([0, 0]).len() as u32;
    let mut data = header([start, start + first.len() as u32]);
    data.extend_from_slice(first);
    data.extend_from_slice(second);

    let archive = CampaignArchive::from_slice(&data).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let report = archive.extract(&ExtractOptions::new(dir.path())).unwrap();
    assert!(report.is_success());

    let written: Vec<_> = report.written().collect();
    assert_eq!(
        written,
        vec![
            dir.path().join("x.aoe2scenario"),
            dir.path().join("scenario_2.aoe2scenario"),
        ]
    );
    assert_eq!(std::fs::read(written[0]).unwrap(), first);
    assert_eq!(std::fs::read(written[1]).unwrap(), second);
}
