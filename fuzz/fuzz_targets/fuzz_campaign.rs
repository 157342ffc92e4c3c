#![no_main]
use rge::campaign::{CampaignArchive, CampaignFormat};
use rge::scenario::ScenarioHeader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for format in [CampaignFormat::HeuristicScan, CampaignFormat::DirectoryHeader] {
        let Ok(archive) = CampaignArchive::parse(data, format) else {
            continue;
        };

        let mut total = 0;
        for i in 0..archive.entries().len() {
            // Declared ranges may be garbage but slicing must never panic
            if let Ok(entry) = archive.entry_data(i) {
                total += entry.len();
                let _ = ScenarioHeader::from_slice(entry);
            }
        }

        if format == CampaignFormat::HeuristicScan {
            let start = archive.entries().first().map_or(data.len(), |x| x.offset() as usize);
            assert_eq!(total, data.len() - start);
        }
    }
});
