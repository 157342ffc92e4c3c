/*!

A low level reader for the campaign archives and scenario files of
[Age of Empires II](https://en.wikipedia.org/wiki/Age_of_Empires_II) and the
other titles built on the Genie engine, along with a reconstructor that turns a
decoded scenario's triggers back into a typed model and into a Python program
for the [AoE2ScenarioParser](https://github.com/KSneijders/AoE2ScenarioParser)
library.

## Features

- ✔ Two archive layouts: directory header and headerless heuristic scan
- ✔ Bounds checked: every length and offset is validated before use
- ✔ Auditable: unknown codes are kept and reported, never silently dropped
- ✔ Deterministic: the same model always renders to the same bytes

## Extracting a Campaign

```rust
use rge::campaign::{CampaignArchive, CampaignFormat};

let data = b"1.54\0\0\0\0first1.36\0\0\0\0second";
let archive = CampaignArchive::from_slice(&data[..])?;
assert_eq!(archive.format(), CampaignFormat::HeuristicScan);

let names: Vec<_> = archive.entries().iter().map(|x| x.filename()).collect();
assert_eq!(names, vec!["scenario_1.aoe2scenario", "scenario_2.aoe2scenario"]);

let lengths: usize = archive.entries().iter().map(|x| x.size() as usize).sum();
assert_eq!(lengths, data.len());
# Ok::<(), rge::Error>(())
```

Writing the entries to disk is done with
[`CampaignArchive::extract`](campaign::CampaignArchive::extract). A failed
entry does not stop the remaining entries from being written.

## Reconstructing Triggers

Decoding a scenario body is the job of the scenario editing library. Its
output is consumed through the [`ScenarioHandle`](scenario::ScenarioHandle)
trait, and the [reconstructor](reconstruct::reconstruct) resolves each
condition and effect record into an operation that holds only the arguments
meaningful for it.

```rust
use rge::reconstruct::{reconstruct, Step};
use rge::scenario::{RawCondition, RawTrigger, ScenarioDump};
use rge::triggers::{ConditionKind, Param};

let mut trigger = RawTrigger::new("Kill the king");
trigger.conditions.push(RawCondition {
    unit_object: 7,
    timer: 30,
    ..RawCondition::new(6)
});

let model = reconstruct(&ScenarioDump {
    map_size: 120,
    units: Vec::new(),
    triggers: vec![trigger],
});

let Step::Op(destroy) = &model.triggers()[0].conditions[0] else {
    panic!("expected a known condition");
};
assert_eq!(destroy.kind(), ConditionKind::DestroyObject);

// the timer slot is leftover storage for this condition and the unset player
// is omitted
assert_eq!(destroy.args().len(), 1);
assert!(destroy.arg(Param::SourcePlayer).is_none());
```

## Caveats

Caller is responsible for:

- Decompressing scenario bodies (only the uncompressed prefix is read here)
- Supplying a decoded scenario through [`ScenarioHandle`](scenario::ScenarioHandle)

*/

pub mod campaign;
pub mod emit;
mod errors;
pub mod objects;
mod reader;
pub mod reconstruct;
pub mod scenario;
pub mod triggers;
pub(crate) mod util;

pub use self::errors::*;
pub use self::reader::*;
