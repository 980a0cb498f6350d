use lsl_core::EVENT_CATALOG;

use crate::EventsArgs;

pub(crate) fn run_events(args: EventsArgs) -> i32 {
    if args.json {
        println!(
            "{}",
            serde_json::to_string(&EVENT_CATALOG[..]).expect("catalog json")
        );
        return 0;
    }

    for signature in EVENT_CATALOG.iter() {
        println!("{}", signature.display());
    }
    0
}
