//! Store versioned rows in a sorted map and scan them newest-first.
//!
//! Run with: `cargo run -p lexicode --example composite-keys`

use std::collections::BTreeMap;

use lexicode::codec::{I64Lexicoder, StringLexicoder};
use lexicode::typed::EntryCodec;
use lexicode::{pair, reverse};

fn main() {
    let codec = EntryCodec::new(
        pair(StringLexicoder, reverse(I64Lexicoder::new())),
        StringLexicoder,
    );

    let mut store = BTreeMap::new();
    for (row, version, body) in [
        ("doc-1", 1, "draft"),
        ("doc-2", 1, "hello"),
        ("doc-1", 3, "final"),
        ("doc-1", 2, "review"),
    ] {
        let (key, value) = codec.encode_entry(&(row.to_string(), version), &body.to_string());
        store.insert(key, value);
    }

    for entry in codec.entries::<_, (String, i64), String>(&store) {
        match entry {
            Ok(entry) => {
                let (row, version) = entry.key;
                println!("{row} v{version}: {}", entry.value);
            }
            Err(err) => eprintln!("skipping entry: {err}"),
        }
    }
}
