//! End-to-end behaviour of the results table on disk.

use playlog_core::error::PlaylogError;
use playlog_core::{DEFAULT_HEADER, Row, SortSpec, TableStore};
use proptest::prelude::*;
use tempfile::tempdir;

fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

fn rendered(store: &TableStore, sort: &SortSpec) -> String {
    let mut out = Vec::new();
    store.render_to(&mut out, sort).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn example_row_renders_padded_to_column_widths() {
    let dir = tempdir().unwrap();
    let mut store = TableStore::load(dir.path().join("results.csv")).unwrap();
    store
        .append(row(&[
            "24.01.01", "10", "Yes", "A", "B", "None", "0", "None", "Hard", "60", "No", "No",
        ]))
        .unwrap();

    let text = rendered(&store, &SortSpec::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);

    // Only "Date" is widened by its cell; every other header is the longest.
    let mut widths: Vec<usize> = DEFAULT_HEADER.iter().map(|h| h.chars().count()).collect();
    widths[0] = "24.01.01".len();
    let border: String = std::iter::once("+".to_string())
        .chain(widths.iter().map(|w| format!("{}+", "-".repeat(*w))))
        .collect();
    assert_eq!(lines[0], border);
    assert_eq!(lines[4], border);
    assert_eq!(lines[2], border.replace('+', "|"));
    assert_eq!(
        lines[1],
        "|Date    |Points|Victory|Kristina's Spirit|Omri's spirit|Adversary|Adv. Level|Scenario|Difficulty|Time|Branch and Claw|Jagged Earth|"
    );
    assert_eq!(
        lines[3],
        "|24.01.01|10    |Yes    |A                |B            |None     |0         |None    |Hard      |60  |No             |No          |"
    );
}

#[test]
fn rendering_does_not_reorder_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "Name,Score\nb,2\na,1\n").unwrap();
    let store = TableStore::load(&path).unwrap();

    let sort = SortSpec::by("Name");
    let first = rendered(&store, &sort);
    assert_eq!(first, rendered(&store, &sort));
    assert!(first.find("|a   |").unwrap() < first.find("|b   |").unwrap());
    assert_eq!(store.rows()[0], row(&["b", "2"]));
}

#[test]
fn unwritable_destination_is_a_file_access_error() {
    let dir = tempdir().unwrap();
    let store = TableStore::load(dir.path().join("results.csv")).unwrap();
    let err = store
        .save(Some(dir.path().join("missing").join("out.csv").as_path()))
        .unwrap_err();
    assert!(matches!(err, PlaylogError::FileAccess { .. }));
}

#[test]
fn existing_header_is_trusted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, "Spirit #1,Spirit #2\r\nRiver,Earth\r\n").unwrap();
    let store = TableStore::load(&path).unwrap();
    assert_eq!(store.header(), row(&["Spirit #1", "Spirit #2"]));
    assert_eq!(store.len(), 1);
}

fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,'\"]{0,8}"
}

fn table(cols: usize) -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::collection::vec(cell(), cols), 0..12)
}

proptest! {
    #[test]
    fn save_then_load_preserves_rows(rows in table(3)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "A,B,C\n").unwrap();
        let mut store = TableStore::load(&path).unwrap();
        for r in &rows {
            store.append(r.clone()).unwrap();
        }
        store.save(None).unwrap();

        let reloaded = TableStore::load(&path).unwrap();
        prop_assert_eq!(reloaded.header(), store.header());
        prop_assert_eq!(reloaded.rows(), &rows[..]);
    }

    #[test]
    fn sorting_is_stable(keys in prop::collection::vec(0u8..3, 0..20), descending: bool) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "Key,Seq\n").unwrap();
        let mut store = TableStore::load(&path).unwrap();
        for (seq, k) in keys.iter().enumerate() {
            store.append(vec![k.to_string(), format!("{seq:03}")]).unwrap();
        }

        let mut sort = SortSpec::by("Key");
        sort.descending = descending;
        let sorted = store.sorted_rows(&sort).unwrap();
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a[0] == b[0] {
                prop_assert!(a[1] < b[1], "equal keys out of input order");
            } else if descending {
                prop_assert!(a[0] > b[0]);
            } else {
                prop_assert!(a[0] < b[0]);
            }
        }
    }
}
