//! Unit tests for bd-cabin.
//!
//! All tests build small hand-written layouts.

#[cfg(test)]
mod helpers {
    use crate::{Aircraft, LayoutSpec, build_aircraft};

    /// Two rows of `AB | CD`.
    ///
    /// Cell ids:
    ///   0: gate
    ///   row 1: 1A=1  1B=2  aisle=3  1C=4  1D=5
    ///   row 2: 2A=6  2B=7  aisle=8  2C=9  2D=10
    pub fn two_by_four() -> Aircraft {
        build_aircraft(&LayoutSpec::single_aisle(2, 2)).unwrap()
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod labels {
    use crate::{Column, SeatLabel};

    #[test]
    fn display_and_parse() {
        let label = SeatLabel::new(14, Column(2));
        assert_eq!(label.to_string(), "14C");
        assert_eq!("14C".parse::<SeatLabel>().unwrap(), label);
        assert_eq!(SeatLabel::parse(" 14C "), Some(label));
    }

    #[test]
    fn malformed_identifiers() {
        for bad in ["", "C14", "14", "14c", "14CD", "1-A", "A", "99999999999A"] {
            assert!(SeatLabel::parse(bad).is_none(), "{bad:?} should not parse");
        }
        assert!("C14".parse::<SeatLabel>().is_err());
    }

    #[test]
    fn column_letters() {
        assert_eq!(Column(0).letter(), 'A');
        assert_eq!(Column(25).letter(), 'Z');
        assert_eq!(Column::from_letter('D'), Some(Column(3)));
        assert_eq!(Column::from_letter('d'), None);
    }
}

// ── Builder & grid structure ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use bd_core::{CellId, Direction, GridPos};

    use crate::{CabinError, CellKind, Column, LayoutSpec, build_aircraft};

    #[test]
    fn single_aisle_counts() {
        let a = super::helpers::two_by_four();
        assert_eq!(a.cell_count(), 11);
        assert_eq!(a.seat_count(), 8);
        assert_eq!(a.rows().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(a.column_count(), 4);
        assert_eq!(a.cell(a.gate()).kind, CellKind::Gate);
    }

    #[test]
    fn seats_in_enumeration_order() {
        let a = super::helpers::two_by_four();
        let labels: Vec<String> = a
            .seats()
            .iter()
            .map(|&s| a.seat_label(s).unwrap().to_string())
            .collect();
        assert_eq!(labels, ["1A", "1B", "1C", "1D", "2A", "2B", "2C", "2D"]);
    }

    #[test]
    fn aisle_chain_runs_front_to_back() {
        let a = super::helpers::two_by_four();
        assert_eq!(a.neighbor(a.gate(), Direction::Forward), Some(CellId(3)));
        assert_eq!(a.neighbor(CellId(3), Direction::Forward), Some(CellId(8)));
        assert_eq!(a.neighbor(CellId(8), Direction::Forward), None);
        assert_eq!(a.neighbor(CellId(8), Direction::Backward), Some(CellId(3)));
        assert_eq!(a.neighbor(CellId(3), Direction::Backward), Some(a.gate()));
    }

    #[test]
    fn gate_aligned_with_aisle() {
        let a = super::helpers::two_by_four();
        assert_eq!(a.cell(a.gate()).pos, GridPos::new(0, 2));
        assert_eq!(a.cell(CellId(3)).pos, GridPos::new(1, 2));
    }

    #[test]
    fn lateral_links_are_paired() {
        let a = super::helpers::two_by_four();
        for i in 0..a.cell_count() as u32 {
            let id = CellId(i);
            for dir in Direction::ALL {
                if let Some(n) = a.neighbor(id, dir) {
                    assert_eq!(a.neighbor(n, dir.opposite()), Some(id), "{id} {dir}");
                }
            }
        }
        // Aisle of row 1 sits between 1B and 1C.
        assert_eq!(a.neighbor(CellId(3), Direction::LateralA), Some(CellId(2)));
        assert_eq!(a.neighbor(CellId(3), Direction::LateralB), Some(CellId(4)));
        assert_eq!(a.neighbor(CellId(1), Direction::LateralA), None);
    }

    #[test]
    fn blocked_column_consumes_letter_and_is_bridged() {
        let a = build_aircraft(&LayoutSpec::new().rows(1, "S+ASS")).unwrap();
        assert!(a.find_seat(1, Column(1)).is_none());
        let seat_a = a.find_seat(1, Column(0)).unwrap();
        let seat_c = a.find_seat(1, Column(2)).unwrap();
        let aisle = a.neighbor(a.gate(), Direction::Forward).unwrap();
        assert_eq!(a.neighbor(aisle, Direction::LateralA), Some(seat_a));
        assert_eq!(a.neighbor(aisle, Direction::LateralB), Some(seat_c));
        assert_eq!(a.seat_count(), 3);
    }

    #[test]
    fn ignored_characters_create_nothing() {
        let a = build_aircraft(&LayoutSpec::new().rows(1, "S.A_S")).unwrap();
        assert_eq!(a.cell_count(), 4);
        let aisle = a.neighbor(a.gate(), Direction::Forward).unwrap();
        assert_eq!(a.neighbor(aisle, Direction::LateralB), a.find_seat_by_id("1B"));
    }

    #[test]
    fn row_numbers_continue_across_groups() {
        let spec = LayoutSpec::new().rows(2, "SAS").rows(3, "SSASS");
        let a = build_aircraft(&spec).unwrap();
        assert_eq!(spec.row_count(), 5);
        assert_eq!(a.row_count(), 5);
        assert!(a.find_seat_by_id("5D").is_some());
        assert!(a.find_seat_by_id("2C").is_none());
    }

    #[test]
    fn too_many_columns_rejected() {
        let spec = LayoutSpec::new().rows(1, format!("A{}", "S".repeat(27)));
        assert!(matches!(
            build_aircraft(&spec),
            Err(CabinError::TooManyColumns { row: 1, .. })
        ));
    }

    #[test]
    fn extent_covers_all_cells() {
        let a = super::helpers::two_by_four();
        let (min, max) = a.extent();
        assert_eq!(min, GridPos::new(0, 0));
        assert_eq!(max, GridPos::new(2, 4));
    }
}

// ── Seat lookup ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use crate::Column;

    #[test]
    fn find_by_row_and_column() {
        let a = super::helpers::two_by_four();
        let s = a.find_seat(2, Column(2)).unwrap();
        assert_eq!(a.seat_label(s).unwrap().to_string(), "2C");
        assert_eq!(a.find_seat_by_id("2C"), Some(s));
    }

    #[test]
    fn not_found_signals() {
        let a = super::helpers::two_by_four();
        assert_eq!(a.find_seat(3, Column(0)), None);
        assert_eq!(a.find_seat_by_id("1E"), None);
        assert_eq!(a.find_seat_by_id("garbage"), None);
        assert_eq!(a.find_seat_by_id(""), None);
    }
}

// ── Connectivity ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod connectivity {
    use crate::{LayoutSpec, build_aircraft};

    #[test]
    fn generated_layouts_are_connected() {
        for rows in 1..6 {
            for side in 1..4 {
                let a = build_aircraft(&LayoutSpec::single_aisle(rows, side)).unwrap();
                assert!(a.unreachable_seats().is_empty(), "rows={rows} side={side}");
            }
        }
    }

    #[test]
    fn no_aisle_means_nothing_reachable() {
        let a = build_aircraft(&LayoutSpec::new().rows(2, "SS")).unwrap();
        assert_eq!(a.unreachable_seats().len(), 4);
    }

    #[test]
    fn row_without_aisle_is_cut_off() {
        let spec = LayoutSpec::new().rows(1, "SAS").rows(1, "SS").rows(1, "SAS");
        let a = build_aircraft(&spec).unwrap();
        let unreachable: Vec<String> = a
            .unreachable_seats()
            .into_iter()
            .map(|s| a.seat_label(s).unwrap().to_string())
            .collect();
        assert_eq!(unreachable, ["2A", "2B"]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{CabinError, LayoutSpec, build_aircraft, load_layout_csv, load_layout_reader};

    const CSV: &str = "\
repeat,pattern
# business
2, SS.A.SS
1,S+.A.SS
3,SSS.A.SSS
";

    #[test]
    fn parses_groups() {
        let spec = load_layout_reader(Cursor::new(CSV)).unwrap();
        let expected = LayoutSpec::new()
            .rows(2, "SS.A.SS")
            .rows(1, "S+.A.SS")
            .rows(3, "SSS.A.SSS");
        assert_eq!(spec, expected);
        let a = build_aircraft(&spec).unwrap();
        assert_eq!(a.seat_count(), 2 * 4 + 3 + 3 * 6);
    }

    #[test]
    fn bad_repeat_is_a_parse_error() {
        let r = load_layout_reader(Cursor::new("repeat,pattern\nmany,SAS\n"));
        assert!(matches!(r, Err(CabinError::Parse(_))));
    }

    #[test]
    fn empty_file_is_rejected() {
        let r = load_layout_reader(Cursor::new("repeat,pattern\n"));
        assert!(matches!(r, Err(CabinError::Parse(_))));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let spec = load_layout_csv(file.path()).unwrap();
        assert_eq!(spec.row_count(), 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let r = load_layout_csv(std::path::Path::new("/definitely/not/here.csv"));
        assert!(matches!(r, Err(CabinError::Io(_))));
    }
}
