//! Unit tests for ct-layers.

use ct_core::{
    ActivityMode, DayOfWeek, HourInterval, LocationSample, ParticipantId, Point, Purpose,
    TimeOfDay, Timestamp, TripId,
};
use ct_trajectory::{TripPoint, TripSegment};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TUE: DayOfWeek = DayOfWeek::ALL[1];
const SAT: DayOfWeek = DayOfWeek::ALL[5];

/// 2022-03-01 is a Tuesday, 2022-03-05 a Saturday.
fn tue(hm: &str) -> Timestamp {
    Timestamp::parse(&format!("2022-03-01 {hm}:00")).unwrap()
}

fn sat(hm: &str) -> Timestamp {
    Timestamp::parse(&format!("2022-03-05 {hm}:00")).unwrap()
}

fn point(t: Timestamp) -> TripPoint {
    TripPoint {
        timestamp:   t,
        location:    Point::new(t.hour() as f64, 1.0),
        time_of_day: TimeOfDay::classify(t.hour(), 6, 18),
        day:         t.weekday(),
    }
}

fn segment(trip: u32, purpose: &str, times: &[Timestamp]) -> TripSegment {
    TripSegment {
        trip_id:        TripId(trip),
        participant_id: ParticipantId(1),
        purpose:        Purpose::from(purpose),
        day:            times[0].weekday(),
        points:         times.iter().copied().map(point).collect(),
    }
}

/// (Tuesday, Work) and (Saturday, Leisure) only.
fn two_combos() -> Vec<TripSegment> {
    vec![
        segment(0, "Work", &[tue("09:00"), tue("09:10")]),
        segment(1, "Leisure", &[sat("14:00"), sat("14:20")]),
    ]
}

fn traffic(t: Timestamp, x: f64, y: f64) -> LocationSample {
    LocationSample {
        participant_id: ParticipantId(1),
        timestamp:      t,
        location:       Point::new(x, y),
        mode:           ActivityMode::Transport,
    }
}

/// Tuesday 09-11h, Tuesday 21-23h (two points), Saturday 09-11h, plus one
/// non-transport sample far outside.
fn heat_samples() -> Vec<LocationSample> {
    let mut home = traffic(tue("09:30"), 100.0, 100.0);
    home.mode = ActivityMode::AtHome;
    vec![
        traffic(tue("22:00"), 0.0, 0.0),
        traffic(tue("23:30"), 10.0, 10.0),
        traffic(tue("09:00"), 5.0, 5.0),
        traffic(sat("10:00"), 5.0, 5.0),
        home,
    ]
}

#[cfg(test)]
mod trip_layers {
    use super::*;
    use crate::{
        build_layers, initial_mask, DimValue, Dimension, LayerError, LayerKind, LayerGeometry,
        TripLayerBuilder, PALETTE,
    };

    #[test]
    fn only_present_combinations() {
        let dims = [Dimension::Day, Dimension::Purpose];
        let set = build_layers(&two_combos(), &dims).unwrap();

        assert_eq!(set.data_layers().count(), 2);
        assert_eq!(set.groups().len(), 2);
        assert_eq!(set.legend_layers().count(), 2);
        assert_eq!(set.len(), 4);

        let keys: Vec<_> = set.groups().into_iter().map(<[DimValue]>::to_vec).collect();
        assert_eq!(
            keys,
            vec![
                vec![DimValue::Day(TUE), DimValue::Purpose("Work".into())],
                vec![DimValue::Day(SAT), DimValue::Purpose("Leisure".into())],
            ]
        );
    }

    #[test]
    fn legend_after_data_with_palette_colors() {
        let dims = [Dimension::Day, Dimension::Purpose];
        let set = build_layers(&two_combos(), &dims).unwrap();
        let layers = set.layers();

        assert!(matches!(layers[0].kind, LayerKind::Data { .. }));
        assert!(matches!(layers[1].kind, LayerKind::Data { .. }));
        assert_eq!(layers[2].name, "Leisure");
        assert_eq!(layers[3].name, "Work");
        assert_eq!(layers[2].geometry, LayerGeometry::None);
        assert_eq!(layers[2].style.color, PALETTE[0]);
        assert_eq!(layers[3].style.color, PALETTE[1]);
        assert_eq!(layers[3].style.width, 3.0);

        // Work trip on Tuesday shares the Work legend colour.
        assert_eq!(layers[0].style.color, PALETTE[1]);
        assert_eq!(layers[0].style.width, 1.0);
        assert_eq!(layers[0].style.opacity, 0.15);
        assert_eq!(layers[0].name, "Work (Tuesday)");
    }

    #[test]
    fn ids_follow_position() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        for (i, layer) in set.iter().enumerate() {
            assert_eq!(layer.id.index(), i);
            assert_eq!(set.get(layer.id), Some(layer));
        }
    }

    #[test]
    fn one_layer_per_trip_within_a_group() {
        let mut segs = two_combos();
        segs.push(segment(2, "Work", &[tue("10:00"), tue("10:05")]));
        let set = build_layers(&segs, &[Dimension::Day, Dimension::Purpose]).unwrap();

        assert_eq!(set.data_layers().count(), 3);
        assert_eq!(set.groups().len(), 2);
        let trips: Vec<_> = set
            .data_layers()
            .map(|l| match l.kind {
                LayerKind::Data { trip, .. } => trip,
                _ => None,
            })
            .collect();
        assert_eq!(trips, vec![Some(TripId(0)), Some(TripId(2)), Some(TripId(1))]);
    }

    #[test]
    fn trip_across_day_night_boundary_splits() {
        let segs = vec![segment(0, "Work", &[tue("17:50"), tue("18:10")])];
        let dims = [Dimension::Day, Dimension::TimeOfDay, Dimension::Purpose];
        let set = build_layers(&segs, &dims).unwrap();

        let data: Vec<_> = set.data_layers().collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].key().unwrap()[1], DimValue::TimeOfDay(TimeOfDay::Day));
        assert_eq!(data[1].key().unwrap()[1], DimValue::TimeOfDay(TimeOfDay::Night));
        assert_eq!(data[0].geometry.points().len(), 1);
        assert_eq!(data[1].geometry.points().len(), 1);
    }

    #[test]
    fn empty_input_gives_placeholder() {
        let set = build_layers(&[], &[Dimension::Day]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.is_placeholder());
        assert_eq!(set.layers()[0].name, crate::NO_DATA);
        assert_eq!(initial_mask(&set).to_bools(), vec![true]);
    }

    #[test]
    fn rejects_bad_dimension_lists() {
        assert!(matches!(build_layers(&two_combos(), &[]), Err(LayerError::NoDimensions)));
        assert!(matches!(
            build_layers(&two_combos(), &[Dimension::Day, Dimension::Day]),
            Err(LayerError::DuplicateDimension(Dimension::Day))
        ));
        assert!(matches!(
            build_layers(&two_combos(), &[Dimension::Interval(3), Dimension::Interval(2)]),
            Err(LayerError::DuplicateDimension(_))
        ));
        assert!(build_layers(&two_combos(), &[Dimension::Interval(0)]).is_err());

        let err = TripLayerBuilder::new(vec![Dimension::Day])
            .color_by(Some(Dimension::Purpose))
            .build(&two_combos());
        assert!(matches!(err, Err(LayerError::UnknownDimension(Dimension::Purpose))));
    }

    #[test]
    fn no_color_dimension_means_no_legend() {
        let set = build_layers(&two_combos(), &[Dimension::Day]).unwrap();
        assert_eq!(set.legend_layers().count(), 0);
        assert!(set.iter().all(|l| l.style.color == PALETTE[0]));
    }

    #[test]
    fn config_initial_selection() {
        let segs = vec![
            segment(0, "Work", &[tue("09:00")]),
            segment(1, "Work", &[tue("20:00")]),
            segment(2, "Leisure", &[sat("10:00")]),
        ];
        let set = TripLayerBuilder::from_config(&ct_core::AnalysisConfig::default())
            .unwrap()
            .build(&segs)
            .unwrap();

        // Tue/Day, Tue/Night, Sat/Day data layers, then two legend layers.
        assert_eq!(initial_mask(&set).to_bools(), vec![true, false, false, true, true]);
    }
}

#[cfg(test)]
mod mask {
    use super::*;
    use crate::{build_layers, compute_mask, Dimension, LayerError, Selection};

    #[test]
    fn full_length_and_legend_always_on() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let sel = Selection::all_of(&set).only(Dimension::Day, [SAT]).unwrap();
        let mask = compute_mask(&set, &sel).unwrap();

        assert_eq!(mask.len(), set.len());
        assert_eq!(mask.to_bools(), vec![false, true, true, true]);
        for legend in set.legend_layers() {
            assert_eq!(mask.get(legend.id), Some(true));
        }
    }

    #[test]
    fn conjunction_across_dimensions() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let sel = Selection::all_of(&set)
            .only(Dimension::Day, [TUE])
            .unwrap()
            .only(Dimension::Purpose, [Purpose::from("Leisure")])
            .unwrap();
        let mask = compute_mask(&set, &sel).unwrap();
        assert_eq!(mask.visible_count(), 2);
        assert!(mask.visible_ids().all(|id| set.get(id).unwrap().is_always_visible()));
    }

    #[test]
    fn pure_and_idempotent() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let sel = Selection::all_of(&set).only(Dimension::Day, [TUE]).unwrap();
        assert_eq!(compute_mask(&set, &sel).unwrap(), compute_mask(&set, &sel).unwrap());
    }

    #[test]
    fn all_selection_shows_everything() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let mask = compute_mask(&set, &Selection::all_of(&set)).unwrap();
        assert_eq!(mask.visible_count(), set.len());
    }

    #[test]
    fn mismatched_selection_rejected() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let sel = Selection::all(&[Dimension::Day]);
        assert!(matches!(compute_mask(&set, &sel), Err(LayerError::DimensionMismatch { .. })));
        assert!(matches!(
            Selection::all(&[Dimension::Day]).only(Dimension::Purpose, [Purpose::from("Work")]),
            Err(LayerError::UnknownDimension(Dimension::Purpose))
        ));
    }

    #[test]
    fn unknown_id_has_no_entry() {
        let set = build_layers(&two_combos(), &[Dimension::Day]).unwrap();
        let mask = compute_mask(&set, &Selection::all_of(&set)).unwrap();
        assert_eq!(mask.get(ct_core::LayerId(99)), None);
    }
}

#[cfg(test)]
mod controls {
    use super::*;
    use crate::{build_layers, build_menus, Dimension};

    fn labels(menu: &crate::ControlMenu) -> Vec<&str> {
        menu.entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn menu_labels_and_order() {
        let segs = vec![
            segment(0, "Work", &[tue("09:00")]),
            segment(1, "Leisure", &[sat("20:00")]),
        ];
        let dims = [Dimension::Day, Dimension::TimeOfDay, Dimension::Purpose];
        let set = build_layers(&segs, &dims).unwrap();
        let menus = build_menus(&set).unwrap();

        assert_eq!(menus.len(), 3);
        assert_eq!(labels(&menus[0]), vec!["Both Days", "Tuesday", "Saturday"]);
        assert_eq!(labels(&menus[1]), vec!["Day Only", "Night Only", "Both"]);
        assert_eq!(labels(&menus[2]), vec!["All Purposes", "Leisure", "Work"]);
    }

    #[test]
    fn entry_masks_restrict_one_dimension() {
        let set = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let menus = build_menus(&set).unwrap();

        let tuesday = menus[0].entry("Tuesday").unwrap();
        assert_eq!(tuesday.mask.to_bools(), vec![true, false, true, true]);
        let all = menus[0].entry("Both Days").unwrap();
        assert_eq!(all.mask.visible_count(), set.len());
        for menu in &menus {
            for entry in &menu.entries {
                assert_eq!(entry.mask.len(), set.len());
            }
        }
    }

    #[test]
    fn more_than_two_days_says_all_days() {
        let mut segs = two_combos();
        segs.push(segment(2, "Work", &[Timestamp::parse("2022-03-02 09:00:00").unwrap()]));
        let set = build_layers(&segs, &[Dimension::Day, Dimension::Purpose]).unwrap();
        let menus = build_menus(&set).unwrap();
        assert_eq!(menus[0].entries[0].label, "All Days");
    }

    #[test]
    fn panel_picks_control_style() {
        let trips = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        let panel = crate::ControlPanel::for_layers(&trips).unwrap();
        assert_eq!(panel.menus.len(), 2);
        assert!(panel.intervals.is_none());

        let heat = crate::HeatmapBuilder::new(3).build(&heat_samples()).unwrap();
        let panel = crate::ControlPanel::for_layers(&heat).unwrap();
        assert!(panel.menus.is_empty());
        assert!(panel.intervals.is_some());
    }
}

#[cfg(test)]
mod heatmap {
    use super::*;
    use crate::{
        heatmap_title, Bins, DimValue, HeatmapBuilder, LayerGeometry, LayerKind, NO_DATA_TITLE,
    };
    use ct_core::Extent;

    fn grid(layer: &crate::Layer) -> &crate::DensityGrid {
        match &layer.geometry {
            LayerGeometry::Density(g) => g,
            other => panic!("expected density, got {other:?}"),
        }
    }

    #[test]
    fn one_layer_per_present_day_interval() {
        let set = HeatmapBuilder::new(3).bins(10).build(&heat_samples()).unwrap();
        let names: Vec<_> = set.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Tuesday 09h", "Tuesday 21h", "Saturday 09h"]);

        let init: Vec<_> = set.iter().map(|l| l.initially_visible).collect();
        assert_eq!(init, vec![true, false, false]);

        assert_eq!(
            set.layers()[1].key().unwrap(),
            &[DimValue::Day(TUE), DimValue::Interval(HourInterval { start: 21, width: 3 })]
        );
    }

    #[test]
    fn shared_bins_and_edge_points() {
        let set = HeatmapBuilder::new(3).bins(10).build(&heat_samples()).unwrap();
        let night = grid(&set.layers()[1]);
        assert_eq!(night.total(), 2);
        assert_eq!(night.count_at(0, 0), 1);
        assert_eq!(night.count_at(9, 9), 1);
        assert_eq!(night.max(), 1);

        let morning = grid(&set.layers()[0]);
        assert_eq!(morning.bins, night.bins);
        assert_eq!(morning.count_at(5, 5), 1);
    }

    #[test]
    fn non_transport_samples_ignored() {
        let set = HeatmapBuilder::new(3).bins(10).build(&heat_samples()).unwrap();
        let total: u64 = set.iter().map(|l| grid(l).total()).sum();
        assert_eq!(total, 4);

        let all_modes = HeatmapBuilder::new(3).mode(None).build(&heat_samples()).unwrap();
        let total: u64 = all_modes.iter().map(|l| grid(l).total()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn base_map_first_and_always_visible() {
        let base = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let set = HeatmapBuilder::new(3).base_map(base.clone()).build(&heat_samples()).unwrap();
        let first = &set.layers()[0];
        assert_eq!(first.kind, LayerKind::Base);
        assert_eq!(first.geometry, LayerGeometry::Markers(base));
        assert!(first.is_always_visible());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn degenerate_extent_single_bin() {
        let ext = Extent { min_x: 3.0, max_x: 3.0, min_y: 0.0, max_y: 50.0 };
        let bins = Bins::over(ext, 100);
        assert_eq!((bins.nx, bins.size_x), (1, 1.0));
        assert_eq!((bins.ny, bins.size_y), (100, 0.5));
        assert_eq!(bins.bin_of(Point::new(3.0, 50.0)), Some((0, 99)));
        assert_eq!(bins.bin_of(Point::new(2.0, 0.0)), None);

        let samples = vec![traffic(tue("09:00"), 4.0, 4.0), traffic(tue("09:30"), 4.0, 4.0)];
        let set = HeatmapBuilder::new(3).build(&samples).unwrap();
        let g = grid(&set.layers()[0]);
        assert_eq!(g.counts, vec![2]);
    }

    #[test]
    fn far_edge_of_non_round_extent() {
        let (min_x, max_x) = (-523.2826232930465, 6010.819566227999);
        let ext = Extent { min_x, max_x, min_y: 0.0, max_y: 1.0 };
        let bins = Bins::over(ext, 100);
        assert_eq!(bins.bin_of(Point::new(max_x, 1.0)), Some((99, 99)));
        assert_eq!(bins.bin_of(Point::new(min_x, 0.0)), Some((0, 0)));
        assert_eq!(bins.bin_of(Point::new(max_x + 1.0, 1.0)), None);

        let samples = vec![
            traffic(tue("09:00"), min_x, 0.0),
            traffic(tue("09:30"), max_x, 1.0),
        ];
        let set = HeatmapBuilder::new(3).build(&samples).unwrap();
        let g = grid(&set.layers()[0]);
        assert_eq!(g.total(), 2);
        assert_eq!(g.count_at(99, 99), 1);
    }

    #[test]
    fn zero_bins_means_one() {
        let ext = Extent { min_x: 0.0, max_x: 10.0, min_y: 0.0, max_y: 10.0 };
        let bins = Bins::over(ext, 0);
        assert_eq!((bins.nx, bins.ny), (1, 1));
        assert_eq!(bins.bin_of(Point::new(10.0, 10.0)), Some((0, 0)));
    }

    #[test]
    fn no_traffic_gives_placeholder() {
        let set = HeatmapBuilder::new(3).build(&[]).unwrap();
        assert!(set.is_placeholder());
        assert_eq!(NO_DATA_TITLE, "Traffic Density Heatmap (No Data)");
    }

    #[test]
    fn titles_use_clamped_interval() {
        let late = HourInterval::of_hour(23, 3).unwrap();
        assert_eq!(heatmap_title(TUE, late), "Traffic: Tuesday, 21:00-23:59");
        let whole = HourInterval::of_hour(0, 24).unwrap();
        assert_eq!(heatmap_title(SAT, whole), "Traffic: Saturday, 00:00-23:59");
    }

    #[test]
    fn rejects_bad_width() {
        assert!(HeatmapBuilder::new(0).build(&heat_samples()).is_err());
        assert!(HeatmapBuilder::new(25).build(&heat_samples()).is_err());
    }
}

#[cfg(test)]
mod hierarchy {
    use super::*;
    use crate::{
        build_layers, ControlEvent, DimValue, Dimension, HeatmapBuilder, IntervalControls,
        LayerError, LayerSet,
    };

    fn heat_set() -> LayerSet {
        HeatmapBuilder::new(3)
            .base_map(vec![Point::new(0.0, 0.0)])
            .build(&heat_samples())
            .unwrap()
    }

    /// Every visible data layer of `mask` belongs to `day`.
    fn only_day(set: &LayerSet, mask: &crate::VisibilityMask, day: DayOfWeek) -> bool {
        mask.visible_ids()
            .filter_map(|id| set.get(id).and_then(|l| l.key()))
            .all(|key| key[0] == DimValue::Day(day))
    }

    #[test]
    fn starts_on_first_day_first_interval() {
        let set = heat_set();
        let ctl = IntervalControls::build(&set).unwrap().unwrap();

        assert_eq!(ctl.active_day(), TUE);
        assert_eq!(ctl.active_step(), 0);
        let labels: Vec<_> = ctl.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["09-11h", "21-23h"]);
        assert_eq!(ctl.current_title(), "Traffic: Tuesday, 09:00-11:59");
        // Base layer plus Tuesday 09h.
        assert_eq!(ctl.current_mask().to_bools(), vec![true, true, false, false]);
        assert_eq!(ctl.days().len(), 2);
    }

    #[test]
    fn selecting_a_day_regenerates_every_step() {
        let set = heat_set();
        let mut ctl = IntervalControls::build(&set).unwrap().unwrap();

        let ev = ctl.select_day(SAT).unwrap();
        let ControlEvent::Regenerated { day, mask, title, steps } = ev else {
            panic!("expected regeneration");
        };
        assert_eq!(day, SAT);
        assert_eq!(title, "Traffic: Saturday, 09:00-11:59");
        assert!(only_day(&set, &mask, SAT));
        assert_eq!(steps.len(), 1);

        ctl.select_day(TUE).unwrap();
        assert_eq!(ctl.steps().len(), 2);
        for step in ctl.steps() {
            assert_eq!(step.day, TUE);
            assert!(!step.title.contains("Saturday"));
            assert!(only_day(&set, &step.mask, TUE));
            assert_eq!(step.mask.len(), set.len());
        }
    }

    #[test]
    fn selecting_a_step_returns_its_mask() {
        let set = heat_set();
        let mut ctl = IntervalControls::build(&set).unwrap().unwrap();
        let expected = ctl.steps()[1].mask.clone();

        let ev = ctl.select_step(1).unwrap();
        assert_eq!(
            ev,
            ControlEvent::StepSelected {
                index: 1,
                mask:  expected.clone(),
                title: "Traffic: Tuesday, 21:00-23:59".to_owned(),
            }
        );
        assert_eq!(ctl.current_mask(), &expected);
        assert_eq!(expected.to_bools(), vec![true, false, true, false]);
    }

    #[test]
    fn selecting_a_day_resets_the_step() {
        let mut ctl = IntervalControls::build(&heat_set()).unwrap().unwrap();
        ctl.select_step(1).unwrap();
        ctl.select_day(TUE).unwrap();
        assert_eq!(ctl.active_step(), 0);
    }

    #[test]
    fn errors_leave_state_alone() {
        let mut ctl = IntervalControls::build(&heat_set()).unwrap().unwrap();
        let before = ctl.clone();

        assert!(matches!(
            ctl.select_step(5),
            Err(LayerError::StepOutOfRange { index: 5, len: 2 })
        ));
        assert!(matches!(
            ctl.select_day(DayOfWeek::ALL[0]),
            Err(LayerError::UnknownDay(_))
        ));
        assert_eq!(ctl, before);
    }

    #[test]
    fn no_data_has_no_controls() {
        let empty = HeatmapBuilder::new(3).build(&[]).unwrap();
        assert!(IntervalControls::build(&empty).unwrap().is_none());

        let base_only = HeatmapBuilder::new(3).base_map(vec![Point::new(0.0, 0.0)]).build(&[]).unwrap();
        assert!(IntervalControls::build(&base_only).unwrap().is_none());
    }

    #[test]
    fn requires_day_interval_layers() {
        let trips = build_layers(&two_combos(), &[Dimension::Day, Dimension::Purpose]).unwrap();
        assert!(matches!(
            IntervalControls::build(&trips),
            Err(LayerError::NotDayInterval(_))
        ));
    }
}

#[cfg(test)]
mod buildings {
    use super::*;
    use crate::{
        build_building_layers, build_layers, compute_mask, ControlPanel, DimValue, Dimension,
        LayerError, LayerGeometry, LayerKind, Selection,
    };
    use ct_core::{Building, BuildingKind};

    fn building(id: u32, kind: BuildingKind) -> Building {
        let o = id as f64 * 10.0;
        Building {
            building_id: id,
            kind,
            footprint:   vec![
                Point::new(o, 0.0),
                Point::new(o + 4.0, 0.0),
                Point::new(o + 4.0, 4.0),
            ],
        }
    }

    fn town() -> Vec<Building> {
        vec![
            building(1, BuildingKind::Residential),
            building(2, BuildingKind::Commercial),
            building(3, BuildingKind::Other("Park".to_owned())),
        ]
    }

    #[test]
    fn footprints_then_legends() {
        let set = build_building_layers(&town());
        let names: Vec<_> = set.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Residential 1",
                "Commercial 2",
                "Park 3",
                "Commercial Buildings",
                "Residential Buildings",
                "School Buildings",
            ]
        );
        let colors: Vec<_> = set.iter().map(|l| l.style.color.as_str()).collect();
        assert_eq!(colors, vec!["green", "blue", "gray", "blue", "green", "orange"]);
        assert_eq!(set.legend_layers().count(), 3);
        assert!(set.iter().all(|l| l.initially_visible));
    }

    #[test]
    fn footprint_ring_is_closed() {
        let set = build_building_layers(&town());
        let LayerGeometry::Path(ring) = &set.layers()[0].geometry else {
            panic!("expected a path");
        };
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());

        let mut closed = building(4, BuildingKind::School);
        closed.footprint.push(closed.footprint[0]);
        let set = build_building_layers(&[closed]);
        assert_eq!(set.layers()[0].geometry.points().len(), 4);
    }

    #[test]
    fn type_menu_hides_other_types_but_not_legends() {
        let set = build_building_layers(&town());
        let only_commercial = Selection::all_of(&set)
            .only(Dimension::BuildingType, [BuildingKind::Commercial])
            .unwrap();
        let mask = compute_mask(&set, &only_commercial).unwrap();
        assert_eq!(mask.to_bools(), vec![false, true, false, true, true, true]);

        let panel = ControlPanel::for_layers(&set).unwrap();
        assert!(panel.intervals.is_none());
        let menu = &panel.menus[0];
        assert_eq!(menu.name, "Building Type");
        let labels: Vec<_> = menu.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["All Types", "Residential", "Commercial", "Park"]);
        assert_eq!(menu.entry("Commercial").unwrap().mask, mask);
    }

    #[test]
    fn no_buildings_gives_placeholder() {
        assert!(build_building_layers(&[]).is_placeholder());
    }

    #[test]
    fn building_type_is_not_a_trip_dimension() {
        assert!(matches!(
            build_layers(&two_combos(), &[Dimension::Day, Dimension::BuildingType]),
            Err(LayerError::NotATripDimension(Dimension::BuildingType))
        ));
        let built = build_building_layers(&town());
        let legend = &built.layers()[3];
        assert_eq!(
            legend.kind,
            LayerKind::Legend { value: DimValue::BuildingType(BuildingKind::Commercial) }
        );
    }
}
