//! Unit tests for ct-trajectory.

use ct_core::{
    ActivityMode, LocationSample, ParticipantId, Point, Purpose, TimeOfDay, Timestamp,
    TravelRecord, TripId,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

/// 2022-03-01 is a Tuesday, 2022-03-05 a Saturday.
fn at(hm: &str) -> Timestamp {
    ts(&format!("2022-03-01 {hm}:00"))
}

fn sample(pid: u32, t: Timestamp, mode: ActivityMode) -> LocationSample {
    LocationSample {
        participant_id: ParticipantId(pid),
        timestamp:      t,
        location:       Point::new(t.hour() as f64, pid as f64),
        mode,
    }
}

fn record(trip: u32, pid: u32, start: Timestamp, end: Timestamp, purpose: &str) -> TravelRecord {
    TravelRecord {
        trip_id:        TripId(trip),
        participant_id: ParticipantId(pid),
        start,
        end,
        purpose:        Purpose::from(purpose),
    }
}

/// pid 7: 08:55 AtHome, 09:05 Transport, 09:20 Transport, 09:40 AtWork.
fn commute_samples() -> Vec<LocationSample> {
    vec![
        sample(7, at("08:55"), ActivityMode::AtHome),
        sample(7, at("09:05"), ActivityMode::Transport),
        sample(7, at("09:20"), ActivityMode::Transport),
        sample(7, at("09:40"), ActivityMode::AtWork),
    ]
}

#[cfg(test)]
mod index {
    use super::*;
    use crate::SampleIndex;

    #[test]
    fn partitions_and_sorts() {
        let mut samples = commute_samples();
        samples.reverse();
        samples.push(sample(8, at("10:00"), ActivityMode::Transport));
        let index = SampleIndex::build(samples);

        assert_eq!(index.len(), 5);
        assert_eq!(index.participant_count(), 2);
        let times: Vec<Timestamp> = index
            .samples(ParticipantId(7))
            .unwrap()
            .iter()
            .map(|s| s.timestamp)
            .collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn window_is_inclusive() {
        let index = SampleIndex::build(commute_samples());
        let w = index.window(ParticipantId(7), at("09:05"), at("09:20")).unwrap();
        assert_eq!(w.len(), 2);
        assert!(index.window(ParticipantId(99), at("09:00"), at("10:00")).is_none());
        assert!(index.window(ParticipantId(7), at("12:00"), at("13:00")).unwrap().is_empty());
    }
}

#[cfg(test)]
mod join {
    use super::*;
    use crate::{reconstruct, reconstruct_trip, DayNight, SampleIndex, TripOutcome};

    #[test]
    fn commute_keeps_only_samples_inside_window() {
        let index = SampleIndex::build(commute_samples());
        let r = record(0, 7, at("09:00"), at("09:30"), "Work");
        let TripOutcome::Matched(seg) = reconstruct_trip(&r, &index, &DayNight::default()) else {
            panic!("expected a segment");
        };
        let times: Vec<Timestamp> = seg.points.iter().map(|p| p.timestamp).collect();
        assert_eq!(times, vec![at("09:05"), at("09:20")]);
        assert_eq!(seg.purpose.as_str(), "Work");
        assert_eq!(seg.trip_id, TripId(0));
        assert_eq!(seg.day.name(), "Tuesday");
        assert!(seg.points.iter().all(|p| p.time_of_day == TimeOfDay::Day));
    }

    #[test]
    fn empty_window_emits_nothing() {
        let index = SampleIndex::build(commute_samples());
        let records = vec![
            record(0, 7, at("09:00"), at("09:30"), "Work"),
            record(1, 7, at("11:00"), at("11:30"), "Eating"),
        ];
        let segments = reconstruct(&records, &index, &DayNight::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(
            reconstruct_trip(&records[1], &index, &DayNight::default()),
            TripOutcome::Empty
        );
    }

    #[test]
    fn unknown_participant_is_not_an_error() {
        let index = SampleIndex::build(commute_samples());
        let r = record(0, 42, at("09:00"), at("09:30"), "Work");
        assert_eq!(
            reconstruct_trip(&r, &index, &DayNight::default()),
            TripOutcome::MissingParticipant
        );
    }

    #[test]
    fn zero_length_window_matches_exact_instant_only() {
        let index = SampleIndex::build(commute_samples());
        let hit = record(0, 7, at("09:20"), at("09:20"), "Work");
        let miss = record(1, 7, at("09:21"), at("09:21"), "Work");
        let segs = reconstruct(&[hit, miss], &index, &DayNight::default());
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].points.len(), 1);
        assert_eq!(segs[0].points[0].timestamp, at("09:20"));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let index = SampleIndex::build(commute_samples());
        assert!(reconstruct(&[], &index, &DayNight::default()).is_empty());
    }

    #[test]
    fn every_point_lies_inside_its_record() {
        let mut samples = Vec::new();
        for pid in 0..5u32 {
            for minute in (0..240).step_by(5) {
                let t = ts(&format!("2022-03-01 {:02}:{:02}:00", 4 + minute / 60, minute % 60));
                samples.push(sample(pid, t, ActivityMode::Transport));
            }
        }
        let records: Vec<TravelRecord> = (0..20u32)
            .map(|i| {
                let start = ts(&format!("2022-03-01 {:02}:{:02}:00", 4 + i / 6, (i * 7) % 60));
                let end = ts(&format!("2022-03-01 {:02}:{:02}:00", 5 + i / 6, (i * 11) % 60));
                record(i, i % 6, start, end, "Work")
            })
            .collect();

        let index = SampleIndex::build(samples);
        let segs = reconstruct(&records, &index, &DayNight::default());
        assert!(!segs.is_empty());
        for seg in segs {
            let r = &records[seg.trip_id.index()];
            assert_eq!(seg.participant_id, r.participant_id);
            assert!(seg.points.iter().all(|p| r.covers(p.timestamp)));
        }
    }

    #[test]
    fn closure_classifier_and_night_tagging() {
        let samples = vec![
            sample(1, at("17:50"), ActivityMode::Transport),
            sample(1, at("18:10"), ActivityMode::Transport),
        ];
        let index = SampleIndex::build(samples);
        let r = record(0, 1, at("17:45"), at("18:15"), "Eating");

        let segs = reconstruct(&[r.clone()], &index, &DayNight::default());
        let tags: Vec<TimeOfDay> = segs[0].points.iter().map(|p| p.time_of_day).collect();
        assert_eq!(tags, vec![TimeOfDay::Day, TimeOfDay::Night]);

        let always_night = |_: Timestamp| TimeOfDay::Night;
        let segs = reconstruct(&[r], &index, &always_night);
        assert!(segs[0].points.iter().all(|p| p.time_of_day == TimeOfDay::Night));
    }
}

#[cfg(test)]
mod filter {
    use std::collections::BTreeSet;

    use super::*;
    use ct_core::{AnalysisConfig, PurposeFilter};

    use crate::{resolve_purposes, ReconstructFilter};

    fn sat(hm: &str) -> Timestamp {
        ts(&format!("2022-03-05 {hm}:00"))
    }

    #[test]
    fn top_n_purposes_by_frequency() {
        let records = vec![
            record(0, 1, at("09:00"), at("09:10"), "Work"),
            record(1, 1, at("10:00"), at("10:10"), "Work"),
            record(2, 1, at("11:00"), at("11:10"), "Eating"),
            record(3, 1, at("12:00"), at("12:10"), "Eating"),
            record(4, 1, at("13:00"), at("13:10"), "Eating"),
            record(5, 1, at("14:00"), at("14:10"), "Recreation"),
        ];
        let top: BTreeSet<Purpose> = resolve_purposes(&PurposeFilter::TopN(2), &records);
        let names: Vec<&str> = top.iter().map(Purpose::as_str).collect();
        assert_eq!(names, ["Eating", "Work"]);
    }

    #[test]
    fn day_filter_applies_before_top_n() {
        let records = vec![
            record(0, 1, at("09:00"), at("09:10"), "Work"),
            record(1, 1, sat("10:00"), sat("10:10"), "Eating"),
            record(2, 1, sat("11:00"), sat("11:10"), "Eating"),
            record(3, 1, sat("12:00"), sat("12:10"), "Recreation"),
        ];
        let filter = ReconstructFilter {
            days:     Some(["Saturday".parse().unwrap()].into_iter().collect()),
            purposes: Some(PurposeFilter::TopN(1)),
            ..ReconstructFilter::none()
        };
        let kept = filter.apply_records(records);
        let ids: Vec<TripId> = kept.iter().map(|r| r.trip_id).collect();
        assert_eq!(ids, vec![TripId(1), TripId(2)]);
    }

    #[test]
    fn sample_filter_uses_mode_day_and_participant() {
        let config = AnalysisConfig {
            participant_filter: vec![ParticipantId(7)],
            ..AnalysisConfig::default()
        };
        let filter = ReconstructFilter::from_config(&config);
        assert!(filter.keep_sample(&sample(7, at("09:05"), ActivityMode::Transport)));
        assert!(!filter.keep_sample(&sample(7, at("08:55"), ActivityMode::AtHome)));
        assert!(!filter.keep_sample(&sample(8, at("09:05"), ActivityMode::Transport)));
        // Wednesday is outside the default Tuesday/Saturday filter.
        let wed = ts("2022-03-02 09:05:00");
        assert!(!filter.keep_sample(&sample(7, wed, ActivityMode::Transport)));
    }
}

#[cfg(test)]
mod reconstructor {
    use super::*;
    use ct_core::{AnalysisConfig, PurposeFilter};

    use crate::Reconstructor;

    #[test]
    fn run_reports_stats() {
        let config = AnalysisConfig {
            purpose_filter: PurposeFilter::All,
            num_threads:    Some(2),
            ..AnalysisConfig::default()
        };
        let records = vec![
            record(0, 7, at("09:00"), at("09:30"), "Work"),
            record(1, 7, at("11:00"), at("11:30"), "Eating"),
            record(2, 8, at("09:00"), at("09:30"), "Work"),
            record(3, 7, ts("2022-03-02 09:00:00"), ts("2022-03-02 09:30:00"), "Work"),
        ];
        let run = Reconstructor::new(&config).unwrap().run(records, commute_samples()).unwrap();

        assert_eq!(run.stats.records_in, 4);
        assert_eq!(run.stats.records_considered, 3); // Wednesday dropped
        assert_eq!(run.stats.matched, 1);
        assert_eq!(run.stats.empty, 1);
        assert_eq!(run.stats.missing_participant, 1);
        // Only the two Transport samples are indexed.
        assert_eq!(run.stats.samples_indexed, 2);
        assert_eq!(run.stats.points, 2);
        assert_eq!(run.segments[0].trip_id, TripId(0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AnalysisConfig { bucket_width_hours: 0, ..AnalysisConfig::default() };
        assert!(Reconstructor::new(&config).is_err());
    }
}

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use super::*;
    use ct_core::{AnalysisConfig, PurposeFilter};

    use crate::{reconstruct_outcomes, reconstruct_trip, DayNight, Reconstructor, SampleIndex};

    /// Participants 0..6 report every 5 minutes from 06:00 to 21:55.
    fn busy_samples() -> Vec<LocationSample> {
        (0..6)
            .flat_map(|pid| {
                (6..22).flat_map(move |h| {
                    (0..60).step_by(5).map(move |m| {
                        sample(pid, at(&format!("{h:02}:{m:02}")), ActivityMode::Transport)
                    })
                })
            })
            .collect()
    }

    /// Staggered windows over participants 0..8; 6 and 7 have no samples.
    fn many_records() -> Vec<TravelRecord> {
        (0..240u32)
            .map(|i| {
                let start = 6 + i % 15;
                let start_at = at(&format!("{start:02}:{:02}", (i * 7) % 60));
                let end_at = at(&format!("{start:02}:59"));
                let purpose = ["Work", "Eating", "Recreation"][i as usize % 3];
                record(i, i % 8, start_at, end_at, purpose)
            })
            .collect()
    }

    #[test]
    fn outcomes_match_sequential_join_in_record_order() {
        let index = SampleIndex::build(busy_samples());
        let records = many_records();
        let classifier = DayNight::default();

        let sequential: Vec<_> =
            records.iter().map(|r| reconstruct_trip(r, &index, &classifier)).collect();
        let parallel = reconstruct_outcomes(&records, &index, &classifier);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn thread_pool_run_matches_default_pool() {
        let config =
            AnalysisConfig { purpose_filter: PurposeFilter::All, ..AnalysisConfig::default() };
        let pooled = AnalysisConfig { num_threads: Some(3), ..config.clone() };
        let run = |config: &AnalysisConfig| {
            Reconstructor::new(config).unwrap().run(many_records(), busy_samples()).unwrap()
        };

        let default_run = run(&config);
        let pooled_run = run(&pooled);

        assert!(default_run.stats.matched > 0);
        assert!(default_run.stats.missing_participant > 0);
        assert_eq!(pooled_run.stats, default_run.stats);
        assert_eq!(pooled_run.segments, default_run.segments);
        let ids: Vec<u32> = pooled_run.segments.iter().map(|s| s.trip_id.0).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
