//! End-to-end monitor behavior over realistic frame streams

mod common;

use frameguard_core::{
    CompressedFrame, FailureReason, FrameMonitor, MetricsSink, MetricsSnapshot, MonitorConfig,
    SizeDeviation, DispositionPolicy,
    policy::{Disposition, ResendPrevious, SkipInvalid},
    sinks::FnSink,
};

use common::{Corruption, FrameGenerator};

#[test]
fn spike_after_steady_stream() {
    let mut generator = FrameGenerator::new(7);
    let mut monitor = FrameMonitor::new();

    for _ in 0..4 {
        let frame = generator.jpeg(120);
        let report = monitor.observe_bytes(&frame, generator.next_sequence() + 1);
        assert!(report.is_valid());
        assert!(!report.is_anomalous());
    }

    let frame = generator.jpeg(500);
    let report = monitor.observe_bytes(&frame, 5);

    // Integer mean of [120, 120, 120, 120, 500]
    assert_eq!(monitor.average_and_count(), (196, 5));
    assert_eq!(report.anomaly.average, 196);
    assert!((report.anomaly.deviation_ratio - 304.0 / 196.0).abs() < 1e-4);
    assert!(report.is_anomalous());
    assert_eq!(report.anomaly.direction(), Some(SizeDeviation::Oversized));
}

#[test]
fn runts_never_enter_history() {
    let mut generator = FrameGenerator::new(3);
    let mut monitor = FrameMonitor::new();

    for size in 0..4 {
        let frame = generator.frame(size, Corruption::Runt);
        let report = monitor.observe_bytes(&frame, size as u32 + 1);

        assert_eq!(report.failure_reason(), FailureReason::TooSmall);
        assert!(report.result.boundary.is_none());
    }

    assert!(monitor.history().is_empty());
    assert_eq!(monitor.error_count(), 4);
}

#[test]
fn each_corruption_is_classified() {
    let mut generator = FrameGenerator::new(11);
    let mut monitor = FrameMonitor::new();

    let cases = [
        (Corruption::None, FailureReason::None),
        (Corruption::Truncated, FailureReason::MissingTrailingMarker),
        (Corruption::StaleHeader, FailureReason::MissingLeadingMarker),
        (Corruption::Garbage, FailureReason::BothMarkersMissing),
        (Corruption::Runt, FailureReason::TooSmall),
    ];

    for (seq, (corruption, expected)) in cases.into_iter().enumerate() {
        let frame = generator.frame(256, corruption);
        let report = monitor.observe_bytes(&frame, seq as u32 + 1);
        assert_eq!(report.failure_reason(), expected, "{:?}", corruption);
    }

    assert_eq!(monitor.error_count(), 4);
    for reason in FailureReason::ALL.into_iter().skip(1) {
        assert_eq!(monitor.errors().count_for(reason), 1);
    }
}

#[test]
fn error_count_matches_invalid_frames() {
    let mut generator = FrameGenerator::new(5);
    let mut monitor = FrameMonitor::new();
    let mut expected_errors = 0;
    let mut previous = 0;

    for i in 0..500u32 {
        let corruption = match i % 7 {
            0 => Corruption::Truncated,
            3 => Corruption::Runt,
            _ => Corruption::None,
        };
        if corruption != Corruption::None {
            expected_errors += 1;
        }

        let frame = generator.frame(200 + (i as usize % 40), corruption);
        monitor.observe_bytes(&frame, i);

        assert!(monitor.error_count() >= previous);
        previous = monitor.error_count();
    }

    assert_eq!(monitor.error_count(), expected_errors);
    assert_eq!(monitor.frames_observed(), 500);
}

#[test]
fn history_keeps_only_recent_valid_sizes() {
    let mut generator = FrameGenerator::new(9);
    let mut monitor = FrameMonitor::new();
    let sizes = [100usize, 110, 90, 105, 95, 1000, 130, 140, 150, 160, 170, 180];

    for (seq, &size) in sizes.iter().enumerate() {
        let frame = generator.jpeg(size);
        monitor.observe_bytes(&frame, seq as u32 + 1);

        // Invalid frames between valid ones change nothing
        let bad = generator.frame(size, Corruption::Garbage);
        monitor.observe_bytes(&bad, seq as u32 + 1);
    }

    let kept: Vec<u32> = monitor.history().iter().collect();
    let expected: Vec<u32> = sizes[2..].iter().map(|&s| s as u32).collect();
    assert_eq!(kept, expected);
}

#[test]
fn snapshots_every_hundred_frames() {
    let mut generator = FrameGenerator::new(21);
    let mut monitor = FrameMonitor::new();
    let mut snapshots: Vec<MetricsSnapshot> = Vec::new();

    {
        let mut sink = FnSink::new(|snapshot: &MetricsSnapshot| snapshots.push(*snapshot));
        for _ in 0..=300 {
            let seq = generator.next_sequence();
            let corruption = if seq % 50 == 1 { Corruption::Truncated } else { Corruption::None };
            let frame = generator.frame(300, corruption);
            let report = monitor.observe(CompressedFrame::new(&frame, seq));
            sink.publish_report(&report);
        }
    }

    let points: Vec<u32> = snapshots.iter().map(|s| s.frame_sequence_number).collect();
    assert_eq!(points, vec![0, 100, 200, 300]);

    // Truncated frames at 1, 51, 101, ... counted up to each point
    let errors: Vec<u32> = snapshots.iter().map(|s| s.error_count).collect();
    assert_eq!(errors, vec![0, 2, 4, 6]);
    assert!(snapshots.iter().skip(1).all(|s| s.average_size == 300));
}

#[test]
fn frame_from_oversized_encoder_buffer() {
    let mut generator = FrameGenerator::new(4);
    let mut buffer = generator.jpeg(64);
    let used = buffer.len();
    buffer.resize(4096, 0x00);

    let mut monitor = FrameMonitor::new();
    let frame = CompressedFrame::from_buffer(&buffer, used, 0).unwrap();
    let report = monitor.observe(frame);

    assert!(report.is_valid());
    assert_eq!(report.frame_size, 64);

    // Whole buffer fails: trailing bytes are padding
    assert!(!monitor.observe_bytes(&buffer, 1).is_valid());
}

#[test]
fn independent_streams_do_not_share_state() {
    let mut generator = FrameGenerator::new(8);
    let mut front = FrameMonitor::new();
    let mut back = FrameMonitor::new();

    for seq in 1..=10 {
        front.observe_bytes(&generator.jpeg(1000), seq);
        back.observe_bytes(&generator.frame(1000, Corruption::Garbage), seq);
    }

    assert_eq!(front.error_count(), 0);
    assert_eq!(front.average_and_count(), (1000, 10));
    assert_eq!(back.error_count(), 10);
    assert_eq!(back.average_and_count(), (0, 0));
}

#[test]
fn strict_config_flags_smaller_deviations() {
    let mut generator = FrameGenerator::new(2);
    let mut default_monitor = FrameMonitor::new();
    let mut strict: FrameMonitor = FrameMonitor::with_config(MonitorConfig::strict()).unwrap();

    for seq in 1..=5 {
        let frame = generator.jpeg(1000);
        default_monitor.observe_bytes(&frame, seq);
        strict.observe_bytes(&frame, seq);
    }

    // Mean after recording 1400 into five 1000s is 1066: ratio ~0.31
    let frame = generator.jpeg(1400);
    assert!(!default_monitor.observe_bytes(&frame, 6).is_anomalous());
    assert!(strict.observe_bytes(&frame, 6).is_anomalous());
}

#[test]
fn caller_policies_over_a_stream() {
    let mut generator = FrameGenerator::new(13);
    let mut monitor = FrameMonitor::new();
    let mut skip = SkipInvalid;
    let mut resend = ResendPrevious::new();

    let stream = [Corruption::Truncated, Corruption::None, Corruption::Garbage];
    let mut decisions = Vec::new();

    for (seq, corruption) in stream.into_iter().enumerate() {
        let frame = generator.frame(128, corruption);
        let report = monitor.observe_bytes(&frame, seq as u32 + 1);
        decisions.push((skip.decide(&report), resend.decide(&report)));
    }

    assert_eq!(
        decisions,
        vec![
            (Disposition::Drop, Disposition::Drop),
            (Disposition::Forward, Disposition::Forward),
            (Disposition::Drop, Disposition::ResendPrevious),
        ]
    );
}
