// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for resynchronization after a reconnect.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lutron_hvac::event::HvacEvent;
use lutron_hvac::status::action;
use lutron_hvac::types::{CallStatus, DegreesF, FanMode, OperatingMode};
use lutron_hvac::{
    Error, Hvac, HvacState, IntegrationId, ProtocolError, ResyncReport, StatusSource,
};

/// Controller stand-in answering snapshot requests from a fixed script.
struct ScriptedController {
    lines: Vec<String>,
    requests: AtomicUsize,
}

impl ScriptedController {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl StatusSource for ScriptedController {
    async fn request_status(&self, _device_id: i32) -> Result<Vec<String>, ProtocolError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.lines.clone())
    }
}

/// Controller stand-in whose connection is down.
struct OfflineController;

impl StatusSource for OfflineController {
    async fn request_status(&self, _device_id: i32) -> Result<Vec<String>, ProtocolError> {
        Err(ProtocolError::ConnectionFailed("socket closed".to_string()))
    }
}

/// Controller stand-in that never answers, bounded by a request timeout.
struct UnresponsiveController {
    timeout: Duration,
}

impl StatusSource for UnresponsiveController {
    async fn request_status(&self, _device_id: i32) -> Result<Vec<String>, ProtocolError> {
        tokio::time::timeout(self.timeout, std::future::pending::<Vec<String>>())
            .await
            .map_err(|_| {
                ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
            })
    }
}

/// Controller stand-in that answers one query per snapshot action.
struct PerActionController;

impl StatusSource for PerActionController {
    async fn request_status(&self, device_id: i32) -> Result<Vec<String>, ProtocolError> {
        assert_eq!(device_id, 8);
        Ok(action::SNAPSHOT
            .iter()
            .map(|code| match *code {
                action::CURRENT_TEMPERATURE => "1,069.50".to_string(),
                action::SETPOINTS => "2,67.00,77.00".to_string(),
                action::CALL_STATUS => "14,5".to_string(),
                other => format!("{other},2"),
            })
            .collect())
    }
}

fn f(value: f64) -> DegreesF {
    DegreesF::new(value)
}

#[tokio::test]
async fn reconnect_replays_full_snapshot() {
    let controller = Arc::new(ScriptedController::new(&[
        "1,070.00", "2,68.00,74.00", "3,3", "4,1", "5,2", "14,6",
    ]));
    let hvac = Hvac::builder(IntegrationId::new(4))
        .with_status_source(Arc::clone(&controller))
        .build();

    hvac.reconnect().await;

    assert_eq!(controller.requests(), 1);
    let state = hvac.state();
    assert_eq!(state.current_temperature(), f(70.0));
    assert_eq!(state.setpoints(), (f(68.0), f(74.0)));
    assert_eq!(state.operating_mode(), OperatingMode::Cool);
    assert_eq!(state.fan_mode(), FanMode::Auto);
    assert!(state.eco_enabled());
    assert_eq!(state.call_status(), CallStatus::CoolStage1);
}

#[tokio::test]
async fn resync_overwrites_stale_values() {
    let hvac = Hvac::builder(IntegrationId::new(5))
        .with_status_source(ScriptedController::new(&["3,1", "5,1"]))
        .build();

    hvac.handle_event("3,2").unwrap();
    hvac.handle_event("5,2").unwrap();
    hvac.handle_event("1,66").unwrap();

    let report = hvac.resync().await.unwrap();

    assert_eq!(report.applied, 2);
    assert_eq!(report.changed, 2);
    let state = hvac.state();
    assert_eq!(state.operating_mode(), OperatingMode::Off);
    assert!(!state.eco_enabled());
    // Fields missing from the snapshot keep their last value
    assert_eq!(state.current_temperature(), f(66.0));
}

#[tokio::test]
async fn resync_reports_every_outcome() {
    let hvac = Hvac::builder(IntegrationId::new(6))
        .with_status_source(ScriptedController::new(&[
            "1,71", "1,71", "15,21.5", "42,x", "2,abc,70", "4,2",
        ]))
        .build();

    let report = hvac.resync().await.unwrap();

    assert_eq!(
        report,
        ResyncReport {
            applied: 3,
            changed: 2,
            discarded: 1,
            ignored: 1,
            rejected: 1,
        }
    );
    assert_eq!(report.total(), 6);

    // The malformed line did not stop the lines after it
    assert_eq!(hvac.state().fan_mode(), FanMode::On);
    assert_eq!(hvac.state().setpoints(), (f(0.0), f(0.0)));
}

#[tokio::test]
async fn resync_publishes_changes_then_summary() {
    let hvac = Hvac::builder(IntegrationId::new(7))
        .with_status_source(ScriptedController::new(&["1,70", "5,2"]))
        .build();
    let mut rx = hvac.subscribe();

    hvac.reconnect().await;

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events.len(), 3);
    assert!(events[0].is_state_change());
    assert!(events[1].is_state_change());
    match &events[2] {
        HvacEvent::Resynced { device_id, report } => {
            assert_eq!(*device_id, 7);
            assert_eq!(report.applied, 2);
        }
        other => panic!("expected Resynced, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_resync_leaves_state_untouched() {
    let hvac = Hvac::builder(IntegrationId::new(9))
        .with_status_source(OfflineController)
        .build();
    hvac.handle_event("2,64,76").unwrap();
    let before = hvac.state();
    let mut rx = hvac.subscribe();

    let err = hvac.resync().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::ConnectionFailed(_))
    ));
    assert_eq!(hvac.state(), before);

    match rx.try_recv().unwrap() {
        HvacEvent::ResyncFailed { device_id, error } => {
            assert_eq!(device_id, 9);
            assert_eq!(error, ProtocolError::ConnectionFailed("socket closed".to_string()));
        }
        other => panic!("expected ResyncFailed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn unanswered_snapshot_times_out() {
    let hvac = Hvac::builder(IntegrationId::new(13))
        .with_status_source(UnresponsiveController {
            timeout: Duration::from_millis(750),
        })
        .build();
    let mut rx = hvac.subscribe();

    let err = hvac.resync().await.unwrap_err();
    assert!(matches!(err, Error::Protocol(ProtocolError::Timeout(750))));
    assert_eq!(err.to_string(), "protocol error: request timed out after 750 ms");
    assert_eq!(hvac.state(), HvacState::new());

    assert!(matches!(
        rx.try_recv().unwrap(),
        HvacEvent::ResyncFailed {
            device_id: 13,
            error: ProtocolError::Timeout(750),
        }
    ));
}

#[tokio::test]
async fn reconnect_swallows_failures() {
    let hvac = Hvac::builder(IntegrationId::new(10))
        .with_status_source(OfflineController)
        .build();

    // Must not panic or propagate
    hvac.reconnect().await;
    assert_eq!(hvac.state(), HvacState::new());
}

#[tokio::test]
async fn reconnect_without_source_is_harmless() {
    let hvac = Hvac::new(IntegrationId::new(11));
    hvac.handle_event("4,3").unwrap();

    hvac.reconnect().await;

    assert_eq!(hvac.state().fan_mode(), FanMode::Cycler);
}

#[tokio::test]
async fn every_reconnect_requests_a_new_snapshot() {
    let controller = Arc::new(ScriptedController::new(&["1,70"]));
    let hvac = Hvac::builder(IntegrationId::new(12))
        .with_status_source(Arc::clone(&controller))
        .build();

    hvac.reconnect().await;
    hvac.reconnect().await;

    assert_eq!(controller.requests(), 2);
    assert_eq!(hvac.state().current_temperature(), f(70.0));
}

#[tokio::test]
async fn snapshot_built_from_action_queries() {
    let hvac = Hvac::builder(IntegrationId::new(8))
        .with_status_source(PerActionController)
        .build();

    let report = hvac.resync().await.unwrap();

    assert_eq!(report.applied, action::SNAPSHOT.len());
    let state = hvac.state();
    assert_eq!(state.current_temperature(), f(69.5));
    assert_eq!(state.setpoints(), (f(67.0), f(77.0)));
    assert_eq!(state.operating_mode(), OperatingMode::Heat);
    assert_eq!(state.fan_mode(), FanMode::On);
    assert!(state.eco_enabled());
    assert_eq!(state.call_status(), CallStatus::IdleLastCool);
}
