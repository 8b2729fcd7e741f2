// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pending-settings dispatch controller.
//!
//! Owns the wanted-settings delta, serializes concurrent intent writers
//! against the periodic send check, and debounces rapid successive edits so
//! the transport sees exactly one hand-off per settled change.
//!
//! The guard covers the whole read-modify-write of an intent application or
//! a send check: the invariant ("a partially-applied intent is never
//! observable as ready to send") spans all settings fields at once, so there
//! is no finer-grained locking. The critical section never awaits; the
//! actual hand-off happens after the guard is released.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::capabilities::Capabilities;
use crate::config::ClimateConfig;
use crate::state::{CurrentSettings, SettingsSnapshot, WantedSettings};
use crate::transport::SettingsSink;
use crate::types::{UnitBridge, snap_setpoint};

use super::intent::ClimateIntent;
use super::swing::reconcile_swing;

/// How often the dispatch loop re-checks the pending settings.
const CHECK_PERIOD: Duration = Duration::from_millis(100);

/// Where a pending change sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// No pending change.
    Clean,
    /// Changed; the debounce window is still open.
    DirtyWaiting,
    /// Debounce elapsed; eligible for send on the next check.
    DirtyReady,
    /// Snapshot handed to the transport, awaiting acknowledgement.
    Sending,
}

/// Serializes control intents against the debounced send check.
///
/// One controller exists per device. Intents from the host enter through
/// [`apply_intent`](Self::apply_intent); a periodic [`tick`](Self::tick)
/// (or the [`run`](Self::run) loop) hands settled changes to the
/// [`SettingsSink`].
#[derive(Debug)]
pub struct DispatchController<S> {
    wanted: Mutex<WantedSettings>,
    /// Room temperature, device-internal Celsius, converted once on entry.
    current_temperature: Mutex<Option<f32>>,
    /// A remote sensor reading waiting to be forwarded to the unit.
    remote_temperature: Mutex<Option<f32>>,
    config: ClimateConfig,
    capabilities: Capabilities,
    bridge: UnitBridge,
    sink: Arc<S>,
}

impl<S: SettingsSink> DispatchController<S> {
    /// Creates a controller with default wanted settings.
    pub fn new(config: ClimateConfig, capabilities: Capabilities, sink: S) -> Self {
        let bridge = UnitBridge::new(config.display_unit);
        Self {
            wanted: Mutex::new(WantedSettings::new()),
            current_temperature: Mutex::new(None),
            remote_temperature: Mutex::new(None),
            config,
            capabilities,
            bridge,
            sink: Arc::new(sink),
        }
    }

    /// Returns the unit capabilities this controller was built with.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the static configuration.
    #[must_use]
    pub fn config(&self) -> &ClimateConfig {
        &self.config
    }

    /// Applies a control intent to the wanted settings.
    ///
    /// The whole application runs under the dispatch guard; however many
    /// fields the intent carries, they coalesce into a single dirty
    /// transition and, once the debounce window settles, a single send.
    ///
    /// `current` is the latest device-reported settings snapshot; the swing
    /// reconciler consults it to preserve static vane positions.
    pub fn apply_intent(&self, intent: &ClimateIntent, current: &CurrentSettings) {
        let mut wanted = self.wanted.lock();

        // Contract check: the guard serializes intent application against
        // the send check, so an in-flight snapshot must never be observable
        // here. Non-fatal; the mutation below resets the flag either way.
        if wanted.has_been_sent {
            tracing::error!(
                "Guard contract violation: wanted settings marked as sent \
                 while a new intent is being applied"
            );
        }

        let mut updated = false;

        if let Some(mode) = intent.mode {
            tracing::debug!(mode = %mode, "Mode change requested");
            match mode.device_code() {
                Some(code) => {
                    wanted.set_mode(code);
                    wanted.set_power("ON");
                }
                None => wanted.set_power("OFF"),
            }
            updated = true;
        }

        if let Some(target) = intent.target_temperature {
            // The intent carries the host's display unit; convert exactly
            // once at this boundary. Nothing downstream converts again.
            let internal = self.bridge.from_display(target);
            wanted.temperature = snap_setpoint(self.config.temp_mode, internal);
            tracing::info!(
                target = internal,
                snapped = wanted.temperature,
                "Setting heat pump setpoint"
            );
            updated = true;
        }

        if let Some(fan) = intent.fan_mode {
            tracing::debug!(fan = %fan, "Fan change requested");
            match fan.device_code() {
                Some(code) => wanted.set_fan(code),
                None => wanted.set_power("OFF"),
            }
            updated = true;
        }

        if let Some(swing) = intent.swing_mode {
            tracing::debug!(swing = %swing, "Swing change requested");
            reconcile_swing(swing, &mut wanted, current, &self.capabilities);
            updated = true;
        }

        if updated {
            wanted.mark_changed(Instant::now());
            tracing::debug!(wanted = %wanted.summary(), "Intent applied, settings dirty");
        }
    }

    /// Checks the pending settings and hands them off once settled.
    ///
    /// The eligibility decision and the in-flight marking happen under the
    /// guard; the hand-off itself runs after release. A failed hand-off
    /// clears the in-flight mark so the next settled window retries.
    pub async fn tick(&self) {
        let snapshot = {
            let mut wanted = self.wanted.lock();
            if !self.eligible_for_send(&wanted) {
                return;
            }
            wanted.has_been_sent = true;
            wanted.snapshot()
        };

        tracing::info!("Wanted settings have settled, sending them to the heat pump");
        if let Err(err) = self.sink.send_wanted_settings(snapshot).await {
            tracing::warn!(error = %err, "Settings hand-off failed, will retry");
            self.wanted.lock().has_been_sent = false;
        }
    }

    fn eligible_for_send(&self, wanted: &WantedSettings) -> bool {
        if !wanted.has_changed || wanted.has_been_sent {
            return false;
        }
        wanted
            .last_change
            .is_some_and(|last| last.elapsed() >= self.config.debounce_delay)
    }

    /// Clears the pending flags once the transport confirms delivery.
    ///
    /// Called by the transport collaborator when the device acknowledges the
    /// settings (or the send is otherwise known complete). If a new intent
    /// arrived after the hand-off, `has_been_sent` is already cleared and
    /// the acknowledgement is for a stale snapshot; the dirty state is kept
    /// so the newer change still goes out on its own settled window.
    pub fn acknowledge(&self) {
        let mut wanted = self.wanted.lock();
        if wanted.has_been_sent {
            wanted.has_changed = false;
            wanted.has_been_sent = false;
        } else if wanted.has_changed {
            tracing::debug!("Acknowledgement for a stale snapshot; newer change stays pending");
        }
    }

    /// Returns where the pending change currently sits.
    #[must_use]
    pub fn state(&self) -> DispatchState {
        let wanted = self.wanted.lock();
        if !wanted.has_changed {
            return DispatchState::Clean;
        }
        if wanted.has_been_sent {
            return DispatchState::Sending;
        }
        let settled = wanted
            .last_change
            .is_some_and(|last| last.elapsed() >= self.config.debounce_delay);
        if settled {
            DispatchState::DirtyReady
        } else {
            DispatchState::DirtyWaiting
        }
    }

    /// Returns a copy of the current wanted settings.
    #[must_use]
    pub fn wanted_snapshot(&self) -> SettingsSnapshot {
        self.wanted.lock().snapshot()
    }

    /// Records the room temperature, converting from the display unit once.
    pub fn set_current_temperature(&self, display_value: f32) {
        *self.current_temperature.lock() = Some(self.bridge.from_display(display_value));
    }

    /// Returns the room temperature in device-internal Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f32> {
        *self.current_temperature.lock()
    }

    /// Records a remote sensor reading to forward to the unit, converting
    /// from the display unit once.
    pub fn set_remote_temperature(&self, display_value: f32) {
        let internal = self.bridge.from_display(display_value);
        tracing::debug!(value = internal, "Setting remote temperature");
        *self.remote_temperature.lock() = Some(internal);
    }

    /// Takes the pending remote sensor reading, if any.
    ///
    /// The transport collaborator calls this when building its next frame;
    /// taking the value clears the pending state.
    #[must_use]
    pub fn take_remote_temperature(&self) -> Option<f32> {
        self.remote_temperature.lock().take()
    }

    /// Drives [`tick`](Self::tick) on a fixed period until the task is
    /// dropped.
    ///
    /// Spawn this on the runtime next to the transport task:
    ///
    /// ```ignore
    /// let controller = Arc::new(DispatchController::new(config, caps, sink));
    /// tokio::spawn(Arc::clone(&controller).run());
    /// ```
    pub async fn run(self: Arc<Self>) {
        let mut interval = tokio::time::interval(CHECK_PERIOD);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::types::{ClimateMode, FanMode, SwingMode};

    /// Sink that records every snapshot it receives.
    #[derive(Debug, Default)]
    struct RecordingSink {
        sent: Mutex<Vec<SettingsSnapshot>>,
        fail_next: Mutex<bool>,
    }

    impl SettingsSink for RecordingSink {
        async fn send_wanted_settings(
            &self,
            snapshot: SettingsSnapshot,
        ) -> Result<(), TransportError> {
            if std::mem::take(&mut *self.fail_next.lock()) {
                return Err(TransportError::NotConnected);
            }
            self.sent.lock().push(snapshot);
            Ok(())
        }
    }

    fn controller(config: ClimateConfig) -> DispatchController<RecordingSink> {
        DispatchController::new(config, Capabilities::heat_cool(), RecordingSink::default())
    }

    fn sent_count(ctrl: &DispatchController<RecordingSink>) -> usize {
        ctrl.sink.sent.lock().len()
    }

    #[tokio::test(start_paused = true)]
    async fn multi_field_intent_coalesces_into_one_send() {
        let ctrl = controller(ClimateConfig::default());
        let intent = ClimateIntent::new()
            .with_mode(ClimateMode::Cool)
            .with_target_temperature(22.0)
            .with_fan_mode(FanMode::Medium);

        ctrl.apply_intent(&intent, &CurrentSettings::default());
        assert_eq!(ctrl.state(), DispatchState::DirtyWaiting);

        // Inside the debounce window nothing is sent.
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 0);

        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(ctrl.state(), DispatchState::DirtyReady);

        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 1);
        assert_eq!(ctrl.state(), DispatchState::Sending);

        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert_eq!(snapshot.mode, "COOL");
        assert_eq!(snapshot.power, "ON");
        assert_eq!(snapshot.fan, "2");
        assert!((snapshot.temperature - 22.0).abs() < 1e-4);

        // Further ticks do not resend while the hand-off is unacknowledged.
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 1);

        ctrl.acknowledge();
        assert_eq!(ctrl.state(), DispatchState::Clean);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_intents_reset_the_debounce_window() {
        let ctrl = controller(ClimateConfig::default());

        ctrl.apply_intent(
            &ClimateIntent::new().with_mode(ClimateMode::Heat),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(300)).await;

        // Second intent before the window closes re-anchors it.
        ctrl.apply_intent(
            &ClimateIntent::new().with_target_temperature(21.0),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(300)).await;

        // 600 ms since the first intent, but only 300 ms since the second.
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 0);

        tokio::time::advance(Duration::from_millis(300)).await;
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 1);

        // One send carrying both changes.
        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert_eq!(snapshot.mode, "HEAT");
        assert!((snapshot.temperature - 21.0).abs() < 1e-4);
    }

    #[tokio::test(start_paused = true)]
    async fn intent_during_ack_window_survives_acknowledge() {
        let ctrl = controller(ClimateConfig::default());

        ctrl.apply_intent(
            &ClimateIntent::new().with_mode(ClimateMode::Cool),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 1);

        // New intent lands while the first hand-off awaits confirmation.
        ctrl.apply_intent(
            &ClimateIntent::new().with_mode(ClimateMode::Heat),
            &CurrentSettings::default(),
        );

        // The confirmation is for the stale snapshot; the newer change must
        // stay pending.
        ctrl.acknowledge();
        assert_eq!(ctrl.state(), DispatchState::DirtyWaiting);

        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 2);
        let snapshot = ctrl.sink.sent.lock()[1].clone();
        assert_eq!(snapshot.mode, "HEAT");

        ctrl.acknowledge();
        assert_eq!(ctrl.state(), DispatchState::Clean);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_hand_off_retries_on_next_window() {
        let ctrl = controller(ClimateConfig::default());
        *ctrl.sink.fail_next.lock() = true;

        ctrl.apply_intent(
            &ClimateIntent::new().with_mode(ClimateMode::Dry),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(600)).await;

        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 0);
        // Still dirty, in-flight mark cleared.
        assert_eq!(ctrl.state(), DispatchState::DirtyReady);

        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn off_mode_maps_to_power_off() {
        let ctrl = controller(ClimateConfig::default());
        ctrl.apply_intent(
            &ClimateIntent::new().with_mode(ClimateMode::Off),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;

        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert_eq!(snapshot.power, "OFF");
        // Mode code is left as-is; power alone takes the unit down.
        assert_eq!(snapshot.mode, "HEAT");
    }

    #[tokio::test(start_paused = true)]
    async fn fan_off_maps_to_power_off() {
        let ctrl = controller(ClimateConfig::default());
        ctrl.apply_intent(
            &ClimateIntent::new().with_fan_mode(FanMode::Off),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;

        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert_eq!(snapshot.power, "OFF");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_intent_stays_clean() {
        let ctrl = controller(ClimateConfig::default());
        ctrl.apply_intent(&ClimateIntent::new(), &CurrentSettings::default());

        assert_eq!(ctrl.state(), DispatchState::Clean);
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;
        assert_eq!(sent_count(&ctrl), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn swing_intent_consults_reported_state() {
        let ctrl = controller(ClimateConfig::default());
        let current = CurrentSettings {
            vane: "SWING".to_string(),
            wide_vane: "SWING".to_string(),
            ..Default::default()
        };

        ctrl.apply_intent(
            &ClimateIntent::new().with_swing_mode(SwingMode::Vertical),
            &current,
        );
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;

        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert_eq!(snapshot.vane, "SWING");
        assert_eq!(snapshot.wide_vane, "|");
    }

    #[tokio::test(start_paused = true)]
    async fn setpoint_converts_from_display_unit_once() {
        let config = ClimateConfig {
            display_unit: crate::types::DisplayUnit::Fahrenheit,
            temp_mode: crate::types::TempMode::Continuous,
            ..Default::default()
        };
        let ctrl = controller(config);

        // 71.6 °F is exactly 22.0 °C.
        ctrl.apply_intent(
            &ClimateIntent::new().with_target_temperature(71.6),
            &CurrentSettings::default(),
        );
        tokio::time::advance(Duration::from_millis(600)).await;
        ctrl.tick().await;

        let snapshot = ctrl.sink.sent.lock()[0].clone();
        assert!((snapshot.temperature - 22.0).abs() < 1e-3);
    }

    #[tokio::test]
    async fn remote_temperature_is_taken_once() {
        let ctrl = controller(ClimateConfig::default());
        ctrl.set_remote_temperature(19.5);

        assert_eq!(ctrl.take_remote_temperature(), Some(19.5));
        assert_eq!(ctrl.take_remote_temperature(), None);
    }

    #[tokio::test]
    async fn current_temperature_converts_once() {
        let config = ClimateConfig {
            display_unit: crate::types::DisplayUnit::Fahrenheit,
            ..Default::default()
        };
        let ctrl = controller(config);

        ctrl.set_current_temperature(68.0);
        let stored = ctrl.current_temperature().unwrap();
        assert!((stored - 20.0).abs() < 1e-4);
    }
}
