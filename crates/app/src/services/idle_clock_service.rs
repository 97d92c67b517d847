//! Idle clock controller — clock tick and inactivity timeout.
//!
//! Two timers share the panel task:
//! - a repeating tick that refreshes the time and date, whatever screen is
//!   active;
//! - a single-shot inactivity timer that is pushed back on every activity
//!   and, when it finally fires, sends the panel to the idle screen.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep};

use microwave_domain::clock::{ClockReading, TimeFormat};
use microwave_domain::event::PanelEvent;
use microwave_domain::idle::{IdleState, IdleTracker};

use crate::ports::{Clock, EventPublisher};

/// Timer settings for the [`IdleClockController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleClockConfig {
    /// Period of the clock refresh.
    pub tick_interval: Duration,
    /// Inactivity delay before going idle.
    pub idle_timeout: Duration,
    /// Time-of-day preference.
    pub time_format: TimeFormat,
}

impl Default for IdleClockConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
            idle_timeout: Duration::from_millis(10_000),
            time_format: TimeFormat::TwelveHour,
        }
    }
}

/// Which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    InactivityTimeout,
}

/// Single-shot timer with restart as its only cancellation mode.
struct InactivityTimer {
    delay: Duration,
    sleep: Pin<Box<Sleep>>,
    armed: bool,
}

impl InactivityTimer {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            sleep: Box::pin(tokio::time::sleep(delay)),
            armed: false,
        }
    }

    /// Cancel any pending fire and schedule a new one `delay` from now.
    fn restart(&mut self) {
        self.sleep.as_mut().reset(Instant::now() + self.delay);
        self.armed = true;
    }

    /// Resolve once the armed deadline passes. Never resolves while disarmed.
    async fn expired(&mut self) {
        if !self.armed {
            future::pending::<()>().await;
        }
        self.sleep.as_mut().await;
        self.armed = false;
    }
}

/// Drives the idle screen: clock refresh and awake/idle switching.
///
/// Must be created inside a tokio runtime.
pub struct IdleClockController<P, C> {
    tracker: IdleTracker,
    publisher: P,
    clock: C,
    time_format: TimeFormat,
    tick: Interval,
    inactivity: InactivityTimer,
}

impl<P, C> IdleClockController<P, C>
where
    P: EventPublisher,
    C: Clock,
{
    /// Create a controller in [`IdleState::Awake`] with the inactivity timer disarmed.
    pub fn new(publisher: P, clock: C, config: IdleClockConfig) -> Self {
        let mut tick = tokio::time::interval_at(
            Instant::now() + config.tick_interval,
            config.tick_interval,
        );
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            tracker: IdleTracker::new(),
            publisher,
            clock,
            time_format: config.time_format,
            tick,
            inactivity: InactivityTimer::new(config.idle_timeout),
        }
    }

    #[must_use]
    pub fn state(&self) -> IdleState {
        self.tracker.state()
    }

    /// Publish the current time and date once and arm the inactivity timer.
    pub fn start(&mut self) {
        tracing::info!(time_format = self.time_format.as_setting(), "idle clock started");
        self.publish_reading();
        self.inactivity.restart();
    }

    /// Clock tick: refresh time and date regardless of [`IdleState`].
    pub fn on_tick(&mut self) {
        self.publish_reading();
    }

    /// User activity: push the inactivity deadline back and wake up if idle.
    pub fn on_activity(&mut self) {
        self.inactivity.restart();
        tracing::debug!("inactivity timer restarted");
        if let Some(screen) = self.tracker.activity() {
            tracing::info!("user wake");
            self.publisher.publish(PanelEvent::SwitchScreen { screen });
        }
    }

    /// The inactivity delay elapsed without activity.
    pub fn on_inactivity_timeout(&mut self) {
        match self.tracker.timeout() {
            Some(screen) => {
                tracing::info!("going idle");
                self.publisher.publish(PanelEvent::SwitchScreen { screen });
            }
            None => tracing::warn!("inactivity timeout while already idle"),
        }
    }

    /// Wait for the next timer to fire.
    ///
    /// Cancel safe: dropping the future leaves both timers untouched.
    pub async fn next_timer(&mut self) -> TimerEvent {
        tokio::select! {
            _ = self.tick.tick() => TimerEvent::Tick,
            () = self.inactivity.expired() => TimerEvent::InactivityTimeout,
        }
    }

    /// Dispatch a fired timer to its handler.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => self.on_tick(),
            TimerEvent::InactivityTimeout => self.on_inactivity_timeout(),
        }
    }

    fn publish_reading(&self) {
        let reading = ClockReading::at(self.clock.now(), self.time_format);
        tracing::trace!(time = %reading.time, date = %reading.date, "clock updated");
        self.publisher
            .publish(PanelEvent::TimeChanged { text: reading.time });
        self.publisher
            .publish(PanelEvent::DateChanged { text: reading.date });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::InProcessEventBus;
    use chrono::{NaiveDate, NaiveDateTime};
    use microwave_domain::idle::Screen;
    use tokio::sync::broadcast;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2022, 3, 3)
                .unwrap()
                .and_hms_opt(14, 5, 0)
                .unwrap(),
        )
    }

    fn drain(rx: &mut broadcast::Receiver<PanelEvent>) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn screen_switches(events: &[PanelEvent]) -> Vec<Screen> {
        events
            .iter()
            .filter_map(|e| match e {
                PanelEvent::SwitchScreen { screen } => Some(*screen),
                _ => None,
            })
            .collect()
    }

    /// Run the controller's timers until `duration` of virtual time passed.
    async fn run_for<P: EventPublisher, C: Clock>(
        controller: &mut IdleClockController<P, C>,
        duration: Duration,
    ) {
        let deadline = Instant::now() + duration;
        loop {
            tokio::select! {
                event = controller.next_timer() => controller.handle_timer(event),
                () = tokio::time::sleep_until(deadline) => break,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_publish_time_and_date_on_start() {
        let bus = InProcessEventBus::new(64);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());

        controller.start();

        assert_eq!(
            drain(&mut rx),
            vec![
                PanelEvent::TimeChanged {
                    text: "02:05".to_string()
                },
                PanelEvent::DateChanged {
                    text: "Thu Mar 03".to_string()
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_tick_every_second_while_awake_and_idle() {
        let bus = InProcessEventBus::new(256);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.start();
        drain(&mut rx);

        run_for(&mut controller, Duration::from_millis(20_500)).await;

        let events = drain(&mut rx);
        let ticks = events
            .iter()
            .filter(|e| matches!(e, PanelEvent::TimeChanged { .. }))
            .count();
        assert_eq!(ticks, 20);
        assert_eq!(controller.state(), IdleState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn should_go_idle_exactly_once_after_timeout() {
        let bus = InProcessEventBus::new(256);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.start();

        run_for(&mut controller, Duration::from_millis(9_900)).await;
        assert_eq!(controller.state(), IdleState::Awake);

        run_for(&mut controller, Duration::from_millis(30_000)).await;
        assert_eq!(controller.state(), IdleState::Idle);
        assert_eq!(screen_switches(&drain(&mut rx)), vec![Screen::Idle]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stay_awake_while_activity_continues() {
        let bus = InProcessEventBus::new(1024);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.start();

        for _ in 0..10 {
            run_for(&mut controller, Duration::from_millis(9_000)).await;
            controller.on_activity();
            assert_eq!(controller.state(), IdleState::Awake);
        }

        assert!(screen_switches(&drain(&mut rx)).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_stack_pending_timeouts() {
        let bus = InProcessEventBus::new(256);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.start();

        controller.on_activity();
        run_for(&mut controller, Duration::from_millis(5_000)).await;
        controller.on_activity();
        run_for(&mut controller, Duration::from_millis(9_000)).await;
        assert_eq!(controller.state(), IdleState::Awake);

        run_for(&mut controller, Duration::from_millis(2_000)).await;
        assert_eq!(controller.state(), IdleState::Idle);

        run_for(&mut controller, Duration::from_millis(30_000)).await;
        assert_eq!(screen_switches(&drain(&mut rx)), vec![Screen::Idle]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_wake_to_main_screen_on_activity_when_idle() {
        let bus = InProcessEventBus::new(256);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.start();
        run_for(&mut controller, Duration::from_millis(10_500)).await;

        controller.on_activity();

        assert_eq!(controller.state(), IdleState::Awake);
        assert_eq!(
            screen_switches(&drain(&mut rx)),
            vec![Screen::Idle, Screen::Main]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_treat_timeout_while_idle_as_noop() {
        let bus = InProcessEventBus::new(64);
        let mut rx = bus.subscribe();
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());
        controller.on_inactivity_timeout();
        drain(&mut rx);

        controller.on_inactivity_timeout();

        assert_eq!(controller.state(), IdleState::Idle);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_time_out_before_start() {
        let bus = InProcessEventBus::new(256);
        let mut controller = IdleClockController::new(&bus, clock(), IdleClockConfig::default());

        run_for(&mut controller, Duration::from_millis(60_000)).await;

        assert_eq!(controller.state(), IdleState::Awake);
    }

    #[tokio::test(start_paused = true)]
    async fn should_honour_custom_intervals() {
        let bus = InProcessEventBus::new(256);
        let mut rx = bus.subscribe();
        let config = IdleClockConfig {
            tick_interval: Duration::from_millis(250),
            idle_timeout: Duration::from_millis(1_000),
            time_format: TimeFormat::TwentyFourHour,
        };
        let mut controller = IdleClockController::new(&bus, clock(), config);
        controller.start();
        drain(&mut rx);

        run_for(&mut controller, Duration::from_millis(1_100)).await;

        let events = drain(&mut rx);
        assert_eq!(controller.state(), IdleState::Idle);
        assert!(events.contains(&PanelEvent::TimeChanged {
            text: "02:05".to_string()
        }));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, PanelEvent::DateChanged { .. }))
                .count(),
            4
        );
    }
}
