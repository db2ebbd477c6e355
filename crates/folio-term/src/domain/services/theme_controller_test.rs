use std::sync::atomic::{AtomicU32, Ordering};

use super::*;

struct FixedClock {
    hour: AtomicU32,
}

impl FixedClock {
    fn at(hour: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock {
            hour: AtomicU32::new(hour),
        })
    }

    fn set(&self, hour: u32) {
        self.hour.store(hour, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.hour.load(Ordering::SeqCst)
    }
}

#[test]
fn it_starts_from_the_clock_in_auto_mode() {
    let controller = ThemeController::new(FixedClock::at(8), ThemePreference::Auto);

    assert!(controller.is_auto_mode());
    assert_eq!(controller.theme(), Theme::Minimal);
    assert_eq!(controller.scope().active(), Some("theme-minimal"));
    assert_eq!(controller.status_label(), "Auto Mode");
}

#[test]
fn it_starts_frozen_with_a_manual_preference() {
    let controller = ThemeController::new(
        FixedClock::at(8),
        ThemePreference::Manual(Theme::Cyberpunk),
    );

    assert!(!controller.is_auto_mode());
    assert_eq!(controller.theme(), Theme::Cyberpunk);
    assert_eq!(controller.scope().active(), Some("theme-cyberpunk"));
    assert_eq!(controller.status_label(), "Cyberpunk Theme");
}

#[test]
fn it_labels_manual_themes_by_their_short_name() {
    let controller = ThemeController::new(
        FixedClock::at(8),
        ThemePreference::Manual(Theme::Glassmorphism),
    );

    assert_eq!(controller.status_label(), "Glass Theme");
}

#[test]
fn it_drops_manual_themes_in_auto_mode() {
    let mut controller = ThemeController::new(FixedClock::at(14), ThemePreference::Auto);

    controller.set_theme(Theme::Dark);

    assert_eq!(controller.theme(), Theme::Glassmorphism);
}

#[test]
fn it_follows_the_clock_only_in_auto_mode() {
    let clock = FixedClock::at(8);
    let mut controller = ThemeController::new(clock.clone(), ThemePreference::Auto);

    clock.set(18);
    controller.reevaluate();
    assert_eq!(controller.theme(), Theme::Cyberpunk);

    controller.toggle_auto_mode();
    clock.set(22);
    controller.reevaluate();
    assert_eq!(controller.theme(), Theme::Cyberpunk);
}

#[test]
fn it_round_trips_through_manual_mode() {
    let clock = FixedClock::at(14);
    let mut controller = ThemeController::new(clock.clone(), ThemePreference::Auto);
    assert_eq!(controller.theme(), Theme::Glassmorphism);

    controller.toggle_auto_mode();
    assert!(!controller.is_auto_mode());
    assert_eq!(controller.theme(), Theme::Glassmorphism);

    controller.set_theme(Theme::Dark);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.scope().active(), Some("theme-dark"));

    controller.toggle_auto_mode();
    assert!(controller.is_auto_mode());
    assert_eq!(controller.theme(), Theme::Glassmorphism);
    assert_eq!(controller.scope().active(), Some("theme-glassmorphism"));
}

#[tokio::test(start_paused = true)]
async fn test_poller_ticks_every_minute_in_auto_mode() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = ThemeController::new(FixedClock::at(9), ThemePreference::Auto).with_poller(tx);
    assert!(controller.is_polling());

    tokio::time::sleep(Duration::from_secs(59)).await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(matches!(rx.try_recv(), Ok(Event::ThemeTick)));
}

#[tokio::test(start_paused = true)]
async fn test_poller_stops_when_auto_mode_turns_off() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut controller =
        ThemeController::new(FixedClock::at(9), ThemePreference::Auto).with_poller(tx);

    controller.toggle_auto_mode();
    assert!(!controller.is_polling());

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert!(rx.try_recv().is_err());

    controller.toggle_auto_mode();
    assert!(controller.is_polling());
}

#[tokio::test(start_paused = true)]
async fn test_manual_preference_does_not_poll() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let controller = ThemeController::new(
        FixedClock::at(9),
        ThemePreference::Manual(Theme::Minimal),
    )
    .with_poller(tx);

    assert!(!controller.is_polling());
}
