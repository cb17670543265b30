//! Runner tests driven through `App::run` with a paused clock.
//!
//! Control input arrives over the same line channel the stdin reader feeds;
//! the ticker fires on tokio's virtual clock so a 25-minute interval runs
//! instantly.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;

use tomato::{
    App, IntervalConfig, IntervalKind, NotificationContent, NotificationError, Notifier,
    PlainDisplay, TimerStatus,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Records every notification title.
#[derive(Default)]
struct RecordingNotifier {
    titles: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        self.titles.lock().unwrap().push(content.title.clone());
        Ok(())
    }
}

type TestApp = App<PlainDisplay<Vec<u8>>, RecordingNotifier>;

fn create_app(config: IntervalConfig) -> TestApp {
    App::new(
        config,
        PlainDisplay::new(Vec::new()),
        RecordingNotifier::default(),
    )
}

fn output(app: &TestApp) -> String {
    String::from_utf8(app.display().get_ref().clone()).unwrap()
}

/// Sends each `(delay, line)` pair after sleeping for `delay`, then closes
/// the channel. An empty line only waits.
async fn feed(input: mpsc::UnboundedSender<String>, script: Vec<(Duration, &'static str)>) {
    for (delay, line) in script {
        tokio::time::sleep(delay).await;
        if !line.is_empty() {
            input.send(line.to_string()).unwrap();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_run_ticks_once_per_second() {
    let mut app = create_app(IntervalConfig::default());
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![
        (Duration::ZERO, "start"),
        (Duration::from_millis(3500), "quit"),
    ];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    assert_eq!(app.engine().state().remaining_seconds, 1497);
    let out = output(&app);
    assert!(out.starts_with("Work: 25 min  Break: 5 min\nTimer   0:00\nWork   25:00\n"));
    assert!(out.ends_with("Work   24:57\n"));
}

#[tokio::test(start_paused = true)]
async fn test_run_ends_on_end_of_input() {
    let mut app = create_app(IntervalConfig::default());
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![(Duration::ZERO, "start"), (Duration::from_millis(2500), "")];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    assert!(app.engine().state().is_running());
    assert_eq!(app.engine().state().remaining_seconds, 1498);
}

#[tokio::test(start_paused = true)]
async fn test_paused_timer_does_not_tick() {
    let mut app = create_app(IntervalConfig::default());
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![
        (Duration::ZERO, "start"),
        (Duration::from_millis(2500), "pause"),
        (Duration::from_secs(60), "status"),
        (Duration::ZERO, "quit"),
    ];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    assert_eq!(app.engine().state().status, TimerStatus::Paused);
    assert_eq!(app.engine().state().remaining_seconds, 1498);
    assert!(output(&app).ends_with("Work   24:58  (paused)\nWork   24:58  (paused)\n"));
}

#[tokio::test(start_paused = true)]
async fn test_full_work_interval_chains_into_break() {
    let mut app = create_app(IntervalConfig::default());
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![
        (Duration::ZERO, "start"),
        (Duration::from_millis(1500 * 1000 + 500), "quit"),
    ];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    let state = app.engine().state();
    assert_eq!(state.interval, Some(IntervalKind::ShortBreak));
    assert_eq!(state.repetition_count, 2);
    assert_eq!(state.remaining_seconds, 300);
    assert!(output(&app).ends_with("Break   5:00  ✅\n"));

    assert_eq!(app.settle_notifications().await, 2);
    assert_eq!(
        *app.notifier().titles.lock().unwrap(),
        vec!["Focus Time!", "Break Time!"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_adjustments_rejected_while_running() {
    let mut app = create_app(IntervalConfig::default());
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![
        (Duration::ZERO, "start"),
        (Duration::ZERO, "work +5"),
        (Duration::ZERO, "quit"),
    ];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    assert_eq!(app.engine().config().work_minutes, 25);
    assert!(output(&app).contains("error: "));
}

#[tokio::test(start_paused = true)]
async fn test_reset_then_restart_begins_at_work() {
    let mut app = create_app(IntervalConfig::default().with_work_minutes(1));
    let (input, lines) = mpsc::unbounded_channel();

    let script = vec![
        (Duration::ZERO, "start"),
        (Duration::from_millis(60_500), "reset"),
        (Duration::ZERO, "start"),
        (Duration::ZERO, "quit"),
    ];
    let (result, _) = tokio::join!(app.run(lines), feed(input, script));

    result.unwrap();
    let state = app.engine().state();
    assert_eq!(state.repetition_count, 1);
    assert_eq!(state.interval, Some(IntervalKind::Work));
    assert_eq!(state.remaining_seconds, 60);
}
