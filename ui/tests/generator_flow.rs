//! End-to-end behaviour of the generator session, including the auto-generate
//! timer loop driven on a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use ui::core::settings::AppSettings;
use ui::core::timing;
use ui::tools::generator::{CharClass, GeneratorSession, Output, EMPTY_CHARSET_MESSAGE, SYMBOLS};

fn session() -> GeneratorSession {
    GeneratorSession::new(&AppSettings::default())
}

#[test]
fn enabled_classes_bound_every_character() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = session();
    session.toggle(CharClass::Uppercase, false);
    session.toggle(CharClass::Lowercase, false);
    session.toggle(CharClass::Numbers, false);
    session.toggle(CharClass::Symbols, true);
    session.set_length(64);

    let entry = session.generate(&mut rng).unwrap();
    assert_eq!(entry.value.chars().count(), 64);
    assert!(entry.value.chars().all(|c| SYMBOLS.contains(c)));
}

#[test]
fn disabling_everything_shows_message_without_history() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = session();
    for class in CharClass::ALL {
        session.toggle(class, false);
    }

    assert!(session.generate(&mut rng).is_err());
    assert_eq!(session.output, Output::Message(EMPTY_CHARSET_MESSAGE.to_string()));
    assert!(session.history.is_empty());
}

#[test]
fn eleven_generations_keep_ten_newest_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = session();
    let mut produced = Vec::new();
    for _ in 0..11 {
        produced.push(session.generate(&mut rng).unwrap().value);
    }

    let kept: Vec<String> = session.history.iter().map(|e| e.value.clone()).collect();
    let expected: Vec<String> = produced[1..].iter().rev().cloned().collect();
    assert_eq!(kept, expected);
}

#[test]
fn clear_history_after_many_generations() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut session = session();
    for _ in 0..4 {
        session.generate(&mut rng).unwrap();
    }
    session.clear_history();
    assert!(session.history.is_empty());
    assert!(matches!(session.output, Output::Generated(_)));
}

fn history_len(session: &Arc<Mutex<GeneratorSession>>) -> usize {
    session.lock().unwrap().history.len()
}

fn spawn_auto_loop(
    session: &Arc<Mutex<GeneratorSession>>,
    epoch: u64,
) -> tokio::task::JoinHandle<()> {
    let shared = session.clone();
    let mut rng = StdRng::seed_from_u64(epoch);
    let period = AppSettings::default().auto_generate_interval_ms;
    tokio::spawn(timing::run_interval(period, move || {
        shared.lock().unwrap().auto_tick(epoch, &mut rng)
    }))
}

#[tokio::test(start_paused = true)]
async fn auto_generate_adds_one_entry_per_interval_until_disabled() {
    let session = Arc::new(Mutex::new(session()));
    let epoch = session.lock().unwrap().auto.enable();
    let handle = spawn_auto_loop(&session, epoch);

    tokio::time::sleep(Duration::from_millis(6_100)).await;
    assert_eq!(history_len(&session), 3);

    session.lock().unwrap().auto.disable();
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(history_len(&session), 3);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_further_entries() {
    let session = Arc::new(Mutex::new(session()));
    let epoch = session.lock().unwrap().auto.enable();
    let handle = spawn_auto_loop(&session, epoch);

    tokio::time::sleep(Duration::from_millis(4_100)).await;
    assert_eq!(history_len(&session), 2);

    // View teardown cancels the timer task.
    handle.abort();
    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(history_len(&session), 2);
}

#[tokio::test(start_paused = true)]
async fn reenabling_never_stacks_timers() {
    let session = Arc::new(Mutex::new(session()));
    let first = session.lock().unwrap().auto.enable();
    let old = spawn_auto_loop(&session, first);

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    let second = session.lock().unwrap().auto.enable();
    let _current = spawn_auto_loop(&session, second);

    // Old loop wakes at 2s, sees a stale epoch and exits; new loop ticks at 3s, 5s, 7s.
    tokio::time::sleep(Duration::from_millis(6_500)).await;
    assert_eq!(history_len(&session), 3);
    assert!(old.is_finished());
}
