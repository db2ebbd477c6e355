use super::*;

#[test]
fn it_saturates_progress_at_one_hundred() {
    let mut progress = Progress::default();
    assert_eq!(progress.value(), 0);

    for _ in 0..100 {
        progress.advance();
    }
    assert_eq!(progress.value(), 100);
    assert!(progress.is_complete());

    assert_eq!(progress.advance(), 100);
}

#[test]
fn it_types_one_character_at_a_time() {
    let mut typewriter = Typewriter::new("héllo");
    assert_eq!(typewriter.visible(), "");
    assert_eq!(typewriter.advance(), "h");
    assert_eq!(typewriter.advance(), "hé");

    for _ in 0..10 {
        typewriter.advance();
    }
    assert_eq!(typewriter.visible(), "héllo");
    assert!(typewriter.is_complete());
}

#[test]
fn it_keeps_the_last_fifty_glyphs() {
    let mut rain = MatrixRain::default();
    for i in 0..60u32 {
        rain.push(char::from_digit(i % 10, 10).unwrap());
    }

    assert_eq!(rain.len(), MATRIX_CAPACITY);
    assert_eq!(rain.glyphs().next(), Some(&'0'));
}

#[test]
fn it_draws_glyphs_from_the_alphabet() {
    for _ in 0..100 {
        assert!(MATRIX_ALPHABET.contains(MatrixRain::random_glyph()));
    }
}

#[test]
fn it_rotates_roles() {
    let mut roles = RoleRotator::default();
    assert_eq!(roles.current(), "Web Developer");
    for _ in 0..profile::ROLES.len() {
        roles.advance();
    }
    assert_eq!(roles.current(), "Web Developer");
}

#[tokio::test(start_paused = true)]
async fn test_progress_reaches_one_hundred_then_finishes_once() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = Preloader::start_progress(tx);

    let mut values = vec![];
    let mut finished = 0;
    while let Some(event) = rx.recv().await {
        match event {
            Event::PreloaderProgress(value) => values.push(value),
            Event::PreloaderFinished => finished += 1,
            other => panic!("unexpected event {other:?}"),
        }
    }

    assert_eq!(values.len(), 100);
    assert_eq!(values.first(), Some(&1));
    assert_eq!(values.last(), Some(&100));
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(finished, 1);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_progress_waits_before_finishing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = Preloader::start_progress(tx);

    // 100 ticks of 30ms, then the 500ms delay.
    time::sleep(Duration::from_millis(3_000 + 100)).await;
    let mut last = None;
    while let Ok(event) = rx.try_recv() {
        last = Some(event);
    }
    assert!(matches!(last, Some(Event::PreloaderProgress(100))));

    time::sleep(Duration::from_millis(500)).await;
    assert!(matches!(rx.try_recv(), Ok(Event::PreloaderFinished)));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_silences_all_preloader_timers() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let timers = Preloader::start(&tx);
    drop(tx);

    time::sleep(Duration::from_millis(250)).await;
    drop(timers);
    while rx.try_recv().is_ok() {}

    time::sleep(Duration::from_secs(10)).await;
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_stops_when_complete() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = Preloader::start_typewriter(tx, "abc");

    let mut frames = vec![];
    while let Some(Event::TypewriterFrame(frame)) = rx.recv().await {
        frames.push(frame);
    }

    assert_eq!(frames, vec!["a", "ab", "abc"]);
    assert!(handle.is_finished());
}
