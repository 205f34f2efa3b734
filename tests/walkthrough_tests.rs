//! End-to-end navigation scenarios driven through the public library API,
//! the same way the event loop drives it: a sequence of actions through
//! `update`, with the screen and current topic asserted along the way.

use primer::core::action::{Action, Effect, update};
use primer::core::catalog::Catalog;
use primer::core::state::{App, Screen};

#[test]
fn full_course_then_restart_then_backward_wrap() {
    let mut app = App::new(Catalog::builtin());
    assert_eq!(app.screen(), Screen::Front);

    // Start learning at the first topic.
    update(&mut app, Action::Start);
    assert_eq!(app.screen(), Screen::Learning);
    assert_eq!(app.current_topic().title, "Programming");

    // Four steps forward lands on the last topic, still learning.
    for _ in 0..4 {
        update(&mut app, Action::Next);
        assert_eq!(app.screen(), Screen::Learning);
    }
    assert_eq!(app.current_topic().title, "Conditionals");

    // One more step forward finishes; the cursor stays on the last topic.
    update(&mut app, Action::Next);
    assert_eq!(app.screen(), Screen::Done);
    assert_eq!(app.cursor(), 4);

    // Restart goes back to the front page at the first topic.
    update(&mut app, Action::Restart);
    assert_eq!(app.screen(), Screen::Front);
    assert_eq!(app.cursor(), 0);

    // Stepping backward from the first topic wraps to the last.
    update(&mut app, Action::Start);
    update(&mut app, Action::Previous);
    assert_eq!(app.screen(), Screen::Learning);
    assert_eq!(app.current_topic().title, "Conditionals");
}

#[test]
fn backward_navigation_never_finishes_the_course() {
    let mut app = App::new(Catalog::builtin());
    update(&mut app, Action::Start);

    // Two full backward laps: always Learning, cursor always in range.
    for _ in 0..10 {
        update(&mut app, Action::Previous);
        assert_eq!(app.screen(), Screen::Learning);
        assert!(app.cursor() < app.catalog.len());
    }
    assert_eq!(app.cursor(), 0);
}

#[test]
fn active_topic_tracks_the_cursor_through_mixed_navigation() {
    let mut app = App::new(Catalog::builtin());
    update(&mut app, Action::Start);

    for action in [
        Action::Next,
        Action::Next,
        Action::Previous,
        Action::Next,
        Action::Previous,
    ] {
        update(&mut app, action);
        let current = app.current_topic().title;
        for topic in app.catalog.iter() {
            assert_eq!(app.is_active(topic.title), topic.title == current);
        }
    }
}

#[test]
fn quit_is_available_from_any_screen() {
    // Front
    let mut app = App::new(Catalog::builtin());
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);

    // Learning
    let mut app = App::new(Catalog::builtin());
    update(&mut app, Action::Start);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);

    // Done
    let mut app = App::new(Catalog::builtin());
    update(&mut app, Action::Start);
    for _ in 0..5 {
        update(&mut app, Action::Next);
    }
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
