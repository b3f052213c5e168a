//! Navigation invariants over every short sequence of events.

use forumdeck::state::{MainView, NavEvent, Navigator, View};

fn events() -> Vec<NavEvent> {
    vec![
        NavEvent::SelectMainView(MainView::Latest),
        NavEvent::SelectMainView(MainView::Categories),
        NavEvent::SelectTopic(7),
        NavEvent::SelectTopic(0),
        NavEvent::SelectCategory {
            id: 4,
            slug: "general".to_string(),
        },
        NavEvent::SelectCategory {
            id: 0,
            slug: String::new(),
        },
        NavEvent::Back,
    ]
}

/// Every sequence of `depth` events, as indexes into `events()`.
fn sequences(alphabet: usize, depth: u32) -> impl Iterator<Item = Vec<usize>> {
    (0..alphabet.pow(depth)).map(move |mut n| {
        (0..depth)
            .map(|_| {
                let i = n % alphabet;
                n /= alphabet;
                i
            })
            .collect()
    })
}

#[test]
fn test_state_is_always_consistent() {
    let alphabet = events();
    for seq in sequences(alphabet.len(), 6) {
        let mut nav = Navigator::new();
        for &i in &seq {
            nav.apply(alphabet[i].clone());
            assert!(
                nav.state().is_consistent(),
                "inconsistent after {:?}: {:?}",
                seq,
                nav.state()
            );
        }
    }
}

#[test]
fn test_back_returns_to_the_right_place() {
    let alphabet = events();
    for seq in sequences(alphabet.len(), 6) {
        let mut nav = Navigator::new();
        // Independent model: did the current topic come from a category list?
        let mut topic_from_category = false;

        for &i in &seq {
            let before = nav.view();
            let event = alphabet[i].clone();
            let changed = nav.apply(event.clone());

            match (&event, before) {
                (NavEvent::SelectTopic(_), from) if changed => {
                    topic_from_category = from == View::CategoryDetail;
                }
                (NavEvent::Back, View::TopicDetail) => {
                    let expected = if topic_from_category {
                        View::CategoryDetail
                    } else {
                        View::Latest
                    };
                    assert_eq!(nav.view(), expected, "after {:?}", seq);
                    assert_eq!(nav.state().selected_topic_id, None);
                }
                (NavEvent::Back, View::CategoryDetail) => {
                    assert_eq!(nav.view(), View::Categories, "after {:?}", seq);
                    assert_eq!(nav.state().selected_category_id, None);
                    assert_eq!(nav.state().selected_category_slug, None);
                }
                (NavEvent::SelectMainView(view), _) => {
                    assert_eq!(nav.view(), View::from(*view));
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_rejected_events_do_not_change_state() {
    let alphabet = events();
    for seq in sequences(alphabet.len(), 4) {
        let mut nav = Navigator::new();
        for &i in &seq {
            let before = nav.state();
            if !nav.apply(alphabet[i].clone()) {
                assert_eq!(nav.state(), before);
            }
        }
    }
}

#[test]
fn test_topic_remembers_category_context() {
    let mut nav = Navigator::new();
    nav.apply(NavEvent::SelectMainView(MainView::Categories));
    nav.apply(NavEvent::SelectCategory {
        id: 4,
        slug: "general".to_string(),
    });
    nav.apply(NavEvent::SelectTopic(7));

    let state = nav.state();
    assert_eq!(state.current_view, View::TopicDetail);
    assert_eq!(state.selected_topic_id, Some(7));
    assert_eq!(state.selected_category_id, Some(4));
    assert_eq!(state.selected_category_slug.as_deref(), Some("general"));
}
