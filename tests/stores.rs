use chrono::{NaiveDate, NaiveTime};
use lunchbox::db::models::{MenuRecord, MessageRecord};
use lunchbox::Database;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn pairs(selections: &[(&str, &str)]) -> Vec<(String, String)> {
    selections
        .iter()
        .map(|(p, t)| (p.to_string(), t.to_string()))
        .collect()
}

#[tokio::test]
async fn resubmitting_votes_replaces_prior_selection() {
    let db = Database::open_in_memory().unwrap();

    db.submit_votes(
        day(22),
        "alice".into(),
        "devs".into(),
        pairs(&[("U Karla", "11:30"), ("U Karla", "12:00")]),
    )
    .await
    .unwrap();

    db.submit_votes(
        day(22),
        "alice".into(),
        "devs".into(),
        pairs(&[("Bistro", "12:30")]),
    )
    .await
    .unwrap();

    let votes = db.votes_for_day(day(22), "devs".into()).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].place, "Bistro");
    assert_eq!(votes[0].time, "12:30");
}

#[tokio::test]
async fn empty_selection_clears_vote() {
    let db = Database::open_in_memory().unwrap();

    db.submit_votes(
        day(22),
        "alice".into(),
        "devs".into(),
        pairs(&[("U Karla", "11:30")]),
    )
    .await
    .unwrap();

    db.submit_votes(day(22), "alice".into(), "devs".into(), Vec::new())
        .await
        .unwrap();

    let votes = db.votes_for_day(day(22), "devs".into()).await.unwrap();
    assert!(votes.is_empty());
}

#[tokio::test]
async fn votes_are_scoped_by_key_and_keep_per_user_rows() {
    let db = Database::open_in_memory().unwrap();

    let selection = pairs(&[("U Karla", "11:30")]);
    db.submit_votes(day(22), "alice".into(), "devs".into(), selection.clone())
        .await
        .unwrap();
    db.submit_votes(day(22), "bob".into(), "devs".into(), selection.clone())
        .await
        .unwrap();
    db.submit_votes(day(22), "carol".into(), "sales".into(), selection.clone())
        .await
        .unwrap();
    db.submit_votes(day(23), "dave".into(), "devs".into(), selection)
        .await
        .unwrap();

    let votes = db.votes_for_day(day(22), "devs".into()).await.unwrap();
    let mut users: Vec<&str> = votes.iter().map(|v| v.username.as_str()).collect();
    users.sort();
    assert_eq!(users, vec!["alice", "bob"]);
}

#[tokio::test]
async fn concurrent_submits_leave_exactly_one_selection() {
    let db = Database::open_in_memory().unwrap();

    let first = pairs(&[("U Karla", "11:30"), ("U Karla", "12:00")]);
    let second = pairs(&[("Bistro", "12:30")]);

    let db_a = db.clone();
    let sel_a = first.clone();
    let task_a = tokio::spawn(async move {
        db_a.submit_votes(day(22), "alice".into(), "devs".into(), sel_a)
            .await
    });
    let db_b = db.clone();
    let sel_b = second.clone();
    let task_b = tokio::spawn(async move {
        db_b.submit_votes(day(22), "alice".into(), "devs".into(), sel_b)
            .await
    });
    task_a.await.unwrap().unwrap();
    task_b.await.unwrap().unwrap();

    let votes = db.votes_for_day(day(22), "devs".into()).await.unwrap();
    let mut stored: Vec<(String, String)> = votes
        .into_iter()
        .map(|v| (v.place, v.time))
        .collect();
    stored.sort();

    let mut first_sorted = first;
    first_sorted.sort();
    let mut second_sorted = second;
    second_sorted.sort();

    assert!(
        stored == first_sorted || stored == second_sorted,
        "stored selection is a mix: {stored:?}"
    );
}

#[tokio::test]
async fn replace_menus_drops_previous_snapshot() {
    let db = Database::open_in_memory().unwrap();

    let first = vec![MenuRecord {
        date: day(21),
        category: "U Karla".into(),
        item: "Kulajda".into(),
    }];
    let second = vec![
        MenuRecord {
            date: day(22),
            category: "U Karla".into(),
            item: "Polévka Kulajda".into(),
        },
        MenuRecord {
            date: day(22),
            category: "Bistro".into(),
            item: "Hlavní Řízek".into(),
        },
    ];

    db.replace_menus(first).await.unwrap();
    db.replace_menus(second).await.unwrap();

    assert!(db.menus_for_date(day(21)).await.unwrap().is_empty());
    let grouped = db.menus_for_date(day(22)).await.unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, "U Karla");
    assert_eq!(grouped[1].0, "Bistro");
}

#[tokio::test]
async fn menus_group_in_first_seen_order() {
    let db = Database::open_in_memory().unwrap();

    let records = vec![
        MenuRecord {
            date: day(22),
            category: "U Karla".into(),
            item: "první".into(),
        },
        MenuRecord {
            date: day(22),
            category: "Bistro".into(),
            item: "a".into(),
        },
        MenuRecord {
            date: day(22),
            category: "U Karla".into(),
            item: "druhý".into(),
        },
    ];
    db.replace_menus(records).await.unwrap();

    let grouped = db.menus_for_date(day(22)).await.unwrap();
    assert_eq!(grouped[0].0, "U Karla");
    let items: Vec<&str> = grouped[0].1.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["první", "druhý"]);
}

#[tokio::test]
async fn messages_come_back_newest_first() {
    let db = Database::open_in_memory().unwrap();

    let message = |t: NaiveTime, text: &str| MessageRecord {
        date: day(22),
        time: t,
        username: "alice".into(),
        group: "devs".into(),
        text: text.into(),
    };

    db.append_message(message(time(11, 0), "early")).await.unwrap();
    db.append_message(message(time(12, 30), "late")).await.unwrap();
    db.append_message(message(time(12, 30), "latest, same second"))
        .await
        .unwrap();

    let messages = db.messages_for_day(day(22), "devs".into()).await.unwrap();
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["latest, same second", "late", "early"]);
}

#[tokio::test]
async fn messages_filter_by_date_and_group() {
    let db = Database::open_in_memory().unwrap();

    db.append_message(MessageRecord {
        date: day(22),
        time: time(11, 0),
        username: "alice".into(),
        group: "devs".into(),
        text: "ours".into(),
    })
    .await
    .unwrap();
    db.append_message(MessageRecord {
        date: day(22),
        time: time(11, 1),
        username: "carol".into(),
        group: "sales".into(),
        text: "theirs".into(),
    })
    .await
    .unwrap();

    let messages = db.messages_for_day(day(22), "devs".into()).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "ours");
}
