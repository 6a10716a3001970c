use std::collections::HashSet;

use fut5_teams::roster::Player;
use fut5_teams::split::{build_split, canonical_key, resolve, Submission};

const ROSTER: [&str; 10] = [
    "Ana", "Bea", "Cid", "Dan", "Ema", "Fio", "Gil", "Hal", "Ivo", "Joe",
];

fn players(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Player {
            id: format!("p{}", i),
            name: n.to_string(),
        })
        .collect()
}

fn sub(id: &str, author: &str, team_a: &[&str], roster: &[Player]) -> Submission {
    let selected: HashSet<String> = team_a.iter().map(|n| n.to_string()).collect();
    Submission {
        id: id.to_string(),
        author: author.to_string(),
        split: build_split(&selected, roster),
        created_at: 0,
    }
}

#[test]
fn empty_log_has_no_consensus() {
    let all = players(&ROSTER);
    assert!(resolve(&[], &all).is_none());
}

#[test]
fn majority_wins_with_its_vote_count() {
    let all = players(&ROSTER);
    let top = ["Ana", "Bea", "Cid", "Dan", "Ema"];
    let mid = ["Ana", "Bea", "Cid", "Dan", "Fio"];
    let low = ["Ana", "Bea", "Cid", "Ema", "Gil"];

    let mut log = Vec::new();
    for i in 0..5 {
        log.push(sub(&format!("t{}", i), "a", &top, &all));
    }
    for i in 0..3 {
        log.push(sub(&format!("m{}", i), "b", &mid, &all));
    }
    for i in 0..2 {
        log.push(sub(&format!("l{}", i), "c", &low, &all));
    }

    let result = resolve(&log, &all).expect("ten submissions should resolve");
    assert_eq!(result.votes, 5);
    assert_eq!(
        canonical_key(&result.split),
        canonical_key(&log[0].split)
    );
}

#[test]
fn tie_keeps_the_group_seen_first() {
    let all = players(&ROSTER);
    let red = ["Ana", "Bea", "Cid", "Dan", "Ema"];
    let blue = ["Fio", "Gil", "Hal", "Ana", "Bea"];

    // Two votes each; the red group is encountered first in scan order.
    let log = vec![
        sub("s1", "w", &red, &all),
        sub("s2", "x", &blue, &all),
        sub("s3", "y", &blue, &all),
        sub("s4", "z", &red, &all),
    ];

    let first = resolve(&log, &all).unwrap();
    assert_eq!(first.votes, 2);
    assert_eq!(canonical_key(&first.split), canonical_key(&log[0].split));

    // Same input order, same winner every time.
    for _ in 0..5 {
        let again = resolve(&log, &all).unwrap();
        assert_eq!(canonical_key(&again.split), canonical_key(&first.split));
    }
}

#[test]
fn complement_submissions_count_as_one_split() {
    // X picks a team, Y picks its complement; together that is two votes
    // for the same partition.
    let all = players(&ROSTER);
    let log = vec![
        sub("s1", "X", &["Ana", "Bea", "Cid", "Dan", "Ema"], &all),
        sub("s2", "Y", &["Fio", "Gil", "Hal", "Ivo", "Joe"], &all),
    ];

    let result = resolve(&log, &all).unwrap();
    assert_eq!(result.votes, 2);
    assert_eq!(canonical_key(&result.split), canonical_key(&log[0].split));
}

#[test]
fn winning_split_is_normalized_for_display() {
    let all = players(&ROSTER);
    // Submitter's team A is the "high" half; display should still lead
    // with the side holding the lexicographically first name.
    let log = vec![sub("s1", "w", &["Joe", "Ivo", "Hal", "Gil", "Fio"], &all)];

    let result = resolve(&log, &all).unwrap();
    let a: Vec<&str> = result.split.team_a.iter().map(|p| p.name.as_str()).collect();
    let b: Vec<&str> = result.split.team_b.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(a, ["Ana", "Bea", "Cid", "Dan", "Ema"]);
    assert_eq!(b, ["Fio", "Gil", "Hal", "Ivo", "Joe"]);
}

#[test]
fn renamed_players_are_dropped_from_display() {
    let all = players(&ROSTER);
    let log = vec![sub("s1", "w", &["Ana", "Bea", "Cid", "Dan", "Ema"], &all)];

    // "Ema" was renamed after the submission went in.
    let renamed = players(&[
        "Ana", "Bea", "Cid", "Dan", "Emma", "Fio", "Gil", "Hal", "Ivo", "Joe",
    ]);

    let result = resolve(&log, &renamed).unwrap();
    assert_eq!(result.votes, 1);
    let a: Vec<&str> = result.split.team_a.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(a, ["Ana", "Bea", "Cid", "Dan"]);
    assert_eq!(result.split.team_b.len(), 5);
}
