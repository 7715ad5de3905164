use quantduo_core::model::{CategoryFilter, ChallengeId, Difficulty, TimeFilter};
use quantduo_core::time::fixed_clock;
use services::{AppServices, PracticeError};

fn app() -> AppServices {
    AppServices::seeded(fixed_clock()).unwrap()
}

#[test]
fn seeded_practice_tab_contents() {
    let app = app();
    let practice = app.practice();

    assert_eq!(practice.strategies().len(), 3);
    assert_eq!(practice.challenges().len(), 4);

    // The pairs-trading challenge ships already completed.
    let open = practice.open_challenges();
    assert_eq!(open.len(), 3);
    assert!(open.iter().all(|c| !c.is_completed()));

    let intermediate = practice.challenges_by_difficulty(Difficulty::Intermediate);
    assert_eq!(intermediate.len(), 2);

    let momentum = practice.strategies_with_tag("momentum");
    assert_eq!(momentum.len(), 1);
    assert_eq!(momentum[0].name(), "Momentum Stocks");
}

#[test]
fn challenge_requirements_then_completion() {
    let mut app = app();
    let id = ChallengeId::new("chal-1");

    assert!(!app.practice().challenge(&id).unwrap().requirements_met());
    for index in 0..4 {
        app.check_challenge_requirement(&id, index).unwrap();
    }
    assert!(app.practice().challenge(&id).unwrap().requirements_met());

    let xp_before = app.profile().profile().xp();
    let done_before = app.profile().profile().challenges_completed();

    let reward = app.complete_challenge(&id).unwrap();
    assert_eq!(reward, 100);
    assert_eq!(app.profile().profile().xp(), xp_before + 100);
    assert_eq!(app.profile().profile().challenges_completed(), done_before + 1);
    assert!(app.practice().challenge(&id).unwrap().is_completed());
}

#[test]
fn completed_challenge_pays_no_second_reward() {
    let mut app = app();
    let xp_before = app.profile().profile().xp();

    // chal-4 ships completed.
    let err = app.complete_challenge(&ChallengeId::new("chal-4")).unwrap_err();
    assert!(matches!(err, services::AppError::Practice(_)));
    assert_eq!(app.profile().profile().xp(), xp_before);
}

#[test]
fn requirement_index_out_of_range_is_reported() {
    let mut app = app();
    let err = app
        .check_challenge_requirement(&ChallengeId::new("chal-1"), 9)
        .unwrap_err();
    assert!(matches!(
        err,
        services::AppError::Practice(PracticeError::Challenge(_))
    ));
}

#[test]
fn leaderboard_filters_over_seeded_entries() {
    let app = app();
    let board = app.leaderboard();

    let weekly = board.standings(TimeFilter::Weekly, CategoryFilter::All);
    assert_eq!(weekly[0].entry.name(), "Sarah K.");
    assert_eq!(weekly[0].score, 4850);
    assert_eq!(
        board.current_user_rank(TimeFilter::Weekly, CategoryFilter::All),
        Some(4)
    );

    // Monthly points reorder the top two.
    let monthly = board.standings(TimeFilter::Monthly, CategoryFilter::All);
    assert_eq!(monthly[0].entry.name(), "Michael T.");

    // Activity categories re-rank by the matching weekly counts.
    let learning = board.standings(TimeFilter::Weekly, CategoryFilter::Learning);
    assert_eq!(learning[0].entry.name(), "Jessica L.");
    assert_eq!(learning[0].score, 15);
    let strategies = board.standings(TimeFilter::Weekly, CategoryFilter::Strategies);
    assert_eq!(strategies[0].entry.name(), "Michael T.");

    let friends = board.standings(TimeFilter::Weekly, CategoryFilter::Friends);
    let names: Vec<&str> = friends.iter().map(|r| r.entry.name()).collect();
    assert_eq!(names, ["Sarah K.", "Jessica L.", "You"]);

    let hits = board.search("jes");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name(), "Jessica L.");
}
